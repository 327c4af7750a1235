//! HTTP request handlers for the LPA scheduling API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{PairingHistory, PairingRecord};
use crate::scheduling::{ScheduleInput, Scheduler};

use super::request::ScheduleRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", post(schedule_handler))
        .with_state(state)
}

/// Handler for POST /schedule endpoint.
///
/// Accepts a schedule request and returns the generated schedule. The
/// service is stateless: the pairing history travels in the request, and the
/// response carries the new pairings for the caller to persist.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::missing_field(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "INVALID_REQUEST",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::new("INVALID_REQUEST", "Failed to read request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let records: Vec<PairingRecord> = request.history.iter().cloned().map(Into::into).collect();
    let mut history = PairingHistory::from_records(records);
    let input: ScheduleInput = request.into();

    // Reject inputs the engine would only degrade on
    if let Err(err) = input.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Invalid schedule request"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let scheduler = Scheduler::with_config(state.config().clone());
    let outcome = scheduler.run(&input, &mut history);

    info!(
        correlation_id = %correlation_id,
        schedule_id = %outcome.schedule_id,
        period = %outcome.period,
        assignments = outcome.assignments.len(),
        new_pairings = outcome.new_pairings.len(),
        shortfalls = outcome.coverage.len(),
        duration_us = outcome.duration_us,
        "Schedule generated"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(outcome),
    )
        .into_response()
}
