//! HTTP API module for the LPA scheduling engine.
//!
//! This module provides the REST API endpoint for generating a monthly
//! audit schedule from a roster, section list, and pairing history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AuditorRequest, PairingRecordRequest, PeriodRequest, ScheduleRequest};
pub use response::ApiError;
pub use state::AppState;
