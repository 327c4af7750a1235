//! Application state for the LPA scheduling API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::SchedulerConfig;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded scheduling policy.
#[derive(Clone)]
pub struct AppState {
    /// The loaded scheduling policy.
    config: Arc<SchedulerConfig>,
}

impl AppState {
    /// Creates a new application state with the given scheduling policy.
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the scheduling policy.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }
}
