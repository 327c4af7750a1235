//! Error types for the LPA scheduling engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur around a scheduling run. The run
//! itself degrades gracefully instead of erroring; these variants cover
//! configuration loading and caller-side input validation.

use thiserror::Error;

/// The main error type for the LPA scheduling engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use lpa_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift code was outside the recognized set.
    #[error("Unknown shift code {value}: expected 1, 2, or 3")]
    UnknownShift {
        /// The shift code that was rejected.
        value: u8,
    },

    /// A scheduling period carried an out-of-range month.
    #[error("Invalid scheduling period: month {month} is not in 1-12")]
    InvalidPeriod {
        /// The month value that was rejected.
        month: u32,
    },

    /// The roster does not have enough active auditors to form a pair.
    #[error("Roster too small: {active} active auditor(s), at least 2 required")]
    RosterTooSmall {
        /// The number of active auditors supplied.
        active: usize,
    },

    /// No audit sections were supplied for the run.
    #[error("No audit sections supplied")]
    NoSections,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
