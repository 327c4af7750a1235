//! Scheduling policy configuration for the LPA engine.
//!
//! This module provides the strongly-typed scheduling policy (targets, lock
//! window, scoring weights, slot-ordering seed) and loads it from a YAML
//! file. Every knob has a default matching the reference policy, so an empty
//! file and `SchedulerConfig::default()` are equivalent.
//!
//! # Example
//!
//! ```no_run
//! use lpa_engine::config::SchedulerConfig;
//!
//! let config = SchedulerConfig::load("./config/scheduler.yaml").unwrap();
//! println!("LPA target per auditor: {}", config.lpa_target);
//! ```

mod loader;
mod types;

pub use types::{
    DEFAULT_LPA_TARGET, DEFAULT_PAIRING_LOCK_MONTHS, SchedulerConfig, ScoreWeights,
};
