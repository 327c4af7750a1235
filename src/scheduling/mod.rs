//! Scheduling logic for the LPA engine.
//!
//! This module contains the whole assignment pipeline: the shift
//! compatibility predicate, the pair scoring function with its recency
//! penalty, the three-pass scheduler that fills (section, shift) slots with
//! pairs and trios, and the per-auditor load summary derived from the final
//! assignment list.

mod compatibility;
mod engine;
mod scoring;
mod summary;

pub use compatibility::is_shift_compatible;
pub use engine::{CoverageWarning, ScheduleInput, ScheduleOutcome, Scheduler};
pub use scoring::score_pair;
pub use summary::{AuditorLoad, LoadSummary};
