//! Core data models for the LPA scheduling engine.
//!
//! This module contains all the domain models used throughout the engine.

mod assignment;
mod auditor;
mod pairing;
mod period;
mod shift;

pub use assignment::{Assignment, AuditorRef, MAX_TEAM_SIZE};
pub use auditor::Auditor;
pub use pairing::{PairingHistory, PairingRecord};
pub use period::Period;
pub use shift::ShiftCode;
