//! Layered Process Audit scheduling engine
//!
//! This crate generates monthly LPA schedules for a manufacturing plant:
//! pairs (or trios) of auditors are assigned to audit sections across shifts,
//! balancing workload and rotating who audits with whom.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduling;
