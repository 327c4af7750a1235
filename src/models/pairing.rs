//! Pairing history model.
//!
//! Records which auditors have audited together and when, and answers the
//! recency query behind the pairing lock. The history is owned by the caller
//! and handed to the engine for each run; the engine only ever appends.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Period;

/// An unordered pair of auditors and the period they audited together.
///
/// Immutable once created; the two ids are always distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingRecord {
    /// One member of the pair.
    pub auditor_a: Uuid,
    /// The other member of the pair.
    pub auditor_b: Uuid,
    /// The period in which the pair audited together.
    pub period: Period,
}

impl PairingRecord {
    /// Creates a record for the given pair and period.
    pub fn new(auditor_a: Uuid, auditor_b: Uuid, period: Period) -> Self {
        PairingRecord {
            auditor_a,
            auditor_b,
            period,
        }
    }

    /// Returns true when this record pairs `x` with `y`, in either order.
    pub fn involves(&self, x: Uuid, y: Uuid) -> bool {
        (self.auditor_a == x && self.auditor_b == y)
            || (self.auditor_a == y && self.auditor_b == x)
    }
}

/// Append-only collection of pairing records.
///
/// Explicitly passed to the engine for each run; retention and persistence
/// stay with the caller. Within a run the history only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairingHistory {
    records: Vec<PairingRecord>,
}

impl PairingHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        PairingHistory::default()
    }

    /// Wraps a record list loaded by a persistence collaborator.
    pub fn from_records(records: Vec<PairingRecord>) -> Self {
        PairingHistory { records }
    }

    /// Appends a record. Records are never edited or removed.
    pub fn record(&mut self, record: PairingRecord) {
        self.records.push(record);
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no pairings have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[PairingRecord] {
        &self.records
    }

    /// Returns true when `a` and `b` were paired strictly less than `months`
    /// whole months away from `period`.
    ///
    /// With the default 4-month lock, a pairing 0 to 3 months away matches
    /// and one exactly 4 months away does not.
    pub fn paired_within(&self, a: Uuid, b: Uuid, period: Period, months: u32) -> bool {
        self.records
            .iter()
            .any(|r| r.involves(a, b) && r.period.months_between(period) < months)
    }
}
