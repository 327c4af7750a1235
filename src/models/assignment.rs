//! Audit assignment model.
//!
//! An assignment is one (section, target shift) slot together with the two
//! or three auditors covering it for the period.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Auditor, ShiftCode};

/// Upper bound on the number of auditors in one assignment.
pub const MAX_TEAM_SIZE: usize = 3;

/// Reference to one auditor on an assignment roster.
///
/// Carries the stable id for machine consumers and the display name, frozen
/// at scheduling time, for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditorRef {
    /// Stable auditor identifier.
    pub id: Uuid,
    /// Display name at the time of scheduling.
    pub name: String,
}

impl From<&Auditor> for AuditorRef {
    fn from(auditor: &Auditor) -> Self {
        AuditorRef {
            id: auditor.id,
            name: auditor.display_name(),
        }
    }
}

/// One audit slot's final roster.
///
/// The auditor list always has two or three members; order within it carries
/// no meaning beyond display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The audited section.
    pub section: String,
    /// The shift slot being covered.
    pub target_shift: ShiftCode,
    /// The auditors covering this slot.
    pub auditors: Vec<AuditorRef>,
}

impl Assignment {
    /// Returns true when the auditor with `id` is on this roster.
    pub fn includes(&self, id: Uuid) -> bool {
        self.auditors.iter().any(|a| a.id == id)
    }

    /// Number of auditors on this roster.
    pub fn team_size(&self) -> usize {
        self.auditors.len()
    }
}
