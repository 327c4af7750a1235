//! Per-auditor load summary.
//!
//! Derived from the final assignment list for the reporting collaborator:
//! one row per roster member with their LPA count and unique-section count.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Assignment, Auditor};

/// Load figures for one auditor after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditorLoad {
    /// Stable auditor identifier.
    pub auditor_id: Uuid,
    /// Display name at scheduling time.
    pub name: String,
    /// Number of assignments the auditor appears in.
    pub lpa_count: u32,
    /// Number of distinct sections among those assignments.
    pub unique_sections: u32,
}

/// Per-auditor load summary over one run's assignment list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// One row per roster member, sorted by display name (ties by id).
    pub auditors: Vec<AuditorLoad>,
}

impl LoadSummary {
    /// Calculates the summary for `roster` over `assignments`.
    ///
    /// Every roster member gets a row, zero-filled when unassigned, so
    /// shortfalls show up instead of disappearing. Rows are sorted by display
    /// name with ties broken by id, giving stable output across runs.
    pub fn calculate(assignments: &[Assignment], roster: &[Auditor]) -> Self {
        let mut auditors: Vec<AuditorLoad> = roster
            .iter()
            .map(|auditor| {
                let mut lpa_count = 0;
                let mut sections = HashSet::new();
                for assignment in assignments {
                    if assignment.includes(auditor.id) {
                        lpa_count += 1;
                        sections.insert(assignment.section.as_str());
                    }
                }
                AuditorLoad {
                    auditor_id: auditor.id,
                    name: auditor.display_name(),
                    lpa_count,
                    unique_sections: sections.len() as u32,
                }
            })
            .collect();

        auditors.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.auditor_id.cmp(&b.auditor_id))
        });

        LoadSummary { auditors }
    }

    /// Returns the row for the given auditor, if present.
    pub fn for_auditor(&self, id: Uuid) -> Option<&AuditorLoad> {
        self.auditors.iter().find(|load| load.auditor_id == id)
    }

    /// Sum of all LPA counts across the roster.
    ///
    /// Equals the sum of team sizes over all assignments when the roster
    /// covers every assigned auditor.
    pub fn total_lpas(&self) -> u32 {
        self.auditors.iter().map(|load| load.lpa_count).sum()
    }
}
