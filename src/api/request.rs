//! Request types for the LPA scheduling API.
//!
//! This module defines the JSON request structures for the `/schedule` endpoint.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Auditor, PairingRecord, Period, ShiftCode};
use crate::scheduling::ScheduleInput;

/// Request body for the `/schedule` endpoint.
///
/// Contains the roster, the sections and shifts to cover, the period being
/// scheduled, and the caller's pairing history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The auditor roster for the period.
    pub auditors: Vec<AuditorRequest>,
    /// Audit sections to cover.
    pub sections: Vec<String>,
    /// Shift slots to cover per section. Defaults to all three shifts.
    #[serde(default = "default_shifts")]
    pub shifts: Vec<ShiftCode>,
    /// The month being scheduled.
    pub period: PeriodRequest,
    /// Past pairings the anti-repetition rule should see. Defaults to empty.
    #[serde(default)]
    pub history: Vec<PairingRecordRequest>,
}

fn default_shifts() -> Vec<ShiftCode> {
    ShiftCode::ALL.to_vec()
}

/// Auditor information in a schedule request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditorRequest {
    /// Unique identifier for the auditor.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Job role label (e.g. "Quality Engineer").
    pub role: String,
    /// The shift the auditor works.
    pub shift: ShiftCode,
    /// Whether the auditor is available this period.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Scheduling period in a schedule request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// Calendar month, 1 through 12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

/// A past pairing in a schedule request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingRecordRequest {
    /// One member of the pair.
    pub auditor_a: Uuid,
    /// The other member of the pair.
    pub auditor_b: Uuid,
    /// The period in which the pair audited together.
    pub period: PeriodRequest,
}

impl From<AuditorRequest> for Auditor {
    fn from(req: AuditorRequest) -> Self {
        Auditor {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            role: req.role,
            shift: req.shift,
            active: req.active,
        }
    }
}

impl From<PeriodRequest> for Period {
    fn from(req: PeriodRequest) -> Self {
        // Range checking happens in ScheduleInput::validate, not here.
        Period {
            month: req.month,
            year: req.year,
        }
    }
}

impl From<PairingRecordRequest> for PairingRecord {
    fn from(req: PairingRecordRequest) -> Self {
        PairingRecord {
            auditor_a: req.auditor_a,
            auditor_b: req.auditor_b,
            period: req.period.into(),
        }
    }
}

impl From<ScheduleRequest> for ScheduleInput {
    fn from(req: ScheduleRequest) -> Self {
        ScheduleInput {
            auditors: req.auditors.into_iter().map(Into::into).collect(),
            sections: req.sections,
            shifts: req.shifts,
            period: req.period.into(),
        }
    }
}
