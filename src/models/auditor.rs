//! Auditor roster model.
//!
//! An auditor is a plant employee eligible to perform layered process
//! audits. Identity is the stable `id`; the display name exists for reports
//! and carries no uniqueness guarantee.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ShiftCode;

/// A plant employee eligible to perform layered process audits.
///
/// Counts, history records, and membership checks all key on `id`. Two
/// distinct auditors may legally share a display name.
///
/// # Example
///
/// ```
/// use lpa_engine::models::{Auditor, ShiftCode};
/// use uuid::Uuid;
///
/// let auditor = Auditor {
///     id: Uuid::new_v4(),
///     first_name: "Mara".to_string(),
///     last_name: "Lindqvist".to_string(),
///     role: "Quality".to_string(),
///     shift: ShiftCode::Second,
///     active: true,
/// };
/// assert_eq!(auditor.display_name(), "Mara Lindqvist");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auditor {
    /// Stable identifier used throughout the engine.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Free-text role category, e.g. "Quality" or "Production".
    pub role: String,
    /// The shift this auditor normally works.
    pub shift: ShiftCode,
    /// Whether the auditor participates in scheduling runs.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Auditor {
    /// Returns the display name, `"<first> <last>"`.
    ///
    /// For reports and logs only; never used as a key.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
