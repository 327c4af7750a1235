//! Candidate pair scoring.
//!
//! Computes the additive cost of pairing two auditors for a target period.
//! Lower is better; all weights come from the scheduling policy.

use crate::config::SchedulerConfig;
use crate::models::{Auditor, PairingHistory, Period};

/// Scores a candidate pair of auditors against the target period.
///
/// The cost starts at zero and adds, per the configured weights:
///
/// * `same_role` when the two share a role (cross-role pairing preferred),
/// * `same_shift` when the two work the same shift,
/// * `recent_pairing` when the pair appears in `history` strictly inside the
///   pairing lock window.
///
/// The recency weight dominates the others, so a recently-paired couple only
/// wins a slot when no alternative pair is eligible. Deterministic for fixed
/// inputs; no side effects.
///
/// # Example
///
/// ```
/// use lpa_engine::config::SchedulerConfig;
/// use lpa_engine::models::{Auditor, PairingHistory, Period, ShiftCode};
/// use lpa_engine::scheduling::score_pair;
/// use uuid::Uuid;
///
/// let make = |role: &str, shift| Auditor {
///     id: Uuid::new_v4(),
///     first_name: "A".to_string(),
///     last_name: "B".to_string(),
///     role: role.to_string(),
///     shift,
///     active: true,
/// };
/// let a = make("Quality", ShiftCode::First);
/// let b = make("Quality", ShiftCode::First);
///
/// let score = score_pair(
///     &a,
///     &b,
///     &PairingHistory::new(),
///     Period::new(3, 2026).unwrap(),
///     &SchedulerConfig::default(),
/// );
/// assert_eq!(score, 15); // same role (10) + same shift (5)
/// ```
pub fn score_pair(
    a: &Auditor,
    b: &Auditor,
    history: &PairingHistory,
    period: Period,
    config: &SchedulerConfig,
) -> u32 {
    let mut score = 0;

    if a.role == b.role {
        score += config.weights.same_role;
    }
    if a.shift == b.shift {
        score += config.weights.same_shift;
    }
    if history.paired_within(a.id, b.id, period, config.pairing_lock_months) {
        score += config.weights.recent_pairing;
    }

    score
}
