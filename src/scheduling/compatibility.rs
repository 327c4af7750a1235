//! Shift compatibility predicate.
//!
//! Decides whether a pair of auditors can jointly cover a target shift slot.

use crate::models::ShiftCode;

/// Returns true when a pair working shifts `a` and `b` can cover a slot
/// targeting `target`.
///
/// The slot is covered if either member normally works the target shift;
/// both matching is not required. Pure, total, and symmetric in `a` and `b`.
///
/// # Example
///
/// ```
/// use lpa_engine::models::ShiftCode;
/// use lpa_engine::scheduling::is_shift_compatible;
///
/// assert!(is_shift_compatible(ShiftCode::First, ShiftCode::Third, ShiftCode::Third));
/// assert!(!is_shift_compatible(ShiftCode::First, ShiftCode::Third, ShiftCode::Second));
/// ```
pub fn is_shift_compatible(a: ShiftCode, b: ShiftCode, target: ShiftCode) -> bool {
    target == a || target == b
}
