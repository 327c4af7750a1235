//! Shift code model.
//!
//! Plant shifts form a small closed set identified on the wire by the
//! integers 1, 2, and 3. `ShiftCode` gives them a typed representation so the
//! rest of the engine cannot hold an out-of-range shift.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the three plant shifts an auditor can work.
///
/// Serialized as the bare integers `1`, `2`, and `3`, matching the roster and
/// history data produced by upstream systems.
///
/// # Example
///
/// ```
/// use lpa_engine::models::ShiftCode;
///
/// let shift: ShiftCode = serde_json::from_str("2").unwrap();
/// assert_eq!(shift, ShiftCode::Second);
/// assert_eq!(u8::from(shift), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ShiftCode {
    /// First shift.
    First = 1,
    /// Second shift.
    Second = 2,
    /// Third shift.
    Third = 3,
}

impl ShiftCode {
    /// All shift codes in wire order.
    pub const ALL: [ShiftCode; 3] = [ShiftCode::First, ShiftCode::Second, ShiftCode::Third];
}

impl TryFrom<u8> for ShiftCode {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ShiftCode::First),
            2 => Ok(ShiftCode::Second),
            3 => Ok(ShiftCode::Third),
            _ => Err(EngineError::UnknownShift { value }),
        }
    }
}

impl From<ShiftCode> for u8 {
    fn from(shift: ShiftCode) -> Self {
        shift as u8
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
