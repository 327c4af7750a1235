//! Scheduling period model.
//!
//! A period identifies one monthly scheduling run and provides the
//! whole-month distance measure behind the pairing lock.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A (month, year) pair identifying one scheduling run.
///
/// Periods are plain values: they are never persisted on their own and only
/// matter as the timestamp on pairing records and the anchor for recency
/// checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl Period {
    /// Creates a period, rejecting out-of-range months.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when `month` is not in 1-12.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod { month });
        }
        Ok(Period { month, year })
    }

    /// Builds the period containing the given calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Period {
            month: date.month(),
            year: date.year(),
        }
    }

    /// Absolute distance between two periods in whole months.
    ///
    /// Computed as `abs((y1 - y2) * 12 + (m1 - m2))`; symmetric in its
    /// operands.
    ///
    /// # Example
    ///
    /// ```
    /// use lpa_engine::models::Period;
    ///
    /// let nov = Period::new(11, 2025).unwrap();
    /// let feb = Period::new(2, 2026).unwrap();
    /// assert_eq!(nov.months_between(feb), 3);
    /// assert_eq!(feb.months_between(nov), 3);
    /// ```
    pub fn months_between(self, other: Period) -> u32 {
        let months = (self.year as i64 - other.year as i64) * 12
            + (self.month as i64 - other.month as i64);
        months.unsigned_abs() as u32
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
