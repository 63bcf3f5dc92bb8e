//! Proleptic Gregorian civil date.
//!
//! Thin wrapper over `chrono::NaiveDate` that keeps validation errors in
//! [`TimeError`] and exposes only what the pillar arithmetic needs: the
//! y/m/d components, the next civil day, and exact day differences.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::TimeError;

/// A validated civil date (no time, no offset).
///
/// Serialises as `"YYYY-MM-DD"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Build a date from components, rejecting impossible days (e.g. Feb 30).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| TimeError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        s.parse()
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of year, 1..=12.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of month, 1..=31.
    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn ymd(self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day())
    }

    /// The following civil day.
    ///
    /// Only fails at the very end of chrono's representable range.
    pub fn next_day(self) -> Result<Self, TimeError> {
        self.0
            .succ_opt()
            .map(Self)
            .ok_or_else(|| TimeError::InvalidDate(format!("{self} has no following day")))
    }

    /// Whole days from `earlier` to `self` (negative when `self` is earlier).
    ///
    /// Both dates are midnight-aligned, so the count is exact.
    pub fn days_since(self, earlier: CivilDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| TimeError::InvalidDate(format!("{s}: {e}")))
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
