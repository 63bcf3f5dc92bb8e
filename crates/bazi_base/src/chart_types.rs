//! Configuration and result types for the pillar calculator.

use bazi_time::CivilDate;
use serde::Serialize;

use crate::pillar::FourPillars;
use crate::solar_term::SolarTerm;

/// When the Bazi day rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayBoundary {
    /// The day starts at 23:00: a birth in the 23rd hour takes the next
    /// civil day's day pillar.
    #[default]
    LateZi,
    /// The day starts at civil midnight; 23:00-23:59 stays on the same day
    /// (its hour is still 子, with the stem taken from that day).
    Midnight,
}

/// How to treat civil years outside the solar-term coefficient range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearRangePolicy {
    /// Reject civil birth years outside 1900-2099 with `YearOutOfRange`.
    ///
    /// Only the civil year of the birth is checked. A birth before 小寒 in
    /// January 1900 still falls in the 子 month that starts with the
    /// previous year's 大雪, whose date comes from the 1899 estimate.
    #[default]
    Strict,
    /// Apply the formula anyway and log a warning.
    Extrapolate,
}

/// Configuration for [`crate::PillarCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartConfig {
    pub day_boundary: DayBoundary,
    pub year_range: YearRangePolicy,
}

impl ChartConfig {
    pub fn new(day_boundary: DayBoundary, year_range: YearRangePolicy) -> Self {
        Self {
            day_boundary,
            year_range,
        }
    }
}

/// The four pillars together with how they were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarChart {
    pub pillars: FourPillars,
    /// Year that starts at the 立春 on or before the birth date.
    pub bazi_year: i32,
    /// Solar term that opened the birth month.
    pub month_term: SolarTerm,
    /// Estimated civil date of `month_term`.
    pub month_start: CivilDate,
    /// Civil date used for the day cycle (the next day for late-Zi births).
    pub effective_date: CivilDate,
    /// Days from the 2001-01-01 甲子 epoch to `effective_date`.
    pub day_offset: i64,
}
