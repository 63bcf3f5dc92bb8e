//! Gregorian to sexagenary four-pillar (八字) conversion.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches as fixed enums
//! - A solar-term day estimator (empirical coefficients, 1900-2099)
//! - Year, month, day and hour pillar resolvers
//! - `PillarCalculator`, composing them into one `(date, hour)` call
//!
//! Every calculation is a pure function of its inputs: no I/O, no shared
//! state, safe to call from any number of threads.
//!
//! ```
//! use bazi_base::four_pillars;
//!
//! let chart = four_pillars("2008-08-08", 20).unwrap();
//! assert_eq!(chart.to_string(), "戊子 庚申 庚辰 丙戌");
//! ```

pub mod branch;
pub mod chart;
pub mod chart_types;
pub mod day;
pub mod error;
pub mod hour;
pub mod month;
pub mod pillar;
pub mod solar_term;
pub mod stem;
pub mod util;
pub mod year;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use chart::{PillarCalculator, four_pillars};
pub use chart_types::{ChartConfig, DayBoundary, PillarChart, YearRangePolicy};
pub use day::{DAY_CYCLE_EPOCH, DayPillar, day_pillar};
pub use error::BaziError;
pub use hour::{ZI_HOUR_STEMS, hour_branch, hour_pillar, zi_hour_stem};
pub use month::{MONTH_BOUNDARIES, MonthBoundary, MonthPillar, month_pillar, month_stem};
pub use pillar::{ALL_SLOTS, FourPillars, Pillar, PillarSlot};
pub use solar_term::{
    ALL_SOLAR_TERMS, SUPPORTED_YEARS, SolarTerm, is_supported_year, solar_term_date,
    solar_term_day, solar_terms_for_year,
};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use util::cycle_index;
pub use year::{YEAR_CYCLE_EPOCH, YearPillar, bazi_year, pillar_for_bazi_year, year_pillar};

// Re-export the input types so callers need only this crate.
pub use bazi_time::{BirthInstant, CivilDate, TimeError};
