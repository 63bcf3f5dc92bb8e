//! Four-pillar calculator: composes the year, month, day and hour
//! resolvers into one `(date, hour) -> FourPillars` call.

use bazi_time::BirthInstant;
use tracing::{debug, warn};

use crate::chart_types::{ChartConfig, PillarChart, YearRangePolicy};
use crate::day::day_pillar;
use crate::error::BaziError;
use crate::hour::hour_pillar;
use crate::month::month_pillar;
use crate::pillar::FourPillars;
use crate::solar_term::{SUPPORTED_YEARS, is_supported_year, solar_term_date};
use crate::year::year_pillar;

/// Stateless calculator; cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PillarCalculator {
    config: ChartConfig,
}

impl PillarCalculator {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Full chart with derivation details.
    pub fn chart(&self, birth: &BirthInstant) -> Result<PillarChart, BaziError> {
        self.check_year(birth.year())?;

        let year = year_pillar(birth);
        let month = month_pillar(birth, year.bazi_year, year.pillar.stem);
        let day = day_pillar(birth, self.config.day_boundary)?;
        let hour = hour_pillar(birth.hour(), day.pillar.stem);

        let month_start = solar_term_date(month.term_year, month.boundary.term)?;

        debug!(
            %birth,
            bazi_year = year.bazi_year,
            month_term = month.boundary.term.name(),
            %month_start,
            day_offset = day.offset,
            "resolved chart"
        );

        Ok(PillarChart {
            pillars: FourPillars {
                year: year.pillar,
                month: month.pillar,
                day: day.pillar,
                hour,
            },
            bazi_year: year.bazi_year,
            month_term: month.boundary.term,
            month_start,
            effective_date: day.effective_date,
            day_offset: day.offset,
        })
    }

    /// The four pillars of `birth`.
    pub fn calculate(&self, birth: &BirthInstant) -> Result<FourPillars, BaziError> {
        self.chart(birth).map(|c| c.pillars)
    }

    fn check_year(&self, year: i32) -> Result<(), BaziError> {
        if is_supported_year(year) {
            return Ok(());
        }
        match self.config.year_range {
            YearRangePolicy::Strict => Err(BaziError::YearOutOfRange {
                year,
                min: *SUPPORTED_YEARS.start(),
                max: *SUPPORTED_YEARS.end(),
            }),
            YearRangePolicy::Extrapolate => {
                warn!(year, "solar-term estimate extrapolated outside 1900-2099");
                Ok(())
            }
        }
    }
}

/// Four pillars for a `YYYY-MM-DD` date and an hour, with the default config.
///
/// Fails with `InvalidDate` / `InvalidHour` (wrapped in [`BaziError::Time`])
/// on bad input.
pub fn four_pillars(date: &str, hour: u32) -> Result<FourPillars, BaziError> {
    let birth = BirthInstant::parse(date, hour)?;
    PillarCalculator::default().calculate(&birth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_types::DayBoundary;
    use crate::solar_term::SolarTerm;
    use bazi_time::{CivilDate, TimeError};

    fn birth(y: i32, m: u32, d: u32, h: u32) -> BirthInstant {
        BirthInstant::from_ymdh(y, m, d, h).unwrap()
    }

    #[test]
    fn olympic_opening() {
        let p = four_pillars("2008-08-08", 20).unwrap();
        assert_eq!(p.to_string(), "戊子 庚申 庚辰 丙戌");
    }

    #[test]
    fn chart_details() {
        let chart = PillarCalculator::default().chart(&birth(2024, 2, 3, 12)).unwrap();
        assert_eq!(chart.bazi_year, 2023);
        assert_eq!(chart.month_term, SolarTerm::XiaoHan);
        assert_eq!(chart.month_start, CivilDate::new(2024, 1, 5).unwrap());
        assert_eq!(chart.day_offset, 8433);
        assert_eq!(chart.pillars.to_string(), "癸卯 乙丑 丁酉 丙午");
    }

    #[test]
    fn invalid_hour() {
        assert!(matches!(
            four_pillars("2024-01-01", 24),
            Err(BaziError::Time(TimeError::InvalidHour(_)))
        ));
    }

    #[test]
    fn invalid_date() {
        assert!(matches!(
            four_pillars("2024-02-30", 5),
            Err(BaziError::Time(TimeError::InvalidDate(_)))
        ));
        assert!(matches!(
            four_pillars("not a date", 5),
            Err(BaziError::Time(TimeError::InvalidDate(_)))
        ));
    }

    #[test]
    fn strict_range_rejects_1899() {
        let err = PillarCalculator::default()
            .calculate(&birth(1899, 6, 1, 12))
            .unwrap_err();
        assert_eq!(
            err,
            BaziError::YearOutOfRange {
                year: 1899,
                min: 1900,
                max: 2099
            }
        );
    }

    #[test]
    fn strict_range_checks_civil_year_only() {
        let chart = PillarCalculator::default()
            .chart(&birth(1900, 1, 1, 0))
            .unwrap();
        assert_eq!(chart.month_term, SolarTerm::DaXue);
        assert_eq!(chart.month_start.year(), 1899);
        assert_eq!(chart.bazi_year, 1899);
    }

    #[test]
    fn extrapolate_allows_out_of_range() {
        let calc = PillarCalculator::new(ChartConfig::new(
            DayBoundary::LateZi,
            YearRangePolicy::Extrapolate,
        ));
        let p = calc.calculate(&birth(2150, 6, 1, 12)).unwrap();
        assert_eq!(p.year.to_string(), "庚戌");
    }

    #[test]
    fn midnight_boundary_changes_only_day_and_hour() {
        let b = birth(2024, 6, 15, 23);
        let late_zi = PillarCalculator::default().calculate(&b).unwrap();
        let midnight = PillarCalculator::new(ChartConfig::new(
            DayBoundary::Midnight,
            YearRangePolicy::Strict,
        ))
        .calculate(&b)
        .unwrap();
        assert_eq!(late_zi.year, midnight.year);
        assert_eq!(late_zi.month, midnight.month);
        assert_eq!(late_zi.day.to_string(), "辛亥");
        assert_eq!(midnight.day.to_string(), "庚戌");
        assert_eq!(late_zi.hour.to_string(), "戊子");
        assert_eq!(midnight.hour.to_string(), "丙子");
    }
}
