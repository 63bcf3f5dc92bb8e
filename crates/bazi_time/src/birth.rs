//! Birth instant: civil date plus hour-of-day.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::date::CivilDate;
use crate::error::TimeError;

/// Civil birth date with an hour in 0..=23.
///
/// Treated as wall-clock time with no timezone conversion. Construct
/// through [`BirthInstant::new`] or parsing so the hour is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BirthInstant {
    date: CivilDate,
    hour: u8,
}

impl BirthInstant {
    /// First hour of the late-night block that belongs to the next Bazi day.
    pub const LATE_ZI_HOUR: u8 = 23;

    /// Combine a date and an hour, rejecting hours outside 0..=23.
    pub fn new(date: CivilDate, hour: u32) -> Result<Self, TimeError> {
        let hour = u8::try_from(hour)
            .ok()
            .filter(|h| *h <= Self::LATE_ZI_HOUR)
            .ok_or_else(|| TimeError::InvalidHour(hour.to_string()))?;
        Ok(Self { date, hour })
    }

    pub fn from_ymdh(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, TimeError> {
        Self::new(CivilDate::new(year, month, day)?, hour)
    }

    /// Parse a `YYYY-MM-DD` date string together with an hour.
    pub fn parse(date: &str, hour: u32) -> Result<Self, TimeError> {
        Self::new(CivilDate::parse(date)?, hour)
    }

    pub fn date(&self) -> CivilDate {
        self.date
    }

    /// Hour of day, 0..=23.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Whether the hour falls in 23:00-23:59.
    pub fn is_late_zi(&self) -> bool {
        self.hour == Self::LATE_ZI_HOUR
    }
}

/// Accepts `YYYY-MM-DDThh`, `YYYY-MM-DD hh` and `YYYY-MM-DDThh:mm[:ss]`.
///
/// Minutes and seconds are range-checked and then dropped.
impl FromStr for BirthInstant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date_part, time_part) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::InvalidDate(format!("expected YYYY-MM-DDThh, got {s}")))?;
        let date = CivilDate::parse(date_part)?;

        if time_part.split(':').count() > 3 {
            return Err(TimeError::InvalidHour(time_part.to_string()));
        }
        let mut fields = time_part.split(':');
        let hour_text = fields.next().unwrap_or_default();
        let hour: u32 = hour_text
            .parse()
            .map_err(|_| TimeError::InvalidHour(hour_text.to_string()))?;
        for (field, limit) in fields.zip([59u32, 60]) {
            let value = field
                .split('.')
                .next()
                .and_then(|whole| whole.parse::<u32>().ok())
                .filter(|v| *v <= limit);
            if value.is_none() {
                return Err(TimeError::InvalidHour(time_part.to_string()));
            }
        }
        Self::new(date, hour)
    }
}

impl Display for BirthInstant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02}:00", self.date, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_full_range() {
        let d = CivilDate::new(2024, 6, 15).unwrap();
        for h in 0..=23 {
            assert_eq!(BirthInstant::new(d, h).unwrap().hour(), h as u8);
        }
    }

    #[test]
    fn new_rejects_24() {
        let d = CivilDate::new(2024, 6, 15).unwrap();
        assert_eq!(
            BirthInstant::new(d, 24),
            Err(TimeError::InvalidHour("24".into()))
        );
    }

    #[test]
    fn new_rejects_huge_hour() {
        let d = CivilDate::new(2024, 6, 15).unwrap();
        assert!(BirthInstant::new(d, 300).is_err());
    }

    #[test]
    fn parse_date_and_hour() {
        let b = BirthInstant::parse("2008-08-08", 20).unwrap();
        assert_eq!((b.year(), b.month(), b.day(), b.hour()), (2008, 8, 8, 20));
    }

    #[test]
    fn parse_invalid_date_reported_before_hour() {
        assert!(matches!(
            BirthInstant::parse("2023-02-29", 99),
            Err(TimeError::InvalidDate(_))
        ));
    }

    #[test]
    fn from_str_variants() {
        let a: BirthInstant = "2024-02-04T12".parse().unwrap();
        let b: BirthInstant = "2024-02-04 12".parse().unwrap();
        let c: BirthInstant = "2024-02-04T12:45:10Z".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn from_str_rejects_bad_minutes() {
        assert!("2024-02-04T12:75".parse::<BirthInstant>().is_err());
    }

    #[test]
    fn from_str_rejects_extra_fields() {
        assert_eq!(
            "2024-02-04T12:30:15:99".parse::<BirthInstant>(),
            Err(TimeError::InvalidHour("12:30:15:99".into()))
        );
        assert!("2024-02-04T12:30:15:".parse::<BirthInstant>().is_err());
        assert!("2024-02-04T12:30:15".parse::<BirthInstant>().is_ok());
    }

    #[test]
    fn from_str_rejects_missing_hour() {
        assert!("2024-02-04".parse::<BirthInstant>().is_err());
        assert!(matches!(
            "2024-02-04Tnoon".parse::<BirthInstant>(),
            Err(TimeError::InvalidHour(_))
        ));
    }

    #[test]
    fn late_zi_flag() {
        assert!(BirthInstant::from_ymdh(2024, 1, 1, 23).unwrap().is_late_zi());
        assert!(!BirthInstant::from_ymdh(2024, 1, 1, 0).unwrap().is_late_zi());
    }

    #[test]
    fn display() {
        let b = BirthInstant::from_ymdh(1990, 1, 1, 7).unwrap();
        assert_eq!(b.to_string(), "1990-01-01 07:00");
    }
}
