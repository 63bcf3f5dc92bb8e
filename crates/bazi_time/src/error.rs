//! Error types for civil date and birth-instant validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or validating a birth date/hour.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date text is malformed, or the day is out of range for its month.
    InvalidDate(String),
    /// Hour is not an integer in 0..=23.
    InvalidHour(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidHour(msg) => write!(f, "invalid hour: {msg} (expected 0-23)"),
        }
    }
}

impl Error for TimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_date() {
        let e = TimeError::InvalidDate("2023-02-29".into());
        assert_eq!(e.to_string(), "invalid date: 2023-02-29");
    }

    #[test]
    fn display_invalid_hour() {
        let e = TimeError::InvalidHour("24".into());
        assert_eq!(e.to_string(), "invalid hour: 24 (expected 0-23)");
    }
}
