//! Error types for pillar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_time::TimeError;

/// Errors from four-pillar calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BaziError {
    /// Invalid birth date or hour.
    Time(TimeError),
    /// Civil year outside the range the solar-term coefficients cover.
    YearOutOfRange { year: i32, min: i32, max: i32 },
    /// Text that is not a stem character followed by a branch character.
    InvalidPillar(String),
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::YearOutOfRange { year, min, max } => write!(
                f,
                "year {year} outside supported range {min}-{max} for solar-term estimates"
            ),
            Self::InvalidPillar(text) => write!(f, "invalid pillar: {text:?}"),
        }
    }
}

impl Error for BaziError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::YearOutOfRange { .. } | Self::InvalidPillar(_) => None,
        }
    }
}

impl From<TimeError> for BaziError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
