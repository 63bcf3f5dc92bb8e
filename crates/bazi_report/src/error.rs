//! Error types for report payloads.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_base::{BaziError, PillarSlot};

/// Errors from building requests or validating service responses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    /// Response text is not the expected JSON shape.
    Json(String),
    /// An analysis section is empty.
    MissingSection(&'static str),
    /// A returned pillar is not a stem + branch pair.
    InvalidPillar { slot: PillarSlot, value: String },
    /// Unrecognised gender text.
    InvalidGender(String),
    /// The local chart could not be computed.
    Chart(BaziError),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "malformed report: {msg}"),
            Self::MissingSection(key) => write!(f, "report section {key} is empty"),
            Self::InvalidPillar { slot, value } => {
                write!(f, "report {} pillar {value:?} is not a stem/branch pair", slot.name())
            }
            Self::InvalidGender(s) => write!(f, "invalid gender: {s:?} (expected male/female)"),
            Self::Chart(e) => write!(f, "chart error: {e}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BaziError> for ReportError {
    fn from(e: BaziError) -> Self {
        Self::Chart(e)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
