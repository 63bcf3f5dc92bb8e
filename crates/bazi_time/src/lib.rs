//! Civil date and birth-instant value types.
//!
//! This crate provides:
//! - `CivilDate`, a validated proleptic Gregorian date
//! - `BirthInstant`, a civil date plus hour-of-day (0..=23)
//! - Parsing from `YYYY-MM-DD` strings
//!
//! All values are wall-clock numbers with no UTC offset attached: the same
//! civil numbers always mean the same instant, regardless of locale.

pub mod birth;
pub mod date;
pub mod error;

pub use birth::BirthInstant;
pub use date::CivilDate;
pub use error::TimeError;
