//! Day pillar.
//!
//! Counted linearly from 2001-01-01, a 甲子 day. Under the default
//! [`DayBoundary::LateZi`] rule a birth at 23:xx already belongs to the
//! next civil day.

use bazi_time::{BirthInstant, CivilDate};
use serde::Serialize;

use crate::chart_types::DayBoundary;
use crate::error::BaziError;
use crate::pillar::Pillar;

/// Reference day of the cycle: 2001-01-01 was 甲子.
pub const DAY_CYCLE_EPOCH: (i32, u32, u32) = (2001, 1, 1);

/// Day pillar with the date it was counted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayPillar {
    pub pillar: Pillar,
    pub effective_date: CivilDate,
    /// Days from the epoch to `effective_date`, negative before it.
    pub offset: i64,
}

/// Civil date whose cycle position the birth takes.
pub fn effective_date(birth: &BirthInstant, boundary: DayBoundary) -> Result<CivilDate, BaziError> {
    match boundary {
        DayBoundary::LateZi if birth.is_late_zi() => Ok(birth.date().next_day()?),
        _ => Ok(birth.date()),
    }
}

/// Pillar of a civil date (midnight-to-midnight).
pub fn pillar_for_date(date: CivilDate) -> Result<(Pillar, i64), BaziError> {
    let (y, m, d) = DAY_CYCLE_EPOCH;
    let epoch = CivilDate::new(y, m, d)?;
    let offset = date.days_since(epoch);
    Ok((Pillar::from_cycle_offset(offset), offset))
}

/// Resolve the day pillar of `birth`.
pub fn day_pillar(birth: &BirthInstant, boundary: DayBoundary) -> Result<DayPillar, BaziError> {
    let effective_date = effective_date(birth, boundary)?;
    let (pillar, offset) = pillar_for_date(effective_date)?;
    Ok(DayPillar {
        pillar,
        effective_date,
        offset,
    })
}
