//! Year pillar.
//!
//! The Bazi year turns over at 立春 (start of spring), not on January 1.
//! A birth strictly before that year's 立春 estimate belongs to the
//! previous Bazi year. Stems and branches count from 4 CE, a 甲子 year.

use bazi_time::BirthInstant;
use serde::Serialize;

use crate::pillar::Pillar;
use crate::solar_term::{SolarTerm, solar_term_day};

/// Reference year of the cycle: 4 CE was 甲子.
pub const YEAR_CYCLE_EPOCH: i32 = 4;

/// Year pillar with its Bazi year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearPillar {
    pub pillar: Pillar,
    pub bazi_year: i32,
}

/// Bazi year containing `birth`.
pub fn bazi_year(birth: &BirthInstant) -> i32 {
    let year = birth.year();
    let lichun = SolarTerm::LiChun;
    let lichun_day = solar_term_day(year, lichun);
    let before_lichun = (birth.month(), birth.day() as i32) < (lichun.civil_month(), lichun_day);
    if before_lichun { year - 1 } else { year }
}

/// Pillar of a given Bazi year.
pub fn pillar_for_bazi_year(bazi_year: i32) -> Pillar {
    Pillar::from_cycle_offset(i64::from(bazi_year) - i64::from(YEAR_CYCLE_EPOCH))
}

/// Resolve the year pillar of `birth`.
pub fn year_pillar(birth: &BirthInstant) -> YearPillar {
    let bazi_year = bazi_year(birth);
    YearPillar {
        pillar: pillar_for_bazi_year(bazi_year),
        bazi_year,
    }
}
