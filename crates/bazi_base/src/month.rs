//! Month pillar.
//!
//! Bazi months open on the twelve major solar terms (节), from 立春 (寅
//! month) through 小寒 (丑 month). Every boundary is pinned to a civil date
//! `(term_year, month, estimated day)`; 小寒 falls in the January after
//! the Bazi year started, so its term year is `bazi_year + 1`.
//!
//! The birth belongs to the latest boundary whose date it has reached.
//! Scanning from the last boundary backwards keeps the choice right even
//! when a term estimate moves by a day between years.
//!
//! Month stems follow the "year gives month" rule (年上起月): the year
//! stem fixes the stem of the 寅 month, and each later month advances one
//! stem.

use bazi_time::BirthInstant;
use serde::Serialize;
use tracing::trace;

use crate::branch::EarthlyBranch;
use crate::pillar::Pillar;
use crate::solar_term::{SolarTerm, solar_term_day};
use crate::stem::HeavenlyStem;
use crate::util::cycle_index;

/// One month-opening solar term and the branch of the month it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthBoundary {
    pub term: SolarTerm,
    pub branch: EarthlyBranch,
}

impl MonthBoundary {
    const fn new(term: SolarTerm, branch: EarthlyBranch) -> Self {
        Self { term, branch }
    }

    /// Civil year in which this boundary's term falls for `bazi_year`.
    pub fn term_year(self, bazi_year: i32) -> i32 {
        if self.term == SolarTerm::XiaoHan {
            bazi_year + 1
        } else {
            bazi_year
        }
    }

    /// `(year, month, day)` of the estimated boundary.
    pub fn date_key(self, bazi_year: i32) -> (i32, u32, i32) {
        let year = self.term_year(bazi_year);
        (year, self.term.civil_month(), solar_term_day(year, self.term))
    }
}

/// Month boundaries in Bazi-year order (寅 month first, 丑 month last).
pub const MONTH_BOUNDARIES: [MonthBoundary; 12] = [
    MonthBoundary::new(SolarTerm::LiChun, EarthlyBranch::Yin),
    MonthBoundary::new(SolarTerm::JingZhe, EarthlyBranch::Mao),
    MonthBoundary::new(SolarTerm::QingMing, EarthlyBranch::Chen),
    MonthBoundary::new(SolarTerm::LiXia, EarthlyBranch::Si),
    MonthBoundary::new(SolarTerm::MangZhong, EarthlyBranch::Wu),
    MonthBoundary::new(SolarTerm::XiaoShu, EarthlyBranch::Wei),
    MonthBoundary::new(SolarTerm::LiQiu, EarthlyBranch::Shen),
    MonthBoundary::new(SolarTerm::BaiLu, EarthlyBranch::You),
    MonthBoundary::new(SolarTerm::HanLu, EarthlyBranch::Xu),
    MonthBoundary::new(SolarTerm::LiDong, EarthlyBranch::Hai),
    MonthBoundary::new(SolarTerm::DaXue, EarthlyBranch::Zi),
    MonthBoundary::new(SolarTerm::XiaoHan, EarthlyBranch::Chou),
];

/// Stem of the 寅 month, by year stem group (甲/己, 乙/庚, 丙/辛, 丁/壬, 戊/癸).
const YIN_MONTH_STEMS: [HeavenlyStem; 5] = [
    HeavenlyStem::Bing,
    HeavenlyStem::Wu,
    HeavenlyStem::Geng,
    HeavenlyStem::Ren,
    HeavenlyStem::Jia,
];

/// Month pillar with the boundary that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthPillar {
    pub pillar: Pillar,
    pub boundary: MonthBoundary,
    /// Civil year of the boundary's solar term.
    pub term_year: i32,
    /// Estimated day-of-month of the boundary's solar term.
    pub term_day: i32,
}

/// Stem of the month with branch `month_branch` in a year with `year_stem`.
pub fn month_stem(year_stem: HeavenlyStem, month_branch: EarthlyBranch) -> HeavenlyStem {
    let yin_stem = YIN_MONTH_STEMS[(year_stem.index() % 5) as usize];
    let steps_from_yin = cycle_index(i64::from(month_branch.index()) - 2, 12);
    yin_stem.advance(i64::from(steps_from_yin))
}

/// Boundary in force on the birth date within `bazi_year`.
pub fn month_boundary(birth: &BirthInstant, bazi_year: i32) -> MonthBoundary {
    let birth_key = (birth.year(), birth.month(), birth.day() as i32);
    MONTH_BOUNDARIES
        .iter()
        .rev()
        .copied()
        .find(|b| {
            let key = b.date_key(bazi_year);
            trace!(term = b.term.name(), ?key, ?birth_key, "month boundary");
            key <= birth_key
        })
        // unreachable when bazi_year came from the same 立春 estimate
        .unwrap_or(MONTH_BOUNDARIES[0])
}

/// Resolve the month pillar of `birth`.
pub fn month_pillar(birth: &BirthInstant, bazi_year: i32, year_stem: HeavenlyStem) -> MonthPillar {
    let boundary = month_boundary(birth, bazi_year);
    let (term_year, _, term_day) = boundary.date_key(bazi_year);
    MonthPillar {
        pillar: Pillar::new(month_stem(year_stem, boundary.branch), boundary.branch),
        boundary,
        term_year,
        term_day,
    }
}
