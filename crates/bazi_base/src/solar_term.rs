//! Solar terms (节气) and the day-of-month estimator.
//!
//! The 24 solar terms split the tropical year into roughly 15-day steps.
//! Instead of an ephemeris search, the day each term falls on is estimated
//! with the empirical "C-coefficient" formula:
//!
//! ```text
//! day = floor(Y * 0.2422 + C[term] - floor(Y / 4) - century_offset)
//! ```
//!
//! where `Y = year % 100` and `century_offset` is 0 from 2000, 0.8 for the
//! 1900s and 1.6 before that. The coefficients are tuned for 1900-2099
//! ([`SUPPORTED_YEARS`]); the formula accepts any year but its output
//! outside that range is an extrapolation, not a calendar fact.

use std::ops::RangeInclusive;

use bazi_time::CivilDate;
use serde::Serialize;

use crate::error::BaziError;

/// Years for which the coefficient table is considered accurate.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=2099;

/// Empirical per-term coefficients, indexed like [`SolarTerm::index`].
pub const SOLAR_TERM_COEFFICIENTS: [f64; 24] = [
    5.4055, 20.12, 4.6292, 19.4599, 6.3826, 21.4155, //
    5.59, 20.888, 6.318, 21.86, 6.5, 22.2, //
    7.928, 23.65, 8.35, 23.95, 8.44, 23.822, //
    9.098, 24.218, 8.218, 23.55, 7.7428, 22.6,
];

/// Tropical-year drift per year, in days.
const YEAR_DRIFT_DAYS: f64 = 0.2422;

/// The 24 solar terms, starting from 小寒 (Minor Cold, early January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    XiaoHan,
    DaHan,
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
}

/// All 24 terms in calendar order (index 0 = XiaoHan).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
];

const SOLAR_TERM_HANZI: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

const SOLAR_TERM_NAMES: [&str; 24] = [
    "Xiaohan",
    "Dahan",
    "Lichun",
    "Yushui",
    "Jingzhe",
    "Chunfen",
    "Qingming",
    "Guyu",
    "Lixia",
    "Xiaoman",
    "Mangzhong",
    "Xiazhi",
    "Xiaoshu",
    "Dashu",
    "Liqiu",
    "Chushu",
    "Bailu",
    "Qiufen",
    "Hanlu",
    "Shuangjiang",
    "Lidong",
    "Xiaoxue",
    "Daxue",
    "Dongzhi",
];

impl SolarTerm {
    /// 0-based index (XiaoHan=0 .. DongZhi=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_SOLAR_TERMS.get(usize::from(index)).copied()
    }

    pub fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize]
    }

    pub fn hanzi(self) -> &'static str {
        SOLAR_TERM_HANZI[self.index() as usize]
    }

    /// Civil month (1..=12) the term falls in; two terms per month.
    pub const fn civil_month(self) -> u32 {
        self.index() as u32 / 2 + 1
    }

    /// Even-indexed terms (节) open the twelve Bazi months.
    pub const fn is_major(self) -> bool {
        self.index() % 2 == 0
    }

    pub const fn all() -> &'static [SolarTerm; 24] {
        &ALL_SOLAR_TERMS
    }
}

/// Whether `year` is inside [`SUPPORTED_YEARS`].
pub fn is_supported_year(year: i32) -> bool {
    SUPPORTED_YEARS.contains(&year)
}

/// Century correction subtracted in the estimate.
pub fn century_offset(year: i32) -> f64 {
    if year >= 2000 {
        0.0
    } else if year >= 1900 {
        0.8
    } else {
        1.6
    }
}

/// Estimated day-of-month of `term` in civil `year`.
///
/// Total over all years; see the module docs for the accuracy range.
pub fn solar_term_day(year: i32, term: SolarTerm) -> i32 {
    // truncating remainder: negative years keep a negative Y
    let y = f64::from(year % 100);
    let c = SOLAR_TERM_COEFFICIENTS[term.index() as usize];
    let day = y * YEAR_DRIFT_DAYS + c - (y / 4.0).floor() - century_offset(year);
    day.floor() as i32
}

/// Estimated civil date of `term` in `year`.
pub fn solar_term_date(year: i32, term: SolarTerm) -> Result<CivilDate, BaziError> {
    let day = solar_term_day(year, term);
    let day = u32::try_from(day).map_err(|_| {
        BaziError::Time(bazi_time::TimeError::InvalidDate(format!(
            "{} {year} estimated on day {day}",
            term.name()
        )))
    })?;
    Ok(CivilDate::new(year, term.civil_month(), day)?)
}

/// All 24 estimated term dates of a civil year, in calendar order.
pub fn solar_terms_for_year(year: i32) -> Result<Vec<(SolarTerm, CivilDate)>, BaziError> {
    ALL_SOLAR_TERMS
        .iter()
        .map(|&term| solar_term_date(year, term).map(|date| (term, date)))
        .collect()
}
