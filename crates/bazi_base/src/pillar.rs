//! Pillars: (stem, branch) pairs and the four-pillar chart.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::error::BaziError;
use crate::stem::HeavenlyStem;

/// One (stem, branch) pair.
///
/// No parity constraint is enforced; see [`Pillar::sexagenary_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at offset `n` of both cycles at once (stem `n mod 10`,
    /// branch `n mod 12`).
    pub fn from_cycle_offset(n: i64) -> Self {
        Self::new(HeavenlyStem::from_index(n), EarthlyBranch::from_index(n))
    }

    /// Position 0..60 in the sexagenary cycle (甲子 = 0), or `None` when the
    /// stem and branch parities differ and the pair never occurs in it.
    pub fn sexagenary_index(self) -> Option<u8> {
        let stem = self.stem.index();
        let branch = self.branch.index();
        (0..6u8)
            .map(|k| stem + 10 * k)
            .find(|n| n % 12 == branch)
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Parses two characters, e.g. `"甲子"`.
impl FromStr for Pillar {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => HeavenlyStem::from_hanzi(a)
                .zip(EarthlyBranch::from_hanzi(b))
                .map(|(stem, branch)| Self::new(stem, branch)),
            _ => None,
        };
        parsed.ok_or_else(|| BaziError::InvalidPillar(s.to_string()))
    }
}

/// Which of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarSlot {
    Year,
    Month,
    Day,
    Hour,
}

/// All four slots in chart order.
pub const ALL_SLOTS: [PillarSlot; 4] = [
    PillarSlot::Year,
    PillarSlot::Month,
    PillarSlot::Day,
    PillarSlot::Hour,
];

impl PillarSlot {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Chinese label (年柱, 月柱, 日柱, 时柱).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }
}

/// The year/month/day/hour chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub fn get(&self, slot: PillarSlot) -> Pillar {
        match slot {
            PillarSlot::Year => self.year,
            PillarSlot::Month => self.month,
            PillarSlot::Day => self.day,
            PillarSlot::Hour => self.hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PillarSlot, Pillar)> + '_ {
        ALL_SLOTS.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// The day stem, read as the chart's "day master".
    pub fn day_master(&self) -> HeavenlyStem {
        self.day.stem
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Pillar {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display() {
        let pillar = p("甲子");
        assert_eq!(pillar.stem, HeavenlyStem::Jia);
        assert_eq!(pillar.branch, EarthlyBranch::Zi);
        assert_eq!(pillar.to_string(), "甲子");
    }

    #[test]
    fn parse_rejects_reversed_and_long() {
        assert!(matches!(
            "子甲".parse::<Pillar>(),
            Err(BaziError::InvalidPillar(_))
        ));
        assert!("甲子丑".parse::<Pillar>().is_err());
        assert!("甲".parse::<Pillar>().is_err());
    }

    #[test]
    fn sexagenary_index_known() {
        assert_eq!(p("甲子").sexagenary_index(), Some(0));
        assert_eq!(p("乙丑").sexagenary_index(), Some(1));
        assert_eq!(p("甲戌").sexagenary_index(), Some(10));
        assert_eq!(p("癸亥").sexagenary_index(), Some(59));
    }

    #[test]
    fn sexagenary_index_parity_mismatch() {
        assert_eq!(p("甲丑").sexagenary_index(), None);
    }

    #[test]
    fn cycle_offset_matches_index() {
        for n in 0..60i64 {
            assert_eq!(Pillar::from_cycle_offset(n).sexagenary_index(), Some(n as u8));
        }
        assert_eq!(Pillar::from_cycle_offset(-1), p("癸亥"));
    }

    #[test]
    fn four_pillars_accessors() {
        let chart = FourPillars {
            year: p("戊子"),
            month: p("庚申"),
            day: p("庚辰"),
            hour: p("丙戌"),
        };
        assert_eq!(chart.to_string(), "戊子 庚申 庚辰 丙戌");
        assert_eq!(chart.get(PillarSlot::Day), p("庚辰"));
        assert_eq!(chart.day_master(), HeavenlyStem::Geng);
        let slots: Vec<_> = chart.iter().map(|(s, _)| s.label()).collect();
        assert_eq!(slots, ["年柱", "月柱", "日柱", "时柱"]);
    }
}
