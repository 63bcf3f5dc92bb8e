//! Heavenly stems (天干), the 10-symbol cycle.

use serde::{Serialize, Serializer};

use crate::util::cycle_index;

/// The 10 heavenly stems in cycle order (甲 = 0 .. 癸 = 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

const STEM_HANZI: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl HeavenlyStem {
    /// 0-based cycle index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at cycle position `n`, wrapping any integer into 0..10.
    pub fn from_index(n: i64) -> Self {
        ALL_STEMS[cycle_index(n, 10) as usize]
    }

    /// Pinyin name.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Chinese character.
    pub fn hanzi(self) -> &'static str {
        STEM_HANZI[self.index() as usize]
    }

    pub fn from_hanzi(c: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        let s: &str = c.encode_utf8(&mut buf);
        STEM_HANZI
            .iter()
            .position(|h| *h == s)
            .map(|i| ALL_STEMS[i])
    }

    /// The stem `steps` positions further along the cycle.
    pub fn advance(self, steps: i64) -> Self {
        Self::from_index(i64::from(self.index()) + steps)
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [HeavenlyStem; 10] {
        &ALL_STEMS
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

impl Serialize for HeavenlyStem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanzi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn hanzi_round_trip() {
        for s in ALL_STEMS {
            let c = s.hanzi().chars().next().unwrap();
            assert_eq!(HeavenlyStem::from_hanzi(c), Some(s));
        }
    }

    #[test]
    fn from_hanzi_rejects_branch() {
        assert_eq!(HeavenlyStem::from_hanzi('子'), None);
    }

    #[test]
    fn from_index_wraps_negative() {
        assert_eq!(HeavenlyStem::from_index(-1), HeavenlyStem::Gui);
        assert_eq!(HeavenlyStem::from_index(10), HeavenlyStem::Jia);
    }

    #[test]
    fn advance_wraps() {
        assert_eq!(HeavenlyStem::Ren.advance(3), HeavenlyStem::Yi);
        assert_eq!(HeavenlyStem::Jia.advance(-2), HeavenlyStem::Ren);
    }
}
