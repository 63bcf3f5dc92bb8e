//! Earthly branches (地支), the 12-symbol cycle.

use serde::{Serialize, Serializer};

use crate::util::cycle_index;

/// The 12 earthly branches in cycle order (子 = 0 .. 亥 = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

const BRANCH_HANZI: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

impl EarthlyBranch {
    /// 0-based cycle index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at cycle position `n`, wrapping any integer into 0..12.
    pub fn from_index(n: i64) -> Self {
        ALL_BRANCHES[cycle_index(n, 12) as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character.
    pub fn hanzi(self) -> &'static str {
        BRANCH_HANZI[self.index() as usize]
    }

    pub fn from_hanzi(c: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        let s: &str = c.encode_utf8(&mut buf);
        BRANCH_HANZI
            .iter()
            .position(|h| *h == s)
            .map(|i| ALL_BRANCHES[i])
    }

    /// Civil hours `(first, last)` covered by this branch's two-hour block.
    ///
    /// Zi wraps midnight: `(23, 0)`.
    pub const fn hour_span(self) -> (u8, u8) {
        match self {
            Self::Zi => (23, 0),
            other => {
                let k = other.index();
                (2 * k - 1, 2 * k)
            }
        }
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [EarthlyBranch; 12] {
        &ALL_BRANCHES
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

impl Serialize for EarthlyBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanzi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_branches_count() {
        assert_eq!(ALL_BRANCHES.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn hanzi_round_trip() {
        for b in ALL_BRANCHES {
            let c = b.hanzi().chars().next().unwrap();
            assert_eq!(EarthlyBranch::from_hanzi(c), Some(b));
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(EarthlyBranch::from_index(-1), EarthlyBranch::Hai);
        assert_eq!(EarthlyBranch::from_index(14), EarthlyBranch::Yin);
    }

    #[test]
    fn hour_spans() {
        assert_eq!(EarthlyBranch::Zi.hour_span(), (23, 0));
        assert_eq!(EarthlyBranch::Chou.hour_span(), (1, 2));
        assert_eq!(EarthlyBranch::Wu.hour_span(), (11, 12));
        assert_eq!(EarthlyBranch::Hai.hour_span(), (21, 22));
    }
}
