//! Hour pillar.
//!
//! Each branch covers a two-hour block; 子 wraps midnight (23:00-00:59).
//! The stem of the 子 hour depends on the day stem through the "five rats"
//! rule (五鼠遁), and later hours advance one stem per block.

use crate::branch::EarthlyBranch;
use crate::pillar::Pillar;
use crate::stem::HeavenlyStem;

/// Stem of the 子 hour, by day stem group (甲/己, 乙/庚, 丙/辛, 丁/壬, 戊/癸).
pub const ZI_HOUR_STEMS: [HeavenlyStem; 5] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Bing,
    HeavenlyStem::Wu,
    HeavenlyStem::Geng,
    HeavenlyStem::Ren,
];

/// Branch of the two-hour block containing `hour` (0..=23).
///
/// The caller validates the hour; [`bazi_time::BirthInstant`] only holds
/// hours in range. Larger values wrap in release builds.
pub fn hour_branch(hour: u8) -> EarthlyBranch {
    debug_assert!(hour <= 23, "hour {hour} outside 0..=23");
    if hour == 23 {
        EarthlyBranch::Zi
    } else {
        EarthlyBranch::from_index((i64::from(hour) + 1) / 2)
    }
}

/// Stem of the 子 hour on a day with `day_stem`.
pub fn zi_hour_stem(day_stem: HeavenlyStem) -> HeavenlyStem {
    ZI_HOUR_STEMS[(day_stem.index() % 5) as usize]
}

/// Resolve the hour pillar for `hour` (0..=23) on a day with `day_stem`.
///
/// Same range contract as [`hour_branch`].
pub fn hour_pillar(hour: u8, day_stem: HeavenlyStem) -> Pillar {
    let branch = hour_branch(hour);
    Pillar::new(zi_hour_stem(day_stem).advance(i64::from(branch.index())), branch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn branch_blocks() {
        assert_eq!(hour_branch(23), EarthlyBranch::Zi);
        assert_eq!(hour_branch(0), EarthlyBranch::Zi);
        assert_eq!(hour_branch(1), EarthlyBranch::Chou);
        assert_eq!(hour_branch(2), EarthlyBranch::Chou);
        assert_eq!(hour_branch(11), EarthlyBranch::Wu);
        assert_eq!(hour_branch(12), EarthlyBranch::Wu);
        assert_eq!(hour_branch(21), EarthlyBranch::Hai);
        assert_eq!(hour_branch(22), EarthlyBranch::Hai);
    }

    #[test]
    fn branch_matches_hour_span() {
        for hour in 0..24u8 {
            let (first, last) = hour_branch(hour).hour_span();
            assert!(hour == first || hour == last, "hour {hour}");
        }
    }

    #[test]
    fn five_rats_table() {
        for stem in ALL_STEMS {
            let start = zi_hour_stem(stem);
            assert_eq!(start, ZI_HOUR_STEMS[(stem.index() % 5) as usize]);
            assert_eq!(hour_pillar(0, stem).stem, start);
            // twelve blocks, one stem step each
            for branch_index in 0..12u8 {
                let hour = if branch_index == 0 { 0 } else { 2 * branch_index };
                let p = hour_pillar(hour, stem);
                assert_eq!(p.branch.index(), branch_index);
                assert_eq!(p.stem, start.advance(i64::from(branch_index)));
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "hour 24 outside 0..=23")]
    fn out_of_range_hour_asserts() {
        hour_branch(24);
    }

    #[test]
    fn known_hours() {
        assert_eq!(hour_pillar(20, HeavenlyStem::Geng).to_string(), "丙戌");
        assert_eq!(hour_pillar(15, HeavenlyStem::Jia).to_string(), "壬申");
        assert_eq!(hour_pillar(23, HeavenlyStem::Xin).to_string(), "戊子");
    }
}
