//! Shared cycle arithmetic.

/// Reduce `n` into `0..modulus`, wrapping negative values upward.
///
/// Year and day offsets are routinely negative (dates before the
/// reference epochs), so every cyclic index goes through here.
pub fn cycle_index(n: i64, modulus: u8) -> u8 {
    // rem_euclid is always in 0..modulus, which fits u8
    n.rem_euclid(i64::from(modulus)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_passthrough() {
        assert_eq!(cycle_index(7, 10), 7);
    }

    #[test]
    fn wraps_exact_multiple() {
        assert_eq!(cycle_index(60, 12), 0);
    }

    #[test]
    fn negative_wraps_up() {
        assert_eq!(cycle_index(-1, 10), 9);
        assert_eq!(cycle_index(-1, 12), 11);
        assert_eq!(cycle_index(-4018, 10), 2);
        assert_eq!(cycle_index(-4018, 12), 2);
    }

    #[test]
    fn large_negative() {
        assert_eq!(cycle_index(-36890, 10), 0);
        assert_eq!(cycle_index(-36890, 12), 10);
    }
}
