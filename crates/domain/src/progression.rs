//! Level progression.

/// Returned by [`proficiency_bonus`] for levels outside 1-20.
pub const PROFICIENCY_BONUS_OUT_OF_RANGE: i32 = -1;

/// Proficiency bonus by character level.
///
/// Levels 1-4 give +2 and every further tier of four levels adds one, up to +6
/// at 17-20. Any other level yields the `-1` sentinel rather than an error.
pub fn proficiency_bonus(level: i32) -> i32 {
    match level {
        1..=4 => 2,
        5..=8 => 3,
        9..=12 => 4,
        13..=16 => 5,
        17..=20 => 6,
        _ => PROFICIENCY_BONUS_OUT_OF_RANGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_of_four_levels() {
        let expected = [(1..=4, 2), (5..=8, 3), (9..=12, 4), (13..=16, 5), (17..=20, 6)];
        for (levels, bonus) in expected {
            for level in levels {
                assert_eq!(proficiency_bonus(level), bonus, "level {}", level);
            }
        }
    }

    #[test]
    fn non_decreasing_across_valid_levels() {
        for level in 1..20 {
            assert!(proficiency_bonus(level) <= proficiency_bonus(level + 1));
        }
    }

    #[test]
    fn out_of_range_is_sentinel() {
        for level in [0, -1, 21, 100, i32::MIN, i32::MAX] {
            assert_eq!(proficiency_bonus(level), PROFICIENCY_BONUS_OUT_OF_RANGE);
        }
    }
}
