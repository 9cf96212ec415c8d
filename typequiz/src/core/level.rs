//! CL band classification.

use crate::core::types::LevelThresholds;

/// CL score at or above which a score past every threshold reaches level 6.
///
/// Level 6 has no configurable threshold; scores between `level5_end` and
/// this floor stay at level 5. Extra level-6 conditions are an open product
/// question.
pub const LEVEL_SIX_FLOOR: i32 = 61;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 6;

/// Map a CL score to a level in `1..=6`.
///
/// Thresholds are checked in level order, each as an inclusive upper bound.
pub fn classify_level(cl: i32, thresholds: &LevelThresholds) -> u8 {
    for (level, bound) in (MIN_LEVEL..).zip(thresholds.bounds()) {
        if cl <= bound {
            return level;
        }
    }
    if cl >= LEVEL_SIX_FLOOR { MAX_LEVEL } else { 5 }
}
