//! Deterministic classification of a score vector into a three-letter type.

use std::fmt;

use serde::Serialize;

use crate::core::types::{AxisGroup, AxisKey, ScoreVector};

/// Three pole letters, one per axis group in group order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCode([char; 3]);

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl Serialize for TypeCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Winning key of one group.
///
/// - first pole if it strictly exceeds both the middle and the second pole;
/// - second pole if it strictly exceeds both the middle and the first pole;
/// - the middle key otherwise, including every tie.
pub fn dominant_key(scores: &ScoreVector, group: AxisGroup) -> AxisKey {
    let first = scores[group.first_pole()];
    let middle = scores[group.middle()];
    let second = scores[group.second_pole()];

    if first > middle && first > second {
        group.first_pole()
    } else if second > middle && second > first {
        group.second_pole()
    } else {
        group.middle()
    }
}

/// Classify all three groups into a `TypeCode`.
pub fn classify_type(scores: &ScoreVector) -> TypeCode {
    TypeCode(AxisGroup::ALL.map(|group| dominant_key(scores, group).letter()))
}
