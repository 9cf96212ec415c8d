//! Shared deterministic types for quiz scoring.
//!
//! These types define stable contracts between the scorer and the classifiers.
//! They do not depend on external state or I/O.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Score axis named by a question's `targetScore`.
///
/// The digit suffix is the axis group; `CL` belongs to no group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AxisKey {
    S1,
    M1,
    P1,
    V2,
    M2,
    G2,
    A3,
    M3,
    E3,
    CL,
}

impl AxisKey {
    /// All keys in canonical order.
    pub const ALL: [AxisKey; 10] = [
        AxisKey::S1,
        AxisKey::M1,
        AxisKey::P1,
        AxisKey::V2,
        AxisKey::M2,
        AxisKey::G2,
        AxisKey::A3,
        AxisKey::M3,
        AxisKey::E3,
        AxisKey::CL,
    ];

    /// Group owning this key, or `None` for `CL`.
    pub fn group(self) -> Option<AxisGroup> {
        match self {
            AxisKey::S1 | AxisKey::M1 | AxisKey::P1 => Some(AxisGroup::One),
            AxisKey::V2 | AxisKey::M2 | AxisKey::G2 => Some(AxisGroup::Two),
            AxisKey::A3 | AxisKey::M3 | AxisKey::E3 => Some(AxisGroup::Three),
            AxisKey::CL => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AxisKey::S1 => "S1",
            AxisKey::M1 => "M1",
            AxisKey::P1 => "P1",
            AxisKey::V2 => "V2",
            AxisKey::M2 => "M2",
            AxisKey::G2 => "G2",
            AxisKey::A3 => "A3",
            AxisKey::M3 => "M3",
            AxisKey::E3 => "E3",
            AxisKey::CL => "CL",
        }
    }

    /// Type-code letter this key stands for when it wins its group.
    ///
    /// Middle keys and `CL` read as `M`.
    pub fn letter(self) -> char {
        match self {
            AxisKey::S1 => 'S',
            AxisKey::P1 => 'P',
            AxisKey::V2 => 'V',
            AxisKey::G2 => 'G',
            AxisKey::A3 => 'A',
            AxisKey::E3 => 'E',
            _ => 'M',
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AxisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three two-pole-plus-middle type axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisGroup {
    One,
    Two,
    Three,
}

impl AxisGroup {
    pub const ALL: [AxisGroup; 3] = [AxisGroup::One, AxisGroup::Two, AxisGroup::Three];

    /// Key credited by option index 0.
    pub fn first_pole(self) -> AxisKey {
        match self {
            AxisGroup::One => AxisKey::S1,
            AxisGroup::Two => AxisKey::V2,
            AxisGroup::Three => AxisKey::A3,
        }
    }

    /// Key credited by option index 1.
    pub fn second_pole(self) -> AxisKey {
        match self {
            AxisGroup::One => AxisKey::P1,
            AxisGroup::Two => AxisKey::G2,
            AxisGroup::Three => AxisKey::E3,
        }
    }

    /// Key credited by option index 2; also the tie-break default.
    pub fn middle(self) -> AxisKey {
        match self {
            AxisGroup::One => AxisKey::M1,
            AxisGroup::Two => AxisKey::M2,
            AxisGroup::Three => AxisKey::M3,
        }
    }

    /// Key credited by a three-choice answer in this group.
    pub fn key_for(self, choice: TriChoice) -> AxisKey {
        match choice {
            TriChoice::FirstPole => self.first_pole(),
            TriChoice::SecondPole => self.second_pole(),
            TriChoice::Middle => self.middle(),
        }
    }
}

/// Sign applied to five-choice `CL` answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ScoreEffect {
    Forward,
    Reverse,
}

impl ScoreEffect {
    pub fn apply(self, value: i32) -> i32 {
        match self {
            ScoreEffect::Forward => value,
            ScoreEffect::Reverse => value.saturating_neg(),
        }
    }
}

impl TryFrom<i64> for ScoreEffect {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ScoreEffect::Forward),
            -1 => Ok(ScoreEffect::Reverse),
            other => Err(format!("scoreEffect must be 1 or -1 (got {other})")),
        }
    }
}

impl From<ScoreEffect> for i64 {
    fn from(effect: ScoreEffect) -> Self {
        match effect {
            ScoreEffect::Forward => 1,
            ScoreEffect::Reverse => -1,
        }
    }
}

/// Chosen option of a three-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriChoice {
    FirstPole,
    SecondPole,
    Middle,
}

impl TriChoice {
    /// Map a zero-based option index; anything past 2 is `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TriChoice::FirstPole),
            1 => Some(TriChoice::SecondPole),
            2 => Some(TriChoice::Middle),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            TriChoice::FirstPole => 0,
            TriChoice::SecondPole => 1,
            TriChoice::Middle => 2,
        }
    }
}

/// A recorded answer, tagged by question kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Option picked on a three-choice question.
    ThreeChoice(TriChoice),
    /// Score of the button picked on a five-point scale question.
    Scale(i32),
}

/// Accumulated score per axis key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreVector {
    values: [i32; 10],
}

impl ScoreVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: AxisKey) -> i32 {
        self.values[key.slot()]
    }

    pub fn add(&mut self, key: AxisKey, delta: i32) {
        let slot = &mut self.values[key.slot()];
        *slot = slot.saturating_add(delta);
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|value| *value == 0)
    }

    /// `(key, score)` pairs in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (AxisKey, i32)> + '_ {
        AxisKey::ALL.iter().map(|key| (*key, self.get(*key)))
    }
}

impl Index<AxisKey> for ScoreVector {
    type Output = i32;

    fn index(&self, key: AxisKey) -> &i32 {
        &self.values[key.slot()]
    }
}

impl IndexMut<AxisKey> for ScoreVector {
    fn index_mut(&mut self, key: AxisKey) -> &mut i32 {
        &mut self.values[key.slot()]
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(AxisKey::ALL.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), &value)?;
        }
        map.end()
    }
}

/// Scoring section of `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Score of each scale button, "strongly disagree" first.
    pub choice_scores: [i32; 5],
    pub level_thresholds: LevelThresholds,
}

impl ScoringConfig {
    /// Score stored when scale button `button` is pressed.
    pub fn score_for_button(&self, button: usize) -> Option<i32> {
        self.choice_scores.get(button).copied()
    }

    /// Lowest and highest scale score a button can store.
    pub fn score_range(&self) -> (i32, i32) {
        let low = self.choice_scores.iter().copied().min().unwrap_or_default();
        let high = self.choice_scores.iter().copied().max().unwrap_or_default();
        (low, high)
    }

    /// Button showing `score`, or `None` if no button carries it.
    pub fn button_for_score(&self, score: i32) -> Option<usize> {
        self.choice_scores.iter().position(|value| *value == score)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            choice_scores: [-2, -1, 0, 1, 2],
            level_thresholds: LevelThresholds::default(),
        }
    }
}

/// Inclusive upper bounds of CL levels 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThresholds {
    pub level1_end: i32,
    pub level2_end: i32,
    pub level3_end: i32,
    pub level4_end: i32,
    pub level5_end: i32,
}

impl LevelThresholds {
    /// Bounds in level order.
    pub fn bounds(&self) -> [i32; 5] {
        [
            self.level1_end,
            self.level2_end,
            self.level3_end,
            self.level4_end,
            self.level5_end,
        ]
    }
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            level1_end: -10,
            level2_end: 0,
            level3_end: 10,
            level4_end: 20,
            level5_end: 30,
        }
    }
}
