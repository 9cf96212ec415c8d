//! Combined scoring entry point producing the `TYPE-LEVEL` result.

use std::fmt;

use serde::Serialize;

use crate::bank::Question;
use crate::core::classifier::{TypeCode, classify_type};
use crate::core::level::classify_level;
use crate::core::scorer::compute_scores;
use crate::core::types::{Answer, AxisKey, ScoreVector, ScoringConfig};

/// Outcome of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    pub level: u8,
    pub scores: ScoreVector,
}

impl QuizResult {
    /// Classify an already computed score vector.
    pub fn from_scores(scores: ScoreVector, config: &ScoringConfig) -> Self {
        Self {
            type_code: classify_type(&scores),
            level: classify_level(scores[AxisKey::CL], &config.level_thresholds),
            scores,
        }
    }

    /// Result code, e.g. `SVA-3`.
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QuizResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.type_code, self.level)
    }
}

/// Score `answers` against `questions` and classify the scores.
pub fn compute_result(
    questions: &[Question],
    answers: &[Option<Answer>],
    config: &ScoringConfig,
) -> QuizResult {
    QuizResult::from_scores(compute_scores(questions, answers), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ScoreEffect, TriChoice};
    use crate::test_support::{cl_question, scale_question, three_choice_question};

    #[test]
    fn unanswered_quiz_is_middle_type_in_the_zero_band() {
        let questions = vec![scale_question(AxisKey::S1), cl_question(ScoreEffect::Forward)];
        let result = compute_result(&questions, &[None, None], &ScoringConfig::default());
        assert!(result.scores.is_zero());
        assert_eq!(result.code(), "MMM-2");
    }

    #[test]
    fn three_question_scenario_ties_to_middle() {
        let questions = vec![
            scale_question(AxisKey::S1),
            three_choice_question(AxisKey::P1),
            cl_question(ScoreEffect::Forward),
        ];
        let answers = [
            Some(Answer::Scale(2)),
            Some(Answer::ThreeChoice(TriChoice::SecondPole)),
            Some(Answer::Scale(5)),
        ];
        let config = ScoringConfig::default();
        let result = compute_result(&questions, &answers, &config);

        assert_eq!(result.scores[AxisKey::S1], 2);
        assert_eq!(result.scores[AxisKey::P1], 2);
        assert_eq!(result.scores[AxisKey::CL], 5);
        let others: i32 = result
            .scores
            .iter()
            .filter(|(key, _)| !matches!(key, AxisKey::S1 | AxisKey::P1 | AxisKey::CL))
            .map(|(_, value)| value.abs())
            .sum();
        assert_eq!(others, 0);
        assert_eq!(result.to_string(), "MMM-3");
    }

    #[test]
    fn result_serializes_code_parts_and_scores() {
        let questions = vec![three_choice_question(AxisKey::M1)];
        let answers = [Some(Answer::ThreeChoice(TriChoice::FirstPole))];
        let result = compute_result(&questions, &answers, &ScoringConfig::default());
        let json = serde_json::to_value(result).expect("serialize");
        assert_eq!(json["type"], "SMM");
        assert_eq!(json["level"], 2);
        assert_eq!(json["scores"]["S1"], 2);
    }
}
