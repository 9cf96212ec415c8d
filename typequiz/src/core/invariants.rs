//! Semantic invariants not expressible via JSON Schema.

use crate::bank::QuestionBank;
use crate::core::types::{AxisKey, ScoringConfig};

/// Check question bank invariants:
/// - At least one question
/// - Three-choice questions target a grouped key (never `CL`)
/// - Scale questions on `CL` declare a `scoreEffect`
/// - Prompts are non-empty
pub fn validate_bank(bank: &QuestionBank) -> Vec<String> {
    let mut errors = Vec::new();
    if bank.is_empty() {
        errors.push("question bank must contain at least one question".to_string());
    }

    for (index, question) in bank.questions.iter().enumerate() {
        let path = format!("questions[{}]", index);
        if question.question.trim().is_empty() {
            errors.push(format!("{}: question text must be non-empty", path));
        }
        if question.is_m_choice && question.target_score.group().is_none() {
            errors.push(format!(
                "{}: three-choice question cannot target {}",
                path, question.target_score
            ));
        }
        if !question.is_m_choice
            && question.target_score == AxisKey::CL
            && question.score_effect.is_none()
        {
            errors.push(format!("{}: CL question requires scoreEffect", path));
        }
    }
    errors
}

/// Check scoring invariants: level thresholds must be non-decreasing.
pub fn validate_scoring(config: &ScoringConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let bounds = config.level_thresholds.bounds();
    for (index, pair) in bounds.windows(2).enumerate() {
        if pair[0] > pair[1] {
            errors.push(format!(
                "levelThresholds: level{}_end ({}) exceeds level{}_end ({})",
                index + 1,
                pair[0],
                index + 2,
                pair[1]
            ));
        }
    }
    errors
}
