//! Answer sheets: saved answers as a JSON array of `null | integer`.
//!
//! Three-choice slots hold the option index, scale slots hold the button's
//! score. Values that do not fit their question, or fall outside the
//! configured button scores, are imported as unanswered.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::bank::{QuestionBank, QuestionKind};
use crate::core::types::{Answer, ScoringConfig, TriChoice};

/// Load a sheet and type each slot against its question.
pub fn load_answer_sheet(
    path: &Path,
    bank: &QuestionBank,
    scoring: &ScoringConfig,
) -> Result<Vec<Option<Answer>>> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let raw: Vec<Option<i64>> = serde_json::from_str(&contents)
        .with_context(|| format!("parse answer sheet {}", path.display()))?;
    debug!(path = %path.display(), slots = raw.len(), "answer sheet loaded");
    Ok(type_answers(bank, scoring, &raw))
}

/// Write answers in sheet form.
pub fn write_answer_sheet(path: &Path, answers: &[Option<Answer>]) -> Result<()> {
    let raw: Vec<Option<i64>> = answers.iter().map(|slot| slot.map(raw_value)).collect();
    let mut buf = serde_json::to_string(&raw)?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write answer sheet {}", path.display()))
}

/// Convert raw slot values into typed answers, one per question.
///
/// Surplus slots are dropped; missing slots are unanswered. Scale values
/// must lie between the lowest and highest entry of `choiceScores`.
pub fn type_answers(
    bank: &QuestionBank,
    scoring: &ScoringConfig,
    raw: &[Option<i64>],
) -> Vec<Option<Answer>> {
    let (low, high) = scoring.score_range();
    if raw.len() != bank.len() {
        warn!(
            slots = raw.len(),
            questions = bank.len(),
            "answer sheet length differs from question count"
        );
    }
    bank.questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let value = raw.get(index).copied().flatten()?;
            let answer = match question.kind()? {
                QuestionKind::ThreeChoice(_) => usize::try_from(value)
                    .ok()
                    .and_then(TriChoice::from_index)
                    .map(Answer::ThreeChoice),
                QuestionKind::Scale => i32::try_from(value)
                    .ok()
                    .filter(|score| (low..=high).contains(score))
                    .map(Answer::Scale),
            };
            if answer.is_none() {
                warn!(index, value, "answer out of range, treating as unanswered");
            }
            answer
        })
        .collect()
}

fn raw_value(answer: Answer) -> i64 {
    match answer {
        Answer::ThreeChoice(choice) => choice.index() as i64,
        Answer::Scale(score) => i64::from(score),
    }
}
