//! Linear accumulation of answers into the axis score vector.

use crate::bank::{Question, QuestionKind};
use crate::core::types::{Answer, AxisKey, ScoreVector};

/// Points credited to the chosen key of a three-choice question.
pub const THREE_CHOICE_INCREMENT: i32 = 2;

/// Compute the score vector for `questions` paired with `answers` by position.
///
/// Unanswered slots contribute nothing, as do answers whose variant does not
/// match the question kind. Missing trailing slots count as unanswered.
pub fn compute_scores(questions: &[Question], answers: &[Option<Answer>]) -> ScoreVector {
    let mut scores = ScoreVector::new();
    for (question, answer) in questions.iter().zip(answers) {
        if let Some(answer) = answer {
            apply_answer(&mut scores, question, *answer);
        }
    }
    scores
}

/// Add a single answer's contribution to `scores`.
pub fn apply_answer(scores: &mut ScoreVector, question: &Question, answer: Answer) {
    match (question.kind(), answer) {
        (Some(QuestionKind::ThreeChoice(group)), Answer::ThreeChoice(choice)) => {
            scores.add(group.key_for(choice), THREE_CHOICE_INCREMENT);
        }
        (Some(QuestionKind::Scale), Answer::Scale(value)) => {
            if question.target_score == AxisKey::CL {
                // Loaded banks always carry an effect here; only `Forward` keeps the sign.
                let value = match question.score_effect {
                    Some(effect) => effect.apply(value),
                    None => -value,
                };
                scores.add(AxisKey::CL, value);
            } else {
                scores.add(question.target_score, value);
            }
        }
        _ => {}
    }
}
