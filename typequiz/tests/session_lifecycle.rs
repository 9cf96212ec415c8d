//! Session-level tests against the bundled sample quiz.
//!
//! These tests drive `QuizSession` through full passes to verify scoring of
//! the shipped question bank, navigation and restart behavior.

use typequiz::bank::QuestionKind;
use typequiz::core::types::{AxisKey, ScoreEffect};
use typequiz::io::data::{QuizData, load_quiz_data};
use typequiz::io::init::{InitOptions, init_data_dir};
use typequiz::session::{Advance, Phase, QuizSession};

fn sample_data() -> QuizData {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = init_data_dir(temp.path(), &InitOptions { force: false }).expect("init");
    load_quiz_data(&paths).expect("load sample")
}

/// Answer every question with `pick(kind, effect)` and return the result code.
fn complete_with(
    session: &mut QuizSession,
    pick: impl Fn(QuestionKind, Option<ScoreEffect>) -> usize,
) -> String {
    session.start().expect("start");
    loop {
        let question = session.current_question().expect("question");
        let kind = question.kind().expect("kind");
        let button = pick(kind, question.score_effect);
        session.select(button).expect("select");
        match session.next().expect("next") {
            Advance::Moved(_) => continue,
            Advance::Finished(result) => return result.to_string(),
        }
    }
}

#[test]
fn strongest_agreement_and_first_poles_give_sva() {
    let mut session = QuizSession::new(sample_data(), "ja");
    let code = complete_with(&mut session, |kind, _| match kind {
        QuestionKind::ThreeChoice(_) => 0,
        QuestionKind::Scale => 4,
    });
    assert_eq!(code, "SVA-2");
    assert_eq!(session.scores()[AxisKey::S1], 4);
    assert_eq!(session.scores()[AxisKey::CL], 0);
}

#[test]
fn strongest_disagreement_and_second_poles_give_pge() {
    let mut session = QuizSession::new(sample_data(), "en");
    let code = complete_with(&mut session, |kind, _| match kind {
        QuestionKind::ThreeChoice(_) => 1,
        QuestionKind::Scale => 0,
    });
    assert_eq!(code, "PGE-2");
}

#[test]
fn reverse_keyed_items_raise_cl_when_disagreeing() {
    let mut session = QuizSession::new(sample_data(), "ja");
    let code = complete_with(&mut session, |kind, effect| match (kind, effect) {
        (QuestionKind::ThreeChoice(_), _) => 2,
        (QuestionKind::Scale, Some(ScoreEffect::Reverse)) => 0,
        (QuestionKind::Scale, _) => 4,
    });
    assert_eq!(session.scores()[AxisKey::CL], 12);
    assert_eq!(code, "MMM-4");
}

#[test]
fn going_back_and_reanswering_overwrites_the_slot() {
    let mut session = QuizSession::new(sample_data(), "ja");
    session.start().expect("start");
    session.select(4).expect("select");
    session.next().expect("next");
    assert!(session.prev());
    assert_eq!(session.selected_button(), Some(4));

    session.select(0).expect("reselect");
    assert_eq!(session.selected_button(), Some(0));
    assert_eq!(session.answers().answered_count(), 1);
    assert_eq!(session.scores()[AxisKey::S1], -2);
}

#[test]
fn restart_after_result_is_a_fresh_session() {
    let mut session = QuizSession::new(sample_data(), "ja");
    complete_with(&mut session, |_, _| 0);
    assert_eq!(session.phase(), Phase::Result);
    assert!((session.progress_percent() - 100.0).abs() < f64::EPSILON);

    session.restart();

    assert_eq!(session.phase(), Phase::Intro);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.answers().answered_count(), 0);
    assert!(session.scores().is_zero());
    assert_eq!(session.result().to_string(), "MMM-2");
}

#[test]
fn localized_prompts_follow_language_switch() {
    let mut session = QuizSession::new(sample_data(), "ja");
    session.start().expect("start");
    let question = session.current_question().expect("question");
    assert_eq!(question.text("en"), "I recharge when I have time alone");
    assert_eq!(session.counter_label().expect("counter"), "質問 1 / 18");

    session.set_language("en");
    assert_eq!(session.counter_label().expect("counter"), "Question 1 of 18");
    assert_eq!(
        session.choice_labels().expect("labels"),
        vec!["Strongly disagree", "Disagree", "Neutral", "Agree", "Strongly agree"]
    );
}
