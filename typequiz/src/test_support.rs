//! Test-only helpers for constructing questions, strings and data directories.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use crate::bank::{Question, QuestionBank};
use crate::core::types::{AxisKey, ScoreEffect, ScoringConfig};
use crate::io::data::{DataPaths, QuizData, write_quiz_data};
use crate::translations::{ScaleLabels, ThreeChoiceLabels, Translations, UiStrings};

/// Create a five-choice question targeting `key`.
pub fn scale_question(key: AxisKey) -> Question {
    Question {
        question: format!("{} scale question", key),
        supplement: None,
        is_m_choice: false,
        target_score: key,
        score_effect: None,
        translations: BTreeMap::new(),
    }
}

/// Create a three-choice question in the group of `key`.
pub fn three_choice_question(key: AxisKey) -> Question {
    Question {
        question: format!("{} three-choice question", key),
        is_m_choice: true,
        ..scale_question(key)
    }
}

/// Create a five-choice `CL` question with an explicit effect.
pub fn cl_question(effect: ScoreEffect) -> Question {
    Question {
        score_effect: Some(effect),
        ..scale_question(AxisKey::CL)
    }
}

/// Deterministic UI strings prefixed with `language`.
pub fn ui_strings(language: &str) -> UiStrings {
    let label = |name: &str| format!("{} {}", language, name);
    let axis = |n: u8| {
        [
            label(&format!("axis{} first", n)),
            label(&format!("axis{} second", n)),
            label(&format!("axis{} middle", n)),
        ]
    };
    UiStrings {
        start_button: label("start"),
        next_button: label("next"),
        prev_button: label("prev"),
        restart_button: label("restart"),
        result_title: label("result title"),
        result_intro: label("result intro"),
        result_note: label("result note"),
        intro_text1: label("intro 1"),
        intro_text2: label("intro 2"),
        question_counter: format!("{} {{current}}/{{total}}", language),
        choices: ScaleLabels {
            strongly_disagree: label("strongly disagree"),
            disagree: label("disagree"),
            neutral: label("neutral"),
            agree: label("agree"),
            strongly_agree: label("strongly agree"),
        },
        m_choices: ThreeChoiceLabels {
            axis1: axis(1),
            axis2: axis(2),
            axis3: axis(3),
        },
    }
}

/// Translations holding `ja` and `en` test strings.
pub fn translations() -> Translations {
    let mut languages = BTreeMap::new();
    languages.insert("ja".to_string(), ui_strings("ja"));
    languages.insert("en".to_string(), ui_strings("en"));
    Translations { languages }
}

/// Three-question data set: scale `S1`, three-choice group 1, forward `CL`.
pub fn small_quiz() -> QuizData {
    QuizData {
        bank: QuestionBank {
            questions: vec![
                scale_question(AxisKey::S1),
                three_choice_question(AxisKey::P1),
                cl_question(ScoreEffect::Forward),
            ],
        },
        translations: translations(),
        scoring: ScoringConfig::default(),
    }
}

/// Temporary data directory holding the three quiz documents.
pub struct TestDataDir {
    temp: TempDir,
}

impl TestDataDir {
    /// Write `data` into a fresh temporary directory.
    pub fn new(data: &QuizData) -> Result<Self> {
        let temp = tempfile::tempdir()?;
        write_quiz_data(&DataPaths::new(temp.path()), data)?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn paths(&self) -> DataPaths {
        DataPaths::new(self.temp.path())
    }
}
