use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::{AxisGroup, AxisKey, ScoreEffect};

/// Language used when a requested language has no text of its own.
pub const DEFAULT_LANGUAGE: &str = "ja";

/// Contents of `questions.json`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplement: Option<String>,
    #[serde(default)]
    pub is_m_choice: bool,
    pub target_score: AxisKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_effect: Option<ScoreEffect>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, QuestionText>,
}

/// Per-language override of a question's prompt and supplement.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplement: Option<String>,
}

/// How a question is answered and scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    /// Three options crediting one key of the group.
    ThreeChoice(AxisGroup),
    /// Five-point agreement scale added to `target_score`.
    Scale,
}

impl Question {
    /// Derive the scoring kind, or `None` for a three-choice question with no group.
    pub fn kind(&self) -> Option<QuestionKind> {
        if self.is_m_choice {
            self.target_score.group().map(QuestionKind::ThreeChoice)
        } else {
            Some(QuestionKind::Scale)
        }
    }

    /// Prompt text in `language`, falling back to the base text.
    pub fn text(&self, language: &str) -> &str {
        self.translations
            .get(language)
            .and_then(|text| text.question.as_deref())
            .unwrap_or(&self.question)
    }

    /// Supplement in `language`, falling back to the base supplement.
    ///
    /// Empty strings count as absent on both levels.
    pub fn supplement(&self, language: &str) -> Option<&str> {
        self.translations
            .get(language)
            .and_then(|text| text.supplement.as_deref())
            .filter(|text| !text.is_empty())
            .or_else(|| self.supplement.as_deref().filter(|text| !text.is_empty()))
    }
}
