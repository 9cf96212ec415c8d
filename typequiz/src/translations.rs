use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bank::DEFAULT_LANGUAGE;
use crate::core::types::AxisGroup;

/// Contents of `translations.json`: UI strings keyed by language code.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Translations {
    pub languages: BTreeMap<String, UiStrings>,
}

impl Translations {
    /// Strings for `language`, or the default language's strings.
    ///
    /// Returns `None` only when the default language is missing too.
    pub fn for_language(&self, language: &str) -> Option<&UiStrings> {
        self.languages
            .get(language)
            .or_else(|| self.languages.get(DEFAULT_LANGUAGE))
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    pub fn language_codes(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UiStrings {
    pub start_button: String,
    pub next_button: String,
    pub prev_button: String,
    pub restart_button: String,
    pub result_title: String,
    pub result_intro: String,
    pub result_note: String,
    pub intro_text1: String,
    pub intro_text2: String,
    /// Counter template with `{current}` and `{total}` placeholders.
    pub question_counter: String,
    pub choices: ScaleLabels,
    pub m_choices: ThreeChoiceLabels,
}

impl UiStrings {
    /// Render the question counter; `current` is 1-based.
    pub fn counter(&self, current: usize, total: usize) -> String {
        self.question_counter
            .replace("{current}", &current.to_string())
            .replace("{total}", &total.to_string())
    }

    /// Option labels for a three-choice question in `group`.
    pub fn three_choice_labels(&self, group: AxisGroup) -> &[String; 3] {
        match group {
            AxisGroup::One => &self.m_choices.axis1,
            AxisGroup::Two => &self.m_choices.axis2,
            AxisGroup::Three => &self.m_choices.axis3,
        }
    }
}

/// Five-point agreement labels.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScaleLabels {
    pub strongly_disagree: String,
    pub disagree: String,
    pub neutral: String,
    pub agree: String,
    pub strongly_agree: String,
}

impl ScaleLabels {
    /// Labels in button order, "strongly disagree" first.
    pub fn in_order(&self) -> [&str; 5] {
        [
            self.strongly_disagree.as_str(),
            self.disagree.as_str(),
            self.neutral.as_str(),
            self.agree.as_str(),
            self.strongly_agree.as_str(),
        ]
    }
}

/// Three-choice labels per axis group: first pole, second pole, middle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreeChoiceLabels {
    pub axis1: [String; 3],
    pub axis2: [String; 3],
    pub axis3: [String; 3],
}
