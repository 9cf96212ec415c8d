//! Quiz session state: answers, navigation and result computation.
//!
//! A session owns everything the presentation layer mutates. Scores are
//! never stored; they are recomputed from the answer store on every request.

use anyhow::{Context, Result, anyhow, bail};
use tracing::debug;

use crate::bank::{Question, QuestionKind};
use crate::core::result::{QuizResult, compute_result};
use crate::core::types::{Answer, ScoreVector, TriChoice};
use crate::io::data::QuizData;
use crate::translations::UiStrings;

/// Index-addressed answer slots, one per question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    slots: Vec<Option<Answer>>,
}

impl AnswerStore {
    /// Create `count` unanswered slots.
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    /// Record `answer` at `index`, overwriting any earlier answer.
    ///
    /// Returns false (and stores nothing) when `index` is out of range.
    pub fn set(&mut self, index: usize, answer: Answer) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(answer);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<Answer> {
        self.slots.get(index).copied().flatten()
    }

    /// Reinitialize to `count` unanswered slots.
    pub fn reset(&mut self, count: usize) {
        self.slots.clear();
        self.slots.resize(count, None);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn as_slice(&self) -> &[Option<Answer>] {
        &self.slots
    }
}

/// Screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Question,
    Result,
}

/// Outcome of `QuizSession::next`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Moved(usize),
    /// Last question passed; the quiz is complete.
    Finished(QuizResult),
}

/// One user's pass through the quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    data: QuizData,
    answers: AnswerStore,
    current: usize,
    phase: Phase,
    language: String,
}

impl QuizSession {
    pub fn new(data: QuizData, language: impl Into<String>) -> Self {
        let answers = AnswerStore::new(data.bank.len());
        Self {
            data,
            answers,
            current: 0,
            phase: Phase::Intro,
            language: language.into(),
        }
    }

    pub fn data(&self) -> &QuizData {
        &self.data
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.data.bank.len()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switch language; unknown codes render with the default language.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
        debug!(language = %self.language, "language changed");
    }

    /// UI strings for the active language.
    pub fn strings(&self) -> Result<&UiStrings> {
        self.data
            .translations
            .for_language(&self.language)
            .ok_or_else(|| anyhow!("no translations for '{}' or the default", self.language))
    }

    /// Leave the intro and show the first question.
    pub fn start(&mut self) -> Result<()> {
        if self.data.bank.is_empty() {
            bail!("cannot start a quiz without questions");
        }
        self.current = 0;
        self.phase = Phase::Question;
        debug!(questions = self.question_count(), "quiz started");
        Ok(())
    }

    /// The question on screen, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Question => self.data.bank.get(self.current),
            _ => None,
        }
    }

    /// Button labels for the current question, in button order.
    pub fn choice_labels(&self) -> Result<Vec<&str>> {
        let question = self.active_question()?;
        let strings = self.strings()?;
        let labels: Vec<&str> = match self.kind_of(question)? {
            QuestionKind::ThreeChoice(group) => strings
                .three_choice_labels(group)
                .iter()
                .map(String::as_str)
                .collect(),
            QuestionKind::Scale => strings.choices.in_order().to_vec(),
        };
        Ok(labels)
    }

    /// Counter text such as `Question 3 of 18`.
    pub fn counter_label(&self) -> Result<String> {
        Ok(self
            .strings()?
            .counter(self.current + 1, self.question_count()))
    }

    /// Progress through the quiz as a percentage of questions reached.
    pub fn progress_percent(&self) -> f64 {
        match self.phase {
            Phase::Intro => 0.0,
            Phase::Result => 100.0,
            Phase::Question => {
                (self.current + 1) as f64 / self.question_count() as f64 * 100.0
            }
        }
    }

    /// Record the answer for button position `button` on the current question.
    ///
    /// Invalid positions are rejected and leave the slot untouched.
    pub fn select(&mut self, button: usize) -> Result<Answer> {
        let question = self.active_question()?;
        let answer = match self.kind_of(question)? {
            QuestionKind::ThreeChoice(_) => TriChoice::from_index(button).map(Answer::ThreeChoice),
            QuestionKind::Scale => self.data.scoring.score_for_button(button).map(Answer::Scale),
        }
        .with_context(|| {
            format!(
                "choice {} is not offered for question {}",
                button + 1,
                self.current + 1
            )
        })?;
        self.answers.set(self.current, answer);
        debug!(index = self.current, ?answer, "answer recorded");
        Ok(answer)
    }

    /// Button to highlight for the current question's stored answer.
    ///
    /// A stored scale score that no button carries highlights nothing.
    pub fn selected_button(&self) -> Option<usize> {
        self.current_question()?;
        match self.answers.get(self.current)? {
            Answer::ThreeChoice(choice) => Some(choice.index()),
            Answer::Scale(score) => self.data.scoring.button_for_score(score),
        }
    }

    /// True once the current question has an answer.
    pub fn can_advance(&self) -> bool {
        self.phase == Phase::Question && self.answers.get(self.current).is_some()
    }

    /// Move to the next question, or finish after the last one.
    pub fn next(&mut self) -> Result<Advance> {
        self.active_question()?;
        if !self.can_advance() {
            bail!("question {} has no answer yet", self.current + 1);
        }
        if self.current + 1 < self.question_count() {
            self.current += 1;
            debug!(index = self.current, "moved to next question");
            return Ok(Advance::Moved(self.current));
        }
        self.phase = Phase::Result;
        let result = self.result();
        debug!(code = %result, "quiz finished");
        Ok(Advance::Finished(result))
    }

    /// Move back one question. Returns false on the first question.
    pub fn prev(&mut self) -> bool {
        if self.phase != Phase::Question || self.current == 0 {
            return false;
        }
        self.current -= 1;
        debug!(index = self.current, "moved to previous question");
        true
    }

    /// Score the current answers from scratch.
    pub fn scores(&self) -> ScoreVector {
        self.result().scores
    }

    /// Classify the current answers.
    pub fn result(&self) -> QuizResult {
        compute_result(
            &self.data.bank.questions,
            self.answers.as_slice(),
            &self.data.scoring,
        )
    }

    /// Return to the intro with every slot unanswered.
    pub fn restart(&mut self) {
        self.current = 0;
        self.phase = Phase::Intro;
        let count = self.question_count();
        self.answers.reset(count);
        debug!("quiz restarted");
    }

    fn active_question(&self) -> Result<&Question> {
        self.current_question()
            .ok_or_else(|| anyhow!("no question is active"))
    }

    fn kind_of(&self, question: &Question) -> Result<QuestionKind> {
        question.kind().with_context(|| {
            format!(
                "question {} cannot be answered: three-choice on {}",
                self.current + 1,
                question.target_score
            )
        })
    }
}
