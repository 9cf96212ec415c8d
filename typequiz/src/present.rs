//! Line-oriented terminal presentation of a quiz session.
//!
//! The presenter only renders screens and translates input lines into
//! session calls; all state lives in `QuizSession`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::result::QuizResult;
use crate::session::{Advance, QuizSession};

/// How an interactive run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TakeOutcome {
    /// The quiz was completed; holds the last result shown.
    Completed(QuizResult),
    /// The user quit or input ended before a result was shown.
    Aborted,
}

/// A parsed input line on the question screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// 1-based choice number.
    Choice(usize),
    Next,
    Prev,
    Language(String),
    Quit,
    Unknown(String),
}

/// Parse one line typed on the question screen.
pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if let Ok(number) = trimmed.parse::<usize>() {
        return Input::Choice(number);
    }
    let mut words = trimmed.split_whitespace();
    match (words.next(), words.next()) {
        (None, _) | (Some("n" | "next"), None) => Input::Next,
        (Some("p" | "prev"), None) => Input::Prev,
        (Some("q" | "quit"), None) => Input::Quit,
        (Some("l" | "lang"), Some(code)) => Input::Language(code.to_string()),
        _ => Input::Unknown(trimmed.to_string()),
    }
}

/// Drive `session` from `input`, rendering every screen to `output`.
pub fn run_quiz<R: BufRead, W: Write>(
    session: &mut QuizSession,
    input: &mut R,
    output: &mut W,
) -> Result<TakeOutcome> {
    loop {
        render_intro(session, output)?;
        match read_line(input)? {
            None => return Ok(TakeOutcome::Aborted),
            Some(line) if parse_input(&line) == Input::Quit => return Ok(TakeOutcome::Aborted),
            Some(_) => {}
        }
        session.start()?;

        let Some(result) = run_questions(session, input, output)? else {
            return Ok(TakeOutcome::Aborted);
        };

        render_result(session, &result, output)?;
        match read_line(input)? {
            Some(line) if line.trim() == "r" => {
                session.restart();
            }
            _ => return Ok(TakeOutcome::Completed(result)),
        }
    }
}

/// Question loop; `None` when the user quits or input ends.
fn run_questions<R: BufRead, W: Write>(
    session: &mut QuizSession,
    input: &mut R,
    output: &mut W,
) -> Result<Option<QuizResult>> {
    loop {
        render_question(session, output)?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let parsed = parse_input(&line);
        debug!(?parsed, "input");
        match parsed {
            Input::Choice(0) => writeln!(output, "! choices start at 1")?,
            Input::Choice(number) => {
                if let Err(err) = session.select(number - 1) {
                    writeln!(output, "! {:#}", err)?;
                }
            }
            Input::Next => match session.next() {
                Ok(Advance::Moved(_)) => {}
                Ok(Advance::Finished(result)) => return Ok(Some(result)),
                Err(err) => writeln!(output, "! {:#}", err)?,
            },
            Input::Prev => {
                session.prev();
            }
            Input::Language(code) => {
                if !session.data().translations.has_language(&code) {
                    writeln!(output, "! unknown language '{}', using default", code)?;
                }
                session.set_language(code);
            }
            Input::Quit => return Ok(None),
            Input::Unknown(text) => writeln!(output, "! unrecognized input '{}'", text)?,
        }
    }
}

fn render_intro<W: Write>(session: &QuizSession, output: &mut W) -> Result<()> {
    let strings = session.strings()?;
    writeln!(output, "{}", strings.intro_text1)?;
    writeln!(output, "{}", strings.intro_text2)?;
    writeln!(output, "[Enter] {}  q) quit", strings.start_button)?;
    Ok(())
}

fn render_question<W: Write>(session: &QuizSession, output: &mut W) -> Result<()> {
    let question = session
        .current_question()
        .context("render question outside the question screen")?;
    let strings = session.strings()?;
    let language = session.language();

    writeln!(output)?;
    writeln!(
        output,
        "{}  [{:.0}%]",
        session.counter_label()?,
        session.progress_percent()
    )?;
    writeln!(output, "{}", question.text(language))?;
    if let Some(supplement) = question.supplement(language) {
        writeln!(output, "  {}", supplement)?;
    }

    let selected = session.selected_button();
    for (index, label) in session.choice_labels()?.into_iter().enumerate() {
        let marker = if selected == Some(index) { '*' } else { ' ' };
        writeln!(output, " {} {}) {}", marker, index + 1, label)?;
    }

    let mut hints = Vec::new();
    if session.can_advance() {
        hints.push(format!("n) {}", strings.next_button));
    }
    if session.current_index() > 0 {
        hints.push(format!("p) {}", strings.prev_button));
    }
    hints.push("q) quit".to_string());
    writeln!(output, "{}", hints.join("  "))?;
    Ok(())
}

fn render_result<W: Write>(
    session: &QuizSession,
    result: &QuizResult,
    output: &mut W,
) -> Result<()> {
    let strings = session.strings()?;
    writeln!(output)?;
    writeln!(output, "== {} ==", strings.result_title)?;
    writeln!(output, "{}", strings.result_intro)?;
    writeln!(output, "  {}", result)?;
    writeln!(output, "{}", strings.result_note)?;
    writeln!(output, "r) {}  [Enter] exit", strings.restart_button)?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::small_quiz;
    use std::io::Cursor;

    fn run(script: &str) -> (TakeOutcome, String, QuizSession) {
        let mut session = QuizSession::new(small_quiz(), "en");
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = run_quiz(&mut session, &mut input, &mut output).expect("run quiz");
        (
            outcome,
            String::from_utf8(output).expect("utf8"),
            session,
        )
    }

    #[test]
    fn parse_input_recognizes_commands() {
        assert_eq!(parse_input("3\n"), Input::Choice(3));
        assert_eq!(parse_input("\n"), Input::Next);
        assert_eq!(parse_input("next"), Input::Next);
        assert_eq!(parse_input(" p "), Input::Prev);
        assert_eq!(parse_input("lang ja"), Input::Language("ja".to_string()));
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input("maybe"), Input::Unknown("maybe".to_string()));
    }

    #[test]
    fn completes_quiz_and_shows_code() {
        let (outcome, output, _) = run("\n5\nn\n2\nn\n5\nn\n\n");
        let TakeOutcome::Completed(result) = outcome else {
            panic!("quiz did not complete");
        };
        assert_eq!(result.to_string(), "MMM-3");
        assert!(output.contains("en 1/3"));
        assert!(output.contains("en result title"));
        assert!(output.contains("  MMM-3"));
    }

    #[test]
    fn marks_the_selected_choice() {
        let (_, output, _) = run("\n2\nq\n");
        assert!(output.contains(" * 2) en disagree"));
        assert!(output.contains("   1) en strongly disagree"));
    }

    #[test]
    fn rejects_advancing_without_answer() {
        let (outcome, output, session) = run("\nn\nq\n");
        assert_eq!(outcome, TakeOutcome::Aborted);
        assert!(output.contains("! question 1 has no answer yet"));
        assert_eq!(session.answers().answered_count(), 0);
    }

    #[test]
    fn invalid_choice_is_reported() {
        let (_, output, session) = run("\n9\n0\nq\n");
        assert!(output.contains("! choice 9 is not offered for question 1"));
        assert!(output.contains("! choices start at 1"));
        assert_eq!(session.answers().answered_count(), 0);
    }

    #[test]
    fn language_switch_changes_labels() {
        let (_, output, session) = run("\nlang ja\nlang xx\nq\n");
        assert!(output.contains("ja 1/3"));
        assert!(output.contains("! unknown language 'xx', using default"));
        assert_eq!(session.language(), "xx");
    }

    #[test]
    fn restart_returns_to_intro_with_cleared_answers() {
        let (outcome, output, session) = run("\n1\nn\n1\nn\n1\nn\nr\nq\n");
        assert_eq!(outcome, TakeOutcome::Aborted);
        assert_eq!(output.matches("en intro 1").count(), 2);
        assert_eq!(session.answers().answered_count(), 0);
    }

    #[test]
    fn end_of_input_aborts() {
        let (outcome, _, _) = run("\n1\n");
        assert_eq!(outcome, TakeOutcome::Aborted);
    }
}
