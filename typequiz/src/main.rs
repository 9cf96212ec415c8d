//! Personality-typing quiz CLI.
//!
//! Loads the quiz documents from a data directory, runs the quiz in the
//! terminal, and scores saved answer sheets into `TYPE-LEVEL` codes.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use typequiz::core::result::{QuizResult, compute_result};
use typequiz::exit_codes;
use typequiz::io::answers::{load_answer_sheet, write_answer_sheet};
use typequiz::io::config::{AppConfig, CONFIG_FILE_NAME, load_config};
use typequiz::io::data::{DataPaths, QuizData, load_quiz_data};
use typequiz::io::init::{InitOptions, init_data_dir};
use typequiz::logging;
use typequiz::present::{TakeOutcome, run_quiz};
use typequiz::session::QuizSession;

#[derive(Parser)]
#[command(
    name = "typequiz",
    version,
    about = "Personality-typing quiz with TYPE-LEVEL results"
)]
struct Cli {
    /// Settings file (defaults apply when missing).
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Directory holding questions.json, translations.json and config.json.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the bundled sample quiz into the data directory.
    Init {
        /// Overwrite existing documents.
        #[arg(short, long)]
        force: bool,
    },
    /// Load and check all quiz documents.
    Validate,
    /// Take the quiz interactively.
    Take {
        /// Language code for prompts and labels.
        #[arg(short, long)]
        lang: Option<String>,
        /// Save the final answers as an answer sheet.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Score a saved answer sheet.
    Score {
        /// JSON array of `null | integer`, one slot per question.
        #[arg(long)]
        answers: PathBuf,
        /// Print a JSON report instead of the bare code.
        #[arg(long)]
        json: bool,
    },
}

/// JSON report printed by `typequiz score --json`.
#[derive(Serialize)]
struct ScoreReport<'a> {
    code: String,
    #[serde(flatten)]
    result: &'a QuizResult,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    match cli.command {
        Command::Init { force } => cmd_init(&settings, force),
        Command::Validate => cmd_validate(&settings),
        Command::Take { lang, save } => cmd_take(&settings, lang, save.as_deref()),
        Command::Score { answers, json } => cmd_score(&settings, &answers, json),
    }
}

/// Settings file values with command-line overrides applied.
fn resolve_settings(cli: &Cli) -> Result<AppConfig> {
    let mut settings = load_config(&cli.config)?;
    if let Some(data_dir) = &cli.data_dir {
        settings.data_dir = data_dir.clone();
    }
    Ok(settings)
}

fn load_data(settings: &AppConfig) -> Result<QuizData> {
    load_quiz_data(&DataPaths::new(&settings.data_dir)).with_context(|| {
        format!(
            "quiz data in {} could not be loaded; fix the documents and run again",
            settings.data_dir.display()
        )
    })
}

fn cmd_init(settings: &AppConfig, force: bool) -> Result<i32> {
    let paths = init_data_dir(&settings.data_dir, &InitOptions { force })?;
    println!("init: wrote sample quiz to {}", paths.dir.display());
    Ok(exit_codes::OK)
}

fn cmd_validate(settings: &AppConfig) -> Result<i32> {
    let data = load_data(settings)?;
    let three_choice = data
        .bank
        .questions
        .iter()
        .filter(|question| question.is_m_choice)
        .count();
    let languages: Vec<&str> = data.translations.language_codes().collect();
    println!(
        "validate: questions={} three_choice={} scale={} languages={}",
        data.bank.len(),
        three_choice,
        data.bank.len() - three_choice,
        languages.join(",")
    );
    Ok(exit_codes::OK)
}

fn cmd_take(settings: &AppConfig, lang: Option<String>, save: Option<&Path>) -> Result<i32> {
    let data = load_data(settings)?;
    let language = lang.unwrap_or_else(|| settings.language.clone());
    let mut session = QuizSession::new(data, language);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = BufWriter::new(io::stdout().lock());
    let outcome = run_quiz(&mut session, &mut input, &mut output)?;
    output.flush().context("flush output")?;

    match outcome {
        TakeOutcome::Completed(result) => {
            info!(code = %result, "quiz completed");
            if let Some(path) = save {
                write_answer_sheet(path, session.answers().as_slice())?;
            }
            Ok(exit_codes::OK)
        }
        TakeOutcome::Aborted => Ok(exit_codes::ABORTED),
    }
}

fn cmd_score(settings: &AppConfig, answers_path: &Path, json: bool) -> Result<i32> {
    let data = load_data(settings)?;
    let answers = load_answer_sheet(answers_path, &data.bank, &data.scoring)?;
    let result = compute_result(&data.bank.questions, &answers, &data.scoring);
    if json {
        let report = ScoreReport {
            code: result.code(),
            result: &result,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize score report")?
        );
    } else {
        println!("{}", result);
    }
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["typequiz", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE_NAME));
    }

    #[test]
    fn parse_take_with_language() {
        let cli = Cli::parse_from(["typequiz", "take", "--lang", "en"]);
        match cli.command {
            Command::Take { lang, save } => {
                assert_eq!(lang.as_deref(), Some("en"));
                assert!(save.is_none());
            }
            _ => panic!("expected take"),
        }
    }

    #[test]
    fn parse_score_with_global_data_dir() {
        let cli = Cli::parse_from([
            "typequiz",
            "score",
            "--answers",
            "answers.json",
            "--data-dir",
            "quiz",
            "--json",
        ]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("quiz")));
        assert!(matches!(cli.command, Command::Score { json: true, .. }));
    }

    #[test]
    fn data_dir_flag_overrides_settings() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cli = Cli::parse_from([
            "typequiz",
            "--config",
            temp.path().join("missing.toml").to_str().expect("utf8 path"),
            "--data-dir",
            "elsewhere",
            "validate",
        ]);
        let settings = resolve_settings(&cli).expect("settings");
        assert_eq!(settings.data_dir, PathBuf::from("elsewhere"));
        assert_eq!(settings.language, "ja");
    }
}
