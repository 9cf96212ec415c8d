//! Quiz document load/save helpers with schema + invariant validation.
//!
//! A data directory holds `questions.json`, `translations.json` and
//! `config.json`. All three must load before a session can start.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::validator_for;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::bank::{DEFAULT_LANGUAGE, QuestionBank};
use crate::core::invariants::{validate_bank, validate_scoring};
use crate::core::types::ScoringConfig;
use crate::translations::Translations;

pub const QUESTION_BANK_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/question_bank/v1.schema.json"
));

/// Canonical document paths within a data directory.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub dir: PathBuf,
    pub questions_path: PathBuf,
    pub translations_path: PathBuf,
    pub config_path: PathBuf,
}

impl DataPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            questions_path: dir.join("questions.json"),
            translations_path: dir.join("translations.json"),
            config_path: dir.join("config.json"),
            dir,
        }
    }

    pub fn all(&self) -> [&Path; 3] {
        [
            self.questions_path.as_path(),
            self.translations_path.as_path(),
            self.config_path.as_path(),
        ]
    }
}

/// Contents of `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigDocument {
    pub scoring: ScoringConfig,
}

/// Everything a session needs, loaded as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizData {
    pub bank: QuestionBank,
    pub translations: Translations,
    pub scoring: ScoringConfig,
}

/// Load and validate all three documents.
pub fn load_quiz_data(paths: &DataPaths) -> Result<QuizData> {
    debug!(dir = %paths.dir.display(), "loading quiz data");
    let bank = load_bank(&paths.questions_path)?;
    let translations = load_translations(&paths.translations_path)?;
    let scoring = load_scoring(&paths.config_path)?;
    debug!(
        questions = bank.len(),
        languages = translations.languages.len(),
        "quiz data loaded"
    );
    Ok(QuizData {
        bank,
        translations,
        scoring,
    })
}

/// Load `questions.json` (schema + invariants).
pub fn load_bank(path: &Path) -> Result<QuestionBank> {
    let value = read_json(path)?;
    validate_schema(&value)
        .with_context(|| format!("validate question bank {}", path.display()))?;
    let bank: QuestionBank = serde_json::from_value(value)
        .with_context(|| format!("deserialize question bank {}", path.display()))?;
    let errors = validate_bank(&bank);
    if !errors.is_empty() {
        bail!(
            "question bank invariants failed in {}:\n- {}",
            path.display(),
            errors.join("\n- ")
        );
    }
    Ok(bank)
}

/// Load `translations.json`; the default language must be present.
pub fn load_translations(path: &Path) -> Result<Translations> {
    let value = read_json(path)?;
    let translations: Translations = serde_json::from_value(value)
        .with_context(|| format!("deserialize translations {}", path.display()))?;
    if !translations.has_language(DEFAULT_LANGUAGE) {
        bail!(
            "translations {} missing default language '{}'",
            path.display(),
            DEFAULT_LANGUAGE
        );
    }
    Ok(translations)
}

/// Load the `scoring` section of `config.json`.
pub fn load_scoring(path: &Path) -> Result<ScoringConfig> {
    let value = read_json(path)?;
    let document: ConfigDocument = serde_json::from_value(value)
        .with_context(|| format!("deserialize scoring config {}", path.display()))?;
    let errors = validate_scoring(&document.scoring);
    if !errors.is_empty() {
        bail!(
            "scoring config invalid in {}:\n- {}",
            path.display(),
            errors.join("\n- ")
        );
    }
    Ok(document.scoring)
}

/// Write all three documents with canonical formatting.
pub fn write_quiz_data(paths: &DataPaths, data: &QuizData) -> Result<()> {
    fs::create_dir_all(&paths.dir)
        .with_context(|| format!("create directory {}", paths.dir.display()))?;
    write_json(&paths.questions_path, &data.bank)?;
    write_json(&paths.translations_path, &data.translations)?;
    write_json(
        &paths.config_path,
        &ConfigDocument {
            scoring: data.scoring.clone(),
        },
    )
}

fn read_json(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(value)?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write {}", path.display()))
}

/// Validate a question bank document against the embedded schema.
fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(QUESTION_BANK_SCHEMA).context("parse question bank schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(instance) {
        let messages = compiled
            .iter_errors(instance)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "schema validation failed:\n- {}",
            messages.join("\n- ")
        ));
    }
    Ok(())
}
