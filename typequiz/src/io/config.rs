//! Application settings stored in `typequiz.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::bank::DEFAULT_LANGUAGE;

pub const CONFIG_FILE_NAME: &str = "typequiz.toml";

/// Application configuration (TOML).
///
/// Missing fields default to the bundled data directory and the default
/// language. Command-line flags override these values.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding `questions.json`, `translations.json`, `config.json`.
    pub data_dir: PathBuf,

    /// Language used for prompts and labels.
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(anyhow!("data_dir must be non-empty"));
        }
        if self.language.trim().is_empty() {
            return Err(anyhow!("language must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AppConfig::default()`.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let cfg = AppConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AppConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
