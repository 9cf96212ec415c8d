//! Scaffolding of a data directory with the bundled sample quiz.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::info;

use super::data::DataPaths;

const SAMPLE_QUESTIONS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../data/questions.json"));
const SAMPLE_TRANSLATIONS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../data/translations.json"
));
const SAMPLE_CONFIG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../data/config.json"));

/// Options for `init_data_dir`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing documents.
    pub force: bool,
}

/// Write the sample documents into `dir`.
///
/// Fails if any document already exists unless `options.force` is set.
pub fn init_data_dir(dir: &Path, options: &InitOptions) -> Result<DataPaths> {
    let paths = DataPaths::new(dir);
    if dir.exists() && !dir.is_dir() {
        return Err(anyhow!(
            "typequiz init: {} exists but is not a directory",
            dir.display()
        ));
    }
    if !options.force
        && let Some(existing) = paths.all().into_iter().find(|path| path.exists())
    {
        return Err(anyhow!(
            "typequiz init: {} already exists (use --force to overwrite)",
            existing.display()
        ));
    }

    fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
    write_file(&paths.questions_path, SAMPLE_QUESTIONS)?;
    write_file(&paths.translations_path, SAMPLE_TRANSLATIONS)?;
    write_file(&paths.config_path, SAMPLE_CONFIG)?;
    info!(dir = %dir.display(), "sample quiz data written");
    Ok(paths)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write file {}", path.display()))
}
