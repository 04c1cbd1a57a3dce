//! Pipeline configuration
//!
//! Supports loading config from:
//! - `cdifreq.toml` in the working directory (or an explicit `--config` path)
//! - Environment variables (`CDIFREQ_CORPUS_ROOT`, `CDIFREQ_DATA_ROOT`,
//!   `CDIFREQ_OUTPUT_ROOT`)
//!
//! Everything the pipeline needs (corpus location, vocabulary location,
//! output location, the language list, the child speaker id) arrives
//! through [`Settings`]; there is no global state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Languages processed when neither config nor CLI names any.
const DEFAULT_LANGUAGES: &[&str] = &[
    "italian",
    "norwegian",
    "russian",
    "spanish",
    "swedish",
    "turkish",
    "english",
];

/// Speaker id of the target child, excluded from every token stream.
const DEFAULT_CHILD_ROLE: &str = "CHI";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Root of the transcript corpus (one subdirectory tree per language).
    pub corpus_root: PathBuf,
    /// Root of the per-language vocabulary data.
    pub data_root: PathBuf,
    /// Root for the output tables.
    pub output_root: PathBuf,
    /// Languages to process, in output order.
    pub languages: Vec<String>,
    /// Participant id of the target child.
    pub child_role: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            corpus_root: PathBuf::from("corpus"),
            data_root: PathBuf::from("data"),
            output_root: PathBuf::from("."),
            languages: DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            child_role: DEFAULT_CHILD_ROLE.to_string(),
        }
    }
}

impl Settings {
    /// Load settings with priority: env vars > config file > defaults.
    ///
    /// An explicit `--config` path must exist; the default `cdifreq.toml`
    /// is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut settings = match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read config file {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("invalid config file {}", path.display()))?
            }
            None => {
                let default_path = Path::new("cdifreq.toml");
                if default_path.is_file() {
                    let content = std::fs::read_to_string(default_path)?;
                    toml::from_str(&content).context("invalid config file cdifreq.toml")?
                } else {
                    Settings::default()
                }
            }
        };

        if let Ok(root) = std::env::var("CDIFREQ_CORPUS_ROOT") {
            settings.corpus_root = PathBuf::from(root);
        }
        if let Ok(root) = std::env::var("CDIFREQ_DATA_ROOT") {
            settings.data_root = PathBuf::from(root);
        }
        if let Ok(root) = std::env::var("CDIFREQ_OUTPUT_ROOT") {
            settings.output_root = PathBuf::from(root);
        }

        Ok(settings)
    }

    /// The languages to process: the CLI selection if any, else the
    /// configured list.
    pub fn selected_languages(&self, cli_languages: &[String]) -> Vec<String> {
        if cli_languages.is_empty() {
            self.languages.clone()
        } else {
            cli_languages.to_vec()
        }
    }

    pub fn freqs_path(&self, language: &str) -> PathBuf {
        self.output_root
            .join("freqs")
            .join(format!("freqs_{}.csv", language.to_lowercase()))
    }

    pub fn mlus_path(&self, language: &str) -> PathBuf {
        self.output_root
            .join("mlus")
            .join(format!("mlus_{}.csv", language.to_lowercase()))
    }

    pub fn counts_path(&self, language: &str) -> PathBuf {
        self.output_root
            .join("counts")
            .join(format!("counts_{}.csv", language.to_lowercase()))
    }

    pub fn num_words_path(&self) -> PathBuf {
        self.output_root.join("num_words.csv")
    }

    /// Write an example config file, refusing to overwrite an existing one.
    pub fn write_example(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        let example = r#"# cdifreq configuration

# Root of the transcript corpus. Each language's transcripts live under a
# directory whose name starts with the title-cased first three letters of
# the language name (english -> Eng*/).
corpus_root = "corpus"

# Per-language vocabulary data:
#   <data_root>/<language>/<language>_cdi_items.txt
#   <data_root>/<language>/<language>_special_cases.csv   (optional)
data_root = "data"

# Output tables are written under this directory.
output_root = "."

# Languages to process, in output order.
languages = ["italian", "norwegian", "russian", "spanish", "swedish", "turkish", "english"]

# Participant id of the target child, excluded from all token streams.
child_role = "CHI"
"#;
        std::fs::write(path, example)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(true)
    }
}
