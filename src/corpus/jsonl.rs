//! JSON-lines transcript reader
//!
//! One transcript file per recording session:
//!
//! ```text
//! {"participants": {"CHI": "Target_Child", "MOT": "Mother"}}
//! {"speaker": "MOT", "tokens": [{"word": "the"}, {"word": "wanna", "replacement": "want to"}]}
//! ```
//!
//! The first line is the participant table; every following line is one
//! utterance. A token's optional `replacement` is its standard form, which
//! may expand to several words.
//!
//! Transcripts for a language live under `<corpus_root>/<Dir>/` where
//! `<Dir>` starts with the title-cased first three letters of the language
//! name (`english` → `Eng.../...jsonl`).

use crate::corpus::CorpusReader;
use crate::error::{PipelineError, PipelineResult};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct Header {
    participants: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct TranscriptToken {
    word: String,
    #[serde(default)]
    replacement: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UtteranceLine {
    speaker: String,
    tokens: Vec<TranscriptToken>,
}

/// Directory prefix for a language: title-cased first three letters.
fn language_prefix(language: &str) -> String {
    let mut chars = language.chars().take(3);
    let mut prefix = String::new();
    if let Some(first) = chars.next() {
        prefix.extend(first.to_uppercase());
    }
    for ch in chars {
        prefix.extend(ch.to_lowercase());
    }
    prefix
}

/// Reads JSON-lines transcripts from a per-language corpus directory.
pub struct JsonlCorpusReader {
    files: Vec<PathBuf>,
}

impl JsonlCorpusReader {
    /// Discover every transcript for `language` under `corpus_root`.
    pub fn for_language(corpus_root: &Path, language: &str) -> PipelineResult<Self> {
        let prefix = language_prefix(language);
        let mut files = Vec::new();

        for entry in std::fs::read_dir(corpus_root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name();
            if !name.to_string_lossy().starts_with(&prefix) {
                continue;
            }
            for transcript in WalkDir::new(entry.path())
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .filter(|e| e.path().extension().is_some_and(|ext| ext == "jsonl"))
            {
                files.push(transcript.into_path());
            }
        }

        files.sort();
        debug!(language, files = files.len(), "discovered transcripts");
        Ok(Self { files })
    }

    /// Number of discovered transcript files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn read_lines(&self, file: &Path) -> PipelineResult<Vec<String>> {
        let text = std::fs::read_to_string(file).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                PipelineError::encoding(file, e)
            } else {
                PipelineError::Io(e)
            }
        })?;
        Ok(text.lines().map(|line| line.to_string()).collect())
    }

    fn parse_header(&self, file: &Path, lines: &[String]) -> PipelineResult<Header> {
        let first = lines
            .first()
            .ok_or_else(|| PipelineError::encoding(file, "empty transcript"))?;
        serde_json::from_str(first).map_err(|e| PipelineError::encoding(file, e))
    }
}

impl CorpusReader for JsonlCorpusReader {
    fn files(&self) -> PipelineResult<Vec<PathBuf>> {
        Ok(self.files.clone())
    }

    fn participants(&self, file: &Path) -> PipelineResult<BTreeMap<String, String>> {
        let lines = self.read_lines(file)?;
        Ok(self.parse_header(file, &lines)?.participants)
    }

    fn utterances(
        &self,
        file: &Path,
        speakers: &BTreeSet<String>,
        replace: bool,
    ) -> PipelineResult<Vec<Vec<String>>> {
        let lines = self.read_lines(file)?;
        self.parse_header(file, &lines)?;

        let mut utterances = Vec::new();
        for line in lines.iter().skip(1).filter(|line| !line.trim().is_empty()) {
            let utterance: UtteranceLine =
                serde_json::from_str(line).map_err(|e| PipelineError::encoding(file, e))?;
            if !speakers.contains(&utterance.speaker) {
                continue;
            }

            let mut tokens = Vec::with_capacity(utterance.tokens.len());
            for token in utterance.tokens {
                match token.replacement {
                    // a standard form may expand to several words
                    Some(replacement) if replace => {
                        tokens.extend(replacement.split_whitespace().map(str::to_string));
                    }
                    _ => tokens.push(token.word),
                }
            }
            utterances.push(tokens);
        }

        Ok(utterances)
    }
}
