//! Language-specific morphological stemming
//!
//! Maps a language name to a Snowball stemmer; languages without Snowball
//! support fall back to the identity stemmer so the rest of the pipeline
//! never has to special-case them.

use rust_stemmers::{Algorithm, Stemmer};

/// A surface-word → stem normalizer for one language.
///
/// Cheap to construct; built fresh for every language run.
pub struct LanguageStemmer {
    inner: Option<Stemmer>,
}

impl LanguageStemmer {
    /// Look up the stemmer for a language name (case-insensitive).
    ///
    /// Unsupported languages get the identity stemmer.
    pub fn for_language(language: &str) -> Self {
        let algorithm = match language.to_lowercase().as_str() {
            "danish" => Some(Algorithm::Danish),
            "dutch" => Some(Algorithm::Dutch),
            "english" => Some(Algorithm::English),
            "finnish" => Some(Algorithm::Finnish),
            "french" => Some(Algorithm::French),
            "german" => Some(Algorithm::German),
            "hungarian" => Some(Algorithm::Hungarian),
            "italian" => Some(Algorithm::Italian),
            "norwegian" => Some(Algorithm::Norwegian),
            "portuguese" => Some(Algorithm::Portuguese),
            "romanian" => Some(Algorithm::Romanian),
            "russian" => Some(Algorithm::Russian),
            "spanish" => Some(Algorithm::Spanish),
            "swedish" => Some(Algorithm::Swedish),
            "turkish" => Some(Algorithm::Turkish),
            _ => None,
        };

        Self {
            inner: algorithm.map(Stemmer::create),
        }
    }

    /// The identity stemmer, independent of any language.
    pub fn identity() -> Self {
        Self { inner: None }
    }

    /// Whether this stemmer actually reduces words (vs. identity).
    pub fn is_identity(&self) -> bool {
        self.inner.is_none()
    }

    /// Stem one surface word.
    pub fn stem(&self, word: &str) -> String {
        match &self.inner {
            Some(stemmer) => stemmer.stem(word).into_owned(),
            None => word.to_string(),
        }
    }
}
