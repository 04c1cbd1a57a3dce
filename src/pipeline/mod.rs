//! Per-language pipeline
//!
//! Orchestrates one language's full run:
//! 1. Build the stemmer and load the checklist + special cases
//! 2. Build the alias map
//! 3. Stream the corpus into the raw per-stem accumulator
//! 4. Fold the accumulator into the frequency and MLU tables
//!
//! Every run constructs its own state from scratch; nothing is shared
//! between languages, so the batch driver is free to fan runs out.

use crate::config::Settings;
use crate::corpus::{self, jsonl::JsonlCorpusReader};
use crate::error::PipelineResult;
use crate::mapping;
use crate::models::{ItemStats, LanguageSummary};
use crate::stats;
use crate::stemmer::LanguageStemmer;
use crate::vocab;
use std::collections::{BTreeMap, HashMap};
use tracing::info;

/// Everything one language's run produces.
#[derive(Debug)]
pub struct LanguageRun {
    pub freqs: BTreeMap<String, ItemStats>,
    pub mlus: BTreeMap<String, f64>,
    /// Raw per-stem counts, for the counts table.
    pub raw_counts: HashMap<String, u64>,
    pub summary: LanguageSummary,
}

/// Run the full pipeline for one language.
pub fn run_language(settings: &Settings, language: &str) -> PipelineResult<LanguageRun> {
    let stemmer = LanguageStemmer::for_language(language);
    if stemmer.is_identity() {
        info!(language, "no stemmer available; using surface forms");
    }

    let checklist = vocab::load_checklist(
        language,
        &vocab::checklist_path(&settings.data_root, language),
    )?;
    let special_cases = vocab::load_special_cases(
        &vocab::special_cases_path(&settings.data_root, language),
        &stemmer,
    )?;
    let alias_map = mapping::build_alias_map(&checklist, &special_cases, &stemmer);
    info!(
        language,
        items = checklist.len(),
        aliases = alias_map.len(),
        special_cases = special_cases.len(),
        "alias map built"
    );

    let reader = JsonlCorpusReader::for_language(&settings.corpus_root, language)?;
    let files = reader.len();
    let accumulator = corpus::aggregate(&reader, &stemmer, &settings.child_role)?;

    let freqs = stats::item_frequencies(language, &accumulator, &alias_map)?;
    let mlus = stats::item_mlus(&accumulator, &alias_map);

    let summary = LanguageSummary {
        language: language.to_string(),
        checklist_items: checklist.len(),
        // the pseudo-item row is always present and is not a checklist item
        observed_items: freqs.len().saturating_sub(1),
        total_tokens: accumulator.total_tokens(),
        files,
    };
    info!(language, coverage = summary.coverage(), "{}", summary.summary());

    Ok(LanguageRun {
        freqs,
        mlus,
        raw_counts: accumulator.freqs,
        summary,
    })
}

/// Raw per-stem counts for one language, without any checklist mapping.
pub fn run_language_counts(
    settings: &Settings,
    language: &str,
) -> PipelineResult<HashMap<String, u64>> {
    let stemmer = LanguageStemmer::for_language(language);
    let reader = JsonlCorpusReader::for_language(&settings.corpus_root, language)?;
    let accumulator = corpus::aggregate(&reader, &stemmer, &settings.child_role)?;
    Ok(accumulator.freqs)
}

/// Total non-child token count for one language's corpus.
pub fn count_language_words(settings: &Settings, language: &str) -> PipelineResult<u64> {
    let reader = JsonlCorpusReader::for_language(&settings.corpus_root, language)?;
    corpus::count_words(&reader, &settings.child_role)
}
