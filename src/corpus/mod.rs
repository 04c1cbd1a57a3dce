//! Corpus access and token aggregation
//!
//! Transcript parsing is a collaborator behind the [`CorpusReader`] trait:
//! the aggregator only needs, per corpus file, the participant table and
//! speaker-filtered token/utterance access with standard-form replacement.
//! The bundled JSON-lines implementation lives in [`jsonl`].

pub mod jsonl;

use crate::error::PipelineResult;
use crate::stemmer::LanguageStemmer;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Per-file transcript access, as provided by an external reader.
///
/// `speakers` restricts to the given participant ids; `replace` substitutes
/// each token's standard form where the transcript records one.
pub trait CorpusReader {
    /// All transcript files of this corpus, in deterministic order.
    fn files(&self) -> PipelineResult<Vec<PathBuf>>;

    /// Participant table of one file: speaker id → role description.
    fn participants(&self, file: &Path) -> PipelineResult<BTreeMap<String, String>>;

    /// Utterances of one file restricted to `speakers`, each as its token
    /// sequence.
    fn utterances(
        &self,
        file: &Path,
        speakers: &BTreeSet<String>,
        replace: bool,
    ) -> PipelineResult<Vec<Vec<String>>>;

    /// Flat token stream of one file restricted to `speakers`.
    fn tokens(
        &self,
        file: &Path,
        speakers: &BTreeSet<String>,
        replace: bool,
    ) -> PipelineResult<Vec<String>> {
        Ok(self
            .utterances(file, speakers, replace)?
            .into_iter()
            .flatten()
            .collect())
    }
}

/// Raw per-stem statistics for one language's corpus pass.
#[derive(Debug, Default)]
pub struct TokenAccumulator {
    /// stem → raw occurrence count
    pub freqs: HashMap<String, u64>,
    /// stem → token length of every utterance it occurred in
    pub lengths: HashMap<String, Vec<usize>>,
}

impl TokenAccumulator {
    /// Corpus-wide raw token total.
    pub fn total_tokens(&self) -> u64 {
        self.freqs.values().sum()
    }
}

/// Speaker ids of everyone except the designated child.
fn non_child_speakers(
    participants: &BTreeMap<String, String>,
    child_role: &str,
) -> BTreeSet<String> {
    participants
        .keys()
        .filter(|id| id.as_str() != child_role)
        .cloned()
        .collect()
}

/// Stream every non-child token of the corpus, stemming as we go.
///
/// For each token: lowercase, stem, bump the stem's raw count, and append
/// the enclosing utterance's token length to the stem's length list.
pub fn aggregate(
    reader: &dyn CorpusReader,
    stemmer: &LanguageStemmer,
    child_role: &str,
) -> PipelineResult<TokenAccumulator> {
    let mut acc = TokenAccumulator::default();

    for file in reader.files()? {
        let participants = reader.participants(&file)?;
        let speakers = non_child_speakers(&participants, child_role);
        debug!(file = %file.display(), speakers = speakers.len(), "aggregating transcript");

        for utterance in reader.utterances(&file, &speakers, true)? {
            let utterance_len = utterance.len();
            for word in &utterance {
                let stem = stemmer.stem(&word.to_lowercase());
                acc.lengths
                    .entry(stem.clone())
                    .or_default()
                    .push(utterance_len);
                *acc.freqs.entry(stem).or_insert(0) += 1;
            }
        }
    }

    Ok(acc)
}

/// Count every non-child token of the corpus (standard forms substituted),
/// without stemming or per-stem bookkeeping.
pub fn count_words(reader: &dyn CorpusReader, child_role: &str) -> PipelineResult<u64> {
    let mut total = 0u64;
    for file in reader.files()? {
        let participants = reader.participants(&file)?;
        let speakers = non_child_speakers(&participants, child_role);
        total += reader.tokens(&file, &speakers, true)?.len() as u64;
    }
    Ok(total)
}
