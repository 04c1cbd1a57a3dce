//! Core data models for cdifreq
//!
//! These models are shared across the pipeline stages and the writers.

use serde::{Deserialize, Serialize};

/// Reserved pseudo-item carrying the held-out "unseen" probability mass in
/// the frequency table.
pub const UNSEEN_ITEM: &str = "!!!!!";

/// Final per-checklist-item frequency record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStats {
    /// Smoothed probability mass assigned to this item.
    pub probability: f64,
    /// Credit-split raw count, normalized by the corpus token total.
    pub frequency: f64,
}

/// Summary of one language's completed run, for logs and the terminal.
#[derive(Debug, Clone, Default)]
pub struct LanguageSummary {
    pub language: String,
    /// Checklist size
    pub checklist_items: usize,
    /// Checklist items that received any frequency mass
    pub observed_items: usize,
    /// Raw non-child token total for the corpus
    pub total_tokens: u64,
    /// Transcript files scanned
    pub files: usize,
}

impl LanguageSummary {
    /// Share of the checklist observed at least once in the corpus.
    pub fn coverage(&self) -> f64 {
        if self.checklist_items == 0 {
            return 0.0;
        }
        self.observed_items as f64 / self.checklist_items as f64
    }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} files, {} tokens, {}/{} items observed ({:.1}% coverage)",
            self.language,
            self.files,
            self.total_tokens,
            self.observed_items,
            self.checklist_items,
            self.coverage() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage() {
        let summary = LanguageSummary {
            language: "english".into(),
            checklist_items: 4,
            observed_items: 3,
            total_tokens: 100,
            files: 2,
        };
        assert!((summary.coverage() - 0.75).abs() < 1e-12);
        assert!(summary.summary().contains("3/4 items"));
    }

    #[test]
    fn test_coverage_of_empty_checklist_is_zero() {
        let summary = LanguageSummary::default();
        assert_eq!(summary.coverage(), 0.0);
    }
}
