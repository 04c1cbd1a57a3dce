//! Error types for the per-language pipeline
//!
//! Failures are scoped to one language's run: the batch driver logs them
//! and moves on to the remaining languages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a single language's run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("missing vocabulary file for '{language}': {}", .path.display())]
    MissingResource { language: String, path: PathBuf },

    #[error("degenerate input for '{language}': {reason}")]
    DegenerateInput { language: String, reason: String },

    #[error("malformed input in {}: {message}", .path.display())]
    Encoding { path: PathBuf, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

impl PipelineError {
    /// Build an `Encoding` error from any decode failure at a known path.
    pub fn encoding(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        PipelineError::Encoding {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
