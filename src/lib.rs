//! cdifreq - CDI checklist frequencies from child-directed speech
//!
//! Estimates, per language, how often each item on a CDI vocabulary
//! checklist occurs in transcribed child-directed speech, and the mean
//! length of the utterances each item appears in. Corpus tokens are
//! reconciled against the checklist through Snowball stemming,
//! pattern-based surface-form expansion, and per-language special-case
//! overrides; raw frequencies are smoothed with a Simple Good-Turing
//! estimator before being folded into checklist-item statistics.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod mapping;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod stats;
pub mod stemmer;
pub mod vocab;

pub use config::Settings;
pub use error::{PipelineError, PipelineResult};
pub use models::{ItemStats, LanguageSummary, UNSEEN_ITEM};
