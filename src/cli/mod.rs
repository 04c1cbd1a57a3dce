//! CLI command definitions and handlers

mod counts;
mod init;
mod num_words;
mod stats;

use crate::config::Settings;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cdifreq - CDI checklist frequencies from child-directed speech
#[derive(Parser, Debug)]
#[command(name = "cdifreq")]
#[command(
    version,
    about = "Estimate per-language CDI checklist item frequencies and mean utterance lengths from transcribed child-directed speech",
    long_about = "cdifreq reconciles free-text corpus tokens against a fixed CDI vocabulary \
checklist through morphological stemming, pattern normalization, and per-language \
special-case overrides, then aggregates Good-Turing-smoothed frequency statistics \
over the token stream.\n\n\
Each language is processed independently: one language's failure never aborts the rest.",
    after_help = "\
Examples:
  cdifreq init                         Write an example cdifreq.toml
  cdifreq stats                        Process every configured language
  cdifreq stats -l english -l russian  Process a subset
  cdifreq counts -l english            Raw per-stem counts for one language
  cdifreq num-words                    Cross-language corpus-size report"
)]
pub struct Cli {
    /// Path to a config file (default: ./cdifreq.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate checklist frequencies and MLUs, writing the per-language tables
    #[command(after_help = "\
Outputs, per language:
  <output_root>/freqs/freqs_<language>.csv   item, probability, frequency
  <output_root>/mlus/mlus_<language>.csv     item, mlu")]
    Stats {
        /// Language to process (repeatable; default: the configured list)
        #[arg(long = "language", short = 'l')]
        languages: Vec<String>,

        /// Process languages one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,
    },

    /// Write the raw per-stem count table for each language
    Counts {
        /// Language to process (repeatable; default: the configured list)
        #[arg(long = "language", short = 'l')]
        languages: Vec<String>,
    },

    /// Count non-child tokens per language and write num_words.csv
    NumWords {
        /// Language to count (repeatable; default: the configured list)
        #[arg(long = "language", short = 'l')]
        languages: Vec<String>,
    },

    /// Write an example cdifreq.toml config file
    Init,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => init::run(),
        command => {
            let settings = Settings::load(cli.config.as_deref())?;
            match command {
                Commands::Stats {
                    languages,
                    sequential,
                } => stats::run(&settings, &languages, sequential),
                Commands::Counts { languages } => counts::run(&settings, &languages),
                Commands::NumWords { languages } => num_words::run(&settings, &languages),
                Commands::Init => unreachable!("handled above"),
            }
        }
    }
}

/// `english` → `English`, for report rows.
pub(crate) fn title_case(language: &str) -> String {
    let mut chars = language.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
