//! Counts command - raw per-stem count tables

use crate::config::Settings;
use crate::error::PipelineResult;
use crate::pipeline;
use crate::reporters;
use anyhow::Result;
use console::style;
use rayon::prelude::*;
use tracing::error;

/// Write the raw per-stem count table for each selected language.
pub fn run(settings: &Settings, cli_languages: &[String]) -> Result<()> {
    let languages = settings.selected_languages(cli_languages);

    let outcomes: Vec<(String, PipelineResult<usize>)> = languages
        .par_iter()
        .map(|language| {
            let outcome = pipeline::run_language_counts(settings, language).and_then(|counts| {
                reporters::write_counts(&settings.counts_path(language), &counts)?;
                Ok(counts.len())
            });
            (language.clone(), outcome)
        })
        .collect();

    let mut failures = 0;
    for (language, outcome) in &outcomes {
        match outcome {
            Ok(stems) => println!(
                "{} {}: {} stems -> {}",
                style("✓").green(),
                language,
                stems,
                settings.counts_path(language).display()
            ),
            Err(e) => {
                error!(%language, "count run failed: {e}");
                println!("{} {}: {e}", style("✗").red(), language);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} language runs failed", outcomes.len());
    }
    Ok(())
}
