//! Stats command - the per-language batch driver

use crate::config::Settings;
use crate::error::PipelineResult;
use crate::models::LanguageSummary;
use crate::pipeline;
use crate::reporters;
use anyhow::Result;
use console::style;
use rayon::prelude::*;
use tracing::error;

/// Run the full pipeline for each selected language and write its tables.
///
/// Failures are per-language: a failed run is reported and the remaining
/// languages still complete; the command exits non-zero if any failed.
pub fn run(settings: &Settings, cli_languages: &[String], sequential: bool) -> Result<()> {
    let languages = settings.selected_languages(cli_languages);

    let outcomes: Vec<(String, PipelineResult<LanguageSummary>)> = if sequential {
        languages
            .iter()
            .map(|language| (language.clone(), process_language(settings, language)))
            .collect()
    } else {
        languages
            .par_iter()
            .map(|language| (language.clone(), process_language(settings, language)))
            .collect()
    };

    let mut failures = 0;
    for (language, outcome) in &outcomes {
        match outcome {
            Ok(summary) => {
                println!("{} {}", style("✓").green(), summary.summary());
            }
            Err(e) => {
                error!(%language, "run failed: {e}");
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

fn process_language(settings: &Settings, language: &str) -> PipelineResult<LanguageSummary> {
    let run = pipeline::run_language(settings, language)?;
    reporters::write_freqs(&settings.freqs_path(language), &run.freqs)?;
    reporters::write_mlus(&settings.mlus_path(language), &run.mlus)?;
    Ok(run.summary)
}
