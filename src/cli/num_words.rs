//! NumWords command - cross-language corpus-size report

use crate::cli::title_case;
use crate::config::Settings;
use crate::error::PipelineResult;
use crate::pipeline;
use crate::reporters;
use anyhow::Result;
use console::style;
use rayon::prelude::*;
use tracing::error;

/// Count non-child tokens per language and write `num_words.csv`.
///
/// Rows appear in the configured language order regardless of how the
/// counts were computed.
pub fn run(settings: &Settings, cli_languages: &[String]) -> Result<()> {
    let languages = settings.selected_languages(cli_languages);

    let outcomes: Vec<(String, PipelineResult<u64>)> = languages
        .par_iter()
        .map(|language| {
            (
                language.clone(),
                pipeline::count_language_words(settings, language),
            )
        })
        .collect();

    let mut rows = Vec::new();
    let mut failures = 0;
    for (language, outcome) in &outcomes {
        match outcome {
            Ok(num_words) => {
                println!("{} {}: {} words", style("✓").green(), language, num_words);
                rows.push((title_case(language), *num_words));
            }
            Err(e) => {
                error!(%language, "word count failed: {e}");
                println!("{} {}: {e}", style("✗").red(), language);
                failures += 1;
            }
        }
    }

    reporters::write_num_words(&settings.num_words_path(), &rows)?;
    println!("wrote {}", settings.num_words_path().display());

    if failures > 0 {
        anyhow::bail!("{failures} of {} language counts failed", outcomes.len());
    }
    Ok(())
}
