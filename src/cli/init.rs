//! Init command - write an example config file

use crate::config::Settings;
use anyhow::Result;
use console::style;
use std::path::Path;

/// Write an example `cdifreq.toml` in the working directory.
pub fn run() -> Result<()> {
    let path = Path::new("cdifreq.toml");
    if Settings::write_example(path)? {
        println!(
            "{} Created {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
        println!("Edit corpus_root and data_root, then run `cdifreq stats`.");
    } else {
        println!(
            "{} {} already exists, leaving it untouched",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }
    Ok(())
}
