//! cdifreq - CDI checklist frequency estimation CLI
//!
//! Batch tool that maps transcribed child-directed speech onto CDI
//! vocabulary checklists and writes per-language frequency and MLU
//! tables.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cdifreq::cli::Cli::parse();
    cdifreq::cli::run(cli)
}
