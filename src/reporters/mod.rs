//! Output tables
//!
//! Pure serialization: each writer takes an already-computed table and
//! emits one comma-delimited UTF-8 file with a header row. No statistics
//! are computed here.
//!
//! - `freqs_<language>.csv`: `item, probability, frequency`
//! - `mlus_<language>.csv`: `item, mlu`
//! - `counts_<language>.csv`: `item, count`
//! - `num_words.csv`: `language, num_words`

use crate::error::PipelineResult;
use crate::models::ItemStats;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

fn create_parent_dirs(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write the frequency/probability table, pseudo-item row included.
pub fn write_freqs(path: &Path, table: &BTreeMap<String, ItemStats>) -> PipelineResult<()> {
    create_parent_dirs(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["item", "probability", "frequency"])?;
    for (item, stats) in table {
        writer.write_record([
            item.as_str(),
            &stats.probability.to_string(),
            &stats.frequency.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the MLU table.
pub fn write_mlus(path: &Path, mlus: &BTreeMap<String, f64>) -> PipelineResult<()> {
    create_parent_dirs(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["item", "mlu"])?;
    for (item, mlu) in mlus {
        writer.write_record([item.as_str(), &mlu.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write raw per-stem counts, most frequent first (ties alphabetical).
pub fn write_counts(path: &Path, freqs: &HashMap<String, u64>) -> PipelineResult<()> {
    create_parent_dirs(path)?;
    let mut rows: Vec<(&String, &u64)> = freqs.iter().collect();
    rows.sort_by(|(a_stem, a_count), (b_stem, b_count)| {
        b_count.cmp(a_count).then_with(|| a_stem.cmp(b_stem))
    });

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["item", "count"])?;
    for (stem, count) in rows {
        writer.write_record([stem.as_str(), &count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the cross-language corpus-size report, in the given row order.
pub fn write_num_words(path: &Path, rows: &[(String, u64)]) -> PipelineResult<()> {
    create_parent_dirs(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["language", "num_words"])?;
    for (language, num_words) in rows {
        writer.write_record([language.as_str(), &num_words.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
