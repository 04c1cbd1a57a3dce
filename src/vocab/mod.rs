//! Checklist and special-case loading
//!
//! Per language, the data directory holds a line-delimited checklist file
//! and an optional CSV of special-case overrides:
//!
//! ```text
//! <data_root>/<language>/<language>_cdi_items.txt
//! <data_root>/<language>/<language>_special_cases.csv
//! ```
//!
//! A missing checklist is fatal for that language; a missing special-cases
//! file just yields an empty override table.

use crate::error::{PipelineError, PipelineResult};
use crate::mapping::AliasMap;
use crate::stemmer::LanguageStemmer;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Path of the checklist file for a language.
pub fn checklist_path(data_root: &Path, language: &str) -> PathBuf {
    data_root
        .join(language)
        .join(format!("{language}_cdi_items.txt"))
}

/// Path of the special-cases file for a language.
pub fn special_cases_path(data_root: &Path, language: &str) -> PathBuf {
    data_root
        .join(language)
        .join(format!("{language}_special_cases.csv"))
}

/// Load the ordered checklist for a language: one item per line,
/// lowercased, blank lines skipped.
pub fn load_checklist(language: &str, path: &Path) -> PipelineResult<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PipelineError::MissingResource {
            language: language.to_string(),
            path: path.to_path_buf(),
        },
        ErrorKind::InvalidData => PipelineError::encoding(path, e),
        _ => PipelineError::Io(e),
    })?;

    let items: Vec<String> = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.to_lowercase())
        .collect();

    if items.is_empty() {
        return Err(PipelineError::DegenerateInput {
            language: language.to_string(),
            reason: format!("checklist {} has zero items", path.display()),
        });
    }

    Ok(items)
}

/// Load the special-case override table for a language.
///
/// Rows: column 0 is a checklist item, remaining columns are alias surface
/// forms. Every non-empty alias is recorded both literally and stemmed.
/// An absent file is not an error.
pub fn load_special_cases(path: &Path, stemmer: &LanguageStemmer) -> PipelineResult<AliasMap> {
    if !path.is_file() {
        return Ok(AliasMap::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut cases = AliasMap::new();
    for record in reader.records() {
        let record = record?;
        let Some(item) = record.get(0) else { continue };
        if item.is_empty() {
            continue;
        }
        for alias in record.iter().skip(1).filter(|alias| !alias.is_empty()) {
            cases
                .entry(alias.to_string())
                .or_default()
                .insert(item.to_string());
            cases
                .entry(stemmer.stem(alias))
                .or_default()
                .insert(item.to_string());
        }
    }

    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_checklist_lowercases_and_skips_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.txt");
        std::fs::write(&path, "Dog\n\nWoof Woof\nBALL\n").unwrap();

        let items = load_checklist("english", &path).unwrap();
        assert_eq!(items, vec!["dog", "woof woof", "ball"]);
    }

    #[test]
    fn test_missing_checklist_is_missing_resource() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_checklist("english", &dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, PipelineError::MissingResource { .. }));
    }

    #[test]
    fn test_empty_checklist_is_degenerate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.txt");
        std::fs::write(&path, "\n\n").unwrap();
        let err = load_checklist("english", &path).unwrap_err();
        assert!(matches!(err, PipelineError::DegenerateInput { .. }));
    }

    #[test]
    fn test_missing_special_cases_is_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let cases =
            load_special_cases(&dir.path().join("nope.csv"), &LanguageStemmer::identity()).unwrap();
        assert!(cases.is_empty());
    }

    #[test]
    fn test_special_cases_record_literal_and_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "dog,doggies,puppy").unwrap();
        drop(file);

        let cases =
            load_special_cases(&path, &LanguageStemmer::for_language("english")).unwrap();
        // literal alias
        assert!(cases.get("doggies").is_some_and(|set| set.contains("dog")));
        // stemmed alias
        assert!(cases.get("doggi").is_some_and(|set| set.contains("dog")));
        assert!(cases.get("puppy").is_some_and(|set| set.contains("dog")));
    }

    #[test]
    fn test_special_cases_skip_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.csv");
        std::fs::write(&path, "dog,,doggie\n,orphan\n").unwrap();

        let cases = load_special_cases(&path, &LanguageStemmer::identity()).unwrap();
        assert!(cases.get("doggie").is_some_and(|set| set.contains("dog")));
        // row with empty item column contributes nothing
        assert!(!cases.contains_key("orphan"));
    }
}
