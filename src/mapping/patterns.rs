//! Surface-form expansion for checklist items
//!
//! Checklist items carry orthographic conventions that never appear
//! verbatim in transcripts: slash-separated alternatives (`bunny/rabbit`),
//! a trailing asterisk for productive forms (`mommy*`), a parenthetical
//! qualifier (`chicken (animal)`), reduplications (`woof woof`), and
//! multi-word items that transcribers join up in several ways. Expansion
//! derives every surface form an item may take. Case handling happens
//! upstream; nothing here changes case.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// `mommy*` → `mommy`
static TRAILING_ASTERISK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\*$").expect("valid regex"));

/// `chicken (animal)` → `chicken`
static TRAILING_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\s\(.*$").expect("valid regex"));

/// `woof woof` → `woof`: the item is exactly two copies of one substring
/// separated by a single whitespace char. The split position is unique
/// when a match exists, so scanning whitespace positions is equivalent to
/// the backreference pattern `^(.+)\s\1$`.
fn reduplication_half(text: &str) -> Option<&str> {
    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            let prefix = &text[..i];
            let suffix = &text[i + ch.len_utf8()..];
            if !prefix.is_empty() && prefix == suffix {
                return Some(prefix);
            }
        }
    }
    None
}

/// Expand one checklist item into the set of surface forms it may take.
///
/// The result always contains the slash-split alternatives themselves, so
/// it is never empty for a non-empty item.
pub fn expand_item(item: &str) -> BTreeSet<String> {
    let mut options = BTreeSet::new();

    for alternative in item.split('/') {
        for rule in [&TRAILING_ASTERISK, &TRAILING_PARENTHETICAL] {
            if let Some(caps) = rule.captures(alternative) {
                options.insert(caps[1].to_string());
            }
        }
        if let Some(half) = reduplication_half(alternative) {
            options.insert(half.to_string());
        }

        // Multi-word items: transcribers join the words directly, with an
        // underscore, or with a plus.
        if alternative.contains(' ') {
            let words: Vec<&str> = alternative.split(' ').collect();
            options.insert(words.concat());
            options.insert(words.join("_"));
            options.insert(words.join("+"));
        }

        options.insert(alternative.to_string());
    }

    options
}
