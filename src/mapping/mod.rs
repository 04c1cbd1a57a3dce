//! Alias map construction
//!
//! The alias map is the join between free-text corpus tokens and the fixed
//! checklist: it maps every recognized surface form or stem to the set of
//! checklist items it can denote. It is assembled from four partial maps
//! (identity, special cases, pattern expansions, stem re-keyings) merged
//! with [`union_merge`].

pub mod patterns;

use crate::stemmer::LanguageStemmer;
use std::collections::{BTreeMap, BTreeSet};

/// Normalized form → set of checklist items it can denote.
///
/// Invariant: every checklist item maps at least to itself.
pub type AliasMap = BTreeMap<String, BTreeSet<String>>;

/// Merge `other` into `into`, unioning item sets on key collision.
///
/// Union on collision makes the merge commutative and associative: merging
/// partial maps in any order yields the same table, and no source's items
/// are ever overwritten.
pub fn union_merge(into: &mut AliasMap, other: AliasMap) {
    for (key, items) in other {
        into.entry(key).or_default().extend(items);
    }
}

/// Build the alias map for one language.
///
/// Build order (each step union-merged into the running result):
/// 1. every checklist item → itself;
/// 2. the special-case overrides (already holding literal and stemmed keys);
/// 3. every pattern-expanded variant → its item;
/// 4. the whole table so far re-keyed through the stemmer, so both a
///    surface form and its stem resolve to the same item set.
pub fn build_alias_map(
    checklist: &[String],
    special_cases: &AliasMap,
    stemmer: &LanguageStemmer,
) -> AliasMap {
    let mut map: AliasMap = checklist
        .iter()
        .map(|item| (item.clone(), BTreeSet::from([item.clone()])))
        .collect();

    union_merge(&mut map, special_cases.clone());

    let mut pattern_map = AliasMap::new();
    for item in checklist {
        for option in patterns::expand_item(item) {
            pattern_map.entry(option).or_default().insert(item.clone());
        }
    }
    union_merge(&mut map, pattern_map);

    let mut stem_map = AliasMap::new();
    for (key, items) in &map {
        stem_map
            .entry(stemmer.stem(key))
            .or_default()
            .extend(items.iter().cloned());
    }
    union_merge(&mut map, stem_map);

    map
}
