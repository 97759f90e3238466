//! Search-term expansion over the alternative-term index.

use std::sync::Arc;

use ahash::AHashSet;
use log::debug;

use crate::expansion::index::AlternativeTermIndex;
use crate::expansion::normalize::{normalize_term, overlaps};

/// Canonical keys collected during one expansion, in first-found order.
#[derive(Debug, Default)]
struct FoundKeys {
    keys: Vec<String>,
    seen: AHashSet<String>,
}

impl FoundKeys {
    fn insert(&mut self, key: &str) {
        if !self.seen.contains(key) {
            self.seen.insert(key.to_string());
            self.keys.push(key.to_string());
        }
    }

    fn extend<'a, I: IntoIterator<Item = &'a String>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

/// Expand a raw search string into the canonical keys it should surface.
///
/// The result holds each key once. Its order is stable for a given input and
/// index but carries no meaning. Blank input yields an empty result.
pub fn expand_search_term(index: &AlternativeTermIndex, search_term: &str) -> Vec<String> {
    let normalized = normalize_term(search_term);
    if normalized.is_empty() {
        return Vec::new();
    }

    let table = index.table();
    let mut found = FoundKeys::default();

    // Direct and alternative hits.
    if let Some(keys) = index.lookup(&normalized) {
        found.extend(keys);
    }

    // Substring hits in both directions, O(index size).
    for indexed in index.terms() {
        if overlaps(indexed.term(), &normalized) {
            found.extend(indexed.keys());
        }
    }

    // One hop along the relationship graph.
    let direct = found.keys.clone();
    for key in &direct {
        if let Some(record) = table.get(key) {
            found.extend(&record.related);
        }
    }

    // Exact-key fallback.
    if table.contains_key(search_term) {
        found.insert(search_term);
    }
    for key in table.keys_folding_to(&normalized) {
        found.insert(key);
    }

    debug!(
        "Expanded '{}' to {} keys ({} before relationship hop)",
        search_term,
        found.keys.len(),
        direct.len()
    );

    found.keys
}

/// Expands search terms against a shared index.
#[derive(Debug, Clone)]
pub struct SearchTermExpander {
    index: Arc<AlternativeTermIndex>,
}

impl SearchTermExpander {
    /// Create an expander over the given index.
    pub fn new(index: Arc<AlternativeTermIndex>) -> Self {
        SearchTermExpander { index }
    }

    /// Expand a raw search string. See [`expand_search_term`].
    pub fn expand(&self, search_term: &str) -> Vec<String> {
        expand_search_term(&self.index, search_term)
    }

    /// Expansion with the searched term itself removed (case-insensitive).
    pub fn expand_excluding_self(&self, search_term: &str) -> Vec<String> {
        let normalized = normalize_term(search_term);
        self.expand(search_term)
            .into_iter()
            .filter(|key| normalize_term(key) != normalized)
            .collect()
    }

    /// The underlying index.
    pub fn index(&self) -> &Arc<AlternativeTermIndex> {
        &self.index
    }
}
