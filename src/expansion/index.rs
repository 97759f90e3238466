//! Alternative-term index builder.
//!
//! Maps every normalized term (record word, alternative spelling, related
//! key) to the canonical record words it resolves to. Key lists keep
//! first-seen order and never repeat a key.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::{debug, info};

use crate::dictionary::relationship::RelationshipTable;
use crate::expansion::normalize::normalize_term;

/// One normalized term and the canonical keys it resolves to.
#[derive(Debug, Clone)]
pub struct IndexedTerm {
    term: String,
    keys: Vec<String>,
}

impl IndexedTerm {
    /// The normalized term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Canonical keys, in first-seen order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// Immutable mapping from normalized terms to canonical keys.
#[derive(Debug, Clone)]
pub struct AlternativeTermIndex {
    table: Arc<RelationshipTable>,
    /// Terms in first-seen order.
    terms: Vec<IndexedTerm>,
    /// Normalized term -> position in `terms`.
    positions: AHashMap<String, usize>,
}

impl AlternativeTermIndex {
    /// Build the index from a relationship table.
    ///
    /// Runs three passes: record words, alternatives, then related keys.
    /// A related key that names a record also adds that record to the
    /// owner's own entry, so a relation declared on one side is found from
    /// both. Related keys naming no record are registered as plain terms.
    /// Propagation requires an exact-case key match.
    pub fn build(table: Arc<RelationshipTable>) -> Self {
        let mut index = AlternativeTermIndex {
            table: Arc::clone(&table),
            terms: Vec::new(),
            positions: AHashMap::new(),
        };

        for record in table.records() {
            index.register(&record.word, &record.word);
        }

        for record in table.records() {
            for alternative in &record.alternatives {
                index.register(alternative, &record.word);
            }
        }

        for record in table.records() {
            for related in &record.related {
                index.register(related, &record.word);
                if table.contains_key(related) {
                    index.register(&record.word, related);
                } else {
                    debug!(
                        "Related key '{}' of '{}' names no record; not propagated",
                        related, record.word
                    );
                }
            }
        }

        info!(
            "Built alternative-term index: {} terms from {} records",
            index.terms.len(),
            table.len()
        );

        index
    }

    fn register(&mut self, term: &str, key: &str) {
        let normalized = normalize_term(term);
        if normalized.is_empty() {
            return;
        }

        let position = match self.positions.get(&normalized) {
            Some(&position) => position,
            None => {
                self.terms.push(IndexedTerm {
                    term: normalized.clone(),
                    keys: Vec::new(),
                });
                self.positions.insert(normalized, self.terms.len() - 1);
                self.terms.len() - 1
            }
        };

        let keys = &mut self.terms[position].keys;
        if !keys.iter().any(|existing| existing == key) {
            keys.push(key.to_string());
        }
    }

    /// Canonical keys for an already normalized term.
    pub fn lookup(&self, normalized: &str) -> Option<&[String]> {
        self.positions
            .get(normalized)
            .map(|&position| self.terms[position].keys.as_slice())
    }

    /// All indexed terms in first-seen order.
    pub fn terms(&self) -> &[IndexedTerm] {
        &self.terms
    }

    /// The relationship table this index was built from.
    pub fn table(&self) -> &RelationshipTable {
        &self.table
    }

    /// Number of distinct normalized terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of term -> key associations.
    pub fn association_count(&self) -> usize {
        self.terms.iter().map(|term| term.keys.len()).sum()
    }
}

/// Build an alternative-term index from a shared relationship table.
pub fn build_alternative_index(table: &Arc<RelationshipTable>) -> AlternativeTermIndex {
    AlternativeTermIndex::build(Arc::clone(table))
}

/// Two indexes are equal when they map the same terms to the same key sets,
/// whatever the construction order.
impl PartialEq for AlternativeTermIndex {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self.terms.iter().all(|indexed| {
                other.lookup(&indexed.term).is_some_and(|keys| {
                    keys.len() == indexed.keys.len()
                        && keys.iter().collect::<AHashSet<_>>()
                            == indexed.keys.iter().collect::<AHashSet<_>>()
                })
            })
    }
}

impl Eq for AlternativeTermIndex {}
