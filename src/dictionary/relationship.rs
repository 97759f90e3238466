//! Hand-authored relationship records and the table that holds them.

use std::fmt;

use ahash::AHashMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::expansion::normalize::normalize_term;

/// Alternative spellings and related entries for one canonical key.
///
/// Missing `alternatives`/`related` fields deserialize to empty lists, so
/// nothing downstream has to care about absent data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Canonical key, normally matching a dictionary entry.
    pub word: String,
    /// Alternative spellings or synonyms a user might type.
    #[serde(default)]
    pub alternatives: Vec<String>,
    /// Keys of other records that are conceptually linked.
    #[serde(default)]
    pub related: Vec<String>,
}

impl RelationshipRecord {
    /// Create a record with no alternatives and no relations.
    pub fn new<S: Into<String>>(word: S) -> Self {
        RelationshipRecord {
            word: word.into(),
            alternatives: Vec::new(),
            related: Vec::new(),
        }
    }

    /// Set the alternative terms.
    pub fn with_alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives = alternatives.into_iter().map(Into::into).collect();
        self
    }

    /// Set the related keys.
    pub fn with_related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related = related.into_iter().map(Into::into).collect();
        self
    }

    /// Drop blank terms and repeated ones, keeping first-seen order.
    fn sanitize(&mut self) {
        dedup_non_blank(&mut self.alternatives);
        dedup_non_blank(&mut self.related);
    }

    fn absorb(&mut self, other: RelationshipRecord) {
        self.alternatives.extend(other.alternatives);
        self.related.extend(other.related);
        self.sanitize();
    }
}

fn dedup_non_blank(terms: &mut Vec<String>) {
    let mut seen = Vec::with_capacity(terms.len());
    terms.retain(|term| {
        if term.trim().is_empty() || seen.contains(term) {
            false
        } else {
            seen.push(term.clone());
            true
        }
    });
}

/// A data inconsistency found in the relationship table.
///
/// These are informational. The index tolerates all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableDiagnostic {
    /// A related key that names no record.
    DanglingRelated { word: String, related: String },
    /// A related key that only matches a record when case is ignored.
    CaseMismatchedRelated {
        word: String,
        related: String,
        candidate: String,
    },
    /// A record that lists itself as related.
    SelfReference { word: String },
    /// An alternative shared by several records.
    SharedAlternative {
        alternative: String,
        words: Vec<String>,
    },
}

impl fmt::Display for TableDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableDiagnostic::DanglingRelated { word, related } => {
                write!(f, "'{word}' relates to unknown key '{related}'")
            }
            TableDiagnostic::CaseMismatchedRelated {
                word,
                related,
                candidate,
            } => write!(
                f,
                "'{word}' relates to '{related}', which only matches '{candidate}' ignoring case"
            ),
            TableDiagnostic::SelfReference { word } => {
                write!(f, "'{word}' lists itself as related")
            }
            TableDiagnostic::SharedAlternative { alternative, words } => {
                write!(
                    f,
                    "alternative '{alternative}' is shared by {}",
                    words.join(", ")
                )
            }
        }
    }
}

/// The full relationship table, keyed by exact record word.
#[derive(Debug, Clone, Default)]
pub struct RelationshipTable {
    records: Vec<RelationshipRecord>,
    /// Exact word -> position.
    positions: AHashMap<String, usize>,
    /// Lowercased word -> positions of every record folding to it.
    folded: AHashMap<String, Vec<usize>>,
}

impl RelationshipTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from records.
    ///
    /// Records with a blank word are skipped. A repeated word merges its
    /// lists into the first record with that word.
    pub fn from_records<I: IntoIterator<Item = RelationshipRecord>>(records: I) -> Self {
        let mut table = RelationshipTable::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    fn insert(&mut self, mut record: RelationshipRecord) {
        if record.word.trim().is_empty() {
            warn!("Skipping relationship record with a blank word");
            return;
        }

        if let Some(&position) = self.positions.get(&record.word) {
            warn!(
                "Duplicate relationship record '{}' merged into the first one",
                record.word
            );
            self.records[position].absorb(record);
            return;
        }

        record.sanitize();
        let position = self.records.len();
        self.positions.insert(record.word.clone(), position);
        self.folded
            .entry(normalize_term(&record.word))
            .or_default()
            .push(position);
        self.records.push(record);
    }

    /// Look up a record by its exact word.
    pub fn get(&self, word: &str) -> Option<&RelationshipRecord> {
        self.positions
            .get(word)
            .map(|&position| &self.records[position])
    }

    /// Check whether a record with this exact word exists.
    pub fn contains_key(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// Records whose word equals `normalized` once lowercased.
    pub fn keys_folding_to(&self, normalized: &str) -> Vec<&str> {
        self.folded
            .get(normalized)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| self.records[position].word.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All records in authoring order.
    pub fn records(&self) -> &[RelationshipRecord] {
        &self.records
    }

    /// All record words in authoring order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.word.as_str())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Report inconsistencies in the authored data.
    pub fn diagnostics(&self) -> Vec<TableDiagnostic> {
        let mut diagnostics = Vec::new();

        for record in &self.records {
            for related in &record.related {
                if related == &record.word {
                    diagnostics.push(TableDiagnostic::SelfReference {
                        word: record.word.clone(),
                    });
                } else if !self.contains_key(related) {
                    match self.keys_folding_to(&normalize_term(related)).first() {
                        Some(candidate) => {
                            diagnostics.push(TableDiagnostic::CaseMismatchedRelated {
                                word: record.word.clone(),
                                related: related.clone(),
                                candidate: candidate.to_string(),
                            })
                        }
                        None => diagnostics.push(TableDiagnostic::DanglingRelated {
                            word: record.word.clone(),
                            related: related.clone(),
                        }),
                    }
                }
            }
        }

        let mut owners: Vec<(String, Vec<String>)> = Vec::new();
        let mut owner_positions: AHashMap<String, usize> = AHashMap::new();
        for record in &self.records {
            for alternative in &record.alternatives {
                let normalized = normalize_term(alternative);
                let position = *owner_positions.entry(normalized.clone()).or_insert_with(|| {
                    owners.push((normalized, Vec::new()));
                    owners.len() - 1
                });
                let words = &mut owners[position].1;
                if !words.contains(&record.word) {
                    words.push(record.word.clone());
                }
            }
        }
        diagnostics.extend(
            owners
                .into_iter()
                .filter(|(_, words)| words.len() > 1)
                .map(|(alternative, words)| TableDiagnostic::SharedAlternative { alternative, words }),
        );

        diagnostics
    }
}
