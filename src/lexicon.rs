//! The assembled lexicon: dictionary, relationship index and matcher.
//!
//! A [`Lexicon`] is built once by the application and handed around by
//! reference or `Arc`. It owns every derived structure, so lookups never
//! reach for global state.

use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;
use log::info;
use serde::Serialize;

use crate::config::SlangdexConfig;
use crate::dictionary::builtin::BuiltinLexicon;
use crate::dictionary::entry::{Dictionary, DictionaryEntry};
use crate::dictionary::loader::{load_entries, load_relationships, log_diagnostics};
use crate::dictionary::relationship::RelationshipTable;
use crate::error::Result;
use crate::expansion::expander::SearchTermExpander;
use crate::expansion::index::AlternativeTermIndex;
use crate::matcher::fuzzy::{
    FindOptions, FuzzyMatcher, MatchField, MatchTier, MatchedEntry, WordListing,
};

/// Summary counts for a loaded lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconStats {
    pub entries: usize,
    pub relationship_records: usize,
    pub indexed_terms: usize,
    pub term_associations: usize,
    pub diagnostics: usize,
}

/// Dictionary entries plus everything derived from them.
#[derive(Debug, Clone)]
pub struct Lexicon {
    dictionary: Arc<Dictionary>,
    expander: SearchTermExpander,
    matcher: FuzzyMatcher,
    listings: Arc<Vec<WordListing>>,
    config: SlangdexConfig,
}

impl Lexicon {
    /// Assemble a lexicon, building the alternative-term index.
    pub fn new(dictionary: Dictionary, table: RelationshipTable, config: SlangdexConfig) -> Self {
        let index = AlternativeTermIndex::build(Arc::new(table));
        Self::with_index(Arc::new(dictionary), Arc::new(index), config)
    }

    /// Assemble a lexicon around an index that is already built.
    pub fn with_index(
        dictionary: Arc<Dictionary>,
        index: Arc<AlternativeTermIndex>,
        config: SlangdexConfig,
    ) -> Self {
        let listings = dictionary.entries().iter().map(WordListing::from).collect();
        Lexicon {
            matcher: FuzzyMatcher::new(config.matcher.clone()),
            expander: SearchTermExpander::new(index),
            listings: Arc::new(listings),
            dictionary,
            config,
        }
    }

    /// The built-in sample lexicon.
    pub fn builtin(config: SlangdexConfig) -> Self {
        Self::new(
            BuiltinLexicon::entries(),
            BuiltinLexicon::relationships(),
            config,
        )
    }

    /// Load entries and relationships from JSON files.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        entries_path: P,
        relationships_path: Q,
        config: SlangdexConfig,
    ) -> Result<Self> {
        let dictionary = load_entries(entries_path)?;
        let table = load_relationships(relationships_path)?;
        let lexicon = Self::new(dictionary, table, config);
        info!("Lexicon ready: {} entries", lexicon.dictionary.len());
        Ok(lexicon)
    }

    /// Expand a raw search string into canonical keys.
    pub fn expand_search_term(&self, search_term: &str) -> Vec<String> {
        self.expander.expand(search_term)
    }

    /// Prefix-first fuzzy search over the dictionary.
    pub fn find_words(
        &self,
        query: &str,
        limit: Option<usize>,
        options: &FindOptions,
    ) -> Vec<MatchedEntry> {
        self.matcher.find_words(query, &self.listings, limit, options)
    }

    /// Live autocomplete: fuzzy/prefix matches, then expansion hits.
    ///
    /// Expansion hits that are dictionary entries and not already matched are
    /// appended after the ranked matches with the `Related` tier, in
    /// expansion order.
    pub fn suggest(&self, query: &str, limit: Option<usize>) -> Vec<MatchedEntry> {
        let mut results = self.find_words(query, limit, &FindOptions::default());
        let mut seen: AHashSet<String> = results.iter().map(|m| m.key.clone()).collect();

        for key in self.expand_search_term(query) {
            if seen.contains(&key) {
                continue;
            }
            if let Some(entry) = self.dictionary.get(&key) {
                let listing = WordListing::from(entry);
                results.push(MatchedEntry {
                    key: listing.key,
                    text: listing.text,
                    part_of_speech: listing.part_of_speech,
                    tier: MatchTier::Related,
                    score: 0.0,
                    matched_on: MatchField::Key,
                });
                seen.insert(key);
            }
        }

        results
    }

    /// Look up an entry by exact key, then case-insensitively.
    pub fn entry(&self, key: &str) -> Option<&DictionaryEntry> {
        self.dictionary.find(key)
    }

    /// Look up an entry by key, falling back to alternative terms.
    ///
    /// Tries [`entry`](Self::entry) first, then the first expansion hit that
    /// is a dictionary entry, so "bobo" resolves to "8080".
    pub fn resolve_entry(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entry(word).or_else(|| {
            self.expand_search_term(word)
                .iter()
                .find_map(|key| self.dictionary.get(key))
        })
    }

    /// Dictionary entries related to `word`, excluding the word itself.
    pub fn related_entries(&self, word: &str) -> Vec<&DictionaryEntry> {
        self.expander
            .expand_excluding_self(word)
            .iter()
            .filter_map(|key| self.dictionary.get(key))
            .collect()
    }

    /// The dictionary.
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// The alternative-term index.
    pub fn index(&self) -> &Arc<AlternativeTermIndex> {
        self.expander.index()
    }

    /// The expander.
    pub fn expander(&self) -> &SearchTermExpander {
        &self.expander
    }

    /// The active configuration.
    pub fn config(&self) -> &SlangdexConfig {
        &self.config
    }

    /// Summary counts.
    pub fn stats(&self) -> LexiconStats {
        let index = self.index();
        LexiconStats {
            entries: self.dictionary.len(),
            relationship_records: index.table().len(),
            indexed_terms: index.len(),
            term_associations: index.association_count(),
            diagnostics: index.table().diagnostics().len(),
        }
    }

    /// Log data inconsistencies at warn level.
    pub fn log_diagnostics(&self) {
        log_diagnostics(self.index().table());
    }
}
