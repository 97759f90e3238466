//! Prefix-first fuzzy matching over the dictionary word list.
//!
//! Results come in two tiers. Entries whose key starts with the query are
//! returned first, in word-list order, and are never capped. The remaining
//! entries are scored by edit distance, filtered by a threshold, ordered by
//! ascending score then key, and capped. A part-of-speech filter runs after
//! ranking, so the threshold and the cap apply to the unfiltered pool.

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::MatcherConfig;
use crate::dictionary::entry::DictionaryEntry;
use crate::expansion::normalize::normalize_term;
use crate::matcher::levenshtein::QueryPattern;

/// One searchable item: a key plus short display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListing {
    pub key: String,
    pub text: String,
    pub part_of_speech: String,
}

impl WordListing {
    /// Create a listing without a part of speech.
    pub fn new<K: Into<String>, T: Into<String>>(key: K, text: T) -> Self {
        WordListing {
            key: key.into(),
            text: text.into(),
            part_of_speech: String::new(),
        }
    }

    /// Set the part of speech.
    pub fn with_part_of_speech<S: Into<String>>(mut self, part_of_speech: S) -> Self {
        self.part_of_speech = part_of_speech.into();
        self
    }
}

impl From<&DictionaryEntry> for WordListing {
    fn from(entry: &DictionaryEntry) -> Self {
        WordListing {
            key: entry.key.clone(),
            text: entry.definition.clone(),
            part_of_speech: entry.part_of_speech.clone(),
        }
    }
}

/// Which tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Prefix,
    Fuzzy,
    /// Reached through alternative terms or relationships rather than text
    /// closeness. Only produced by [`Lexicon::suggest`](crate::lexicon::Lexicon::suggest).
    Related,
}

/// Which part of the listing a fuzzy score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Key,
    DisplayText,
}

/// A ranked match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedEntry {
    pub key: String,
    pub text: String,
    pub part_of_speech: String,
    pub tier: MatchTier,
    /// 0.0 is a perfect match; prefix and related matches always score 0.0.
    pub score: f64,
    pub matched_on: MatchField,
}

impl MatchedEntry {
    fn from_listing(listing: &WordListing, tier: MatchTier, score: f64, field: MatchField) -> Self {
        MatchedEntry {
            key: listing.key.clone(),
            text: listing.text.clone(),
            part_of_speech: listing.part_of_speech.clone(),
            tier,
            score,
            matched_on: field,
        }
    }
}

/// Optional filters for [`FuzzyMatcher::find_words`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Keep only entries with this part of speech (case-insensitive).
    pub part_of_speech: Option<String>,
}

impl FindOptions {
    /// Filter on a part of speech.
    pub fn part_of_speech<S: Into<String>>(part_of_speech: S) -> Self {
        FindOptions {
            part_of_speech: Some(part_of_speech.into()),
        }
    }
}

/// Ranks word listings by textual closeness to a query.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: MatcherConfig,
}

impl FuzzyMatcher {
    /// Create a matcher with the given configuration.
    pub fn new(config: MatcherConfig) -> Self {
        FuzzyMatcher { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Find entries matching `query`.
    ///
    /// `limit` caps the fuzzy tier and defaults to `max_fuzzy_results`.
    pub fn find_words(
        &self,
        query: &str,
        words: &[WordListing],
        limit: Option<usize>,
        options: &FindOptions,
    ) -> Vec<MatchedEntry> {
        let normalized = normalize_term(query);
        if normalized.is_empty() || words.is_empty() {
            return Vec::new();
        }

        let pattern = QueryPattern::new(normalized.as_str());
        let mut prefix_tier = Vec::new();
        let mut fuzzy_tier = Vec::new();

        for listing in words {
            let key = listing.key.to_lowercase();
            if key.starts_with(&normalized) {
                prefix_tier.push(MatchedEntry::from_listing(
                    listing,
                    MatchTier::Prefix,
                    0.0,
                    MatchField::Key,
                ));
            } else if pattern.len() >= self.config.min_query_len
                && let Some((score, field)) = self.score(&pattern, &key, listing)
            {
                fuzzy_tier.push(MatchedEntry::from_listing(
                    listing,
                    MatchTier::Fuzzy,
                    score,
                    field,
                ));
            }
        }

        fuzzy_tier.sort_by(compare_fuzzy);
        fuzzy_tier.truncate(limit.unwrap_or(self.config.max_fuzzy_results));

        debug!(
            "find_words('{}'): {} prefix, {} fuzzy matches",
            query,
            prefix_tier.len(),
            fuzzy_tier.len()
        );

        let mut results = prefix_tier;
        results.extend(fuzzy_tier);

        if let Some(part_of_speech) = &options.part_of_speech {
            let wanted = normalize_term(part_of_speech);
            results.retain(|entry| normalize_term(&entry.part_of_speech) == wanted);
        }

        results
    }

    /// Score a listing; `None` when it falls outside the threshold.
    fn score(
        &self,
        pattern: &QueryPattern,
        key: &str,
        listing: &WordListing,
    ) -> Option<(f64, MatchField)> {
        let key_score = pattern.word_score(key).min(pattern.window_score(key));
        let mut best = (key_score, MatchField::Key);

        if self.config.match_display_text && !listing.text.is_empty() {
            let text_score = pattern.window_score(&listing.text.to_lowercase())
                + self.config.display_text_penalty;
            if text_score < best.0 {
                best = (text_score, MatchField::DisplayText);
            }
        }

        (best.0 <= self.config.threshold).then_some(best)
    }
}

fn compare_fuzzy(a: &MatchedEntry, b: &MatchedEntry) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.key.to_lowercase().cmp(&b.key.to_lowercase()))
        .then_with(|| a.key.cmp(&b.key))
}

/// Find entries with the default matcher configuration.
pub fn find_words(query: &str, words: &[WordListing], limit: Option<usize>) -> Vec<MatchedEntry> {
    FuzzyMatcher::default().find_words(query, words, limit, &FindOptions::default())
}
