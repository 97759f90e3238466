//! Dictionary entries and the keyed entry collection.

use ahash::AHashMap;
use log::warn;
use serde::{Deserialize, Serialize};

/// A single dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// Canonical, case-preserving key.
    pub key: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub etymology: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub pronunciation: String,
}

impl DictionaryEntry {
    /// Create an entry with only a key and a definition.
    pub fn new<K: Into<String>, D: Into<String>>(key: K, definition: D) -> Self {
        DictionaryEntry {
            key: key.into(),
            definition: definition.into(),
            etymology: String::new(),
            part_of_speech: String::new(),
            example: String::new(),
            pronunciation: String::new(),
        }
    }

    /// Set the part of speech.
    pub fn with_part_of_speech<S: Into<String>>(mut self, part_of_speech: S) -> Self {
        self.part_of_speech = part_of_speech.into();
        self
    }

    /// Set the etymology.
    pub fn with_etymology<S: Into<String>>(mut self, etymology: S) -> Self {
        self.etymology = etymology.into();
        self
    }

    /// Set the usage example.
    pub fn with_example<S: Into<String>>(mut self, example: S) -> Self {
        self.example = example.into();
        self
    }

    /// Set the pronunciation.
    pub fn with_pronunciation<S: Into<String>>(mut self, pronunciation: S) -> Self {
        self.pronunciation = pronunciation.into();
        self
    }
}

/// The loaded set of dictionary entries, in authoring order.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    /// Exact key -> position.
    by_key: AHashMap<String, usize>,
    /// Lowercased key -> first position with that folded key.
    by_folded_key: AHashMap<String, usize>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from entries.
    ///
    /// Entries with a blank key are skipped. When a key repeats, the first
    /// entry wins.
    pub fn from_entries<I: IntoIterator<Item = DictionaryEntry>>(entries: I) -> Self {
        let mut dictionary = Dictionary::new();
        for entry in entries {
            dictionary.insert(entry);
        }
        dictionary
    }

    fn insert(&mut self, entry: DictionaryEntry) {
        if entry.key.trim().is_empty() {
            warn!("Skipping dictionary entry with a blank key");
            return;
        }
        if self.by_key.contains_key(&entry.key) {
            warn!("Duplicate dictionary entry '{}' ignored", entry.key);
            return;
        }

        let position = self.entries.len();
        self.by_key.insert(entry.key.clone(), position);
        self.by_folded_key
            .entry(entry.key.to_lowercase())
            .or_insert(position);
        self.entries.push(entry);
    }

    /// Look up an entry by its exact key.
    pub fn get(&self, key: &str) -> Option<&DictionaryEntry> {
        self.by_key.get(key).map(|&position| &self.entries[position])
    }

    /// Look up an entry by exact key, then case-insensitively.
    pub fn find(&self, key: &str) -> Option<&DictionaryEntry> {
        self.get(key).or_else(|| {
            self.by_folded_key
                .get(&key.trim().to_lowercase())
                .map(|&position| &self.entries[position])
        })
    }

    /// Check whether an exact key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// All entries in authoring order.
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
