//! Expiring cache of generated explanations.

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::CacheConfig;
use crate::context::store::KeyValueStore;
use crate::error::Result;
use crate::expansion::normalize::normalize_term;

/// A stored explanation and when it was generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedExplanation {
    pub content: String,
    pub cached_at: DateTime<Utc>,
}

/// Explanations keyed by `<key_prefix><normalized word>`, expiring after a
/// fixed number of hours.
#[derive(Debug)]
pub struct ExplanationCache<S: KeyValueStore> {
    store: S,
    config: CacheConfig,
}

impl<S: KeyValueStore> ExplanationCache<S> {
    /// Create a cache over `store`.
    pub fn new(store: S, config: CacheConfig) -> Self {
        ExplanationCache { store, config }
    }

    /// The store key for a word.
    pub fn key_for(&self, word: &str) -> String {
        format!("{}{}", self.config.key_prefix, normalize_term(word))
    }

    fn ttl(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.config.ttl_hours))
    }

    fn is_expired(&self, entry: &CachedExplanation, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(entry.cached_at) >= self.ttl()
    }

    /// A fresh cached explanation for `word`, if any.
    pub fn get(&self, word: &str) -> Result<Option<CachedExplanation>> {
        self.get_at(word, Utc::now())
    }

    /// Like [`get`](Self::get) with an explicit clock.
    ///
    /// Expired or unreadable entries are removed and reported as missing.
    pub fn get_at(&self, word: &str, now: DateTime<Utc>) -> Result<Option<CachedExplanation>> {
        let key = self.key_for(word);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<CachedExplanation>(&raw) {
            Ok(entry) if !self.is_expired(&entry, now) => Ok(Some(entry)),
            Ok(_) => {
                debug!("Cached explanation for '{word}' expired");
                self.store.remove(&key)?;
                Ok(None)
            }
            Err(e) => {
                warn!("Dropping unreadable cached explanation '{key}': {e}");
                self.store.remove(&key)?;
                Ok(None)
            }
        }
    }

    /// Store an explanation for `word`.
    pub fn put(&self, word: &str, content: &str) -> Result<CachedExplanation> {
        self.put_at(word, content, Utc::now())
    }

    /// Like [`put`](Self::put) with an explicit clock.
    pub fn put_at(
        &self,
        word: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<CachedExplanation> {
        let entry = CachedExplanation {
            content: content.to_string(),
            cached_at: now,
        };
        self.store
            .set(&self.key_for(word), serde_json::to_string(&entry)?)?;
        Ok(entry)
    }

    /// Remove every expired or unreadable entry under this cache's prefix.
    ///
    /// Returns the number of removed entries.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize> {
        let mut removed = 0;
        for key in self.store.keys()? {
            if !key.starts_with(&self.config.key_prefix) {
                continue;
            }
            let stale = match self.store.get(&key)? {
                Some(raw) => serde_json::from_str::<CachedExplanation>(&raw)
                    .map(|entry| self.is_expired(&entry, now))
                    .unwrap_or(true),
                None => false,
            };
            if stale {
                self.store.remove(&key)?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::store::MemoryStore;

    fn cache(ttl_hours: u32) -> ExplanationCache<MemoryStore> {
        ExplanationCache::new(
            MemoryStore::new(),
            CacheConfig {
                ttl_hours,
                ..CacheConfig::default()
            },
        )
    }

    #[test]
    fn test_key_format() {
        let cache = cache(1);
        assert_eq!(cache.key_for(" Rizz "), "enhanced-v2-rizz");
    }

    #[test]
    fn test_fresh_entry_is_returned() {
        let cache = cache(24);
        let now = Utc::now();
        cache.put_at("rizz", "Charm.", now).unwrap();

        let hit = cache.get_at("RIZZ", now + TimeDelta::hours(23)).unwrap();
        assert_eq!(hit.map(|entry| entry.content), Some("Charm.".to_string()));
    }

    #[test]
    fn test_expired_entry_is_removed() {
        let cache = cache(24);
        let now = Utc::now();
        cache.put_at("rizz", "Charm.", now).unwrap();

        assert!(cache.get_at("rizz", now + TimeDelta::hours(24)).unwrap().is_none());
        assert!(cache.store().is_empty());
    }

    #[test]
    fn test_unreadable_entry_is_dropped() {
        let cache = cache(24);
        cache
            .store()
            .set("enhanced-v2-rizz", "not json".to_string())
            .unwrap();

        assert!(cache.get("rizz").unwrap().is_none());
        assert!(cache.store().is_empty());
    }

    #[test]
    fn test_purge_only_touches_own_prefix() {
        let cache = cache(1);
        let now = Utc::now();
        cache.put_at("old", "x", now - TimeDelta::hours(2)).unwrap();
        cache.put_at("new", "y", now).unwrap();
        cache
            .store()
            .set("search-history", "[]".to_string())
            .unwrap();

        assert_eq!(cache.purge_expired(now).unwrap(), 1);
        assert_eq!(cache.store().len(), 2);
        assert!(cache.get_at("new", now).unwrap().is_some());
    }
}
