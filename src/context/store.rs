//! Opaque key-value storage used by the explanation cache.

use std::fmt;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::error::Result;

/// A string key-value store.
///
/// This is the only thing the cache needs from its host; a browser's local
/// storage, a file or a database can all sit behind it.
pub trait KeyValueStore: Send + Sync + fmt::Debug {
    /// Read a value.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Delete a value. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys currently stored.
    fn keys(&self) -> Result<Vec<String>>;
}

/// An in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<AHashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.values.read().keys().cloned().collect())
    }
}
