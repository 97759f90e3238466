//! Build-once holder for a shared alternative-term index.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::dictionary::relationship::RelationshipTable;
use crate::error::{Result, SlangdexError};
use crate::expansion::index::AlternativeTermIndex;

/// Holds an index that is built on first use and shared afterwards.
///
/// Concurrent callers of [`IndexHandle::get_or_build`] observe a single
/// build. Reading before any build is an integration error and fails with
/// [`SlangdexError::IndexNotBuilt`] instead of looking like "no matches".
#[derive(Debug, Default)]
pub struct IndexHandle {
    slot: RwLock<Option<Arc<AlternativeTermIndex>>>,
    builds: AtomicUsize,
}

impl IndexHandle {
    /// Create an empty handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle around an index that is already built.
    pub fn with_index(index: Arc<AlternativeTermIndex>) -> Self {
        IndexHandle {
            slot: RwLock::new(Some(index)),
            builds: AtomicUsize::new(0),
        }
    }

    /// The built index.
    pub fn get(&self) -> Result<Arc<AlternativeTermIndex>> {
        self.slot.read().clone().ok_or(SlangdexError::IndexNotBuilt)
    }

    /// The built index, building it from `table` if nobody has yet.
    pub fn get_or_build(&self, table: &Arc<RelationshipTable>) -> Arc<AlternativeTermIndex> {
        if let Some(index) = self.slot.read().as_ref() {
            return Arc::clone(index);
        }

        let mut slot = self.slot.write();
        // another caller may have built it while we waited for the lock
        if let Some(index) = slot.as_ref() {
            return Arc::clone(index);
        }

        let index = Arc::new(AlternativeTermIndex::build(Arc::clone(table)));
        self.builds.fetch_add(1, Ordering::Relaxed);
        *slot = Some(Arc::clone(&index));
        index
    }

    /// Whether an index is present.
    pub fn is_built(&self) -> bool {
        self.slot.read().is_some()
    }

    /// Drop the held index so the next `get_or_build` rebuilds it.
    pub fn reset(&self) -> Option<Arc<AlternativeTermIndex>> {
        self.slot.write().take()
    }

    /// How many times this handle has built an index.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}
