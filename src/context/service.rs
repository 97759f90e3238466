//! Cache-first explanation lookups against an external provider.

use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use crate::context::builder::{ContextBuilder, ExplanationRequest};
use crate::context::cache::ExplanationCache;
use crate::context::store::KeyValueStore;
use crate::error::{Result, SlangdexError};
use crate::lexicon::Lexicon;

/// The external text-generation contract: a request in, explanation text out.
pub trait ExplanationProvider: Send + Sync {
    /// Generate an explanation for the request.
    fn explain(&self, request: &ExplanationRequest) -> Result<String>;
}

impl<P: ExplanationProvider + ?Sized> ExplanationProvider for Arc<P> {
    fn explain(&self, request: &ExplanationRequest) -> Result<String> {
        (**self).explain(request)
    }
}

/// An explanation and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub word: String,
    pub content: String,
    pub from_cache: bool,
}

/// Serves explanations from the cache, asking the provider on a miss.
///
/// Provider failures are returned to the caller and never cached.
pub struct ExplanationService<P: ExplanationProvider, S: KeyValueStore> {
    lexicon: Arc<Lexicon>,
    provider: P,
    cache: ExplanationCache<S>,
}

impl<P: ExplanationProvider, S: KeyValueStore> ExplanationService<P, S> {
    /// Create a service; the cache uses the lexicon's cache settings.
    pub fn new(lexicon: Arc<Lexicon>, provider: P, store: S) -> Self {
        let cache = ExplanationCache::new(store, lexicon.config().cache.clone());
        ExplanationService {
            lexicon,
            provider,
            cache,
        }
    }

    /// Explain `word`.
    pub fn explain(&self, word: &str) -> Result<Explanation> {
        let word = word.trim();
        if let Some(cached) = self.cache.get(word)? {
            debug!("Explanation cache hit for '{word}'");
            return Ok(Explanation {
                word: word.to_string(),
                content: cached.content,
                from_cache: true,
            });
        }

        let request = ContextBuilder::new(&self.lexicon).build_request(word)?;
        let content = self.provider.explain(&request)?;
        if content.trim().is_empty() {
            return Err(SlangdexError::provider(format!(
                "empty explanation for '{word}'"
            )));
        }

        self.cache.put(word, &content)?;
        info!(
            "Generated explanation for '{}' with {} related entries",
            word,
            request.related.len()
        );

        Ok(Explanation {
            word: word.to_string(),
            content,
            from_cache: false,
        })
    }

    /// The cache.
    pub fn cache(&self) -> &ExplanationCache<S> {
        &self.cache
    }
}
