//! Integration tests for related-entry context and cached explanations.

use std::sync::{Arc, Mutex};

use chrono::{TimeDelta, Utc};

use slangdex::config::SlangdexConfig;
use slangdex::context::*;
use slangdex::error::{Result, SlangdexError};
use slangdex::lexicon::Lexicon;

/// Records every request it sees.
#[derive(Default)]
struct RecordingProvider {
    requests: Mutex<Vec<ExplanationRequest>>,
}

impl RecordingProvider {
    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl ExplanationProvider for RecordingProvider {
    fn explain(&self, request: &ExplanationRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(format!("{} explained", request.word))
    }
}

#[derive(Debug)]
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(SlangdexError::other("store offline"))
    }

    fn set(&self, _key: &str, _value: String) -> Result<()> {
        Err(SlangdexError::other("store offline"))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

fn lexicon() -> Arc<Lexicon> {
    Arc::new(Lexicon::builtin(SlangdexConfig::default()))
}

#[test]
fn test_request_carries_related_entries() {
    let provider = Arc::new(RecordingProvider::default());
    let service = ExplanationService::new(lexicon(), Arc::clone(&provider), MemoryStore::new());

    let explanation = service.explain("rizz").unwrap();
    assert_eq!(explanation.content, "rizz explained");
    assert!(!explanation.from_cache);

    let requests = provider.requests.lock().unwrap();
    let related: Vec<&str> = requests[0].related.iter().map(|r| r.key.as_str()).collect();
    assert!(related.contains(&"rizzler"));
    assert!(related.contains(&"aura"));
    assert!(!related.contains(&"rizz"));
    assert!(requests[0].prompt.contains("- aura: "));
}

#[test]
fn test_cache_is_case_insensitive() {
    let provider = Arc::new(RecordingProvider::default());
    let service = ExplanationService::new(lexicon(), Arc::clone(&provider), MemoryStore::new());

    service.explain("Bussin").unwrap();
    let second = service.explain("BUSSIN ").unwrap();

    assert!(second.from_cache);
    assert_eq!(provider.calls(), 1);
    assert!(service.cache().store().get("enhanced-v2-bussin").unwrap().is_some());
}

#[test]
fn test_expired_entry_is_regenerated() {
    let provider = Arc::new(RecordingProvider::default());
    let service = ExplanationService::new(lexicon(), Arc::clone(&provider), MemoryStore::new());
    let ttl = TimeDelta::hours(i64::from(SlangdexConfig::default().cache.ttl_hours));

    service
        .cache()
        .put_at("slay", "stale", Utc::now() - ttl - TimeDelta::hours(1))
        .unwrap();

    let explanation = service.explain("slay").unwrap();
    assert!(!explanation.from_cache);
    assert_eq!(explanation.content, "slay explained");
    assert_eq!(provider.calls(), 1);
}

#[test]
fn test_store_failure_is_reported() {
    let provider = Arc::new(RecordingProvider::default());
    let service = ExplanationService::new(lexicon(), Arc::clone(&provider), BrokenStore);

    assert!(service.explain("sus").is_err());
    assert_eq!(provider.calls(), 0);
}

#[test]
fn test_context_for_unknown_term() {
    let lexicon = lexicon();
    let request = ContextBuilder::new(&lexicon).build_request("qwerty").unwrap();

    assert!(request.entry.is_none());
    assert!(request.related.is_empty());
    assert!(request.prompt.starts_with("Explain the slang term \"qwerty\"."));
}
