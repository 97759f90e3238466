//! Builds explanation requests from a term and its related entries.

use std::fmt::Write as _;

use serde::Serialize;

use crate::dictionary::entry::DictionaryEntry;
use crate::error::{Result, SlangdexError};
use crate::lexicon::Lexicon;

/// A related dictionary entry mentioned in a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedEntry {
    pub key: String,
    pub definition: String,
}

impl From<&DictionaryEntry> for RelatedEntry {
    fn from(entry: &DictionaryEntry) -> Self {
        RelatedEntry {
            key: entry.key.clone(),
            definition: entry.definition.clone(),
        }
    }
}

/// Everything an external text-generation service needs to explain a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplanationRequest {
    /// The term as the user typed it, trimmed.
    pub word: String,
    /// The dictionary entry for the term, when there is one.
    pub entry: Option<DictionaryEntry>,
    pub related: Vec<RelatedEntry>,
    pub prompt: String,
}

/// Collects related entries for a term and renders the request prompt.
#[derive(Debug, Clone)]
pub struct ContextBuilder<'a> {
    lexicon: &'a Lexicon,
    max_related: usize,
}

impl<'a> ContextBuilder<'a> {
    /// Create a builder using the lexicon's context settings.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        ContextBuilder {
            lexicon,
            max_related: lexicon.config().context.max_related,
        }
    }

    /// Override how many related entries are mentioned.
    pub fn with_max_related(mut self, max_related: usize) -> Self {
        self.max_related = max_related;
        self
    }

    /// Related dictionary entries for `word`, without `word` itself.
    pub fn related_entries(&self, word: &str) -> Vec<RelatedEntry> {
        self.lexicon
            .related_entries(word)
            .into_iter()
            .take(self.max_related)
            .map(RelatedEntry::from)
            .collect()
    }

    /// Build the request for `word`.
    pub fn build_request(&self, word: &str) -> Result<ExplanationRequest> {
        let word = word.trim();
        if word.is_empty() {
            return Err(SlangdexError::invalid_argument(
                "cannot build an explanation request for a blank term",
            ));
        }

        let entry = self.lexicon.entry(word).cloned();
        let related = self.related_entries(word);
        let prompt = render_prompt(word, entry.as_ref(), &related);

        Ok(ExplanationRequest {
            word: word.to_string(),
            entry,
            related,
            prompt,
        })
    }
}

fn render_prompt(word: &str, entry: Option<&DictionaryEntry>, related: &[RelatedEntry]) -> String {
    let mut prompt = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(prompt, "Explain the slang term \"{word}\".");

    if let Some(entry) = entry {
        if !entry.definition.is_empty() {
            let _ = writeln!(prompt, "Dictionary definition: {}", entry.definition);
        }
        if !entry.part_of_speech.is_empty() {
            let _ = writeln!(prompt, "Part of speech: {}", entry.part_of_speech);
        }
        if !entry.example.is_empty() {
            let _ = writeln!(prompt, "Example: {}", entry.example);
        }
    }

    if !related.is_empty() {
        let _ = writeln!(prompt, "Related dictionary entries:");
        for item in related {
            let _ = writeln!(prompt, "- {}: {}", item.key, item.definition);
        }
    }

    prompt.push_str("Keep the explanation short and mention how it connects to the related entries.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlangdexConfig;

    #[test]
    fn test_related_entries_are_capped() {
        let lexicon = Lexicon::builtin(SlangdexConfig::default());
        let builder = ContextBuilder::new(&lexicon).with_max_related(1);

        assert_eq!(builder.related_entries("bobo").len(), 1);
    }

    #[test]
    fn test_build_request_for_known_term() {
        let lexicon = Lexicon::builtin(SlangdexConfig::default());
        let request = ContextBuilder::new(&lexicon).build_request(" 8080 ").unwrap();

        assert_eq!(request.word, "8080");
        assert_eq!(request.entry.as_ref().map(|e| e.key.as_str()), Some("8080"));
        assert_eq!(request.related.len(), 1);
        assert_eq!(request.related[0].key, "Sped");
        assert!(request.prompt.starts_with("Explain the slang term \"8080\"."));
        assert!(request.prompt.contains("- Sped: "));
    }

    #[test]
    fn test_build_request_for_unknown_term() {
        let lexicon = Lexicon::builtin(SlangdexConfig::default());
        let request = ContextBuilder::new(&lexicon).build_request("zzzz").unwrap();

        assert!(request.entry.is_none());
        assert!(request.related.is_empty());
        assert!(!request.prompt.contains("Related dictionary entries"));
    }

    #[test]
    fn test_blank_term_is_rejected() {
        let lexicon = Lexicon::builtin(SlangdexConfig::default());
        assert!(ContextBuilder::new(&lexicon).build_request("  ").is_err());
    }
}
