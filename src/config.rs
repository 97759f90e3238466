//! Configuration for lookup, matching and the explanation cache.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlangdexError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlangdexConfig {
    /// Fuzzy/prefix matcher settings.
    pub matcher: MatcherConfig,

    /// Related-entry context settings.
    pub context: ContextConfig,

    /// Explanation cache settings.
    pub cache: CacheConfig,
}

impl SlangdexConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SlangdexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        self.matcher.validate()?;
        if self.cache.ttl_hours == 0 {
            return Err(SlangdexError::config("cache.ttl_hours must be at least 1"));
        }
        Ok(())
    }
}

/// Configuration for the fuzzy/prefix matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Highest fuzzy score (0.0 = perfect, 1.0 = unrelated) still accepted.
    pub threshold: f64,

    /// Maximum number of fuzzy-tier results. The prefix tier is not capped.
    pub max_fuzzy_results: usize,

    /// Queries shorter than this only produce prefix matches.
    pub min_query_len: usize,

    /// Whether the short display text is matched besides the key.
    pub match_display_text: bool,

    /// Added to scores coming from the display text rather than the key.
    pub display_text_penalty: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            threshold: 0.4,
            max_fuzzy_results: 10,
            min_query_len: 2,
            match_display_text: true,
            display_text_penalty: 0.15,
        }
    }
}

impl MatcherConfig {
    fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(SlangdexError::config(format!(
                "matcher.threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }
        if !self.display_text_penalty.is_finite() || self.display_text_penalty < 0.0 {
            return Err(SlangdexError::config(
                "matcher.display_text_penalty must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Configuration for related-entry context building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Maximum number of related entries mentioned in a request.
    pub max_related: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        ContextConfig { max_related: 5 }
    }
}

/// Configuration for the explanation cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Lifetime of a cached explanation in hours.
    pub ttl_hours: u32,

    /// Prefix prepended to the word to form the store key.
    pub key_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            ttl_hours: 24 * 7,
            key_prefix: "enhanced-v2-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = SlangdexConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cache.key_prefix, "enhanced-v2-");
        assert_eq!(config.matcher.max_fuzzy_results, 10);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"matcher": {{"threshold": 0.25}}}}"#).unwrap();
        file.flush().unwrap();

        let config = SlangdexConfig::load(file.path()).unwrap();
        assert_eq!(config.matcher.threshold, 0.25);
        assert_eq!(config.matcher.max_fuzzy_results, 10);
        assert_eq!(config.context.max_related, 5);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut config = SlangdexConfig::default();
        config.matcher.threshold = -1.0;
        assert!(matches!(config.validate(), Err(SlangdexError::Config(_))));

        let mut config = SlangdexConfig::default();
        config.cache.ttl_hours = 0;
        assert!(matches!(config.validate(), Err(SlangdexError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = SlangdexConfig::load("/definitely/not/here.json");
        assert!(matches!(result, Err(SlangdexError::Io(_))));
    }
}
