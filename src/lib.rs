//! # Slangdex
//!
//! A slang dictionary lookup core.
//!
//! ## Features
//!
//! - Alternative-term index from spelling variants and related words
//! - Search-term expansion into canonical dictionary keys
//! - Prefix-first fuzzy matching for autocomplete
//! - Cached, context-enriched explanation requests
//!
//! ```
//! use slangdex::config::SlangdexConfig;
//! use slangdex::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::builtin(SlangdexConfig::default());
//! let keys = lexicon.expand_search_term("bobo");
//! assert!(keys.contains(&"8080".to_string()));
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod dictionary;
pub mod error;
pub mod expansion;
pub mod lexicon;
pub mod matcher;

pub mod prelude {
    pub use crate::config::SlangdexConfig;
    pub use crate::error::{Result, SlangdexError};
    pub use crate::expansion::expander::{SearchTermExpander, expand_search_term};
    pub use crate::expansion::index::{AlternativeTermIndex, build_alternative_index};
    pub use crate::lexicon::Lexicon;
    pub use crate::matcher::fuzzy::{FindOptions, FuzzyMatcher, MatchedEntry, WordListing};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
