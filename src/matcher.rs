//! Fuzzy/prefix matching for live autocomplete.
//!
//! Independent of the relationship graph: candidates are ranked purely on
//! how close their text is to what the user typed.

pub mod fuzzy;
pub mod levenshtein;

// Re-export commonly used types
pub use fuzzy::*;
pub use levenshtein::*;
