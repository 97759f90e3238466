//! Alternative-term index and search-term expansion.
//!
//! The index is derived once from a [`RelationshipTable`](crate::dictionary::RelationshipTable)
//! and is read-only afterwards. Expansion turns a raw search string into the
//! set of canonical keys it should surface: direct and alternative hits,
//! bidirectional substring hits, and one hop of relationships.

pub mod expander;
pub mod handle;
pub mod index;
pub mod normalize;

// Re-export commonly used types
pub use expander::*;
pub use handle::*;
pub use index::*;
pub use normalize::*;
