//! Dictionary data consumed by the lookup core.
//!
//! Entries and relationship records are loaded once at startup and never
//! mutated afterwards. Loading is permissive: inconsistencies in the
//! hand-authored relationship data are reported as diagnostics, not errors.

pub mod builtin;
pub mod entry;
pub mod loader;
pub mod relationship;

// Re-export commonly used types
pub use builtin::*;
pub use entry::*;
pub use loader::*;
pub use relationship::*;
