//! Related-entry context and cached explanations.
//!
//! Consumers that ask an external text-generation service to explain a term
//! use the expander to pick related dictionary entries for the request, and
//! keep generated explanations in an expiring key-value cache.

pub mod builder;
pub mod cache;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use builder::*;
pub use cache::*;
pub use service::*;
pub use store::*;
