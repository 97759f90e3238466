//! Error types for the Slangdex library.
//!
//! The lookup core (index build, expansion, fuzzy matching) is total over its
//! inputs and never fails. Errors only come from loading data, reading
//! configuration, the build-once index handle and the external explanation
//! provider. All of them are represented by [`SlangdexError`].
//!
//! # Examples
//!
//! ```
//! use slangdex::error::{Result, SlangdexError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SlangdexError::data("record without a word"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Slangdex operations.
#[derive(Error, Debug)]
pub enum SlangdexError {
    /// I/O errors (reading data or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed dictionary or relationship data that cannot be loaded at all
    #[error("Data error: {0}")]
    Data(String),

    /// Invalid configuration values
    #[error("Config error: {0}")]
    Config(String),

    /// The alternative-term index was read before anything built it
    #[error("Alternative-term index has not been built")]
    IndexNotBuilt,

    /// A requested dictionary entry does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The external explanation provider failed
    #[error("Provider error: {0}")]
    Provider(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SlangdexError.
pub type Result<T> = std::result::Result<T, SlangdexError>;

impl SlangdexError {
    /// Create a new data error.
    pub fn data<S: Into<String>>(msg: S) -> Self {
        SlangdexError::Data(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SlangdexError::Config(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        SlangdexError::NotFound(msg.into())
    }

    /// Create a new provider error.
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        SlangdexError::Provider(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SlangdexError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SlangdexError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
