//! Error types for the signgloss library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SignglossError`] enum. The pipeline distinguishes user-correctable
//! conditions ([`SignglossError::EmptyInput`]), degradable conditions that are
//! handled internally ([`SignglossError::ResourceLoad`],
//! [`SignglossError::Tagging`]), and unexpected failures that propagate to the
//! caller untouched.
//!
//! # Examples
//!
//! ```
//! use signgloss::error::{Result, SignglossError};
//!
//! fn check(text: &str) -> Result<()> {
//!     if text.trim().is_empty() {
//!         return Err(SignglossError::EmptyInput);
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("").is_err());
//! assert!(check("hello").is_ok());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for signgloss operations.
#[derive(Error, Debug)]
pub enum SignglossError {
    /// No input text was provided. Raised before any pipeline stage runs.
    #[error("no input text provided")]
    EmptyInput,

    /// A static resource (synonym table) could not be loaded.
    ///
    /// This condition is degradable: the pipeline continues with an empty
    /// table when [`SynonymTable::load_or_empty`] is used.
    ///
    /// [`SynonymTable::load_or_empty`]: crate::synonym::SynonymTable::load_or_empty
    #[error("resource load error: {0}")]
    ResourceLoad(String),

    /// The part-of-speech tagger failed. Degradable: the pipeline falls back
    /// to present tense with all-zero counts.
    #[error("tagging error: {0}")]
    Tagging(String),

    /// Text analysis (normalization, tokenization, filtering) errors.
    #[error("analysis error: {0}")]
    Analysis(String),

    /// I/O errors (asset directory access, resource files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`SignglossError`].
pub type Result<T> = std::result::Result<T, SignglossError>;

impl SignglossError {
    /// Create a new resource load error.
    pub fn resource_load<S: Into<String>>(msg: S) -> Self {
        SignglossError::ResourceLoad(msg.into())
    }

    /// Create a new tagging error.
    pub fn tagging<S: Into<String>>(msg: S) -> Self {
        SignglossError::Tagging(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SignglossError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SignglossError::Other(msg.into())
    }
}
