//! Token types for text analysis.
//!
//! This module defines the core data structure for representing text tokens,
//! the fundamental units that flow through the translation pipeline.
//!
//! # Examples
//!
//! Creating a simple token:
//!
//! ```
//! use signgloss::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! ```
//!
//! Tracking provenance after a substitution:
//!
//! ```
//! use signgloss::analysis::token::Token;
//!
//! let token = Token::new("i", 0).with_text("me");
//! assert_eq!(token.text, "me");
//! assert_eq!(token.original.as_deref(), Some("i"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// Tokens carry their position in the stream and, once a filter has rewritten
/// their text, the original word they replaced. Provenance is what lets the
/// resolver report which substitutions were actually used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,

    /// The position of the token in the token stream (0-based).
    pub position: usize,

    /// The original text this token replaced, if a filter rewrote it.
    pub original: Option<String>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            original: None,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Rewrite this token's text, recording the previous text as provenance.
    ///
    /// Provenance is only captured for the first rewrite; later rewrites keep
    /// pointing at the word the user actually typed.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        let text = text.into();
        if self.original.is_none() && text != self.text {
            self.original = Some(std::mem::replace(&mut self.text, text));
        } else {
            self.text = text;
        }
        self
    }

    /// Clone this token with an updated position.
    pub fn with_position(&self, position: usize) -> Self {
        let mut token = self.clone();
        token.position = position;
        token
    }

    /// The word the user originally typed, whether or not it was rewritten.
    pub fn source_text(&self) -> &str {
        self.original.as_deref().unwrap_or(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
