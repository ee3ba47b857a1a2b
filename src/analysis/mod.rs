//! Text analysis module for signgloss.
//!
//! This module provides the first stage of the translation pipeline: char
//! filters normalize the raw sentence (punctuation removal, lowercasing) and
//! a tokenizer splits it into tokens. The [`Normalizer`] chains both.
//!
//! # Examples
//!
//! ```
//! use signgloss::analysis::Normalizer;
//!
//! let normalizer = Normalizer::new();
//! let normalized = normalizer.normalize("Hello, World!").unwrap();
//!
//! assert_eq!(normalized.text, "hello world");
//! assert_eq!(normalized.tokens.len(), 2);
//! assert_eq!(normalized.tokens[0].text, "hello");
//! ```

pub mod char_filter;
pub mod token;
pub mod tokenizer;

use std::sync::Arc;

use crate::analysis::char_filter::{CharFilter, LowercaseFilter, StripFilter};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// The output of the normalization stage: cleaned text plus its tokens.
#[derive(Clone, Debug)]
pub struct Normalized {
    /// The sentence after char filtering, before tokenization.
    pub text: String,

    /// The tokens of the cleaned sentence, in order.
    pub tokens: Vec<Token>,
}

/// Normalizes raw sentences by chaining char filters and a tokenizer.
///
/// The default configuration strips everything that is not an ASCII letter,
/// digit, or whitespace, lowercases the remainder, and splits on whitespace.
/// Normalization is deterministic and idempotent: running it over already
/// normalized text yields the same tokens.
///
/// A sentence that becomes empty after stripping yields zero tokens; empty
/// input is the caller's error, not the normalizer's.
#[derive(Clone)]
pub struct Normalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Normalizer {
    /// Create a normalizer with the default strip + lowercase + whitespace
    /// pipeline.
    pub fn new() -> Self {
        Normalizer {
            char_filters: vec![Arc::new(StripFilter::new()), Arc::new(LowercaseFilter::new())],
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
        }
    }

    /// Create a normalizer with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Normalizer {
            char_filters: vec![Arc::new(StripFilter::new()), Arc::new(LowercaseFilter::new())],
            tokenizer,
        }
    }

    /// Add a char filter to the end of the chain.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Apply the char filters to the raw text without tokenizing.
    pub fn clean(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for filter in &self.char_filters {
            cleaned = filter.filter(&cleaned);
        }
        cleaned
    }

    /// Normalize a raw sentence into cleaned text and tokens.
    pub fn normalize(&self, text: &str) -> Result<Normalized> {
        let cleaned = self.clean(text);
        let tokens = self.tokenizer.tokenize(&cleaned)?;
        Ok(Normalized {
            text: cleaned,
            tokens,
        })
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field(
                "char_filters",
                &self.char_filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_lowercases() {
        let normalizer = Normalizer::new();
        let normalized = normalizer.normalize("I will GO, tomorrow!").unwrap();

        assert_eq!(normalized.text, "i will go tomorrow");
        let words: Vec<_> = normalized.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["i", "will", "go", "tomorrow"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = Normalizer::new();
        let first = normalizer.normalize("What's your name?").unwrap();
        let second = normalizer.normalize(&first.text).unwrap();

        assert_eq!(first.text, second.text);
        assert_eq!(first.tokens, second.tokens);
    }

    #[test]
    fn test_punctuation_only_sentence_yields_no_tokens() {
        let normalizer = Normalizer::new();
        let normalized = normalizer.normalize("?!... ---").unwrap();
        assert!(normalized.tokens.is_empty());
    }
}
