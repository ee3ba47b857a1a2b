//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text string before it reaches the
//! tokenizer. The normalizer uses [`StripFilter`] to drop punctuation and
//! [`LowercaseFilter`] to fold case, matching the animation filenames which
//! are all lowercase.
//!
//! # Examples
//!
//! ```
//! use signgloss::analysis::char_filter::{CharFilter, LowercaseFilter, StripFilter};
//!
//! let strip = StripFilter::new();
//! assert_eq!(strip.filter("Hello, world!"), "Hello world");
//!
//! let lower = LowercaseFilter::new();
//! assert_eq!(lower.filter("Hello World"), "hello world");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Matches every character that is not an ASCII letter, digit, or whitespace.
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("static pattern must compile"));

/// A filter that removes every character that is not an ASCII letter, digit,
/// or whitespace.
///
/// Punctuation, symbols, and non-ASCII characters are deleted outright rather
/// than replaced with spaces, so "don't" becomes "dont" and stays one token.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }
}

impl CharFilter for StripFilter {
    fn filter(&self, input: &str) -> String {
        NON_ALPHANUMERIC.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}

/// A filter that converts the whole text to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl CharFilter for LowercaseFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
