//! Token filter implementations for the gloss stage.
//!
//! Filters transform a token sequence in order: [`ReplacementFilter`] applies
//! the fixed ISL lexical substitutions, [`StopFilter`] drops generic stop
//! words while keeping the ISL-important override set.
//!
//! # Examples
//!
//! ```
//! use signgloss::analysis::token::Token;
//! use signgloss::gloss::token_filter::{ReplacementFilter, StopFilter, TokenFilter};
//!
//! let filter = StopFilter::new();
//! let tokens = vec![Token::new("the", 0), Token::new("book", 1)];
//! let kept = filter.filter(tokens).unwrap();
//!
//! // "the" is a stop word; "book" is ISL-important and survives.
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].text, "book");
//! ```

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::Token;
use crate::error::Result;
use crate::gloss::stop_words::{ENGLISH_STOP_WORDS_SET, IMPORTANT_WORDS_SET};

/// Trait for filters that transform a token sequence.
pub trait TokenFilter: Send + Sync {
    /// Apply this filter to the token sequence.
    fn filter(&self, tokens: Vec<Token>) -> Result<Vec<Token>>;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}

/// Default ISL lexical substitutions.
const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[("i", "me"), ("hear", "listen")];

/// A filter that rewrites tokens through a fixed substitution table.
///
/// Substitutions apply to every token regardless of stop-word status and run
/// before stop filtering. Rewritten tokens keep the original word as
/// provenance.
#[derive(Clone, Debug)]
pub struct ReplacementFilter {
    replacements: Arc<HashMap<String, String>>,
}

impl ReplacementFilter {
    /// Create a replacement filter with the default ISL substitutions.
    pub fn new() -> Self {
        Self::from_pairs(DEFAULT_REPLACEMENTS.iter().map(|&(k, v)| (k, v)))
    }

    /// Create a replacement filter from custom word pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let replacements = pairs
            .into_iter()
            .map(|(k, v)| (k.into().to_lowercase(), v.into().to_lowercase()))
            .collect();
        ReplacementFilter {
            replacements: Arc::new(replacements),
        }
    }

    /// Look up the replacement for a word, if any.
    pub fn replacement(&self, word: &str) -> Option<&str> {
        self.replacements.get(word).map(|s| s.as_str())
    }
}

impl Default for ReplacementFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for ReplacementFilter {
    fn filter(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        let replaced = tokens
            .into_iter()
            .map(|token| match self.replacement(&token.text) {
                Some(substitute) => {
                    let substitute = substitute.to_string();
                    token.with_text(substitute)
                }
                None => token,
            })
            .collect();
        Ok(replaced)
    }

    fn name(&self) -> &'static str {
        "replacement"
    }
}

/// A filter that removes stop words, honoring an override set.
///
/// A token survives if it is not a stop word, or if it belongs to the
/// ISL-important override set. Surviving tokens are repositioned to stay
/// contiguous.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
    keep_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with the standard English stop words and the
    /// default ISL-important override set.
    pub fn new() -> Self {
        StopFilter {
            stop_words: Arc::new(
                ENGLISH_STOP_WORDS_SET
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            keep_words: Arc::new(IMPORTANT_WORDS_SET.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// Create a stop filter with custom stop and override sets.
    pub fn with_sets(stop_words: HashSet<String>, keep_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            keep_words: Arc::new(keep_words),
        }
    }

    /// Check whether a word would be dropped by this filter.
    pub fn is_dropped(&self, word: &str) -> bool {
        self.stop_words.contains(word) && !self.keep_words.contains(word)
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        let kept = tokens
            .into_iter()
            .filter(|token| !self.is_dropped(&token.text))
            .enumerate()
            .map(|(position, token)| token.with_position(position))
            .collect();
        Ok(kept)
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect()
    }

    #[test]
    fn test_replacement_filter() {
        let filter = ReplacementFilter::new();
        let result = filter.filter(tokens(&["i", "hear", "go"])).unwrap();

        assert_eq!(result[0].text, "me");
        assert_eq!(result[0].original.as_deref(), Some("i"));
        assert_eq!(result[1].text, "listen");
        assert_eq!(result[1].original.as_deref(), Some("hear"));
        assert_eq!(result[2].text, "go");
        assert!(result[2].original.is_none());
    }

    #[test]
    fn test_replacement_filter_custom_pairs() {
        let filter = ReplacementFilter::from_pairs([("Walk", "Stroll")]);
        assert_eq!(filter.replacement("walk"), Some("stroll"));
        assert_eq!(filter.replacement("run"), None);
    }

    #[test]
    fn test_stop_filter_drops_generic_words() {
        let filter = StopFilter::new();
        let result = filter.filter(tokens(&["the", "quick", "fox"])).unwrap();

        let words: Vec<_> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["quick", "fox"]);
    }

    #[test]
    fn test_stop_filter_keeps_important_words() {
        let filter = StopFilter::new();
        // "me", "you", "what" are stop words but ISL-important.
        let result = filter.filter(tokens(&["me", "you", "what", "is"])).unwrap();

        let words: Vec<_> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["me", "you", "what"]);
    }

    #[test]
    fn test_stop_filter_repositions_survivors() {
        let filter = StopFilter::new();
        let result = filter.filter(tokens(&["the", "book", "is", "here"])).unwrap();

        assert_eq!(result[0].text, "book");
        assert_eq!(result[0].position, 0);
    }

    #[test]
    fn test_filter_names() {
        assert_eq!(ReplacementFilter::new().name(), "replacement");
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
