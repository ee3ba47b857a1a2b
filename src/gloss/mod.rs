//! Gloss filtering: from normalized tokens to ISL gloss order.
//!
//! The gloss filter runs three steps in a fixed order:
//!
//! 1. lexical substitutions ([`token_filter::ReplacementFilter`]),
//! 2. stop-word removal with the ISL-important override set
//!    ([`token_filter::StopFilter`]),
//! 3. tense-marker insertion, gated on the detected tense's count being
//!    strictly positive.
//!
//! The whole stage is a pure function of its inputs and the two static
//! tables.
//!
//! # Examples
//!
//! ```
//! use signgloss::analysis::Normalizer;
//! use signgloss::gloss::GlossFilter;
//! use signgloss::tense::{Tense, TenseCounts};
//!
//! let tokens = Normalizer::new().normalize("i will go").unwrap().tokens;
//! let mut counts = TenseCounts::new();
//! counts.increment(Tense::Future);
//!
//! let gloss = GlossFilter::new()
//!     .apply(tokens, Tense::Future, &counts)
//!     .unwrap();
//! let words: Vec<_> = gloss.iter().map(|t| t.text.as_str()).collect();
//!
//! assert_eq!(words, ["will", "me", "go"]);
//! ```

pub mod stop_words;
pub mod token_filter;

use tracing::debug;

use crate::analysis::token::Token;
use crate::error::Result;
use crate::gloss::token_filter::{ReplacementFilter, StopFilter, TokenFilter};
use crate::tense::{Tense, TenseCounts};

/// The gloss filtering stage.
///
/// Holds the substitution and stop filters and applies them together with the
/// tense marker rule.
#[derive(Clone, Debug, Default)]
pub struct GlossFilter {
    replacement: ReplacementFilter,
    stop: StopFilter,
}

impl GlossFilter {
    /// Create a gloss filter with the default substitution table and stop
    /// word sets.
    pub fn new() -> Self {
        GlossFilter {
            replacement: ReplacementFilter::new(),
            stop: StopFilter::new(),
        }
    }

    /// Create a gloss filter with a custom replacement filter.
    pub fn with_replacements(replacement: ReplacementFilter) -> Self {
        GlossFilter {
            replacement,
            stop: StopFilter::new(),
        }
    }

    /// Apply substitutions, stop filtering, and the tense marker.
    ///
    /// The marker is inserted only when the detected tense carries one
    /// (past, future, present continuous) and its count is strictly
    /// positive. Gating on the count prevents inserting a marker when the
    /// "winning" bucket is an all-zero tie broken arbitrarily.
    pub fn apply(
        &self,
        tokens: Vec<Token>,
        tense: Tense,
        counts: &TenseCounts,
    ) -> Result<Vec<Token>> {
        let tokens = self.replacement.filter(tokens)?;
        let mut tokens = self.stop.filter(tokens)?;

        if let Some(marker) = tense.marker()
            && counts.get(tense) > 0
        {
            for token in &mut tokens {
                token.position += 1;
            }
            tokens.insert(0, Token::new(marker, 0));
            debug!(marker, %tense, "inserted tense marker");
        }

        Ok(tokens)
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

    fn counts_for(tense: Tense, n: u32) -> TenseCounts {
        let mut counts = TenseCounts::new();
        for _ in 0..n {
            counts.increment(tense);
        }
        counts
    }

    #[test]
    fn test_future_marker_prepended() {
        let filter = GlossFilter::new();
        let counts = counts_for(Tense::Future, 1);
        let gloss = filter
            .apply(tokens(&["i", "will", "go"]), Tense::Future, &counts)
            .unwrap();

        let words: Vec<_> = gloss.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["will", "me", "go"]);
        assert_eq!(gloss[0].position, 0);
        assert_eq!(gloss[2].position, 2);
    }

    #[test]
    fn test_past_marker() {
        let filter = GlossFilter::new();
        let counts = counts_for(Tense::Past, 1);
        let gloss = filter
            .apply(tokens(&["i", "went", "home"]), Tense::Past, &counts)
            .unwrap();

        let words: Vec<_> = gloss.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["before", "me", "went", "home"]);
    }

    #[test]
    fn test_no_marker_for_present() {
        let filter = GlossFilter::new();
        let counts = counts_for(Tense::Present, 3);
        let gloss = filter
            .apply(tokens(&["me", "eat", "food"]), Tense::Present, &counts)
            .unwrap();

        let words: Vec<_> = gloss.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["me", "eat", "food"]);
    }

    #[test]
    fn test_marker_gated_on_positive_count() {
        let filter = GlossFilter::new();
        // Past nominally "wins" but its count is zero: no marker.
        let counts = TenseCounts::new();
        let gloss = filter
            .apply(tokens(&["book"]), Tense::Past, &counts)
            .unwrap();

        let words: Vec<_> = gloss.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["book"]);
    }

    #[test]
    fn test_substitution_runs_before_stop_filter() {
        let filter = GlossFilter::new();
        let counts = counts_for(Tense::Present, 2);
        // "i" becomes "me", which is whitelisted and survives.
        let gloss = filter
            .apply(tokens(&["i", "hear"]), Tense::Present, &counts)
            .unwrap();

        let words: Vec<_> = gloss.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["me", "listen"]);
        assert_eq!(gloss[0].original.as_deref(), Some("i"));
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let filter = GlossFilter::new();
        let counts = TenseCounts::new();
        let gloss = filter.apply(Vec::new(), Tense::Present, &counts).unwrap();
        assert!(gloss.is_empty());
    }
}
