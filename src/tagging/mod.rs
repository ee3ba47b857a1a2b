//! Part-of-speech tagging for tense detection.
//!
//! The tense detector only needs to tell verb classes apart, so the tagger's
//! output is deliberately coarse: modal auxiliaries, past-tense verbs
//! (including participles), present participles, present-form verbs, and
//! everything else. Only verb-class tags contribute tense evidence; a
//! sentence of nouns and pronouns carries none.
//!
//! [`RuleTagger`] is the default backend: a lexicon of modal and verb forms
//! plus suffix heuristics for the regular inflections. The [`Tagger`] trait
//! keeps the seam open for heavier backends; a failing backend degrades to
//! present tense at the pipeline level rather than aborting the request.
//!
//! # Examples
//!
//! ```
//! use signgloss::analysis::token::Token;
//! use signgloss::tagging::{PosTag, RuleTagger, Tagger};
//!
//! let tagger = RuleTagger::new();
//! let tokens = vec![Token::new("i", 0), Token::new("will", 1), Token::new("go", 2)];
//! let tags = tagger.tag(&tokens).unwrap();
//!
//! assert_eq!(tags, vec![PosTag::Other, PosTag::Modal, PosTag::VerbPresent]);
//! ```

pub mod lexicon;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::Result;
use crate::tagging::lexicon::{
    GERUND_EXCEPTIONS_SET, IRREGULAR_PAST_SET, MODAL_VERBS_SET, PAST_ED_EXCEPTIONS_SET,
    PRESENT_VERBS_SET,
};

/// Coarse part-of-speech classification of a single token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Modal auxiliary ("will", "shall", ...).
    Modal,
    /// Past-tense verb or past participle.
    VerbPast,
    /// Present participle (gerund).
    VerbGerund,
    /// Verb in base or present form.
    VerbPresent,
    /// Any non-verb word.
    Other,
}

/// Trait for part-of-speech tagging backends.
///
/// Implementations must return exactly one tag per input token, in order.
pub trait Tagger: Send + Sync {
    /// Tag every token in the sequence.
    fn tag(&self, tokens: &[Token]) -> Result<Vec<PosTag>>;

    /// Get the name of this tagger.
    fn name(&self) -> &'static str;
}

/// A lexicon- and suffix-driven tagger.
///
/// Rules, in order of precedence:
///
/// 1. modal lexicon hit → [`PosTag::Modal`]
/// 2. irregular past lexicon hit → [`PosTag::VerbPast`]
/// 3. "-ed" suffix, length > 3, not in the "-ed" exception list → [`PosTag::VerbPast`]
/// 4. "-ing" suffix, length > 4, not in the "-ing" exception list → [`PosTag::VerbGerund`]
/// 5. present-verb lexicon hit, including third-person "-s"/"-es" forms →
///    [`PosTag::VerbPresent`]
/// 6. otherwise → [`PosTag::Other`]
///
/// The tagger expects normalized (lowercase) tokens.
#[derive(Clone, Debug, Default)]
pub struct RuleTagger;

impl RuleTagger {
    /// Create a new rule tagger.
    pub fn new() -> Self {
        RuleTagger
    }

    fn is_present_verb(word: &str) -> bool {
        if PRESENT_VERBS_SET.contains(word) {
            return true;
        }
        // Third-person singular: eats -> eat, goes -> go.
        if let Some(stem) = word.strip_suffix("es")
            && PRESENT_VERBS_SET.contains(stem)
        {
            return true;
        }
        if let Some(stem) = word.strip_suffix('s')
            && PRESENT_VERBS_SET.contains(stem)
        {
            return true;
        }
        false
    }

    fn tag_word(word: &str) -> PosTag {
        if MODAL_VERBS_SET.contains(word) {
            PosTag::Modal
        } else if IRREGULAR_PAST_SET.contains(word) {
            PosTag::VerbPast
        } else if word.len() > 3 && word.ends_with("ed") && !PAST_ED_EXCEPTIONS_SET.contains(word)
        {
            PosTag::VerbPast
        } else if word.len() > 4 && word.ends_with("ing") && !GERUND_EXCEPTIONS_SET.contains(word)
        {
            PosTag::VerbGerund
        } else if Self::is_present_verb(word) {
            PosTag::VerbPresent
        } else {
            PosTag::Other
        }
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, tokens: &[Token]) -> Result<Vec<PosTag>> {
        Ok(tokens.iter().map(|t| Self::tag_word(&t.text)).collect())
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}
