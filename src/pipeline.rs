//! The translation pipeline entry point.
//!
//! [`Translator`] wires the four stages together: normalization, tense
//! detection, gloss filtering, and animation resolution. It is a pure,
//! synchronous, per-request computation; the synonym table and asset store
//! are injected shared read-only state, so a single translator can serve
//! concurrent requests without coordination.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use signgloss::pipeline::Translator;
//! use signgloss::resolve::StaticAssetStore;
//! use signgloss::tense::Tense;
//!
//! let translator = Translator::builder()
//!     .assets(Arc::new(StaticAssetStore::from_words(["will", "me", "go"])))
//!     .build();
//!
//! let result = translator.translate("I will go.").unwrap();
//! assert_eq!(result.tense, Tense::Future);
//! assert_eq!(result.words, ["will", "me", "go"]);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::Normalizer;
use crate::error::{Result, SignglossError};
use crate::gloss::GlossFilter;
use crate::gloss::token_filter::ReplacementFilter;
use crate::resolve::{AssetStore, Resolver, StaticAssetStore, SynonymPolicy};
use crate::synonym::SynonymTable;
use crate::tagging::{RuleTagger, Tagger};
use crate::tense::{self, Tense, TenseCounts};

/// The outcome of translating one sentence.
///
/// `words` and `animations` are parallel sequences of equal length; entries
/// with a `None` animation are finger-spelled letters (or, under the
/// unconditional synonym policy, synonyms without assets). The result has no
/// lifetime beyond the response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TranslationResult {
    /// The normalized input sentence.
    pub text: String,

    /// The display tokens, in playlist order.
    pub words: Vec<String>,

    /// One animation reference per word, `None` where unresolved.
    pub animations: Vec<Option<String>>,

    /// Original word → synonym, for substitutions actually used.
    pub synonyms_used: HashMap<String, String>,

    /// The detected tense bucket.
    pub tense: Tense,

    /// The tense evidence counts behind the classification.
    pub counts: TenseCounts,
}

/// Builder for [`Translator`].
pub struct TranslatorBuilder {
    normalizer: Normalizer,
    tagger: Arc<dyn Tagger>,
    gloss: GlossFilter,
    synonyms: Arc<SynonymTable>,
    assets: Arc<dyn AssetStore>,
    policy: SynonymPolicy,
}

impl TranslatorBuilder {
    /// Create a builder with default stages: rule tagger, default gloss
    /// tables, empty synonym table, empty asset store, asset-verifying
    /// synonym policy.
    pub fn new() -> Self {
        TranslatorBuilder {
            normalizer: Normalizer::new(),
            tagger: Arc::new(RuleTagger::new()),
            gloss: GlossFilter::new(),
            synonyms: Arc::new(SynonymTable::empty()),
            assets: Arc::new(StaticAssetStore::new()),
            policy: SynonymPolicy::default(),
        }
    }

    /// Use a custom normalizer.
    pub fn normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Use a custom tagging backend.
    pub fn tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Use a custom lexical substitution table for the gloss filter.
    pub fn replacements(mut self, replacement: ReplacementFilter) -> Self {
        self.gloss = GlossFilter::with_replacements(replacement);
        self
    }

    /// Set the synonym table.
    pub fn synonyms(mut self, synonyms: Arc<SynonymTable>) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Set the asset store.
    pub fn assets(mut self, assets: Arc<dyn AssetStore>) -> Self {
        self.assets = assets;
        self
    }

    /// Set the synonym substitution policy.
    pub fn policy(mut self, policy: SynonymPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the translator.
    pub fn build(self) -> Translator {
        let resolver = Resolver::new(self.synonyms, self.assets, self.policy);
        Translator {
            normalizer: self.normalizer,
            tagger: self.tagger,
            gloss: self.gloss,
            resolver,
        }
    }
}

impl Default for TranslatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The four-stage text-to-gloss translation pipeline.
#[derive(Clone)]
pub struct Translator {
    normalizer: Normalizer,
    tagger: Arc<dyn Tagger>,
    gloss: GlossFilter,
    resolver: Resolver,
}

impl Translator {
    /// Start building a translator.
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::new()
    }

    /// Translate a sentence into an ordered animation playlist.
    ///
    /// Fails fast with [`SignglossError::EmptyInput`] when the input is
    /// empty or whitespace-only. A tagging backend failure degrades to
    /// present tense with zero counts; any other stage failure propagates
    /// untouched, so a partial result is never returned.
    pub fn translate(&self, text: &str) -> Result<TranslationResult> {
        if text.trim().is_empty() {
            return Err(SignglossError::EmptyInput);
        }

        let normalized = self.normalizer.normalize(text)?;
        debug!(text = %normalized.text, tokens = normalized.tokens.len(), "normalized input");

        let (tense, counts) = match self.tagger.tag(&normalized.tokens) {
            Ok(tags) => tense::detect(&tags),
            Err(e) => {
                warn!(error = %e, tagger = self.tagger.name(), "tagging failed, defaulting to present tense");
                (Tense::Present, TenseCounts::new())
            }
        };
        debug!(%tense, ?counts, "detected tense");

        let gloss = self.gloss.apply(normalized.tokens, tense, &counts)?;
        let resolution = self.resolver.resolve(&gloss)?;
        if resolution.words.is_empty() {
            debug!("no words to display after processing");
        }

        Ok(TranslationResult {
            text: normalized.text,
            words: resolution.words,
            animations: resolution.animations,
            synonyms_used: resolution.synonyms_used,
            tense,
            counts,
        })
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("normalizer", &self.normalizer)
            .field("tagger", &self.tagger.name())
            .field("resolver", &self.resolver)
            .finish()
    }
}
