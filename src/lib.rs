//! # signgloss
//!
//! A deterministic pipeline that translates free-form English text into a
//! sequence of Indian Sign Language (ISL) animation tokens.
//!
//! ## Pipeline
//!
//! Four stages, data flowing strictly left to right:
//!
//! 1. [`analysis`] — strip punctuation, lowercase, tokenize
//! 2. [`tagging`] + [`tense`] — part-of-speech tag and classify tense
//! 3. [`gloss`] — lexical substitutions, stop-word filtering, tense marker
//! 4. [`resolve`] — map gloss tokens to animation assets, with synonym and
//!    finger-spelling fallbacks
//!
//! [`pipeline::Translator`] is the entry point that chains all four.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use signgloss::pipeline::Translator;
//! use signgloss::resolve::StaticAssetStore;
//!
//! let translator = Translator::builder()
//!     .assets(Arc::new(StaticAssetStore::from_words(["will", "me", "go"])))
//!     .build();
//!
//! let result = translator.translate("I will go").unwrap();
//! assert_eq!(result.words, ["will", "me", "go"]);
//! ```

pub mod analysis;
pub mod error;
pub mod gloss;
pub mod pipeline;
pub mod resolve;
pub mod synonym;
pub mod tagging;
pub mod tense;

pub mod prelude {
    //! Convenience re-exports for common usage.

    pub use crate::error::{Result, SignglossError};
    pub use crate::pipeline::{TranslationResult, Translator, TranslatorBuilder};
    pub use crate::resolve::{
        AssetStore, DirectoryAssetStore, StaticAssetStore, SynonymPolicy,
    };
    pub use crate::synonym::SynonymTable;
    pub use crate::tense::{Tense, TenseCounts};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
