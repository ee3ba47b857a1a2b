//! Animation resolution: mapping gloss tokens to animation assets.
//!
//! For each gloss token the [`Resolver`] tries, in order:
//!
//! 1. a direct asset lookup for `<token>.mp4`;
//! 2. the synonym table (optionally verifying the synonym's asset exists,
//!    see [`SynonymPolicy`]);
//! 3. finger-spelling: the token is decomposed into its characters, each
//!    emitted with no asset reference.
//!
//! Asset-presence checks never raise; a lookup failure falls through to the
//! next step. The output word and animation sequences always have equal
//! length and preserve input order.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use signgloss::analysis::token::Token;
//! use signgloss::resolve::{Resolver, StaticAssetStore, SynonymPolicy};
//! use signgloss::synonym::SynonymTable;
//!
//! let assets = Arc::new(StaticAssetStore::from_words(["go"]));
//! let synonyms = Arc::new(SynonymTable::empty());
//! let resolver = Resolver::new(synonyms, assets, SynonymPolicy::VerifyAsset);
//!
//! let resolution = resolver.resolve(&[Token::new("go", 0)]).unwrap();
//! assert_eq!(resolution.words, ["go"]);
//! assert!(resolution.animations[0].is_some());
//! ```

pub mod store;

pub use store::{AssetStore, DirectoryAssetStore, StaticAssetStore};

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::token::Token;
use crate::error::Result;
use crate::synonym::SynonymTable;

/// How synonym substitution interacts with asset lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynonymPolicy {
    /// Substitute only when the synonym's own asset exists. A synonym whose
    /// asset is also missing falls through to finger-spelling.
    #[default]
    VerifyAsset,
    /// Substitute on a table hit alone; the synonym's asset may still be
    /// absent, leaving the entry with no animation reference.
    Unconditional,
}

/// The output of the resolution stage.
///
/// `words` and `animations` are parallel sequences of equal length. A `None`
/// animation means no asset exists for that entry (finger-spelled letters,
/// or an unverified synonym under [`SynonymPolicy::Unconditional`]).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Resolution {
    /// The display tokens, in order: whole words, substituted synonyms, and
    /// finger-spelled letters.
    pub words: Vec<String>,

    /// One animation reference per word, `None` where no asset resolved.
    pub animations: Vec<Option<String>>,

    /// Original word → synonym, for substitutions actually used.
    pub synonyms_used: HashMap<String, String>,
}

impl Resolution {
    fn push(&mut self, word: impl Into<String>, animation: Option<String>) {
        self.words.push(word.into());
        self.animations.push(animation);
    }
}

/// The animation resolution stage.
///
/// Holds the shared synonym table and asset store; both are read-only, so
/// the resolver is freely shareable across request-handling threads.
#[derive(Clone)]
pub struct Resolver {
    synonyms: Arc<SynonymTable>,
    assets: Arc<dyn AssetStore>,
    policy: SynonymPolicy,
}

impl Resolver {
    /// Create a resolver from a synonym table, an asset store, and a policy.
    pub fn new(
        synonyms: Arc<SynonymTable>,
        assets: Arc<dyn AssetStore>,
        policy: SynonymPolicy,
    ) -> Self {
        Resolver {
            synonyms,
            assets,
            policy,
        }
    }

    /// The policy this resolver applies to synonym substitution.
    pub fn policy(&self) -> SynonymPolicy {
        self.policy
    }

    /// Resolve a gloss token sequence into words and animation references.
    pub fn resolve(&self, tokens: &[Token]) -> Result<Resolution> {
        let mut resolution = Resolution::default();

        for token in tokens {
            let word = token.text.as_str();
            if let Some(reference) = self.assets.find(&asset_name(word)) {
                debug!(word, reference, "resolved animation");
                resolution.push(word, Some(reference));
                continue;
            }

            if let Some(entry) = self.resolve_synonym(word) {
                let (synonym, reference) = entry;
                debug!(word, synonym, "substituted synonym");
                resolution
                    .synonyms_used
                    .insert(word.to_string(), synonym.clone());
                resolution.push(synonym, reference);
                continue;
            }

            warn!(word, "no animation found, finger-spelling");
            for letter in word.chars() {
                resolution.push(letter.to_string(), None);
            }
        }

        debug_assert_eq!(resolution.words.len(), resolution.animations.len());
        Ok(resolution)
    }

    fn resolve_synonym(&self, word: &str) -> Option<(String, Option<String>)> {
        let synonym = self.synonyms.get(word)?;
        let reference = self.assets.find(&asset_name(synonym));
        match self.policy {
            SynonymPolicy::VerifyAsset => {
                reference.as_ref()?;
                Some((synonym.to_string(), reference))
            }
            SynonymPolicy::Unconditional => Some((synonym.to_string(), reference)),
        }
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("synonyms", &self.synonyms.len())
            .field("policy", &self.policy)
            .finish()
    }
}

fn asset_name(word: &str) -> String {
    format!("{word}.mp4")
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

    fn resolver(assets: &[&str], synonyms: &[(&str, &str)], policy: SynonymPolicy) -> Resolver {
        Resolver::new(
            Arc::new(SynonymTable::from_pairs(synonyms.iter().copied())),
            Arc::new(StaticAssetStore::from_words(assets.iter().copied())),
            policy,
        )
    }

    #[test]
    fn test_direct_asset_hit() {
        let resolver = resolver(&["go", "me"], &[], SynonymPolicy::VerifyAsset);
        let resolution = resolver.resolve(&tokens(&["me", "go"])).unwrap();

        assert_eq!(resolution.words, ["me", "go"]);
        assert!(resolution.animations.iter().all(|a| a.is_some()));
        assert!(resolution.synonyms_used.is_empty());
    }

    #[test]
    fn test_synonym_substitution_with_verified_asset() {
        let resolver = resolver(&["listen"], &[("hear", "listen")], SynonymPolicy::VerifyAsset);
        let resolution = resolver.resolve(&tokens(&["hear"])).unwrap();

        assert_eq!(resolution.words, ["listen"]);
        assert!(resolution.animations[0].is_some());
        assert_eq!(
            resolution.synonyms_used.get("hear").map(|s| s.as_str()),
            Some("listen")
        );
    }

    #[test]
    fn test_verified_policy_spells_out_unresolvable_synonym() {
        // Synonym exists in the table but its asset does not.
        let resolver = resolver(&[], &[("hear", "listen")], SynonymPolicy::VerifyAsset);
        let resolution = resolver.resolve(&tokens(&["hear"])).unwrap();

        assert_eq!(resolution.words, ["h", "e", "a", "r"]);
        assert!(resolution.animations.iter().all(|a| a.is_none()));
        assert!(resolution.synonyms_used.is_empty());
    }

    #[test]
    fn test_unconditional_policy_substitutes_without_asset() {
        let resolver = resolver(&[], &[("hear", "listen")], SynonymPolicy::Unconditional);
        let resolution = resolver.resolve(&tokens(&["hear"])).unwrap();

        assert_eq!(resolution.words, ["listen"]);
        assert!(resolution.animations[0].is_none());
        assert_eq!(
            resolution.synonyms_used.get("hear").map(|s| s.as_str()),
            Some("listen")
        );
    }

    #[test]
    fn test_finger_spelling_fallback() {
        let resolver = resolver(&[], &[], SynonymPolicy::VerifyAsset);
        let resolution = resolver.resolve(&tokens(&["xyz"])).unwrap();

        assert_eq!(resolution.words, ["x", "y", "z"]);
        assert_eq!(resolution.animations, vec![None, None, None]);
        assert!(resolution.synonyms_used.is_empty());
    }

    #[test]
    fn test_order_and_parallel_lengths_preserved() {
        let resolver = resolver(&["go"], &[], SynonymPolicy::VerifyAsset);
        let resolution = resolver.resolve(&tokens(&["go", "ab", "go"])).unwrap();

        assert_eq!(resolution.words, ["go", "a", "b", "go"]);
        assert_eq!(resolution.words.len(), resolution.animations.len());
        assert!(resolution.animations[0].is_some());
        assert!(resolution.animations[1].is_none());
        assert!(resolution.animations[2].is_none());
        assert!(resolution.animations[3].is_some());
    }

    #[test]
    fn test_direct_hit_wins_over_synonym() {
        let resolver = resolver(
            &["hear", "listen"],
            &[("hear", "listen")],
            SynonymPolicy::VerifyAsset,
        );
        let resolution = resolver.resolve(&tokens(&["hear"])).unwrap();

        assert_eq!(resolution.words, ["hear"]);
        assert!(resolution.synonyms_used.is_empty());
    }
}
