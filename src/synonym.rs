//! Synonym table for animation fallback lookups.
//!
//! The table is a flat word → replacement mapping loaded once at startup from
//! a JSON object file and shared read-only for the process lifetime. A
//! missing or malformed file degrades to an empty table with a logged
//! warning; the pipeline then simply has no synonym coverage.
//!
//! Example file format:
//!
//! ```json
//! {
//!   "hear": "listen",
//!   "walk": "stroll"
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use signgloss::synonym::SynonymTable;
//!
//! let table = SynonymTable::from_pairs([("hear", "listen")]);
//! assert_eq!(table.get("hear"), Some("listen"));
//! assert_eq!(table.get("run"), None);
//! ```

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use crate::error::{Result, SignglossError};

/// An immutable word → replacement mapping.
///
/// Keys and values are lowercased on construction to match the normalized
/// token stream and the animation filenames.
#[derive(Clone, Debug, Default)]
pub struct SynonymTable {
    entries: HashMap<String, String>,
}

impl SynonymTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        SynonymTable {
            entries: HashMap::new(),
        }
    }

    /// Build a table from word pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into().to_lowercase(), v.into().to_lowercase()))
            .collect();
        SynonymTable { entries }
    }

    /// Load a table from a JSON object file.
    ///
    /// Fails with [`SignglossError::ResourceLoad`] if the file is missing or
    /// not a flat string-to-string object.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SignglossError::resource_load(format!(
                "failed to read synonym file '{}': {e}",
                path.display()
            ))
        })?;
        let raw: HashMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            SignglossError::resource_load(format!(
                "failed to parse synonym file '{}': {e}",
                path.display()
            ))
        })?;
        Ok(Self::from_pairs(raw))
    }

    /// Load a table, degrading to an empty one on failure.
    ///
    /// The failure is logged; the pipeline continues with reduced synonym
    /// coverage rather than refusing to start.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "could not load synonym table, continuing with empty table");
                Self::empty()
            }
        }
    }

    /// Look up the synonym for a word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(|s| s.as_str())
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
