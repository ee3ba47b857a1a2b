//! Asset store backends.
//!
//! The resolver treats asset storage purely as an injected lookup: given an
//! asset name like `"go.mp4"`, return its reference URL if it exists. How
//! assets are stored (filesystem, manifest, CDN) is this module's concern,
//! not the resolver's.

use std::collections::HashMap;
use std::path::PathBuf;

/// Trait for collaborators that can locate animation assets by name.
///
/// Implementations must never fail: any lookup problem is reported as the
/// asset being absent.
pub trait AssetStore: Send + Sync {
    /// Find the reference (URL or path) for an asset, if it exists.
    fn find(&self, name: &str) -> Option<String>;

    /// Get the name of this store.
    fn name(&self) -> &'static str;
}

/// An asset store backed by a local directory.
///
/// Presence is an `is_file` check on `<root>/<name>`; references are built
/// as `<base_url>/<name>`. I/O errors during the check are treated as the
/// asset being absent.
#[derive(Clone, Debug)]
pub struct DirectoryAssetStore {
    root: PathBuf,
    base_url: String,
}

impl DirectoryAssetStore {
    /// Create a store over a directory, serving references under `base_url`.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(root: P, base_url: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        DirectoryAssetStore {
            root: root.into(),
            base_url,
        }
    }

    /// The directory this store reads from.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl AssetStore for DirectoryAssetStore {
    fn find(&self, name: &str) -> Option<String> {
        let path = self.root.join(name);
        if path.is_file() {
            Some(format!("{}/{name}", self.base_url))
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}

/// An in-memory asset store mapping names to references.
///
/// Useful for tests and for deployments that ship a prebuilt asset manifest
/// instead of scanning a directory.
#[derive(Clone, Debug, Default)]
pub struct StaticAssetStore {
    entries: HashMap<String, String>,
}

impl StaticAssetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        StaticAssetStore {
            entries: HashMap::new(),
        }
    }

    /// Build a store from explicit name → reference entries.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        StaticAssetStore { entries }
    }

    /// Build a store from bare words, deriving `<word>.mp4` names and
    /// `/animations/<word>.mp4` references.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = words
            .into_iter()
            .map(|w| {
                let word = w.as_ref();
                (format!("{word}.mp4"), format!("/animations/{word}.mp4"))
            })
            .collect();
        StaticAssetStore { entries }
    }

    /// Number of assets in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetStore for StaticAssetStore {
    fn find(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
