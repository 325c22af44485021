//! In-memory label cache
//!
//! Maps image references to previously generated alt-texts so the same
//! image is never described twice within one run. No eviction and no
//! size bound; the cache lives only for the process lifetime of a run
//! and is bounded naturally by the number of distinct assets.

use std::collections::HashMap;

/// Cache of generated labels keyed by image reference
///
/// Not safe for unsynchronized concurrent mutation; the pipeline
/// processes assets strictly sequentially.
#[derive(Debug, Default)]
pub struct LabelCache {
    entries: HashMap<String, String>,
}

impl LabelCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously generated label
    ///
    /// # Examples
    ///
    /// ```
    /// use storyblok_image_alt::cache::LabelCache;
    ///
    /// let mut cache = LabelCache::new();
    /// assert!(cache.get("a.png").is_none());
    /// cache.put("a.png", "a red bicycle");
    /// assert_eq!(cache.get("a.png"), Some("a red bicycle"));
    /// ```
    pub fn get(&self, image_ref: &str) -> Option<&str> {
        self.entries.get(image_ref).map(String::as_str)
    }

    /// Store a generated label
    pub fn put(&mut self, image_ref: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(image_ref.into(), text.into());
    }

    /// Number of cached labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no labels
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
