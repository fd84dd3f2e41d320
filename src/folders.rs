//! Case-insensitive folder filter set.
//!
//! The host persists the folder restriction as a single `;`-delimited
//! string; this module normalizes it into set semantics: empty segments
//! are dropped and entries that differ only in casing collapse to one.
//! Membership tests are case-insensitive. Re-serialization order is
//! implementation-defined and callers must not depend on it.

use std::collections::HashMap;

use crate::constants::FOLDER_DELIMITER;

/// The set of folder paths the watermark is restricted to.
///
/// Empty means "no restriction"; interpreting that is the renderer's call.
#[derive(Debug, Clone, Default)]
pub struct FolderFilter {
    /// Case-folded key -> first-seen spelling
    entries: HashMap<String, String>,
}

impl FolderFilter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `;`-delimited folder string.
    ///
    /// Empty segments are discarded; duplicates under case folding keep
    /// the first-seen spelling.
    pub fn parse(raw: &str) -> Self {
        let mut entries = HashMap::new();
        for segment in raw.split(FOLDER_DELIMITER) {
            if segment.is_empty() {
                continue;
            }
            entries
                .entry(segment.to_lowercase())
                .or_insert_with(|| segment.to_string());
        }
        Self { entries }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, folder: &str) -> bool {
        self.entries.contains_key(&folder.to_lowercase())
    }

    /// Iterates the stored spellings, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Number of distinct folders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no folders are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-serializes to the `;`-delimited persisted form, in arbitrary order.
    pub fn to_delimited(&self) -> String {
        let folders: Vec<&str> = self.iter().collect();
        folders.join(&FOLDER_DELIMITER.to_string())
    }
}
