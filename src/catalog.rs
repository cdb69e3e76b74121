//! Known item names used for vote autocomplete.
//!
//! The catalog is advisory: it only feeds suggestions, and votes for names outside it are
//! accepted as-is.

use serde::Deserialize;

use crate::{error::AppError, util::slug::normalize_slug};

const EMBEDDED_CATALOG: &str = include_str!("../data/items.json");

#[derive(Deserialize)]
struct CatalogFile {
    items: Vec<String>,
}

#[derive(Debug, Clone)]
struct CatalogEntry {
    name: String,
    /// Slug with separators removed, used for matching.
    key: String,
}

/// Searchable list of item display names.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    entries: Vec<CatalogEntry>,
}

impl ItemCatalog {
    /// Builds a catalog from a list of display names, dropping names without a slug and
    /// duplicate slugs.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<CatalogEntry> = Vec::new();

        for name in names {
            let name = name.into();
            let key = match_key(&name);
            if key.is_empty() || entries.iter().any(|e| e.key == key) {
                continue;
            }
            entries.push(CatalogEntry { name, key });
        }

        Self { entries }
    }

    /// Parses a catalog from its JSON form, `{"items": ["Sword", ...]}`.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        Ok(Self::new(file.items))
    }

    /// The catalog shipped with the bot.
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds item names matching a partial query.
    ///
    /// Matching ignores case, diacritics, whitespace and punctuation. Prefix matches rank
    /// before substring matches, which rank before in-order character matches; within a
    /// tier names are ordered alphabetically. An empty query lists the catalog from the top.
    ///
    /// # Arguments
    /// - `query` - Partial item name as typed
    /// - `limit` - Maximum number of names returned
    pub fn search(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = match_key(query);

        let mut matches: Vec<(u8, &str)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let tier = if entry.key.starts_with(&query) {
                    0
                } else if entry.key.contains(&query) {
                    1
                } else if is_subsequence(&query, &entry.key) {
                    2
                } else {
                    return None;
                };
                Some((tier, entry.name.as_str()))
            })
            .collect();

        matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        matches.into_iter().take(limit).map(|(_, name)| name).collect()
    }
}

fn match_key(name: &str) -> String {
    normalize_slug(name).replace('-', "")
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut haystack = haystack.chars();
    needle.chars().all(|c| haystack.any(|h| h == c))
}
