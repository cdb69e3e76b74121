//! Item name normalisation.
//!
//! Votes for "sword", "Sword " and "SWORD!!" must land on the same item, so every item name
//! is reduced to a slug before it reaches the ledger. The first display form submitted for a
//! slug becomes the item's canonical name.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Reduces an item name to its ledger key.
///
/// Case-folds, strips diacritics and collapses every run of whitespace or punctuation into a
/// single `-`. Leading and trailing separators are dropped, so the result is empty when the
/// name has no letters or digits.
pub fn normalize_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Produces the display form of an item name.
///
/// Trims, collapses inner whitespace to single spaces and capitalises the first letter. The
/// rest of the name keeps its original casing.
pub fn display_name(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
