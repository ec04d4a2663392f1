// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First-character index over item texts.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// An item's normalized primary text together with its position in the item list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextAndIndex {
    /// Trimmed, lowercased primary text.
    pub text: String,
    /// Position of the item in the host's item list.
    pub index: usize,
}

/// Items bucketed by the first character of their normalized text.
///
/// Each bucket is sorted by item index, so a scan of one bucket visits items in list
/// order. Items whose text is empty after trimming are not indexed and can never be
/// matched.
///
/// Rebuild the index whenever the host's item set changes; it holds no references to
/// the items themselves.
#[derive(Clone, Debug, Default)]
pub struct SortedIndex {
    by_first_char: HashMap<char, Vec<TextAndIndex>>,
}

impl SortedIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index over `count` items, reading each item's text through `text_at`.
    pub fn build<S: AsRef<str>>(count: usize, mut text_at: impl FnMut(usize) -> S) -> Self {
        let mut by_first_char: HashMap<char, Vec<TextAndIndex>> = HashMap::new();
        for index in 0..count {
            let text = text_at(index);
            let trimmed = text.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            let text = trimmed.to_lowercase();
            let Some(first) = text.chars().next() else {
                continue;
            };
            by_first_char
                .entry(first)
                .or_default()
                .push(TextAndIndex { text, index });
        }
        for bucket in by_first_char.values_mut() {
            bucket.sort_by_key(|entry| entry.index);
        }
        Self { by_first_char }
    }

    /// Builds an index from an iterator of texts, using iteration order as item index.
    pub fn from_texts<I>(texts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let texts: Vec<I::Item> = texts.into_iter().collect();
        Self::build(texts.len(), |i| &texts[i])
    }

    /// Entries whose text starts with `first`, in item order.
    #[must_use]
    pub fn bucket(&self, first: char) -> Option<&[TextAndIndex]> {
        self.by_first_char.get(&first).map(Vec::as_slice)
    }

    /// Number of indexed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_first_char.values().map(Vec::len).sum()
    }

    /// Returns `true` if no item is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_first_char.is_empty()
    }
}
