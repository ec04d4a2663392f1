// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prefix buffer and matching.

use alloc::string::String;

use crate::{BUFFER_CLEAR_TIMEOUT_MS, SortedIndex, TextAndIndex};

/// Transient typeahead state: the prefix typed so far and the cursor into the matching bucket.
///
/// Timestamps are milliseconds on the caller's clock. The buffer expires once
/// [`BUFFER_CLEAR_TIMEOUT_MS`] pass without a keystroke; expiry is evaluated lazily on the
/// next query, so no timer is required.
#[derive(Clone, Debug, Default)]
pub struct TypeaheadState {
    buffer: String,
    current_first_char: Option<char>,
    sorted_index_cursor: usize,
    last_keystroke: Option<u64>,
}

impl TypeaheadState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The prefix typed so far, lowercased.
    ///
    /// This does not account for expiry; call [`TypeaheadState::expire`] first when the
    /// time matters.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns `true` while a prefix is being typed and has not expired at `now`.
    #[must_use]
    pub fn is_typing_in_progress(&self, now: u64) -> bool {
        !self.buffer.is_empty() && !self.is_expired(now)
    }

    /// Clears the buffer immediately.
    ///
    /// The first-character cursor survives, so typing the same character again after a
    /// clear continues cycling through that character's items.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Clears the buffer if it has expired at `now`.
    pub fn expire(&mut self, now: u64) {
        if self.is_expired(now) {
            self.buffer.clear();
        }
    }

    fn is_expired(&self, now: u64) -> bool {
        self.last_keystroke
            .is_none_or(|last| now.saturating_sub(last) >= BUFFER_CLEAR_TIMEOUT_MS)
    }

    /// Appends `next_char` to the buffer and finds the matching item.
    ///
    /// `focused` is the item the search is relative to: a fresh single-character prefix
    /// matches the first enabled item after it, wrapping around to the first enabled item
    /// with that character. Repeating the same character while focus stays on the last
    /// match cycles through the bucket. Longer prefixes keep the current match if it still
    /// fits, otherwise scan the bucket forward with wrap-around.
    ///
    /// Returns the matched item index, or `None` when nothing enabled matches.
    pub fn match_item(
        &mut self,
        index: &SortedIndex,
        next_char: char,
        focused: Option<usize>,
        now: u64,
        is_disabled: impl Fn(usize) -> bool,
    ) -> Option<usize> {
        self.expire(now);
        self.last_keystroke = Some(now);
        self.buffer.extend(next_char.to_lowercase());

        if self.buffer.chars().nth(1).is_none() {
            self.match_first_char(index, focused, &is_disabled)
        } else {
            self.match_all_chars(index, &is_disabled)
        }
    }

    fn match_first_char(
        &mut self,
        index: &SortedIndex,
        focused: Option<usize>,
        is_disabled: &impl Fn(usize) -> bool,
    ) -> Option<usize> {
        let first = self.buffer.chars().next()?;
        let items = index.bucket(first)?;

        // Same character again with focus still on the previous match: step the cursor.
        if self.current_first_char == Some(first)
            && items.get(self.sorted_index_cursor).map(|i| i.index) == focused
        {
            self.sorted_index_cursor = (self.sorted_index_cursor + 1) % items.len();
            let candidate = items[self.sorted_index_cursor].index;
            if !is_disabled(candidate) {
                return Some(candidate);
            }
        }

        self.current_first_char = Some(first);
        let after_focus = |item: &TextAndIndex| focused.is_none_or(|f| item.index > f);

        // Prefer the first enabled item after the focused one, else the first enabled one.
        let fallback = items.iter().position(|item| !is_disabled(item.index));
        let next = fallback.and_then(|start| {
            items[start..]
                .iter()
                .position(|item| after_focus(item) && !is_disabled(item.index))
                .map(|offset| start + offset)
        });
        let cursor = next.or(fallback)?;
        self.sorted_index_cursor = cursor;
        Some(items[cursor].index)
    }

    fn match_all_chars(
        &mut self,
        index: &SortedIndex,
        is_disabled: &impl Fn(usize) -> bool,
    ) -> Option<usize> {
        let first = self.buffer.chars().next()?;
        let items = index.bucket(first)?;
        let len = items.len();
        let start = self.sorted_index_cursor.min(len - 1);

        let current = &items[start];
        if current.text.starts_with(self.buffer.as_str()) && !is_disabled(current.index) {
            self.sorted_index_cursor = start;
            return Some(current.index);
        }

        let mut cursor = (start + 1) % len;
        while cursor != start {
            let item = &items[cursor];
            if item.text.starts_with(self.buffer.as_str()) && !is_disabled(item.index) {
                self.sorted_index_cursor = cursor;
                return Some(item.index);
            }
            cursor = (cursor + 1) % len;
        }
        None
    }
}
