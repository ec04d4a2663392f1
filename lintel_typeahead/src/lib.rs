// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lintel Typeahead: prefix matching for keyboard-driven lists and menus.
//!
//! Typing characters while a list has focus should move focus to the item whose text
//! starts with what was typed. This crate provides the two pieces that behavior needs:
//!
//! - [`SortedIndex`]: item texts bucketed by their (lowercased) first character, each
//!   bucket sorted by item index. Build it once per item set.
//! - [`TypeaheadState`]: the transient prefix buffer plus a cursor into the current
//!   bucket. Feed it one character at a time with [`TypeaheadState::match_item`].
//!
//! Matching is case-insensitive and ignores leading and trailing whitespace in item
//! texts. Disabled items are never matched; the caller supplies an `is_disabled`
//! predicate so the index does not need rebuilding when enablement changes.
//!
//! The prefix buffer clears itself once [`BUFFER_CLEAR_TIMEOUT_MS`] pass without a
//! keystroke. Time is supplied by the caller as milliseconds, which keeps matching
//! deterministic under a virtual clock.
//!
//! ## Example
//!
//! ```rust
//! use lintel_typeahead::{SortedIndex, TypeaheadState};
//!
//! let index = SortedIndex::from_texts(["Apple", "Banana", "Avocado"]);
//! let mut state = TypeaheadState::new();
//!
//! // With "Apple" focused, typing "a" moves on to the next "a" item.
//! let hit = state.match_item(&index, 'a', Some(0), 1_000, |_| false);
//! assert_eq!(hit, Some(2));
//!
//! // "av" still matches "Avocado".
//! assert_eq!(state.match_item(&index, 'v', hit, 1_050, |_| false), Some(2));
//!
//! // After the buffer expires, "b" starts over.
//! assert_eq!(state.match_item(&index, 'b', Some(2), 2_000, |_| false), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod index;
mod state;

pub use index::{SortedIndex, TextAndIndex};
pub use state::TypeaheadState;

/// Milliseconds of inactivity after which the typeahead buffer is cleared.
pub const BUFFER_CLEAR_TIMEOUT_MS: u64 = 300;
