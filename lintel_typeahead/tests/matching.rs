// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for typeahead matching.

use lintel_typeahead::{SortedIndex, TypeaheadState};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[ a-cA-C]{0,5}"
}

proptest! {
    #[test]
    fn matches_are_enabled_and_prefixed(
        texts in prop::collection::vec(word(), 1..12),
        typed in "[a-c]{1,4}",
        disabled_mask in any::<u16>(),
        focused in prop::option::of(0_usize..12),
    ) {
        let index = SortedIndex::from_texts(&texts);
        let mut state = TypeaheadState::new();
        let is_disabled = |i: usize| disabled_mask & (1 << (i % 16)) != 0;

        let mut focus = focused;
        for (step, c) in typed.chars().enumerate() {
            let now = step as u64 * 10;
            let hit = state.match_item(&index, c, focus, now, is_disabled);
            if let Some(i) = hit {
                prop_assert!(!is_disabled(i));
                let normalized = texts[i].trim().to_lowercase();
                prop_assert!(
                    normalized.starts_with(state.buffer()),
                    "{:?} does not start with {:?}",
                    normalized,
                    state.buffer()
                );
                focus = Some(i);
            }
        }
    }

    #[test]
    fn single_char_finds_any_enabled_candidate(
        texts in prop::collection::vec(word(), 1..12),
        c in "[a-c]",
    ) {
        let index = SortedIndex::from_texts(&texts);
        let mut state = TypeaheadState::new();
        let c = c.chars().next().unwrap();
        let exists = texts.iter().any(|t| t.trim().to_lowercase().starts_with(c));
        let hit = state.match_item(&index, c, None, 0, |_| false);
        prop_assert_eq!(hit.is_some(), exists);
    }
}
