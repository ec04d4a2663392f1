// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A set of chips: selection policy, removal focus hand-off, and keyboard navigation.
//!
//! The chip set reacts to the notifications its chips send (see [`crate::chip`]). Changes
//! the set forces on a chip come back marked `should_ignore`, which the set drops, so
//! policy enforcement never feeds back into itself.

use alloc::string::String;

use smallvec::SmallVec;

use crate::chip::{
    ChipActionSource, ChipNavigationEvent, ChipRemovalEvent, ChipSelectionEvent, Direction,
    direction, is_jump_key,
};
use crate::event::Key;
use crate::{Foundation, Result};

class_names! {
    /// Classes marking the chip set variant.
    pub enum ChipSetClass {
        /// Single selection.
        Choice => "mdc-chip-set--choice",
        /// Multiple selection.
        Filter => "mdc-chip-set--filter",
        /// Removable entries without selection.
        Input => "mdc-chip-set--input",
    }
}

/// Selection behavior of a chip set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChipSetVariant {
    /// At most one chip is selected; selecting another deselects the previous one.
    Choice,
    /// Any number of chips can be selected.
    Filter,
    /// Chips are not selectable.
    #[default]
    Input,
}

impl ChipSetVariant {
    /// The class marking this variant.
    #[must_use]
    pub const fn class(self) -> ChipSetClass {
        match self {
            Self::Choice => ChipSetClass::Choice,
            Self::Filter => ChipSetClass::Filter,
            Self::Input => ChipSetClass::Input,
        }
    }

    /// Returns `true` if interacting with a chip toggles its selection.
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        matches!(self, Self::Choice | Self::Filter)
    }
}

/// Environment operations a chip set needs. Chips are addressed by index in DOM order.
pub trait ChipSetAdapter {
    /// Number of chips.
    fn chip_count(&self) -> usize {
        0
    }

    /// Index of the chip with `chip_id`.
    fn index_of_chip_by_id(&self, chip_id: &str) -> Option<usize> {
        let _ = chip_id;
        None
    }

    /// Id of the chip at `index`.
    fn chip_id_at_index(&self, index: usize) -> Option<String> {
        let _ = index;
        None
    }

    /// Returns `true` if the chip at `index` is selected in markup.
    fn is_chip_selected_at_index(&self, index: usize) -> bool {
        let _ = index;
        false
    }

    /// Forwards to the chip's `set_selected_from_chip_set`.
    fn select_chip_at_index(&mut self, index: usize, selected: bool, notify: bool) {
        let _ = (index, selected, notify);
    }

    /// Removes the chip at `index` from the set.
    fn remove_chip_at_index(&mut self, index: usize) {
        let _ = index;
    }

    /// Focuses the primary action of the chip at `index`.
    fn focus_chip_primary_action_at_index(&mut self, index: usize) {
        let _ = index;
    }

    /// Focuses the trailing action of the chip at `index`.
    fn focus_chip_trailing_action_at_index(&mut self, index: usize) {
        let _ = index;
    }

    /// Takes the chip at `index` out of the tab order.
    fn remove_focus_from_chip_at_index(&mut self, index: usize) {
        let _ = index;
    }

    /// Returns `true` for right-to-left layouts.
    fn is_rtl(&self) -> bool {
        false
    }

    /// Announces `message` to assistive technology.
    fn announce_message(&mut self, message: &str) {
        let _ = message;
    }
}

/// Selection and focus state of a chip set.
#[derive(Debug)]
pub struct ChipSetFoundation<A> {
    adapter: A,
    variant: ChipSetVariant,
    selected_chip_ids: SmallVec<[String; 4]>,
}

impl<A: ChipSetAdapter> ChipSetFoundation<A> {
    /// Creates an empty selection for a chip set of the given variant.
    pub fn new(adapter: A, variant: ChipSetVariant) -> Self {
        Self {
            adapter,
            variant,
            selected_chip_ids: SmallVec::new(),
        }
    }

    /// The chip set's variant.
    #[must_use]
    pub fn variant(&self) -> ChipSetVariant {
        self.variant
    }

    /// Ids of the selected chips, in the order they were selected.
    #[must_use]
    pub fn selected_chip_ids(&self) -> &[String] {
        &self.selected_chip_ids
    }

    /// Selects a chip without notifying clients. Unknown ids are ignored.
    pub fn select(&mut self, chip_id: &str) {
        self.select_chip(chip_id, false);
    }

    /// A chip was clicked or activated with the keyboard.
    pub fn handle_chip_interaction(&mut self, chip_id: &str) {
        let Some(index) = self.adapter.index_of_chip_by_id(chip_id) else {
            return;
        };
        self.remove_focus_from_chips_except(index);
        if self.variant.is_selectable() {
            self.toggle_select(chip_id);
        }
    }

    /// A chip reported a selection change.
    pub fn handle_chip_selection(&mut self, chip_id: &str, event: ChipSelectionEvent) {
        if event.should_ignore {
            return;
        }
        let is_selected = self.is_selected(chip_id);
        if event.selected && !is_selected {
            self.select(chip_id);
        } else if !event.selected && is_selected {
            self.deselect(chip_id, false);
        }
    }

    /// A chip finished its exit sequence.
    ///
    /// Focus moves to the trailing action of the chip that takes the removed chip's
    /// place, or of the new last chip.
    pub fn handle_chip_removal(&mut self, chip_id: &str, event: &ChipRemovalEvent) {
        let announcement = event.removed_announcement.as_deref();
        if let Some(message) = announcement.filter(|m| !m.is_empty()) {
            self.adapter.announce_message(message);
        }
        let Some(index) = self.adapter.index_of_chip_by_id(chip_id) else {
            return;
        };
        self.deselect(chip_id, true);
        self.adapter.remove_chip_at_index(index);
        debug_event!(message = "chip_set.removed", index);

        let count = self.adapter.chip_count();
        if count == 0 {
            return;
        }
        let next = index.min(count - 1);
        self.remove_focus_from_chips_except(next);
        self.adapter.focus_chip_trailing_action_at_index(next);
    }

    /// A chip asked to move focus to a neighbor.
    pub fn handle_chip_navigation(&mut self, chip_id: &str, event: ChipNavigationEvent) {
        let Some(index) = self.adapter.index_of_chip_by_id(chip_id) else {
            return;
        };
        let count = self.adapter.chip_count();
        if count == 0 {
            return;
        }
        let rtl = self.adapter.is_rtl();
        let increment = event.key == Key::ArrowDown
            || (!rtl && event.key == Key::ArrowRight)
            || (rtl && event.key == Key::ArrowLeft);

        let target = if increment {
            Some(index + 1)
        } else {
            match event.key {
                Key::Home => Some(0),
                Key::End => Some(count - 1),
                _ => index.checked_sub(1),
            }
        };
        let Some(target) = target.filter(|i| *i < count) else {
            return;
        };
        self.remove_focus_from_chips_except(target);
        self.focus_chip_action(target, event.key, event.source);
    }

    fn focus_chip_action(&mut self, index: usize, key: Key, source: ChipActionSource) {
        if is_jump_key(key) {
            match source {
                ChipActionSource::Primary => {
                    self.adapter.focus_chip_primary_action_at_index(index);
                    return;
                }
                ChipActionSource::Trailing => {
                    self.adapter.focus_chip_trailing_action_at_index(index);
                    return;
                }
                ChipActionSource::None => {}
            }
        }
        match direction(key, self.adapter.is_rtl()) {
            Direction::Left => self.adapter.focus_chip_trailing_action_at_index(index),
            Direction::Right => self.adapter.focus_chip_primary_action_at_index(index),
        }
    }

    fn is_selected(&self, chip_id: &str) -> bool {
        self.selected_chip_ids.iter().any(|id| id == chip_id)
    }

    fn toggle_select(&mut self, chip_id: &str) {
        if self.is_selected(chip_id) {
            self.deselect(chip_id, true);
        } else {
            self.select_chip(chip_id, true);
        }
    }

    fn select_chip(&mut self, chip_id: &str, notify: bool) {
        if self.is_selected(chip_id) {
            return;
        }
        let Some(index) = self.adapter.index_of_chip_by_id(chip_id) else {
            return;
        };
        if self.variant == ChipSetVariant::Choice {
            let previous = core::mem::take(&mut self.selected_chip_ids);
            for id in previous {
                if let Some(previous_index) = self.adapter.index_of_chip_by_id(&id) {
                    self.adapter
                        .select_chip_at_index(previous_index, false, notify);
                }
            }
        }
        self.selected_chip_ids.push(String::from(chip_id));
        self.adapter.select_chip_at_index(index, true, notify);
    }

    fn deselect(&mut self, chip_id: &str, notify: bool) {
        let Some(position) = self.selected_chip_ids.iter().position(|id| id == chip_id) else {
            return;
        };
        self.selected_chip_ids.remove(position);
        if let Some(index) = self.adapter.index_of_chip_by_id(chip_id) {
            self.adapter.select_chip_at_index(index, false, notify);
        }
    }

    fn remove_focus_from_chips_except(&mut self, keep: usize) {
        for i in (0..self.adapter.chip_count()).filter(|i| *i != keep) {
            self.adapter.remove_focus_from_chip_at_index(i);
        }
    }
}

impl<A: ChipSetAdapter> Foundation for ChipSetFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Adopts the chips that are selected in markup.
    fn init(&mut self) -> Result<()> {
        for i in 0..self.adapter.chip_count() {
            if !self.adapter.is_chip_selected_at_index(i) {
                continue;
            }
            if let Some(id) = self.adapter.chip_id_at_index(i) {
                self.select(&id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;
    use crate::testing::CallLog;

    #[derive(Debug, Default)]
    struct FakeChipSet {
        ids: Vec<String>,
        selected: Vec<bool>,
        rtl: bool,
        log: CallLog,
    }

    impl FakeChipSet {
        fn with_chips(n: usize) -> Self {
            Self {
                ids: (0..n).map(|i| format!("chip-{i}")).collect(),
                selected: alloc::vec![false; n],
                ..Self::default()
            }
        }
    }

    impl ChipSetAdapter for FakeChipSet {
        fn chip_count(&self) -> usize {
            self.ids.len()
        }

        fn index_of_chip_by_id(&self, chip_id: &str) -> Option<usize> {
            self.ids.iter().position(|id| id == chip_id)
        }

        fn chip_id_at_index(&self, index: usize) -> Option<String> {
            self.ids.get(index).cloned()
        }

        fn is_chip_selected_at_index(&self, index: usize) -> bool {
            self.selected.get(index).copied().unwrap_or(false)
        }

        fn select_chip_at_index(&mut self, index: usize, selected: bool, notify: bool) {
            self.selected[index] = selected;
            self.log.push(format!("select {index} {selected} {notify}"));
        }

        fn remove_chip_at_index(&mut self, index: usize) {
            self.ids.remove(index);
            self.selected.remove(index);
            self.log.push(format!("remove {index}"));
        }

        fn focus_chip_primary_action_at_index(&mut self, index: usize) {
            self.log.push(format!("primary {index}"));
        }

        fn focus_chip_trailing_action_at_index(&mut self, index: usize) {
            self.log.push(format!("trailing {index}"));
        }

        fn remove_focus_from_chip_at_index(&mut self, index: usize) {
            self.log.push(format!("unfocus {index}"));
        }

        fn is_rtl(&self) -> bool {
            self.rtl
        }

        fn announce_message(&mut self, message: &str) {
            self.log.push(format!("announce {message}"));
        }
    }

    fn set(variant: ChipSetVariant, n: usize) -> ChipSetFoundation<FakeChipSet> {
        ChipSetFoundation::new(FakeChipSet::with_chips(n), variant)
    }

    fn nav(key: Key, source: ChipActionSource) -> ChipNavigationEvent {
        ChipNavigationEvent { key, source }
    }

    #[test]
    fn choice_keeps_a_single_selection() {
        let mut s = set(ChipSetVariant::Choice, 3);
        s.handle_chip_interaction("chip-0");
        s.handle_chip_interaction("chip-2");
        assert_eq!(s.selected_chip_ids(), ["chip-2".to_string()]);
        assert!(s.adapter().log.contains("select 0 false true"));
        assert_eq!(s.adapter().selected, [false, false, true]);

        s.handle_chip_interaction("chip-2");
        assert!(s.selected_chip_ids().is_empty());
    }

    #[test]
    fn filter_toggles_independently() {
        let mut s = set(ChipSetVariant::Filter, 3);
        s.handle_chip_interaction("chip-0");
        s.handle_chip_interaction("chip-1");
        assert_eq!(s.selected_chip_ids().len(), 2);
        s.handle_chip_interaction("chip-0");
        assert_eq!(s.selected_chip_ids(), ["chip-1".to_string()]);
    }

    #[test]
    fn input_sets_do_not_select() {
        let mut s = set(ChipSetVariant::Input, 2);
        s.handle_chip_interaction("chip-1");
        assert!(s.selected_chip_ids().is_empty());
        assert!(s.adapter().log.contains("unfocus 0"));
        assert!(!s.adapter().log.contains("unfocus 1"));
    }

    #[test]
    fn ignored_selection_events_do_not_feed_back() {
        let mut s = set(ChipSetVariant::Choice, 2);
        let forced = ChipSelectionEvent {
            selected: true,
            should_ignore: true,
        };
        s.handle_chip_selection("chip-0", forced);
        assert!(s.selected_chip_ids().is_empty());

        let user = ChipSelectionEvent {
            selected: true,
            should_ignore: false,
        };
        s.handle_chip_selection("chip-0", user);
        assert_eq!(s.selected_chip_ids(), ["chip-0".to_string()]);
        assert!(s.adapter().log.contains("select 0 true false"));

        let user_off = ChipSelectionEvent {
            selected: false,
            should_ignore: false,
        };
        s.handle_chip_selection("chip-0", user_off);
        assert!(s.selected_chip_ids().is_empty());
    }

    #[test]
    fn removal_announces_and_hands_focus_on() {
        let mut s = set(ChipSetVariant::Filter, 3);
        s.select("chip-2");
        s.handle_chip_removal(
            "chip-2",
            &ChipRemovalEvent {
                removed_announcement: Some("Removed".to_string()),
            },
        );
        assert!(s.adapter().log.ordered("announce Removed", "remove 2"));
        assert!(s.selected_chip_ids().is_empty());
        assert!(s.adapter().log.contains("trailing 1"));

        s.handle_chip_removal(
            "chip-0",
            &ChipRemovalEvent {
                removed_announcement: None,
            },
        );
        assert!(s.adapter().log.contains("trailing 0"));
        assert_eq!(s.adapter().ids, ["chip-1".to_string()]);
    }

    #[test]
    fn removing_last_chip_focuses_nothing() {
        let mut s = set(ChipSetVariant::Input, 1);
        s.handle_chip_removal(
            "chip-0",
            &ChipRemovalEvent {
                removed_announcement: None,
            },
        );
        assert!(!s.adapter().log.calls().iter().any(|l| l.starts_with("trailing")));
    }

    #[test]
    fn arrow_navigation_moves_between_chips() {
        let mut s = set(ChipSetVariant::Input, 3);
        s.handle_chip_navigation("chip-0", nav(Key::ArrowRight, ChipActionSource::None));
        assert!(s.adapter().log.contains("primary 1"));

        s.handle_chip_navigation("chip-1", nav(Key::ArrowLeft, ChipActionSource::None));
        assert!(s.adapter().log.contains("trailing 0"));

        s.adapter_mut().log.clear();
        s.handle_chip_navigation("chip-0", nav(Key::ArrowLeft, ChipActionSource::None));
        assert!(s.adapter().log.calls().is_empty());
        s.handle_chip_navigation("chip-2", nav(Key::ArrowRight, ChipActionSource::None));
        assert!(s.adapter().log.calls().is_empty());
    }

    #[test]
    fn jump_keys_keep_action_source() {
        let mut s = set(ChipSetVariant::Input, 4);
        s.handle_chip_navigation("chip-1", nav(Key::End, ChipActionSource::Trailing));
        assert!(s.adapter().log.contains("trailing 3"));
        s.handle_chip_navigation("chip-3", nav(Key::Home, ChipActionSource::Primary));
        assert!(s.adapter().log.contains("primary 0"));
        s.handle_chip_navigation("chip-0", nav(Key::ArrowDown, ChipActionSource::Primary));
        assert!(s.adapter().log.contains("primary 1"));
    }

    #[test]
    fn rtl_mirrors_navigation() {
        let mut s = ChipSetFoundation::new(
            FakeChipSet {
                rtl: true,
                ..FakeChipSet::with_chips(2)
            },
            ChipSetVariant::Input,
        );
        s.handle_chip_navigation("chip-0", nav(Key::ArrowLeft, ChipActionSource::None));
        assert!(s.adapter().log.contains("primary 1"));
        s.handle_chip_navigation("chip-1", nav(Key::ArrowRight, ChipActionSource::None));
        assert!(s.adapter().log.contains("trailing 0"));
    }

    #[test]
    fn init_adopts_markup_selection() {
        let mut adapter = FakeChipSet::with_chips(3);
        adapter.selected[1] = true;
        let mut s = ChipSetFoundation::new(adapter, ChipSetVariant::Filter);
        s.init().unwrap();
        assert_eq!(s.selected_chip_ids(), ["chip-1".to_string()]);
        assert!(s.adapter().log.contains("select 1 true false"));
    }
}
