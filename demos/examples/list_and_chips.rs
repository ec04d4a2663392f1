// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard-driven widgets: a list navigated with arrows and typeahead, and a filter
//! chip set where a chip is removed.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p lintel_demos --example list_and_chips`

use lintel_widgets::chip::{ChipActionSource, ChipNavigationEvent, ChipRemovalEvent};
use lintel_widgets::chip_set::{ChipSetAdapter, ChipSetFoundation, ChipSetVariant};
use lintel_widgets::list::{ListAdapter, ListFoundation, ListIndex, ListKeyTarget};
use lintel_widgets::{Foundation, Key, KeyEvent};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A list of plain text rows.
#[derive(Debug)]
struct Rows {
    labels: Vec<&'static str>,
    focused: Option<usize>,
}

impl ListAdapter for Rows {
    fn list_item_count(&self) -> usize {
        self.labels.len()
    }

    fn focused_element_index(&self) -> Option<usize> {
        self.focused
    }

    fn focus_item_at_index(&mut self, index: usize) {
        info!(index, label = self.labels[index], "list focus");
        self.focused = Some(index);
    }

    fn primary_text_at_index(&self, index: usize) -> String {
        self.labels.get(index).copied().unwrap_or_default().to_owned()
    }

    fn notify_action(&mut self, index: usize) {
        info!(index, "list action");
    }
}

/// Chips addressed by their label.
#[derive(Debug)]
struct Chips {
    ids: Vec<&'static str>,
    selected: Vec<bool>,
}

impl ChipSetAdapter for Chips {
    fn chip_count(&self) -> usize {
        self.ids.len()
    }

    fn index_of_chip_by_id(&self, chip_id: &str) -> Option<usize> {
        self.ids.iter().position(|id| *id == chip_id)
    }

    fn chip_id_at_index(&self, index: usize) -> Option<String> {
        self.ids.get(index).map(|id| (*id).to_owned())
    }

    fn is_chip_selected_at_index(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    fn select_chip_at_index(&mut self, index: usize, selected: bool, _notify: bool) {
        info!(chip = self.ids[index], selected, "chip selection");
        self.selected[index] = selected;
    }

    fn remove_chip_at_index(&mut self, index: usize) {
        info!(chip = self.ids[index], "chip removed");
        self.ids.remove(index);
        self.selected.remove(index);
    }

    fn focus_chip_primary_action_at_index(&mut self, index: usize) {
        info!(chip = self.ids[index], "focus primary action");
    }

    fn focus_chip_trailing_action_at_index(&mut self, index: usize) {
        info!(chip = self.ids[index], "focus trailing action");
    }

    fn announce_message(&mut self, message: &str) {
        info!(message, "announce");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rows = Rows {
        labels: vec!["Apple", "Apricot", "Banana", "Blueberry", "Cherry"],
        focused: Some(0),
    };
    let mut list = ListFoundation::new(rows);
    list.set_has_typeahead(true);
    list.layout();

    for key in [Key::ArrowDown, Key::ArrowDown, Key::End, Key::Home] {
        let at = list.adapter().focused.unwrap_or(0);
        list.handle_keydown(KeyEvent::new(key), ListKeyTarget::item(at));
    }
    // "b" jumps to Banana. Once the typed prefix expires, "b" again cycles to Blueberry.
    for now in [0, 400] {
        list.advance(now);
        let at = list.adapter().focused.unwrap_or(0);
        list.handle_keydown(KeyEvent::new(Key::Character('b')), ListKeyTarget::item(at));
    }
    list.advance(1_000);
    info!(typing = list.is_typeahead_in_progress(), "typeahead after a pause");
    if let Err(err) = list.set_selected_index(ListIndex::Single(2)) {
        tracing::error!(%err, "rejected selection");
    }

    let chips = Chips {
        ids: vec!["red", "green", "blue"],
        selected: vec![false, true, false],
    };
    let mut set = ChipSetFoundation::new(chips, ChipSetVariant::Filter);
    if let Err(err) = set.init() {
        tracing::error!(%err, "chip set failed to initialize");
        return;
    }
    set.handle_chip_interaction("red");
    info!(selected = ?set.selected_chip_ids(), "filter selection");

    set.handle_chip_navigation(
        "red",
        ChipNavigationEvent {
            key: Key::ArrowRight,
            source: ChipActionSource::Primary,
        },
    );
    set.handle_chip_removal(
        "green",
        &ChipRemovalEvent {
            removed_announcement: Some(String::from("green has been removed")),
        },
    );
    info!(selected = ?set.selected_chip_ids(), "after removal");
}
