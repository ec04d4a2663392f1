// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List: selection, roving focus and typeahead over a sequence of items.
//!
//! A list runs in one of four [`ListMode`]s. The mode decides which [`ListIndex`] shape
//! [`ListFoundation::set_selected_index`] accepts:
//!
//! | Mode              | Accepted shapes                       | Selection attribute             |
//! |-------------------|---------------------------------------|---------------------------------|
//! | `Plain`           | `Single`                              | `aria-selected`/`aria-current`  |
//! | `SingleSelection` | `Single`, `Unset`                     | `aria-selected`/`aria-current`  |
//! | `Radio`           | `Single`                              | `aria-checked`                  |
//! | `Checkbox`        | `Multiple`                            | `aria-checked`                  |
//!
//! The mode is either configured explicitly ([`ListFoundation::set_mode`]) or detected
//! by [`ListFoundation::layout`] from the first item: a checkbox makes a checkbox list, a
//! radio makes a radio list, and a pre-selected or pre-activated item makes a single
//! selection list. Lists mixing item kinds are classified by their first item only.
//!
//! Focus follows the roving tabindex pattern: exactly one item carries `tabindex="0"`.
//! Moving focus out of the list schedules a re-check on the next scheduler turn, since
//! focus may briefly belong to nothing while it moves between items.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use lintel_schedule::{Millis, Scheduler, TaskId};
use lintel_typeahead::{SortedIndex, TypeaheadState};

use crate::attr::{self, bool_str};
use crate::event::{EventEffects, Key, KeyEvent, Modifiers};
use crate::{Foundation, FoundationError, Result};

class_names! {
    /// Classes applied to list items.
    pub enum ListClass {
        /// A list item.
        Item => "mdc-list-item",
        /// The selected item of a single selection list.
        Selected => "mdc-list-item--selected",
        /// The selected item, when the list uses the activated style.
        Activated => "mdc-list-item--activated",
        /// An item that ignores activation and typeahead.
        Disabled => "mdc-list-item--disabled",
    }
}

/// How a list interprets selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListMode {
    /// Items are actionable but not selectable.
    #[default]
    Plain,
    /// At most one item is selected, and selection may be cleared.
    SingleSelection,
    /// Exactly one radio item is checked once any is.
    Radio,
    /// Any subset of checkbox items is checked.
    Checkbox,
}

impl ListMode {
    /// Returns `true` if activating an item changes selection.
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// A selection value. Which shapes are valid depends on the list's [`ListMode`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ListIndex {
    /// Nothing selected.
    #[default]
    Unset,
    /// One selected item.
    Single(usize),
    /// Checked items of a checkbox list.
    Multiple(Vec<usize>),
}

impl ListIndex {
    /// The selected item, for single-valued selections.
    #[must_use]
    pub fn single(&self) -> Option<usize> {
        match self {
            Self::Single(i) => Some(*i),
            _ => None,
        }
    }
}

/// Direction arrow keys move focus in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Up and down arrows move focus.
    #[default]
    Vertical,
    /// Left and right arrows move focus.
    Horizontal,
}

/// List behavior configured by the binding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListConfig {
    /// Explicit mode. When `None`, [`ListFoundation::layout`] detects it.
    pub mode: Option<ListMode>,
    /// Arrow keys wrap from the last item to the first and back.
    pub wrap_focus: bool,
    /// Which arrow keys move focus.
    pub orientation: Orientation,
    /// Mark the selected item with the activated class instead of the selected class.
    pub use_activated_class: bool,
    /// Use `aria-selected` instead of `aria-checked` for radio and checkbox lists.
    pub use_selected_attribute: bool,
    /// Match typed characters against item text.
    pub has_typeahead: bool,
}

/// Environment operations a list needs.
///
/// Every method has a default so partial bindings and tests only implement what they
/// observe.
pub trait ListAdapter {
    /// Number of items.
    fn list_item_count(&self) -> usize {
        0
    }

    /// Index of the item that currently holds focus, if any.
    fn focused_element_index(&self) -> Option<usize> {
        None
    }

    /// Reads an attribute of the item at `index`.
    fn attribute_for_element_index(&self, index: usize, name: &str) -> Option<String> {
        let _ = (index, name);
        None
    }

    /// Sets an attribute on the item at `index`.
    fn set_attribute_for_element_index(&mut self, index: usize, name: &str, value: &str) {
        let _ = (index, name, value);
    }

    /// Adds a class to the item at `index`.
    fn add_class_for_element_index(&mut self, index: usize, class: ListClass) {
        let _ = (index, class);
    }

    /// Removes a class from the item at `index`.
    fn remove_class_for_element_index(&mut self, index: usize, class: ListClass) {
        let _ = (index, class);
    }

    /// Returns `true` if the item at `index` has `class`.
    fn list_item_at_index_has_class(&self, index: usize, class: ListClass) -> bool {
        let _ = (index, class);
        false
    }

    /// Moves focus to the item at `index`.
    fn focus_item_at_index(&mut self, index: usize) {
        let _ = index;
    }

    /// Sets the tabindex of focusable children of the item at `index`.
    fn set_tab_index_for_list_item_children(&mut self, index: usize, value: &str) {
        let _ = (index, value);
    }

    /// Returns `true` if the item at `index` contains a checkbox.
    fn has_checkbox_at_index(&self, index: usize) -> bool {
        let _ = index;
        false
    }

    /// Returns `true` if the item at `index` contains a radio button.
    fn has_radio_at_index(&self, index: usize) -> bool {
        let _ = index;
        false
    }

    /// Returns `true` if the checkbox in the item at `index` is checked.
    fn is_checkbox_checked_at_index(&self, index: usize) -> bool {
        let _ = index;
        false
    }

    /// Checks or unchecks the checkbox or radio in the item at `index`.
    fn set_checked_checkbox_or_radio_at_index(&mut self, index: usize, checked: bool) {
        let _ = (index, checked);
    }

    /// Returns `true` if the list root itself holds focus.
    fn is_root_focused(&self) -> bool {
        false
    }

    /// Returns `true` if focus is on the list or any of its descendants.
    fn is_focus_inside_list(&self) -> bool {
        false
    }

    /// Primary text of the item at `index`, used for typeahead.
    fn primary_text_at_index(&self, index: usize) -> String {
        let _ = index;
        String::new()
    }

    /// The item at `index` was activated by click or keyboard.
    fn notify_action(&mut self, index: usize) {
        let _ = index;
    }
}

/// Where a key event originated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListKeyTarget {
    /// Index of the item containing the event target, if it belongs to this list.
    pub item_index: Option<usize>,
    /// The event target is a list item element (not a child control).
    pub is_list_item: bool,
    /// The event target is a link, which synthesizes its own click on Enter.
    pub is_anchor: bool,
}

impl ListKeyTarget {
    /// A key event on the list item at `index`.
    #[must_use]
    pub const fn item(index: usize) -> Self {
        Self {
            item_index: Some(index),
            is_list_item: true,
            is_anchor: false,
        }
    }
}

/// Which attribute marks single selection, decided on first selection.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SelectionAria {
    /// `aria-current` with the value the first selected item carried.
    Current(String),
    /// `aria-selected="true"`.
    Selected,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ListTask {
    FocusOutCheck,
}

/// Selection, keyboard navigation and typeahead for a list.
#[derive(Debug)]
pub struct ListFoundation<A> {
    adapter: A,
    config: ListConfig,
    mode: ListMode,
    selected: ListIndex,
    focused_item_index: Option<usize>,
    selection_aria: Option<SelectionAria>,
    typeahead: TypeaheadState,
    sorted_index: SortedIndex,
    focus_out_check: Option<TaskId>,
    scheduler: Scheduler<ListTask>,
}

impl<A: ListAdapter> ListFoundation<A> {
    /// Creates a list with default configuration.
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, ListConfig::default())
    }

    /// Creates a list with the given configuration.
    pub fn with_config(adapter: A, config: ListConfig) -> Self {
        Self {
            adapter,
            mode: config.mode.unwrap_or_default(),
            config,
            selected: ListIndex::Unset,
            focused_item_index: None,
            selection_aria: None,
            typeahead: TypeaheadState::new(),
            sorted_index: SortedIndex::new(),
            focus_out_check: None,
            scheduler: Scheduler::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> ListMode {
        self.mode
    }

    /// Current selection.
    #[must_use]
    pub fn selected_index(&self) -> &ListIndex {
        &self.selected
    }

    /// Index of the item focus was last moved to, if any.
    #[must_use]
    pub fn focused_item_index(&self) -> Option<usize> {
        self.focused_item_index
    }

    /// Detects the mode from the first item unless one was configured, and rebuilds the
    /// typeahead index. Does nothing for an empty list.
    pub fn layout(&mut self) {
        if self.adapter.list_item_count() == 0 {
            return;
        }

        if self.config.mode.is_none() {
            if self.adapter.has_checkbox_at_index(0) {
                self.mode = ListMode::Checkbox;
            } else if self.adapter.has_radio_at_index(0) {
                self.mode = ListMode::Radio;
            } else {
                self.maybe_initialize_single_selection();
            }
            debug_event!(message = "list.layout", mode = ?self.mode);
        }

        if self.config.has_typeahead {
            self.rebuild_sorted_index();
        }
    }

    /// Sets the mode explicitly, overriding detection.
    pub fn set_mode(&mut self, mode: ListMode) {
        self.config.mode = Some(mode);
        self.mode = mode;
    }

    /// Switches single selection on or off.
    ///
    /// Turning it on adopts an item that is already marked selected or activated.
    pub fn set_single_selection(&mut self, single: bool) {
        if single {
            self.mode = ListMode::SingleSelection;
            self.maybe_initialize_single_selection();
        } else if self.mode == ListMode::SingleSelection {
            self.mode = ListMode::Plain;
        }
    }

    fn maybe_initialize_single_selection(&mut self) {
        let count = self.adapter.list_item_count();
        for i in 0..count {
            let selected = self
                .adapter
                .list_item_at_index_has_class(i, ListClass::Selected);
            let activated = self
                .adapter
                .list_item_at_index_has_class(i, ListClass::Activated);
            if !(selected || activated) {
                continue;
            }
            if activated {
                self.config.use_activated_class = true;
            }
            self.mode = ListMode::SingleSelection;
            self.selected = ListIndex::Single(i);
            return;
        }
    }

    /// Arrow keys wrap around the ends of the list.
    pub fn set_wrap_focus(&mut self, wrap: bool) {
        self.config.wrap_focus = wrap;
    }

    /// Sets which arrow keys move focus.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
    }

    /// Marks selection with the activated class instead of the selected class.
    pub fn set_use_activated_class(&mut self, use_activated: bool) {
        self.config.use_activated_class = use_activated;
    }

    /// Uses `aria-selected` instead of `aria-checked` for radio and checkbox lists.
    pub fn set_use_selected_attribute(&mut self, use_selected: bool) {
        self.config.use_selected_attribute = use_selected;
    }

    /// Enables or disables typeahead, rebuilding the index when enabling.
    pub fn set_has_typeahead(&mut self, has_typeahead: bool) {
        self.config.has_typeahead = has_typeahead;
        if has_typeahead {
            self.rebuild_sorted_index();
        }
    }

    /// Returns `true` while a typed prefix is still being matched.
    #[must_use]
    pub fn is_typeahead_in_progress(&self) -> bool {
        self.config.has_typeahead && self.typeahead.is_typing_in_progress(self.scheduler.now())
    }

    /// Clears the typed prefix immediately.
    pub fn clear_typeahead_buffer(&mut self) {
        self.typeahead.clear_buffer();
    }

    fn rebuild_sorted_index(&mut self) {
        let adapter = &self.adapter;
        self.sorted_index =
            SortedIndex::build(adapter.list_item_count(), |i| adapter.primary_text_at_index(i));
    }

    /// Applies a selection.
    ///
    /// The shape must match the mode: `Multiple` only for checkbox lists, and `Single`
    /// or `Unset` only for the others (`Unset` is honored by single selection lists).
    /// A mismatch is an error. Indices past the end of the list are ignored.
    pub fn set_selected_index(&mut self, index: ListIndex) -> Result<()> {
        let shape_ok = match &index {
            ListIndex::Multiple(_) => self.mode == ListMode::Checkbox,
            ListIndex::Single(_) | ListIndex::Unset => self.mode != ListMode::Checkbox,
        };
        if !shape_ok {
            warn_event!(message = "list.selection_shape", mode = ?self.mode, index = ?index);
            return Err(FoundationError::SelectionShape { mode: self.mode });
        }

        let valid = match &index {
            ListIndex::Multiple(indices) => {
                indices.is_empty() || indices.iter().any(|&i| self.is_index_in_range(i))
            }
            ListIndex::Single(i) => self.is_index_in_range(*i),
            ListIndex::Unset => self.mode == ListMode::SingleSelection,
        };
        if !valid {
            return Ok(());
        }

        match (self.mode, index) {
            (ListMode::Checkbox, ListIndex::Multiple(indices)) => self.set_checkbox_at(indices),
            (ListMode::Radio, ListIndex::Single(i)) => self.set_radio_at(i),
            (_, ListIndex::Single(i)) => self.set_single_selection_at(Some(i)),
            (_, _) => self.set_single_selection_at(None),
        }
        Ok(())
    }

    /// An item gained focus.
    pub fn handle_focus_in(&mut self, index: Option<usize>) {
        if let Some(i) = index {
            self.focused_item_index = Some(i);
            self.adapter
                .set_attribute_for_element_index(i, attr::TABINDEX, "0");
            self.adapter.set_tab_index_for_list_item_children(i, "0");
        }
    }

    /// An item lost focus.
    ///
    /// Whether focus left the list altogether is checked on the next scheduler turn.
    pub fn handle_focus_out(&mut self, index: Option<usize>) {
        if let Some(i) = index {
            self.adapter
                .set_attribute_for_element_index(i, attr::TABINDEX, "-1");
            self.adapter.set_tab_index_for_list_item_children(i, "-1");
        }
        self.scheduler.cancel_slot(&mut self.focus_out_check);
        self.focus_out_check = Some(self.scheduler.set_timeout(0, ListTask::FocusOutCheck));
    }

    /// Handles a key press inside the list.
    pub fn handle_keydown(&mut self, event: KeyEvent, target: ListKeyTarget) -> EventEffects {
        let mut effects = EventEffects::empty();
        let key = event.key;

        if self.adapter.is_root_focused() {
            if matches!(key, Key::ArrowUp | Key::End) {
                effects |= EventEffects::PREVENT_DEFAULT;
                self.focus_last_element();
            } else if matches!(key, Key::ArrowDown | Key::Home) {
                effects |= EventEffects::PREVENT_DEFAULT;
                self.focus_first_element();
            }
            if self.config.has_typeahead {
                effects |= self.typeahead_keydown(event, None, target.is_list_item);
            }
            return effects;
        }

        let Some(current) = self.adapter.focused_element_index().or(target.item_index) else {
            return effects;
        };

        let vertical = self.config.orientation == Orientation::Vertical;
        let next_key = if vertical { Key::ArrowDown } else { Key::ArrowRight };
        let prev_key = if vertical { Key::ArrowUp } else { Key::ArrowLeft };
        let is_select_all = matches!(key, Key::Character('a' | 'A'))
            && event.modifiers.contains(Modifiers::CTRL)
            && self.mode == ListMode::Checkbox;

        if key == next_key {
            effects |= EventEffects::PREVENT_DEFAULT;
            self.focus_next_element(current);
        } else if key == prev_key {
            effects |= EventEffects::PREVENT_DEFAULT;
            self.focus_prev_element(current);
        } else if key == Key::Home {
            effects |= EventEffects::PREVENT_DEFAULT;
            self.focus_first_element();
        } else if key == Key::End {
            effects |= EventEffects::PREVENT_DEFAULT;
            self.focus_last_element();
        } else if is_select_all {
            effects |= EventEffects::PREVENT_DEFAULT;
            self.toggle_all();
        } else if matches!(key, Key::Enter | Key::Space) && target.is_list_item {
            // Links fire their own click for Enter.
            if target.is_anchor && key == Key::Enter {
                return effects;
            }
            effects |= EventEffects::PREVENT_DEFAULT;
            if self.is_item_disabled(current) {
                return effects;
            }
            if !self.is_typeahead_in_progress() {
                if self.mode.is_selectable() {
                    self.set_selected_index_on_action(current, true);
                }
                self.adapter.notify_action(current);
            }
        }

        if self.config.has_typeahead {
            let focused = self.focused_item_index;
            effects |= self.typeahead_keydown(event, focused, target.is_list_item);
        }
        effects
    }

    fn typeahead_keydown(
        &mut self,
        event: KeyEvent,
        focused: Option<usize>,
        is_list_item: bool,
    ) -> EventEffects {
        let key = event.key;
        if event.has_command_modifier()
            || key.is_arrow()
            || matches!(key, Key::Home | Key::End | Key::Enter)
        {
            return EventEffects::empty();
        }
        match key {
            Key::Character(c) => {
                self.match_item(c, focused, false);
                EventEffects::PREVENT_DEFAULT
            }
            Key::Space if is_list_item => {
                if self.typeahead.is_typing_in_progress(self.scheduler.now()) {
                    self.match_item(' ', focused, false);
                }
                EventEffects::PREVENT_DEFAULT
            }
            _ => EventEffects::empty(),
        }
    }

    /// Handles a click on the item at `index`.
    ///
    /// `toggle_checkbox` is `false` when the click landed on the checkbox itself, which
    /// has already toggled.
    pub fn handle_click(&mut self, index: Option<usize>, toggle_checkbox: bool) {
        let Some(index) = index else {
            return;
        };
        if self.is_item_disabled(index) {
            return;
        }
        if self.mode.is_selectable() {
            self.set_selected_index_on_action(index, toggle_checkbox);
        }
        self.adapter.notify_action(index);
    }

    /// Focuses the item after `index`, wrapping if configured.
    ///
    /// Returns the newly focused index, `index` itself at an unwrapped boundary, or
    /// `None` for an empty list.
    pub fn focus_next_element(&mut self, index: usize) -> Option<usize> {
        let count = self.adapter.list_item_count();
        if count == 0 {
            return None;
        }
        let mut next = index + 1;
        if next >= count {
            if self.config.wrap_focus {
                next = 0;
            } else {
                return Some(index);
            }
        }
        self.focus_item_at_index(next);
        Some(next)
    }

    /// Focuses the item before `index`, wrapping if configured.
    pub fn focus_prev_element(&mut self, index: usize) -> Option<usize> {
        let count = self.adapter.list_item_count();
        if count == 0 {
            return None;
        }
        let prev = match index.checked_sub(1) {
            Some(prev) => prev,
            None if self.config.wrap_focus => count - 1,
            None => return Some(index),
        };
        self.focus_item_at_index(prev);
        Some(prev)
    }

    /// Focuses the first item.
    pub fn focus_first_element(&mut self) -> Option<usize> {
        if self.adapter.list_item_count() == 0 {
            return None;
        }
        self.focus_item_at_index(0);
        Some(0)
    }

    /// Focuses the last item.
    pub fn focus_last_element(&mut self) -> Option<usize> {
        let last = self.adapter.list_item_count().checked_sub(1)?;
        self.focus_item_at_index(last);
        Some(last)
    }

    /// Focuses the first selected item, or the last focused one, or the first.
    pub fn focus_initial_element(&mut self) -> Option<usize> {
        if self.adapter.list_item_count() == 0 {
            return None;
        }
        let index = self.first_selected_or_focused_item_index();
        self.focus_item_at_index(index);
        Some(index)
    }

    /// Enables or disables the item at `index`. Out-of-range indices are ignored.
    pub fn set_enabled(&mut self, index: usize, enabled: bool) {
        if !self.is_index_in_range(index) {
            return;
        }
        if enabled {
            self.adapter
                .remove_class_for_element_index(index, ListClass::Disabled);
        } else {
            self.adapter
                .add_class_for_element_index(index, ListClass::Disabled);
        }
        self.adapter
            .set_attribute_for_element_index(index, attr::ARIA_DISABLED, bool_str(!enabled));
    }

    /// Adds `next_char` to the typed prefix and focuses the matching item.
    ///
    /// `starting_index` is the item a fresh prefix searches after; it defaults to the
    /// focused item. With `skip_focus` the match is returned without moving focus.
    pub fn typeahead_match_item(
        &mut self,
        next_char: char,
        starting_index: Option<usize>,
        skip_focus: bool,
    ) -> Option<usize> {
        let focused = starting_index.or(self.focused_item_index);
        self.match_item(next_char, focused, skip_focus)
    }

    fn match_item(
        &mut self,
        next_char: char,
        focused: Option<usize>,
        skip_focus: bool,
    ) -> Option<usize> {
        let now = self.scheduler.now();
        let adapter = &self.adapter;
        let hit = self
            .typeahead
            .match_item(&self.sorted_index, next_char, focused, now, |i| {
                adapter.list_item_at_index_has_class(i, ListClass::Disabled)
            });
        match hit {
            Some(i) if !skip_focus => self.focus_item_at_index(i),
            _ => {}
        }
        hit
    }

    fn set_single_selection_at(&mut self, index: Option<usize>) {
        let current = self.selected.single();
        if current == index {
            return;
        }

        let class = if self.config.use_activated_class {
            ListClass::Activated
        } else {
            ListClass::Selected
        };
        if let Some(prev) = current {
            self.adapter.remove_class_for_element_index(prev, class);
        }
        self.set_aria_for_single_selection(current, index);
        self.set_tabindex_at_index(index);
        if let Some(i) = index {
            self.adapter.add_class_for_element_index(i, class);
        }

        debug_event!(message = "list.select", from = ?current, to = ?index);
        self.selected = index.map_or(ListIndex::Unset, ListIndex::Single);
    }

    fn set_aria_for_single_selection(&mut self, current: Option<usize>, index: Option<usize>) {
        if self.selection_aria.is_none() {
            if let Some(i) = index {
                self.selection_aria = Some(
                    match self
                        .adapter
                        .attribute_for_element_index(i, attr::ARIA_CURRENT)
                    {
                        Some(value) => SelectionAria::Current(value),
                        None => SelectionAria::Selected,
                    },
                );
            }
        }

        let (name, value) = match &self.selection_aria {
            Some(SelectionAria::Current(value)) => (attr::ARIA_CURRENT, value.as_str()),
            _ => (attr::ARIA_SELECTED, "true"),
        };
        if let Some(prev) = current {
            self.adapter
                .set_attribute_for_element_index(prev, name, "false");
        }
        if let Some(i) = index {
            self.adapter.set_attribute_for_element_index(i, name, value);
        }
    }

    fn selection_attribute(&self) -> &'static str {
        if self.config.use_selected_attribute {
            attr::ARIA_SELECTED
        } else {
            attr::ARIA_CHECKED
        }
    }

    fn set_radio_at(&mut self, index: usize) {
        let name = self.selection_attribute();
        self.adapter.set_checked_checkbox_or_radio_at_index(index, true);
        if let Some(prev) = self.selected.single() {
            self.adapter
                .set_attribute_for_element_index(prev, name, "false");
        }
        self.adapter
            .set_attribute_for_element_index(index, name, "true");
        self.selected = ListIndex::Single(index);
    }

    fn set_checkbox_at(&mut self, indices: Vec<usize>) {
        let name = self.selection_attribute();
        for i in 0..self.adapter.list_item_count() {
            let checked = indices.contains(&i);
            self.adapter.set_checked_checkbox_or_radio_at_index(i, checked);
            self.adapter
                .set_attribute_for_element_index(i, name, bool_str(checked));
        }
        self.selected = ListIndex::Multiple(indices);
    }

    fn set_tabindex_at_index(&mut self, index: Option<usize>) {
        match self.focused_item_index {
            // Nothing focused yet: the first item holds the default tab stop.
            None if index != Some(0) => {
                self.adapter
                    .set_attribute_for_element_index(0, attr::TABINDEX, "-1");
            }
            Some(focused) if Some(focused) != index => {
                self.adapter
                    .set_attribute_for_element_index(focused, attr::TABINDEX, "-1");
            }
            _ => {}
        }

        if let ListIndex::Single(selected) = self.selected {
            if Some(selected) != index {
                self.adapter
                    .set_attribute_for_element_index(selected, attr::TABINDEX, "-1");
            }
        }

        if let Some(i) = index {
            self.adapter
                .set_attribute_for_element_index(i, attr::TABINDEX, "0");
        }
    }

    fn first_selected_or_focused_item_index(&self) -> usize {
        let mut target = self.focused_item_index.unwrap_or(0);
        if self.mode.is_selectable() {
            match &self.selected {
                ListIndex::Single(i) => target = *i,
                ListIndex::Multiple(indices) => {
                    if let Some(min) = indices.iter().copied().min() {
                        target = min;
                    }
                }
                ListIndex::Unset => {}
            }
        }
        target
    }

    fn set_selected_index_on_action(&mut self, index: usize, toggle_checkbox: bool) {
        match self.mode {
            ListMode::Checkbox => self.toggle_checkbox_at(index, toggle_checkbox),
            _ if !self.is_index_in_range(index) => {}
            ListMode::Radio => self.set_radio_at(index),
            _ => self.set_single_selection_at(Some(index)),
        }
    }

    fn toggle_checkbox_at(&mut self, index: usize, toggle_checkbox: bool) {
        let name = self.selection_attribute();
        let mut checked = self.adapter.is_checkbox_checked_at_index(index);
        if toggle_checkbox {
            checked = !checked;
            self.adapter
                .set_checked_checkbox_or_radio_at_index(index, checked);
        }
        self.adapter
            .set_attribute_for_element_index(index, name, bool_str(checked));

        let mut indices = match mem::take(&mut self.selected) {
            ListIndex::Multiple(indices) => indices,
            _ => Vec::new(),
        };
        if checked {
            indices.push(index);
        } else {
            indices.retain(|&i| i != index);
        }
        self.selected = ListIndex::Multiple(indices);
    }

    fn toggle_all(&mut self) {
        let current = match &self.selected {
            ListIndex::Multiple(indices) => indices.clone(),
            _ => Vec::new(),
        };
        let count = self.adapter.list_item_count();
        if current.len() == count {
            self.set_checkbox_at(Vec::new());
        } else {
            let all = (0..count)
                .filter(|i| !self.is_item_disabled(*i) || current.contains(i))
                .collect();
            self.set_checkbox_at(all);
        }
    }

    fn focus_item_at_index(&mut self, index: usize) {
        self.adapter.focus_item_at_index(index);
        self.focused_item_index = Some(index);
    }

    fn is_item_disabled(&self, index: usize) -> bool {
        self.adapter
            .list_item_at_index_has_class(index, ListClass::Disabled)
    }

    fn is_index_in_range(&self, index: usize) -> bool {
        index < self.adapter.list_item_count()
    }

    fn run(&mut self, task: ListTask) {
        match task {
            ListTask::FocusOutCheck => {
                self.focus_out_check = None;
                if !self.adapter.is_focus_inside_list() {
                    let target = self.first_selected_or_focused_item_index();
                    self.set_tabindex_at_index(Some(target));
                }
            }
        }
    }
}

impl<A: ListAdapter> Foundation for ListFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn destroy(&mut self) {
        self.scheduler.clear();
        self.focus_out_check = None;
    }

    fn advance(&mut self, now: Millis) {
        self.scheduler.advance_to(now);
        while let Some((_, task)) = self.scheduler.pop_due() {
            self.run(task);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::{format, string::String, vec::Vec};

    use super::*;
    use crate::testing::CallLog;

    #[derive(Debug, Default)]
    struct FakeList {
        texts: Vec<&'static str>,
        classes: BTreeMap<(usize, &'static str), ()>,
        attrs: BTreeMap<(usize, String), String>,
        checked: Vec<bool>,
        checkbox: bool,
        root_focused: bool,
        focus_inside: bool,
        focused: Option<usize>,
        log: CallLog,
    }

    impl FakeList {
        fn with_items(texts: &[&'static str]) -> Self {
            Self {
                texts: texts.to_vec(),
                checked: vec![false; texts.len()],
                ..Self::default()
            }
        }

        fn attr(&self, index: usize, name: &str) -> Option<&str> {
            self.attrs
                .get(&(index, name.to_string()))
                .map(String::as_str)
        }
    }

    impl ListAdapter for FakeList {
        fn list_item_count(&self) -> usize {
            self.texts.len()
        }

        fn focused_element_index(&self) -> Option<usize> {
            self.focused
        }

        fn attribute_for_element_index(&self, index: usize, name: &str) -> Option<String> {
            self.attr(index, name).map(ToString::to_string)
        }

        fn set_attribute_for_element_index(&mut self, index: usize, name: &str, value: &str) {
            self.log.push(format!("attr {index} {name}={value}"));
            self.attrs
                .insert((index, name.to_string()), value.to_string());
        }

        fn add_class_for_element_index(&mut self, index: usize, class: ListClass) {
            self.log.push(format!("add {index} {class}"));
            self.classes.insert((index, class.as_str()), ());
        }

        fn remove_class_for_element_index(&mut self, index: usize, class: ListClass) {
            self.log.push(format!("remove {index} {class}"));
            self.classes.remove(&(index, class.as_str()));
        }

        fn list_item_at_index_has_class(&self, index: usize, class: ListClass) -> bool {
            self.classes.contains_key(&(index, class.as_str()))
        }

        fn focus_item_at_index(&mut self, index: usize) {
            self.log.push(format!("focus {index}"));
            self.focused = Some(index);
        }

        fn has_checkbox_at_index(&self, _index: usize) -> bool {
            self.checkbox
        }

        fn is_checkbox_checked_at_index(&self, index: usize) -> bool {
            self.checked[index]
        }

        fn set_checked_checkbox_or_radio_at_index(&mut self, index: usize, checked: bool) {
            self.checked[index] = checked;
        }

        fn is_root_focused(&self) -> bool {
            self.root_focused
        }

        fn is_focus_inside_list(&self) -> bool {
            self.focus_inside
        }

        fn primary_text_at_index(&self, index: usize) -> String {
            self.texts[index].to_string()
        }

        fn notify_action(&mut self, index: usize) {
            self.log.push(format!("action {index}"));
        }
    }

    fn list(texts: &[&'static str], mode: ListMode) -> ListFoundation<FakeList> {
        let mut list = ListFoundation::new(FakeList::with_items(texts));
        list.set_mode(mode);
        list
    }

    const FRUITS: &[&str] = &["Apple", "Banana", "Avocado"];

    #[test]
    fn checkbox_list_rejects_single_index() {
        let mut list = list(FRUITS, ListMode::Checkbox);
        assert_eq!(
            list.set_selected_index(ListIndex::Single(1)),
            Err(FoundationError::SelectionShape {
                mode: ListMode::Checkbox
            })
        );
        assert!(list.set_selected_index(ListIndex::Unset).is_err());
        assert!(list.set_selected_index(ListIndex::Multiple(vec![0, 2])).is_ok());
        assert_eq!(list.adapter().checked, [true, false, true]);
        assert_eq!(list.adapter().attr(1, attr::ARIA_CHECKED), Some("false"));
    }

    #[test]
    fn single_list_rejects_multiple_indices() {
        for mode in [ListMode::Plain, ListMode::SingleSelection, ListMode::Radio] {
            let mut list = list(FRUITS, mode);
            assert_eq!(
                list.set_selected_index(ListIndex::Multiple(vec![0])),
                Err(FoundationError::SelectionShape { mode })
            );
        }
    }

    #[test]
    fn selecting_moves_class_and_aria() {
        let mut list = list(FRUITS, ListMode::SingleSelection);
        list.set_selected_index(ListIndex::Single(0)).unwrap();
        list.adapter_mut().log.clear();
        list.set_selected_index(ListIndex::Single(2)).unwrap();

        let log = &list.adapter().log;
        assert!(log.ordered("remove 0 mdc-list-item--selected", "add 2 mdc-list-item--selected"));
        assert!(log.contains("attr 0 aria-selected=false"));
        assert!(log.contains("attr 2 aria-selected=true"));
        assert!(log.contains("attr 2 tabindex=0"));
        assert_eq!(list.selected_index(), &ListIndex::Single(2));
    }

    #[test]
    fn reselecting_same_index_is_a_no_op() {
        let mut list = list(FRUITS, ListMode::SingleSelection);
        list.set_selected_index(ListIndex::Single(1)).unwrap();
        list.adapter_mut().log.clear();
        list.set_selected_index(ListIndex::Single(1)).unwrap();
        assert!(list.adapter().log.calls().is_empty());
    }

    #[test]
    fn aria_current_is_detected_once() {
        let mut fake = FakeList::with_items(FRUITS);
        fake.attrs
            .insert((0, attr::ARIA_CURRENT.to_string()), "page".to_string());
        let mut list = ListFoundation::new(fake);
        list.set_mode(ListMode::SingleSelection);

        list.set_selected_index(ListIndex::Single(0)).unwrap();
        list.set_selected_index(ListIndex::Single(1)).unwrap();
        assert_eq!(list.adapter().attr(0, attr::ARIA_CURRENT), Some("false"));
        assert_eq!(list.adapter().attr(1, attr::ARIA_CURRENT), Some("page"));
        assert_eq!(list.adapter().attr(1, attr::ARIA_SELECTED), None);
    }

    #[test]
    fn out_of_range_and_unset_rules() {
        let mut list = list(FRUITS, ListMode::SingleSelection);
        assert!(list.set_selected_index(ListIndex::Single(9)).is_ok());
        assert!(list.adapter().log.calls().is_empty());

        list.set_selected_index(ListIndex::Single(1)).unwrap();
        list.set_selected_index(ListIndex::Unset).unwrap();
        assert_eq!(list.selected_index(), &ListIndex::Unset);
        assert!(list.adapter().log.contains("remove 1 mdc-list-item--selected"));

        let mut radio = self::list(FRUITS, ListMode::Radio);
        radio.set_selected_index(ListIndex::Single(1)).unwrap();
        radio.set_selected_index(ListIndex::Unset).unwrap();
        assert_eq!(radio.selected_index(), &ListIndex::Single(1));
    }

    #[test]
    fn layout_detects_mode_from_first_item() {
        let mut fake = FakeList::with_items(FRUITS);
        fake.checkbox = true;
        let mut list = ListFoundation::new(fake);
        list.layout();
        assert_eq!(list.mode(), ListMode::Checkbox);

        let mut fake = FakeList::with_items(FRUITS);
        fake.classes.insert((2, ListClass::Activated.as_str()), ());
        let mut list = ListFoundation::new(fake);
        list.layout();
        assert_eq!(list.mode(), ListMode::SingleSelection);
        assert_eq!(list.selected_index(), &ListIndex::Single(2));
        assert!(list.config().use_activated_class);

        let mut empty = ListFoundation::new(FakeList::default());
        empty.layout();
        assert_eq!(empty.mode(), ListMode::Plain);
    }

    #[test]
    fn arrows_clamp_or_wrap() {
        let mut list = list(FRUITS, ListMode::Plain);
        list.adapter_mut().focused = Some(2);
        let fx = list.handle_keydown(KeyEvent::new(Key::ArrowDown), ListKeyTarget::item(2));
        assert!(fx.contains(EventEffects::PREVENT_DEFAULT));
        assert_eq!(list.adapter().focused, Some(2));
        assert!(!list.adapter().log.contains("focus 0"));

        list.set_wrap_focus(true);
        list.handle_keydown(KeyEvent::new(Key::ArrowDown), ListKeyTarget::item(2));
        assert_eq!(list.adapter().focused, Some(0));
        list.handle_keydown(KeyEvent::new(Key::ArrowUp), ListKeyTarget::item(0));
        assert_eq!(list.adapter().focused, Some(2));
    }

    #[test]
    fn horizontal_lists_use_left_and_right() {
        let mut list = list(FRUITS, ListMode::Plain);
        list.set_orientation(Orientation::Horizontal);
        list.adapter_mut().focused = Some(0);
        let fx = list.handle_keydown(KeyEvent::new(Key::ArrowDown), ListKeyTarget::item(0));
        assert!(fx.is_empty());
        list.handle_keydown(KeyEvent::new(Key::ArrowRight), ListKeyTarget::item(0));
        assert_eq!(list.adapter().focused, Some(1));
    }

    #[test]
    fn root_focus_jumps_to_ends() {
        let mut list = list(FRUITS, ListMode::Plain);
        list.adapter_mut().root_focused = true;
        list.handle_keydown(KeyEvent::new(Key::ArrowUp), ListKeyTarget::default());
        assert_eq!(list.focused_item_index(), Some(2));
        list.handle_keydown(KeyEvent::new(Key::Home), ListKeyTarget::default());
        assert_eq!(list.focused_item_index(), Some(0));
    }

    #[test]
    fn enter_selects_and_notifies_except_on_links_and_disabled() {
        let mut list = list(FRUITS, ListMode::SingleSelection);
        list.adapter_mut().focused = Some(1);
        list.handle_keydown(KeyEvent::new(Key::Enter), ListKeyTarget::item(1));
        assert_eq!(list.selected_index(), &ListIndex::Single(1));
        assert!(list.adapter().log.contains("action 1"));

        list.adapter_mut().log.clear();
        list.adapter_mut().focused = Some(2);
        let link = ListKeyTarget {
            is_anchor: true,
            ..ListKeyTarget::item(2)
        };
        let fx = list.handle_keydown(KeyEvent::new(Key::Enter), link);
        assert!(fx.is_empty());
        assert!(!list.adapter().log.contains("action 2"));

        list.set_enabled(2, false);
        let fx = list.handle_keydown(KeyEvent::new(Key::Space), ListKeyTarget::item(2));
        assert!(fx.contains(EventEffects::PREVENT_DEFAULT));
        assert!(!list.adapter().log.contains("action 2"));
        assert_eq!(list.selected_index(), &ListIndex::Single(1));
    }

    #[test]
    fn ctrl_a_toggles_all_checkboxes() {
        let mut list = list(FRUITS, ListMode::Checkbox);
        list.adapter_mut().focused = Some(0);
        let ctrl_a = KeyEvent::with_modifiers(Key::Character('a'), Modifiers::CTRL);
        list.handle_keydown(ctrl_a, ListKeyTarget::item(0));
        assert_eq!(list.selected_index(), &ListIndex::Multiple(vec![0, 1, 2]));
        list.handle_keydown(ctrl_a, ListKeyTarget::item(0));
        assert_eq!(list.selected_index(), &ListIndex::Multiple(vec![]));

        list.set_enabled(1, false);
        list.handle_keydown(ctrl_a, ListKeyTarget::item(0));
        assert_eq!(list.selected_index(), &ListIndex::Multiple(vec![0, 2]));
    }

    #[test]
    fn click_toggles_checkbox() {
        let mut list = list(FRUITS, ListMode::Checkbox);
        list.handle_click(Some(1), true);
        assert_eq!(list.selected_index(), &ListIndex::Multiple(vec![1]));
        assert!(list.adapter().checked[1]);
        list.handle_click(Some(1), true);
        assert_eq!(list.selected_index(), &ListIndex::Multiple(vec![]));
        list.handle_click(None, true);
        assert!(!list.adapter().log.contains("action 0"));
    }

    #[test]
    fn typeahead_narrows_to_two_character_prefix() {
        let mut list = list(FRUITS, ListMode::Plain);
        list.set_has_typeahead(true);
        list.handle_focus_in(Some(0));
        list.adapter_mut().focused = Some(0);

        list.advance(1_000);
        let fx = list.handle_keydown(KeyEvent::new(Key::Character('a')), ListKeyTarget::item(0));
        assert!(fx.contains(EventEffects::PREVENT_DEFAULT));
        list.advance(1_100);
        list.handle_keydown(KeyEvent::new(Key::Character('v')), ListKeyTarget::item(2));
        assert_eq!(list.focused_item_index(), Some(2));
        assert!(list.is_typeahead_in_progress());

        list.advance(2_000);
        assert!(!list.is_typeahead_in_progress());
        assert_eq!(list.typeahead_match_item('b', None, true), Some(1));
        assert_eq!(list.focused_item_index(), Some(2));
    }

    #[test]
    fn focus_out_rechecks_on_next_turn() {
        let mut list = list(FRUITS, ListMode::SingleSelection);
        list.set_selected_index(ListIndex::Single(1)).unwrap();
        list.handle_focus_in(Some(2));
        list.handle_focus_out(Some(2));
        list.adapter_mut().log.clear();

        list.advance(0);
        assert!(list.adapter().log.contains("attr 1 tabindex=0"));

        list.adapter_mut().focus_inside = true;
        list.adapter_mut().log.clear();
        list.handle_focus_out(Some(2));
        list.advance(5);
        assert!(!list.adapter().log.contains("attr 1 tabindex=0"));
    }

    #[test]
    fn focus_helpers_on_empty_list() {
        let mut list = ListFoundation::new(FakeList::default());
        assert_eq!(list.focus_first_element(), None);
        assert_eq!(list.focus_last_element(), None);
        assert_eq!(list.focus_next_element(0), None);
        assert_eq!(list.focus_initial_element(), None);
    }
}
