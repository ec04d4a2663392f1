// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select: a form control that picks one value from a menu of options.
//!
//! The select tracks its own selected index and the option values read by
//! [`SelectFoundation::layout_options`]. Its menu is a separate foundation owned by the
//! binding; the select asks the adapter to open and close it and is told when it has
//! opened or closed. The menu's closed state is tracked here rather than read from the
//! menu, because a closing menu already reports itself as not open.
//!
//! While the menu is closed and the anchor is focused, ArrowUp and ArrowDown step the
//! selection before opening the menu, and printable characters select by typeahead
//! without opening it.

use alloc::string::String;
use alloc::vec::Vec;

use lintel_placement::Corner;

use crate::adapter::NoopAdapter;
use crate::attr::{self, bool_str};
use crate::event::{EventEffects, Key, KeyEvent};
use crate::helper_text::{HelperTextAdapter, HelperTextFoundation};
use crate::icon::{IconAdapter, IconFoundation};
use crate::{Foundation, Result};

/// Scale applied to the label width when notching the outline for a floating label.
pub const LABEL_SCALE: f64 = 0.75;

class_names! {
    /// Classes applied to the select root and its options.
    pub enum SelectClass {
        /// The select ignores input.
        Disabled => "mdc-select--disabled",
        /// The anchor holds focus.
        Focused => "mdc-select--focused",
        /// The menu is open.
        Activated => "mdc-select--activated",
        /// A value must be chosen.
        Required => "mdc-select--required",
        /// The select failed validation.
        Invalid => "mdc-select--invalid",
        /// The selected option.
        SelectedItem => "mdc-list-item--selected",
    }
}

/// Environment operations a select needs.
pub trait SelectAdapter {
    /// Adds a class to the root.
    fn add_class(&mut self, class: SelectClass) {
        let _ = class;
    }

    /// Removes a class from the root.
    fn remove_class(&mut self, class: SelectClass) {
        let _ = class;
    }

    /// Returns `true` if the root has `class`.
    fn has_class(&self, class: SelectClass) -> bool {
        let _ = class;
        false
    }

    /// Shows the focused state of the bottom line.
    fn activate_bottom_line(&mut self) {}

    /// Hides the focused state of the bottom line.
    fn deactivate_bottom_line(&mut self) {}

    /// Returns `true` if the select has a floating label.
    fn has_label(&self) -> bool {
        false
    }

    /// Floats or docks the label.
    fn float_label(&mut self, float: bool) {
        let _ = float;
    }

    /// Width of the label at rest.
    fn label_width(&self) -> f64 {
        0.0
    }

    /// Returns `true` if the select has a notched outline.
    fn has_outline(&self) -> bool {
        false
    }

    /// Opens the outline notch to `width`.
    fn notch_outline(&mut self, width: f64) {
        let _ = width;
    }

    /// Closes the outline notch.
    fn close_outline(&mut self) {}

    /// Centers the ripple horizontally at `x`.
    fn set_ripple_center(&mut self, x: f64) {
        let _ = x;
    }

    /// The value changed.
    fn notify_change(&mut self, value: &str) {
        let _ = value;
    }

    /// Shows `text` as the selected text.
    fn set_selected_text(&mut self, text: &str) {
        let _ = text;
    }

    /// Returns `true` if the anchor holds focus.
    fn is_select_anchor_focused(&self) -> bool {
        false
    }

    /// Reads an attribute of the anchor.
    fn select_anchor_attr(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }

    /// Sets an attribute on the anchor.
    fn set_select_anchor_attr(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }

    /// Opens the menu.
    fn open_menu(&mut self) {}

    /// Closes the menu.
    fn close_menu(&mut self) {}

    /// Sets the anchor corner of the menu.
    fn set_menu_anchor_corner(&mut self, corner: Corner) {
        let _ = corner;
    }

    /// Enables or disables focus wrapping in the menu list.
    fn set_menu_wrap_focus(&mut self, wrap: bool) {
        let _ = wrap;
    }

    /// Sets an attribute on the option at `index`.
    fn set_attribute_at_index(&mut self, index: usize, name: &str, value: &str) {
        let _ = (index, name, value);
    }

    /// Removes an attribute from the option at `index`.
    fn remove_attribute_at_index(&mut self, index: usize, name: &str) {
        let _ = (index, name);
    }

    /// Adds a class to the option at `index`.
    fn add_class_at_index(&mut self, index: usize, class: SelectClass) {
        let _ = (index, class);
    }

    /// Removes a class from the option at `index`.
    fn remove_class_at_index(&mut self, index: usize, class: SelectClass) {
        let _ = (index, class);
    }

    /// Focuses the option at `index`.
    fn focus_menu_item_at_index(&mut self, index: usize) {
        let _ = index;
    }

    /// Number of options.
    fn menu_item_count(&self) -> usize {
        0
    }

    /// Values of all options, in order.
    fn menu_item_values(&self) -> Vec<String> {
        Vec::new()
    }

    /// Display text of the option at `index`.
    fn menu_item_text_at_index(&self, index: usize) -> String {
        let _ = index;
        String::new()
    }

    /// Value of the option marked selected in markup, if any.
    fn selected_menu_item_value(&self) -> Option<String> {
        None
    }

    /// Runs typeahead in the menu list, returning the matching option.
    fn typeahead_match_item(&mut self, next_char: char, starting_index: Option<usize>) -> Option<usize> {
        let _ = (next_char, starting_index);
        None
    }

    /// Returns `true` while the menu list's typeahead buffer is live.
    fn is_typeahead_in_progress(&self) -> bool {
        false
    }
}

/// Selection, menu coordination, validation and label styling for a select.
#[derive(Debug)]
pub struct SelectFoundation<A, H = NoopAdapter, I = NoopAdapter> {
    adapter: A,
    helper_text: Option<HelperTextFoundation<H>>,
    leading_icon: Option<IconFoundation<I>>,
    selected_index: Option<usize>,
    menu_item_values: Vec<String>,
    disabled: bool,
    is_menu_open: bool,
}

impl<A: SelectAdapter> SelectFoundation<A> {
    /// Creates a select without helper text or leading icon.
    pub fn new(adapter: A) -> Self {
        Self::with_parts(adapter, None, None)
    }
}

impl<A, H, I> SelectFoundation<A, H, I>
where
    A: SelectAdapter,
    H: HelperTextAdapter,
    I: IconAdapter,
{
    /// Creates a select owning the given helper text and leading icon.
    pub fn with_parts(
        adapter: A,
        helper_text: Option<HelperTextFoundation<H>>,
        leading_icon: Option<IconFoundation<I>>,
    ) -> Self {
        Self {
            adapter,
            helper_text,
            leading_icon,
            selected_index: None,
            menu_item_values: Vec::new(),
            disabled: false,
            is_menu_open: false,
        }
    }

    /// The helper text, if any.
    #[must_use]
    pub fn helper_text(&self) -> Option<&HelperTextFoundation<H>> {
        self.helper_text.as_ref()
    }

    /// The leading icon, if any.
    #[must_use]
    pub fn leading_icon(&self) -> Option<&IconFoundation<I>> {
        self.leading_icon.as_ref()
    }

    /// Index of the selected option.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Returns `true` from the moment the select opens its menu until the menu reports
    /// it has closed.
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.is_menu_open
    }

    /// Selects the option at `index`, or clears the selection with `None`.
    ///
    /// Indices past the last option are ignored.
    pub fn set_selected_index(&mut self, index: Option<usize>, close_menu: bool) {
        match index {
            Some(i) if i >= self.adapter.menu_item_count() => return,
            _ => {}
        }
        self.remove_selection_at(self.selected_index);
        self.set_selection_at(index);
        if close_menu {
            self.adapter.close_menu();
        }
        self.handle_change();
    }

    /// Selects the option with `value`, or clears the selection if none has it.
    pub fn set_value(&mut self, value: &str) {
        let index = self.menu_item_values.iter().position(|v| v == value);
        self.set_selected_index(index, false);
    }

    /// Value of the selected option, or the empty string.
    #[must_use]
    pub fn value(&self) -> &str {
        self.selected_index
            .and_then(|i| self.menu_item_values.get(i))
            .map_or("", String::as_str)
    }

    /// Returns `true` if the select is disabled.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Disables or enables the select. Disabling closes the menu.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.adapter.add_class(SelectClass::Disabled);
            self.adapter.close_menu();
        } else {
            self.adapter.remove_class(SelectClass::Disabled);
        }
        if let Some(icon) = &mut self.leading_icon {
            icon.set_disabled(disabled);
        }
        self.adapter
            .set_select_anchor_attr(attr::TABINDEX, if disabled { "-1" } else { "0" });
        self.adapter
            .set_select_anchor_attr(attr::ARIA_DISABLED, bool_str(disabled));
    }

    /// Replaces the helper text content.
    pub fn set_helper_text_content(&mut self, content: &str) {
        if let Some(helper) = &mut self.helper_text {
            helper.set_content(content);
        }
    }

    /// Sets the leading icon's accessible name.
    pub fn set_leading_icon_aria_label(&mut self, label: &str) {
        if let Some(icon) = &mut self.leading_icon {
            icon.set_aria_label(label);
        }
    }

    /// Replaces the leading icon's content.
    pub fn set_leading_icon_content(&mut self, content: &str) {
        if let Some(icon) = &mut self.leading_icon {
            icon.set_content(content);
        }
    }

    /// Floats the label and notches the outline when there is a value or focus.
    pub fn layout(&mut self) {
        if self.adapter.has_label() {
            let has_value = !self.value().is_empty();
            let focused = self.adapter.has_class(SelectClass::Focused);
            let float = has_value || focused;
            self.notch_outline(float);
            self.adapter.float_label(float);
        }
    }

    /// Re-reads the option values and re-applies the current value to them.
    pub fn layout_options(&mut self) {
        let current = match self.selected_index {
            Some(_) => Some(String::from(self.value())),
            None => self.adapter.selected_menu_item_value(),
        };
        self.menu_item_values = self.adapter.menu_item_values();
        let index = current.and_then(|value| self.menu_item_values.iter().position(|v| *v == value));
        self.set_selection_at(index);
    }

    /// The menu finished opening. Focus moves to the selected option, or the first.
    pub fn handle_menu_opened(&mut self) {
        if self.menu_item_values.is_empty() {
            return;
        }
        self.adapter
            .focus_menu_item_at_index(self.selected_index.unwrap_or(0));
    }

    /// The menu finished closing.
    pub fn handle_menu_closed(&mut self) {
        self.adapter.remove_class(SelectClass::Activated);
        self.is_menu_open = false;
        self.adapter
            .set_select_anchor_attr(attr::ARIA_EXPANDED, "false");
        // Closed without a selection and focus went elsewhere.
        if !self.adapter.is_select_anchor_focused() {
            self.blur();
        }
    }

    /// Re-lays out and reports the current value. Re-validates a required select.
    pub fn handle_change(&mut self) {
        self.layout();
        let value = String::from(self.value());
        debug_event!(message = "select.change", value = value.as_str());
        self.adapter.notify_change(&value);
        if self.adapter.has_class(SelectClass::Required) {
            self.revalidate();
        }
    }

    /// An option was chosen from the menu.
    pub fn handle_menu_item_action(&mut self, index: usize) {
        self.set_selected_index(Some(index), true);
    }

    /// The anchor gained focus.
    pub fn handle_focus(&mut self) {
        self.adapter.add_class(SelectClass::Focused);
        self.layout();
        self.adapter.activate_bottom_line();
        if let Some(helper) = &mut self.helper_text {
            helper.show_to_screen_reader();
        }
    }

    /// The anchor lost focus. Ignored while the menu is open.
    pub fn handle_blur(&mut self) {
        if self.is_menu_open {
            return;
        }
        self.blur();
    }

    /// The anchor was clicked at horizontal offset `normalized_x`.
    pub fn handle_click(&mut self, normalized_x: f64) {
        if self.disabled || self.is_menu_open {
            return;
        }
        self.adapter.set_ripple_center(normalized_x);
        self.open_menu();
    }

    /// A key press on the anchor while the menu is closed.
    pub fn handle_keydown(&mut self, event: KeyEvent) -> EventEffects {
        if self.is_menu_open || !self.adapter.has_class(SelectClass::Focused) {
            return EventEffects::empty();
        }

        let typed = match event.key {
            _ if event.has_command_modifier() => None,
            Key::Character(c) => Some(c),
            Key::Space if self.adapter.is_typeahead_in_progress() => Some(' '),
            _ => None,
        };
        if let Some(c) = typed {
            if let Some(index) = self.adapter.typeahead_match_item(c, self.selected_index) {
                self.set_selected_index(Some(index), false);
            }
            return EventEffects::PREVENT_DEFAULT;
        }

        if !matches!(
            event.key,
            Key::Enter | Key::Space | Key::ArrowUp | Key::ArrowDown
        ) {
            return EventEffects::empty();
        }

        let count = self.adapter.menu_item_count();
        match (event.key, self.selected_index) {
            (Key::ArrowUp, Some(i)) if i > 0 => self.set_selected_index(Some(i - 1), false),
            (Key::ArrowDown, Some(i)) if i + 1 < count => {
                self.set_selected_index(Some(i + 1), false);
            }
            (Key::ArrowDown, None) if count > 0 => self.set_selected_index(Some(0), false),
            _ => {}
        }
        self.open_menu();
        EventEffects::PREVENT_DEFAULT
    }

    /// Opens or closes the outline notch for a floating label.
    pub fn notch_outline(&mut self, open_notch: bool) {
        if !self.adapter.has_outline() {
            return;
        }
        if open_notch {
            let width = self.adapter.label_width() * LABEL_SCALE;
            self.adapter.notch_outline(width);
        } else if !self.adapter.has_class(SelectClass::Focused) {
            self.adapter.close_outline();
        }
    }

    /// Applies validity styling.
    pub fn set_valid(&mut self, valid: bool) {
        self.adapter
            .set_select_anchor_attr(attr::ARIA_INVALID, bool_str(!valid));
        if valid {
            self.adapter.remove_class(SelectClass::Invalid);
        } else {
            self.adapter.add_class(SelectClass::Invalid);
        }
    }

    /// A required, enabled select needs a selection, and a selected first option must
    /// have a non-empty value. Anything else is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.adapter.has_class(SelectClass::Required)
            && !self.adapter.has_class(SelectClass::Disabled)
        {
            return match self.selected_index {
                None => false,
                Some(0) => !self.value().is_empty(),
                Some(_) => true,
            };
        }
        true
    }

    /// Marks the select as required or optional.
    pub fn set_required(&mut self, required: bool) {
        if required {
            self.adapter.add_class(SelectClass::Required);
        } else {
            self.adapter.remove_class(SelectClass::Required);
        }
        self.adapter
            .set_select_anchor_attr(attr::ARIA_REQUIRED, bool_str(required));
    }

    /// Returns `true` if the anchor is marked required.
    #[must_use]
    pub fn required(&self) -> bool {
        self.adapter
            .select_anchor_attr(attr::ARIA_REQUIRED)
            .is_some_and(|v| v == "true")
    }

    fn open_menu(&mut self) {
        self.adapter.add_class(SelectClass::Activated);
        self.adapter.open_menu();
        self.is_menu_open = true;
        self.adapter
            .set_select_anchor_attr(attr::ARIA_EXPANDED, "true");
    }

    fn blur(&mut self) {
        self.adapter.remove_class(SelectClass::Focused);
        self.layout();
        self.adapter.deactivate_bottom_line();
        if self.adapter.has_class(SelectClass::Required) {
            self.revalidate();
        }
    }

    fn revalidate(&mut self) {
        let valid = self.is_valid();
        self.set_valid(valid);
        if let Some(helper) = &mut self.helper_text {
            helper.set_validity(valid);
        }
    }

    fn set_selection_at(&mut self, index: Option<usize>) {
        self.selected_index = index;
        let Some(i) = index else {
            self.adapter.set_selected_text("");
            return;
        };
        let text = self.adapter.menu_item_text_at_index(i);
        self.adapter.set_selected_text(text.trim());
        self.adapter.add_class_at_index(i, SelectClass::SelectedItem);
        self.adapter
            .set_attribute_at_index(i, attr::ARIA_SELECTED, "true");
    }

    fn remove_selection_at(&mut self, index: Option<usize>) {
        if let Some(i) = index {
            self.adapter
                .remove_class_at_index(i, SelectClass::SelectedItem);
            self.adapter.remove_attribute_at_index(i, attr::ARIA_SELECTED);
        }
    }
}

impl<A, H, I> Foundation for SelectFoundation<A, H, I>
where
    A: SelectAdapter,
    H: HelperTextAdapter,
    I: IconAdapter,
{
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn init(&mut self) -> Result<()> {
        if let Some(icon) = &mut self.leading_icon {
            icon.init()?;
        }
        self.adapter.set_menu_anchor_corner(Corner::BOTTOM_START);
        self.adapter.set_menu_wrap_focus(false);
        let disabled = self.adapter.has_class(SelectClass::Disabled);
        self.set_disabled(disabled);
        self.layout_options();
        self.layout();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use alloc::{format, vec};

    use lintel_typeahead::{SortedIndex, TypeaheadState};

    use super::*;
    use crate::testing::CallLog;

    #[derive(Debug, Default)]
    struct FakeSelect {
        values: Vec<&'static str>,
        texts: Vec<&'static str>,
        classes: Vec<SelectClass>,
        preselected: Option<&'static str>,
        anchor_focused: bool,
        typeahead: TypeaheadState,
        now: u64,
        log: CallLog,
    }

    impl FakeSelect {
        fn fruits() -> Self {
            Self {
                values: vec!["", "apple", "banana", "cherry"],
                texts: vec!["", " Apple ", "Banana", "Cherry"],
                ..Self::default()
            }
        }
    }

    impl SelectAdapter for FakeSelect {
        fn add_class(&mut self, class: SelectClass) {
            self.log.push(format!("add {class}"));
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }

        fn remove_class(&mut self, class: SelectClass) {
            self.log.push(format!("remove {class}"));
            self.classes.retain(|c| *c != class);
        }

        fn has_class(&self, class: SelectClass) -> bool {
            self.classes.contains(&class)
        }

        fn notify_change(&mut self, value: &str) {
            self.log.push(format!("change {value}"));
        }

        fn set_selected_text(&mut self, text: &str) {
            self.log.push(format!("text {text}"));
        }

        fn is_select_anchor_focused(&self) -> bool {
            self.anchor_focused
        }

        fn set_select_anchor_attr(&mut self, name: &str, value: &str) {
            self.log.push(format!("anchor {name}={value}"));
        }

        fn open_menu(&mut self) {
            self.log.push("open");
        }

        fn close_menu(&mut self) {
            self.log.push("close");
        }

        fn set_menu_anchor_corner(&mut self, corner: Corner) {
            self.log.push(format!("corner {corner:?}"));
        }

        fn focus_menu_item_at_index(&mut self, index: usize) {
            self.log.push(format!("focus {index}"));
        }

        fn menu_item_count(&self) -> usize {
            self.values.len()
        }

        fn menu_item_values(&self) -> Vec<String> {
            self.values.iter().map(ToString::to_string).collect()
        }

        fn menu_item_text_at_index(&self, index: usize) -> String {
            self.texts[index].to_string()
        }

        fn selected_menu_item_value(&self) -> Option<String> {
            self.preselected.map(ToString::to_string)
        }

        fn typeahead_match_item(&mut self, next_char: char, start: Option<usize>) -> Option<usize> {
            let index = SortedIndex::from_texts(self.texts.iter().copied());
            self.typeahead
                .match_item(&index, next_char, start, self.now, |_| false)
        }

        fn is_typeahead_in_progress(&self) -> bool {
            self.typeahead.is_typing_in_progress(self.now)
        }
    }

    fn select() -> SelectFoundation<FakeSelect> {
        let mut s = SelectFoundation::new(FakeSelect::fruits());
        s.init().unwrap();
        s.adapter_mut().log.clear();
        s
    }

    #[test]
    fn init_anchors_menu_and_adopts_markup_selection() {
        let mut fake = FakeSelect::fruits();
        fake.preselected = Some("banana");
        let mut s = SelectFoundation::new(fake);
        s.init().unwrap();
        assert!(s.adapter().log.contains(&format!("corner {:?}", Corner::BOTTOM_START)));
        assert_eq!(s.selected_index(), Some(2));
        assert_eq!(s.value(), "banana");
    }

    #[test]
    fn value_tracks_selected_index() {
        let mut s = select();
        s.set_selected_index(Some(1), false);
        assert_eq!(s.value(), "apple");
        assert!(s.adapter().log.contains("text Apple"));
        assert!(s.adapter().log.contains("change apple"));

        s.set_value("cherry");
        assert_eq!(s.selected_index(), Some(3));
        s.set_value("durian");
        assert_eq!(s.selected_index(), None);
        assert_eq!(s.value(), "");

        s.set_selected_index(Some(9), true);
        assert!(!s.adapter().log.contains("close"));
    }

    #[test]
    fn menu_item_action_selects_and_closes() {
        let mut s = select();
        s.handle_menu_item_action(2);
        assert!(s.adapter().log.ordered("close", "change banana"));
    }

    #[test]
    fn arrows_step_selection_then_open() {
        let mut s = select();
        s.handle_focus();
        s.set_selected_index(Some(3), false);
        let fx = s.handle_keydown(KeyEvent::new(Key::ArrowDown));
        assert_eq!(s.selected_index(), Some(3));
        assert!(fx.contains(EventEffects::PREVENT_DEFAULT));
        assert!(s.is_menu_open());

        // Keys are ignored until the menu reports it closed.
        s.handle_keydown(KeyEvent::new(Key::ArrowUp));
        assert_eq!(s.selected_index(), Some(3));
        s.adapter_mut().anchor_focused = true;
        s.handle_menu_closed();
        s.handle_keydown(KeyEvent::new(Key::ArrowUp));
        assert_eq!(s.selected_index(), Some(2));
    }

    #[test]
    fn keys_ignored_without_focus() {
        let mut s = select();
        let fx = s.handle_keydown(KeyEvent::new(Key::Enter));
        assert!(fx.is_empty());
        assert!(!s.is_menu_open());
    }

    #[test]
    fn typeahead_selects_without_opening() {
        let mut s = select();
        s.handle_focus();
        let fx = s.handle_keydown(KeyEvent::new(Key::Character('c')));
        assert!(fx.contains(EventEffects::PREVENT_DEFAULT));
        assert_eq!(s.value(), "cherry");
        assert!(!s.is_menu_open());
    }

    #[test]
    fn required_validity() {
        let mut s = select();
        s.set_required(true);
        assert!(!s.is_valid());
        s.set_selected_index(Some(0), false);
        assert!(!s.is_valid());
        assert!(s.adapter().log.contains("anchor aria-invalid=true"));
        s.set_selected_index(Some(1), false);
        assert!(s.is_valid());
        assert!(s.adapter().log.contains("anchor aria-invalid=false"));

        s.set_selected_index(None, false);
        s.set_disabled(true);
        assert!(s.is_valid());
    }

    #[test]
    fn menu_closed_without_focus_blurs() {
        let mut s = select();
        s.handle_focus();
        s.handle_click(0.5);
        s.handle_blur();
        assert!(s.adapter().has_class(SelectClass::Focused));
        s.handle_menu_closed();
        assert!(!s.adapter().has_class(SelectClass::Focused));
        assert!(s.adapter().log.contains("anchor aria-expanded=false"));
    }

    #[test]
    fn opened_menu_focuses_selection() {
        let mut s = select();
        s.handle_menu_opened();
        assert!(s.adapter().log.contains("focus 0"));
        s.set_selected_index(Some(2), false);
        s.handle_menu_opened();
        assert!(s.adapter().log.contains("focus 2"));
    }
}
