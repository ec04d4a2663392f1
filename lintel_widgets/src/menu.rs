// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu: a list of actions shown in a menu surface.
//!
//! The menu foundation only coordinates. Its binding owns a
//! [`MenuSurfaceFoundation`](crate::menu_surface::MenuSurfaceFoundation) and a
//! [`ListFoundation`](crate::list::ListFoundation) and routes the adapter calls below to
//! them. Activating an item closes the surface first and applies selection-group state
//! once the close animation has finished, so the checkmark does not flicker mid-close.

use lintel_schedule::{Millis, Scheduler, TaskId};

use crate::attr::{self, bool_str};
use crate::event::{EventEffects, Key, KeyEvent};
use crate::list::ListClass;
use crate::menu_surface::TRANSITION_CLOSE_DURATION;
use crate::{Foundation, FoundationError, Result};

/// Item attribute that keeps focus where it is when the item closes the menu.
pub const SKIP_RESTORE_FOCUS: &str = "data-menu-item-skip-restore-focus";

class_names! {
    /// Classes applied to menu items.
    pub enum MenuClass {
        /// The checked item of a selection group.
        SelectedItem => "mdc-menu-item--selected",
        /// A group of mutually exclusive items.
        SelectionGroup => "mdc-menu__selection-group",
    }
}

/// What receives focus once the menu has opened.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefaultFocusState {
    /// Leave focus alone.
    None,
    /// The list container.
    #[default]
    ListRoot,
    /// The first item.
    FirstItem,
    /// The last item.
    LastItem,
}

/// Payload of [`MenuAdapter::notify_selected`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MenuSelectedEvent {
    /// Index of the activated item.
    pub index: usize,
}

/// Environment operations a menu needs.
pub trait MenuAdapter {
    /// Number of items.
    fn menu_item_count(&self) -> usize {
        0
    }

    /// Adds a class to the item at `index`.
    fn add_class_to_element_at_index(&mut self, index: usize, class: &str) {
        let _ = (index, class);
    }

    /// Removes a class from the item at `index`.
    fn remove_class_from_element_at_index(&mut self, index: usize, class: &str) {
        let _ = (index, class);
    }

    /// Sets an attribute on the item at `index`.
    fn add_attribute_to_element_at_index(&mut self, index: usize, name: &str, value: &str) {
        let _ = (index, name, value);
    }

    /// Removes an attribute from the item at `index`.
    fn remove_attribute_from_element_at_index(&mut self, index: usize, name: &str) {
        let _ = (index, name);
    }

    /// Returns `true` if the item at `index` has the given attribute set to `"true"`.
    fn attribute_is_true_at_index(&self, index: usize, name: &str) -> bool {
        let _ = (index, name);
        false
    }

    /// Returns `true` if the item at `index` belongs to a selection group.
    fn is_selectable_item_at_index(&self, index: usize) -> bool {
        let _ = index;
        false
    }

    /// Index of the currently selected item in the same group as `index`.
    fn selected_sibling_of_item_at_index(&self, index: usize) -> Option<usize> {
        let _ = index;
        None
    }

    /// Stable identity of the item at `index`, if the host tracks one.
    ///
    /// Lets a selection deferred past the close animation follow its item when items
    /// are inserted or removed in the meantime.
    fn item_key_at_index(&self, index: usize) -> Option<u64> {
        let _ = index;
        None
    }

    /// Current index of the item with `key`, or `None` once it is gone.
    fn index_of_item_key(&self, key: u64) -> Option<usize> {
        let _ = key;
        None
    }

    /// Closes the menu surface.
    fn close_surface(&mut self, skip_restore_focus: bool) {
        let _ = skip_restore_focus;
    }

    /// Focuses the item at `index`.
    fn focus_item_at_index(&mut self, index: usize) {
        let _ = index;
    }

    /// Focuses the list container.
    fn focus_list_root(&mut self) {}

    /// An item was activated.
    fn notify_selected(&mut self, event: MenuSelectedEvent) {
        let _ = event;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum MenuTask {
    ApplySelection { index: usize, key: Option<u64> },
}

/// Item activation, selection groups and initial focus for a menu.
#[derive(Debug)]
pub struct MenuFoundation<A> {
    adapter: A,
    default_focus_state: DefaultFocusState,
    close_animation_end: Option<TaskId>,
    scheduler: Scheduler<MenuTask>,
}

impl<A: MenuAdapter> MenuFoundation<A> {
    /// Creates a menu that focuses its list root when opened.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            default_focus_state: DefaultFocusState::default(),
            close_animation_end: None,
            scheduler: Scheduler::new(),
        }
    }

    /// What receives focus once the menu has opened.
    #[must_use]
    pub fn default_focus_state(&self) -> DefaultFocusState {
        self.default_focus_state
    }

    /// Sets what receives focus once the menu has opened.
    pub fn set_default_focus_state(&mut self, state: DefaultFocusState) {
        self.default_focus_state = state;
    }

    /// Tab closes the menu and lets focus move on.
    pub fn handle_keydown(&mut self, event: KeyEvent) -> EventEffects {
        if event.key == Key::Tab {
            self.adapter.close_surface(true);
        }
        EventEffects::empty()
    }

    /// An item was activated by click or keyboard.
    pub fn handle_item_action(&mut self, index: usize) {
        if index >= self.adapter.menu_item_count() {
            return;
        }
        self.adapter.notify_selected(MenuSelectedEvent { index });
        let skip_restore_focus = self
            .adapter
            .attribute_is_true_at_index(index, SKIP_RESTORE_FOCUS);
        self.adapter.close_surface(skip_restore_focus);

        self.scheduler.cancel_slot(&mut self.close_animation_end);
        let key = self.adapter.item_key_at_index(index);
        self.close_animation_end = Some(self.scheduler.set_timeout(
            TRANSITION_CLOSE_DURATION,
            MenuTask::ApplySelection { index, key },
        ));
    }

    /// The surface finished opening.
    pub fn handle_menu_surface_opened(&mut self) {
        match self.default_focus_state {
            DefaultFocusState::None => {}
            DefaultFocusState::ListRoot => self.adapter.focus_list_root(),
            DefaultFocusState::FirstItem => {
                if self.adapter.menu_item_count() > 0 {
                    self.adapter.focus_item_at_index(0);
                }
            }
            DefaultFocusState::LastItem => {
                if let Some(last) = self.adapter.menu_item_count().checked_sub(1) {
                    self.adapter.focus_item_at_index(last);
                }
            }
        }
    }

    /// Checks the item at `index` within its selection group.
    pub fn set_selected_index(&mut self, index: usize) -> Result<()> {
        self.validate_index(index)?;
        if !self.adapter.is_selectable_item_at_index(index) {
            return Err(FoundationError::NotSelectable { index });
        }

        if let Some(prev) = self.adapter.selected_sibling_of_item_at_index(index) {
            self.adapter
                .remove_attribute_from_element_at_index(prev, attr::ARIA_CHECKED);
            self.adapter
                .remove_class_from_element_at_index(prev, MenuClass::SelectedItem.as_str());
        }
        self.adapter
            .add_class_to_element_at_index(index, MenuClass::SelectedItem.as_str());
        self.adapter
            .add_attribute_to_element_at_index(index, attr::ARIA_CHECKED, "true");
        Ok(())
    }

    /// Enables or disables the item at `index`.
    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> Result<()> {
        self.validate_index(index)?;
        let disabled = ListClass::Disabled.as_str();
        if enabled {
            self.adapter.remove_class_from_element_at_index(index, disabled);
        } else {
            self.adapter.add_class_to_element_at_index(index, disabled);
        }
        self.adapter
            .add_attribute_to_element_at_index(index, attr::ARIA_DISABLED, bool_str(!enabled));
        Ok(())
    }

    fn validate_index(&self, index: usize) -> Result<()> {
        let count = self.adapter.menu_item_count();
        if index >= count {
            warn_event!(message = "menu.index_out_of_range", index, count);
            return Err(FoundationError::IndexOutOfRange { index, count });
        }
        Ok(())
    }

    fn run(&mut self, task: MenuTask) {
        match task {
            MenuTask::ApplySelection { index, key } => {
                self.close_animation_end = None;
                let index = match key {
                    Some(key) => match self.adapter.index_of_item_key(key) {
                        Some(index) => index,
                        None => {
                            debug_event!(message = "menu.activated_item_removed", key);
                            return;
                        }
                    },
                    None => index,
                };
                if index >= self.adapter.menu_item_count()
                    || !self.adapter.is_selectable_item_at_index(index)
                {
                    return;
                }
                if self.set_selected_index(index).is_err() {
                    warn_event!(message = "menu.deferred_selection_failed", index);
                }
            }
        }
    }
}

impl<A: MenuAdapter> Foundation for MenuFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn destroy(&mut self) {
        self.scheduler.cancel_slot(&mut self.close_animation_end);
        self.adapter.close_surface(false);
    }

    fn advance(&mut self, now: Millis) {
        self.scheduler.advance_to(now);
        while let Some((_, task)) = self.scheduler.pop_due() {
            self.run(task);
        }
    }
}
