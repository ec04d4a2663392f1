// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icon button that toggles between an on and an off state.
//!
//! The state is announced one of two ways. A button carrying both
//! [`DATA_ARIA_LABEL_ON`] and [`DATA_ARIA_LABEL_OFF`] swaps its `aria-label`;
//! any other button reports `aria-pressed`. The two schemes are exclusive.

use alloc::string::String;

use crate::attr::{self, bool_str};
use crate::{Foundation, FoundationError, Result};

/// Attribute holding the accessible name used while the button is on.
pub const DATA_ARIA_LABEL_ON: &str = "data-aria-label-on";
/// Attribute holding the accessible name used while the button is off.
pub const DATA_ARIA_LABEL_OFF: &str = "data-aria-label-off";

class_names! {
    /// Classes applied to the icon button root.
    pub enum IconButtonClass {
        /// The button is on.
        On => "mdc-icon-button--on",
    }
}

/// Payload of [`IconButtonAdapter::notify_change`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IconButtonChangeEvent {
    /// State after the click.
    pub is_on: bool,
}

/// Environment operations a toggle icon button needs.
pub trait IconButtonAdapter {
    /// Adds a class to the root.
    fn add_class(&mut self, class: IconButtonClass) {
        let _ = class;
    }

    /// Removes a class from the root.
    fn remove_class(&mut self, class: IconButtonClass) {
        let _ = class;
    }

    /// Returns `true` if the root has `class`.
    fn has_class(&self, class: IconButtonClass) -> bool {
        let _ = class;
        false
    }

    /// Reads an attribute of the root.
    fn attr(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }

    /// Sets an attribute on the root.
    fn set_attr(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }

    /// The user toggled the button.
    fn notify_change(&mut self, event: IconButtonChangeEvent) {
        let _ = event;
    }
}

/// On/off state of a toggle icon button.
#[derive(Debug)]
pub struct IconButtonFoundation<A> {
    adapter: A,
    has_toggled_aria_label: bool,
}

impl<A: IconButtonAdapter> IconButtonFoundation<A> {
    /// Creates the foundation. Call [`Foundation::init`] before use.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            has_toggled_aria_label: false,
        }
    }

    /// Returns `true` if the button is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.adapter.has_class(IconButtonClass::On)
    }

    /// Returns `true` if the state is announced by swapping `aria-label`.
    #[must_use]
    pub fn has_toggled_aria_label(&self) -> bool {
        self.has_toggled_aria_label
    }

    /// The button was clicked. Flips the state and notifies.
    pub fn handle_click(&mut self) {
        let is_on = !self.is_on();
        self.toggle(is_on);
        self.adapter.notify_change(IconButtonChangeEvent { is_on });
    }

    /// Sets the state without notifying.
    pub fn toggle(&mut self, is_on: bool) {
        if is_on {
            self.adapter.add_class(IconButtonClass::On);
        } else {
            self.adapter.remove_class(IconButtonClass::On);
        }
        if self.has_toggled_aria_label {
            let source = if is_on {
                DATA_ARIA_LABEL_ON
            } else {
                DATA_ARIA_LABEL_OFF
            };
            let label = self.adapter.attr(source).unwrap_or_default();
            self.adapter.set_attr(attr::ARIA_LABEL, &label);
        } else {
            self.adapter.set_attr(attr::ARIA_PRESSED, bool_str(is_on));
        }
    }
}

impl<A: IconButtonAdapter> Foundation for IconButtonFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Picks the announcement scheme.
    ///
    /// Fails when a button with on/off labels also sets `aria-pressed`.
    fn init(&mut self) -> Result<()> {
        let labeled = |name: &str| self.adapter.attr(name).is_some_and(|v| !v.is_empty());
        if labeled(DATA_ARIA_LABEL_ON) && labeled(DATA_ARIA_LABEL_OFF) {
            if self.adapter.attr(attr::ARIA_PRESSED).is_some() {
                warn_event!(message = "icon_button.pressed_with_toggled_label");
                return Err(FoundationError::ConflictingStructure(
                    "aria-pressed on an icon button with on/off labels",
                ));
            }
            self.has_toggled_aria_label = true;
        } else {
            let pressed = bool_str(self.is_on());
            self.adapter.set_attr(attr::ARIA_PRESSED, pressed);
        }
        Ok(())
    }
}
