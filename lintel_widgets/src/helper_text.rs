// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helper text under a text field or select, doubling as its validation message.

use crate::Foundation;
use crate::attr;

class_names! {
    /// Classes applied to the helper text element.
    pub enum HelperTextClass {
        /// Shown at all times rather than only while the field is focused.
        Persistent => "mdc-text-field-helper-text--persistent",
        /// Shown as an alert while the field is invalid.
        ValidationMsg => "mdc-text-field-helper-text--validation-msg",
    }
}

/// Environment operations helper text needs.
pub trait HelperTextAdapter {
    /// Adds a class to the helper text.
    fn add_class(&mut self, class: HelperTextClass) {
        let _ = class;
    }

    /// Removes a class from the helper text.
    fn remove_class(&mut self, class: HelperTextClass) {
        let _ = class;
    }

    /// Returns `true` if the helper text has `class`.
    fn has_class(&self, class: HelperTextClass) -> bool {
        let _ = class;
        false
    }

    /// Sets an attribute on the helper text.
    fn set_attr(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }

    /// Removes an attribute from the helper text.
    fn remove_attr(&mut self, name: &str) {
        let _ = name;
    }

    /// Replaces the text content.
    fn set_content(&mut self, content: &str) {
        let _ = content;
    }
}

/// Visibility and validation role of helper text.
#[derive(Debug)]
pub struct HelperTextFoundation<A> {
    adapter: A,
}

impl<A: HelperTextAdapter> HelperTextFoundation<A> {
    /// Creates the foundation.
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Replaces the text content.
    pub fn set_content(&mut self, content: &str) {
        self.adapter.set_content(content);
    }

    /// Keeps the helper text visible when the field is not focused.
    pub fn set_persistent(&mut self, persistent: bool) {
        if persistent {
            self.adapter.add_class(HelperTextClass::Persistent);
        } else {
            self.adapter.remove_class(HelperTextClass::Persistent);
        }
    }

    /// Treats the helper text as a validation message.
    pub fn set_validation(&mut self, validation: bool) {
        if validation {
            self.adapter.add_class(HelperTextClass::ValidationMsg);
        } else {
            self.adapter.remove_class(HelperTextClass::ValidationMsg);
        }
    }

    /// Exposes the helper text to assistive technology.
    pub fn show_to_screen_reader(&mut self) {
        self.adapter.remove_attr(attr::ARIA_HIDDEN);
    }

    /// Updates the alert role and visibility after the field's validity changed.
    pub fn set_validity(&mut self, input_is_valid: bool) {
        let persistent = self.adapter.has_class(HelperTextClass::Persistent);
        let validation_msg = self.adapter.has_class(HelperTextClass::ValidationMsg);
        let needs_display = validation_msg && !input_is_valid;

        if needs_display {
            self.adapter.set_attr(attr::ROLE, "alert");
        } else {
            self.adapter.remove_attr(attr::ROLE);
        }
        if !persistent && !needs_display {
            self.adapter.set_attr(attr::ARIA_HIDDEN, "true");
        }
    }
}

impl<A: HelperTextAdapter> Foundation for HelperTextFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::*;
    use crate::testing::CallLog;

    #[derive(Debug, Default)]
    struct FakeHelperText {
        classes: Vec<HelperTextClass>,
        log: CallLog,
    }

    impl HelperTextAdapter for FakeHelperText {
        fn add_class(&mut self, class: HelperTextClass) {
            self.classes.push(class);
        }

        fn remove_class(&mut self, class: HelperTextClass) {
            self.classes.retain(|c| *c != class);
        }

        fn has_class(&self, class: HelperTextClass) -> bool {
            self.classes.contains(&class)
        }

        fn set_attr(&mut self, name: &str, value: &str) {
            self.log.push(format!("set {name}={value}"));
        }

        fn remove_attr(&mut self, name: &str) {
            self.log.push(format!("remove {name}"));
        }
    }

    #[test]
    fn invalid_validation_message_becomes_alert() {
        let mut h = HelperTextFoundation::new(FakeHelperText::default());
        h.set_validation(true);
        h.set_validity(false);
        assert!(h.adapter().log.contains("set role=alert"));
        assert!(!h.adapter().log.contains("set aria-hidden=true"));
    }

    #[test]
    fn valid_non_persistent_text_is_hidden() {
        let mut h = HelperTextFoundation::new(FakeHelperText::default());
        h.set_validation(true);
        h.set_validity(true);
        assert!(h.adapter().log.contains("remove role"));
        assert!(h.adapter().log.contains("set aria-hidden=true"));

        h.adapter_mut().log.clear();
        h.set_persistent(true);
        h.set_validity(true);
        assert!(!h.adapter().log.contains("set aria-hidden=true"));
        h.show_to_screen_reader();
        assert!(h.adapter().log.contains("remove aria-hidden"));
    }
}
