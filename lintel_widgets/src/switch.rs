// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! On/off switch backed by a native checkbox control.

use crate::Foundation;
use crate::attr::{self, bool_str};

class_names! {
    /// Classes applied to the switch root.
    pub enum SwitchClass {
        /// The switch is on.
        Checked => "mdc-switch--checked",
        /// The switch ignores input.
        Disabled => "mdc-switch--disabled",
    }
}

/// Environment operations a switch needs.
pub trait SwitchAdapter {
    /// Adds a class to the root.
    fn add_class(&mut self, class: SwitchClass) {
        let _ = class;
    }

    /// Removes a class from the root.
    fn remove_class(&mut self, class: SwitchClass) {
        let _ = class;
    }

    /// Checks or unchecks the native control.
    fn set_native_control_checked(&mut self, checked: bool) {
        let _ = checked;
    }

    /// Enables or disables the native control.
    fn set_native_control_disabled(&mut self, disabled: bool) {
        let _ = disabled;
    }

    /// Sets an attribute on the native control.
    fn set_native_control_attr(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }
}

/// Checked and disabled styling of a switch.
#[derive(Debug)]
pub struct SwitchFoundation<A> {
    adapter: A,
}

impl<A: SwitchAdapter> SwitchFoundation<A> {
    /// Creates the foundation.
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Turns the switch on or off.
    pub fn set_checked(&mut self, checked: bool) {
        self.adapter.set_native_control_checked(checked);
        self.update_checked(checked);
    }

    /// Enables or disables the switch.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.adapter.set_native_control_disabled(disabled);
        if disabled {
            self.adapter.add_class(SwitchClass::Disabled);
        } else {
            self.adapter.remove_class(SwitchClass::Disabled);
        }
    }

    /// The native control changed to `checked` through user input.
    pub fn handle_change(&mut self, checked: bool) {
        self.update_checked(checked);
    }

    fn update_checked(&mut self, checked: bool) {
        self.adapter
            .set_native_control_attr(attr::ARIA_CHECKED, bool_str(checked));
        if checked {
            self.adapter.add_class(SwitchClass::Checked);
        } else {
            self.adapter.remove_class(SwitchClass::Checked);
        }
    }
}

impl<A: SwitchAdapter> Foundation for SwitchFoundation<A> {
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

    use super::*;
    use crate::testing::CallLog;

    #[derive(Debug, Default)]
    struct FakeSwitch {
        log: CallLog,
    }

    impl SwitchAdapter for FakeSwitch {
        fn add_class(&mut self, class: SwitchClass) {
            self.log.push(format!("add {class}"));
        }

        fn remove_class(&mut self, class: SwitchClass) {
            self.log.push(format!("remove {class}"));
        }

        fn set_native_control_checked(&mut self, checked: bool) {
            self.log.push(format!("checked {checked}"));
        }

        fn set_native_control_disabled(&mut self, disabled: bool) {
            self.log.push(format!("disabled {disabled}"));
        }

        fn set_native_control_attr(&mut self, name: &str, value: &str) {
            self.log.push(format!("{name}={value}"));
        }
    }

    #[test]
    fn set_checked_updates_control_aria_and_class() {
        let mut s = SwitchFoundation::new(FakeSwitch::default());
        s.set_checked(true);
        assert_eq!(
            s.adapter().log.calls(),
            ["checked true", "aria-checked=true", "add mdc-switch--checked"]
        );
    }

    #[test]
    fn change_does_not_touch_native_control() {
        let mut s = SwitchFoundation::new(FakeSwitch::default());
        s.handle_change(false);
        assert!(s.adapter().log.contains("aria-checked=false"));
        assert!(s.adapter().log.contains("remove mdc-switch--checked"));
        assert!(!s.adapter().log.contains("checked false"));
    }

    #[test]
    fn disabled_toggles_class() {
        let mut s = SwitchFoundation::new(FakeSwitch::default());
        s.set_disabled(true);
        s.set_disabled(false);
        assert!(s.adapter().log.ordered("add mdc-switch--disabled", "remove mdc-switch--disabled"));
    }
}
