// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio button. The native control owns the checked state; the foundation only keeps
//! disabled styling in sync with it.

use crate::Foundation;

class_names! {
    /// Classes applied to the radio root.
    pub enum RadioClass {
        /// The radio ignores input.
        Disabled => "mdc-radio--disabled",
    }
}

/// Environment operations a radio button needs.
pub trait RadioAdapter {
    /// Adds a class to the root.
    fn add_class(&mut self, class: RadioClass) {
        let _ = class;
    }

    /// Removes a class from the root.
    fn remove_class(&mut self, class: RadioClass) {
        let _ = class;
    }

    /// Enables or disables the native control.
    fn set_native_control_disabled(&mut self, disabled: bool) {
        let _ = disabled;
    }
}

/// Disabled styling of a radio button.
#[derive(Debug)]
pub struct RadioFoundation<A> {
    adapter: A,
}

impl<A: RadioAdapter> RadioFoundation<A> {
    /// Creates the foundation.
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Enables or disables the radio.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.adapter.set_native_control_disabled(disabled);
        if disabled {
            self.adapter.add_class(RadioClass::Disabled);
        } else {
            self.adapter.remove_class(RadioClass::Disabled);
        }
    }
}

impl<A: RadioAdapter> Foundation for RadioFoundation<A> {
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
    struct FakeRadio {
        log: CallLog,
    }

    impl RadioAdapter for FakeRadio {
        fn add_class(&mut self, class: RadioClass) {
            self.log.push(format!("add {class}"));
        }

        fn remove_class(&mut self, class: RadioClass) {
            self.log.push(format!("remove {class}"));
        }

        fn set_native_control_disabled(&mut self, disabled: bool) {
            self.log.push(format!("disabled {disabled}"));
        }
    }

    #[test]
    fn disabling_updates_control_then_class() {
        let mut r = RadioFoundation::new(FakeRadio::default());
        r.set_disabled(true);
        r.set_disabled(false);
        assert_eq!(
            r.adapter().log.calls(),
            [
                "disabled true",
                "add mdc-radio--disabled",
                "disabled false",
                "remove mdc-radio--disabled",
            ]
        );
    }
}
