// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading or trailing icon of a text field or select.
//!
//! An icon with a tabindex is interactive: it reports clicks and Enter presses, and is
//! taken out of the tab order while its field is disabled.

use alloc::string::String;

use crate::attr;
use crate::event::{Interaction, Key};
use crate::Foundation;

/// Role given to interactive icons.
pub const ICON_ROLE: &str = "button";

/// Environment operations an icon needs.
pub trait IconAdapter {
    /// Reads an attribute of the icon.
    fn attr(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }

    /// Sets an attribute on the icon.
    fn set_attr(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }

    /// Removes an attribute from the icon.
    fn remove_attr(&mut self, name: &str) {
        let _ = name;
    }

    /// Replaces the icon's content, such as a ligature name.
    fn set_content(&mut self, content: &str) {
        let _ = content;
    }

    /// The icon was activated.
    fn notify_icon_action(&mut self) {}
}

/// Interaction and disabled state of a field icon.
#[derive(Debug)]
pub struct IconFoundation<A> {
    adapter: A,
    saved_tab_index: Option<String>,
}

impl<A: IconAdapter> IconFoundation<A> {
    /// Creates the foundation. Call [`Foundation::init`] to capture the tabindex.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            saved_tab_index: None,
        }
    }

    /// Removes an interactive icon from the tab order while disabled.
    ///
    /// Icons without a tabindex are decorative and left alone.
    pub fn set_disabled(&mut self, disabled: bool) {
        let Some(saved) = self.saved_tab_index.as_deref() else {
            return;
        };
        if disabled {
            self.adapter.set_attr(attr::TABINDEX, "-1");
            self.adapter.remove_attr(attr::ROLE);
        } else {
            self.adapter.set_attr(attr::TABINDEX, saved);
            self.adapter.set_attr(attr::ROLE, ICON_ROLE);
        }
    }

    /// Sets the accessible name.
    pub fn set_aria_label(&mut self, label: &str) {
        self.adapter.set_attr(attr::ARIA_LABEL, label);
    }

    /// Replaces the icon's content.
    pub fn set_content(&mut self, content: &str) {
        self.adapter.set_content(content);
    }

    /// Clicks and Enter presses activate the icon.
    pub fn handle_interaction(&mut self, interaction: Interaction) {
        let activated = match interaction {
            Interaction::Click => true,
            Interaction::Key(event) => event.key == Key::Enter,
        };
        if activated {
            self.adapter.notify_icon_action();
        }
    }
}

impl<A: IconAdapter> Foundation for IconFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn init(&mut self) -> crate::Result<()> {
        self.saved_tab_index = self
            .adapter
            .attr(attr::TABINDEX)
            .filter(|t| !t.is_empty());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use super::*;
    use crate::event::KeyEvent;
    use crate::testing::CallLog;

    #[derive(Debug, Default)]
    struct FakeIcon {
        tabindex: Option<&'static str>,
        log: CallLog,
    }

    impl IconAdapter for FakeIcon {
        fn attr(&self, name: &str) -> Option<String> {
            (name == attr::TABINDEX)
                .then_some(self.tabindex)
                .flatten()
                .map(ToString::to_string)
        }

        fn set_attr(&mut self, name: &str, value: &str) {
            self.log.push(format!("set {name}={value}"));
        }

        fn remove_attr(&mut self, name: &str) {
            self.log.push(format!("remove {name}"));
        }

        fn notify_icon_action(&mut self) {
            self.log.push("action");
        }
    }

    #[test]
    fn disabling_restores_saved_tabindex() {
        let mut icon = IconFoundation::new(FakeIcon {
            tabindex: Some("0"),
            ..FakeIcon::default()
        });
        icon.init().unwrap();
        icon.set_disabled(true);
        assert!(icon.adapter().log.contains("set tabindex=-1"));
        assert!(icon.adapter().log.contains("remove role"));
        icon.set_disabled(false);
        assert!(icon.adapter().log.contains("set tabindex=0"));
        assert!(icon.adapter().log.contains("set role=button"));
    }

    #[test]
    fn decorative_icons_ignore_disabled() {
        let mut icon = IconFoundation::new(FakeIcon::default());
        icon.init().unwrap();
        icon.set_disabled(true);
        assert!(icon.adapter().log.calls().is_empty());
    }

    #[test]
    fn click_and_enter_activate() {
        let mut icon = IconFoundation::new(FakeIcon::default());
        icon.handle_interaction(Interaction::Click);
        icon.handle_interaction(Interaction::Key(KeyEvent::new(Key::Enter)));
        icon.handle_interaction(Interaction::Key(KeyEvent::new(Key::Space)));
        assert_eq!(icon.adapter().log.count("action"), 2);
    }
}
