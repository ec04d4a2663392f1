// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single tab in a tab bar.

use kurbo::Rect;

use crate::Foundation;
use crate::attr;

class_names! {
    /// Classes applied to the tab root.
    pub enum TabClass {
        /// The tab is the selected one.
        Active => "mdc-tab--active",
    }
}

/// Horizontal extents of a tab and its content, relative to the tab bar.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TabDimensions {
    /// Left edge of the tab.
    pub root_left: f64,
    /// Right edge of the tab.
    pub root_right: f64,
    /// Left edge of the tab's content.
    pub content_left: f64,
    /// Right edge of the tab's content.
    pub content_right: f64,
}

/// Environment operations a tab needs.
pub trait TabAdapter {
    /// Sets an attribute on the tab root.
    fn set_attr(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }

    /// Adds a class to the root.
    fn add_class(&mut self, class: TabClass) {
        let _ = class;
    }

    /// Removes a class from the root.
    fn remove_class(&mut self, class: TabClass) {
        let _ = class;
    }

    /// Returns `true` if the root has `class`.
    fn has_class(&self, class: TabClass) -> bool {
        let _ = class;
        false
    }

    /// Shows the indicator, animating from the previous tab's indicator if given.
    fn activate_indicator(&mut self, previous_indicator: Option<Rect>) {
        let _ = previous_indicator;
    }

    /// Hides the indicator.
    fn deactivate_indicator(&mut self) {}

    /// The tab was clicked.
    fn notify_interacted(&mut self) {}

    /// Offset of the root from the tab bar's left edge.
    fn offset_left(&self) -> f64 {
        0.0
    }

    /// Width of the root.
    fn offset_width(&self) -> f64 {
        0.0
    }

    /// Offset of the content from the root's left edge.
    fn content_offset_left(&self) -> f64 {
        0.0
    }

    /// Width of the content.
    fn content_offset_width(&self) -> f64 {
        0.0
    }

    /// Focuses the tab.
    fn focus(&mut self) {}
}

/// Activation state of a tab.
#[derive(Debug)]
pub struct TabFoundation<A> {
    adapter: A,
    focus_on_activate: bool,
}

impl<A: TabAdapter> TabFoundation<A> {
    /// Creates an inactive tab that takes focus when activated.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            focus_on_activate: true,
        }
    }

    /// Returns `true` if the tab is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.adapter.has_class(TabClass::Active)
    }

    /// Sets whether activating the tab also focuses it.
    pub fn set_focus_on_activate(&mut self, focus_on_activate: bool) {
        self.focus_on_activate = focus_on_activate;
    }

    /// The tab was clicked.
    pub fn handle_click(&mut self) {
        self.adapter.notify_interacted();
    }

    /// Makes the tab the selected one and the tab bar's tab stop.
    pub fn activate(&mut self, previous_indicator: Option<Rect>) {
        self.adapter.add_class(TabClass::Active);
        self.adapter.set_attr(attr::ARIA_SELECTED, "true");
        self.adapter.set_attr(attr::TABINDEX, "0");
        self.adapter.activate_indicator(previous_indicator);
        if self.focus_on_activate {
            self.adapter.focus();
        }
    }

    /// Deselects an active tab. Inactive tabs are left alone.
    pub fn deactivate(&mut self) {
        if !self.is_active() {
            return;
        }
        self.adapter.remove_class(TabClass::Active);
        self.adapter.set_attr(attr::ARIA_SELECTED, "false");
        self.adapter.set_attr(attr::TABINDEX, "-1");
        self.adapter.deactivate_indicator();
    }

    /// Measures the tab and its content.
    #[must_use]
    pub fn compute_dimensions(&self) -> TabDimensions {
        let root_left = self.adapter.offset_left();
        let content_left = root_left + self.adapter.content_offset_left();
        TabDimensions {
            root_left,
            root_right: root_left + self.adapter.offset_width(),
            content_left,
            content_right: content_left + self.adapter.content_offset_width(),
        }
    }
}

impl<A: TabAdapter> Foundation for TabFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }
}
