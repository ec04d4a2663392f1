// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip shown after hovering or focusing its anchor.
//!
//! Hovering or focusing the anchor starts the show delay; leaving starts the hide delay.
//! The two delays are mutually exclusive: starting one cancels the other, so a quick
//! leave-and-return keeps the tooltip up. Blur, a click anywhere, or Escape hide it
//! immediately. Placement is recomputed on every show with
//! [`lintel_placement::tooltip::place`].

use alloc::string::String;

use kurbo::{Point, Rect, Size};
use lintel_placement::tooltip::{self, MIN_VIEWPORT_TOOLTIP_THRESHOLD};
use lintel_placement::{AnchorBoundary, TooltipPlacement, XPosition, YPosition};
use lintel_schedule::{Millis, Scheduler, TaskId};

use crate::attr;
use crate::event::{EventEffects, Key, KeyEvent};
use crate::Foundation;

/// Default delay before a hovered or focused anchor shows its tooltip.
pub const SHOW_DELAY_MS: Millis = 500;
/// Default delay before a tooltip hides after the pointer leaves its anchor.
pub const HIDE_DELAY_MS: Millis = 600;
/// Tooltips taller than this (and at least [`MAX_WIDTH`] wide) are styled as multiline.
pub const MIN_HEIGHT: f64 = 24.0;
/// Width at which a tooltip's text wraps.
pub const MAX_WIDTH: f64 = 200.0;

/// Anchor attribute linking a tooltip that assistive technology reads through the anchor.
pub const TOOLTIP_ID_ATTR: &str = "data-tooltip-id";

class_names! {
    /// Classes applied to the tooltip.
    pub enum TooltipClass {
        /// Fully shown.
        Shown => "mdc-tooltip--shown",
        /// The show animation is about to start.
        Showing => "mdc-tooltip--showing",
        /// The show animation is running.
        ShowingTransition => "mdc-tooltip--showing-transition",
        /// The tooltip is hiding or hidden.
        Hide => "mdc-tooltip--hide",
        /// The hide animation is running.
        HideTransition => "mdc-tooltip--hide-transition",
        /// The text wraps onto several lines.
        Multiline => "mdc-tooltip--multiline",
    }
}

/// Tooltip timing and placement preferences.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TooltipConfig {
    /// Delay before showing.
    pub show_delay_ms: Millis,
    /// Delay before hiding after the pointer leaves.
    pub hide_delay_ms: Millis,
    /// Preferred horizontal alignment.
    pub x_position: XPosition,
    /// Preferred vertical position.
    pub y_position: YPosition,
    /// Boundary type of the anchor, which sets the anchor gap.
    pub anchor_boundary: AnchorBoundary,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: SHOW_DELAY_MS,
            hide_delay_ms: HIDE_DELAY_MS,
            x_position: XPosition::Detected,
            y_position: YPosition::Detected,
            anchor_boundary: AnchorBoundary::Bounded,
        }
    }
}

/// Environment operations a tooltip needs.
pub trait TooltipAdapter {
    /// Sets an attribute on the tooltip.
    fn set_attribute(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }

    /// Reads an attribute of the anchor.
    fn anchor_attribute(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }

    /// Adds a class to the tooltip.
    fn add_class(&mut self, class: TooltipClass) {
        let _ = class;
    }

    /// Removes a class from the tooltip.
    fn remove_class(&mut self, class: TooltipClass) {
        let _ = class;
    }

    /// Returns `true` if the tooltip has `class`.
    fn has_class(&self, class: TooltipClass) -> bool {
        let _ = class;
        false
    }

    /// Moves the tooltip's top-left corner to `origin`.
    fn set_position(&mut self, origin: Point) {
        let _ = origin;
    }

    /// Size of the viewport.
    fn viewport_size(&self) -> Size {
        Size::ZERO
    }

    /// Size of the tooltip.
    fn tooltip_size(&self) -> Size {
        Size::ZERO
    }

    /// Bounds of the anchor in viewport coordinates, if it is laid out.
    fn anchor_rect(&self) -> Option<Rect> {
        None
    }

    /// Returns `true` for right-to-left layouts.
    fn is_rtl(&self) -> bool {
        false
    }

    /// Starts routing document clicks and key presses to the tooltip.
    fn register_document_handlers(&mut self) {}

    /// Stops routing document clicks and key presses to the tooltip.
    fn deregister_document_handlers(&mut self) {}

    /// The hide animation finished.
    fn notify_hidden(&mut self) {}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TooltipTask {
    Show,
    Hide,
    Reveal,
}

/// Show/hide lifecycle and placement of a tooltip.
#[derive(Debug)]
pub struct TooltipFoundation<A> {
    adapter: A,
    config: TooltipConfig,
    is_shown: bool,
    show_timeout: Option<TaskId>,
    hide_timeout: Option<TaskId>,
    frame: Option<TaskId>,
    scheduler: Scheduler<TooltipTask>,
}

impl<A: TooltipAdapter> TooltipFoundation<A> {
    /// Creates a hidden tooltip with default delays.
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, TooltipConfig::default())
    }

    /// Creates a hidden tooltip with the given configuration.
    pub fn with_config(adapter: A, config: TooltipConfig) -> Self {
        Self {
            adapter,
            config,
            is_shown: false,
            show_timeout: None,
            hide_timeout: None,
            frame: None,
            scheduler: Scheduler::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Returns `true` while the tooltip is shown.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.is_shown
    }

    /// Returns `true` while a show delay is running.
    #[must_use]
    pub fn is_show_pending(&self) -> bool {
        self.show_timeout.is_some()
    }

    /// Returns `true` while a hide delay is running.
    #[must_use]
    pub fn is_hide_pending(&self) -> bool {
        self.hide_timeout.is_some()
    }

    /// Sets placement preferences. `None` keeps the current value.
    pub fn set_tooltip_position(&mut self, x: Option<XPosition>, y: Option<YPosition>) {
        if let Some(x) = x {
            self.config.x_position = x;
        }
        if let Some(y) = y {
            self.config.y_position = y;
        }
    }

    /// Sets the anchor's boundary type, which decides the anchor gap.
    pub fn set_anchor_boundary_type(&mut self, boundary: AnchorBoundary) {
        self.config.anchor_boundary = boundary;
    }

    /// The pointer entered the anchor. An already shown tooltip stays up.
    pub fn handle_anchor_mouse_enter(&mut self) {
        if self.is_shown {
            self.show();
        } else {
            self.start_show_timeout();
        }
    }

    /// The anchor gained focus.
    pub fn handle_anchor_focus(&mut self) {
        self.start_show_timeout();
    }

    /// The pointer left the anchor.
    pub fn handle_anchor_mouse_leave(&mut self) {
        self.scheduler.cancel_slot(&mut self.show_timeout);
        self.scheduler.cancel_slot(&mut self.hide_timeout);
        self.hide_timeout = Some(
            self.scheduler
                .set_timeout(self.config.hide_delay_ms, TooltipTask::Hide),
        );
    }

    /// The anchor lost focus.
    pub fn handle_anchor_blur(&mut self) {
        self.hide();
    }

    /// A click anywhere in the document.
    pub fn handle_click(&mut self) {
        self.hide();
    }

    /// A key press anywhere in the document. Escape hides the tooltip.
    pub fn handle_keydown(&mut self, event: KeyEvent) -> EventEffects {
        if event.key == Key::Escape {
            self.hide();
        }
        EventEffects::empty()
    }

    /// Shows the tooltip now, canceling any pending delay.
    pub fn show(&mut self) {
        self.clear_timeouts();
        if self.is_shown {
            return;
        }
        debug_event!(message = "tooltip.show");
        self.is_shown = true;

        let hide_from_screen_reader = self
            .adapter
            .anchor_attribute(TOOLTIP_ID_ATTR)
            .is_some_and(|id| !id.is_empty());
        if !hide_from_screen_reader {
            self.adapter.set_attribute(attr::ARIA_HIDDEN, "false");
        }
        self.adapter.remove_class(TooltipClass::Hide);
        self.adapter.add_class(TooltipClass::Showing);
        if self.is_multiline() {
            self.adapter.add_class(TooltipClass::Multiline);
        }
        let origin = self.calculate_position();
        self.adapter.set_position(origin);
        self.adapter.register_document_handlers();

        self.scheduler.cancel_slot(&mut self.frame);
        self.frame = Some(self.scheduler.request_frame(TooltipTask::Reveal));
    }

    /// Hides the tooltip now, canceling any pending delay.
    pub fn hide(&mut self) {
        self.clear_timeouts();
        if !self.is_shown {
            return;
        }
        debug_event!(message = "tooltip.hide");
        self.scheduler.cancel_slot(&mut self.frame);
        self.is_shown = false;
        self.adapter.set_attribute(attr::ARIA_HIDDEN, "true");
        self.clear_animation_classes();
        self.adapter.add_class(TooltipClass::Hide);
        self.adapter.add_class(TooltipClass::HideTransition);
        self.adapter.remove_class(TooltipClass::Shown);
        self.adapter.deregister_document_handlers();
    }

    /// A CSS transition on the tooltip ended.
    pub fn handle_transition_end(&mut self) {
        let was_hiding = self.adapter.has_class(TooltipClass::Hide);
        self.adapter.remove_class(TooltipClass::Showing);
        self.adapter.remove_class(TooltipClass::ShowingTransition);
        self.adapter.remove_class(TooltipClass::Hide);
        self.adapter.remove_class(TooltipClass::HideTransition);
        if was_hiding {
            self.adapter.notify_hidden();
        }
    }

    fn start_show_timeout(&mut self) {
        self.scheduler.cancel_slot(&mut self.hide_timeout);
        self.scheduler.cancel_slot(&mut self.show_timeout);
        self.show_timeout = Some(
            self.scheduler
                .set_timeout(self.config.show_delay_ms, TooltipTask::Show),
        );
    }

    fn clear_timeouts(&mut self) {
        self.scheduler.cancel_slot(&mut self.show_timeout);
        self.scheduler.cancel_slot(&mut self.hide_timeout);
    }

    fn clear_animation_classes(&mut self) {
        self.adapter.remove_class(TooltipClass::ShowingTransition);
        self.adapter.remove_class(TooltipClass::HideTransition);
    }

    fn is_multiline(&self) -> bool {
        let size = self.adapter.tooltip_size();
        size.height > MIN_HEIGHT && size.width >= MAX_WIDTH
    }

    fn calculate_position(&self) -> Point {
        let Some(anchor) = self.adapter.anchor_rect() else {
            return Point::ZERO;
        };
        let placement = TooltipPlacement {
            x: self.config.x_position,
            y: self.config.y_position,
            anchor_gap: self.config.anchor_boundary.gap(),
            threshold: MIN_VIEWPORT_TOOLTIP_THRESHOLD,
            rtl: self.adapter.is_rtl(),
        };
        tooltip::place(
            anchor,
            self.adapter.tooltip_size(),
            self.adapter.viewport_size(),
            &placement,
        )
    }

    fn run(&mut self, task: TooltipTask) {
        match task {
            TooltipTask::Show => {
                self.show_timeout = None;
                self.show();
            }
            TooltipTask::Hide => {
                self.hide_timeout = None;
                self.hide();
            }
            TooltipTask::Reveal => {
                self.frame = None;
                self.clear_animation_classes();
                self.adapter.add_class(TooltipClass::Shown);
                self.adapter.add_class(TooltipClass::ShowingTransition);
            }
        }
    }
}

impl<A: TooltipAdapter> Foundation for TooltipFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn destroy(&mut self) {
        self.scheduler.clear();
        self.show_timeout = None;
        self.hide_timeout = None;
        self.frame = None;
        self.adapter.remove_class(TooltipClass::Shown);
        self.adapter.remove_class(TooltipClass::ShowingTransition);
        self.adapter.remove_class(TooltipClass::Showing);
        self.adapter.remove_class(TooltipClass::Hide);
        self.adapter.remove_class(TooltipClass::HideTransition);
        if self.is_shown {
            self.is_shown = false;
            self.adapter.deregister_document_handlers();
        }
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
    use alloc::format;
    use alloc::vec::Vec;

    use super::*;
    use crate::testing::CallLog;

    #[derive(Debug)]
    struct FakeTooltip {
        classes: Vec<TooltipClass>,
        anchor: Option<Rect>,
        tooltip: Size,
        tooltip_id: bool,
        position: Option<Point>,
        log: CallLog,
    }

    impl Default for FakeTooltip {
        fn default() -> Self {
            Self {
                classes: Vec::new(),
                anchor: Some(Rect::new(100.0, 100.0, 200.0, 140.0)),
                tooltip: Size::new(60.0, 20.0),
                tooltip_id: false,
                position: None,
                log: CallLog::default(),
            }
        }
    }

    impl TooltipAdapter for FakeTooltip {
        fn set_attribute(&mut self, name: &str, value: &str) {
            self.log.push(format!("{name}={value}"));
        }

        fn anchor_attribute(&self, name: &str) -> Option<String> {
            (name == TOOLTIP_ID_ATTR && self.tooltip_id).then(|| String::from("tip"))
        }

        fn add_class(&mut self, class: TooltipClass) {
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }

        fn remove_class(&mut self, class: TooltipClass) {
            self.classes.retain(|c| *c != class);
        }

        fn has_class(&self, class: TooltipClass) -> bool {
            self.classes.contains(&class)
        }

        fn set_position(&mut self, origin: Point) {
            self.position = Some(origin);
        }

        fn viewport_size(&self) -> Size {
            Size::new(1000.0, 800.0)
        }

        fn tooltip_size(&self) -> Size {
            self.tooltip
        }

        fn anchor_rect(&self) -> Option<Rect> {
            self.anchor
        }

        fn register_document_handlers(&mut self) {
            self.log.push("register");
        }

        fn deregister_document_handlers(&mut self) {
            self.log.push("deregister");
        }

        fn notify_hidden(&mut self) {
            self.log.push("hidden");
        }
    }

    #[test]
    fn hover_shows_after_delay_centered_below() {
        let mut t = TooltipFoundation::new(FakeTooltip::default());
        t.handle_anchor_mouse_enter();
        t.advance(SHOW_DELAY_MS - 1);
        assert!(!t.is_shown());
        t.advance(SHOW_DELAY_MS);
        assert!(t.is_shown());
        assert!(t.adapter().log.contains("aria-hidden=false"));
        assert!(t.adapter().log.contains("register"));
        assert_eq!(t.adapter().position, Some(Point::new(120.0, 144.0)));
        assert!(t.adapter().has_class(TooltipClass::Showing));
        assert!(!t.adapter().has_class(TooltipClass::Shown));

        t.advance(SHOW_DELAY_MS + 16);
        assert!(t.adapter().has_class(TooltipClass::Shown));
        assert!(t.adapter().has_class(TooltipClass::ShowingTransition));
    }

    #[test]
    fn leave_and_return_keeps_tooltip_up() {
        let mut t = TooltipFoundation::new(FakeTooltip::default());
        t.show();
        t.handle_anchor_mouse_leave();
        assert!(t.is_hide_pending());
        t.advance(HIDE_DELAY_MS - 10);
        t.handle_anchor_mouse_enter();
        assert!(!t.is_hide_pending());
        t.advance(10 * HIDE_DELAY_MS);
        assert!(t.is_shown());
    }

    #[test]
    fn show_and_hide_delays_exclude_each_other() {
        let mut t = TooltipFoundation::new(FakeTooltip::default());
        t.handle_anchor_focus();
        assert!(t.is_show_pending());
        t.handle_anchor_mouse_leave();
        assert!(!t.is_show_pending());
        assert!(t.is_hide_pending());
        t.handle_anchor_focus();
        assert!(t.is_show_pending());
        assert!(!t.is_hide_pending());
    }

    #[test]
    fn escape_click_and_blur_hide_immediately() {
        let mut t = TooltipFoundation::new(FakeTooltip::default());
        t.show();
        t.handle_keydown(KeyEvent::new(Key::Escape));
        assert!(!t.is_shown());
        assert!(t.adapter().log.contains("aria-hidden=true"));
        assert!(t.adapter().log.contains("deregister"));

        t.show();
        t.handle_click();
        assert!(!t.is_shown());
        t.show();
        t.handle_anchor_blur();
        assert!(!t.is_shown());
    }

    #[test]
    fn hide_before_reveal_cancels_frame() {
        let mut t = TooltipFoundation::new(FakeTooltip::default());
        t.show();
        t.hide();
        t.advance(16);
        assert!(!t.adapter().has_class(TooltipClass::Shown));
        assert!(t.adapter().has_class(TooltipClass::Hide));
    }

    #[test]
    fn transition_end_after_hide_notifies() {
        let mut t = TooltipFoundation::new(FakeTooltip::default());
        t.show();
        t.handle_transition_end();
        assert!(!t.adapter().log.contains("hidden"));
        t.hide();
        t.handle_transition_end();
        assert_eq!(t.adapter().log.count("hidden"), 1);
        assert!(t.adapter().classes.is_empty());
    }

    #[test]
    fn linked_tooltip_stays_hidden_from_screen_readers() {
        let mut t = TooltipFoundation::new(FakeTooltip {
            tooltip_id: true,
            ..FakeTooltip::default()
        });
        t.show();
        assert!(!t.adapter().log.contains("aria-hidden=false"));
    }

    #[test]
    fn multiline_and_missing_anchor() {
        let mut t = TooltipFoundation::new(FakeTooltip {
            anchor: None,
            tooltip: Size::new(MAX_WIDTH, MIN_HEIGHT + 1.0),
            ..FakeTooltip::default()
        });
        t.show();
        assert!(t.adapter().has_class(TooltipClass::Multiline));
        assert_eq!(t.adapter().position, Some(Point::ZERO));
    }
}
