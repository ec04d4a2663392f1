// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal dialog with an animated open/close lifecycle and button stacking.
//!
//! Opening waits one frame and then a zero-delay timeout before adding the open class.
//! The extra hop gives the host a chance to reflow once the dialog is displayed, so the
//! open animation has a starting point. Focus is trapped once the open animation ends
//! and released once the close animation ends.

use alloc::string::String;

use lintel_schedule::{Millis, Scheduler, TaskId};

use crate::event::{EventEffects, Key, KeyEvent};
use crate::Foundation;
use crate::menu_surface::SurfacePhase;

/// Length of the open animation.
pub const DIALOG_ANIMATION_OPEN_TIME_MS: Millis = 150;
/// Length of the close animation.
pub const DIALOG_ANIMATION_CLOSE_TIME_MS: Millis = 75;

/// Action reported when Escape or a scrim click closes the dialog.
pub const CLOSE_ACTION: &str = "close";
/// Action reported when the dialog closes because it is being destroyed.
pub const DESTROY_ACTION: &str = "destroy";

class_names! {
    /// Classes applied to the dialog root and the document body.
    pub enum DialogClass {
        /// The open animation is running.
        Opening => "mdc-dialog--opening",
        /// The dialog is shown.
        Open => "mdc-dialog--open",
        /// The close animation is running.
        Closing => "mdc-dialog--closing",
        /// Action buttons are laid out vertically.
        Stacked => "mdc-dialog--stacked",
        /// The content area scrolls.
        Scrollable => "mdc-dialog--scrollable",
        /// Applied to the body while the dialog is open.
        ScrollLock => "mdc-dialog-scroll-lock",
    }
}

/// Dialog behavior configured by the binding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogConfig {
    /// Action Escape closes with, or `None` to ignore Escape.
    pub escape_key_action: Option<String>,
    /// Action a scrim click closes with, or `None` to ignore scrim clicks.
    pub scrim_click_action: Option<String>,
    /// Stack the action buttons when they do not fit side by side.
    pub auto_stack_buttons: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            escape_key_action: Some(String::from(CLOSE_ACTION)),
            scrim_click_action: Some(String::from(CLOSE_ACTION)),
            auto_stack_buttons: true,
        }
    }
}

/// What a click or key press inside the dialog landed on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogEventTarget {
    /// The target is the scrim behind the dialog.
    pub is_scrim: bool,
    /// Action of the closest element carrying one, such as an action button.
    pub action: Option<String>,
    /// The target opts out of Enter triggering the default button.
    pub suppresses_default_press: bool,
}

/// Environment operations a dialog needs.
pub trait DialogAdapter {
    /// Adds a class to the dialog root.
    fn add_class(&mut self, class: DialogClass) {
        let _ = class;
    }

    /// Removes a class from the dialog root.
    fn remove_class(&mut self, class: DialogClass) {
        let _ = class;
    }

    /// Returns `true` if the dialog root has `class`.
    fn has_class(&self, class: DialogClass) -> bool {
        let _ = class;
        false
    }

    /// Adds a class to the document body.
    fn add_body_class(&mut self, class: DialogClass) {
        let _ = class;
    }

    /// Removes a class from the document body.
    fn remove_body_class(&mut self, class: DialogClass) {
        let _ = class;
    }

    /// Returns `true` if the action buttons wrap when laid out in a row.
    fn are_buttons_stacked(&self) -> bool {
        false
    }

    /// Reverses the order of the action buttons.
    fn reverse_buttons(&mut self) {}

    /// Returns `true` if the content overflows its container.
    fn is_content_scrollable(&self) -> bool {
        false
    }

    /// Clicks the default action button.
    fn click_default_button(&mut self) {}

    /// Element that should take focus when the dialog opens, if one is marked.
    fn initial_focus(&self) -> Option<String> {
        None
    }

    /// Confines focus to the dialog and focuses `initial`.
    ///
    /// With no initial element the adapter focuses the first focusable descendant.
    fn trap_focus(&mut self, initial: Option<&str>) {
        let _ = initial;
    }

    /// Releases the focus trap.
    fn release_focus(&mut self) {}

    /// The open transition started.
    fn notify_opening(&mut self) {}

    /// The dialog finished opening.
    fn notify_opened(&mut self) {}

    /// The close transition started.
    fn notify_closing(&mut self, action: &str) {
        let _ = action;
    }

    /// The dialog finished closing.
    fn notify_closed(&mut self, action: &str) {
        let _ = action;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum DialogTask {
    OpenFrame,
    OpenShow,
    OpenDone,
    CloseDone(String),
    Layout,
}

/// Open/close lifecycle, action handling and layout for a dialog.
#[derive(Debug)]
pub struct DialogFoundation<A> {
    adapter: A,
    config: DialogConfig,
    phase: SurfacePhase,
    are_buttons_stacked: bool,
    animation: Option<TaskId>,
    layout_frame: Option<TaskId>,
    scheduler: Scheduler<DialogTask>,
}

impl<A: DialogAdapter> DialogFoundation<A> {
    /// Creates a closed dialog with default configuration.
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, DialogConfig::default())
    }

    /// Creates a closed dialog with the given configuration.
    pub fn with_config(adapter: A, config: DialogConfig) -> Self {
        Self {
            adapter,
            config,
            phase: SurfacePhase::Closed,
            are_buttons_stacked: false,
            animation: None,
            layout_frame: None,
            scheduler: Scheduler::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SurfacePhase {
        self.phase
    }

    /// Returns `true` from `open()` until `close()`.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    /// Action Escape closes with.
    #[must_use]
    pub fn escape_key_action(&self) -> Option<&str> {
        self.config.escape_key_action.as_deref()
    }

    /// Sets the action Escape closes with. `None` ignores Escape.
    pub fn set_escape_key_action(&mut self, action: Option<String>) {
        self.config.escape_key_action = action;
    }

    /// Action a scrim click closes with.
    #[must_use]
    pub fn scrim_click_action(&self) -> Option<&str> {
        self.config.scrim_click_action.as_deref()
    }

    /// Sets the action a scrim click closes with. `None` ignores scrim clicks.
    pub fn set_scrim_click_action(&mut self, action: Option<String>) {
        self.config.scrim_click_action = action;
    }

    /// Returns `true` if buttons stack automatically.
    #[must_use]
    pub fn auto_stack_buttons(&self) -> bool {
        self.config.auto_stack_buttons
    }

    /// Enables or disables automatic button stacking.
    pub fn set_auto_stack_buttons(&mut self, auto_stack: bool) {
        self.config.auto_stack_buttons = auto_stack;
    }

    /// Opens the dialog.
    pub fn open(&mut self) {
        debug_event!(message = "dialog.open");
        self.phase = SurfacePhase::Opening;
        // A close still animating must not report closed after this open.
        self.scheduler.cancel_slot(&mut self.animation);
        self.adapter.remove_class(DialogClass::Closing);

        self.adapter.notify_opening();
        self.adapter.add_class(DialogClass::Opening);
        self.animation = Some(self.scheduler.request_frame(DialogTask::OpenFrame));
    }

    /// Closes the dialog, reporting `action` to the closing and closed notifications.
    ///
    /// Does nothing if the dialog is not open.
    pub fn close(&mut self, action: &str) {
        if !self.phase.is_open() {
            return;
        }
        debug_event!(message = "dialog.close", action);
        self.phase = SurfacePhase::Closing;
        self.adapter.notify_closing(action);
        self.adapter.add_class(DialogClass::Closing);
        self.adapter.remove_class(DialogClass::Open);
        self.adapter.remove_body_class(DialogClass::ScrollLock);

        self.scheduler.cancel_slot(&mut self.animation);
        self.animation = Some(self.scheduler.set_timeout(
            DIALOG_ANIMATION_CLOSE_TIME_MS,
            DialogTask::CloseDone(String::from(action)),
        ));
    }

    /// Re-measures button stacking and content scrolling on the next frame.
    pub fn layout(&mut self) {
        self.scheduler.cancel_slot(&mut self.layout_frame);
        self.layout_frame = Some(self.scheduler.request_frame(DialogTask::Layout));
    }

    /// A click inside the dialog.
    pub fn handle_click(&mut self, target: &DialogEventTarget) {
        if target.is_scrim {
            if let Some(scrim) = self.config.scrim_click_action.clone() {
                self.close(&scrim);
                return;
            }
        }
        if let Some(action) = target.action.as_deref().filter(|a| !a.is_empty()) {
            self.close(action);
        }
    }

    /// A key press inside the dialog. Enter clicks the default button.
    ///
    /// Enter on an action button is left alone: the button's own click closes the dialog.
    pub fn handle_keydown(&mut self, event: KeyEvent, target: &DialogEventTarget) -> EventEffects {
        if event.key != Key::Enter {
            return EventEffects::empty();
        }
        if target.action.as_deref().is_some_and(|a| !a.is_empty()) {
            return EventEffects::empty();
        }
        if !target.suppresses_default_press {
            self.adapter.click_default_button();
        }
        EventEffects::empty()
    }

    /// A key press anywhere in the document. Escape closes the dialog.
    pub fn handle_document_keydown(&mut self, event: KeyEvent) -> EventEffects {
        if event.key != Key::Escape {
            return EventEffects::empty();
        }
        if let Some(action) = self.config.escape_key_action.clone() {
            self.close(&action);
        }
        EventEffects::empty()
    }

    fn handle_animation_timer_end(&mut self) {
        self.animation = None;
        self.adapter.remove_class(DialogClass::Opening);
        self.adapter.remove_class(DialogClass::Closing);
    }

    fn layout_now(&mut self) {
        if self.config.auto_stack_buttons {
            self.detect_stacked_buttons();
        }
        self.detect_scrollable_content();
    }

    fn detect_stacked_buttons(&mut self) {
        // Measure natural positions with the class removed.
        self.adapter.remove_class(DialogClass::Stacked);
        let stacked = self.adapter.are_buttons_stacked();
        if stacked {
            self.adapter.add_class(DialogClass::Stacked);
        }
        if stacked != self.are_buttons_stacked {
            self.adapter.reverse_buttons();
            self.are_buttons_stacked = stacked;
        }
    }

    fn detect_scrollable_content(&mut self) {
        self.adapter.remove_class(DialogClass::Scrollable);
        if self.adapter.is_content_scrollable() {
            self.adapter.add_class(DialogClass::Scrollable);
        }
    }

    fn run(&mut self, task: DialogTask) {
        match task {
            DialogTask::OpenFrame => {
                self.animation = Some(self.scheduler.set_timeout(0, DialogTask::OpenShow));
            }
            DialogTask::OpenShow => {
                self.adapter.add_class(DialogClass::Open);
                self.adapter.add_body_class(DialogClass::ScrollLock);
                self.layout();
                self.animation = Some(
                    self.scheduler
                        .set_timeout(DIALOG_ANIMATION_OPEN_TIME_MS, DialogTask::OpenDone),
                );
            }
            DialogTask::OpenDone => {
                self.handle_animation_timer_end();
                self.phase = SurfacePhase::Open;
                let initial = self.adapter.initial_focus();
                self.adapter.trap_focus(initial.as_deref());
                self.adapter.notify_opened();
            }
            DialogTask::CloseDone(action) => {
                self.adapter.release_focus();
                self.handle_animation_timer_end();
                self.phase = SurfacePhase::Closed;
                self.adapter.notify_closed(&action);
            }
            DialogTask::Layout => {
                self.layout_frame = None;
                self.layout_now();
            }
        }
    }
}

impl<A: DialogAdapter> Foundation for DialogFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn init(&mut self) -> crate::Result<()> {
        if self.adapter.has_class(DialogClass::Stacked) {
            self.config.auto_stack_buttons = false;
        }
        Ok(())
    }

    fn destroy(&mut self) {
        self.close(DESTROY_ACTION);
        if self.scheduler.cancel_slot(&mut self.animation).is_some() {
            self.handle_animation_timer_end();
        }
        self.scheduler.clear();
        self.layout_frame = None;
    }

    fn advance(&mut self, now: Millis) {
        self.scheduler.advance_to(now);
        while let Some((_, task)) = self.scheduler.pop_due() {
            self.run(task);
        }
    }
}
