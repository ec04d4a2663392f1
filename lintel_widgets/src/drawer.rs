// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation drawer in its dismissible and modal variants.
//!
//! Unlike the menu surface and dialog, a drawer's transitions end when the host reports
//! the end of the CSS transition ([`DrawerFoundation::handle_transition_end`]) rather
//! than on a timer. The modal variant additionally traps focus while open and closes on
//! scrim clicks.

use lintel_schedule::{Millis, Scheduler, TaskId};

use crate::event::{EventEffects, Key, KeyEvent};
use crate::menu_surface::SurfacePhase;
use crate::{Foundation, FoundationError, Result};

class_names! {
    /// Classes applied to the drawer root.
    pub enum DrawerClass {
        /// Marks the drawer root.
        Root => "mdc-drawer",
        /// The dismissible variant.
        Dismissible => "mdc-drawer--dismissible",
        /// The modal variant.
        Modal => "mdc-drawer--modal",
        /// The drawer is shown.
        Open => "mdc-drawer--open",
        /// A transition is about to start.
        Animate => "mdc-drawer--animate",
        /// The open transition is running.
        Opening => "mdc-drawer--opening",
        /// The close transition is running.
        Closing => "mdc-drawer--closing",
    }
}

/// Which kind of drawer this is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawerVariant {
    /// Slides in alongside the content.
    #[default]
    Dismissible,
    /// Covers the content with a scrim and traps focus.
    Modal,
}

/// Environment operations a drawer needs.
pub trait DrawerAdapter {
    /// Adds a class to the root.
    fn add_class(&mut self, class: DrawerClass) {
        let _ = class;
    }

    /// Removes a class from the root.
    fn remove_class(&mut self, class: DrawerClass) {
        let _ = class;
    }

    /// Returns `true` if the root has `class`.
    fn has_class(&self, class: DrawerClass) -> bool {
        let _ = class;
        false
    }

    /// Remembers the element focused before opening.
    fn save_focus(&mut self) {}

    /// Returns focus to the remembered element if focus is inside the drawer.
    fn restore_focus(&mut self) {}

    /// Focuses the activated navigation item, if there is one.
    fn focus_active_navigation_item(&mut self) {}

    /// Confines focus to the drawer.
    fn trap_focus(&mut self) {}

    /// Releases the focus trap.
    fn release_focus(&mut self) {}

    /// The drawer finished opening.
    fn notify_open(&mut self) {}

    /// The drawer finished closing.
    fn notify_close(&mut self) {}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum DrawerTask {
    Frame,
    StartOpening,
}

/// Open/close lifecycle of a navigation drawer.
#[derive(Debug)]
pub struct DrawerFoundation<A> {
    adapter: A,
    variant: DrawerVariant,
    phase: SurfacePhase,
    animation: Option<TaskId>,
    scheduler: Scheduler<DrawerTask>,
}

impl<A: DrawerAdapter> DrawerFoundation<A> {
    /// Creates a closed drawer of the given variant.
    pub fn new(adapter: A, variant: DrawerVariant) -> Self {
        Self {
            adapter,
            variant,
            phase: SurfacePhase::Closed,
            animation: None,
            scheduler: Scheduler::new(),
        }
    }

    /// The drawer's variant.
    #[must_use]
    pub fn variant(&self) -> DrawerVariant {
        self.variant
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SurfacePhase {
        self.phase
    }

    /// Returns `true` once the open class is applied, including while animating.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != SurfacePhase::Closed
    }

    /// Opens the drawer. Ignored while open or mid-transition.
    pub fn open(&mut self) {
        if self.phase != SurfacePhase::Closed {
            return;
        }
        debug_event!(message = "drawer.open", variant = ?self.variant);
        self.phase = SurfacePhase::Opening;
        self.adapter.add_class(DrawerClass::Open);
        self.adapter.add_class(DrawerClass::Animate);
        self.scheduler.cancel_slot(&mut self.animation);
        self.animation = Some(self.scheduler.request_frame(DrawerTask::Frame));
        self.adapter.save_focus();
    }

    /// Closes the drawer. Ignored unless fully open.
    pub fn close(&mut self) {
        if self.phase != SurfacePhase::Open {
            return;
        }
        debug_event!(message = "drawer.close", variant = ?self.variant);
        self.phase = SurfacePhase::Closing;
        self.adapter.add_class(DrawerClass::Closing);
    }

    /// Escape closes the drawer.
    pub fn handle_keydown(&mut self, event: KeyEvent) -> EventEffects {
        if event.key == Key::Escape {
            self.close();
        }
        EventEffects::empty()
    }

    /// The scrim behind a modal drawer was clicked.
    pub fn handle_scrim_click(&mut self) {
        if self.variant == DrawerVariant::Modal {
            self.close();
        }
    }

    /// A CSS transition ended. Only transitions of the root itself complete a phase.
    pub fn handle_transition_end(&mut self, target_is_root: bool) {
        if !target_is_root {
            return;
        }
        match self.phase {
            SurfacePhase::Closing => {
                self.adapter.remove_class(DrawerClass::Open);
                self.phase = SurfacePhase::Closed;
                if self.variant == DrawerVariant::Modal {
                    self.adapter.release_focus();
                }
                self.adapter.restore_focus();
                self.adapter.notify_close();
            }
            SurfacePhase::Opening => {
                self.adapter.focus_active_navigation_item();
                self.phase = SurfacePhase::Open;
                if self.variant == DrawerVariant::Modal {
                    self.adapter.trap_focus();
                }
                self.adapter.notify_open();
            }
            SurfacePhase::Open | SurfacePhase::Closed => {}
        }
        self.adapter.remove_class(DrawerClass::Animate);
        self.adapter.remove_class(DrawerClass::Opening);
        self.adapter.remove_class(DrawerClass::Closing);
    }

    fn run(&mut self, task: DrawerTask) {
        match task {
            DrawerTask::Frame => {
                self.animation = Some(self.scheduler.set_timeout(0, DrawerTask::StartOpening));
            }
            DrawerTask::StartOpening => {
                self.animation = None;
                self.adapter.add_class(DrawerClass::Opening);
            }
        }
    }
}

impl<A: DrawerAdapter> Foundation for DrawerFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Checks that the root's variant class matches, and picks up an initially open drawer.
    fn init(&mut self) -> Result<()> {
        let class = match self.variant {
            DrawerVariant::Dismissible => DrawerClass::Dismissible,
            DrawerVariant::Modal => DrawerClass::Modal,
        };
        if !self.adapter.has_class(class) {
            warn_event!(message = "drawer.variant_mismatch", variant = ?self.variant);
            return Err(FoundationError::MissingStructure("drawer variant class"));
        }
        if self.adapter.has_class(DrawerClass::Open) {
            self.phase = SurfacePhase::Open;
        }
        Ok(())
    }

    fn destroy(&mut self) {
        self.scheduler.cancel_slot(&mut self.animation);
        self.scheduler.clear();
        if self.variant == DrawerVariant::Modal && self.phase != SurfacePhase::Closed {
            self.adapter.remove_class(DrawerClass::Open);
            self.adapter.release_focus();
            self.phase = SurfacePhase::Closed;
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

    #[derive(Debug, Default)]
    struct FakeDrawer {
        classes: Vec<DrawerClass>,
        log: CallLog,
    }

    impl DrawerAdapter for FakeDrawer {
        fn add_class(&mut self, class: DrawerClass) {
            self.log.push(format!("add {class}"));
            self.classes.push(class);
        }

        fn remove_class(&mut self, class: DrawerClass) {
            self.log.push(format!("remove {class}"));
            self.classes.retain(|c| *c != class);
        }

        fn has_class(&self, class: DrawerClass) -> bool {
            self.classes.contains(&class)
        }

        fn save_focus(&mut self) {
            self.log.push("save");
        }

        fn restore_focus(&mut self) {
            self.log.push("restore");
        }

        fn focus_active_navigation_item(&mut self) {
            self.log.push("focus nav");
        }

        fn trap_focus(&mut self) {
            self.log.push("trap");
        }

        fn release_focus(&mut self) {
            self.log.push("release");
        }

        fn notify_open(&mut self) {
            self.log.push("opened");
        }

        fn notify_close(&mut self) {
            self.log.push("closed");
        }
    }

    fn drawer(variant: DrawerVariant) -> DrawerFoundation<FakeDrawer> {
        let class = match variant {
            DrawerVariant::Dismissible => DrawerClass::Dismissible,
            DrawerVariant::Modal => DrawerClass::Modal,
        };
        let mut d = DrawerFoundation::new(
            FakeDrawer {
                classes: alloc::vec![class],
                ..FakeDrawer::default()
            },
            variant,
        );
        d.init().unwrap();
        d
    }

    #[test]
    fn init_rejects_wrong_variant() {
        let mut d = DrawerFoundation::new(FakeDrawer::default(), DrawerVariant::Modal);
        assert!(d.init().is_err());
    }

    #[test]
    fn modal_open_and_close_cycle() {
        let mut d = drawer(DrawerVariant::Modal);
        d.open();
        assert!(d.adapter().has_class(DrawerClass::Open));
        assert!(d.adapter().has_class(DrawerClass::Animate));
        d.advance(16);
        assert!(d.adapter().has_class(DrawerClass::Opening));

        d.handle_transition_end(false);
        assert_eq!(d.phase(), SurfacePhase::Opening);
        d.handle_transition_end(true);
        assert!(d.adapter().log.ordered("focus nav", "trap"));
        assert!(d.adapter().log.ordered("trap", "opened"));
        assert!(!d.adapter().has_class(DrawerClass::Animate));

        d.handle_scrim_click();
        assert!(d.adapter().has_class(DrawerClass::Closing));
        d.handle_transition_end(true);
        assert!(!d.adapter().has_class(DrawerClass::Open));
        assert!(d.adapter().log.ordered("release", "restore"));
        assert!(d.adapter().log.ordered("restore", "closed"));
        assert!(!d.is_open());
    }

    #[test]
    fn dismissible_ignores_scrim_and_closes_on_escape() {
        let mut d = drawer(DrawerVariant::Dismissible);
        d.open();
        d.handle_transition_end(true);
        d.handle_scrim_click();
        assert_eq!(d.phase(), SurfacePhase::Open);
        d.handle_keydown(KeyEvent::new(Key::Escape));
        assert_eq!(d.phase(), SurfacePhase::Closing);
        assert!(!d.adapter().log.contains("trap"));
    }

    #[test]
    fn redundant_transitions_are_ignored() {
        let mut d = drawer(DrawerVariant::Dismissible);
        d.close();
        assert!(d.adapter().log.calls().is_empty());
        d.open();
        d.open();
        assert_eq!(d.adapter().log.count("save"), 1);
        d.close();
        assert_eq!(d.phase(), SurfacePhase::Opening);
    }
}
