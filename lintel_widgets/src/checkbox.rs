// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox with checked, unchecked and indeterminate states, and animated transitions.
//!
//! The native control owns the state. The binding calls
//! [`CheckboxFoundation::handle_change`] whenever the control's checked or
//! indeterminate property changes, and the foundation picks the animation class for
//! the transition. The class is removed [`ANIM_END_LATCH_MS`] after the animation ends.

use lintel_schedule::{Millis, Scheduler, TaskId};

use crate::Foundation;
use crate::attr;

/// Delay between the end of a transition animation and removal of its class.
pub const ANIM_END_LATCH_MS: Millis = 250;
/// `aria-checked` value of an indeterminate checkbox.
pub const ARIA_CHECKED_INDETERMINATE_VALUE: &str = "mixed";

class_names! {
    /// Classes applied to the checkbox root.
    pub enum CheckboxClass {
        /// The foundation is attached.
        Upgraded => "mdc-checkbox--upgraded",
        /// The checkbox is checked or indeterminate.
        Selected => "mdc-checkbox--selected",
        /// The checkbox ignores input.
        Disabled => "mdc-checkbox--disabled",
        /// Animates unchecked to checked.
        AnimUncheckedChecked => "mdc-checkbox--anim-unchecked-checked",
        /// Animates unchecked to indeterminate.
        AnimUncheckedIndeterminate => "mdc-checkbox--anim-unchecked-indeterminate",
        /// Animates checked to unchecked.
        AnimCheckedUnchecked => "mdc-checkbox--anim-checked-unchecked",
        /// Animates checked to indeterminate.
        AnimCheckedIndeterminate => "mdc-checkbox--anim-checked-indeterminate",
        /// Animates indeterminate to checked.
        AnimIndeterminateChecked => "mdc-checkbox--anim-indeterminate-checked",
        /// Animates indeterminate to unchecked.
        AnimIndeterminateUnchecked => "mdc-checkbox--anim-indeterminate-unchecked",
    }
}

/// Visual state of a checkbox.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CheckState {
    /// Not yet read from the native control.
    #[default]
    Init,
    /// Checked.
    Checked,
    /// Unchecked.
    Unchecked,
    /// Indeterminate, regardless of the checked property.
    Indeterminate,
}

/// Environment operations a checkbox needs.
pub trait CheckboxAdapter {
    /// Adds a class to the root.
    fn add_class(&mut self, class: CheckboxClass) {
        let _ = class;
    }

    /// Removes a class from the root.
    fn remove_class(&mut self, class: CheckboxClass) {
        let _ = class;
    }

    /// Forces a synchronous layout so a removed animation class restarts when re-added.
    fn force_layout(&mut self) {}

    /// Returns `true` if the native control exists.
    fn has_native_control(&self) -> bool {
        false
    }

    /// Returns `true` if the checkbox is attached to a rendered tree.
    fn is_attached(&self) -> bool {
        false
    }

    /// Checked property of the native control.
    fn is_checked(&self) -> bool {
        false
    }

    /// Indeterminate property of the native control.
    fn is_indeterminate(&self) -> bool {
        false
    }

    /// Sets an attribute on the native control.
    fn set_native_control_attr(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }

    /// Removes an attribute from the native control.
    fn remove_native_control_attr(&mut self, name: &str) {
        let _ = name;
    }

    /// Enables or disables the native control.
    fn set_native_control_disabled(&mut self, disabled: bool) {
        let _ = disabled;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CheckboxTask {
    ClearAnimation,
}

/// Transition animations and ARIA state of a checkbox.
#[derive(Debug)]
pub struct CheckboxFoundation<A> {
    adapter: A,
    state: CheckState,
    animation: Option<CheckboxClass>,
    animation_end_enabled: bool,
    latch: Option<TaskId>,
    scheduler: Scheduler<CheckboxTask>,
}

impl<A: CheckboxAdapter> CheckboxFoundation<A> {
    /// Creates the foundation. Call [`Foundation::init`] before use.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            state: CheckState::Init,
            animation: None,
            animation_end_enabled: false,
            latch: None,
            scheduler: Scheduler::new(),
        }
    }

    /// The state last read from the native control.
    #[must_use]
    pub fn check_state(&self) -> CheckState {
        self.state
    }

    /// The transition animation class currently applied, if any.
    #[must_use]
    pub fn animation_class(&self) -> Option<CheckboxClass> {
        self.animation
    }

    /// Enables or disables the checkbox.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.adapter.set_native_control_disabled(disabled);
        if disabled {
            self.adapter.add_class(CheckboxClass::Disabled);
        } else {
            self.adapter.remove_class(CheckboxClass::Disabled);
        }
    }

    /// The transition animation ended. Its class is removed after a short latch.
    pub fn handle_animation_end(&mut self) {
        if !self.animation_end_enabled {
            return;
        }
        self.scheduler.cancel_slot(&mut self.latch);
        self.latch = Some(
            self.scheduler
                .set_timeout(ANIM_END_LATCH_MS, CheckboxTask::ClearAnimation),
        );
    }

    /// The native control's checked or indeterminate property changed.
    pub fn handle_change(&mut self) {
        if !self.adapter.has_native_control() {
            return;
        }
        let old = self.state;
        let new = self.read_state();
        if old == new {
            return;
        }
        self.update_aria_checked();

        if new == CheckState::Unchecked {
            self.adapter.remove_class(CheckboxClass::Selected);
        } else {
            self.adapter.add_class(CheckboxClass::Selected);
        }

        // A previous animation may still be running.
        if let Some(previous) = self.animation.take() {
            self.scheduler.cancel_slot(&mut self.latch);
            self.adapter.force_layout();
            self.adapter.remove_class(previous);
        }

        self.animation = transition_class(old, new);
        self.state = new;
        debug_event!(message = "checkbox.change", from = ?old, to = ?new);

        match self.animation {
            Some(class) if self.adapter.is_attached() => {
                self.adapter.add_class(class);
                self.animation_end_enabled = true;
            }
            _ => {}
        }
    }

    fn read_state(&self) -> CheckState {
        if self.adapter.is_indeterminate() {
            CheckState::Indeterminate
        } else if self.adapter.is_checked() {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    fn update_aria_checked(&mut self) {
        if self.adapter.is_indeterminate() {
            self.adapter
                .set_native_control_attr(attr::ARIA_CHECKED, ARIA_CHECKED_INDETERMINATE_VALUE);
        } else {
            self.adapter.remove_native_control_attr(attr::ARIA_CHECKED);
        }
    }

    fn run(&mut self, task: CheckboxTask) {
        match task {
            CheckboxTask::ClearAnimation => {
                self.latch = None;
                if let Some(class) = self.animation {
                    self.adapter.remove_class(class);
                }
                self.animation_end_enabled = false;
            }
        }
    }
}

/// Animation class for a state change. Leaving the initial state behaves like
/// leaving indeterminate, except that settling on unchecked does not animate.
fn transition_class(old: CheckState, new: CheckState) -> Option<CheckboxClass> {
    use CheckState::{Checked, Indeterminate, Init, Unchecked};
    let class = match (old, new) {
        (Init, Unchecked) => return None,
        (Unchecked, Checked) => CheckboxClass::AnimUncheckedChecked,
        (Unchecked, _) => CheckboxClass::AnimUncheckedIndeterminate,
        (Checked, Unchecked) => CheckboxClass::AnimCheckedUnchecked,
        (Checked, _) => CheckboxClass::AnimCheckedIndeterminate,
        (Init | Indeterminate, Checked) => CheckboxClass::AnimIndeterminateChecked,
        (Init | Indeterminate, _) => CheckboxClass::AnimIndeterminateUnchecked,
    };
    Some(class)
}

impl<A: CheckboxAdapter> Foundation for CheckboxFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn init(&mut self) -> crate::Result<()> {
        self.state = self.read_state();
        self.update_aria_checked();
        self.adapter.add_class(CheckboxClass::Upgraded);
        Ok(())
    }

    fn destroy(&mut self) {
        self.scheduler.cancel_slot(&mut self.latch);
        self.scheduler.clear();
    }

    fn advance(&mut self, now: Millis) {
        self.scheduler.advance_to(now);
        while let Some((_, task)) = self.scheduler.pop_due() {
            self.run(task);
        }
    }
}
