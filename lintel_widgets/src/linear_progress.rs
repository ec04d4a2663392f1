// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear progress bar with determinate and indeterminate modes.
//!
//! Progress and buffer are fractions in `0.0..=1.0`. In determinate mode they scale the
//! primary bar and size the buffer bar; in indeterminate mode both bars are full and an
//! animation runs instead, while the stored values wait for the next switch back.

use alloc::format;

use crate::Foundation;
use crate::attr;

/// Style property the primary bar is scaled through.
pub const TRANSFORM: &str = "transform";
/// Style property the buffer bar is sized through.
pub const FLEX_BASIS: &str = "flex-basis";

class_names! {
    /// Classes applied to the progress bar root.
    pub enum LinearProgressClass {
        /// The bar is hidden.
        Closed => "mdc-linear-progress--closed",
        /// The bar animates without a known value.
        Indeterminate => "mdc-linear-progress--indeterminate",
        /// The bar fills from the end edge.
        Reversed => "mdc-linear-progress--reversed",
    }
}

/// Environment operations a linear progress bar needs.
pub trait LinearProgressAdapter {
    /// Adds a class to the root.
    fn add_class(&mut self, class: LinearProgressClass) {
        let _ = class;
    }

    /// Removes a class from the root.
    fn remove_class(&mut self, class: LinearProgressClass) {
        let _ = class;
    }

    /// Returns `true` if the root has `class`.
    fn has_class(&self, class: LinearProgressClass) -> bool {
        let _ = class;
        false
    }

    /// Forces a synchronous layout so a removed animation class restarts when re-added.
    fn force_layout(&mut self) {}

    /// Sets an attribute on the root.
    fn set_attribute(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }

    /// Removes an attribute from the root.
    fn remove_attribute(&mut self, name: &str) {
        let _ = name;
    }

    /// Sets a style property on the primary bar.
    fn set_primary_bar_style(&mut self, property: &str, value: &str) {
        let _ = (property, value);
    }

    /// Sets a style property on the buffer bar.
    fn set_buffer_bar_style(&mut self, property: &str, value: &str) {
        let _ = (property, value);
    }
}

/// Mode, value, and visibility of a linear progress bar.
#[derive(Debug)]
pub struct LinearProgressFoundation<A> {
    adapter: A,
    is_determinate: bool,
    is_reversed: bool,
    progress: f64,
    buffer: f64,
}

impl<A: LinearProgressAdapter> LinearProgressFoundation<A> {
    /// Creates a determinate bar at zero progress with a full buffer.
    ///
    /// [`Foundation::init`] reads the mode and direction from the root's classes.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            is_determinate: true,
            is_reversed: false,
            progress: 0.0,
            buffer: 1.0,
        }
    }

    /// Returns `true` in determinate mode.
    #[must_use]
    pub fn is_determinate(&self) -> bool {
        self.is_determinate
    }

    /// Returns `true` if the bar fills from the end edge.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.is_reversed
    }

    /// Last progress value set.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Last buffer value set.
    #[must_use]
    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    /// Switches between determinate and indeterminate mode.
    pub fn set_determinate(&mut self, is_determinate: bool) {
        self.is_determinate = is_determinate;
        if is_determinate {
            self.adapter.remove_class(LinearProgressClass::Indeterminate);
            self.set_aria_valuenow(self.progress);
            self.set_primary_bar_progress(self.progress);
            self.set_buffer_bar_progress(self.buffer);
            return;
        }

        if self.is_reversed {
            // Restart the translate animation alongside the scale animation below.
            self.restart(LinearProgressClass::Reversed);
        }
        self.adapter.add_class(LinearProgressClass::Indeterminate);
        self.adapter.remove_attribute(attr::ARIA_VALUENOW);
        self.set_primary_bar_progress(1.0);
        self.set_buffer_bar_progress(1.0);
    }

    /// Sets progress. Only determinate bars show it right away.
    pub fn set_progress(&mut self, value: f64) {
        self.progress = value;
        if self.is_determinate {
            self.set_primary_bar_progress(value);
            self.set_aria_valuenow(value);
        }
    }

    /// Sets the buffer. Only determinate bars show it right away.
    pub fn set_buffer(&mut self, value: f64) {
        self.buffer = value;
        if self.is_determinate {
            self.set_buffer_bar_progress(value);
        }
    }

    /// Fills from the end edge instead of the start edge.
    pub fn set_reverse(&mut self, is_reversed: bool) {
        self.is_reversed = is_reversed;
        if !self.is_determinate {
            self.restart(LinearProgressClass::Indeterminate);
        }
        if is_reversed {
            self.adapter.add_class(LinearProgressClass::Reversed);
        } else {
            self.adapter.remove_class(LinearProgressClass::Reversed);
        }
    }

    /// Shows the bar.
    pub fn open(&mut self) {
        self.adapter.remove_class(LinearProgressClass::Closed);
    }

    /// Hides the bar.
    pub fn close(&mut self) {
        self.adapter.add_class(LinearProgressClass::Closed);
    }

    fn restart(&mut self, class: LinearProgressClass) {
        self.adapter.remove_class(class);
        self.adapter.force_layout();
        self.adapter.add_class(class);
    }

    fn set_aria_valuenow(&mut self, value: f64) {
        self.adapter
            .set_attribute(attr::ARIA_VALUENOW, &format!("{value}"));
    }

    fn set_primary_bar_progress(&mut self, value: f64) {
        self.adapter
            .set_primary_bar_style(TRANSFORM, &format!("scaleX({value})"));
    }

    fn set_buffer_bar_progress(&mut self, value: f64) {
        self.adapter
            .set_buffer_bar_style(FLEX_BASIS, &format!("{}%", value * 100.0));
    }
}

impl<A: LinearProgressAdapter> Foundation for LinearProgressFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn init(&mut self) -> crate::Result<()> {
        self.is_determinate = !self.adapter.has_class(LinearProgressClass::Indeterminate);
        self.is_reversed = self.adapter.has_class(LinearProgressClass::Reversed);
        self.progress = 0.0;
        self.buffer = 1.0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::testing::CallLog;

    #[derive(Debug, Default)]
    struct FakeBar {
        classes: Vec<LinearProgressClass>,
        log: CallLog,
    }

    impl LinearProgressAdapter for FakeBar {
        fn add_class(&mut self, class: LinearProgressClass) {
            self.log.push(format!("add {class}"));
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }

        fn remove_class(&mut self, class: LinearProgressClass) {
            self.log.push(format!("remove {class}"));
            self.classes.retain(|c| *c != class);
        }

        fn has_class(&self, class: LinearProgressClass) -> bool {
            self.classes.contains(&class)
        }

        fn force_layout(&mut self) {
            self.log.push("layout");
        }

        fn set_attribute(&mut self, name: &str, value: &str) {
            self.log.push(format!("{name}={value}"));
        }

        fn remove_attribute(&mut self, name: &str) {
            self.log.push(format!("-{name}"));
        }

        fn set_primary_bar_style(&mut self, property: &str, value: &str) {
            self.log.push(format!("primary {property}: {value}"));
        }

        fn set_buffer_bar_style(&mut self, property: &str, value: &str) {
            self.log.push(format!("buffer {property}: {value}"));
        }
    }

    fn bar_with(classes: &[LinearProgressClass]) -> LinearProgressFoundation<FakeBar> {
        let mut bar = LinearProgressFoundation::new(FakeBar {
            classes: classes.to_vec(),
            log: CallLog::default(),
        });
        assert_eq!(bar.init(), Ok(()));
        bar
    }

    #[test]
    fn init_reads_mode_from_classes() {
        let bar = bar_with(&[
            LinearProgressClass::Indeterminate,
            LinearProgressClass::Reversed,
        ]);
        assert!(!bar.is_determinate());
        assert!(bar.is_reversed());
        assert_eq!(bar.progress(), 0.0);
        assert_eq!(bar.buffer(), 1.0);
    }

    #[test]
    fn determinate_progress_scales_the_primary_bar() {
        let mut bar = bar_with(&[]);
        bar.set_progress(0.5);
        bar.set_buffer(0.75);
        assert_eq!(
            bar.adapter().log.calls(),
            [
                "primary transform: scaleX(0.5)",
                "aria-valuenow=0.5",
                "buffer flex-basis: 75%",
            ]
        );
    }

    #[test]
    fn indeterminate_stores_values_for_later() {
        let mut bar = bar_with(&[]);
        bar.set_determinate(false);
        assert!(bar.adapter().log.contains("-aria-valuenow"));
        assert!(bar.adapter().log.contains("primary transform: scaleX(1)"));
        assert!(bar.adapter().log.contains("buffer flex-basis: 100%"));

        bar.adapter_mut().log.clear();
        bar.set_progress(0.25);
        bar.set_buffer(0.5);
        assert!(bar.adapter().log.calls().is_empty());

        bar.set_determinate(true);
        assert_eq!(
            bar.adapter().log.calls(),
            [
                "remove mdc-linear-progress--indeterminate",
                "aria-valuenow=0.25",
                "primary transform: scaleX(0.25)",
                "buffer flex-basis: 50%",
            ]
        );
    }

    #[test]
    fn reversing_an_indeterminate_bar_restarts_its_animation() {
        let mut bar = bar_with(&[LinearProgressClass::Indeterminate]);
        bar.set_reverse(true);
        assert_eq!(
            bar.adapter().log.calls(),
            [
                "remove mdc-linear-progress--indeterminate",
                "layout",
                "add mdc-linear-progress--indeterminate",
                "add mdc-linear-progress--reversed",
            ]
        );

        bar.adapter_mut().log.clear();
        bar.set_determinate(true);
        bar.set_determinate(false);
        assert!(bar.adapter().log.ordered("layout", "add mdc-linear-progress--reversed"));
    }

    #[test]
    fn open_and_close_toggle_the_closed_class() {
        let mut bar = bar_with(&[]);
        bar.close();
        assert!(bar.adapter().has_class(LinearProgressClass::Closed));
        bar.open();
        assert!(!bar.adapter().has_class(LinearProgressClass::Closed));
    }
}
