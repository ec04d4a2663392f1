// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lintel Widgets: headless interaction logic for common UI widgets.
//!
//! ## Overview
//!
//! Each widget is split in two. A *foundation* holds all mutable interaction state and
//! the algorithms that drive it: open/close lifecycles, focus movement, keyboard
//! navigation, typeahead, selection, and animation sequencing. An *adapter* is a trait
//! the foundation calls for everything that touches the host: reading and writing
//! classes and attributes, measuring geometry, moving focus, and emitting notifications.
//! A binding for a concrete toolkit implements the adapter and forwards host events to
//! the foundation's handler methods.
//!
//! Foundations never reach into host state on their own, so the same logic can run
//! against a DOM, a native toolkit, or a recording fake in a unit test.
//!
//! ## Lifecycle
//!
//! Every foundation implements [`Foundation`]:
//!
//! - [`Foundation::init`] reads initial state and fails with
//!   [`FoundationError::MissingStructure`] when required structure is absent.
//! - Handler methods (`handle_keydown`, `handle_click`, ...) take normalized input such
//!   as [`KeyEvent`] and return [`EventEffects`] instead of mutating a host event.
//! - [`Foundation::advance`] runs deferred work. Animation frames and timers are queued
//!   on a [`lintel_schedule::Scheduler`] owned by the foundation, so the host decides
//!   when time passes.
//! - [`Foundation::destroy`] cancels everything still pending.
//!
//! ## Widgets
//!
//! - [`list`]: selection modes, keyboard navigation, and typeahead.
//! - [`menu_surface`] and [`menu`]: anchored popup positioning and menu selection groups.
//! - [`dialog`] and [`drawer`]: modal and dismissible surfaces with timed or
//!   transition-driven animation.
//! - [`select`]: a combobox layered on a menu, with [`helper_text`] and [`icon`] parts.
//! - [`text_field`]: label, validity, and value logic with a [`character_counter`].
//! - [`chip`] and [`chip_set`]: selectable, removable chips.
//! - [`checkbox`], [`radio`], [`switch`], and [`icon_button`]: toggle controls.
//! - [`tooltip`], [`linear_progress`], and [`tab`].
//!
//! Every adapter method has a default body, and [`NoopAdapter`] implements all of them.
//!
//! ## Example
//!
//! ```rust
//! use lintel_widgets::Foundation;
//! use lintel_widgets::switch::{SwitchAdapter, SwitchClass, SwitchFoundation};
//!
//! #[derive(Default)]
//! struct Host {
//!     checked: bool,
//! }
//!
//! impl SwitchAdapter for Host {
//!     fn add_class(&mut self, class: SwitchClass) {
//!         if class == SwitchClass::Checked {
//!             self.checked = true;
//!         }
//!     }
//! }
//!
//! let mut switch = SwitchFoundation::new(Host::default());
//! switch.set_checked(true);
//! assert!(switch.adapter().checked);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

mod adapter;
mod error;
mod foundation;

pub mod attr;
pub mod character_counter;
pub mod checkbox;
pub mod chip;
pub mod chip_set;
pub mod dialog;
pub mod drawer;
pub mod event;
pub mod helper_text;
pub mod icon;
pub mod icon_button;
pub mod linear_progress;
pub mod list;
pub mod menu;
pub mod menu_surface;
pub mod radio;
pub mod select;
pub mod switch;
pub mod tab;
pub mod text_field;
pub mod tooltip;

#[cfg(test)]
mod testing;

pub use adapter::NoopAdapter;
pub use error::{FoundationError, Result};
pub use event::{EventEffects, Interaction, Key, KeyEvent, Modifiers};
pub use foundation::Foundation;
