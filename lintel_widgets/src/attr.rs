// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute names the foundations read and write through their adapters.

/// Marks the current item in a set, with a token such as `page` as its value.
pub const ARIA_CURRENT: &str = "aria-current";
/// Selection state of an option or tab.
pub const ARIA_SELECTED: &str = "aria-selected";
/// Checked state of a checkbox, radio or switch.
pub const ARIA_CHECKED: &str = "aria-checked";
/// Disabled state.
pub const ARIA_DISABLED: &str = "aria-disabled";
/// Whether a popup owned by the element is shown.
pub const ARIA_EXPANDED: &str = "aria-expanded";
/// Hides an element from assistive technology.
pub const ARIA_HIDDEN: &str = "aria-hidden";
/// Validity of a form control.
pub const ARIA_INVALID: &str = "aria-invalid";
/// Whether a form control must be filled in.
pub const ARIA_REQUIRED: &str = "aria-required";
/// Accessible name.
pub const ARIA_LABEL: &str = "aria-label";
/// Pressed state of a toggle button.
pub const ARIA_PRESSED: &str = "aria-pressed";
/// Current value of a range such as a progress bar.
pub const ARIA_VALUENOW: &str = "aria-valuenow";
/// Sequential focus order.
pub const TABINDEX: &str = "tabindex";
/// Semantic role.
pub const ROLE: &str = "role";

/// Formats a boolean the way attribute values spell it.
#[must_use]
pub(crate) const fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
