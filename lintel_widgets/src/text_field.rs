// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text field: focus styling, floating label, validity and its sub-foundations.
//!
//! The field owns optional helper text, character counter, and leading and trailing icon
//! foundations, and keeps them in sync with its own state. The native input is read and
//! written through [`TextFieldAdapter`].
//!
//! A text field with a character counter requires a `maxlength` on its input;
//! [`Foundation::init`] rejects it otherwise.

use alloc::string::String;

use crate::adapter::NoopAdapter;
use crate::character_counter::{CharacterCounterAdapter, CharacterCounterFoundation};
use crate::helper_text::{HelperTextAdapter, HelperTextFoundation};
use crate::icon::{IconAdapter, IconFoundation};
use crate::{Foundation, FoundationError, Result};

/// Scale applied to the label width when notching the outline for a floating label.
pub const LABEL_SCALE: f64 = 0.75;

/// Input types whose native UI always shows a value, so the label always floats.
pub const ALWAYS_FLOAT_TYPES: [&str; 7] = [
    "color",
    "date",
    "datetime-local",
    "month",
    "range",
    "time",
    "week",
];

/// Input attributes whose change can alter validity.
pub const VALIDATION_ATTRIBUTES: [&str; 7] = [
    "pattern",
    "min",
    "max",
    "required",
    "step",
    "minlength",
    "maxlength",
];

class_names! {
    /// Classes applied to the text field root.
    pub enum TextFieldClass {
        /// The field ignores input.
        Disabled => "mdc-text-field--disabled",
        /// The input holds focus.
        Focused => "mdc-text-field--focused",
        /// The field failed validation.
        Invalid => "mdc-text-field--invalid",
        /// The label floats above the input.
        LabelFloating => "mdc-text-field--label-floating",
    }
}

/// Environment operations a text field needs.
pub trait TextFieldAdapter {
    /// Adds a class to the root.
    fn add_class(&mut self, class: TextFieldClass) {
        let _ = class;
    }

    /// Removes a class from the root.
    fn remove_class(&mut self, class: TextFieldClass) {
        let _ = class;
    }

    /// Returns `true` if the root has `class`.
    fn has_class(&self, class: TextFieldClass) -> bool {
        let _ = class;
        false
    }

    /// Current value of the input.
    fn input_value(&self) -> String {
        String::new()
    }

    /// Writes the input's value.
    fn set_input_value(&mut self, value: &str) {
        let _ = value;
    }

    /// The input's `type`.
    fn input_type(&self) -> String {
        String::from("text")
    }

    /// Returns `true` if the input is disabled.
    fn is_input_disabled(&self) -> bool {
        false
    }

    /// Enables or disables the input.
    fn set_input_disabled(&mut self, disabled: bool) {
        let _ = disabled;
    }

    /// Returns `true` if the input is required.
    fn is_input_required(&self) -> bool {
        false
    }

    /// The input's `maxlength`, if set.
    fn input_max_length(&self) -> Option<usize> {
        None
    }

    /// Returns `true` if the input holds text it cannot convert, such as a partial number.
    fn is_bad_input(&self) -> bool {
        false
    }

    /// Result of the input's native constraint validation.
    fn is_native_input_valid(&self) -> bool {
        true
    }

    /// Returns `true` if the input holds focus.
    fn is_focused(&self) -> bool {
        false
    }

    /// Starts the line ripple's activation animation.
    fn activate_line_ripple(&mut self) {}

    /// Reverses the line ripple.
    fn deactivate_line_ripple(&mut self) {}

    /// Moves the line ripple's origin to `normalized_x`.
    fn set_line_ripple_transform_origin(&mut self, normalized_x: f64) {
        let _ = normalized_x;
    }

    /// Shakes or stops shaking the label.
    fn shake_label(&mut self, shake: bool) {
        let _ = shake;
    }

    /// Floats or docks the label.
    fn float_label(&mut self, float: bool) {
        let _ = float;
    }

    /// Marks the label as belonging to a required field.
    fn set_label_required(&mut self, required: bool) {
        let _ = required;
    }

    /// Returns `true` if the field has a label.
    fn has_label(&self) -> bool {
        false
    }

    /// Unscaled width of the label.
    fn label_width(&self) -> f64 {
        0.0
    }

    /// Returns `true` if the field has a notched outline.
    fn has_outline(&self) -> bool {
        false
    }

    /// Opens the outline notch to `width`.
    fn notch_outline(&mut self, width: f64) {
        let _ = width;
    }

    /// Closes the outline notch.
    fn close_outline(&mut self) {}
}

/// Sub-foundations owned by a text field.
#[derive(Debug)]
pub struct TextFieldParts<H = NoopAdapter, C = NoopAdapter, I = NoopAdapter> {
    /// Helper text under the field.
    pub helper_text: Option<HelperTextFoundation<H>>,
    /// Character counter.
    pub character_counter: Option<CharacterCounterFoundation<C>>,
    /// Icon before the input.
    pub leading_icon: Option<IconFoundation<I>>,
    /// Icon after the input.
    pub trailing_icon: Option<IconFoundation<I>>,
}

impl<H, C, I> Default for TextFieldParts<H, C, I> {
    fn default() -> Self {
        Self {
            helper_text: None,
            character_counter: None,
            leading_icon: None,
            trailing_icon: None,
        }
    }
}

/// Focus, label, validity and value logic for a text field.
#[derive(Debug)]
pub struct TextFieldFoundation<A, H = NoopAdapter, C = NoopAdapter, I = NoopAdapter> {
    adapter: A,
    parts: TextFieldParts<H, C, I>,
    is_focused: bool,
    received_user_input: bool,
    is_valid: bool,
    use_native_validation: bool,
}

impl<A: TextFieldAdapter> TextFieldFoundation<A> {
    /// Creates a text field without sub-foundations.
    pub fn new(adapter: A) -> Self {
        Self::with_parts(adapter, TextFieldParts::default())
    }
}

impl<A, H, C, I> TextFieldFoundation<A, H, C, I>
where
    A: TextFieldAdapter,
    H: HelperTextAdapter,
    C: CharacterCounterAdapter,
    I: IconAdapter,
{
    /// Creates a text field owning the given sub-foundations.
    pub fn with_parts(adapter: A, parts: TextFieldParts<H, C, I>) -> Self {
        Self {
            adapter,
            parts,
            is_focused: false,
            received_user_input: false,
            is_valid: true,
            use_native_validation: true,
        }
    }

    /// The owned sub-foundations.
    #[must_use]
    pub fn parts(&self) -> &TextFieldParts<H, C, I> {
        &self.parts
    }

    /// Returns `true` while the input holds focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// The label floats when the input type always shows a value, the field is focused,
    /// has a value, or holds unconvertible input.
    #[must_use]
    pub fn should_float(&self) -> bool {
        let input_type = self.adapter.input_type();
        ALWAYS_FLOAT_TYPES.contains(&input_type.as_str())
            || self.is_focused
            || !self.adapter.input_value().is_empty()
            || self.adapter.is_bad_input()
    }

    /// The label shakes when an unfocused field holds an invalid value.
    #[must_use]
    pub fn should_shake(&self) -> bool {
        !self.is_focused && !self.is_valid() && !self.adapter.input_value().is_empty()
    }

    /// A click or key press anywhere in the field.
    pub fn handle_text_field_interaction(&mut self) {
        if self.adapter.is_input_disabled() {
            return;
        }
        self.received_user_input = true;
    }

    /// Attributes of the input changed.
    pub fn handle_validation_attribute_change(&mut self, attributes: &[&str]) {
        if attributes.iter().any(|a| VALIDATION_ATTRIBUTES.contains(a)) {
            self.style_validity(true);
            let required = self.adapter.is_input_required();
            self.adapter.set_label_required(required);
        }
        if attributes.contains(&"maxlength") {
            self.update_character_counter();
        }
    }

    /// Opens or closes the outline notch for a floating label.
    pub fn notch_outline(&mut self, open_notch: bool) {
        if !self.adapter.has_outline() {
            return;
        }
        if open_notch {
            let width = self.adapter.label_width() * LABEL_SCALE;
            self.adapter.notch_outline(width);
        } else {
            self.adapter.close_outline();
        }
    }

    /// The input gained focus.
    pub fn activate_focus(&mut self) {
        self.is_focused = true;
        self.style_focused(true);
        self.adapter.activate_line_ripple();
        self.style_label();
        if let Some(helper) = &mut self.parts.helper_text {
            helper.show_to_screen_reader();
        }
    }

    /// A pointer went down on the input at horizontal offset `normalized_x`.
    pub fn set_transform_origin(&mut self, normalized_x: f64) {
        self.adapter.set_line_ripple_transform_origin(normalized_x);
    }

    /// The input's value changed.
    pub fn handle_input(&mut self) {
        self.auto_complete_focus();
        self.update_character_counter();
    }

    /// Shows focus styling for a value that changed without user input, such as autofill.
    pub fn auto_complete_focus(&mut self) {
        if !self.received_user_input {
            self.activate_focus();
        }
    }

    /// The input lost focus.
    pub fn deactivate_focus(&mut self) {
        self.is_focused = false;
        self.adapter.deactivate_line_ripple();
        let valid = self.is_valid();
        self.style_validity(valid);
        self.style_focused(false);
        self.style_label();
        if !self.should_float() {
            self.received_user_input = false;
        }
    }

    /// Current value of the input.
    #[must_use]
    pub fn value(&self) -> String {
        self.adapter.input_value()
    }

    /// Writes the value and refreshes counter, validity and label.
    pub fn set_value(&mut self, value: &str) {
        if self.adapter.input_value() != value {
            self.adapter.set_input_value(value);
        }
        self.set_character_counter(value.chars().count());
        let valid = self.is_valid();
        self.style_validity(valid);
        self.style_label();
    }

    /// Custom validity if native validation is off, otherwise the native result.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.use_native_validation {
            self.adapter.is_native_input_valid()
        } else {
            self.is_valid
        }
    }

    /// Sets the custom validity and styles the field accordingly.
    pub fn set_valid(&mut self, valid: bool) {
        self.is_valid = valid;
        self.style_validity(valid);
        let shake = !valid && !self.is_focused && !self.adapter.input_value().is_empty();
        if self.adapter.has_label() {
            self.adapter.shake_label(shake);
        }
    }

    /// Chooses between native validation and the custom validity from
    /// [`set_valid`](Self::set_valid).
    pub fn set_use_native_validation(&mut self, use_native: bool) {
        self.use_native_validation = use_native;
    }

    /// Returns `true` if the input is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.adapter.is_input_disabled()
    }

    /// Disables or enables the input and its icons.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.adapter.set_input_disabled(disabled);
        if disabled {
            self.adapter.add_class(TextFieldClass::Disabled);
            self.adapter.remove_class(TextFieldClass::Invalid);
        } else {
            self.adapter.remove_class(TextFieldClass::Disabled);
        }
        for icon in [&mut self.parts.leading_icon, &mut self.parts.trailing_icon]
            .into_iter()
            .flatten()
        {
            icon.set_disabled(disabled);
        }
    }

    /// Replaces the helper text content.
    pub fn set_helper_text_content(&mut self, content: &str) {
        if let Some(helper) = &mut self.parts.helper_text {
            helper.set_content(content);
        }
    }

    /// Sets the leading icon's accessible name.
    pub fn set_leading_icon_aria_label(&mut self, label: &str) {
        if let Some(icon) = &mut self.parts.leading_icon {
            icon.set_aria_label(label);
        }
    }

    /// Replaces the leading icon's content.
    pub fn set_leading_icon_content(&mut self, content: &str) {
        if let Some(icon) = &mut self.parts.leading_icon {
            icon.set_content(content);
        }
    }

    /// Sets the trailing icon's accessible name.
    pub fn set_trailing_icon_aria_label(&mut self, label: &str) {
        if let Some(icon) = &mut self.parts.trailing_icon {
            icon.set_aria_label(label);
        }
    }

    /// Replaces the trailing icon's content.
    pub fn set_trailing_icon_content(&mut self, content: &str) {
        if let Some(icon) = &mut self.parts.trailing_icon {
            icon.set_content(content);
        }
    }

    fn update_character_counter(&mut self) {
        let length = self.adapter.input_value().chars().count();
        self.set_character_counter(length);
    }

    fn set_character_counter(&mut self, current_length: usize) {
        let Some(counter) = &mut self.parts.character_counter else {
            return;
        };
        match self.adapter.input_max_length() {
            Some(max_length) => counter.set_counter_value(current_length, max_length),
            None => warn_event!(message = "text_field.counter_without_maxlength"),
        }
    }

    fn style_label(&mut self) {
        if !self.adapter.has_label() {
            return;
        }
        let float = self.should_float();
        self.notch_outline(float);
        self.adapter.float_label(float);
        self.style_floating(float);
        let shake = self.should_shake();
        self.adapter.shake_label(shake);
    }

    fn style_validity(&mut self, valid: bool) {
        if valid {
            self.adapter.remove_class(TextFieldClass::Invalid);
        } else {
            self.adapter.add_class(TextFieldClass::Invalid);
        }
        if let Some(helper) = &mut self.parts.helper_text {
            helper.set_validity(valid);
        }
    }

    fn style_focused(&mut self, focused: bool) {
        if focused {
            self.adapter.add_class(TextFieldClass::Focused);
        } else {
            self.adapter.remove_class(TextFieldClass::Focused);
        }
    }

    fn style_floating(&mut self, floating: bool) {
        if floating {
            self.adapter.add_class(TextFieldClass::LabelFloating);
        } else {
            self.adapter.remove_class(TextFieldClass::LabelFloating);
        }
    }
}

impl<A, H, C, I> Foundation for TextFieldFoundation<A, H, C, I>
where
    A: TextFieldAdapter,
    H: HelperTextAdapter,
    C: CharacterCounterAdapter,
    I: IconAdapter,
{
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn init(&mut self) -> Result<()> {
        if self.parts.character_counter.is_some() && self.adapter.input_max_length().is_none() {
            warn_event!(message = "text_field.counter_without_maxlength");
            return Err(FoundationError::MissingStructure(
                "maxlength on a text field with a character counter",
            ));
        }
        for icon in [&mut self.parts.leading_icon, &mut self.parts.trailing_icon]
            .into_iter()
            .flatten()
        {
            icon.init()?;
        }

        if self.adapter.has_label() && self.adapter.is_input_required() {
            self.adapter.set_label_required(true);
        }
        if self.adapter.is_focused() {
            self.activate_focus();
        } else if self.adapter.has_label() && self.should_float() {
            self.notch_outline(true);
            self.adapter.float_label(true);
            self.style_floating(true);
        }
        self.update_character_counter();
        Ok(())
    }
}
