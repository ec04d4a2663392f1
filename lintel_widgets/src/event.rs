// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized keyboard input and handler effects.
//!
//! Bindings translate platform key events into a [`KeyEvent`] before calling a
//! foundation. Key names follow the DOM `KeyboardEvent.key` vocabulary, including the
//! legacy aliases some platforms still report (`"Spacebar"`, `"Esc"`, `"Up"`, ...).
//! When the name is unknown, [`Key::normalize`] falls back to the legacy key code.
//!
//! Handlers never mutate the host event. They return [`EventEffects`] describing what
//! the binding should do with it.

use bitflags::bitflags;

/// A logical key, after alias normalization.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter or Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// A printable character other than space.
    Character(char),
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a DOM key name to a [`Key`].
    ///
    /// Single-character names other than `" "` become [`Key::Character`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            " " | "Spacebar" | "Space" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            "Backspace" => Self::Backspace,
            "Delete" | "Del" => Self::Delete,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other,
                }
            }
        }
    }

    /// Maps a legacy `keyCode` to a [`Key`]. Character codes are not mapped.
    #[must_use]
    pub fn from_key_code(code: u32) -> Self {
        match code {
            8 => Self::Backspace,
            9 => Self::Tab,
            13 => Self::Enter,
            27 => Self::Escape,
            32 => Self::Space,
            33 => Self::PageUp,
            34 => Self::PageDown,
            35 => Self::End,
            36 => Self::Home,
            37 => Self::ArrowLeft,
            38 => Self::ArrowUp,
            39 => Self::ArrowRight,
            40 => Self::ArrowDown,
            46 => Self::Delete,
            _ => Self::Other,
        }
    }

    /// Resolves a key from its name, falling back to the legacy code.
    #[must_use]
    pub fn normalize(name: &str, key_code: u32) -> Self {
        match Self::from_name(name) {
            Self::Other => Self::from_key_code(key_code),
            key => key,
        }
    }

    /// Returns `true` for the four arrow keys.
    #[must_use]
    pub const fn is_arrow(self) -> bool {
        matches!(
            self,
            Self::ArrowUp | Self::ArrowDown | Self::ArrowLeft | Self::ArrowRight
        )
    }
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control.
        const CTRL = 1;
        /// Shift.
        const SHIFT = 1 << 1;
        /// Alt or Option.
        const ALT = 1 << 2;
        /// Meta, Command or Windows.
        const META = 1 << 3;
    }
}

/// A normalized key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Modifiers held at the time.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press without modifiers.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// A key press with the given modifiers.
    #[must_use]
    pub const fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Returns `true` if Control or Meta is held.
    #[must_use]
    pub const fn has_command_modifier(&self) -> bool {
        self.modifiers.intersects(Modifiers::CTRL.union(Modifiers::META))
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// A click or key press on an element that reacts to both.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// Pointer click.
    Click,
    /// Key press while the element is focused.
    Key(KeyEvent),
}

bitflags! {
    /// What a binding should do with the event a handler consumed.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventEffects: u8 {
        /// Suppress the platform's default action.
        const PREVENT_DEFAULT = 1;
        /// Stop the event from reaching ancestors.
        const STOP_PROPAGATION = 1 << 1;
    }
}
