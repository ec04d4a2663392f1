// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "12 / 140" style character counter of a text field.

use alloc::format;

use crate::Foundation;

/// Environment operations a character counter needs.
pub trait CharacterCounterAdapter {
    /// Replaces the counter's text.
    fn set_content(&mut self, content: &str) {
        let _ = content;
    }
}

/// Formats the character count of a text field.
#[derive(Debug)]
pub struct CharacterCounterFoundation<A> {
    adapter: A,
}

impl<A: CharacterCounterAdapter> CharacterCounterFoundation<A> {
    /// Creates the foundation.
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Shows `current_length` out of `max_length`, never more than the maximum.
    pub fn set_counter_value(&mut self, current_length: usize, max_length: usize) {
        let current = current_length.min(max_length);
        self.adapter
            .set_content(&format!("{current} / {max_length}"));
    }
}

impl<A: CharacterCounterAdapter> Foundation for CharacterCounterFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }
}
