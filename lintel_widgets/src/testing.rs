// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the unit tests of the foundations.

use alloc::string::String;
use alloc::vec::Vec;

/// Ordered record of adapter calls, one formatted line per call.
#[derive(Clone, Debug, Default)]
pub(crate) struct CallLog(Vec<String>);

impl CallLog {
    pub(crate) fn push(&mut self, call: impl Into<String>) {
        self.0.push(call.into());
    }

    pub(crate) fn calls(&self) -> &[String] {
        &self.0
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn count(&self, call: &str) -> usize {
        self.0.iter().filter(|c| *c == call).count()
    }

    pub(crate) fn contains(&self, call: &str) -> bool {
        self.0.iter().any(|c| c == call)
    }

    pub(crate) fn position(&self, call: &str) -> Option<usize> {
        self.0.iter().position(|c| c == call)
    }

    /// Returns `true` if `first` was recorded before `second`.
    pub(crate) fn ordered(&self, first: &str, second: &str) -> bool {
        matches!(
            (self.position(first), self.position(second)),
            (Some(a), Some(b)) if a < b
        )
    }
}
