// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::list::ListMode;

/// Contract violations reported by foundations.
///
/// These indicate a programming error in the binding or the caller, such as passing
/// a set of indices to a single-selection list. Stale references that can arise from
/// ordinary structural changes (an index past the end of a list that just shrank) are
/// tolerated silently instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FoundationError {
    /// The selection value has the wrong shape for the list's mode.
    #[error("selection shape does not match a {mode:?} list")]
    SelectionShape {
        /// Mode of the list that rejected the selection.
        mode: ListMode,
    },
    /// An index does not refer to an existing item.
    #[error("index {index} is out of range for {count} items")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of items at the time of the call.
        count: usize,
    },
    /// The item exists but does not belong to a selection group.
    #[error("item {index} is not selectable")]
    NotSelectable {
        /// The offending index.
        index: usize,
    },
    /// Structure the foundation depends on is absent.
    #[error("missing required structure: {0}")]
    MissingStructure(&'static str),
    /// Structure is present that conflicts with how the widget is configured.
    #[error("conflicting structure: {0}")]
    ConflictingStructure(&'static str),
}

/// Result type used throughout the widget foundations.
pub type Result<T, E = FoundationError> = core::result::Result<T, E>;
