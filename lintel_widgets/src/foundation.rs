// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lintel_schedule::Millis;

use crate::Result;

/// Lifecycle shared by every widget foundation.
///
/// A foundation owns its adapter and all interaction state. Hosts call [`init`] once
/// the widget's structure exists, feed input through the foundation's handler methods,
/// and call [`advance`] from their frame or timer loop so deferred work (animation
/// frames, timeouts) can run. [`destroy`] cancels everything still pending.
///
/// [`init`]: Foundation::init
/// [`advance`]: Foundation::advance
/// [`destroy`]: Foundation::destroy
pub trait Foundation {
    /// The adapter this foundation drives.
    type Adapter;

    /// Shared access to the adapter.
    fn adapter(&self) -> &Self::Adapter;

    /// Exclusive access to the adapter.
    fn adapter_mut(&mut self) -> &mut Self::Adapter;

    /// Reads initial state from the adapter.
    ///
    /// Fails when structure the foundation cannot work without is missing.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Cancels pending work and releases anything acquired through the adapter.
    fn destroy(&mut self) {}

    /// Moves the foundation's clock to `now` and runs the work that became due.
    ///
    /// Foundations without deferred work ignore this.
    fn advance(&mut self, now: Millis) {
        let _ = now;
    }
}
