// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lintel Schedule: a virtual-clock scheduler for headless UI state machines.
//!
//! Interactive widgets rarely finish a transition synchronously. Opening a menu waits
//! one animation frame so the surface can be measured, then waits a fixed duration
//! before announcing that it is open; a tooltip waits before it shows. This crate models
//! those deferrals as plain data so the state machines that use them stay deterministic
//! and can be driven by a host clock or by a test.
//!
//! - [`Scheduler::request_frame`] queues a task for the next frame.
//! - [`Scheduler::set_timeout`] queues a task that becomes due `delay` milliseconds from
//!   the scheduler's current time.
//! - [`Scheduler::cancel`] drops a pending task by its [`TaskId`].
//! - [`Scheduler::advance_to`] moves the clock forward and arms every frame request that
//!   exists at that moment; [`Scheduler::pop_due`] then yields due tasks one at a time.
//!
//! Tasks are values of a caller-chosen type `T`, usually a small enum describing what the
//! owner should do when the task fires. The scheduler never calls back into its owner, so
//! the owner is free to schedule or cancel more work while it drains due tasks.
//!
//! ## Ordering
//!
//! Within a single advance, armed frame requests fire first in request order, then timers
//! whose deadline is at or before the current time fire in `(deadline, request order)`.
//! Timers scheduled while draining with a deadline that has already passed (for example a
//! zero-delay timeout) fire in the same advance. Frames requested while draining wait for
//! the next [`Scheduler::advance_to`].
//!
//! ## Example
//!
//! ```rust
//! use lintel_schedule::Scheduler;
//!
//! #[derive(Debug, PartialEq)]
//! enum Task {
//!     Measure,
//!     Settle,
//! }
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.request_frame(Task::Measure);
//!
//! // The host delivers a frame at t = 16ms.
//! scheduler.advance_to(16);
//! let mut fired = Vec::new();
//! while let Some((_, task)) = scheduler.pop_due() {
//!     if task == Task::Measure {
//!         scheduler.set_timeout(120, Task::Settle);
//!     }
//!     fired.push(task);
//! }
//! assert_eq!(fired, [Task::Measure]);
//!
//! // Nothing else is due until 136ms.
//! scheduler.advance_to(100);
//! assert!(scheduler.pop_due().is_none());
//! scheduler.advance_to(136);
//! assert_eq!(scheduler.pop_due().map(|(_, task)| task), Some(Task::Settle));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::num::NonZeroU64;

use smallvec::SmallVec;

/// Milliseconds on the scheduler's clock.
///
/// The clock has no epoch; hosts usually feed a monotonic timestamp such as the time
/// since the window was created.
pub type Millis = u64;

/// Handle identifying a scheduled task.
///
/// Ids are unique for the lifetime of a [`Scheduler`] and increase with every request,
/// so they double as a stable tie-breaker between tasks that become due together.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(NonZeroU64);

impl TaskId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// When a pending task becomes eligible to fire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Due {
    /// Fires on the next frame delivered by [`Scheduler::advance_to`].
    NextFrame,
    /// Fires once the clock reaches the given time.
    At(Millis),
}

#[derive(Clone, Debug)]
struct Pending<T> {
    id: TaskId,
    due: Due,
    /// Frame requests only fire after an advance has armed them.
    armed: bool,
    task: T,
}

/// Cancelable frame and timeout queue driven by an external clock.
///
/// See the [crate documentation](crate) for the ordering rules.
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now: Millis,
    next_id: u64,
    pending: SmallVec<[Pending<T>; 4]>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 1,
            pending: SmallVec::new(),
        }
    }

    /// Current time on the scheduler's clock.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Queues `task` to run on the next frame.
    pub fn request_frame(&mut self, task: T) -> TaskId {
        self.push(Due::NextFrame, task)
    }

    /// Queues `task` to run once `delay` milliseconds have elapsed.
    ///
    /// A zero delay makes the task due immediately; it fires on the next drain,
    /// including a drain that is already in progress.
    pub fn set_timeout(&mut self, delay: Millis, task: T) -> TaskId {
        let at = self.now.saturating_add(delay);
        self.push(Due::At(at), task)
    }

    fn push(&mut self, due: Due, task: T) -> TaskId {
        let id = TaskId(NonZeroU64::new(self.next_id).unwrap_or(NonZeroU64::MIN));
        self.next_id = self.next_id.saturating_add(1);
        self.pending.push(Pending {
            id,
            due,
            armed: false,
            task,
        });
        id
    }

    /// Cancels a pending task, returning it if it had not fired yet.
    ///
    /// Canceling an id that already fired or was canceled is a no-op.
    pub fn cancel(&mut self, id: TaskId) -> Option<T> {
        let pos = self.pending.iter().position(|p| p.id == id)?;
        Some(self.pending.remove(pos).task)
    }

    /// Cancels an optional handle and clears it.
    ///
    /// Convenience for owners that keep `Option<TaskId>` fields for their in-flight work.
    pub fn cancel_slot(&mut self, slot: &mut Option<TaskId>) -> Option<T> {
        slot.take().and_then(|id| self.cancel(id))
    }

    /// Cancels every pending task matching `pred`, returning how many were dropped.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| !pred(&p.task));
        before - self.pending.len()
    }

    /// Returns `true` if `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Returns when the task with `id` is due, if it is still pending.
    #[must_use]
    pub fn due(&self, id: TaskId) -> Option<Due> {
        self.pending.iter().find(|p| p.id == id).map(|p| p.due)
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns `true` if any task is waiting for a frame.
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        self.pending.iter().any(|p| p.due == Due::NextFrame)
    }

    /// Earliest timer deadline, ignoring frame requests.
    ///
    /// Hosts can use this to decide how long to sleep when no frame is requested.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending
            .iter()
            .filter_map(|p| match p.due {
                Due::At(at) => Some(at),
                Due::NextFrame => None,
            })
            .min()
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Moves the clock to `now` and arms the frame requests queued so far.
    ///
    /// The clock never runs backwards: an earlier `now` still arms frames but leaves
    /// the time unchanged.
    pub fn advance_to(&mut self, now: Millis) {
        self.now = self.now.max(now);
        for p in &mut self.pending {
            if p.due == Due::NextFrame {
                p.armed = true;
            }
        }
    }

    /// Removes and returns the next task that is due, if any.
    pub fn pop_due(&mut self) -> Option<(TaskId, T)> {
        let pos = self.next_due_position()?;
        let p = self.pending.remove(pos);
        Some((p.id, p.task))
    }

    fn next_due_position(&self) -> Option<usize> {
        let frame = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.armed)
            .min_by_key(|(_, p)| p.id)
            .map(|(pos, _)| pos);
        if frame.is_some() {
            return frame;
        }
        self.pending
            .iter()
            .enumerate()
            .filter_map(|(pos, p)| match p.due {
                Due::At(at) if at <= self.now => Some((at, p.id, pos)),
                _ => None,
            })
            .min()
            .map(|(_, _, pos)| pos)
    }
}
