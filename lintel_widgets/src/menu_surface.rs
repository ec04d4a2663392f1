// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu surface: an anchored popup with an animated open/close lifecycle.
//!
//! ```text
//! Closed --open()--> Opening --frame, 120ms--> Open --close()--> Closing --frame, 75ms--> Closed
//! ```
//!
//! Opening adds the animating-open class, then on the next frame measures and positions
//! the surface and adds the open class. Closing mirrors this with the animating-closed
//! class. Calling `open()` while closing (or `close()` while opening) cancels the work
//! still pending for the interrupted transition. A quick-open surface performs both
//! transitions synchronously.
//!
//! Placement itself is computed by [`lintel_placement::surface::layout`].

use kurbo::{Point, Rect, Size, Vec2};
use lintel_placement::surface::{
    self, AnchorMargin, SurfaceMeasurements, SurfaceOptions, SurfacePosition, TransformOrigin,
};
use lintel_placement::Corner;
use lintel_schedule::{Millis, Scheduler, TaskId};

use crate::event::{EventEffects, Key, KeyEvent};
use crate::{Foundation, FoundationError, Result};

/// Delay between the open frame and the end of the open animation.
pub const TRANSITION_OPEN_DURATION: Millis = 120;
/// Delay between the close frame and the end of the close animation.
pub const TRANSITION_CLOSE_DURATION: Millis = 75;

class_names! {
    /// Classes applied to the menu surface root.
    pub enum MenuSurfaceClass {
        /// Marks the surface root.
        Root => "mdc-menu-surface",
        /// The surface is visible.
        Open => "mdc-menu-surface--open",
        /// The open animation is running.
        AnimatingOpen => "mdc-menu-surface--animating-open",
        /// The close animation is running.
        AnimatingClosed => "mdc-menu-surface--animating-closed",
        /// The surface uses fixed positioning.
        Fixed => "mdc-menu-surface--fixed",
        /// The surface extends downward from its anchor.
        OpenBelow => "mdc-menu-surface--is-open-below",
    }
}

/// Lifecycle phase of an animated popup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SurfacePhase {
    /// Hidden.
    #[default]
    Closed,
    /// The open animation is in flight.
    Opening,
    /// Fully shown.
    Open,
    /// The close animation is in flight.
    Closing,
}

impl SurfacePhase {
    /// Returns `true` while opening or open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

/// Positioning and animation configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuSurfaceConfig {
    /// Anchor corner the surface attaches to.
    pub anchor_corner: Corner,
    /// Surface corner placed at the anchor corner before overflow adjustments.
    pub origin_corner: Corner,
    /// Extra distance from the anchor.
    pub anchor_margin: AnchorMargin,
    /// The surface is attached to the document body.
    pub hoisted: bool,
    /// The surface uses fixed positioning.
    pub fixed: bool,
    /// Skip the open and close animations.
    pub quick_open: bool,
}

impl Default for MenuSurfaceConfig {
    fn default() -> Self {
        Self {
            anchor_corner: Corner::TOP_START,
            origin_corner: Corner::TOP_START,
            anchor_margin: AnchorMargin::default(),
            hoisted: false,
            fixed: false,
            quick_open: false,
        }
    }
}

/// Environment operations a menu surface needs.
pub trait MenuSurfaceAdapter {
    /// Adds a class to the root.
    fn add_class(&mut self, class: MenuSurfaceClass) {
        let _ = class;
    }

    /// Removes a class from the root.
    fn remove_class(&mut self, class: MenuSurfaceClass) {
        let _ = class;
    }

    /// Returns `true` if the root has `class`.
    fn has_class(&self, class: MenuSurfaceClass) -> bool {
        let _ = class;
        false
    }

    /// Bounds of the anchor in viewport coordinates, or `None` without an anchor.
    fn anchor_rect(&self) -> Option<Rect> {
        None
    }

    /// Size of the surface itself.
    fn surface_size(&self) -> Size {
        Size::ZERO
    }

    /// Size of the viewport.
    fn viewport_size(&self) -> Size {
        Size::ZERO
    }

    /// Size of the document body.
    fn body_size(&self) -> Size {
        Size::ZERO
    }

    /// Current page scroll offset.
    fn window_scroll(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Returns `true` for right-to-left layouts.
    fn is_rtl(&self) -> bool {
        false
    }

    /// Applies edge offsets to the surface.
    fn set_position(&mut self, position: SurfacePosition) {
        let _ = position;
    }

    /// Limits the surface height, or removes the limit.
    fn set_max_height(&mut self, max_height: Option<f64>) {
        let _ = max_height;
    }

    /// Sets the origin of the open animation.
    fn set_transform_origin(&mut self, origin: TransformOrigin) {
        let _ = origin;
    }

    /// Returns `true` if the surface itself holds focus.
    fn is_focused(&self) -> bool {
        false
    }

    /// Returns `true` if focus is on a descendant of the surface.
    fn is_focus_inside(&self) -> bool {
        false
    }

    /// Remembers the element focused before opening.
    fn save_focus(&mut self) {}

    /// Returns focus to the element remembered by [`save_focus`](Self::save_focus).
    fn restore_focus(&mut self) {}

    /// The open transition started.
    fn notify_opening(&mut self) {}

    /// The surface finished opening.
    fn notify_open(&mut self) {}

    /// The close transition started.
    fn notify_closing(&mut self) {}

    /// The surface finished closing.
    fn notify_close(&mut self) {}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SurfaceTask {
    OpenFrame,
    OpenDone,
    CloseFrame,
    CloseDone,
}

/// Open/close lifecycle and positioning of an anchored popup.
#[derive(Debug)]
pub struct MenuSurfaceFoundation<A> {
    adapter: A,
    config: MenuSurfaceConfig,
    phase: SurfacePhase,
    absolute_position: Point,
    dimensions: Size,
    pending: Option<TaskId>,
    scheduler: Scheduler<SurfaceTask>,
}

impl<A: MenuSurfaceAdapter> MenuSurfaceFoundation<A> {
    /// Creates a closed surface with default configuration.
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, MenuSurfaceConfig::default())
    }

    /// Creates a closed surface with the given configuration.
    pub fn with_config(adapter: A, config: MenuSurfaceConfig) -> Self {
        Self {
            adapter,
            config,
            phase: SurfacePhase::Closed,
            absolute_position: Point::ZERO,
            dimensions: Size::ZERO,
            pending: None,
            scheduler: Scheduler::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &MenuSurfaceConfig {
        &self.config
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SurfacePhase {
        self.phase
    }

    /// Returns `true` while opening or open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    /// Surface size measured at the last open.
    #[must_use]
    pub fn dimensions(&self) -> Size {
        self.dimensions
    }

    /// Sets the anchor corner the surface attaches to.
    pub fn set_anchor_corner(&mut self, corner: Corner) {
        self.config.anchor_corner = corner;
    }

    /// Sets the surface corner placed at the anchor before overflow adjustments.
    pub fn set_origin_corner(&mut self, corner: Corner) {
        self.config.origin_corner = corner;
    }

    /// Mirrors the anchor corner between left and right.
    pub fn flip_corner_horizontally(&mut self) {
        self.config.origin_corner.toggle(Corner::RIGHT);
    }

    /// Sets the extra distance from the anchor.
    pub fn set_anchor_margin(&mut self, margin: AnchorMargin) {
        self.config.anchor_margin = margin;
    }

    /// Positions the surface relative to the page.
    pub fn set_is_hoisted(&mut self, hoisted: bool) {
        self.config.hoisted = hoisted;
    }

    /// Switches fixed positioning on or off.
    pub fn set_fixed_position(&mut self, fixed: bool) {
        self.config.fixed = fixed;
        if fixed {
            self.adapter.add_class(MenuSurfaceClass::Fixed);
        } else {
            self.adapter.remove_class(MenuSurfaceClass::Fixed);
        }
    }

    /// Position used when the surface has no anchor.
    pub fn set_absolute_position(&mut self, position: Point) {
        self.absolute_position = position;
        self.config.hoisted = true;
    }

    /// Skips the open and close animations.
    pub fn set_quick_open(&mut self, quick_open: bool) {
        self.config.quick_open = quick_open;
    }

    /// Opens the surface. Does nothing if it is already opening or open.
    pub fn open(&mut self) {
        if self.phase.is_open() {
            return;
        }
        if self.phase == SurfacePhase::Closing {
            self.scheduler.cancel_slot(&mut self.pending);
            self.adapter.remove_class(MenuSurfaceClass::AnimatingClosed);
        }

        self.adapter.save_focus();
        debug_event!(message = "menu_surface.open", quick = self.config.quick_open);

        if self.config.quick_open {
            self.phase = SurfacePhase::Open;
            self.adapter.add_class(MenuSurfaceClass::Open);
            self.auto_position();
            self.adapter.notify_open();
        } else {
            self.phase = SurfacePhase::Opening;
            self.adapter.notify_opening();
            self.adapter.add_class(MenuSurfaceClass::AnimatingOpen);
            self.pending = Some(self.scheduler.request_frame(SurfaceTask::OpenFrame));
        }
    }

    /// Closes the surface. Does nothing if it is already closing or closed.
    ///
    /// Focus returns to the element focused before opening, unless `skip_restore_focus`
    /// is set or focus has already left the surface.
    pub fn close(&mut self, skip_restore_focus: bool) {
        if !self.phase.is_open() {
            return;
        }
        if self.phase == SurfacePhase::Opening {
            self.scheduler.cancel_slot(&mut self.pending);
            self.adapter.remove_class(MenuSurfaceClass::AnimatingOpen);
        }

        debug_event!(message = "menu_surface.close", skip_restore_focus);
        self.adapter.notify_closing();

        if self.config.quick_open {
            self.phase = SurfacePhase::Closed;
            self.adapter.remove_class(MenuSurfaceClass::Open);
            self.adapter.remove_class(MenuSurfaceClass::OpenBelow);
            if !skip_restore_focus {
                self.maybe_restore_focus();
            }
            self.adapter.notify_close();
        } else {
            self.phase = SurfacePhase::Closing;
            self.adapter.add_class(MenuSurfaceClass::AnimatingClosed);
            self.pending = Some(self.scheduler.request_frame(SurfaceTask::CloseFrame));
            if !skip_restore_focus {
                self.maybe_restore_focus();
            }
        }
    }

    /// A click landed on the page. Clicks outside the surface close it.
    pub fn handle_body_click(&mut self, inside_surface: bool) {
        if !inside_surface {
            self.close(false);
        }
    }

    /// Escape closes the surface.
    pub fn handle_keydown(&mut self, event: KeyEvent) -> EventEffects {
        if event.key == Key::Escape {
            self.close(false);
        }
        EventEffects::empty()
    }

    fn maybe_restore_focus(&mut self) {
        if self.adapter.is_focused() || self.adapter.is_focus_inside() {
            self.adapter.restore_focus();
        }
    }

    fn auto_position(&mut self) {
        let measurements = SurfaceMeasurements {
            anchor: self.adapter.anchor_rect(),
            surface: self.adapter.surface_size(),
            viewport: self.adapter.viewport_size(),
            body: self.adapter.body_size(),
            window_scroll: self.adapter.window_scroll(),
        };
        self.dimensions = measurements.surface;
        let options = SurfaceOptions {
            anchor_corner: self.config.anchor_corner,
            origin_corner: self.config.origin_corner,
            anchor_margin: self.config.anchor_margin,
            hoisted: self.config.hoisted,
            fixed: self.config.fixed,
            absolute_position: self.absolute_position,
            rtl: self.adapter.is_rtl(),
        };
        let layout = surface::layout(&measurements, &options);

        self.adapter.set_transform_origin(layout.transform_origin);
        self.adapter.set_position(layout.position);
        self.adapter.set_max_height(layout.max_height);
        if layout.open_below {
            self.adapter.add_class(MenuSurfaceClass::OpenBelow);
        } else {
            self.adapter.remove_class(MenuSurfaceClass::OpenBelow);
        }
    }

    fn run(&mut self, task: SurfaceTask) {
        self.pending = None;
        match task {
            SurfaceTask::OpenFrame => {
                self.adapter.add_class(MenuSurfaceClass::Open);
                self.auto_position();
                self.pending = Some(
                    self.scheduler
                        .set_timeout(TRANSITION_OPEN_DURATION, SurfaceTask::OpenDone),
                );
            }
            SurfaceTask::OpenDone => {
                self.adapter.remove_class(MenuSurfaceClass::AnimatingOpen);
                self.phase = SurfacePhase::Open;
                self.adapter.notify_open();
            }
            SurfaceTask::CloseFrame => {
                self.adapter.remove_class(MenuSurfaceClass::Open);
                self.adapter.remove_class(MenuSurfaceClass::OpenBelow);
                self.pending = Some(
                    self.scheduler
                        .set_timeout(TRANSITION_CLOSE_DURATION, SurfaceTask::CloseDone),
                );
            }
            SurfaceTask::CloseDone => {
                self.adapter.remove_class(MenuSurfaceClass::AnimatingClosed);
                self.phase = SurfacePhase::Closed;
                self.adapter.notify_close();
            }
        }
    }
}

impl<A: MenuSurfaceAdapter> Foundation for MenuSurfaceFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn init(&mut self) -> Result<()> {
        if !self.adapter.has_class(MenuSurfaceClass::Root) {
            warn_event!(message = "menu_surface.missing_root");
            return Err(FoundationError::MissingStructure("menu surface root class"));
        }
        if self.adapter.has_class(MenuSurfaceClass::Open) {
            self.phase = SurfacePhase::Open;
        }
        if self.adapter.has_class(MenuSurfaceClass::Fixed) {
            self.config.fixed = true;
        }
        Ok(())
    }

    fn destroy(&mut self) {
        self.scheduler.clear();
        self.pending = None;
        self.adapter.remove_class(MenuSurfaceClass::AnimatingOpen);
        self.adapter.remove_class(MenuSurfaceClass::AnimatingClosed);
    }

    fn advance(&mut self, now: Millis) {
        self.scheduler.advance_to(now);
        while let Some((_, task)) = self.scheduler.pop_due() {
            self.run(task);
        }
    }
}
