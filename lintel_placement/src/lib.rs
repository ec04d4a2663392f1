// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lintel Placement: viewport-aware positioning for anchored popups.
//!
//! Popups such as tooltips and menus are positioned relative to an anchor and must stay
//! on screen. This crate holds the pure geometry for two placement models:
//!
//! - [`tooltip`]: picks one of a handful of anchored candidates (start, center, or end
//!   horizontally; above or below vertically), preferring candidates that keep a margin
//!   from the viewport edges.
//! - [`surface`]: decides which corner of a menu surface attaches to which corner of its
//!   anchor, flipping vertically and horizontally to reduce overflow, and reports the
//!   offsets, transform origin, and maximum height to apply.
//!
//! All inputs are [`kurbo`] rectangles and sizes in viewport coordinates, measured by the
//! host just before placement. Nothing here reads or writes host state.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use lintel_placement::tooltip::{place, TooltipPlacement};
//!
//! let anchor = Rect::new(200.0, 100.0, 300.0, 120.0);
//! let at = place(
//!     anchor,
//!     Size::new(40.0, 20.0),
//!     Size::new(500.0, 500.0),
//!     &TooltipPlacement::default(),
//! );
//! // Centered under the anchor, 4px below it.
//! assert_eq!(at, Point::new(230.0, 124.0));
//! ```
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use lintel_placement::surface::{layout, Corner, SurfaceMeasurements, SurfaceOptions};
//!
//! let m = SurfaceMeasurements {
//!     anchor: Some(Rect::new(100.0, 600.0, 200.0, 640.0)),
//!     surface: Size::new(200.0, 300.0),
//!     viewport: Size::new(1000.0, 800.0),
//!     body: Size::new(1000.0, 800.0),
//!     window_scroll: Vec2::ZERO,
//! };
//! let placed = layout(&m, &SurfaceOptions::default());
//! // Not enough room below, so the surface opens upward.
//! assert!(placed.corner.contains(Corner::BOTTOM));
//! assert!(!placed.open_below);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod surface;
pub mod tooltip;

pub use surface::{Corner, SurfaceLayout, SurfaceMeasurements, SurfaceOptions, SurfacePosition};
pub use tooltip::{AnchorBoundary, TooltipPlacement, XPosition, YPosition};
