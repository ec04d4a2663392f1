// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu surface placement: choose the corner of the surface that attaches to an anchor.
//!
//! A surface is attached to a corner of its anchor ([`SurfaceOptions::anchor_corner`]).
//! [`layout`] decides which corner of the *surface* sits there: it opens downward unless
//! the space below is short and the space above is larger, and opens toward the end side
//! unless that would overflow more than the other side. The result is a set of CSS-like
//! offsets relative to the anchor (or the page, for hoisted and fixed surfaces), the
//! transform origin for the open animation, and the largest height that still fits.

use core::fmt;

use bitflags::bitflags;
use kurbo::{Point, Rect, Size, Vec2};

/// Space kept between a surface and the viewport edges when computing fit.
pub const MARGIN_TO_EDGE: f64 = 32.0;
/// Anchors at least this fraction of the surface width animate from their center.
pub const ANCHOR_TO_MENU_SURFACE_WIDTH_RATIO: f64 = 0.67;

bitflags! {
    /// A corner of an anchor or surface, as a combination of orientation bits.
    ///
    /// `FLIP_RTL` marks logical corners (start/end) that swap sides in right-to-left layouts.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Corner: u8 {
        /// Bottom edge.
        const BOTTOM = 1;
        /// Horizontal center.
        const CENTER = 2;
        /// Right edge.
        const RIGHT = 4;
        /// Start/end semantics that mirror under RTL.
        const FLIP_RTL = 8;
    }
}

impl Corner {
    /// Top-left corner.
    pub const TOP_LEFT: Self = Self::empty();
    /// Top-right corner.
    pub const TOP_RIGHT: Self = Self::RIGHT;
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Self = Self::BOTTOM;
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self::BOTTOM.union(Self::RIGHT);
    /// Top corner on the start side.
    pub const TOP_START: Self = Self::FLIP_RTL;
    /// Top corner on the end side.
    pub const TOP_END: Self = Self::FLIP_RTL.union(Self::RIGHT);
    /// Bottom corner on the start side.
    pub const BOTTOM_START: Self = Self::BOTTOM.union(Self::FLIP_RTL);
    /// Bottom corner on the end side.
    pub const BOTTOM_END: Self = Self::BOTTOM.union(Self::RIGHT).union(Self::FLIP_RTL);
}

impl Default for Corner {
    fn default() -> Self {
        Self::TOP_START
    }
}

/// Extra distance between the anchor and the surface, per side.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorMargin {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

/// Offsets for the surface's positioned edges. Unset edges are left to the host's layout.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfacePosition {
    /// Offset of the top edge.
    pub top: Option<f64>,
    /// Offset of the right edge.
    pub right: Option<f64>,
    /// Offset of the bottom edge.
    pub bottom: Option<f64>,
    /// Offset of the left edge.
    pub left: Option<f64>,
}

/// Horizontal component of a transform origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalOrigin {
    /// Left edge.
    Left,
    /// Horizontal center.
    Center,
    /// Right edge.
    Right,
}

/// Vertical component of a transform origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VerticalOrigin {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

/// Point the open/close animation scales from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransformOrigin {
    /// Horizontal component.
    pub horizontal: HorizontalOrigin,
    /// Vertical component.
    pub vertical: VerticalOrigin,
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = match self.horizontal {
            HorizontalOrigin::Left => "left",
            HorizontalOrigin::Center => "center",
            HorizontalOrigin::Right => "right",
        };
        let v = match self.vertical {
            VerticalOrigin::Top => "top",
            VerticalOrigin::Bottom => "bottom",
        };
        write!(f, "{h} {v}")
    }
}

/// Geometry measured by the host just before positioning.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfaceMeasurements {
    /// The anchor's bounds in viewport coordinates, if the surface has an anchor.
    pub anchor: Option<Rect>,
    /// The surface's own size.
    pub surface: Size,
    /// Size of the viewport.
    pub viewport: Size,
    /// Size of the document body.
    pub body: Size,
    /// Current page scroll offset.
    pub window_scroll: Vec2,
}

/// Positioning configuration owned by the menu surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceOptions {
    /// Anchor corner the surface attaches to.
    pub anchor_corner: Corner,
    /// Starting surface corner before overflow adjustments.
    pub origin_corner: Corner,
    /// Extra distance from the anchor.
    pub anchor_margin: AnchorMargin,
    /// The surface is positioned relative to the page rather than its anchor.
    pub hoisted: bool,
    /// The surface uses fixed positioning.
    pub fixed: bool,
    /// Position used in place of an anchor when none is present.
    pub absolute_position: Point,
    /// Right-to-left layout.
    pub rtl: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            anchor_corner: Corner::TOP_START,
            origin_corner: Corner::TOP_START,
            anchor_margin: AnchorMargin::default(),
            hoisted: false,
            fixed: false,
            absolute_position: Point::ZERO,
            rtl: false,
        }
    }
}

/// Result of [`layout`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceLayout {
    /// Surface corner attached to the anchor.
    pub corner: Corner,
    /// Edge offsets to apply.
    pub position: SurfacePosition,
    /// Origin for the open/close animation.
    pub transform_origin: TransformOrigin,
    /// Largest height that fits, or `None` to leave it to the host's styling.
    pub max_height: Option<f64>,
    /// The surface opens downward from the anchor.
    pub open_below: bool,
}

/// Distances from the anchor's edges to the matching viewport edges.
#[derive(Copy, Clone, Debug)]
struct ViewportDistance {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

struct Measured<'a> {
    anchor: Rect,
    distance: ViewportDistance,
    m: &'a SurfaceMeasurements,
    opts: &'a SurfaceOptions,
}

/// Computes where to place a surface given fresh measurements.
#[must_use]
pub fn layout(m: &SurfaceMeasurements, opts: &SurfaceOptions) -> SurfaceLayout {
    let anchor = m.anchor.unwrap_or_else(|| {
        let p = opts.absolute_position;
        Rect::new(p.x, p.y, p.x, p.y)
    });
    let measured = Measured {
        anchor,
        distance: ViewportDistance {
            top: anchor.y0,
            right: m.viewport.width - anchor.x1,
            bottom: m.viewport.height - anchor.y1,
            left: anchor.x0,
        },
        m,
        opts,
    };

    let corner = measured.origin_corner();
    let max_height = measured.max_height(corner);
    let bottom_aligned = corner.contains(Corner::BOTTOM);
    let right_aligned = corner.contains(Corner::RIGHT);

    let horizontal_offset = measured.horizontal_offset(corner);
    let vertical_offset = measured.vertical_offset(corner);
    let mut position = SurfacePosition::default();
    if right_aligned {
        position.right = Some(horizontal_offset);
    } else {
        position.left = Some(horizontal_offset);
    }
    if bottom_aligned {
        position.bottom = Some(vertical_offset);
    } else {
        position.top = Some(vertical_offset);
    }

    let mut horizontal = if right_aligned {
        HorizontalOrigin::Right
    } else {
        HorizontalOrigin::Left
    };
    if anchor.width() / m.surface.width > ANCHOR_TO_MENU_SURFACE_WIDTH_RATIO {
        horizontal = HorizontalOrigin::Center;
    }
    let vertical = if bottom_aligned {
        VerticalOrigin::Bottom
    } else {
        VerticalOrigin::Top
    };

    if opts.hoisted || opts.fixed {
        measured.adjust_for_hoisted(&mut position);
    }

    SurfaceLayout {
        corner,
        position,
        transform_origin: TransformOrigin {
            horizontal,
            vertical,
        },
        max_height: (max_height != 0.0).then_some(max_height),
        open_below: !bottom_aligned,
    }
}

impl Measured<'_> {
    fn origin_corner(&self) -> Corner {
        let mut corner = self.opts.origin_corner;
        let anchor_corner = self.opts.anchor_corner;
        let margin = self.opts.anchor_margin;
        let d = self.distance;
        let surface = self.m.surface;
        let anchor_height = self.anchor.height();
        let anchor_width = self.anchor.width();

        let anchored_to_bottom = anchor_corner.contains(Corner::BOTTOM);
        let (available_top, available_bottom) = if anchored_to_bottom {
            (
                d.top - MARGIN_TO_EDGE + anchor_height + margin.bottom,
                d.bottom - MARGIN_TO_EDGE - margin.bottom,
            )
        } else {
            (
                d.top - MARGIN_TO_EDGE + margin.top,
                d.bottom - MARGIN_TO_EDGE + anchor_height - margin.top,
            )
        };
        let top_overflow = surface.height - available_top;
        let bottom_overflow = surface.height - available_bottom;
        if bottom_overflow > 0.0 && top_overflow < bottom_overflow {
            corner |= Corner::BOTTOM;
        }

        let rtl = self.opts.rtl;
        let flip_rtl = anchor_corner.contains(Corner::FLIP_RTL);
        let avoid_horizontal_overlap = anchor_corner.contains(Corner::RIGHT);
        let anchored_to_right =
            (avoid_horizontal_overlap && !rtl) || (!avoid_horizontal_overlap && flip_rtl && rtl);
        let (available_left, available_right) = if anchored_to_right {
            (
                d.left + anchor_width + margin.right,
                d.right - margin.right,
            )
        } else {
            (d.left + margin.left, d.right + anchor_width - margin.left)
        };
        let left_overflow = surface.width - available_left;
        let right_overflow = surface.width - available_right;
        if (left_overflow < 0.0 && anchored_to_right && rtl)
            || (avoid_horizontal_overlap && !anchored_to_right && left_overflow < 0.0)
            || (right_overflow > 0.0 && left_overflow < right_overflow)
        {
            corner |= Corner::RIGHT;
        }
        corner
    }

    fn max_height(&self, corner: Corner) -> f64 {
        let d = self.distance;
        let margin = self.opts.anchor_margin;
        let anchor_height = self.anchor.height();
        let bottom_anchored = self.opts.anchor_corner.contains(Corner::BOTTOM);
        if corner.contains(Corner::BOTTOM) {
            let mut height = d.top + margin.top - MARGIN_TO_EDGE;
            if !bottom_anchored {
                height += anchor_height;
            }
            height
        } else {
            let mut height = d.bottom - margin.bottom + anchor_height - MARGIN_TO_EDGE;
            if bottom_anchored {
                height -= anchor_height;
            }
            height
        }
    }

    fn horizontal_offset(&self, corner: Corner) -> f64 {
        let margin = self.opts.anchor_margin;
        let anchor_width = self.anchor.width();
        let avoid_horizontal_overlap = self.opts.anchor_corner.contains(Corner::RIGHT);
        if corner.contains(Corner::RIGHT) {
            let right = if avoid_horizontal_overlap {
                anchor_width - margin.left
            } else {
                margin.right
            };
            // Hoisted surfaces are positioned against the body, which may be narrower
            // than the viewport when a scrollbar is present.
            if self.opts.hoisted || self.opts.fixed {
                return right - (self.m.viewport.width - self.m.body.width);
            }
            right
        } else if avoid_horizontal_overlap {
            anchor_width - margin.right
        } else {
            margin.left
        }
    }

    fn vertical_offset(&self, corner: Corner) -> f64 {
        let margin = self.opts.anchor_margin;
        let anchor_height = self.anchor.height();
        let avoid_vertical_overlap = self.opts.anchor_corner.contains(Corner::BOTTOM);
        match (corner.contains(Corner::BOTTOM), avoid_vertical_overlap) {
            (true, true) => anchor_height - margin.top,
            (true, false) => -margin.bottom,
            (false, true) => anchor_height + margin.bottom,
            (false, false) => margin.top,
        }
    }

    fn adjust_for_hoisted(&self, position: &mut SurfacePosition) {
        let d = self.distance;
        let scroll = self.m.window_scroll;
        let absolute = !self.opts.fixed;
        if let Some(top) = &mut position.top {
            *top += d.top + if absolute { scroll.y } else { 0.0 };
        }
        if let Some(bottom) = &mut position.bottom {
            *bottom += d.bottom - if absolute { scroll.y } else { 0.0 };
        }
        if let Some(left) = &mut position.left {
            *left += d.left + if absolute { scroll.x } else { 0.0 };
        }
        if let Some(right) = &mut position.right {
            *right += d.right - if absolute { scroll.x } else { 0.0 };
        }
    }
}
