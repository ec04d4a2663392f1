// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip placement: pick one of a few anchored candidates that stays inside the viewport.
//!
//! Horizontally there are three candidates (aligned to the anchor's start edge, its end
//! edge, or centered on it) and vertically two (below or above, separated from the anchor
//! by a gap). Each candidate falls into one of two tiers:
//!
//! 1. it keeps at least [`MIN_VIEWPORT_TOOLTIP_THRESHOLD`] pixels from both viewport edges, or
//! 2. it merely stays inside the viewport.
//!
//! Only the best non-empty tier is considered. Within it the caller's preference wins,
//! then a fixed order: center, start, end horizontally; below, above vertically. When no
//! candidate stays inside the viewport the tooltip is pushed in from the edge the anchor
//! overflows.

use kurbo::{Point, Rect, Size};

/// Minimum distance kept between a tooltip and the viewport edges when possible.
pub const MIN_VIEWPORT_TOOLTIP_THRESHOLD: f64 = 8.0;
/// Gap between anchor and tooltip when the anchor has a visible boundary.
pub const BOUNDED_ANCHOR_GAP: f64 = 4.0;
/// Gap between anchor and tooltip when the anchor has no visible boundary (for example text).
pub const UNBOUNDED_ANCHOR_GAP: f64 = 8.0;

/// Preferred horizontal alignment relative to the anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XPosition {
    /// No preference; use the default order.
    #[default]
    Detected,
    /// Align with the anchor's start edge (left in LTR, right in RTL).
    Start,
    /// Center on the anchor.
    Center,
    /// Align with the anchor's end edge.
    End,
}

/// Preferred vertical position relative to the anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YPosition {
    /// No preference; use the default order.
    #[default]
    Detected,
    /// Above the anchor.
    Above,
    /// Below the anchor.
    Below,
}

/// Whether the anchor element draws its own boundary, which controls the anchor gap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorBoundary {
    /// The anchor has a visible boundary, such as a button.
    #[default]
    Bounded,
    /// The anchor has no visible boundary, such as a run of text.
    Unbounded,
}

impl AnchorBoundary {
    /// Gap between the anchor and the tooltip for this boundary type.
    #[must_use]
    pub const fn gap(self) -> f64 {
        match self {
            Self::Bounded => BOUNDED_ANCHOR_GAP,
            Self::Unbounded => UNBOUNDED_ANCHOR_GAP,
        }
    }
}

/// Inputs that shape tooltip placement besides the geometry itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TooltipPlacement {
    /// Horizontal preference.
    pub x: XPosition,
    /// Vertical preference.
    pub y: YPosition,
    /// Distance between anchor and tooltip.
    pub anchor_gap: f64,
    /// Distance to keep from the viewport edges when possible.
    pub threshold: f64,
    /// Mirror start and end for right-to-left layouts.
    pub rtl: bool,
}

impl Default for TooltipPlacement {
    fn default() -> Self {
        Self {
            x: XPosition::Detected,
            y: YPosition::Detected,
            anchor_gap: BOUNDED_ANCHOR_GAP,
            threshold: MIN_VIEWPORT_TOOLTIP_THRESHOLD,
            rtl: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Tier {
    Threshold,
    Viewport,
    Outside,
}

/// Classifies a candidate span `[pos, pos + extent]` against a viewport length.
fn tier(pos: f64, extent: f64, viewport: f64, threshold: f64) -> Tier {
    if pos + extent <= viewport - threshold && pos >= threshold {
        Tier::Threshold
    } else if pos + extent <= viewport && pos >= 0.0 {
        Tier::Viewport
    } else {
        Tier::Outside
    }
}

/// The candidates that survive tiering, as a mask over a fixed candidate list.
struct Valid<const N: usize>([bool; N]);

impl<const N: usize> Valid<N> {
    fn new(tiers: [Tier; N]) -> Self {
        let best = if tiers.contains(&Tier::Threshold) {
            Tier::Threshold
        } else {
            Tier::Viewport
        };
        Self(tiers.map(|t| t == best))
    }

    fn has(&self, i: usize) -> bool {
        self.0[i]
    }
}

/// Computes the tooltip's top-left corner in viewport coordinates.
#[must_use]
pub fn place(anchor: Rect, tooltip: Size, viewport: Size, opts: &TooltipPlacement) -> Point {
    Point::new(
        left(anchor, tooltip.width, viewport.width, opts),
        top(anchor, tooltip.height, viewport.height, opts),
    )
}

/// Computes the tooltip's `left` offset.
#[must_use]
pub fn left(anchor: Rect, tooltip_width: f64, viewport_width: f64, opts: &TooltipPlacement) -> f64 {
    const CENTER: usize = 0;
    const START: usize = 1;
    const END: usize = 2;

    let (start, end) = if opts.rtl {
        (anchor.x1 - tooltip_width, anchor.x0)
    } else {
        (anchor.x0, anchor.x1 - tooltip_width)
    };
    let center = anchor.x0 + (anchor.width() - tooltip_width) / 2.0;
    let candidates = [center, start, end];
    let valid = Valid::new(
        candidates.map(|pos| tier(pos, tooltip_width, viewport_width, opts.threshold)),
    );

    let preferred = match opts.x {
        XPosition::Start => Some(START),
        XPosition::End => Some(END),
        XPosition::Center => Some(CENTER),
        XPosition::Detected => None,
    };
    if let Some(i) = preferred.filter(|i| valid.has(*i)) {
        return candidates[i];
    }
    if let Some(i) = [CENTER, START, END].into_iter().find(|i| valid.has(*i)) {
        return candidates[i];
    }

    // Every candidate collides with the viewport, so the anchor itself must overflow
    // (or the viewport is very narrow). Push the tooltip in from the overflowing side.
    if anchor.x0 < 0.0 {
        opts.threshold
    } else {
        viewport_width - (tooltip_width + opts.threshold)
    }
}

/// Computes the tooltip's `top` offset.
#[must_use]
pub fn top(anchor: Rect, tooltip_height: f64, viewport_height: f64, opts: &TooltipPlacement) -> f64 {
    const ABOVE: usize = 0;
    const BELOW: usize = 1;

    let below = anchor.y1 + opts.anchor_gap;
    let above = anchor.y0 - (opts.anchor_gap + tooltip_height);
    let candidates = [above, below];
    let valid = Valid::new(
        candidates.map(|pos| tier(pos, tooltip_height, viewport_height, opts.threshold)),
    );

    match opts.y {
        YPosition::Above if valid.has(ABOVE) => return above,
        YPosition::Below if valid.has(BELOW) => return below,
        _ => {}
    }
    if valid.has(BELOW) {
        below
    } else if valid.has(ABOVE) {
        above
    } else {
        // Only reachable with a very short viewport.
        below
    }
}
