// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for placement bounds.

use kurbo::{Rect, Size, Vec2};
use lintel_placement::surface::{self, SurfaceMeasurements, SurfaceOptions};
use lintel_placement::tooltip::{self, TooltipPlacement, XPosition};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tooltip_stays_in_viewport_when_anchor_is_visible(
        x in 0.0_f64..400.0,
        w in 1.0_f64..100.0,
        tip in 1.0_f64..80.0,
        pref in 0_u8..4,
        rtl in any::<bool>(),
    ) {
        let viewport = 500.0;
        let anchor = Rect::new(x, 0.0, x + w, 10.0);
        let opts = TooltipPlacement {
            x: match pref {
                0 => XPosition::Detected,
                1 => XPosition::Start,
                2 => XPosition::Center,
                _ => XPosition::End,
            },
            rtl,
            ..TooltipPlacement::default()
        };
        let left = tooltip::left(anchor, tip, viewport, &opts);
        prop_assert!(left >= 0.0, "left {left} is negative");
        prop_assert!(left + tip <= viewport, "left {left} overflows");
    }

    #[test]
    fn surface_corner_only_adds_bits(
        ax in 0.0_f64..900.0,
        ay in 0.0_f64..760.0,
        sw in 10.0_f64..400.0,
        sh in 10.0_f64..600.0,
    ) {
        let m = SurfaceMeasurements {
            anchor: Some(Rect::new(ax, ay, ax + 50.0, ay + 30.0)),
            surface: Size::new(sw, sh),
            viewport: Size::new(1000.0, 800.0),
            body: Size::new(1000.0, 800.0),
            window_scroll: Vec2::ZERO,
        };
        let opts = SurfaceOptions::default();
        let placed = surface::layout(&m, &opts);
        prop_assert!(placed.corner.contains(opts.origin_corner));
        prop_assert_eq!(placed.open_below, placed.position.top.is_some());
        prop_assert_eq!(placed.position.bottom.is_some(), placed.position.top.is_none());
        prop_assert_eq!(placed.position.left.is_some(), placed.position.right.is_none());
    }
}
