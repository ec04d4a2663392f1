// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed lifecycles: a dialog that opens and closes, and a tooltip shown on hover.
//!
//! Both foundations queue frames and timeouts on their own scheduler. The host here is
//! a fixed 16ms frame loop that calls `advance` and logs what the adapters were told.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p lintel_demos --example dialog_and_tooltip`

use kurbo::{Point, Rect, Size};
use lintel_schedule::Millis;
use lintel_widgets::Foundation;
use lintel_widgets::dialog::{DialogAdapter, DialogClass, DialogEventTarget, DialogFoundation};
use lintel_widgets::tooltip::{TooltipAdapter, TooltipClass, TooltipFoundation};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FRAME_MS: Millis = 16;

/// Dialog host that logs every state change.
#[derive(Debug, Default)]
struct LoggingDialog {
    classes: Vec<DialogClass>,
}

impl DialogAdapter for LoggingDialog {
    fn add_class(&mut self, class: DialogClass) {
        info!(%class, "dialog add class");
        self.classes.push(class);
    }

    fn remove_class(&mut self, class: DialogClass) {
        info!(%class, "dialog remove class");
        self.classes.retain(|c| *c != class);
    }

    fn has_class(&self, class: DialogClass) -> bool {
        self.classes.contains(&class)
    }

    fn trap_focus(&mut self, initial: Option<&str>) {
        info!(?initial, "dialog traps focus");
    }

    fn release_focus(&mut self) {
        info!("dialog releases focus");
    }

    fn notify_opened(&mut self) {
        info!("dialog opened");
    }

    fn notify_closed(&mut self, action: &str) {
        info!(action, "dialog closed");
    }
}

/// Tooltip host with a fixed viewport and a button-sized anchor.
#[derive(Debug, Default)]
struct LoggingTooltip {
    classes: Vec<TooltipClass>,
}

impl TooltipAdapter for LoggingTooltip {
    fn add_class(&mut self, class: TooltipClass) {
        self.classes.push(class);
    }

    fn remove_class(&mut self, class: TooltipClass) {
        self.classes.retain(|c| *c != class);
    }

    fn has_class(&self, class: TooltipClass) -> bool {
        self.classes.contains(&class)
    }

    fn set_position(&mut self, origin: Point) {
        info!(x = origin.x, y = origin.y, "tooltip positioned");
    }

    fn viewport_size(&self) -> Size {
        Size::new(800.0, 600.0)
    }

    fn tooltip_size(&self) -> Size {
        Size::new(120.0, 32.0)
    }

    fn anchor_rect(&self) -> Option<Rect> {
        Some(Rect::new(300.0, 200.0, 364.0, 236.0))
    }

    fn notify_hidden(&mut self) {
        info!("tooltip hidden");
    }
}

/// Advances `foundation` frame by frame until `until`.
fn run_frames<F: Foundation>(foundation: &mut F, now: &mut Millis, until: Millis) {
    while *now < until {
        *now += FRAME_MS;
        foundation.advance(*now);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut now = 0;
    let mut dialog = DialogFoundation::new(LoggingDialog::default());
    if let Err(err) = dialog.init() {
        tracing::error!(%err, "dialog failed to initialize");
        return;
    }
    dialog.open();
    run_frames(&mut dialog, &mut now, 200);
    info!(open = dialog.is_open(), phase = ?dialog.phase(), "after open animation");

    dialog.handle_click(&DialogEventTarget {
        action: Some(String::from("accept")),
        ..DialogEventTarget::default()
    });
    run_frames(&mut dialog, &mut now, 320);
    info!(open = dialog.is_open(), "after close animation");

    let mut now = 0;
    let mut tooltip = TooltipFoundation::new(LoggingTooltip::default());
    tooltip.handle_anchor_mouse_enter();
    run_frames(&mut tooltip, &mut now, 240);
    info!(pending = tooltip.is_show_pending(), "hovering");
    run_frames(&mut tooltip, &mut now, 560);
    info!(shown = tooltip.is_shown(), "after show delay");

    tooltip.handle_anchor_mouse_leave();
    run_frames(&mut tooltip, &mut now, 1200);
    tooltip.handle_transition_end();
    info!(shown = tooltip.is_shown(), "after hide delay");
    tooltip.destroy();
}
