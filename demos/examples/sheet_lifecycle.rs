// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full presentation walkthrough.
//!
//! Presents a sheet over a phone-sized viewport, arbitrates one touch
//! against an embedded scroll, tracks a drag, and drives the dismissal,
//! printing every update the host would apply along the way.
//!
//! Run:
//! - `cargo run -p groundsheet_demos --example sheet_lifecycle`

use groundsheet_drag::Behavior;
use groundsheet_height::Viewport;
use groundsheet_presenter::arbitration::{self, EmbeddedScroll};
use groundsheet_presenter::{PositionListener, SheetContent, SheetPresenter, SheetUpdate, Theme};
use kurbo::Point;

struct Menu;

impl SheetContent for Menu {
    fn preferred_height(&self) -> Option<f64> {
        Some(320.0)
    }
}

struct PrintPosition;

impl PositionListener for PrintPosition {
    fn position_changed(&mut self, y: f64) {
        println!("[position] top edge -> y={y:.1}");
    }
}

fn print_updates(label: &str, updates: &[SheetUpdate]) {
    println!("== {label} ==");
    for update in updates {
        println!(
            "  height={:.1}  offset={:.1}  dimming={:.2}  transition={:?}",
            update.frame.height, update.frame.bottom_offset, update.dimming_alpha, update.transition
        );
    }
}

fn main() {
    let viewport = Viewport::new(390.0, 844.0).with_insets(47.0, 34.0);
    let mut sheet = SheetPresenter::new(Box::new(Menu), Theme::default(), Behavior::default());
    sheet.add_position_listener(Box::new(PrintPosition));

    let updates = sheet.present(&viewport);
    print_updates("Present", &updates);
    sheet.animation_finished();

    // The pan recognizer asks whether it may claim a touch on the sheet.
    let zones = sheet.gesture_zones(&viewport);
    let touch = Point::new(195.0, zones.sheet.y0 + 10.0);
    let begins = arbitration::pan_should_begin(sheet.behavior().swipe_mode, &zones, touch);
    println!("pan may begin at ({:.0}, {:.0}): {begins}", touch.x, touch.y);
    let wins = arbitration::pan_wins_over_scroll(
        sheet.behavior().swipe_mode,
        &zones,
        touch,
        12.0,
        EmbeddedScroll {
            sole_top_level: true,
            at_top: true,
        },
    );
    println!("pan outranks the embedded scroll: {wins}");

    sheet.drag_began(&viewport);
    if let Some(update) = sheet.drag_changed(60.0, &viewport) {
        print_updates("Drag", &[update]);
    }
    let updates = sheet.drag_ended(60.0, 0.0, &viewport);
    print_updates("Release", &updates);

    let updates = sheet.dismiss(&viewport);
    print_updates("Dismiss", &updates);
    println!(
        "phase after the host finishes: {:?}",
        sheet.animation_finished()
    );
}
