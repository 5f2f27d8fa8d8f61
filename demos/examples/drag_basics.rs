// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller basics.
//!
//! This minimal example drives one pan gesture through the controller:
//! tracking frames while the finger moves, elastic damping past the
//! maximum, and the settle-or-dismiss decision at release.
//!
//! Run:
//! - `cargo run -p groundsheet_demos --example drag_basics`

use groundsheet_drag::{Behavior, DragController};
use groundsheet_height::{HeightMode, Viewport};

fn main() {
    let viewport = Viewport::new(390.0, 844.0);
    let behavior = Behavior {
        height_mode: HeightMode::free(Some(250.0), Some(650.0)),
        ..Behavior::default()
    };
    let mut controller = DragController::new(behavior);

    // The sheet rests at 400 points when the finger lands.
    controller.begin(400.0, 0.0);

    println!("== Tracking ==");
    for translation in [-80.0, -180.0, -320.0, 40.0, 120.0, 180.0] {
        let frame = controller.update(translation, &viewport).unwrap();
        println!(
            "  translation={translation:>7.1}  height={:.1}  bottom_offset={:.1}",
            frame.height, frame.bottom_offset
        );
    }

    // Released 120 points below the start, drifting down slowly.
    let outcome = controller.end(120.0, 90.0, &viewport).unwrap();
    println!("== Release (gentle) == {outcome:?}");

    // A fast downward flick from the same rest height dismisses instead.
    controller.begin(400.0, 0.0);
    let outcome = controller.end(30.0, 900.0, &viewport).unwrap();
    println!("== Release (flick down) == {outcome:?}");
}
