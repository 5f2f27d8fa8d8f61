// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stop-ladder navigation.
//!
//! A `Specific` height mode snaps the sheet to a ladder of stops: releases
//! settle at the nearest stop, fast upward flicks jump one stop higher, and
//! dismissal steps down through the ladder before leaving the screen.
//!
//! Run:
//! - `cargo run -p groundsheet_demos --example specific_stops`

use groundsheet_drag::{Behavior, DragController};
use groundsheet_height::{HeightMode, HeightValue, Viewport, resolve_stops};

fn main() {
    let viewport = Viewport::new(390.0, 844.0);
    let values = vec![
        HeightValue::Fixed(180.0),
        HeightValue::ScreenRatio(0.5),
        HeightValue::FULLSCREEN,
    ];
    println!("ladder: {:?}", resolve_stops(&values, &viewport, 0.0));

    let behavior = Behavior {
        height_mode: HeightMode::specific(values).unwrap(),
        ..Behavior::default()
    };
    let mut controller = DragController::new(behavior);

    // The nearest stop wins on a gentle release.
    controller.begin(422.0, 0.0);
    println!("gentle release:  {:?}", controller.end(-60.0, 0.0, &viewport));

    // A fast upward flick jumps one stop higher instead.
    controller.begin(422.0, 0.0);
    println!(
        "upward flick:    {:?}",
        controller.end(-60.0, -900.0, &viewport)
    );

    // Dismissal from a middle stop steps down the ladder first.
    controller.begin(422.0, 0.0);
    println!(
        "downward flick:  {:?}",
        controller.end(60.0, 900.0, &viewport)
    );

    // Only the lowest stop lets the sheet leave the screen.
    controller.begin(180.0, 0.0);
    println!(
        "from the bottom: {:?}",
        controller.end(40.0, 900.0, &viewport)
    );
}
