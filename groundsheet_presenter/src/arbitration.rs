// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture arbitration policy.
//!
//! ## Overview
//!
//! Three recognizers can compete over a touch on the sheet: the sheet's own
//! pan, the grabber tap, and the scroll gesture of a scrollable region
//! embedded in the content. The host owns the recognizers; these pure
//! functions answer who wins, given the hit zones of the current frame
//! ([`crate::presenter::SheetPresenter::gesture_zones`]) and a sample of the
//! embedded scroll state.
//!
//! The rules:
//!
//! - A touch in the grabber zone always belongs to the sheet.
//! - Elsewhere, the sheet's pan only starts where the
//!   [`SwipeMode`] allows it.
//! - An embedded scrollable keeps its scroll unless it is the sole top-level
//!   region, already at its own top, the user is dragging downward, and the
//!   swipe mode is [`SwipeMode::Full`]. Then the sheet takes over and the
//!   host cancels the scroll.

use groundsheet_drag::SwipeMode;
use kurbo::{Point, Rect};

/// Hit zones for the sheet at its current frame, in viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureZones {
    /// The whole sheet surface.
    pub sheet: Rect,
    /// The grabber zone at the top of the sheet; degenerate when the theme
    /// has no grabber.
    pub grabber: Rect,
}

/// State of an embedded scrollable region, sampled when gestures compete.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbeddedScroll {
    /// The scrollable is the sole top-level child of the content.
    pub sole_top_level: bool,
    /// The scrollable currently sits at its own top.
    pub at_top: bool,
}

/// Whether the sheet's pan recognizer may start a drag at `location`.
pub fn pan_should_begin(swipe_mode: SwipeMode, zones: &GestureZones, location: Point) -> bool {
    match swipe_mode {
        SwipeMode::Top => zones.grabber.contains(location),
        SwipeMode::Full => zones.sheet.contains(location),
        SwipeMode::None => false,
    }
}

/// Whether the grabber tap recognizer may fire at `location`.
pub fn tap_should_begin(zones: &GestureZones, location: Point) -> bool {
    zones.grabber.contains(location)
}

/// Resolves the sheet's pan against an embedded scroll for one touch.
///
/// `true` means the sheet drags and the host cancels the embedded scroll;
/// `false` leaves the scroll in charge and suppresses the sheet's pan for
/// this touch sequence. `translation_y` is positive for a downward drag.
pub fn pan_wins_over_scroll(
    swipe_mode: SwipeMode,
    zones: &GestureZones,
    location: Point,
    translation_y: f64,
    scroll: EmbeddedScroll,
) -> bool {
    if zones.grabber.contains(location) {
        return true;
    }
    scroll.sole_top_level && scroll.at_top && translation_y > 0.0 && swipe_mode == SwipeMode::Full
}
