// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet behavior configuration.

use groundsheet_height::{Elasticity, HeightMode, elasticity};

/// Where on the sheet a downward swipe is recognized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SwipeMode {
    /// Only swipes starting in the grabber zone move the sheet.
    Top,
    /// Swipes starting anywhere on the sheet move it.
    #[default]
    Full,
    /// The swipe gesture is disabled; the sheet is only moved
    /// programmatically.
    None,
}

/// How a sheet behaves: gesture thresholds, animation durations, and the
/// height mode.
///
/// Constructed once by the presenter of the sheet and immutable for the
/// sheet's lifetime. All fields are plain data; out-of-range values saturate
/// where they are consumed rather than being rejected here.
#[derive(Clone, Debug)]
pub struct Behavior {
    /// Duration of the appearing animation, in seconds.
    pub appearing_duration: f64,
    /// Duration of the disappearing animation, in seconds.
    pub disappearing_duration: f64,
    /// Where a downward swipe is recognized.
    pub swipe_mode: SwipeMode,
    /// Forward touches outside the sheet to the content behind it instead of
    /// treating them as dimming-background taps.
    pub forward_events_to_rear: bool,
    /// Fraction of the height at gesture start that must be swiped down for
    /// a release to dismiss (or step down) instead of settling back.
    pub height_percentage_threshold_to_dismiss: f64,
    /// Downward velocity, in points per second, above which a release
    /// dismisses regardless of distance.
    pub velocity_threshold_to_dismiss: f64,
    /// Upward velocity, in points per second, above which a release jumps to
    /// the next stop up (or the maximum height).
    pub velocity_threshold_to_open_at_max_height: f64,
    /// Recompute the height when the system font scale changes.
    pub update_height_on_font_scale_change: bool,
    /// Whether swiping down past the minimum height may dismiss the sheet at
    /// all. When `false`, drags below the minimum meet elastic resistance.
    pub allows_swipe_to_dismiss: bool,
    /// Whether a tap on the dimming background dismisses the sheet.
    pub can_touch_dimming_background_to_dismiss: bool,
    /// How the sheet's height is chosen and constrained.
    pub height_mode: HeightMode,
    /// Damping applied to drags past the maximum height.
    pub elasticity: Elasticity,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            appearing_duration: 0.5,
            disappearing_duration: 0.5,
            swipe_mode: SwipeMode::Full,
            forward_events_to_rear: false,
            height_percentage_threshold_to_dismiss: 0.5,
            velocity_threshold_to_dismiss: 700.0,
            velocity_threshold_to_open_at_max_height: 700.0,
            update_height_on_font_scale_change: false,
            allows_swipe_to_dismiss: true,
            can_touch_dimming_background_to_dismiss: true,
            height_mode: HeightMode::fit_content(),
            elasticity: elasticity::logarithmic,
        }
    }
}
