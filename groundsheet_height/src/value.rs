// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Individual height stops and their resolution to points.

use alloc::vec::Vec;

use crate::viewport::Viewport;

/// One allowed height for the `Specific` mode, resolved against the live
/// geometry at use time.
///
/// Out-of-range inputs saturate: a `Fixed` value is clamped to the viewport
/// height, ratios are clamped to `[0, 1]` before multiplying. A [`Custom`]
/// value is whatever its function returns, uninterpreted.
///
/// [`Custom`]: HeightValue::Custom
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HeightValue {
    /// An absolute height in points.
    Fixed(f64),
    /// A fraction of the viewport height.
    ScreenRatio(f64),
    /// A fraction of the embedded content height.
    ChildRatio(f64),
    /// A caller-supplied height source.
    Custom(fn() -> f64),
}

impl HeightValue {
    /// The embedded content's full height.
    pub const FIT_CONTENT: Self = Self::ChildRatio(1.0);

    /// The full viewport height.
    pub const FULLSCREEN: Self = Self::ScreenRatio(1.0);

    /// Resolve this value to points.
    pub fn resolve(self, viewport: &Viewport, child_height: f64) -> f64 {
        match self {
            Self::Fixed(points) => points.clamp(0.0, viewport.height),
            Self::ScreenRatio(fraction) => fraction.clamp(0.0, 1.0) * viewport.height,
            Self::ChildRatio(fraction) => fraction.clamp(0.0, 1.0) * child_height,
            Self::Custom(height_fn) => height_fn(),
        }
    }
}

/// Resolve every value to points and sort the result ascending.
///
/// Duplicates are kept; they simply occupy adjacent positions in the sorted
/// sequence. Callers re-resolve whenever the viewport or the content height
/// may have changed; the result is never cached.
pub fn resolve_stops(values: &[HeightValue], viewport: &Viewport, child_height: f64) -> Vec<f64> {
    let mut stops: Vec<f64> = values
        .iter()
        .map(|value| value.resolve(viewport, child_height))
        .collect();
    stops.sort_by(f64::total_cmp);
    stops
}
