// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host viewport geometry.

/// Geometry of the viewport hosting a sheet, in points.
///
/// Every height computation takes a `Viewport` parameter instead of reading
/// screen state from process globals, so the same configuration can be
/// resolved against any geometry (rotation, split screen, tests).
///
/// Hosts supply fresh values on every layout pass; nothing in this crate
/// caches a viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
    /// Top safe-area inset (status bar / notch).
    pub top_inset: f64,
    /// Bottom safe-area inset (home indicator).
    pub bottom_inset: f64,
    /// Bottom edge of a navigation bar obscuring the top of the viewport,
    /// measured from the top, if one is present behind the sheet.
    pub navigation_bar_bottom: Option<f64>,
}

impl Viewport {
    /// A viewport with no safe-area insets and no navigation bar.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            top_inset: 0.0,
            bottom_inset: 0.0,
            navigation_bar_bottom: None,
        }
    }

    /// Replace the safe-area insets.
    pub const fn with_insets(mut self, top: f64, bottom: f64) -> Self {
        self.top_inset = top;
        self.bottom_inset = bottom;
        self
    }

    /// Record a navigation bar whose bottom edge sits at `bottom` from the top.
    pub const fn with_navigation_bar(mut self, bottom: f64) -> Self {
        self.navigation_bar_bottom = Some(bottom);
        self
    }
}
