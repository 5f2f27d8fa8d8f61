// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Height ceilings derived from what sits above the sheet.

use crate::viewport::Viewport;

/// Clearance kept below a navigation bar when a sheet rises up to it.
pub const NAVIGATION_BAR_CLEARANCE: f64 = 8.0;

/// The ceiling a sheet's height may never exceed.
///
/// Resolved against a [`Viewport`] with [`HeightLimit::max_height`]; the
/// result is the `maximum_height` every mode is clamped to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HeightLimit {
    /// Stop just below a navigation bar behind the sheet, or below the
    /// status bar when no bar is present.
    #[default]
    NavigationBar,
    /// Stop below the status bar / notch, covering any navigation bar.
    StatusBar,
    /// The sheet may cover the entire viewport.
    Screen,
}

impl HeightLimit {
    /// Resolve this limit to the tallest height a sheet may take in `viewport`.
    pub fn max_height(self, viewport: &Viewport) -> f64 {
        match self {
            Self::NavigationBar => match viewport.navigation_bar_bottom {
                Some(bar_bottom) => viewport.height - (bar_bottom + NAVIGATION_BAR_CLEARANCE),
                None => viewport.height - viewport.top_inset,
            },
            Self::StatusBar => viewport.height - viewport.top_inset,
            Self::Screen => viewport.height,
        }
    }
}
