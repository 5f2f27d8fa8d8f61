// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frames and drag outcomes exchanged with the host.

use groundsheet_height::Viewport;

/// The vertical placement of a sheet, in points.
///
/// `height` is the visible extent of the sheet surface; `bottom_offset` is
/// how far its bottom edge sits below the viewport bottom. A resting sheet
/// has offset 0; the offset goes negative while the sheet slides toward
/// dismissal or is pushed below its minimum height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetFrame {
    /// Visible height of the sheet surface.
    pub height: f64,
    /// Displacement of the bottom edge below the viewport bottom (<= 0).
    pub bottom_offset: f64,
}

impl SheetFrame {
    /// A frame resting on the viewport bottom.
    pub const fn resting(height: f64) -> Self {
        Self {
            height,
            bottom_offset: 0.0,
        }
    }

    /// The top edge of the sheet in viewport coordinates (0 at the top).
    ///
    /// This is the value position listeners receive after every layout pass.
    pub fn top_edge(&self, viewport: &Viewport) -> f64 {
        viewport.height - self.height - self.bottom_offset
    }
}

/// Terminal classification of a drag gesture.
///
/// Returned by [`DragController::end`](crate::DragController::end) and
/// [`DragController::cancel`](crate::DragController::cancel); the controller
/// itself is back to idle either way, the caller animates the result.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragOutcome {
    /// Animate the sheet to this height, bottom offset 0.
    Settle {
        /// The height to settle at.
        height: f64,
    },
    /// Slide the sheet out and tear it down.
    Dismiss,
}
