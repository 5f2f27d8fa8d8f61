// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag state machine.
//!
//! ## Overview
//!
//! [`DragController`] turns raw vertical gesture callbacks into sheet frames
//! and terminal outcomes. The host owns the recognizer and the surface; the
//! controller owns the policy. The protocol per gesture is:
//!
//! 1. [`begin`] with the sheet's current height and the measured content
//!    height. Both are frozen for the rest of the gesture.
//! 2. [`update`] with the vertical translation since gesture start, as often
//!    as the recognizer fires. Each call answers the [`SheetFrame`] to apply,
//!    including elastic overshoot past the maximum and the slide (or elastic
//!    resistance) below the minimum.
//! 3. [`end`] with the final translation and velocity. The returned
//!    [`DragOutcome`] says whether to dismiss or which height to settle at.
//!
//! [`cancel`] stands in for `end` when the recognizer gives up on the gesture,
//! and [`reset`] discards a session when an external height recompute
//! pre-empts it.
//!
//! [`begin`]: DragController::begin
//! [`update`]: DragController::update
//! [`end`]: DragController::end
//! [`cancel`]: DragController::cancel
//! [`reset`]: DragController::reset

use groundsheet_height::Viewport;

use crate::behavior::Behavior;
use crate::types::{DragOutcome, SheetFrame};

/// One in-flight gesture.
///
/// Both fields are captured at gesture start and frozen, so every change and
/// the final classification evaluate against the same baseline even if the
/// embedded content resizes mid-gesture.
#[derive(Copy, Clone, Debug)]
struct Session {
    height_at_start: f64,
    child_height_at_start: f64,
}

/// Drives one sheet's drag interaction.
///
/// Exactly one gesture may be active at a time; a second [`begin`] replaces
/// the session. The controller holds no geometry of its own: bounds are
/// recomputed from the [`Behavior`]'s height mode on every call, against the
/// frozen child baseline.
///
/// [`begin`]: DragController::begin
#[derive(Clone, Debug)]
pub struct DragController {
    behavior: Behavior,
    session: Option<Session>,
}

impl DragController {
    /// Creates an idle controller with the given behavior.
    pub const fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            session: None,
        }
    }

    /// The behavior this controller applies.
    pub const fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Whether a gesture is currently active.
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a gesture at the sheet's current geometry.
    ///
    /// `current_height` is the height the sheet rests at; `child_height` is
    /// the measured content height. Both become the frozen baseline for this
    /// gesture.
    pub fn begin(&mut self, current_height: f64, child_height: f64) {
        self.session = Some(Session {
            height_at_start: current_height,
            child_height_at_start: child_height,
        });
    }

    /// The frame for a vertical translation since gesture start.
    ///
    /// Positive `translation_y` is a downward drag. Past the maximum height
    /// the overshoot is damped by the behavior's elasticity; below the minimum
    /// the sheet slides toward dismissal, or meets the same elastic resistance
    /// when swiping to dismiss is disallowed. Returns `None` when no gesture
    /// is active.
    pub fn update(&self, translation_y: f64, viewport: &Viewport) -> Option<SheetFrame> {
        let session = self.session.as_ref()?;
        Some(self.frame_for(session, translation_y, viewport))
    }

    fn frame_for(&self, session: &Session, translation_y: f64, viewport: &Viewport) -> SheetFrame {
        let child = session.child_height_at_start;
        let min = self.behavior.height_mode.minimum_height(child, viewport);
        let max = self.behavior.height_mode.maximum_height(child, viewport);
        let destination = session.height_at_start - translation_y;
        if destination > max {
            SheetFrame::resting(max + (self.behavior.elasticity)(destination - max))
        } else if destination < min {
            let bottom_offset = if self.behavior.allows_swipe_to_dismiss {
                destination - min
            } else {
                -(self.behavior.elasticity)(min - destination)
            };
            SheetFrame {
                height: min,
                bottom_offset,
            }
        } else {
            SheetFrame::resting(destination)
        }
    }

    /// Classifies a finished gesture and returns the controller to idle.
    ///
    /// Evaluated in order:
    ///
    /// 1. Dismiss test: the translation exceeds the threshold fraction of the
    ///    start height, or the downward velocity exceeds its threshold. With
    ///    discrete stops the sheet steps down to the next lower stop instead
    ///    of dismissing; dismissal only happens from the lowest stop, and only
    ///    when swiping to dismiss is allowed (else the sheet settles back at
    ///    the minimum).
    /// 2. Fast upward flick: jumps to the next stop up, or the maximum height
    ///    when already at the top.
    /// 3. Otherwise: settle at the expected height for the released position,
    ///    elastic displacement included.
    ///
    /// Returns `None` when no gesture is active.
    pub fn end(
        &mut self,
        translation_y: f64,
        velocity_y: f64,
        viewport: &Viewport,
    ) -> Option<DragOutcome> {
        let session = self.session.take()?;
        let behavior = &self.behavior;
        let mode = &behavior.height_mode;
        let child = session.child_height_at_start;
        let frame = self.frame_for(&session, translation_y, viewport);

        let past_distance = translation_y
            > session.height_at_start * behavior.height_percentage_threshold_to_dismiss;
        let past_velocity = velocity_y > behavior.velocity_threshold_to_dismiss;
        if past_distance || past_velocity {
            // The sheet rests on a stop between gestures, so the start height
            // anchors the neighbor lookup.
            if mode.is_specific() {
                if let Some(below) = mode.next_stop(session.height_at_start, false, child, viewport)
                {
                    return Some(DragOutcome::Settle { height: below });
                }
            }
            return Some(if behavior.allows_swipe_to_dismiss {
                DragOutcome::Dismiss
            } else {
                DragOutcome::Settle {
                    height: mode.minimum_height(child, viewport),
                }
            });
        }

        if velocity_y < -behavior.velocity_threshold_to_open_at_max_height {
            let height = mode
                .next_stop(session.height_at_start, true, child, viewport)
                .unwrap_or_else(|| mode.maximum_height(child, viewport));
            return Some(DragOutcome::Settle { height });
        }

        Some(DragOutcome::Settle {
            height: mode.expected_height(frame.height, child, viewport),
        })
    }

    /// A gesture the recognizer cancelled.
    ///
    /// Handled as a zero-distance, zero-velocity [`end`]: the sheet settles
    /// where it started and never dismisses.
    ///
    /// [`end`]: DragController::end
    pub fn cancel(&mut self, viewport: &Viewport) -> Option<DragOutcome> {
        self.end(0.0, 0.0, viewport)
    }

    /// Discards any active gesture without an outcome.
    ///
    /// Used when an external height recompute pre-empts the gesture; the
    /// recompute supersedes the settle.
    pub fn reset(&mut self) {
        self.session = None;
    }
}
