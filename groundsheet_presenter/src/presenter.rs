// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet lifecycle orchestration.
//!
//! ## Overview
//!
//! [`SheetPresenter`] ties the measurement chain, the height policy, and the
//! drag state machine to a host surface. It is command-emitting: every
//! operation returns [`SheetUpdate`]s naming the frame, dimming opacity, and
//! transition to apply, and the host reports animated applications back
//! through [`animation_finished`]. Nothing here touches a view hierarchy, so
//! the whole lifecycle runs synchronously and deterministically.
//!
//! ## Lifecycle
//!
//! [`SheetPhase`] advances `Hidden → Appearing → Presented → Disappearing →
//! Dismissed`. [`present`] measures the content, places the sheet just below
//! the viewport, and springs it in; [`dismiss`] reverses that. Gesture
//! callbacks are only honored while the sheet is `Presented`.
//!
//! [`animation_finished`]: SheetPresenter::animation_finished
//! [`present`]: SheetPresenter::present
//! [`dismiss`]: SheetPresenter::dismiss

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use groundsheet_drag::{Behavior, DragController, DragOutcome, SheetFrame};
use groundsheet_height::Viewport;
use kurbo::Rect;

use crate::arbitration::GestureZones;
use crate::measure::{self, SheetContent};
use crate::theme::Theme;

/// Duration of the settle animation after a drag ends, in seconds.
const SETTLE_DURATION: f64 = 0.2;
/// Duration of the animation toward a changed content height, in seconds.
const RESIZE_DURATION: f64 = 0.3;

/// Where a sheet is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SheetPhase {
    /// Constructed, never presented.
    #[default]
    Hidden,
    /// Appear animation in flight.
    Appearing,
    /// On screen and interactive.
    Presented,
    /// Disappear animation in flight.
    Disappearing,
    /// Gone; the presenter can be dropped.
    Dismissed,
}

/// Interpolation curve for a [`Transition`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TransitionCurve {
    /// Damped spring, eased out.
    Spring {
        /// Damping ratio; 1.0 is critically damped.
        damping: f64,
        /// Initial velocity as a fraction of the travel distance per second.
        initial_velocity: f64,
    },
    /// Symmetric ease-in-out.
    EaseInOut,
}

/// An animated application of a [`SheetUpdate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Duration in seconds.
    pub duration: f64,
    /// Interpolation curve.
    pub curve: TransitionCurve,
}

impl Transition {
    fn spring(duration: f64) -> Self {
        Self {
            duration,
            curve: TransitionCurve::Spring {
                damping: 1.0,
                initial_velocity: 0.1,
            },
        }
    }

    fn ease(duration: f64) -> Self {
        Self {
            duration,
            curve: TransitionCurve::EaseInOut,
        }
    }
}

/// One command for the host: apply this frame and dimming, animated or not.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetUpdate {
    /// The sheet frame to apply.
    pub frame: SheetFrame,
    /// Opacity of the theme's dimming color behind the sheet, in `[0, 1]`.
    pub dimming_alpha: f64,
    /// How to animate there; `None` applies immediately.
    pub transition: Option<Transition>,
}

/// Observes the sheet's top edge.
///
/// Called after every emitted layout with the top edge's vertical viewport
/// coordinate, so content behind the sheet can keep its bottom inset clear
/// of the sheet.
pub trait PositionListener {
    /// The sheet's top edge moved to `y` (0 is the top of the viewport).
    fn position_changed(&mut self, y: f64);
}

/// Observes user interactions beyond plain drags.
pub trait InteractionListener {
    /// The user tapped the dimming background outside the sheet.
    fn tapped_outside(&mut self);
}

/// Orchestrates one bottom sheet against a host surface.
///
/// ## Usage
///
/// - Construct with [`SheetPresenter::new`], register listeners, then call
///   [`present`] with the current viewport and apply the returned updates.
/// - Feed recognizer callbacks to [`drag_began`], [`drag_changed`],
///   [`drag_ended`], and [`drag_cancelled`]; use
///   [`gesture_zones`] with [`crate::arbitration`] to decide which
///   recognizer owns a touch.
/// - Report every animated application back with [`animation_finished`] so
///   the phase can advance.
/// - Call [`content_height_changed`] when the embedded content resized, and
///   [`dismiss`] to drive the sheet out.
///
/// ## See Also
///
/// [`crate::stack::SheetStack`] for tracking the topmost of several
/// presented sheets.
///
/// [`present`]: SheetPresenter::present
/// [`dismiss`]: SheetPresenter::dismiss
/// [`drag_began`]: SheetPresenter::drag_began
/// [`drag_changed`]: SheetPresenter::drag_changed
/// [`drag_ended`]: SheetPresenter::drag_ended
/// [`drag_cancelled`]: SheetPresenter::drag_cancelled
/// [`gesture_zones`]: SheetPresenter::gesture_zones
/// [`animation_finished`]: SheetPresenter::animation_finished
/// [`content_height_changed`]: SheetPresenter::content_height_changed
pub struct SheetPresenter {
    theme: Theme,
    drag: DragController,
    content: Box<dyn SheetContent>,
    position_listeners: Vec<Box<dyn PositionListener>>,
    interaction_listeners: Vec<Box<dyn InteractionListener>>,
    phase: SheetPhase,
    frame: SheetFrame,
    child_height: f64,
    appeared: bool,
}

impl core::fmt::Debug for SheetPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SheetPresenter")
            .field("phase", &self.phase)
            .field("frame", &self.frame)
            .field("child_height", &self.child_height)
            .field("appeared", &self.appeared)
            .finish_non_exhaustive()
    }
}

impl SheetPresenter {
    /// Creates a hidden presenter for the given content.
    pub fn new(content: Box<dyn SheetContent>, theme: Theme, behavior: Behavior) -> Self {
        Self {
            theme,
            drag: DragController::new(behavior),
            content,
            position_listeners: Vec::new(),
            interaction_listeners: Vec::new(),
            phase: SheetPhase::Hidden,
            frame: SheetFrame::resting(0.0),
            child_height: 0.0,
            appeared: false,
        }
    }

    /// The theme this sheet renders with.
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The behavior this sheet obeys.
    pub const fn behavior(&self) -> &Behavior {
        self.drag.behavior()
    }

    /// Current lifecycle phase.
    pub const fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// The frame last emitted for this sheet.
    pub const fn frame(&self) -> SheetFrame {
        self.frame
    }

    /// The content height the last layout used.
    pub const fn child_height(&self) -> f64 {
        self.child_height
    }

    /// Registers a listener for top-edge changes.
    ///
    /// Listeners are told in registration order, on every emitted layout.
    pub fn add_position_listener(&mut self, listener: Box<dyn PositionListener>) {
        self.position_listeners.push(listener);
    }

    /// Registers a listener for non-drag interactions.
    pub fn add_interaction_listener(&mut self, listener: Box<dyn InteractionListener>) {
        self.interaction_listeners.push(listener);
    }

    /// Presents the sheet.
    ///
    /// Measures the content, places the sheet just below the viewport at its
    /// expected height (immediate), then springs it to rest while the
    /// dimming backdrop fades in (animated). Runs once; later calls answer
    /// nothing.
    pub fn present(&mut self, viewport: &Viewport) -> Vec<SheetUpdate> {
        if self.phase != SheetPhase::Hidden {
            return Vec::new();
        }
        self.child_height = measure::child_height(self.content.as_ref(), &self.theme, viewport);
        let height = self.expected_height(viewport);
        let appearing = self.behavior().appearing_duration;
        self.phase = SheetPhase::Appearing;

        let placement = self.apply(
            SheetFrame {
                height,
                bottom_offset: -height,
            },
            0.0,
            None,
            viewport,
        );
        let appear = self.apply(
            SheetFrame::resting(height),
            1.0,
            Some(Transition::spring(appearing)),
            viewport,
        );
        vec![placement, appear]
    }

    /// Drives the sheet out.
    ///
    /// Slides the sheet below the viewport while the dimming backdrop fades
    /// to clear, discarding any in-flight drag. Empty when the sheet is not
    /// on screen.
    pub fn dismiss(&mut self, viewport: &Viewport) -> Vec<SheetUpdate> {
        if !matches!(self.phase, SheetPhase::Appearing | SheetPhase::Presented) {
            return Vec::new();
        }
        self.drag.reset();
        self.phase = SheetPhase::Disappearing;
        let disappearing = self.behavior().disappearing_duration;
        let height = self.frame.height;
        let update = self.apply(
            SheetFrame {
                height,
                bottom_offset: -height,
            },
            0.0,
            Some(Transition::spring(disappearing)),
            viewport,
        );
        vec![update]
    }

    /// The host finished applying an animated update.
    ///
    /// Advances `Appearing` to `Presented` (after which content resizes
    /// animate instead of snapping) and `Disappearing` to `Dismissed`.
    /// Returns the phase now in effect.
    pub fn animation_finished(&mut self) -> SheetPhase {
        match self.phase {
            SheetPhase::Appearing => {
                self.phase = SheetPhase::Presented;
                self.appeared = true;
            }
            SheetPhase::Disappearing => self.phase = SheetPhase::Dismissed,
            _ => {}
        }
        self.phase
    }

    /// The embedded content's preferred height changed.
    ///
    /// Re-measures and moves to the new expected height, animated once the
    /// first appearance has completed and immediate before that. Discards
    /// any in-flight drag; this recompute supersedes its settle. `None` when
    /// the height is unchanged or the sheet is not on screen.
    pub fn content_height_changed(&mut self, viewport: &Viewport) -> Option<SheetUpdate> {
        if !matches!(self.phase, SheetPhase::Appearing | SheetPhase::Presented) {
            return None;
        }
        self.drag.reset();
        self.child_height = measure::child_height(self.content.as_ref(), &self.theme, viewport);
        let height = self.expected_height(viewport);
        if height == self.frame.height {
            return None;
        }
        let transition = self.appeared.then(|| Transition::ease(RESIZE_DURATION));
        Some(self.apply(SheetFrame::resting(height), 1.0, transition, viewport))
    }

    /// The system font scale changed.
    ///
    /// Acts as [`content_height_changed`](Self::content_height_changed) when
    /// the behavior opts in; `None` otherwise.
    pub fn font_scale_changed(&mut self, viewport: &Viewport) -> Option<SheetUpdate> {
        if !self.behavior().update_height_on_font_scale_change {
            return None;
        }
        self.content_height_changed(viewport)
    }

    /// A drag gesture began.
    ///
    /// Freezes the current height and a fresh content measurement as the
    /// gesture baseline. Ignored unless the sheet is presented.
    pub fn drag_began(&mut self, viewport: &Viewport) {
        if self.phase != SheetPhase::Presented {
            return;
        }
        let child_height = measure::child_height(self.content.as_ref(), &self.theme, viewport);
        self.drag.begin(self.frame.height, child_height);
    }

    /// A drag gesture moved.
    ///
    /// Applies the controller's frame immediately and keeps the dimming at
    /// full. `None` when no gesture is active.
    pub fn drag_changed(&mut self, translation_y: f64, viewport: &Viewport) -> Option<SheetUpdate> {
        let frame = self.drag.update(translation_y, viewport)?;
        Some(self.apply(frame, 1.0, None, viewport))
    }

    /// A drag gesture ended.
    ///
    /// Settles to the outcome height over the short settle transition, or
    /// drives the disappear animation when the outcome is a dismissal.
    pub fn drag_ended(
        &mut self,
        translation_y: f64,
        velocity_y: f64,
        viewport: &Viewport,
    ) -> Vec<SheetUpdate> {
        match self.drag.end(translation_y, velocity_y, viewport) {
            Some(DragOutcome::Settle { height }) => vec![self.settle(height, viewport)],
            Some(DragOutcome::Dismiss) => self.dismiss(viewport),
            None => Vec::new(),
        }
    }

    /// A drag gesture the recognizer cancelled.
    ///
    /// Settles the sheet back in place, exactly like a zero-distance,
    /// zero-velocity end.
    pub fn drag_cancelled(&mut self, viewport: &Viewport) -> Option<SheetUpdate> {
        match self.drag.cancel(viewport)? {
            DragOutcome::Settle { height } => Some(self.settle(height, viewport)),
            // A zero-velocity cancel cannot dismiss; answered for completeness.
            DragOutcome::Dismiss => self.dismiss(viewport).into_iter().next(),
        }
    }

    /// The user tapped the dimming background outside the sheet.
    ///
    /// Interaction listeners hear the tap first; the sheet then dismisses
    /// when the behavior allows background taps to do so. Inert while events
    /// are forwarded to the rear, since the backdrop is no target then.
    pub fn background_tapped(&mut self, viewport: &Viewport) -> Vec<SheetUpdate> {
        if self.phase != SheetPhase::Presented || self.behavior().forward_events_to_rear {
            return Vec::new();
        }
        for listener in &mut self.interaction_listeners {
            listener.tapped_outside();
        }
        if self.behavior().can_touch_dimming_background_to_dismiss {
            self.dismiss(viewport)
        } else {
            Vec::new()
        }
    }

    /// The user tapped inside the grabber zone.
    ///
    /// Dismisses when the themed grabber opts into touch-to-dismiss.
    pub fn grabber_tapped(&mut self, viewport: &Viewport) -> Vec<SheetUpdate> {
        let dismissable = self
            .theme
            .grabber
            .as_ref()
            .is_some_and(|grabber| grabber.can_touch_to_dismiss);
        if dismissable {
            self.dismiss(viewport)
        } else {
            Vec::new()
        }
    }

    /// Hit zones for gesture arbitration at the current frame.
    pub fn gesture_zones(&self, viewport: &Viewport) -> GestureZones {
        let top = self.frame.top_edge(viewport);
        let bottom = viewport.height - self.frame.bottom_offset;
        let sheet = Rect::new(
            self.theme.leading_margin,
            top,
            viewport.width - self.theme.trailing_margin,
            bottom,
        );
        let grabber = Rect::new(
            sheet.x0,
            top,
            sheet.x1,
            top + self.theme.grabber_zone_height(),
        );
        GestureZones { sheet, grabber }
    }

    /// Applies a frame, tells position listeners, and wraps it as an update.
    fn apply(
        &mut self,
        frame: SheetFrame,
        dimming_alpha: f64,
        transition: Option<Transition>,
        viewport: &Viewport,
    ) -> SheetUpdate {
        self.frame = frame;
        let y = frame.top_edge(viewport);
        for listener in &mut self.position_listeners {
            listener.position_changed(y);
        }
        SheetUpdate {
            frame,
            dimming_alpha,
            transition,
        }
    }

    fn settle(&mut self, height: f64, viewport: &Viewport) -> SheetUpdate {
        self.apply(
            SheetFrame::resting(height),
            1.0,
            Some(Transition::ease(SETTLE_DURATION)),
            viewport,
        )
    }

    fn expected_height(&self, viewport: &Viewport) -> f64 {
        self.behavior()
            .height_mode
            .expected_height(self.frame.height, self.child_height, viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::{Cell, RefCell};
    use groundsheet_height::HeightMode;
    use proptest::prelude::*;

    use crate::theme::Grabber;

    const VP: Viewport = Viewport::new(390.0, 800.0);

    struct Declared(f64);

    impl SheetContent for Declared {
        fn preferred_height(&self) -> Option<f64> {
            Some(self.0)
        }
    }

    struct Adjustable(Rc<Cell<f64>>);

    impl SheetContent for Adjustable {
        fn preferred_height(&self) -> Option<f64> {
            Some(self.0.get())
        }
    }

    struct RecordPositions(Rc<RefCell<Vec<f64>>>);

    impl PositionListener for RecordPositions {
        fn position_changed(&mut self, y: f64) {
            self.0.borrow_mut().push(y);
        }
    }

    struct CountTaps(Rc<Cell<usize>>);

    impl InteractionListener for CountTaps {
        fn tapped_outside(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn fit_presenter(child: f64) -> SheetPresenter {
        SheetPresenter::new(
            Box::new(Declared(child)),
            Theme::default(),
            Behavior::default(),
        )
    }

    fn free_presenter(min: f64, max: f64) -> SheetPresenter {
        let behavior = Behavior {
            height_mode: HeightMode::free(Some(min), Some(max)),
            ..Behavior::default()
        };
        SheetPresenter::new(Box::new(Declared(0.0)), Theme::default(), behavior)
    }

    fn presented(mut sheet: SheetPresenter) -> SheetPresenter {
        sheet.present(&VP);
        sheet.animation_finished();
        assert_eq!(sheet.phase(), SheetPhase::Presented);
        sheet
    }

    #[test]
    fn present_places_the_sheet_below_the_viewport_then_springs_in() {
        let mut sheet = fit_presenter(400.0);
        let updates = sheet.present(&VP);
        assert_eq!(updates.len(), 2);

        assert_eq!(
            updates[0].frame,
            SheetFrame {
                height: 400.0,
                bottom_offset: -400.0,
            }
        );
        assert_eq!(updates[0].dimming_alpha, 0.0);
        assert_eq!(updates[0].transition, None);

        assert_eq!(updates[1].frame, SheetFrame::resting(400.0));
        assert_eq!(updates[1].dimming_alpha, 1.0);
        assert_eq!(
            updates[1].transition,
            Some(Transition {
                duration: 0.5,
                curve: TransitionCurve::Spring {
                    damping: 1.0,
                    initial_velocity: 0.1,
                },
            })
        );
        assert_eq!(sheet.phase(), SheetPhase::Appearing);
    }

    #[test]
    fn present_happens_once() {
        let mut sheet = fit_presenter(400.0);
        assert_eq!(sheet.present(&VP).len(), 2);
        assert!(sheet.present(&VP).is_empty());
    }

    #[test]
    fn free_mode_first_appearance_settles_at_the_minimum() {
        let mut sheet = free_presenter(300.0, 600.0);
        let updates = sheet.present(&VP);
        assert_eq!(updates[1].frame, SheetFrame::resting(300.0));
    }

    #[test]
    fn animation_finished_advances_the_lifecycle() {
        let mut sheet = fit_presenter(400.0);
        assert_eq!(sheet.phase(), SheetPhase::Hidden);
        sheet.present(&VP);
        assert_eq!(sheet.phase(), SheetPhase::Appearing);
        assert_eq!(sheet.animation_finished(), SheetPhase::Presented);
        // Settle animations finish without a phase change.
        assert_eq!(sheet.animation_finished(), SheetPhase::Presented);
        sheet.dismiss(&VP);
        assert_eq!(sheet.phase(), SheetPhase::Disappearing);
        assert_eq!(sheet.animation_finished(), SheetPhase::Dismissed);
    }

    #[test]
    fn dismiss_slides_out_and_clears_the_dimming() {
        let mut sheet = presented(fit_presenter(400.0));
        let updates = sheet.dismiss(&VP);
        assert_eq!(updates.len(), 1);
        assert_eq!(
            updates[0].frame,
            SheetFrame {
                height: 400.0,
                bottom_offset: -400.0,
            }
        );
        assert_eq!(updates[0].dimming_alpha, 0.0);
        assert_eq!(
            updates[0].transition.unwrap().curve,
            TransitionCurve::Spring {
                damping: 1.0,
                initial_velocity: 0.1,
            }
        );
        assert_eq!(sheet.phase(), SheetPhase::Disappearing);
        // Already on the way out; nothing more to emit.
        assert!(sheet.dismiss(&VP).is_empty());
    }

    #[test]
    fn dismiss_before_presenting_is_empty() {
        let mut sheet = fit_presenter(400.0);
        assert!(sheet.dismiss(&VP).is_empty());
        assert_eq!(sheet.phase(), SheetPhase::Hidden);
    }

    #[test]
    fn content_resizes_snap_before_the_first_appearance_completes() {
        let height = Rc::new(Cell::new(400.0));
        let mut sheet = SheetPresenter::new(
            Box::new(Adjustable(Rc::clone(&height))),
            Theme::default(),
            Behavior::default(),
        );
        assert_eq!(sheet.content_height_changed(&VP), None);

        sheet.present(&VP);
        height.set(500.0);
        let update = sheet.content_height_changed(&VP).unwrap();
        assert_eq!(update.frame, SheetFrame::resting(500.0));
        assert_eq!(update.transition, None);

        sheet.animation_finished();
        height.set(450.0);
        let update = sheet.content_height_changed(&VP).unwrap();
        assert_eq!(update.frame, SheetFrame::resting(450.0));
        assert_eq!(update.transition, Some(Transition::ease(0.3)));

        // Unchanged height is a no-op.
        assert_eq!(sheet.content_height_changed(&VP), None);
    }

    #[test]
    fn content_resize_supersedes_an_active_drag() {
        let height = Rc::new(Cell::new(400.0));
        let mut sheet = presented(SheetPresenter::new(
            Box::new(Adjustable(Rc::clone(&height))),
            Theme::default(),
            Behavior::default(),
        ));
        sheet.drag_began(&VP);
        assert!(sheet.drag_changed(10.0, &VP).is_some());

        height.set(500.0);
        assert!(sheet.content_height_changed(&VP).is_some());
        assert_eq!(sheet.drag_changed(20.0, &VP), None);
    }

    #[test]
    fn font_scale_changes_are_opt_in() {
        let mut sheet = presented(fit_presenter(400.0));
        assert_eq!(sheet.font_scale_changed(&VP), None);

        let behavior = Behavior {
            update_height_on_font_scale_change: true,
            ..Behavior::default()
        };
        let height = Rc::new(Cell::new(400.0));
        let mut sheet = presented(SheetPresenter::new(
            Box::new(Adjustable(Rc::clone(&height))),
            Theme::default(),
            behavior,
        ));
        height.set(480.0);
        let update = sheet.font_scale_changed(&VP).unwrap();
        assert_eq!(update.frame, SheetFrame::resting(480.0));
    }

    #[test]
    fn drags_flow_from_tracking_to_settling() {
        let mut sheet = presented(free_presenter(300.0, 600.0));
        sheet.drag_began(&VP);

        let tracking = sheet.drag_changed(-100.0, &VP).unwrap();
        assert_eq!(tracking.frame, SheetFrame::resting(400.0));
        assert_eq!(tracking.dimming_alpha, 1.0);
        assert_eq!(tracking.transition, None);

        let updates = sheet.drag_ended(-100.0, 0.0, &VP);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].frame, SheetFrame::resting(400.0));
        assert_eq!(updates[0].transition, Some(Transition::ease(0.2)));
        assert_eq!(sheet.phase(), SheetPhase::Presented);
        assert_eq!(sheet.frame(), SheetFrame::resting(400.0));
    }

    #[test]
    fn fast_downward_release_dismisses_through_the_presenter() {
        let mut sheet = presented(free_presenter(300.0, 600.0));
        sheet.drag_began(&VP);
        let updates = sheet.drag_ended(0.0, 701.0, &VP);
        assert_eq!(updates.len(), 1);
        assert_eq!(
            updates[0].frame,
            SheetFrame {
                height: 300.0,
                bottom_offset: -300.0,
            }
        );
        assert_eq!(updates[0].dimming_alpha, 0.0);
        assert_eq!(sheet.phase(), SheetPhase::Disappearing);
    }

    #[test]
    fn cancelled_drags_settle_in_place() {
        let mut sheet = presented(free_presenter(300.0, 600.0));
        sheet.drag_began(&VP);
        sheet.drag_changed(-100.0, &VP);
        let update = sheet.drag_cancelled(&VP).unwrap();
        assert_eq!(update.frame, SheetFrame::resting(300.0));
        assert_eq!(sheet.phase(), SheetPhase::Presented);
    }

    #[test]
    fn gestures_are_ignored_until_presented() {
        let mut sheet = fit_presenter(400.0);
        sheet.present(&VP);
        // Still appearing.
        sheet.drag_began(&VP);
        assert_eq!(sheet.drag_changed(10.0, &VP), None);
        assert!(sheet.drag_ended(10.0, 0.0, &VP).is_empty());
    }

    #[test]
    fn background_tap_notifies_listeners_then_dismisses() {
        let taps = Rc::new(Cell::new(0));
        let mut sheet = fit_presenter(400.0);
        sheet.add_interaction_listener(Box::new(CountTaps(Rc::clone(&taps))));
        let mut sheet = presented(sheet);

        let updates = sheet.background_tapped(&VP);
        assert_eq!(taps.get(), 1);
        assert_eq!(updates.len(), 1);
        assert_eq!(sheet.phase(), SheetPhase::Disappearing);
    }

    #[test]
    fn background_tap_without_dismiss_still_notifies() {
        let taps = Rc::new(Cell::new(0));
        let behavior = Behavior {
            can_touch_dimming_background_to_dismiss: false,
            ..Behavior::default()
        };
        let mut sheet = SheetPresenter::new(
            Box::new(Declared(400.0)),
            Theme::default(),
            behavior,
        );
        sheet.add_interaction_listener(Box::new(CountTaps(Rc::clone(&taps))));
        let mut sheet = presented(sheet);

        assert!(sheet.background_tapped(&VP).is_empty());
        assert_eq!(taps.get(), 1);
        assert_eq!(sheet.phase(), SheetPhase::Presented);
    }

    #[test]
    fn forwarding_makes_background_taps_inert() {
        let taps = Rc::new(Cell::new(0));
        let behavior = Behavior {
            forward_events_to_rear: true,
            ..Behavior::default()
        };
        let mut sheet = SheetPresenter::new(
            Box::new(Declared(400.0)),
            Theme::default(),
            behavior,
        );
        sheet.add_interaction_listener(Box::new(CountTaps(Rc::clone(&taps))));
        let mut sheet = presented(sheet);

        assert!(sheet.background_tapped(&VP).is_empty());
        assert_eq!(taps.get(), 0);
        assert_eq!(sheet.phase(), SheetPhase::Presented);
    }

    #[test]
    fn grabber_tap_dismisses_only_when_opted_in() {
        let mut plain = presented(fit_presenter(400.0));
        assert!(plain.grabber_tapped(&VP).is_empty());
        assert_eq!(plain.phase(), SheetPhase::Presented);

        let theme = Theme {
            grabber: Some(Grabber {
                can_touch_to_dismiss: true,
                ..Grabber::default()
            }),
            ..Theme::default()
        };
        let mut sheet = presented(SheetPresenter::new(
            Box::new(Declared(400.0)),
            theme,
            Behavior::default(),
        ));
        assert_eq!(sheet.grabber_tapped(&VP).len(), 1);
        assert_eq!(sheet.phase(), SheetPhase::Disappearing);
    }

    #[test]
    fn gesture_zones_follow_the_frame_and_the_margins() {
        let theme = Theme {
            leading_margin: 10.0,
            trailing_margin: 20.0,
            ..Theme::default()
        };
        let sheet = presented(SheetPresenter::new(
            Box::new(Declared(400.0)),
            theme,
            Behavior::default(),
        ));
        let zones = sheet.gesture_zones(&VP);
        assert_eq!(zones.sheet, Rect::new(10.0, 400.0, 370.0, 800.0));
        assert_eq!(zones.grabber, Rect::new(10.0, 400.0, 370.0, 444.0));
    }

    #[test]
    fn position_listeners_hear_every_layout() {
        let positions = Rc::new(RefCell::new(Vec::new()));
        let mut sheet = fit_presenter(400.0);
        sheet.add_position_listener(Box::new(RecordPositions(Rc::clone(&positions))));

        sheet.present(&VP);
        sheet.animation_finished();
        sheet.drag_began(&VP);
        // Fit content pins the height at 400; the surplus slides the sheet.
        sheet.drag_changed(50.0, &VP);

        assert_eq!(*positions.borrow(), vec![800.0, 400.0, 450.0]);
    }

    proptest! {
        #[test]
        fn presented_height_respects_the_resolved_limit(
            child in 0.0f64..2000.0,
            top_inset in 0.0f64..60.0,
            vp_height in 200.0f64..1200.0,
        ) {
            let viewport = Viewport::new(390.0, vp_height).with_insets(top_inset, 0.0);
            let mut sheet = fit_presenter(child);
            let updates = sheet.present(&viewport);
            let height = updates[1].frame.height;
            prop_assert!(height >= 0.0);
            prop_assert!(height <= vp_height - top_inset);
        }
    }
}
