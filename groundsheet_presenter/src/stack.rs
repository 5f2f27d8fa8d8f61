// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracking for sheets presented on top of each other.

use alloc::vec::Vec;

use groundsheet_height::Viewport;

use crate::presenter::{SheetPresenter, SheetUpdate};

/// A last-in, first-out stack of presented sheets.
///
/// Hosts that allow a sheet to present another sheet keep one of these so
/// dismissal requests land on the topmost sheet, mirroring how modal
/// presentation chains unwind.
#[derive(Debug, Default)]
pub struct SheetStack {
    sheets: Vec<SheetPresenter>,
}

impl SheetStack {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    /// Presents a sheet on top of the stack.
    ///
    /// Returns the presentation updates for the host to apply.
    pub fn present(&mut self, mut sheet: SheetPresenter, viewport: &Viewport) -> Vec<SheetUpdate> {
        let updates = sheet.present(viewport);
        self.sheets.push(sheet);
        updates
    }

    /// The sheet currently on top, if any.
    pub fn topmost(&self) -> Option<&SheetPresenter> {
        self.sheets.last()
    }

    /// The sheet currently on top, for routing gestures and callbacks.
    pub fn topmost_mut(&mut self) -> Option<&mut SheetPresenter> {
        self.sheets.last_mut()
    }

    /// Dismisses the topmost sheet.
    ///
    /// Pops the sheet and starts its disappear animation; the host applies
    /// the updates and drops the returned presenter once they finish. `None`
    /// when the stack is empty.
    pub fn dismiss_topmost(
        &mut self,
        viewport: &Viewport,
    ) -> Option<(SheetPresenter, Vec<SheetUpdate>)> {
        let mut sheet = self.sheets.pop()?;
        let updates = sheet.dismiss(viewport);
        Some((sheet, updates))
    }

    /// Number of sheets on the stack.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Whether no sheet is presented.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;

    use groundsheet_drag::Behavior;

    use crate::measure::SheetContent;
    use crate::presenter::SheetPhase;
    use crate::theme::Theme;

    const VP: Viewport = Viewport::new(390.0, 800.0);

    struct Declared(f64);

    impl SheetContent for Declared {
        fn preferred_height(&self) -> Option<f64> {
            Some(self.0)
        }
    }

    fn sheet(child: f64) -> SheetPresenter {
        SheetPresenter::new(
            Box::new(Declared(child)),
            Theme::default(),
            Behavior::default(),
        )
    }

    #[test]
    fn presenting_pushes_and_emits_the_appearance() {
        let mut stack = SheetStack::new();
        assert!(stack.is_empty());

        let updates = stack.present(sheet(400.0), &VP);
        assert_eq!(updates.len(), 2);
        assert_eq!(stack.len(), 1);
        assert_eq!(
            stack.topmost().map(SheetPresenter::phase),
            Some(SheetPhase::Appearing)
        );
    }

    #[test]
    fn dismissal_unwinds_from_the_top() {
        let mut stack = SheetStack::new();
        stack.present(sheet(300.0), &VP);
        stack.present(sheet(500.0), &VP);
        stack.topmost_mut().unwrap().animation_finished();

        let (dismissed, updates) = stack.dismiss_topmost(&VP).unwrap();
        assert_eq!(dismissed.frame().height, 500.0);
        assert_eq!(dismissed.phase(), SheetPhase::Disappearing);
        assert_eq!(updates.len(), 1);

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.topmost().unwrap().frame().height, 300.0);
    }

    #[test]
    fn dismissing_an_empty_stack_is_none() {
        let mut stack = SheetStack::new();
        assert!(stack.dismiss_topmost(&VP).is_none());
    }
}
