// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=groundsheet_presenter --heading-base-level=0

//! Groundsheet Presenter: the bottom sheet's presentation layer.
//!
//! [`SheetPresenter`] drives one sheet through its lifecycle: it measures
//! the content ([`SheetContent`]), asks the height policy where the sheet
//! belongs, renders decisions as [`SheetUpdate`] commands (a frame, a
//! dimming opacity, and an optional transition), and routes gestures
//! through the `groundsheet_drag` controller. The host owns the actual
//! surface: it applies each update, animates the transitions, and reports
//! completions back.
//!
//! Around the presenter sit the pieces a touch host needs to embed it:
//!
//! - [`Theme`] describes the chrome: grabber, corner radii, dimming color,
//!   shadow, and side margins.
//! - [`crate::arbitration`] decides whether a pan belongs to the sheet or
//!   to a scroll view embedded in it.
//! - [`EventForwardingSurface`] reroutes touches that miss the sheet to a
//!   view behind the host, for pass-through presentations.
//! - [`SheetStack`] tracks sheets presented on top of each other.
//!
//! # Example
//!
//! ```rust
//! use groundsheet_drag::Behavior;
//! use groundsheet_height::Viewport;
//! use groundsheet_presenter::{SheetContent, SheetPhase, SheetPresenter, Theme};
//!
//! struct Menu;
//!
//! impl SheetContent for Menu {
//!     fn preferred_height(&self) -> Option<f64> {
//!         Some(320.0)
//!     }
//! }
//!
//! let viewport = Viewport::new(390.0, 844.0);
//! let mut sheet = SheetPresenter::new(Box::new(Menu), Theme::default(), Behavior::default());
//!
//! // Place below the viewport, then spring in with the dimming fade.
//! let updates = sheet.present(&viewport);
//! assert_eq!(updates.len(), 2);
//! assert_eq!(updates[1].frame.height, 320.0);
//!
//! // The host reports the appear animation's completion.
//! assert_eq!(sheet.animation_finished(), SheetPhase::Presented);
//! ```
//!
//! ## No-std
//!
//! This crate is `no_std`. It forwards its `std` (default) and `libm`
//! features to `groundsheet_height` and `groundsheet_drag`.
//!
//! ## Features
//!
//! - `tracing`: logs measurement fallbacks through the [`tracing`] facade.
//!
//! [`tracing`]: https://docs.rs/tracing

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("groundsheet_presenter requires either the `std` or `libm` feature");

pub mod arbitration;
pub mod forwarding;
pub mod measure;
pub mod presenter;
pub mod stack;
pub mod theme;

pub use arbitration::{EmbeddedScroll, GestureZones};
pub use forwarding::{EventForwardingSurface, HitRouting, ViewAncestry};
pub use measure::SheetContent;
pub use presenter::{
    InteractionListener, PositionListener, SheetPhase, SheetPresenter, SheetUpdate, Transition,
    TransitionCurve,
};
pub use stack::SheetStack;
pub use theme::{CornerMask, CornerRadius, Grabber, GrabberBackground, Rgba, Shadow, Theme};
