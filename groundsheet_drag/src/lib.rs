// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=groundsheet_drag --heading-base-level=0

//! Groundsheet Drag: the bottom sheet's drag state machine.
//!
//! The host's gesture recognizer reports begin, change, end, and cancel
//! callbacks with a vertical translation and velocity; [`DragController`]
//! turns those into [`SheetFrame`]s to apply while the finger is down and a
//! [`DragOutcome`] (settle at a height, or dismiss) when it lifts. All
//! bounds come from the [`Behavior`]'s height mode, recomputed on every
//! callback against a baseline frozen at gesture start, so mid-gesture
//! content changes cannot make the sheet jump.
//!
//! The controller never touches a surface. Applying frames, animating the
//! settle, and tearing the sheet down on dismiss belong to the presenter
//! (the `groundsheet_presenter` crate) or to the embedding host.
//!
//! # Example
//!
//! ```rust
//! use groundsheet_drag::{Behavior, DragController, DragOutcome};
//! use groundsheet_height::{HeightMode, Viewport};
//!
//! let viewport = Viewport::new(390.0, 800.0);
//! let behavior = Behavior {
//!     height_mode: HeightMode::free(Some(300.0), Some(600.0)),
//!     ..Behavior::default()
//! };
//! let mut controller = DragController::new(behavior);
//!
//! // The sheet rests at 500 points; the finger drags 50 points down.
//! controller.begin(500.0, 0.0);
//! let frame = controller.update(50.0, &viewport).unwrap();
//! assert_eq!(frame.height, 450.0);
//!
//! // Released gently: the sheet stays where it was dragged.
//! let outcome = controller.end(50.0, 0.0, &viewport).unwrap();
//! assert_eq!(outcome, DragOutcome::Settle { height: 450.0 });
//! ```
//!
//! ## No-std
//!
//! This crate is `no_std`. It forwards its `std` (default) and `libm`
//! features to `groundsheet_height`, which needs one of the two for the
//! default elasticity curve.

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("groundsheet_drag requires either the `std` or `libm` feature");

pub mod behavior;
pub mod controller;
pub mod types;

pub use behavior::{Behavior, SwipeMode};
pub use controller::DragController;
pub use types::{DragOutcome, SheetFrame};
