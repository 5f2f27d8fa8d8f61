// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=groundsheet_height --heading-base-level=0

//! Groundsheet Height: pure height policy for bottom sheets.
//!
//! A bottom sheet's vertical extent is a function of three things: its
//! configured [`HeightMode`], the measured height of the embedded content,
//! and the hosting [`Viewport`]. This crate is that function. It owns no
//! state and talks to no UI toolkit; the drag state machine and the
//! presenter (the `groundsheet_drag` and `groundsheet_presenter` crates)
//! call into it for every bound they need, so live-drag math and static
//! layout math can never diverge.
//!
//! - [`HeightMode`] answers `minimum_height`, `maximum_height`,
//!   `expected_height` (where to settle), and `next_stop` (neighbor
//!   navigation for discrete stops).
//! - [`HeightValue`] declares one stop; [`resolve_stops`] turns a set of
//!   them into sorted points.
//! - [`HeightLimit`] is the ceiling derived from what sits above the sheet.
//! - [`elasticity`] damps drags past the maximum.
//!
//! # Example
//!
//! ```rust
//! use groundsheet_height::{HeightLimit, HeightMode, HeightValue, Viewport};
//!
//! let viewport = Viewport::new(390.0, 800.0);
//! let mode = HeightMode::specific(vec![
//!     HeightValue::Fixed(250.0),
//!     HeightValue::ScreenRatio(0.75),
//! ])?
//! .with_limit(HeightLimit::Screen);
//!
//! assert_eq!(mode.minimum_height(0.0, &viewport), 250.0);
//! assert_eq!(mode.maximum_height(0.0, &viewport), 600.0);
//!
//! // Released at 530 points, the sheet snaps to the nearest stop.
//! assert_eq!(mode.expected_height(530.0, 0.0, &viewport), 600.0);
//! # Ok::<(), groundsheet_height::HeightModeError>(())
//! ```
//!
//! ## No-std
//!
//! This crate is `no_std` and uses `alloc`. The default elasticity curve
//! needs a `log2`; enable `std` (default) or `libm` to provide one.

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("groundsheet_height requires either the `std` or `libm` feature");

pub mod elasticity;
pub mod limit;
pub mod mode;
pub mod value;
pub mod viewport;

pub use elasticity::Elasticity;
pub use limit::HeightLimit;
pub use mode::{HeightMode, HeightModeError};
pub use value::{HeightValue, resolve_stops};
pub use viewport::Viewport;
