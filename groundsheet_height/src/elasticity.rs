// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damping for drags past the maximum height.
//!
//! When the user drags a sheet above its maximum height, the raw overshoot
//! distance is passed through an elasticity function and the damped result is
//! what the sheet visibly stretches by. Any `fn(f64) -> f64` that is 0 at 0,
//! non-decreasing, and sub-linear works; [`logarithmic`] is the default.

/// Maps a raw overshoot distance (≥ 0) to a damped visual displacement.
pub type Elasticity = fn(f64) -> f64;

/// The default elasticity curve, `2·log₂(x + 3) − 2·log₂(3)`.
///
/// Zero at zero, monotonically increasing, and sub-linear everywhere, so the
/// sheet keeps creeping upward under a long drag without ever getting far
/// from its maximum.
pub fn logarithmic(x: f64) -> f64 {
    2.0 * log2(x + 3.0) - 2.0 * log2(3.0)
}

#[cfg(feature = "std")]
#[inline]
fn log2(x: f64) -> f64 {
    x.log2()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn log2(x: f64) -> f64 {
    libm::log2(x)
}
