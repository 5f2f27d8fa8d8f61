// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Height modes and the policy queries over them.
//!
//! ## Overview
//!
//! [`HeightMode`] decides how a sheet's height is chosen and constrained:
//!
//! - [`fit_content`]: the height follows the measured content height.
//! - [`free`]: the height is continuous between bounds and stays wherever the
//!   user releases it.
//! - [`specific`]: the height snaps to the nearest of a finite set of stops.
//!
//! All queries are pure functions of `(mode, child_height, viewport)`. The
//! live drag path and the static layout path call the same functions, so the
//! two can never disagree about bounds.
//!
//! [`fit_content`]: HeightMode::fit_content
//! [`free`]: HeightMode::free
//! [`specific`]: HeightMode::specific

use alloc::vec::Vec;
use thiserror::Error;

use crate::limit::HeightLimit;
use crate::value::{HeightValue, resolve_stops};
use crate::viewport::Viewport;

/// Rejected height mode configurations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum HeightModeError {
    /// `Specific` needs at least one height value.
    #[error("specific height mode needs at least one height value")]
    EmptyStops,
}

/// How a sheet's height is chosen and constrained.
///
/// Constructed once per sheet and immutable afterwards. Validation happens in
/// the constructors, so a held `HeightMode` is always usable.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightMode {
    kind: Kind,
    limit: HeightLimit,
}

#[derive(Clone, Debug, PartialEq)]
enum Kind {
    FitContent,
    Free {
        min_height: Option<f64>,
        max_height: Option<f64>,
    },
    Specific {
        values: Vec<HeightValue>,
    },
}

impl Default for HeightMode {
    fn default() -> Self {
        Self::fit_content()
    }
}

impl HeightMode {
    /// Height follows the measured content height, clamped to the limit.
    pub const fn fit_content() -> Self {
        Self {
            kind: Kind::FitContent,
            limit: HeightLimit::NavigationBar,
        }
    }

    /// Height is continuous between `min_height` and `max_height`; after a
    /// release the sheet stays wherever it was dragged (clamped).
    ///
    /// An absent `min_height` means 0; an absent `max_height` means the
    /// resolved limit.
    pub const fn free(min_height: Option<f64>, max_height: Option<f64>) -> Self {
        Self {
            kind: Kind::Free {
                min_height,
                max_height,
            },
            limit: HeightLimit::NavigationBar,
        }
    }

    /// Height snaps to the nearest of the given stops.
    ///
    /// Declaration order does not matter; stops are resolved and sorted
    /// ascending at use time. At least one value is required.
    pub fn specific(values: Vec<HeightValue>) -> Result<Self, HeightModeError> {
        if values.is_empty() {
            return Err(HeightModeError::EmptyStops);
        }
        Ok(Self {
            kind: Kind::Specific { values },
            limit: HeightLimit::NavigationBar,
        })
    }

    /// Replace the height limit (default: [`HeightLimit::NavigationBar`]).
    pub const fn with_limit(mut self, limit: HeightLimit) -> Self {
        self.limit = limit;
        self
    }

    /// The configured height limit.
    pub const fn limit(&self) -> HeightLimit {
        self.limit
    }

    /// Whether this mode snaps to discrete stops.
    pub const fn is_specific(&self) -> bool {
        matches!(self.kind, Kind::Specific { .. })
    }

    /// The lowest height the sheet may settle at.
    pub fn minimum_height(&self, child_height: f64, viewport: &Viewport) -> f64 {
        match &self.kind {
            Kind::FitContent => child_height.max(0.0),
            Kind::Free { min_height, .. } => min_height.unwrap_or(0.0),
            Kind::Specific { values } => resolve_stops(values, viewport, child_height)
                .first()
                .copied()
                .unwrap_or(0.0),
        }
    }

    /// The tallest height the sheet may settle at.
    pub fn maximum_height(&self, child_height: f64, viewport: &Viewport) -> f64 {
        let ceiling = self.limit.max_height(viewport);
        match &self.kind {
            Kind::FitContent => child_height.min(ceiling),
            Kind::Free { max_height, .. } => match max_height {
                Some(max) => max.min(ceiling),
                None => ceiling,
            },
            Kind::Specific { values } => {
                match resolve_stops(values, viewport, child_height).last() {
                    Some(&top) => top.min(ceiling),
                    None => ceiling,
                }
            }
        }
    }

    /// The height the sheet should settle at, given where it currently sits.
    ///
    /// Also used outside of drags: first appearance and content height
    /// changes settle here too.
    ///
    /// - Fit content: the content height, clamped to the limit.
    /// - Free: the current height, clamped into `[min, max]`.
    /// - Specific: the stop nearest to the current height, ties going to the
    ///   lower stop, never above the resolved limit.
    pub fn expected_height(
        &self,
        current_height: f64,
        child_height: f64,
        viewport: &Viewport,
    ) -> f64 {
        let ceiling = self.limit.max_height(viewport);
        match &self.kind {
            Kind::FitContent => child_height.min(ceiling),
            Kind::Free { .. } => {
                let min = self.minimum_height(child_height, viewport);
                let max = self.maximum_height(child_height, viewport);
                current_height.max(min).min(max)
            }
            Kind::Specific { values } => {
                let stops = resolve_stops(values, viewport, child_height);
                let mut nearest = 0.0;
                let mut nearest_distance = f64::INFINITY;
                for &stop in &stops {
                    let distance = if stop >= current_height {
                        stop - current_height
                    } else {
                        current_height - stop
                    };
                    // Strict comparison over the ascending scan: the lower
                    // stop wins ties.
                    if distance < nearest_distance {
                        nearest_distance = distance;
                        nearest = stop;
                    }
                }
                nearest.min(ceiling)
            }
        }
    }

    /// The neighboring stop in the requested direction, anchored on
    /// `origin_height`.
    ///
    /// For `Specific`, `origin_height` is located in the resolved stop
    /// sequence and the neighbor above or below it is returned; `None` means
    /// the origin is already at that end. The origin is a height the sheet
    /// previously settled at, so exact comparison against freshly resolved
    /// stops holds; the one place drift appears is a stop clamped by the
    /// limit, covered by the resolved-maximum fallback.
    ///
    /// Other modes have no stop sequence: going up answers the maximum
    /// height, going down the minimum.
    pub fn next_stop(
        &self,
        origin_height: f64,
        going_up: bool,
        child_height: f64,
        viewport: &Viewport,
    ) -> Option<f64> {
        match &self.kind {
            Kind::Specific { values } => {
                let stops = resolve_stops(values, viewport, child_height);
                let max = self.maximum_height(child_height, viewport);
                let origin = stops
                    .iter()
                    .position(|&stop| stop == origin_height)
                    .or_else(|| {
                        (origin_height == max && !stops.is_empty()).then(|| stops.len() - 1)
                    })?;
                if going_up {
                    stops.get(origin + 1).copied()
                } else {
                    origin.checked_sub(1).and_then(|below| stops.get(below)).copied()
                }
            }
            _ => Some(if going_up {
                self.maximum_height(child_height, viewport)
            } else {
                self.minimum_height(child_height, viewport)
            }),
        }
    }
}
