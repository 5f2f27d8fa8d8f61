// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-test forwarding behind the sheet.
//!
//! With `forward_events_to_rear` set on the behavior, the dimming backdrop
//! stops being a tap target and touches outside the sheet go to the content
//! behind it. The host keeps doing its own hit testing; this module only
//! decides, for a finished hit test, whether to keep the result or to hand
//! the touch to the rear view. The decision needs the view hierarchy, walked
//! through the [`ViewAncestry`] capability so any host representation works.

/// Walks a host view hierarchy upward.
///
/// `V` is whatever handle the host uses for views; the walk needs only
/// identity and parents. Ancestry must be acyclic.
pub trait ViewAncestry {
    /// View handle type.
    type View: Copy + PartialEq;

    /// The parent of `view`, or `None` at the root.
    fn parent_of(&self, view: Self::View) -> Option<Self::View>;
}

/// Where a hit test should land.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitRouting<V> {
    /// Keep the default hit-test result.
    Keep,
    /// Forward the touch to this view instead.
    Forward(V),
}

/// Routing configuration for touches while the sheet forwards events.
///
/// Hits landing on the excluded parent or any of its descendants (the sheet
/// itself) are kept; everything else is forwarded to the destination (the
/// view behind the sheet). Unset fields degrade to keeping the hit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EventForwardingSurface<V> {
    /// The view touches are forwarded to.
    pub destination: Option<V>,
    /// The view whose subtree keeps its hits.
    pub excluded_parent: Option<V>,
}

impl<V: Copy + PartialEq> EventForwardingSurface<V> {
    /// Routes one finished hit test.
    ///
    /// Walks from `hit` to the root. Finding the excluded parent on the way
    /// keeps the hit; reaching the root without it forwards to the
    /// destination, when one is set.
    pub fn route<A>(&self, hit: V, ancestry: &A) -> HitRouting<V>
    where
        A: ViewAncestry<View = V>,
    {
        if let Some(excluded) = self.excluded_parent {
            let mut current = hit;
            loop {
                if current == excluded {
                    return HitRouting::Keep;
                }
                match ancestry.parent_of(current) {
                    Some(parent) => current = parent,
                    None => break,
                }
            }
        }
        match self.destination {
            Some(destination) => HitRouting::Forward(destination),
            None => HitRouting::Keep,
        }
    }
}
