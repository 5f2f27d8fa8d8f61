// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content height measurement.
//!
//! The sheet needs a content height before it can lay anything out. The best
//! source is the content itself declaring one; everything else is a fallback
//! chain over whatever the host can measure, ending at a fixed fraction of
//! the viewport. Each degraded step is a warning (behind the `tracing`
//! feature), never an error.

use groundsheet_height::Viewport;

use crate::theme::Theme;

/// The embedded content, as far as the sheet needs to know it.
///
/// All methods are optional capabilities; a host implements whichever its
/// content can answer. The probe order in [`child_height`] is declared
/// preferred height, then the scrollable content's total height, then the
/// first child's measured height.
pub trait SheetContent {
    /// The height the content wants the sheet to have.
    fn preferred_height(&self) -> Option<f64> {
        None
    }

    /// Total content height of an embedded scrollable region, if the content
    /// is one.
    fn scrollable_content_height(&self) -> Option<f64> {
        None
    }

    /// Measured height of the content's first child view.
    fn first_child_height(&self) -> Option<f64> {
        None
    }
}

/// Resolves the content height the layout should use.
///
/// A declared preferred height is used as-is. Otherwise the fallback
/// measurement (scrollable content, then first child) is taken and the
/// viewport's bottom safe-area inset added, since measured layouts do not
/// account for it themselves. A fallback of zero yields 75% of the viewport
/// height.
///
/// When the grabber background is opaque, the grabber zone stacks above the
/// content instead of bleeding over it, so the zone height is added to
/// declared and measured heights alike (not to the 75% default).
pub fn child_height(content: &dyn SheetContent, theme: &Theme, viewport: &Viewport) -> f64 {
    let grabber_inset = match &theme.grabber {
        Some(grabber) if !grabber.background.is_translucent() => theme.grabber_zone_height(),
        _ => 0.0,
    };

    if let Some(height) = content.preferred_height() {
        return height + grabber_inset;
    }

    let scrollable = content.scrollable_content_height();
    let first_child = content.first_child_height();
    #[cfg(feature = "tracing")]
    tracing::warn!(
        fallback = if scrollable.is_some() {
            "scrollable content"
        } else if first_child.is_some() {
            "first child"
        } else {
            "none"
        },
        "content declares no preferred height; measuring the embedded layout instead"
    );

    let measured = scrollable.or(first_child).unwrap_or(0.0);
    if measured == 0.0 {
        #[cfg(feature = "tracing")]
        tracing::warn!("measured height is zero; defaulting to 75% of the viewport height");
        viewport.height * 0.75
    } else {
        measured + viewport.bottom_inset + grabber_inset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Grabber, GrabberBackground, Rgba};

    const VP: Viewport = Viewport::new(390.0, 800.0);

    struct Declared(f64);

    impl SheetContent for Declared {
        fn preferred_height(&self) -> Option<f64> {
            Some(self.0)
        }
    }

    struct Measured {
        scrollable: Option<f64>,
        first_child: Option<f64>,
    }

    impl SheetContent for Measured {
        fn scrollable_content_height(&self) -> Option<f64> {
            self.scrollable
        }

        fn first_child_height(&self) -> Option<f64> {
            self.first_child
        }
    }

    fn opaque_grabber_theme() -> Theme {
        Theme {
            grabber: Some(Grabber {
                background: GrabberBackground::Color {
                    color: Rgba::BLACK,
                    translucent: false,
                },
                ..Grabber::default()
            }),
            ..Theme::default()
        }
    }

    #[test]
    fn declared_height_is_used_as_is() {
        assert_eq!(child_height(&Declared(320.0), &Theme::default(), &VP), 320.0);
    }

    #[test]
    fn opaque_grabber_background_adds_the_grabber_zone() {
        // Default grabber zone: 20 * 2 + 4.
        assert_eq!(
            child_height(&Declared(320.0), &opaque_grabber_theme(), &VP),
            364.0
        );
    }

    #[test]
    fn fallback_measures_scrollable_content_plus_bottom_inset() {
        let vp = Viewport::new(390.0, 800.0).with_insets(0.0, 34.0);
        let content = Measured {
            scrollable: Some(500.0),
            first_child: Some(100.0),
        };
        assert_eq!(child_height(&content, &Theme::default(), &vp), 534.0);
    }

    #[test]
    fn fallback_uses_the_first_child_when_nothing_scrolls() {
        let content = Measured {
            scrollable: None,
            first_child: Some(240.0),
        };
        assert_eq!(child_height(&content, &Theme::default(), &VP), 240.0);
    }

    #[test]
    fn fallback_also_honors_an_opaque_grabber() {
        let content = Measured {
            scrollable: Some(500.0),
            first_child: None,
        };
        assert_eq!(child_height(&content, &opaque_grabber_theme(), &VP), 544.0);
    }

    #[test]
    fn zero_measurement_defaults_to_three_quarters_of_the_viewport() {
        let content = Measured {
            scrollable: None,
            first_child: None,
        };
        assert_eq!(child_height(&content, &Theme::default(), &VP), 600.0);

        // The default stands alone, without insets or the grabber zone.
        let zero = Measured {
            scrollable: Some(0.0),
            first_child: None,
        };
        assert_eq!(child_height(&zero, &opaque_grabber_theme(), &VP), 600.0);
    }
}
