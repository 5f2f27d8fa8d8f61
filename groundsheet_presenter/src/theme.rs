// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet appearance configuration.
//!
//! [`Theme`] describes how a sheet looks: the grabber handle, surface
//! corners, the dimming backdrop, the drop shadow, and side margins. It is
//! plain data; rendering belongs to the host. The one derived quantity is
//! [`Theme::grabber_zone_height`], which both gesture arbitration and
//! content measurement depend on.

use kurbo::{Size, Vec2};

/// A straightforward sRGB color with alpha, components in `[0, 1]`.
///
/// Never blended or converted here; theme fields hand it back to the host
/// as-is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha component.
    pub a: f64,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// The light gray used for the default grabber.
    pub const LIGHT_GRAY: Self = Self::new(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0);
    /// Fully transparent.
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from components in `[0, 1]`.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with a replaced alpha component.
    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }
}

bitflags::bitflags! {
    /// Which corners of a surface a radius applies to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CornerMask: u8 {
        /// Top left corner.
        const TOP_LEFT = 0b0000_0001;
        /// Top right corner.
        const TOP_RIGHT = 0b0000_0010;
        /// Bottom left corner.
        const BOTTOM_LEFT = 0b0000_0100;
        /// Bottom right corner.
        const BOTTOM_RIGHT = 0b0000_1000;
    }
}

impl CornerMask {
    /// The two top corners, the usual mask for a bottom-anchored sheet.
    pub const TOP: Self = Self::TOP_LEFT.union(Self::TOP_RIGHT);
}

/// How a grabber's corner radius is chosen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CornerRadius {
    /// Half the grabber height, producing a capsule.
    Rounded,
    /// A fixed radius in points.
    Fixed(f64),
}

/// What fills the grabber zone behind the grabber, above the content.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GrabberBackground {
    /// A plain color fill.
    Color {
        /// The fill color.
        color: Rgba,
        /// Whether the content's top bleeds under the grabber zone.
        translucent: bool,
    },
    /// A surface the host supplies and renders itself.
    Surface {
        /// Whether the content's top bleeds under the grabber zone.
        translucent: bool,
    },
}

impl Default for GrabberBackground {
    fn default() -> Self {
        Self::Color {
            color: Rgba::CLEAR,
            translucent: true,
        }
    }
}

impl GrabberBackground {
    /// Whether the embedded content's top bleeds under the grabber zone.
    ///
    /// An opaque background stacks above the content instead, and
    /// measurement grows the content height by the grabber zone to
    /// compensate.
    pub const fn is_translucent(&self) -> bool {
        match self {
            Self::Color { translucent, .. } | Self::Surface { translucent } => *translucent,
        }
    }
}

/// The visual handle at the top of the sheet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grabber {
    /// Grabber size in points.
    pub size: Size,
    /// Corner rounding of the grabber itself.
    pub corner_radius: CornerRadius,
    /// Which grabber corners the radius applies to.
    pub masked_corners: CornerMask,
    /// Fill color.
    pub color: Rgba,
    /// Margin between the grabber's top and the sheet's top edge.
    pub top_margin: f64,
    /// Whether a tap in the grabber zone dismisses the sheet.
    pub can_touch_to_dismiss: bool,
    /// What fills the zone behind the grabber.
    pub background: GrabberBackground,
}

impl Default for Grabber {
    fn default() -> Self {
        Self {
            size: Size::new(30.0, 4.0),
            corner_radius: CornerRadius::Rounded,
            masked_corners: CornerMask::all(),
            color: Rgba::LIGHT_GRAY,
            top_margin: 20.0,
            can_touch_to_dismiss: false,
            background: GrabberBackground::default(),
        }
    }
}

impl Grabber {
    /// The concrete corner radius in points.
    pub fn corner_radius_value(&self) -> f64 {
        match self.corner_radius {
            CornerRadius::Rounded => self.size.height / 2.0,
            CornerRadius::Fixed(value) => value,
        }
    }
}

/// The drop shadow behind the sheet surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Rgba,
    /// Opacity in `[0, 1]`, applied on top of the color's own alpha.
    pub opacity: f64,
    /// Offset of the shadow from the surface.
    pub offset: Vec2,
    /// Blur radius in points.
    pub radius: f64,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            opacity: 0.3,
            offset: Vec2::ZERO,
            radius: 5.0,
        }
    }
}

/// How a sheet looks.
///
/// Constructed once by the presenter of the sheet and immutable for the
/// sheet's lifetime, like [`Behavior`](groundsheet_drag::Behavior).
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// The grabber, or `None` for a sheet without a handle.
    pub grabber: Option<Grabber>,
    /// Corner radius of the sheet surface.
    pub corner_radius: f64,
    /// Which sheet corners the radius applies to.
    pub masked_corners: CornerMask,
    /// Color of the dimming backdrop behind the sheet.
    pub dimming_color: Rgba,
    /// The drop shadow, or `None` for a flat sheet.
    pub shadow: Option<Shadow>,
    /// Margin between the sheet and the leading screen edge.
    pub leading_margin: f64,
    /// Margin between the sheet and the trailing screen edge.
    pub trailing_margin: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            grabber: Some(Grabber::default()),
            corner_radius: 25.0,
            masked_corners: CornerMask::TOP,
            dimming_color: Rgba::BLACK.with_alpha(0.4),
            shadow: Some(Shadow::default()),
            leading_margin: 0.0,
            trailing_margin: 0.0,
        }
    }
}

impl Theme {
    /// Height of the grabber zone at the top of the sheet.
    ///
    /// Twice the grabber's top margin plus the grabber height, or 0 without
    /// a grabber. This zone is the exclusive drag-start area for
    /// [`SwipeMode::Top`](groundsheet_drag::SwipeMode::Top) and the target
    /// for grabber taps.
    pub fn grabber_zone_height(&self) -> f64 {
        self.grabber
            .as_ref()
            .map_or(0.0, |grabber| grabber.top_margin * 2.0 + grabber.size.height)
    }
}
