//! Parallax layer table.
//!
//! Each layer pairs a logical role with the selector used to find its element,
//! the margin edge it is pushed along and the coefficient applied to the
//! scroll offset. The table order is the order writes are issued in.

use crate::constants::*;
use std::fmt;

/// Logical role of a parallax layer within the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Title,
    SecondaryBush,
    MountainNear,
    MountainFar,
    Logo,
}

impl Role {
    /// All roles in application order.
    pub const ALL: [Role; LAYER_COUNT] = [
        Role::Title,
        Role::SecondaryBush,
        Role::MountainNear,
        Role::MountainFar,
        Role::Logo,
    ];

    #[inline]
    pub fn default_selector(self) -> &'static str {
        match self {
            Role::Title => TITLE_SELECTOR,
            Role::SecondaryBush => SECONDARY_BUSH_SELECTOR,
            Role::MountainNear => MOUNTAIN_NEAR_SELECTOR,
            Role::MountainFar => MOUNTAIN_FAR_SELECTOR,
            Role::Logo => LOGO_SELECTOR,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Role::Title => "title",
            Role::SecondaryBush => "secondary-bush",
            Role::MountainNear => "mountain-near",
            Role::MountainFar => "mountain-far",
            Role::Logo => "logo",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Margin edge a layer is offset along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarginEdge {
    Top,
    Bottom,
}

impl MarginEdge {
    /// CSS property written for this edge.
    #[inline]
    pub fn css_property(self) -> &'static str {
        match self {
            MarginEdge::Top => "margin-top",
            MarginEdge::Bottom => "margin-bottom",
        }
    }

    /// Direction the scroll offset is applied in: a top margin grows with the
    /// scroll, a bottom margin shrinks.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            MarginEdge::Top => 1.0,
            MarginEdge::Bottom => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub role: Role,
    pub selector: &'static str,
    pub edge: MarginEdge,
    pub coefficient: f64,
}

impl Layer {
    pub const fn new(role: Role, selector: &'static str, edge: MarginEdge, coefficient: f64) -> Self {
        Self {
            role,
            selector,
            edge,
            coefficient,
        }
    }

    /// Margin in pixels for a scroll offset `scroll_y`. Any real input is
    /// accepted; overscroll (negative) offsets are not clamped.
    #[inline]
    pub fn offset_px(&self, scroll_y: f64) -> f64 {
        self.edge.sign() * scroll_y * self.coefficient
    }
}

/// The landing-page scene: title pushed down from the top, scenery and logo
/// pulled up from the bottom at increasing rates.
pub const DEFAULT_LAYERS: [Layer; LAYER_COUNT] = [
    Layer::new(Role::Title, TITLE_SELECTOR, MarginEdge::Top, TITLE_COEFF),
    Layer::new(
        Role::SecondaryBush,
        SECONDARY_BUSH_SELECTOR,
        MarginEdge::Bottom,
        SECONDARY_BUSH_COEFF,
    ),
    Layer::new(
        Role::MountainNear,
        MOUNTAIN_NEAR_SELECTOR,
        MarginEdge::Bottom,
        MOUNTAIN_NEAR_COEFF,
    ),
    Layer::new(
        Role::MountainFar,
        MOUNTAIN_FAR_SELECTOR,
        MarginEdge::Bottom,
        MOUNTAIN_FAR_COEFF,
    ),
    Layer::new(Role::Logo, LOGO_SELECTOR, MarginEdge::Bottom, LOGO_COEFF),
];
