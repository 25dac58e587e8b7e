// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: sides, placements, and the free space around a trigger.

use core::fmt;
use core::str::FromStr;

use kurbo::{Rect, Size};

/// One edge of the trigger rectangle.
///
/// Used both as the primary direction of a [`Placement`] and as its corner
/// modifier. A corner names the direction the panel extends toward.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Side {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
    /// Right of the trigger.
    Right,
}

impl Side {
    /// Base ranking order used when no preference breaks a tie.
    pub const ALL: [Self; 4] = [Self::Bottom, Self::Top, Self::Right, Self::Left];

    /// The side across the trigger from this one.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns `true` for [`Top`](Self::Top) and [`Bottom`](Self::Bottom).
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Kebab-case name of the side.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a floating panel sits relative to its trigger.
///
/// Anchored placements combine a primary [`Side`] with an optional corner on
/// the cross axis. The corner names the direction the panel extends toward:
///
/// - [`BottomLeft`](Self::BottomLeft) hangs below the trigger, right edges aligned, growing left.
/// - [`BottomRight`](Self::BottomRight) hangs below the trigger, left edges aligned, growing right.
/// - [`RightTop`](Self::RightTop) sits right of the trigger, bottom edges aligned, growing up.
/// - [`RightBottom`](Self::RightBottom) sits right of the trigger, top edges aligned, growing down.
///
/// Placements without a corner are centered on the cross axis.
/// [`Auto`](Self::Auto) asks the resolver to choose without bias, and
/// [`Center`](Self::Center) centers the panel over the trigger.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Placement {
    /// Let the resolver pick.
    #[default]
    Auto,
    /// Centered over the trigger on both axes.
    Center,
    /// Above, horizontally centered.
    Top,
    /// Below, horizontally centered.
    Bottom,
    /// Left, vertically centered.
    #[cfg_attr(feature = "serde", serde(alias = "middle-left"))]
    Left,
    /// Right, vertically centered.
    #[cfg_attr(feature = "serde", serde(alias = "middle-right"))]
    Right,
    /// Above, extending left.
    TopLeft,
    /// Above, extending right.
    TopRight,
    /// Below, extending left.
    BottomLeft,
    /// Below, extending right.
    BottomRight,
    /// Left, extending up.
    LeftTop,
    /// Left, extending down.
    LeftBottom,
    /// Right, extending up.
    RightTop,
    /// Right, extending down.
    RightBottom,
}

impl Placement {
    /// Every member, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Auto,
        Self::Center,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::LeftTop,
        Self::LeftBottom,
        Self::RightTop,
        Self::RightBottom,
    ];

    /// Primary side, or `None` for [`Auto`](Self::Auto) and [`Center`](Self::Center).
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Auto | Self::Center => None,
            Self::Top | Self::TopLeft | Self::TopRight => Some(Side::Top),
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Some(Side::Bottom),
            Self::Left | Self::LeftTop | Self::LeftBottom => Some(Side::Left),
            Self::Right | Self::RightTop | Self::RightBottom => Some(Side::Right),
        }
    }

    /// Corner modifier, or `None` when the panel is centered on the cross axis.
    pub const fn corner(self) -> Option<Side> {
        match self {
            Self::TopLeft | Self::BottomLeft => Some(Side::Left),
            Self::TopRight | Self::BottomRight => Some(Side::Right),
            Self::LeftTop | Self::RightTop => Some(Side::Top),
            Self::LeftBottom | Self::RightBottom => Some(Side::Bottom),
            _ => None,
        }
    }

    /// Build an anchored placement from a side and an optional corner.
    ///
    /// A corner on the same axis as `side` has no meaning and is dropped.
    pub const fn from_parts(side: Side, corner: Option<Side>) -> Self {
        match (side, corner) {
            (Side::Top, Some(Side::Left)) => Self::TopLeft,
            (Side::Top, Some(Side::Right)) => Self::TopRight,
            (Side::Top, _) => Self::Top,
            (Side::Bottom, Some(Side::Left)) => Self::BottomLeft,
            (Side::Bottom, Some(Side::Right)) => Self::BottomRight,
            (Side::Bottom, _) => Self::Bottom,
            (Side::Left, Some(Side::Top)) => Self::LeftTop,
            (Side::Left, Some(Side::Bottom)) => Self::LeftBottom,
            (Side::Left, _) => Self::Left,
            (Side::Right, Some(Side::Top)) => Self::RightTop,
            (Side::Right, Some(Side::Bottom)) => Self::RightBottom,
            (Side::Right, _) => Self::Right,
        }
    }

    /// Replace the primary side, keeping the corner when it still lies on the cross axis.
    pub const fn with_side(self, side: Side) -> Self {
        Self::from_parts(side, self.corner())
    }

    /// Replace the corner. Returns `self` unchanged for [`Auto`](Self::Auto) and [`Center`](Self::Center).
    pub const fn with_corner(self, corner: Option<Side>) -> Self {
        match self.side() {
            Some(side) => Self::from_parts(side, corner),
            None => self,
        }
    }

    /// Kebab-case name, e.g. `"bottom-left"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::LeftTop => "left-top",
            Self::LeftBottom => "left-bottom",
            Self::RightTop => "right-top",
            Self::RightBottom => "right-bottom",
        }
    }

    /// Parse a placement name, treating anything unrecognized as [`Auto`](Self::Auto).
    ///
    /// ```
    /// use understory_placement::Placement;
    /// assert_eq!(Placement::parse_or_auto("top-right"), Placement::TopRight);
    /// assert_eq!(Placement::parse_or_auto("sideways"), Placement::Auto);
    /// ```
    pub fn parse_or_auto(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: ParsePlacementError| {
            log::debug!("placement {name:?} rejected ({err}); using auto");
            Self::Auto
        })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Placement`] from text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParsePlacementError {
    /// The input was empty or only whitespace.
    #[error("placement name is empty")]
    Empty,
    /// The input is not a known placement name.
    #[error("unknown placement name")]
    Unknown,
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    /// Accepts the kebab-case names produced by [`Placement::as_str`], ignoring
    /// surrounding whitespace and ASCII case. `middle-left` and `middle-right`
    /// are accepted as [`Left`](Placement::Left) and [`Right`](Placement::Right).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParsePlacementError::Empty);
        }
        if s.eq_ignore_ascii_case("middle-left") {
            return Ok(Self::Left);
        }
        if s.eq_ignore_ascii_case("middle-right") {
            return Ok(Self::Right);
        }
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParsePlacementError::Unknown)
    }
}

/// Distance from each edge of the trigger to the matching viewport edge.
///
/// Values go negative when the trigger extends past the viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spaces {
    /// Room above the trigger.
    pub top: f64,
    /// Room below the trigger.
    pub bottom: f64,
    /// Room left of the trigger.
    pub left: f64,
    /// Room right of the trigger.
    pub right: f64,
}

impl Spaces {
    /// Measure the room around `trigger` inside a viewport of size `viewport`.
    ///
    /// Inverted rectangles are normalized first, so a degenerate (point)
    /// trigger is measured like any other.
    pub fn between(trigger: Rect, viewport: Size) -> Self {
        let t = trigger.abs();
        Self {
            top: t.y0,
            bottom: viewport.height - t.y1,
            left: t.x0,
            right: viewport.width - t.x1,
        }
    }

    /// Room on the given side.
    pub const fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}
