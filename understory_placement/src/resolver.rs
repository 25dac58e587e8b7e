// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement resolver.
//!
//! ## Overview
//!
//! [`Resolver`] decides where a floating panel goes so it stays inside the
//! viewport, preferring the caller's requested [`Placement`] whenever it fits.
//! Every entry point is a pure function of its inputs.
//!
//! - [`Resolver::resolve`]: keep the preferred side if it fits, else its
//!   opposite, else the roomiest side that fits. Corners are fixed up independently.
//! - [`Resolver::flip`]: only flip across the trigger when the preferred side
//!   has less than `min_clearance` room and the other side has more.
//! - [`Resolver::resolve_point`]: absolute origin for a panel opened at a point,
//!   such as a context menu.
//! - [`Resolver::layout`]: the panel rectangle for a placement, clamped into the
//!   padded viewport.
//!
//! ## Degenerate input
//!
//! Nothing here fails. Non-finite numbers, an unmeasured (`0×0`) panel, or an
//! empty viewport make [`resolve`](Resolver::resolve) and [`flip`](Resolver::flip)
//! return the preferred placement untouched; callers re-resolve once real
//! measurements exist.

use kurbo::{Point, Rect, Size, Vec2};

use crate::config::{Flips, PlacementConfig, Strategy};
use crate::types::{Placement, Side, Spaces};

/// Why an input set was not resolved.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Skip {
    NonFinite,
    Unmeasured,
    NoViewport,
}

fn skip_reason(cfg: &PlacementConfig, trigger: Rect, panel: Size, viewport: Size) -> Option<Skip> {
    if !(trigger.is_finite() && panel.is_finite() && viewport.is_finite() && cfg.is_finite()) {
        Some(Skip::NonFinite)
    } else if viewport.width <= 0.0 || viewport.height <= 0.0 {
        Some(Skip::NoViewport)
    } else if panel.width <= 0.0 && panel.height <= 0.0 {
        Some(Skip::Unmeasured)
    } else {
        None
    }
}

/// Panel size along the primary axis of `side`.
fn extent(side: Side, panel: Size) -> f64 {
    if side.is_vertical() {
        panel.height
    } else {
        panel.width
    }
}

/// Panel size along the cross axis of `side`.
fn cross_extent(side: Side, panel: Size) -> f64 {
    if side.is_vertical() {
        panel.width
    } else {
        panel.height
    }
}

/// Corners available for `side`, start (left/top) first.
fn cross_sides(side: Side) -> (Side, Side) {
    if side.is_vertical() {
        (Side::Left, Side::Right)
    } else {
        (Side::Top, Side::Bottom)
    }
}

/// Sides ordered by room, most first.
///
/// Equal room keeps the preferred side ahead, then [`Side::ALL`] order.
fn rank(spaces: &Spaces, preferred: Option<Side>) -> [Side; 4] {
    let mut order = Side::ALL;
    if let Some(i) = preferred.and_then(|p| order.iter().position(|&s| s == p)) {
        order[..=i].rotate_right(1);
    }
    let mut keyed = [(0_usize, Side::Bottom); 4];
    for (i, side) in order.into_iter().enumerate() {
        keyed[i] = (i, side);
    }
    keyed.sort_unstable_by(|(ia, a), (ib, b)| {
        spaces
            .get(*b)
            .total_cmp(&spaces.get(*a))
            .then(ia.cmp(ib))
    });
    keyed.map(|(_, side)| side)
}

/// Pin `start` so `[start, start + extent]` stays inside `[padding, limit - padding]`.
///
/// When the range is empty the panel is pinned to `padding`.
fn clamp_axis(start: f64, extent: f64, limit: f64, padding: f64) -> f64 {
    let hi = limit - extent - padding;
    if hi >= padding {
        start.max(padding).min(hi)
    } else {
        padding
    }
}

/// Viewport-aware placement for floating panels.
///
/// ## Usage
///
/// Build one from a [`PlacementConfig`] (or a preset like
/// [`PlacementConfig::tooltip`]) and call it on open, resize, and scroll with
/// freshly measured geometry. Nothing is cached between calls.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::{Placement, PlacementConfig, Resolver};
///
/// let resolver = Resolver::new(PlacementConfig::default());
/// // A button 5px above the bottom edge of an 800px-tall window.
/// let trigger = Rect::new(10.0, 780.0, 110.0, 795.0);
/// let panel = Size::new(200.0, 300.0);
/// let viewport = Size::new(1280.0, 800.0);
///
/// let placement = resolver.resolve(trigger, panel, Placement::Bottom, viewport);
/// assert_eq!(placement, Placement::Top);
///
/// let rect = resolver.layout(trigger, panel, placement, viewport);
/// assert!(rect.y1 <= trigger.y0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Resolver {
    config: PlacementConfig,
}

impl Resolver {
    /// Create a resolver with the given constants.
    pub const fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    /// The constants this resolver uses.
    pub const fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Run the algorithm selected by [`PlacementConfig::strategy`].
    pub fn place(
        &self,
        trigger: Rect,
        panel: Size,
        preferred: Placement,
        viewport: Size,
    ) -> Placement {
        match self.config.strategy {
            Strategy::Ranked => self.resolve(trigger, panel, preferred, viewport),
            Strategy::Flip => self.flip(trigger, panel, preferred, viewport),
        }
    }

    /// Choose the best placement, preferring `preferred` when it fits.
    ///
    /// A side fits when its room is at least the panel's extent on that axis
    /// plus `gap` and `padding`. The primary side is chosen in this order:
    ///
    /// 1. The preferred side, if it fits.
    /// 2. The opposite side, if it fits.
    /// 3. The roomiest side that fits, preferring one where some cross
    ///    alignment also fits; ties go to the preferred side, then bottom,
    ///    top, right, left.
    /// 4. If nothing fits, the roomiest side. [`layout`](Self::layout) clamps it.
    ///
    /// When the chosen side is on the preferred axis, the caller's corner
    /// carries over: an explicit corner is kept if the panel fits that way on
    /// the cross axis, or flipped when the other side has strictly more room,
    /// and a centered preference stays centered. Otherwise ([`Placement::Auto`],
    /// or a change of axis) sides that fit are tried with a centered panel and
    /// then with each corner, roomier side first, and the first placement that
    /// fits without clamping wins.
    /// [`Placement::Center`] is returned as is.
    pub fn resolve(
        &self,
        trigger: Rect,
        panel: Size,
        preferred: Placement,
        viewport: Size,
    ) -> Placement {
        if let Some(skip) = skip_reason(&self.config, trigger, panel, viewport) {
            log::debug!("placement not resolved ({skip:?}); keeping {preferred}");
            return preferred;
        }
        if preferred == Placement::Center {
            return preferred;
        }
        let spaces = Spaces::between(trigger, viewport);
        if let Some(side) = preferred
            .side()
            .and_then(|p| self.preferred_axis(&spaces, panel, p))
        {
            let corner = self.corner(trigger, side, &spaces, panel, preferred, viewport);
            return Placement::from_parts(side, corner);
        }
        self.ranked(trigger, &spaces, panel, preferred, viewport)
    }

    /// Flip the preferred placement across the trigger only when it is cramped.
    ///
    /// - The primary side flips when it has less than `min_clearance` room and
    ///   the opposite side has strictly more.
    /// - Independently, a corner flips when its side has less room than the
    ///   panel's cross extent and the other side has strictly more.
    /// - With `split_centered`, a centered placement gains the corner toward
    ///   the roomier side when half the panel would not fit on one side.
    ///
    /// [`Placement::Auto`] starts from [`PlacementConfig::auto_placement`]
    /// ([`Placement::Bottom`] unless configured); [`Placement::Center`] is
    /// returned as is.
    pub fn flip(
        &self,
        trigger: Rect,
        panel: Size,
        preferred: Placement,
        viewport: Size,
    ) -> Placement {
        if let Some(skip) = skip_reason(&self.config, trigger, panel, viewport) {
            log::debug!("placement not flipped ({skip:?}); keeping {preferred}");
            return preferred;
        }
        let preferred = match (preferred, self.config.auto_placement) {
            (Placement::Auto, Placement::Auto) => Placement::Bottom,
            (Placement::Auto, p) | (p, _) => p,
        };
        let Some(mut side) = preferred.side() else {
            return preferred;
        };
        let spaces = Spaces::between(trigger, viewport);
        let flips = self.config.flips;

        if flips.contains(Flips::PRIMARY) {
            let room = spaces.get(side);
            if room < self.config.min_clearance && spaces.get(side.opposite()) > room {
                log::trace!("flipping {side} to {}: {room}px free", side.opposite());
                side = side.opposite();
            }
        }

        let extent = cross_extent(side, panel);
        let corner = match preferred.corner() {
            Some(c) if flips.contains(Flips::CORNER) => {
                let room = spaces.get(c);
                if room < extent && spaces.get(c.opposite()) > room {
                    log::trace!("flipping corner {c} to {}: {room}px free", c.opposite());
                    Some(c.opposite())
                } else {
                    Some(c)
                }
            }
            Some(c) => Some(c),
            None if self.config.split_centered && flips.contains(Flips::CORNER) => {
                let (start, end) = cross_sides(side);
                let (s, e) = (spaces.get(start), spaces.get(end));
                if e < extent / 2.0 && s > e {
                    Some(start)
                } else if s < extent / 2.0 && e > s {
                    Some(end)
                } else {
                    None
                }
            }
            None => None,
        };
        Placement::from_parts(side, corner)
    }

    /// Origin for a panel opened at a point, such as a context menu at the pointer.
    ///
    /// The panel keeps `gap` from the point on the primary axis, and on the
    /// cross axis too when the placement has a corner (`bottom-right` opens at
    /// `anchor + (gap, gap)`).
    ///
    /// A non-[`Auto`](Placement::Auto) preference is honored when its panel
    /// rectangle fits inside the padded viewport. Otherwise the panel goes
    /// below the point (or above), extending right (or left); an axis where
    /// neither direction fits uses the roomier one. The result is always
    /// clamped into the padded viewport.
    ///
    /// ```
    /// use kurbo::{Point, Size};
    /// use understory_placement::{Placement, PlacementConfig, Resolver};
    ///
    /// let resolver = Resolver::new(PlacementConfig::action_menu());
    /// let viewport = Size::new(800.0, 600.0);
    /// // Right-click near the bottom-right corner: the menu opens up and to the left.
    /// let origin = resolver.resolve_point(
    ///     Point::new(780.0, 590.0),
    ///     Size::new(160.0, 120.0),
    ///     Placement::Auto,
    ///     viewport,
    /// );
    /// assert_eq!(origin, Point::new(610.0, 460.0));
    /// ```
    pub fn resolve_point(
        &self,
        anchor: Point,
        panel: Size,
        preferred: Placement,
        viewport: Size,
    ) -> Point {
        let trigger = Rect::from_points(anchor, anchor);
        match skip_reason(&self.config, trigger, panel, viewport) {
            Some(Skip::NonFinite) => {
                log::debug!("non-finite geometry at anchor {anchor:?}");
                return if anchor.is_finite() {
                    anchor
                } else {
                    Point::ZERO
                };
            }
            Some(Skip::NoViewport) => {
                log::debug!("empty viewport; pinning panel to the origin");
                return Point::ZERO;
            }
            Some(Skip::Unmeasured) => {
                return self.layout(trigger, panel, preferred, viewport).origin();
            }
            None => {}
        }

        if preferred != Placement::Auto {
            let rect = self.at_point(anchor, panel, preferred);
            if self.contains(rect, viewport) {
                return rect.origin();
            }
        }

        let spaces = Spaces::between(trigger, viewport);
        let pad = self.config.padding;
        let gap = self.config.gap;
        let side = first_fit(&spaces, Side::Bottom, panel.height + gap + pad);
        let corner = first_fit(&spaces, Side::Right, panel.width + gap + pad);
        let rect = self.at_point(anchor, panel, Placement::from_parts(side, Some(corner)));
        Point::new(
            clamp_axis(rect.x0, rect.width(), viewport.width, pad),
            clamp_axis(rect.y0, rect.height(), viewport.height, pad),
        )
    }

    /// Returns `true` if `placement` keeps the panel inside the padded
    /// viewport without any clamping.
    pub fn fits(&self, trigger: Rect, panel: Size, placement: Placement, viewport: Size) -> bool {
        self.contains(self.unclamped(trigger, panel, placement), viewport)
    }

    /// Panel rectangle for `placement`, clamped into the padded viewport.
    ///
    /// The panel sits `gap` away from the trigger on the primary axis. On the
    /// cross axis it is centered, or aligned per the corner (`*-left` aligns
    /// right edges, `*-right` aligns left edges, `*-top` aligns bottom edges,
    /// `*-bottom` aligns top edges). [`Placement::Center`] centers the panel on
    /// the trigger and [`Placement::Auto`] lays out like [`Placement::Bottom`].
    ///
    /// Each axis is then clamped into `[padding, viewport - panel - padding]`;
    /// when the panel is larger than that range it is pinned to `padding`.
    /// Non-finite input yields [`Rect::ZERO`].
    pub fn layout(&self, trigger: Rect, panel: Size, placement: Placement, viewport: Size) -> Rect {
        if skip_reason(&self.config, trigger, panel, viewport) == Some(Skip::NonFinite) {
            return Rect::ZERO;
        }
        let rect = self.unclamped(trigger, panel, placement);
        let pad = self.config.padding;
        let x = clamp_axis(rect.x0, rect.width(), viewport.width, pad);
        let y = clamp_axis(rect.y0, rect.height(), viewport.height, pad);
        Rect::from_origin_size(Point::new(x, y), rect.size())
    }

    fn unclamped(&self, trigger: Rect, panel: Size, placement: Placement) -> Rect {
        let t = trigger.abs();
        let size = Size::new(panel.width.max(0.0), panel.height.max(0.0));
        let (w, h) = (size.width, size.height);
        let gap = self.config.gap;
        let c = t.center();
        let placement = match placement {
            Placement::Auto => Placement::Bottom,
            p => p,
        };
        let origin = match placement.side() {
            None => Point::new(c.x - w / 2.0, c.y - h / 2.0),
            Some(side) => {
                let main = match side {
                    Side::Top => t.y0 - gap - h,
                    Side::Bottom => t.y1 + gap,
                    Side::Left => t.x0 - gap - w,
                    Side::Right => t.x1 + gap,
                };
                let cross = match placement.corner() {
                    Some(Side::Left) => t.x1 - w,
                    Some(Side::Right) => t.x0,
                    Some(Side::Top) => t.y1 - h,
                    Some(Side::Bottom) => t.y0,
                    None if side.is_vertical() => c.x - w / 2.0,
                    None => c.y - h / 2.0,
                };
                if side.is_vertical() {
                    Point::new(cross, main)
                } else {
                    Point::new(main, cross)
                }
            }
        };
        Rect::from_origin_size(origin, size)
    }

    /// [`unclamped`](Self::unclamped) for a point, with the corner side also
    /// pushed `gap` away from the anchor.
    fn at_point(&self, anchor: Point, panel: Size, placement: Placement) -> Rect {
        let rect = self.unclamped(Rect::from_points(anchor, anchor), panel, placement);
        let gap = self.config.gap;
        let shift = match placement.corner() {
            Some(Side::Left) => Vec2::new(-gap, 0.0),
            Some(Side::Right) => Vec2::new(gap, 0.0),
            Some(Side::Top) => Vec2::new(0.0, -gap),
            Some(Side::Bottom) => Vec2::new(0.0, gap),
            None => Vec2::ZERO,
        };
        rect + shift
    }

    fn contains(&self, rect: Rect, viewport: Size) -> bool {
        let pad = self.config.padding;
        rect.x0 >= pad
            && rect.y0 >= pad
            && rect.x1 <= viewport.width - pad
            && rect.y1 <= viewport.height - pad
    }

    /// Room `side` needs for the panel, the gap, and the viewport padding.
    fn needed(&self, side: Side, panel: Size) -> f64 {
        extent(side, panel) + self.config.gap + self.config.padding
    }

    /// The preferred side if it fits, else its opposite if that fits.
    fn preferred_axis(&self, spaces: &Spaces, panel: Size, side: Side) -> Option<Side> {
        let fits = |s: Side| spaces.get(s) >= self.needed(s, panel);
        if fits(side) || !self.config.flips.contains(Flips::PRIMARY) {
            return Some(side);
        }
        let opposite = side.opposite();
        if fits(opposite) {
            log::trace!("{side} needs {}px; flipping to {opposite}", self.needed(side, panel));
            return Some(opposite);
        }
        None
    }

    /// Rank every side by room and take the first placement that fits unclamped.
    fn ranked(
        &self,
        trigger: Rect,
        spaces: &Spaces,
        panel: Size,
        preferred: Placement,
        viewport: Size,
    ) -> Placement {
        let ranked = rank(spaces, preferred.side());
        let mut open = ranked
            .into_iter()
            .filter(|&s| spaces.get(s) >= self.needed(s, panel));
        for side in open.clone() {
            let (start, end) = cross_sides(side);
            let (near, far) = if spaces.get(start) > spaces.get(end) {
                (start, end)
            } else {
                (end, start)
            };
            for corner in [None, Some(near), Some(far)] {
                let placement = Placement::from_parts(side, corner);
                if self.fits(trigger, panel, placement, viewport) {
                    return placement;
                }
            }
        }

        let side = match open.next() {
            Some(side) => side,
            None => {
                log::debug!(
                    "no side fits a {}x{} panel; using {}",
                    panel.width,
                    panel.height,
                    ranked[0]
                );
                ranked[0]
            }
        };
        let corner = if preferred
            .side()
            .is_some_and(|p| p.is_vertical() == side.is_vertical())
        {
            self.corner(trigger, side, spaces, panel, preferred, viewport)
        } else {
            self.lean(side, spaces, panel)
        };
        Placement::from_parts(side, corner)
    }

    /// The caller's corner on `side`, flipped when it overflows and the other
    /// side is roomier.
    fn corner(
        &self,
        trigger: Rect,
        side: Side,
        spaces: &Spaces,
        panel: Size,
        preferred: Placement,
        viewport: Size,
    ) -> Option<Side> {
        let corner = preferred
            .corner()
            .filter(|c| c.is_vertical() != side.is_vertical())?;
        if !self.config.flips.contains(Flips::CORNER)
            || self.cross_fits(trigger, panel, Placement::from_parts(side, Some(corner)), viewport)
        {
            return Some(corner);
        }
        let room = spaces.get(corner);
        let opposite = corner.opposite();
        if spaces.get(opposite) > room {
            log::trace!("corner {corner} has {room}px; flipping to {opposite}");
            Some(opposite)
        } else {
            Some(corner)
        }
    }

    /// Corner toward the roomier cross side, if the panel fits that way.
    fn lean(&self, side: Side, spaces: &Spaces, panel: Size) -> Option<Side> {
        let (start, end) = cross_sides(side);
        let needed = cross_extent(side, panel) + self.config.padding;
        let (s, e) = (spaces.get(start), spaces.get(end));
        if s > e && s >= needed {
            Some(start)
        } else if e >= needed {
            Some(end)
        } else {
            None
        }
    }

    /// Whether `placement` stays inside the padded viewport along its cross axis.
    fn cross_fits(&self, trigger: Rect, panel: Size, placement: Placement, viewport: Size) -> bool {
        let r = self.unclamped(trigger, panel, placement);
        let pad = self.config.padding;
        if placement.side().is_some_and(Side::is_vertical) {
            r.x0 >= pad && r.x1 <= viewport.width - pad
        } else {
            r.y0 >= pad && r.y1 <= viewport.height - pad
        }
    }
}

/// `first` if it has `needed` room, else its opposite, else whichever is roomier.
fn first_fit(spaces: &Spaces, first: Side, needed: f64) -> Side {
    let second = first.opposite();
    if spaces.get(first) >= needed {
        first
    } else if spaces.get(second) >= needed || spaces.get(second) > spaces.get(first) {
        second
    } else {
        first
    }
}
