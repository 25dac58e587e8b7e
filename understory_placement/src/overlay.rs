// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay helper: keep an open panel placed as the page moves under it.
//!
//! ## Usage
//!
//! 1) Implement [`Geometry`] for whatever can measure your trigger, panel, and window
//!    (or fill in a [`Snapshot`]).
//! 2) Call [`Overlay::open`] when the panel is shown.
//! 3) Call [`Overlay::reposition`] from resize and scroll handlers. Once the overlay is
//!    closed it returns `None`, so a late recompute never resurrects a closed panel.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::overlay::{Overlay, Snapshot};
//! use understory_placement::{Placement, PlacementConfig, Resolver};
//!
//! let mut menu = Overlay::new(Resolver::new(PlacementConfig::menu()), Placement::BottomRight);
//! let mut geometry = Snapshot {
//!     trigger: Some(Rect::new(20.0, 20.0, 120.0, 50.0)),
//!     panel: Some(Size::new(180.0, 240.0)),
//!     viewport: Size::new(1024.0, 768.0),
//! };
//! assert_eq!(menu.open(&geometry).placement, Placement::BottomRight);
//!
//! // The page scrolls the trigger near the bottom edge.
//! geometry.trigger = Some(Rect::new(20.0, 700.0, 120.0, 730.0));
//! assert_eq!(menu.reposition(&geometry).unwrap().placement, Placement::TopRight);
//!
//! menu.close();
//! assert!(menu.reposition(&geometry).is_none());
//! ```

use kurbo::{Rect, Size};

use crate::resolver::Resolver;
use crate::types::Placement;

/// Source of fresh geometry for an [`Overlay`].
///
/// Read values at call time; nothing is cached between calls.
pub trait Geometry {
    /// Trigger bounds in viewport coordinates, or `None` if it is not laid out yet.
    fn trigger_rect(&self) -> Option<Rect>;
    /// Measured panel size, or `None` before the first layout.
    fn panel_size(&self) -> Option<Size>;
    /// Current viewport size.
    fn viewport(&self) -> Size;
}

/// Plain geometry values, for callers that measure up front.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// Trigger bounds, if known.
    pub trigger: Option<Rect>,
    /// Panel size, if measured.
    pub panel: Option<Size>,
    /// Viewport size.
    pub viewport: Size,
}

impl Geometry for Snapshot {
    #[inline]
    fn trigger_rect(&self) -> Option<Rect> {
        self.trigger
    }

    #[inline]
    fn panel_size(&self) -> Option<Size> {
        self.panel
    }

    #[inline]
    fn viewport(&self) -> Size {
        self.viewport
    }
}

/// A resolved placement together with the panel rectangle it produces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolved {
    /// Placement chosen by the resolver.
    pub placement: Placement,
    /// Panel bounds in viewport coordinates, clamped into the padded viewport.
    pub rect: Rect,
}

/// Open/closed state for one floating panel.
#[derive(Clone, Debug)]
pub struct Overlay {
    resolver: Resolver,
    preferred: Placement,
    estimate: Size,
    current: Option<Resolved>,
}

impl Overlay {
    /// Create a closed overlay.
    pub fn new(resolver: Resolver, preferred: Placement) -> Self {
        Self {
            resolver,
            preferred,
            estimate: Size::ZERO,
            current: None,
        }
    }

    /// Size to assume while the panel has not been measured.
    ///
    /// Without an estimate an unmeasured panel keeps the preferred placement
    /// until [`reposition`](Self::reposition) runs with a real size.
    pub fn with_estimate(mut self, estimate: Size) -> Self {
        self.estimate = estimate;
        self
    }

    /// The resolver in use.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// The caller's preferred placement.
    pub fn preferred(&self) -> Placement {
        self.preferred
    }

    /// Change the preferred placement. Takes effect on the next open or reposition.
    pub fn set_preferred(&mut self, preferred: Placement) {
        self.preferred = preferred;
    }

    /// Returns `true` while the overlay is open.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The most recent result, if open.
    pub fn current(&self) -> Option<Resolved> {
        self.current
    }

    /// Open the overlay and resolve its first placement.
    pub fn open(&mut self, geometry: &impl Geometry) -> Resolved {
        let resolved = self.compute(geometry);
        self.current = Some(resolved);
        resolved
    }

    /// Re-resolve after a resize or scroll.
    ///
    /// Returns `None` and does nothing if the overlay is closed.
    pub fn reposition(&mut self, geometry: &impl Geometry) -> Option<Resolved> {
        if self.current.is_none() {
            log::trace!("dropping reposition for a closed overlay");
            return None;
        }
        let resolved = self.compute(geometry);
        self.current = Some(resolved);
        Some(resolved)
    }

    /// Close the overlay, returning its last result.
    pub fn close(&mut self) -> Option<Resolved> {
        self.current.take()
    }

    fn compute(&self, geometry: &impl Geometry) -> Resolved {
        let trigger = geometry.trigger_rect().unwrap_or(Rect::ZERO);
        let panel = geometry.panel_size().unwrap_or(self.estimate);
        let viewport = geometry.viewport();
        let placement = self
            .resolver
            .place(trigger, panel, self.preferred, viewport);
        let rect = self.resolver.layout(trigger, panel, placement, viewport);
        Resolved { placement, rect }
    }
}
