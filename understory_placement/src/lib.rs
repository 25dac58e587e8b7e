// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: viewport-aware positioning for floating panels.
//!
//! Tooltips, dropdown lists, date pickers, and menus all face the same question when they open:
//! where can the panel go so that it stays on screen?
//! This crate answers it once, as a set of pure functions over Kurbo geometry.
//!
//! ## Inputs
//!
//! - A trigger [`Rect`](kurbo::Rect) in viewport coordinates (the element the panel is anchored to).
//! - The panel [`Size`](kurbo::Size). Pass an estimate before the first layout, then resolve again.
//! - A preferred [`Placement`], or [`Placement::Auto`] for no bias.
//! - The viewport [`Size`](kurbo::Size), read fresh on every call.
//!
//! ## Outputs
//!
//! - A [`Placement`] for widgets that position themselves by anchor edge and corner
//!   ([`Resolver::resolve`], [`Resolver::flip`], or [`Resolver::place`] to dispatch on the configured [`Strategy`]).
//! - A panel [`Rect`](kurbo::Rect) for that placement, clamped into the padded viewport ([`Resolver::layout`]).
//! - An absolute origin for panels opened at a point, such as context menus ([`Resolver::resolve_point`]).
//!
//! ## Guarantees
//!
//! - Deterministic: identical inputs always produce identical output. There is no hidden state.
//! - A preferred placement that already fits is returned unchanged.
//! - Whenever the panel is smaller than the padded viewport, the laid out rectangle stays inside it.
//! - Degenerate input never panics. Non-finite numbers, an unmeasured panel, or an empty viewport
//!   fall back to the preferred placement.
//!
//! ## Configuration
//!
//! Spacing and flip thresholds live in [`PlacementConfig`]. Presets such as
//! [`PlacementConfig::tooltip`] and [`PlacementConfig::date_picker`] match how those widgets are usually tuned.
//! With the `serde` feature, configs and placements can be loaded from application settings.
//!
//! ## Overlays
//!
//! [`overlay::Overlay`] wraps a resolver with open/closed state, so resize and scroll handlers can
//! re-resolve freely and late results for a closed panel are dropped.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_placement::{Placement, PlacementConfig, Resolver};
//!
//! let resolver = Resolver::new(PlacementConfig::default());
//! let viewport = Size::new(400.0, 800.0);
//!
//! // A trigger hugging the left edge: a panel extending left would leave the screen.
//! let trigger = Rect::new(5.0, 10.0, 55.0, 40.0);
//! let panel = Size::new(250.0, 200.0);
//!
//! let placement = resolver.resolve(trigger, panel, Placement::BottomLeft, viewport);
//! assert_eq!(placement, Placement::BottomRight);
//!
//! // Left edges align, then the panel is nudged off the window edge by the 8px padding.
//! let rect = resolver.layout(trigger, panel, placement, viewport);
//! assert_eq!(rect, Rect::new(8.0, 48.0, 258.0, 248.0));
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod config;
pub mod overlay;
pub mod resolver;
pub mod types;

pub use config::{Flips, PlacementConfig, Strategy};
pub use resolver::Resolver;
pub use types::{ParsePlacementError, Placement, Side, Spaces};
