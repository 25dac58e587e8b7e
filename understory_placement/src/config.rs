// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver configuration: pixel constants, strategy, and per-widget presets.
//!
//! Widgets disagree on spacing and on how eagerly they flip. Rather than
//! hard-code one set of numbers, every constant lives in [`PlacementConfig`],
//! and the presets reproduce the values each kind of widget is commonly tuned to.

use crate::types::Placement;

/// Which algorithm [`Resolver::place`](crate::Resolver::place) runs.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Strategy {
    /// Keep the preferred side if it fits, else try its opposite, else rank all sides.
    ///
    /// See [`Resolver::resolve`](crate::Resolver::resolve).
    #[default]
    Ranked,
    /// Only flip across the trigger when the preferred side is cramped.
    ///
    /// See [`Resolver::flip`](crate::Resolver::flip).
    Flip,
}

bitflags::bitflags! {
    /// Which parts of a placement the resolver may change.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flips: u8 {
        /// The primary side may move (e.g. bottom to top).
        const PRIMARY = 0b0000_0001;
        /// The corner may move (e.g. bottom-left to bottom-right).
        const CORNER  = 0b0000_0010;
    }
}

impl Default for Flips {
    fn default() -> Self {
        Self::all()
    }
}

/// Tunable constants for a [`Resolver`](crate::Resolver).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlacementConfig {
    /// Minimum clearance between the panel and the viewport edges.
    pub padding: f64,
    /// Distance between the trigger and the panel along the primary axis.
    pub gap: f64,
    /// Room the preferred side needs before [`Strategy::Flip`] considers the opposite side.
    pub min_clearance: f64,
    /// Algorithm used by [`Resolver::place`](crate::Resolver::place).
    pub strategy: Strategy,
    /// Parts of the placement the resolver may change.
    pub flips: Flips,
    /// With [`Strategy::Flip`], give a centered placement a corner when half
    /// the panel would overflow one side.
    pub split_centered: bool,
    /// What [`Placement::Auto`] means to [`Strategy::Flip`], which needs a
    /// concrete side to start from.
    pub auto_placement: Placement,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PlacementConfig {
    /// Ranked strategy with 8px padding and gap and a 60px flip clearance.
    pub const DEFAULT: Self = Self {
        padding: 8.0,
        gap: 8.0,
        min_clearance: 60.0,
        strategy: Strategy::Ranked,
        flips: Flips::all(),
        split_centered: false,
        auto_placement: Placement::Bottom,
    };

    /// Tooltips: flip when cramped, and push centered bubbles away from a near edge.
    pub const fn tooltip() -> Self {
        Self::DEFAULT
            .with_strategy(Strategy::Flip)
            .with_split_centered(true)
    }

    /// Dropdown option lists: flip when cramped.
    pub const fn dropdown() -> Self {
        Self::DEFAULT.with_strategy(Strategy::Flip)
    }

    /// Date pickers: a calendar is tall, so flip unless 400px are free below.
    ///
    /// The calendar hangs from the field's left edge and swaps to its right
    /// edge when it would run off the window.
    pub const fn date_picker() -> Self {
        Self::DEFAULT
            .with_strategy(Strategy::Flip)
            .with_min_clearance(400.0)
            .with_auto_placement(Placement::BottomRight)
    }

    /// Menus anchored to a trigger button.
    pub const fn menu() -> Self {
        Self::DEFAULT
    }

    /// Context menus opened at a pointer position.
    pub const fn action_menu() -> Self {
        Self::DEFAULT.with_padding(10.0).with_gap(10.0)
    }

    /// Set [`padding`](Self::padding).
    pub const fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set [`gap`](Self::gap).
    pub const fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set [`min_clearance`](Self::min_clearance).
    pub const fn with_min_clearance(mut self, min_clearance: f64) -> Self {
        self.min_clearance = min_clearance;
        self
    }

    /// Set [`strategy`](Self::strategy).
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set [`flips`](Self::flips).
    pub const fn with_flips(mut self, flips: Flips) -> Self {
        self.flips = flips;
        self
    }

    /// Set [`split_centered`](Self::split_centered).
    pub const fn with_split_centered(mut self, split_centered: bool) -> Self {
        self.split_centered = split_centered;
        self
    }

    /// Set [`auto_placement`](Self::auto_placement).
    pub const fn with_auto_placement(mut self, auto_placement: Placement) -> Self {
        self.auto_placement = auto_placement;
        self
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.padding.is_finite() && self.gap.is_finite() && self.min_clearance.is_finite()
    }
}
