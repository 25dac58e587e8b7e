// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolve placements for the usual floating widgets.
//!
//! Run:
//! - `cargo run -p understory_demos --example placement_basics`

use kurbo::{Point, Rect, Size};
use understory_placement::{Placement, PlacementConfig, Resolver};

fn main() {
    let viewport = Size::new(1280.0, 800.0);

    // A button in the top-left corner with plenty of room below.
    let menu = Resolver::new(PlacementConfig::menu());
    let trigger = Rect::new(10.0, 10.0, 110.0, 40.0);
    let panel = Size::new(200.0, 300.0);
    let p = menu.resolve(trigger, panel, Placement::Bottom, viewport);
    println!("== Menu near the top ==\n  {p} at {:?}", menu.layout(trigger, panel, p, viewport));
    assert_eq!(p, Placement::Bottom);

    // The same button scrolled down to the bottom edge flips above.
    let trigger = Rect::new(10.0, 780.0, 110.0, 795.0);
    let p = menu.resolve(trigger, panel, Placement::Bottom, viewport);
    println!("== Menu near the bottom ==\n  {p} at {:?}", menu.layout(trigger, panel, p, viewport));
    assert_eq!(p, Placement::Top);

    // A tooltip on an icon near the right edge is pushed left.
    let tooltip = Resolver::new(PlacementConfig::tooltip());
    let icon = Rect::new(1240.0, 300.0, 1264.0, 324.0);
    let bubble = Size::new(180.0, 32.0);
    let p = tooltip.place(icon, bubble, Placement::Top, viewport);
    println!("== Tooltip near the right edge ==\n  {p} at {:?}", tooltip.layout(icon, bubble, p, viewport));
    assert_eq!(p, Placement::TopLeft);

    // A date picker without 400px below opens upward, hanging from the field's left edge.
    let picker = Resolver::new(PlacementConfig::date_picker());
    let field = Rect::new(100.0, 500.0, 400.0, 540.0);
    let calendar = Size::new(320.0, 380.0);
    let p = picker.place(field, calendar, Placement::Auto, viewport);
    println!("== Date picker ==\n  {p}");
    assert_eq!(p, Placement::TopRight);

    // A context menu opened at the pointer in the bottom-right corner.
    let context = Resolver::new(PlacementConfig::action_menu());
    let origin = context.resolve_point(
        Point::new(1270.0, 790.0),
        Size::new(160.0, 120.0),
        Placement::Auto,
        viewport,
    );
    println!("== Context menu ==\n  origin {origin:?}");
    assert_eq!(origin, Point::new(1100.0, 660.0));

    // Configuration can come from application settings.
    let config: PlacementConfig =
        serde_json::from_str(r#"{ "padding": 12.0, "strategy": "flip", "min_clearance": 120.0 }"#)
            .expect("valid config");
    let custom = Resolver::new(config);
    let p = custom.place(trigger, panel, "bottom-left".parse().unwrap_or_default(), viewport);
    println!("== Custom config ==\n  {p}");
}
