// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep a dropdown placed while the page scrolls under it.
//!
//! The trigger moves down the window in steps; each step re-resolves the open
//! overlay, and the list flips above the trigger once it runs out of room.
//! After closing, further scroll events are ignored.
//!
//! Run:
//! - `cargo run -p understory_demos --example overlay_reposition`

use kurbo::{Rect, Size};
use understory_placement::overlay::{Overlay, Snapshot};
use understory_placement::{Placement, PlacementConfig, Resolver};

fn main() {
    let resolver = Resolver::new(PlacementConfig::dropdown());
    let mut dropdown = Overlay::new(resolver, Placement::BottomRight);

    let mut geometry = Snapshot {
        trigger: Some(Rect::new(40.0, 100.0, 280.0, 140.0)),
        // Not measured yet on the first frame.
        panel: None,
        viewport: Size::new(1024.0, 768.0),
    };
    let first = dropdown.open(&geometry);
    println!("== Open (unmeasured) ==\n  {} {:?}", first.placement, first.rect);

    geometry.panel = Some(Size::new(240.0, 220.0));
    let mut last = Placement::Auto;
    for step in 0..8 {
        let top = 100.0 + step as f64 * 90.0;
        geometry.trigger = Some(Rect::new(40.0, top, 280.0, top + 40.0));
        if let Some(r) = dropdown.reposition(&geometry) {
            println!("== Scroll step {step} ==\n  {} {:?}", r.placement, r.rect);
            last = r.placement;
        }
    }
    assert_eq!(last, Placement::TopRight);

    dropdown.close();
    assert!(dropdown.reposition(&geometry).is_none());
    println!("== Closed ==\n  late reposition dropped");
}
