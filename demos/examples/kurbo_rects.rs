// Copyright 2026 the Spacefill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indexes a small scene of named kurbo rectangles and reports which of them
//! intersect a viewport. Client geometry only needs to implement `Bounded`.

use kurbo::Rect;
use spacefill_rtree::{Bounded, Bounding, OverlapKeeper, Tree};

struct Region {
    name: &'static str,
    rect: Rect,
}

impl Region {
    fn new(name: &'static str, rect: Rect) -> Self {
        Self { name, rect }
    }
}

impl Bounded for Region {
    fn bounds(&self) -> Bounding {
        Bounding::new(&[self.rect.x0, self.rect.y0], &[self.rect.x1, self.rect.y1])
    }
}

fn main() {
    let scene = [
        Region::new("toolbar", Rect::new(0.0, 0.0, 800.0, 40.0)),
        Region::new("sidebar", Rect::new(0.0, 40.0, 200.0, 600.0)),
        Region::new("canvas", Rect::new(200.0, 40.0, 800.0, 600.0)),
        Region::new("inspector", Rect::new(620.0, 40.0, 800.0, 600.0)),
        Region::new("status", Rect::new(0.0, 600.0, 800.0, 620.0)),
        Region::new("tooltip", Rect::new(340.0, 180.0, 480.0, 220.0)),
        Region::new("dialog", Rect::new(300.0, 150.0, 500.0, 450.0)),
        Region::new("offscreen", Rect::new(900.0, 0.0, 1100.0, 200.0)),
    ];

    let mut tree = Tree::new();
    for region in scene {
        tree.insert(region).expect("2D regions use the default pivot");
    }

    let viewport = Bounding::new(&[250.0, 100.0], &[600.0, 500.0]);
    let mut keeper = OverlapKeeper::new(viewport);
    tree.search(&mut keeper);

    println!("{} of {} regions intersect the viewport:", keeper.items.len(), tree.len());
    for region in &keeper.items {
        println!("  {:10} {:?}", region.name, region.rect);
    }
}
