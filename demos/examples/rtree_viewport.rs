// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport culling with Kurbo geometry.
//!
//! Scene objects carry floating-point bounds; the index stores their covering integer
//! rectangles and the viewport query is refined against the exact shapes.
//!
//! Run:
//! - `cargo run -p rectree_demos --example rtree_viewport`

use kurbo::{Affine, Rect as KRect, Vec2};
use rectree::{RTree, Rect, Space};

#[derive(Debug, PartialEq)]
struct Sprite {
    name: &'static str,
    bounds: KRect,
}

fn main() {
    let sprites = [
        ("tree", KRect::new(10.5, 10.5, 40.2, 80.9)),
        ("rock", KRect::new(120.0, 30.0, 150.0, 55.5)),
        ("house", KRect::new(300.0, 200.0, 420.0, 330.0)),
        ("cloud", KRect::new(-50.0, -20.0, 30.0, 5.0)),
        ("pond", KRect::new(180.25, 140.75, 260.5, 190.0)),
    ];

    let mut tree = RTree::default();
    for (name, bounds) in sprites {
        tree.add(Sprite { name, bounds }, Rect::from_kurbo_outer(bounds));
    }

    let mut viewport = KRect::new(0.0, 0.0, 200.0, 150.0);
    for frame in 0..3 {
        let window = Rect::from_kurbo_outer(viewport);
        let mut visible: Vec<_> = tree
            .filter_rect(window)
            .filter(|s| s.bounds.intersect(viewport).area() > 0.0)
            .map(|s| s.name)
            .collect();
        visible.sort_unstable();
        println!("frame {frame}: viewport {viewport:?} -> {visible:?}");

        viewport = Affine::translate(Vec2::new(100.0, 80.0)).transform_rect_bbox(viewport);
    }

    let covering: kurbo::Rect = tree.bounds().map(Into::into).unwrap_or(KRect::ZERO);
    println!("scene bounds: {covering:?}");
}
