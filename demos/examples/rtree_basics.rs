// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! R-tree basics.
//!
//! Fill a tree, watch it grow, move and remove entries, and query windows.
//!
//! Run:
//! - `cargo run -p rectree_demos --example rtree_basics`

use rectree::{Point, RTree, Rect, Space};

fn main() {
    let mut tree = RTree::new(2, 4);
    for i in 0..20 {
        let (x, y) = (i % 5 * 10, i / 5 * 10);
        tree.add(i, Rect::new(x, y, 4, 4));
        println!("after {:2} adds: height {}", i + 1, tree.height());
    }
    println!("bounds: {:?}", tree.bounds());

    // The first three columns of the first two rows
    let mut hits: Vec<_> = tree.filter_rect(Rect::new(0, 0, 24, 14)).copied().collect();
    hits.sort_unstable();
    println!("window hits: {hits:?}");
    assert_eq!(hits, [0, 1, 2, 5, 6, 7]);

    // Move entry 6 far away; any window inside its bounds identifies it
    assert!(tree.set(&6, Rect::new(11, 11, 1, 1), Rect::new(500, 500, 4, 4)));
    let at: Vec<_> = tree.filter_point(Point::new(502, 502)).collect();
    println!("at (502, 502): {at:?}");

    // Removing most entries shrinks the tree again
    for i in 0..18 {
        let (x, y) = (i % 5 * 10, i / 5 * 10);
        let window = if i == 6 {
            Rect::new(500, 500, 0, 0)
        } else {
            Rect::new(x, y, 0, 0)
        };
        assert!(tree.remove(&i, window), "entry {i} should be present");
    }
    println!("left: {} entries, height {}", tree.len(), tree.height());
}
