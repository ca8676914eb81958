// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Rectree: add, move, remove, and query.

use rectree::{Point, RTree, Rect, Space};

fn main() {
    let mut tree: RTree<u32> = RTree::default();
    tree.add(1, Rect::new(0, 0, 10, 10));
    tree.add(2, Rect::new(5, 5, 10, 10));

    // Move box 1
    let moved = tree.set(&1, Rect::new(0, 0, 10, 10), Rect::new(20, 0, 10, 10));
    println!("moved: {moved}, bounds: {:?}", tree.bounds());

    // Query a point
    let hits: Vec<_> = tree.filter_point(Point::new(6, 6)).collect();
    println!("hits at (6,6): {hits:?}");

    let removed = tree.remove(&2, Rect::new(5, 5, 0, 0));
    println!("removed: {removed}, left: {}", tree.len());
}
