// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid neighbours.
//!
//! Place blocks on a cell grid and ask what sits directly beside each one.
//!
//! Run:
//! - `cargo run -p rectree_demos --example direction_neighbors`

use rectree::{Direction, FlatList, RTree, Rect, Space};

fn neighbors<S: Space<char>>(space: &S, cells: Rect) -> Vec<(Direction, Vec<char>)> {
    Direction::ALL
        .into_iter()
        .map(|d| {
            let mut found: Vec<_> = space
                .filter_rect(d.outer(cells))
                .copied()
                .collect();
            found.sort_unstable();
            (d, found)
        })
        .collect()
}

fn main() {
    let blocks = [
        ('A', Rect::new(0, 0, 2, 2)),
        ('B', Rect::new(2, 0, 1, 3)),
        ('C', Rect::new(0, 2, 2, 1)),
        ('D', Rect::new(5, 5, 1, 1)),
    ];

    let mut tree = RTree::new(2, 4);
    let mut list = FlatList::new();
    for (c, cells) in blocks {
        tree.add(c, cells);
        list.add(c, cells);
    }

    for (c, cells) in blocks {
        let from_tree = neighbors(&tree, cells);
        assert_eq!(from_tree, neighbors(&list, cells));
        for (d, found) in from_tree {
            if !found.is_empty() {
                println!("{c} {d}: {found:?}");
            }
        }
    }

    let step: Direction = "right".parse().unwrap_or(Direction::Right);
    let moved = step.step(blocks[3].1.origin(), 2);
    println!("D stepped {step} twice lands at {moved:?}");
}
