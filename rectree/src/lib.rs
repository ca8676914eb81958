// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectree: a dynamic R-tree over integer rectangles.
//!
//! Rectree is a mutable spatial index for items tagged with axis-aligned rectangles.
//!
//! - Add items, remove them, or move them in place by rectangle.
//! - Query items intersecting a window or containing a point, lazily.
//! - Swap the R-tree for a linear scan (or your own structure) through the [`Space`] trait.
//!
//! Items are addressed by value plus a *window*: `remove(&item, window)` and
//! `set(&item, window, bounds)` act on the entry whose item equals `item` and whose
//! rectangle contains `window`, so any sub-region of an entry's bounds identifies it.
//!
//! # Example
//!
//! ```rust
//! use rectree::{Point, RTree, Rect, Space};
//!
//! let mut tree = RTree::new(2, 4);
//! tree.add("a", Rect::new(0, 0, 10, 10));
//! tree.add("b", Rect::new(5, 5, 10, 10));
//!
//! // Window queries report every item whose bounds intersect the window.
//! let mut hits: Vec<_> = tree.filter_rect(Rect::new(8, 8, 1, 1)).copied().collect();
//! hits.sort();
//! assert_eq!(hits, ["a", "b"]);
//!
//! // Move "a" away, addressing it by a window inside its current bounds.
//! assert!(tree.set(&"a", Rect::new(1, 1, 1, 1), Rect::new(100, 100, 5, 5)));
//! assert_eq!(tree.filter_point(Point::new(102, 102)).count(), 1);
//!
//! // Remove "b" the same way.
//! assert!(tree.remove(&"b", Rect::new(14, 14, 0, 0)));
//! assert_eq!(tree.len(), 1);
//! ```
//!
//! ## Choosing a container
//!
//! - [`RTree`]: balanced tree with a configurable fanout. Queries prune whole subtrees
//!   by their bounding rectangles; inserts and removals touch one root-to-leaf path
//!   plus any reinsertions caused by underflow. See the [`rtree`] docs for the
//!   heuristics.
//! - [`FlatList`]: insertion-ordered vector with linear scans. Good for tiny sets and
//!   as a reference when testing other containers.
//!
//! ## Geometry
//!
//! [`Rect`] uses `i32` coordinates and covers grid cells: `width` columns from `x` and
//! `height` rows from `y`. Adjacent tiles do not intersect, and zero-area rectangles are
//! valid entries covering their single row or column. [`Direction`] builds query windows
//! next to a rectangle on that grid. With the `kurbo` feature, [`Rect`] and [`Point`] convert to
//! their Kurbo counterparts.
//!
//! ## Concurrency
//!
//! Mutations take `&mut self` and query iterators borrow the container, so a query
//! can never observe a half-finished mutation. Share a tree across threads behind a
//! lock if needed.

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod direction;
pub mod error;
pub mod flatlist;
pub mod rtree;
pub mod space;
pub mod types;

pub use direction::{Direction, ParseDirectionError};
pub use error::CapacityError;
pub use flatlist::FlatList;
pub use rtree::{Filter, RTree};
pub use space::Space;
pub use types::{Point, Rect};
