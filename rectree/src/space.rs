// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The spatial container contract shared by [`RTree`](crate::RTree) and
//! [`FlatList`](crate::FlatList).

use alloc::boxed::Box;

use crate::types::{Point, Rect};

/// A mutable collection of items tagged with rectangles.
///
/// Items are matched by `PartialEq` together with a *window*: an entry matches
/// `(object, window)` when its item equals `object` and its stored rectangle contains
/// `window`. This lets callers address an entry by any sub-region of its bounds.
pub trait Space<T> {
    /// Add an item with its bounds.
    fn add(&mut self, object: T, bounds: Rect);

    /// Items whose bounds satisfy `test`, as a lazy iterator.
    ///
    /// Tree-shaped implementations evaluate `test` on group bounds to prune, so it must
    /// be monotone: whenever it accepts a rectangle it accepts every rectangle
    /// containing it.
    fn filter<'a, F>(&'a self, test: F) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
        F: Fn(&Rect) -> bool + 'a;

    /// Remove the first entry matching `(object, window)`. Returns whether one was removed.
    fn remove(&mut self, object: &T, window: Rect) -> bool;

    /// Replace the bounds of the entry matching `(object, window)`.
    ///
    /// Returns `false` and leaves the container untouched when nothing matches.
    fn set(&mut self, object: &T, window: Rect, bounds: Rect) -> bool;

    /// Items whose bounds intersect `window`.
    fn filter_rect<'a>(&'a self, window: Rect) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
    {
        self.filter(move |bounds| bounds.intersects(&window))
    }

    /// Items whose bounds contain `point`.
    fn filter_point<'a>(&'a self, point: Point) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
    {
        self.filter(move |bounds| bounds.contains_point(point))
    }

    /// Every item.
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
    {
        self.filter(|_| true)
    }
}
