// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat list with linear scans. Small and simple; the reference behavior for [`Space`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::space::Space;
use crate::types::Rect;

/// Flat list of `(item, bounds)` pairs scanned in insertion order.
pub struct FlatList<T> {
    entries: Vec<(T, Rect)>,
}

impl<T> FlatList<T> {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: PartialEq> FlatList<T> {
    fn position(&self, object: &T, window: &Rect) -> Option<usize> {
        self.entries
            .iter()
            .position(|(item, bounds)| item == object && bounds.contains(window))
    }
}

impl<T> Default for FlatList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for FlatList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatList")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq> Space<T> for FlatList<T> {
    fn add(&mut self, object: T, bounds: Rect) {
        self.entries.push((object, bounds));
    }

    fn filter<'a, F>(&'a self, test: F) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
        F: Fn(&Rect) -> bool + 'a,
    {
        Box::new(
            self.entries
                .iter()
                .filter(move |(_, bounds)| test(bounds))
                .map(|(item, _)| item),
        )
    }

    fn remove(&mut self, object: &T, window: Rect) -> bool {
        match self.position(object, &window) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    fn set(&mut self, object: &T, window: Rect, bounds: Rect) -> bool {
        match self.position(object, &window) {
            Some(i) => {
                self.entries[i].1 = bounds;
                true
            }
            None => false,
        }
    }
}
