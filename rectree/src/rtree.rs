// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamic R-tree over integer rectangles.
//!
//! Inner nodes cache the minimum bounding rectangle (MBR) of their children and know
//! their level (distance to the leaves). Leaves hold one item each.
//!
//! Cost note
//! ---------
//! Both heuristics use the half-perimeter `width + height` of a rectangle as a cheap
//! stand-in for its area.
//!
//! - Subtree choice picks the child whose MBR grows least:
//!   `cost(c) = hp(c ∪ new) - hp(c)`.
//! - An overflowing node is split by sweeping four keys (min-x, max-x, min-y, max-y).
//!   For each key the children are sorted and every split point `k` with
//!   `min <= k <= n - min` is scored as `hp(LB_k) + hp(RB_k)`, where `LB_k` and `RB_k`
//!   bound the first `k` and the remaining `n - k` children. The lowest score over all
//!   keys wins; the first one found wins ties.
//!
//! Deletion dissolves any node that drops below `min` children and reinserts its
//! survivors at their original level, so the tree stays balanced without merging.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::CapacityError;
use crate::space::Space;
use crate::types::{Rect, union_all};

const DEFAULT_FANOUT: usize = 8;

/// Sort keys tried by the overflow split, in order.
const SPLIT_KEYS: [fn(&Rect) -> i32; 4] = [
    |r| r.x,
    |r| r.max_x(),
    |r| r.y,
    |r| r.max_y(),
];

/// R-tree with linear-cost subtree choice and an axis-sweep split.
pub struct RTree<T> {
    min_children: usize,
    max_children: usize,
    root: Option<Inner<T>>,
    len: usize,
}

enum Node<T> {
    Inner(Inner<T>),
    Leaf(Leaf<T>),
}

struct Inner<T> {
    mbr: Rect,
    level: usize,
    children: Vec<Node<T>>,
}

struct Leaf<T> {
    item: T,
    bounds: Rect,
}

/// Result of a deletion attempt below an inner node.
enum Deletion {
    NotFound,
    /// Removed; the subtree is still legal.
    Removed,
    /// The caller must drop this child: it is the matched leaf, or an inner node whose
    /// survivors have moved to the reinsert list.
    Detach,
}

impl<T> Node<T> {
    fn mbr(&self) -> Rect {
        match self {
            Self::Inner(inner) => inner.mbr,
            Self::Leaf(leaf) => leaf.bounds,
        }
    }

    fn level(&self) -> usize {
        match self {
            Self::Inner(inner) => inner.level,
            Self::Leaf(_) => 0,
        }
    }
}

impl<T: PartialEq> Leaf<T> {
    fn matches(&self, item: &T, window: &Rect) -> bool {
        self.item == *item && self.bounds.contains(window)
    }
}

fn mbr_of<T>(children: &[Node<T>]) -> Rect {
    union_all(children.iter().map(Node::mbr)).unwrap_or(Rect::ZERO)
}

/// Running unions: `out[i]` bounds the first `i + 1` rectangles.
fn running_union(rects: impl Iterator<Item = Rect>) -> Vec<Rect> {
    let mut out: Vec<Rect> = Vec::new();
    for r in rects {
        let next = out.last().map_or(r, |acc| acc.union(&r));
        out.push(next);
    }
    out
}

impl<T> Inner<T> {
    const fn empty() -> Self {
        Self {
            mbr: Rect::ZERO,
            level: 1,
            children: Vec::new(),
        }
    }

    fn from_children(children: Vec<Node<T>>) -> Self {
        let level = children.first().map_or(1, |c| c.level() + 1);
        Self {
            mbr: mbr_of(&children),
            level,
            children,
        }
    }

    fn refresh_mbr(&mut self) {
        self.mbr = mbr_of(&self.children);
    }

    fn choose_subtree(&self, mbr: &Rect) -> usize {
        let mut best_idx = 0_usize;
        let mut best_cost: Option<i64> = None;
        for (i, child) in self.children.iter().enumerate() {
            let cb = child.mbr();
            let cost = cb.union(mbr).linear_cost() - cb.linear_cost();
            if best_cost.is_none_or(|bc| cost < bc) {
                best_cost = Some(cost);
                best_idx = i;
            }
        }
        best_idx
    }

    /// Insert `node` into this subtree at its own level.
    ///
    /// Returns the split-off sibling if this node overflowed.
    fn insert(&mut self, node: Node<T>, min: usize, max: usize) -> Option<Self> {
        let mbr = node.mbr();
        if self.children.is_empty() {
            self.mbr = mbr;
            self.level = node.level() + 1;
        } else {
            self.mbr = self.mbr.union(&mbr);
        }
        assert!(
            node.level() < self.level,
            "node of level {} cannot be placed under a node of level {}",
            node.level(),
            self.level
        );

        if node.level() + 1 == self.level {
            self.children.push(node);
        } else {
            let idx = self.choose_subtree(&mbr);
            let Node::Inner(child) = &mut self.children[idx] else {
                unreachable!("children of a node above level 1 are inner nodes");
            };
            let split = child.insert(node, min, max)?;
            self.children.push(Node::Inner(split));
        }
        self.split_overflow(min, max)
    }

    /// Split this node if it holds more than `max` children.
    ///
    /// Keeps the cheapest prefix and returns a new sibling holding the suffix.
    fn split_overflow(&mut self, min: usize, max: usize) -> Option<Self> {
        let n = self.children.len();
        if n <= max {
            return None;
        }

        let bounds: Vec<Rect> = self.children.iter().map(Node::mbr).collect();
        // Each key re-sorts the order left by the previous one.
        let mut order: Vec<usize> = (0..n).collect();
        let mut best: Option<(i64, Vec<usize>, usize)> = None;
        for key in SPLIT_KEYS {
            order.sort_by_key(|&i| key(&bounds[i]));
            let prefix = running_union(order.iter().map(|&i| bounds[i]));
            let mut suffix = running_union(order.iter().rev().map(|&i| bounds[i]));
            suffix.reverse();
            for k in min..=(n - min) {
                let cost = prefix[k - 1].linear_cost() + suffix[k].linear_cost();
                if best.as_ref().is_none_or(|(bc, _, _)| cost < *bc) {
                    best = Some((cost, order.clone(), k));
                }
            }
        }
        let (_, order, k) = best.expect("capacity bounds leave at least one legal split");

        let mut slots: Vec<Option<Node<T>>> = core::mem::take(&mut self.children)
            .into_iter()
            .map(Some)
            .collect();
        let mut sorted = order.into_iter().filter_map(|i| slots[i].take());
        self.children = sorted.by_ref().take(k).collect();
        let rest: Vec<Node<T>> = sorted.collect();
        self.refresh_mbr();
        Some(Self::from_children(rest))
    }

    fn delete(
        &mut self,
        item: &T,
        window: &Rect,
        min: usize,
        deleted: &mut Vec<Node<T>>,
    ) -> Deletion
    where
        T: PartialEq,
    {
        if !self.mbr.contains(window) {
            return Deletion::NotFound;
        }
        for i in 0..self.children.len() {
            let outcome = match &mut self.children[i] {
                Node::Leaf(leaf) if leaf.matches(item, window) => Deletion::Detach,
                Node::Leaf(_) => Deletion::NotFound,
                Node::Inner(inner) => inner.delete(item, window, min, deleted),
            };
            match outcome {
                Deletion::NotFound => {}
                Deletion::Removed => {
                    self.refresh_mbr();
                    return Deletion::Removed;
                }
                Deletion::Detach => {
                    self.children.remove(i);
                    if self.children.len() >= min {
                        self.refresh_mbr();
                        return Deletion::Removed;
                    }
                    deleted.append(&mut self.children);
                    return Deletion::Detach;
                }
            }
        }
        Deletion::NotFound
    }

    fn set(&mut self, item: &T, window: &Rect, bounds: Rect) -> bool
    where
        T: PartialEq,
    {
        if !self.mbr.contains(window) {
            return false;
        }
        for child in &mut self.children {
            let updated = match child {
                Node::Leaf(leaf) if leaf.matches(item, window) => {
                    leaf.bounds = bounds;
                    true
                }
                Node::Leaf(_) => false,
                Node::Inner(inner) => inner.set(item, window, bounds),
            };
            if updated {
                self.refresh_mbr();
                return true;
            }
        }
        false
    }
}

impl<T> RTree<T> {
    /// Create an empty tree whose inner nodes hold between `min` and `max` children.
    ///
    /// # Panics
    ///
    /// Panics if `min < 2` or `max + 1 < 2 * min`; see [`RTree::try_new`].
    pub fn new(min: usize, max: usize) -> Self {
        match Self::try_new(min, max) {
            Ok(tree) => tree,
            Err(err) => panic!("invalid R-tree capacity: {err}"),
        }
    }

    /// Create an empty tree, rejecting capacities that cannot always split legally.
    pub fn try_new(min: usize, max: usize) -> Result<Self, CapacityError> {
        if min < 2 {
            return Err(CapacityError::MinTooSmall { min });
        }
        if max.saturating_add(1) < min.saturating_mul(2) {
            return Err(CapacityError::MaxTooSmall { min, max });
        }
        Ok(Self {
            min_children: min,
            max_children: max,
            root: None,
            len: 0,
        })
    }

    /// Create an empty tree with at most `fanout` children per node and a minimum of
    /// `ceil(0.4 * fanout)`.
    ///
    /// # Panics
    ///
    /// Panics if `fanout < 3`.
    pub fn with_fanout(fanout: usize) -> Self {
        Self::new((2 * fanout).div_ceil(5), fanout)
    }

    /// Minimum number of children of a non-root inner node.
    pub const fn min_children(&self) -> usize {
        self.min_children
    }

    /// Maximum number of children of an inner node.
    pub const fn max_children(&self) -> usize {
        self.max_children
    }

    /// Number of stored items.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if the tree holds no items.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of inner levels above the items; 0 when empty.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.level)
    }

    /// Bounding rectangle of every stored item, or `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.root.as_ref().map(|root| root.mbr)
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Items whose bounds satisfy `test`; the unboxed form of [`Space::filter`].
    pub fn query<F>(&self, test: F) -> Filter<'_, T, F>
    where
        F: Fn(&Rect) -> bool,
    {
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_ref()
            && test(&root.mbr)
        {
            stack.extend(root.children.iter().rev());
        }
        Filter { stack, test }
    }

    fn insert_node(&mut self, node: Node<T>) {
        let (min, max) = (self.min_children, self.max_children);
        let root = self.root.get_or_insert_with(Inner::empty);
        if let Some(split) = root.insert(node, min, max) {
            let old_root = core::mem::replace(root, Inner::empty());
            *root = Inner::from_children(vec![Node::Inner(old_root), Node::Inner(split)]);
        }
    }

    /// Replace a root holding a single inner node with that node.
    fn collapse_root(&mut self) {
        while let Some(root) = self.root.as_mut()
            && root.children.len() == 1
            && let Some(Node::Inner(_)) = root.children.first()
        {
            if let Some(Node::Inner(child)) = root.children.pop() {
                *root = child;
            }
        }
    }
}

impl<T> Default for RTree<T> {
    fn default() -> Self {
        Self::with_fanout(DEFAULT_FANOUT)
    }
}

impl<T: PartialEq> Space<T> for RTree<T> {
    fn add(&mut self, object: T, bounds: Rect) {
        self.insert_node(Node::Leaf(Leaf {
            item: object,
            bounds,
        }));
        self.len += 1;
    }

    fn filter<'a, F>(&'a self, test: F) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
        F: Fn(&Rect) -> bool + 'a,
    {
        Box::new(self.query(test))
    }

    fn remove(&mut self, object: &T, window: Rect) -> bool {
        let Some(root) = self.root.as_mut() else {
            return false;
        };
        let mut deleted = Vec::new();
        match root.delete(object, &window, self.min_children, &mut deleted) {
            Deletion::NotFound => return false,
            Deletion::Removed => {}
            Deletion::Detach => self.root = None,
        }
        self.len -= 1;
        // Highest levels were collected last; they go back first so the root regains
        // its height before smaller subtrees descend into it.
        for node in deleted.into_iter().rev() {
            self.insert_node(node);
        }
        self.collapse_root();
        true
    }

    fn set(&mut self, object: &T, window: Rect, bounds: Rect) -> bool {
        self.root
            .as_mut()
            .is_some_and(|root| root.set(object, &window, bounds))
    }
}

impl<T> Debug for RTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTree")
            .field("min_children", &self.min_children)
            .field("max_children", &self.max_children)
            .field("len", &self.len)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// Lazy query over an [`RTree`], returned by [`RTree::query`].
///
/// Walks the tree depth-first in child order, skipping subtrees whose MBR fails the test.
pub struct Filter<'a, T, F> {
    stack: Vec<&'a Node<T>>,
    test: F,
}

impl<'a, T, F> Iterator for Filter<'a, T, F>
where
    F: Fn(&Rect) -> bool,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf(leaf) => {
                    if (self.test)(&leaf.bounds) {
                        return Some(&leaf.item);
                    }
                }
                Node::Inner(inner) => {
                    if (self.test)(&inner.mbr) {
                        self.stack.extend(inner.children.iter().rev());
                    }
                }
            }
        }
        None
    }
}

impl<T, F> Debug for Filter<'_, T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Filter")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}
