// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

/// A point on the integer grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate (grows downward).
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with an integer origin and size.
///
/// A rectangle covers grid cells: columns `x..x + width` and rows `y..y + height`.
///
/// - Tiles that only share an edge or a corner do not intersect.
/// - A point on the right or bottom edge lies outside.
/// - An axis with zero extent covers its single coordinate, so a zero-area rectangle
///   is a line of cells or one cell and can be stored, queried, and removed like any
///   other entry.
///
/// Width and height are expected to be non-negative. Edges saturate at the `i32` range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Rect {
    /// The zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a rectangle from origin and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The zero-sized rectangle located at `p`.
    pub const fn from_point(p: Point) -> Self {
        Self::new(p.x, p.y, 0, 0)
    }

    /// Right edge, `x + width`. See [`Rect::max_x`] for the last column covered.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge, `y + height`. See [`Rect::max_y`] for the last row covered.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// True if the rectangle has no area.
    pub const fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Last column covered.
    #[inline]
    pub const fn max_x(&self) -> i32 {
        last_covered(self.x, self.width)
    }

    /// Last row covered.
    #[inline]
    pub const fn max_y(&self) -> i32 {
        last_covered(self.y, self.height)
    }

    /// The smallest rectangle covering every cell of `self` and `other`.
    ///
    /// The result always has positive extents, so a zero-extent input on the far edge
    /// stays covered.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Self::new(
            x,
            y,
            max_x.saturating_sub(x).saturating_add(1),
            max_y.saturating_sub(y).saturating_add(1),
        )
    }

    /// Whether the two rectangles share at least one cell.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x <= other.max_x()
            && other.x <= self.max_x()
            && self.y <= other.max_y()
            && other.y <= self.max_y()
    }

    /// Whether every cell of `other` is covered by `self`.
    pub fn contains(&self, other: &Self) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Whether the cell at `p` is covered.
    pub fn contains_point(&self, p: Point) -> bool {
        self.x <= p.x && p.x <= self.max_x() && self.y <= p.y && p.y <= self.max_y()
    }

    /// Half-perimeter, used as a cheap stand-in for area by the R-tree heuristics.
    #[inline]
    pub(crate) fn linear_cost(&self) -> i64 {
        i64::from(self.width) + i64::from(self.height)
    }
}

const fn last_covered(start: i32, extent: i32) -> i32 {
    if extent > 0 {
        start.saturating_add(extent - 1)
    } else {
        start
    }
}

/// Union of every rectangle in `rects`. Returns `None` if empty.
pub(crate) fn union_all(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    let mut it = rects.into_iter();
    let first = it.next()?;
    Some(it.fold(first, |acc, r| acc.union(&r)))
}

#[cfg(feature = "kurbo")]
impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        Self::new(
            f64::from(r.x),
            f64::from(r.y),
            f64::from(r.right()),
            f64::from(r.bottom()),
        )
    }
}

#[cfg(feature = "kurbo")]
impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

#[cfg(feature = "kurbo")]
impl Rect {
    /// The smallest integer rectangle covering a Kurbo rectangle.
    ///
    /// Edges are rounded outward; coordinates outside the `i32` range saturate.
    pub fn from_kurbo_outer(rect: kurbo::Rect) -> Self {
        let r = rect.abs().expand();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Float-to-int casts saturate, which is the documented behavior."
        )]
        let (x0, y0, x1, y1) = (r.x0 as i32, r.y0 as i32, r.x1 as i32, r.y1 as i32);
        Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }
}
