// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid directions and the query windows derived from them.
//!
//! These helpers treat a [`Rect`] as a block of grid cells: `width` columns starting
//! at `x` and `height` rows starting at `y`. They are handy for building the windows a
//! grid-based game or editor passes to [`Space::filter_rect`](crate::Space::filter_rect),
//! e.g. "what occupies the cells just right of this object".

use core::fmt;
use core::str::FromStr;

use crate::types::{Point, Rect};

/// One of the four axis directions. `y` grows downward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward larger `y`.
    Down,
    /// Toward smaller `x`.
    Left,
    /// Toward smaller `y`.
    Up,
    /// Toward larger `x`.
    Right,
}

impl Direction {
    /// Every direction, ordered so that `ALL[(i + 2) % 4]` is the opposite of `ALL[i]`.
    pub const ALL: [Self; 4] = [Self::Down, Self::Left, Self::Up, Self::Right];

    /// Horizontal unit step.
    pub const fn dx(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
            Self::Down | Self::Up => 0,
        }
    }

    /// Vertical unit step.
    pub const fn dy(self) -> i32 {
        match self {
            Self::Down => 1,
            Self::Up => -1,
            Self::Left | Self::Right => 0,
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
        }
    }

    /// True for [`Direction::Up`] and [`Direction::Down`].
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Down | Self::Up)
    }

    /// `p` moved `n` cells in this direction.
    pub const fn step(self, p: Point, n: i32) -> Point {
        Point::new(p.x + self.dx() * n, p.y + self.dy() * n)
    }

    /// The two cells covering `p` and its neighbour in this direction.
    pub const fn expand_point(self, p: Point) -> Rect {
        match self {
            Self::Up => Rect::new(p.x, p.y - 1, 1, 2),
            Self::Left => Rect::new(p.x - 1, p.y, 2, 1),
            Self::Down => Rect::new(p.x, p.y, 1, 2),
            Self::Right => Rect::new(p.x, p.y, 2, 1),
        }
    }

    /// `r` grown by one row or column on this side.
    pub const fn expand(self, r: Rect) -> Rect {
        match self {
            Self::Up => Rect::new(r.x, r.y - 1, r.width, r.height + 1),
            Self::Left => Rect::new(r.x - 1, r.y, r.width + 1, r.height),
            Self::Down => Rect::new(r.x, r.y, r.width, r.height + 1),
            Self::Right => Rect::new(r.x, r.y, r.width + 1, r.height),
        }
    }

    /// The one-cell-thick strip along this side, inside `r`.
    pub const fn inner(self, r: Rect) -> Rect {
        match self {
            Self::Up => Rect::new(r.x, r.y, r.width, 1),
            Self::Left => Rect::new(r.x, r.y, 1, r.height),
            Self::Down => Rect::new(r.x, r.y + r.height - 1, r.width, 1),
            Self::Right => Rect::new(r.x + r.width - 1, r.y, 1, r.height),
        }
    }

    /// The one-cell-thick strip along this side, just outside `r`.
    pub const fn outer(self, r: Rect) -> Rect {
        match self {
            Self::Up => Rect::new(r.x, r.y - 1, r.width, 1),
            Self::Left => Rect::new(r.x - 1, r.y, 1, r.height),
            Self::Down => Rect::new(r.x, r.y + r.height, r.width, 1),
            Self::Right => Rect::new(r.x + r.width, r.y, 1, r.height),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no [`Direction`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of: down, left, up, right")
    }
}

impl core::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse a direction name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or(ParseDirectionError)
    }
}
