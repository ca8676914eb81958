// Copyright 2025 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when configuring an [`RTree`](crate::RTree).

use core::fmt;

/// Node capacity rejected by [`RTree::try_new`](crate::RTree::try_new).
///
/// A split must always produce two nodes holding at least `min` children each, so
/// `min >= 2` and `max + 1 >= 2 * min` are required.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CapacityError {
    /// `min` is below 2.
    MinTooSmall {
        /// The rejected minimum.
        min: usize,
    },
    /// `max` leaves no room for two legal halves after an overflow.
    MaxTooSmall {
        /// The requested minimum.
        min: usize,
        /// The rejected maximum.
        max: usize,
    },
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinTooSmall { min } => {
                write!(f, "minimum fanout must be at least 2, got {min}")
            }
            Self::MaxTooSmall { min, max } => write!(
                f,
                "maximum fanout {max} is too small for minimum {min}: need max + 1 >= 2 * min"
            ),
        }
    }
}

impl core::error::Error for CapacityError {}
