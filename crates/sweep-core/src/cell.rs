//! Grid coordinate type.
//!
//! `Cell` stores `(row, col)` as signed integers so that neighbour offsets
//! can step off the grid and be rejected by a bounds check instead of
//! wrapping.  Row 0 is the top of the floor plan.

use std::fmt;

/// A `(row, col)` position on the floor grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan (4-connected) distance.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell `dr` rows and `dc` columns away.  May lie outside the grid.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Cell {
        Cell::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
