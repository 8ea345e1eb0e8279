//! Board square representation.
//!
//! Squares are addressed by row and column, each in `[0, 7]`. Row 0 is
//! Black's back rank and row 7 is White's, matching the board layout the
//! UI renders top to bottom.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the chess board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, 7]`. Callers are
    /// expected to pre-validate coordinates; an out-of-range square is a
    /// programming error, not a recoverable condition.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates must be in [0, 7]");
        Square { row, col }
    }

    /// Creates a square from possibly out-of-range coordinates.
    #[inline]
    pub const fn try_new(row: i16, col: i16) -> Option<Self> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the square offset by `(dr, dc)`, or `None` if off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Self::try_new(self.row as i16 + dr as i16, self.col as i16 + dc as i16)
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square { row, col }))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

impl fmt::Display for Square {
    /// Formats as algebraic notation: column 0 is file 'a', row 0 is rank 8.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}
