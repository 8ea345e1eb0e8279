//! Move representation.

use crate::{PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chess move: an ordered pair of squares, optionally carrying a
/// promotion kind.
///
/// Move identity is `(from, to, promotion)`. The speculative score the
/// AI assigns while ranking candidates is not part of a move; it lives
/// in the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move with no promotion.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a move promoting to the given kind.
    #[inline]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
