//! Literal board layouts from FEN-style placement strings.
//!
//! Puzzle and preset positions arrive as the piece-placement field of a
//! FEN string (e.g. `"3r1k2/5ppp/8/8/3Q4/8/5PPP/6K1"`). Only that field
//! is consumed here; castling rights, en passant targets and move clocks
//! are outside the minimal rule set.

use crate::Board;
use quickchess_core::{Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected 8 ranks, got {0}")]
    WrongRankCount(usize),

    #[error("rank {rank} has {squares} squares, expected 8")]
    WrongSquareCount { rank: usize, squares: u32 },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
}

impl Board {
    /// Parses the piece-placement field of a FEN string.
    ///
    /// The first listed rank maps to row 0 (Black's back rank), matching
    /// the top-to-bottom order the board is rendered in.
    pub fn from_placement(placement: &str) -> Result<Self, LayoutError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::WrongRankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col: u32 = 0;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip;
                } else {
                    let piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece(c))?;
                    if col >= 8 {
                        return Err(LayoutError::WrongSquareCount {
                            rank: row,
                            squares: col + 1,
                        });
                    }
                    board.set(Square::new(row as u8, col as u8), Some(piece));
                    col += 1;
                }
            }
            if col != 8 {
                return Err(LayoutError::WrongSquareCount { rank: row, squares: col });
            }
        }
        Ok(board)
    }

    /// Serializes the board back to a placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for row in 0..8 {
            let mut empty_run = 0;
            for col in 0..8 {
                match self.get(Square::new(row, col)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            out.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}
