//! The board model: a fixed 8x8 grid of optional pieces.
//!
//! The board is pure data. It performs no rule validation; callers
//! pre-validate coordinates via [`Square`], and speculative mutation is
//! always done on an exclusively-owned [`Clone`] of the board, never on
//! the live one.

use quickchess_core::{Color, Piece, PieceKind, Square};
use std::fmt;

/// An 8x8 mailbox board mapping squares to optional pieces.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting layout.
    ///
    /// Black's back rank is row 0, Black pawns row 1, White pawns row 6,
    /// White's back rank row 7.
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for col in 0..8 {
            board.squares[0][col] = Some(Piece::new(BACK_RANK[col], Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(BACK_RANK[col], Color::White));
        }
        board
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Sets or clears the piece at the given square.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Iterates over all occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Moves the piece from `from` to `to`, returning the captured piece.
    ///
    /// This is the single mutation primitive used for real moves and for
    /// speculative ones on cloned boards. A pawn landing on its promotion
    /// row is replaced with `promotion` (default queen) of the same color.
    /// The caller is responsible for legality; `apply` only moves data.
    pub fn apply(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Option<Piece> {
        let piece = self.get(from);
        let captured = self.get(to);

        self.set(to, piece);
        self.set(from, None);

        if let Some(p) = piece {
            if p.kind == PieceKind::Pawn && to.row() == p.color.promotion_row() {
                let kind = promotion.unwrap_or(PieceKind::Queen);
                self.set(to, Some(Piece::new(kind, p.color)));
            }
        }

        captured
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    /// Formats as an 8-line grid of FEN characters, '.' for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let c = match self.squares[row][col] {
                    Some(p) => p.to_char(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            if row < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
