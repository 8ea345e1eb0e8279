//! Legality filtering on top of the pseudo-legal generator.
//!
//! A candidate move is legal when applying it on a scratch copy of the
//! board does not leave the mover's own king attacked. The scratch copy
//! is a throwaway value clone; the live board is never touched here.

use crate::movegen::{is_square_attacked, pseudo_legal_moves};
use crate::Board;
use quickchess_core::{Color, Move, PieceKind, Square};

/// Scans the board for the king of the given color.
///
/// Returns `None` on malformed boards with no such king; drill positions
/// legitimately omit one.
pub fn find_king(color: Color, board: &Board) -> Option<Square> {
    board
        .pieces()
        .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
        .map(|(square, _)| square)
}

/// Returns true if the king of `color` is attacked by the opponent.
///
/// A board with no king of `color` is never in check.
pub fn is_king_in_check(color: Color, board: &Board) -> bool {
    match find_king(color, board) {
        Some(king) => is_square_attacked(king, color.opposite(), board),
        None => false,
    }
}

/// Simulates the move on a scratch board and reports whether it leaves
/// the mover's own king in check.
pub fn would_leave_king_in_check(from: Square, to: Square, board: &Board) -> bool {
    let piece = match board.get(from) {
        Some(p) => p,
        None => return false,
    };
    let mut scratch = board.clone();
    scratch.apply(from, to, None);
    is_king_in_check(piece.color, &scratch)
}

/// Returns the legal destinations for the piece at `from`: its
/// pseudo-legal moves minus those that leave its own king in check.
pub fn legal_moves(from: Square, board: &Board) -> Vec<Square> {
    pseudo_legal_moves(from, board)
        .into_iter()
        .filter(|&to| !would_leave_king_in_check(from, to, board))
        .collect()
}

/// Returns every legal move available to `color`, as `(from, to)` pairs.
pub fn legal_moves_for_color(color: Color, board: &Board) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .flat_map(|(from, _)| {
            legal_moves(from, board)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Returns true if `color` has at least one legal move, short-circuiting
/// on the first one found.
pub fn has_any_legal_move(color: Color, board: &Board) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .any(|(from, _)| {
            pseudo_legal_moves(from, board)
                .into_iter()
                .any(|to| !would_leave_king_in_check(from, to, board))
        })
}
