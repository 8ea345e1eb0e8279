//! One-ply heuristic move evaluation.
//!
//! The AI opponent is deliberately shallow: it scores every legal move
//! with a static evaluation of the resulting board and picks uniformly
//! at random among the top scorers. There is no search tree, no
//! alpha-beta, no transposition table - the "thinking" delay the UI
//! shows is pure theater scheduled by the caller; [`best_move`] itself
//! is synchronous.
//!
//! Scoring terms, per candidate move:
//! - material balance of the resulting board (mover-positive)
//! - `+10 x value` of a captured piece
//! - `+50` when the move gives check
//! - `-5 x value` of the moved piece when its destination square is
//!   attacked by the opponent. This last probe runs against the board
//!   *before* the move, not after it. That reproduces the reference
//!   behavior exactly; see [`score_move`].

use quickchess_core::{Color, Move};
use quickchess_engine::{
    is_king_in_check, is_square_attacked, legal_moves_for_color, Board,
};
use rand::seq::IndexedRandom;

/// Piece-value sum over the whole board, positive for `color`'s pieces
/// and negative for the opponent's.
pub fn material_score(color: Color, board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = piece.kind.value();
            if piece.color == color {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// Scores a single candidate move for `color`.
///
/// The recapture-risk penalty checks whether the destination is attacked
/// on the pre-move board. That ignores the fact that the moving piece
/// itself now occupies the square and may shield or expose lines
/// differently - a known approximation carried over from the reference
/// implementation, kept as-is rather than silently corrected.
pub fn score_move(color: Color, board: &Board, mov: Move) -> i32 {
    let moved = board.get(mov.from);
    let destination_attacked = is_square_attacked(mov.to, color.opposite(), board);

    let mut after = board.clone();
    let captured = after.apply(mov.from, mov.to, mov.promotion);

    let mut score = material_score(color, &after);
    if let Some(piece) = captured {
        score += 10 * piece.kind.value();
    }
    if is_king_in_check(color.opposite(), &after) {
        score += 50;
    }
    if destination_attacked {
        if let Some(piece) = moved {
            score -= 5 * piece.kind.value();
        }
    }
    score
}

/// Picks the best move for `color`: the highest-scoring legal move, with
/// ties broken uniformly at random.
///
/// Returns `None` only when `color` has no legal move; callers should
/// already have checked for checkmate/stalemate.
pub fn best_move(color: Color, board: &Board) -> Option<Move> {
    let candidates = legal_moves_for_color(color, board);
    if candidates.is_empty() {
        return None;
    }

    let scored: Vec<(Move, i32)> = candidates
        .into_iter()
        .map(|mov| (mov, score_move(color, board, mov)))
        .collect();

    let best = scored.iter().map(|&(_, score)| score).max()?;
    let top: Vec<Move> = scored
        .iter()
        .filter(|&&(_, score)| score == best)
        .map(|&(mov, _)| mov)
        .collect();

    top.choose(&mut rand::rng()).copied()
}
