//! Pseudo-legal move generation and attack detection.
//!
//! Moves produced here obey piece movement geometry only; they ignore
//! whether the mover's own king ends up in check. The legality filter
//! in [`crate::legality`] removes self-check moves.

use crate::Board;
use quickchess_core::{Color, Piece, PieceKind, Square};

/// The eight knight offsets.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Diagonal ray directions (bishop).
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal ray directions (rook).
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// All eight directions (queen and king).
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Returns the destination squares reachable by the piece at `from`,
/// ignoring whether the mover's own king would be left in check.
///
/// Returns an empty vec if `from` is empty.
pub fn pseudo_legal_moves(from: Square, board: &Board) -> Vec<Square> {
    let piece = match board.get(from) {
        Some(p) => p,
        None => return Vec::new(),
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(from, piece.color, board, &mut moves),
        PieceKind::Knight => step_moves(from, piece.color, board, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => ray_moves(from, piece.color, board, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Rook => ray_moves(from, piece.color, board, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Queen => ray_moves(from, piece.color, board, &ALL_DIRECTIONS, &mut moves),
        PieceKind::King => step_moves(from, piece.color, board, &ALL_DIRECTIONS, &mut moves),
    }
    moves
}

fn pawn_moves(from: Square, color: Color, board: &Board, moves: &mut Vec<Square>) {
    let dir = color.pawn_direction();

    // Single advance onto an empty square, then the double advance from
    // the starting row when both squares are empty.
    if let Some(one) = from.offset(dir, 0) {
        if board.get(one).is_none() {
            moves.push(one);
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.get(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // Diagonal captures require an enemy piece on the target.
    for dc in [-1, 1] {
        if let Some(target) = from.offset(dir, dc) {
            if let Some(other) = board.get(target) {
                if other.color != color {
                    moves.push(target);
                }
            }
        }
    }
}

fn step_moves(
    from: Square,
    color: Color,
    board: &Board,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in offsets {
        if let Some(target) = from.offset(dr, dc) {
            if board.get(target).map_or(true, |p| p.color != color) {
                moves.push(target);
            }
        }
    }
}

fn ray_moves(
    from: Square,
    color: Color,
    board: &Board,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(target) = current.offset(dr, dc) {
            match board.get(target) {
                None => {
                    moves.push(target);
                    current = target;
                }
                Some(other) => {
                    // The first occupied square ends the ray; it is a
                    // destination only when it holds an enemy piece.
                    if other.color != color {
                        moves.push(target);
                    }
                    break;
                }
            }
        }
    }
}

/// Returns true iff any piece of `by` attacks `target`.
///
/// Attack patterns are computed directly per piece kind rather than by
/// reusing [`pseudo_legal_moves`]: a pawn attacks its two forward
/// diagonals whether or not an enemy piece currently stands there, so
/// going through the move generator would miss attacks on empty squares.
pub fn is_square_attacked(target: Square, by: Color, board: &Board) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == by)
        .any(|(from, piece)| attacks(from, piece, target, board))
}

fn attacks(from: Square, piece: Piece, target: Square, board: &Board) -> bool {
    match piece.kind {
        PieceKind::Pawn => {
            let dir = piece.color.pawn_direction();
            from.row() as i16 + dir as i16 == target.row() as i16
                && (from.col() as i16 - target.col() as i16).abs() == 1
        }
        PieceKind::Knight => KNIGHT_OFFSETS
            .iter()
            .any(|&(dr, dc)| from.offset(dr, dc) == Some(target)),
        PieceKind::Bishop => ray_reaches(from, target, board, &BISHOP_DIRECTIONS),
        PieceKind::Rook => ray_reaches(from, target, board, &ROOK_DIRECTIONS),
        PieceKind::Queen => ray_reaches(from, target, board, &ALL_DIRECTIONS),
        PieceKind::King => ALL_DIRECTIONS
            .iter()
            .any(|&(dr, dc)| from.offset(dr, dc) == Some(target)),
    }
}

fn ray_reaches(from: Square, target: Square, board: &Board, directions: &[(i8, i8)]) -> bool {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            if next == target {
                return true;
            }
            if board.get(next).is_some() {
                break;
            }
            current = next;
        }
    }
    false
}
