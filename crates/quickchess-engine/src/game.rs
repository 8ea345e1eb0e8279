//! Game state machine: turn tracking, move application, terminal detection.

use crate::legality::{has_any_legal_move, is_king_in_check, legal_moves};
use crate::Board;
use quickchess_core::{Color, Move, PieceKind, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The lifecycle state of a game. Terminal states are absorbing: once
/// reached, no further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game continues; `Game` tracks whose turn it is.
    InProgress,
    /// The game ended in checkmate; the color is the winner.
    Checkmate(Color),
    /// The side to move has no legal move but is not in check.
    Stalemate,
}

/// A record of one applied move, emitted for observers: captured-piece
/// trays, score tallies, and move-list rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    /// The kind of the piece that moved (before any promotion).
    pub piece: PieceKind,
    /// The color that moved.
    pub color: Color,
    /// The kind captured at `to`, if any.
    pub captured: Option<PieceKind>,
    /// The kind the pawn was promoted to, if the move promoted.
    pub promotion: Option<PieceKind>,
}

impl AppliedMove {
    /// Renders the move in the short notation the UI displays:
    /// piece letter, 'x' on capture, then the destination square,
    /// e.g. "pxe4" or "nf3".
    pub fn notation(&self) -> String {
        format!(
            "{}{}{}",
            self.piece.letter(),
            if self.captured.is_some() { "x" } else { "" },
            self.to
        )
    }
}

/// Error type for move application.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// The requested move is not in the legal set for the current board
    /// and side to move. An empty `from` square lands here too: it simply
    /// has no legal moves.
    #[error("illegal move: {mov}")]
    IllegalMove { mov: Move },

    /// The game has already ended.
    #[error("game is over")]
    GameOver,
}

/// A chess game: the live board, the side to move, and move history.
///
/// The board is the single source of truth and is mutated in place by
/// [`Game::apply_move`]; all speculative boards used for legality and
/// evaluation are clones that never escape their computation.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    in_check: bool,
    status: GameStatus,
    history: Vec<AppliedMove>,
}

impl Game {
    /// Creates a game with the standard starting layout, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Creates a game from an arbitrary literal layout.
    ///
    /// Terminal conditions are evaluated immediately, so a layout that is
    /// already mate or stalemate reports it without a move being played.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut game = Game {
            board,
            side_to_move,
            in_check: false,
            status: GameStatus::InProgress,
            history: Vec::new(),
        };
        game.refresh_state();
        game
    }

    /// Creates a game from a FEN-style placement string (puzzles, presets).
    pub fn from_placement(
        placement: &str,
        side_to_move: Color,
    ) -> Result<Self, crate::LayoutError> {
        Ok(Self::from_board(Board::from_placement(placement)?, side_to_move))
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.in_check
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns the applied moves in order.
    pub fn history(&self) -> &[AppliedMove] {
        &self.history
    }

    /// Returns the number of half-moves played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the legal destinations for the piece at `from`.
    ///
    /// Empty squares and opponent pieces yield an empty vec; selecting
    /// them is not an error, it just offers nothing to play.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        match self.board.get(from) {
            Some(piece) if piece.color == self.side_to_move => legal_moves(from, &self.board),
            _ => Vec::new(),
        }
    }

    /// Applies a move for the side to move.
    ///
    /// Rejects the move unless `to` is in the legal set of `from`. On
    /// success the live board is updated, the turn flips, check and
    /// terminal state are recomputed, and the returned [`AppliedMove`]
    /// is also appended to the history.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<AppliedMove, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let illegal = || GameError::IllegalMove {
            mov: Move { from, to, promotion },
        };

        let piece = self.board.get(from).ok_or_else(illegal)?;
        if piece.color != self.side_to_move {
            return Err(illegal());
        }
        if !legal_moves(from, &self.board).contains(&to) {
            return Err(illegal());
        }

        let captured = self.board.apply(from, to, promotion);
        let promoted = if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row()
        {
            Some(promotion.unwrap_or(PieceKind::Queen))
        } else {
            None
        };

        let mover = self.side_to_move;
        self.side_to_move = mover.opposite();
        self.refresh_state();

        let applied = AppliedMove {
            from,
            to,
            piece: piece.kind,
            color: mover,
            captured: captured.map(|p| p.kind),
            promotion: promoted,
        };
        self.history.push(applied);
        Ok(applied)
    }

    /// Recomputes the check flag and terminal status for the side to move.
    fn refresh_state(&mut self) {
        self.in_check = is_king_in_check(self.side_to_move, &self.board);
        if has_any_legal_move(self.side_to_move, &self.board) {
            self.status = GameStatus::InProgress;
        } else if self.in_check {
            self.status = GameStatus::Checkmate(self.side_to_move.opposite());
        } else {
            self.status = GameStatus::Stalemate;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_check());
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn apply_move_flips_turn_and_records_history() {
        let mut game = Game::new();
        let applied = game.apply_move(sq(6, 4), sq(4, 4), None).unwrap();
        assert_eq!(applied.piece, PieceKind::Pawn);
        assert_eq!(applied.captured, None);
        assert_eq!(applied.notation(), "pe4");
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn illegal_move_rejected_and_state_unchanged() {
        let mut game = Game::new();
        let before = game.board().clone();
        // A pawn cannot advance three squares.
        let err = game.apply_move(sq(6, 4), sq(3, 4), None).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));
        assert_eq!(game.board(), &before);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn empty_square_is_just_illegal() {
        let mut game = Game::new();
        let err = game.apply_move(sq(4, 4), sq(3, 4), None).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));
        assert!(game.legal_moves(sq(4, 4)).is_empty());
    }

    #[test]
    fn cannot_move_opponent_piece() {
        let mut game = Game::new();
        let err = game.apply_move(sq(1, 4), sq(2, 4), None).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));
        assert!(game.legal_moves(sq(1, 4)).is_empty());
    }

    #[test]
    fn capture_is_recorded_with_notation() {
        let mut game = Game::new();
        game.apply_move(sq(6, 4), sq(4, 4), None).unwrap(); // e4
        game.apply_move(sq(1, 3), sq(3, 3), None).unwrap(); // d5
        let applied = game.apply_move(sq(4, 4), sq(3, 3), None).unwrap(); // exd5
        assert_eq!(applied.captured, Some(PieceKind::Pawn));
        assert_eq!(applied.notation(), "pxd5");
    }

    #[test]
    fn check_flag_set_after_checking_move() {
        // 1. e4 e5 2. Qh5 Nc6 3. Qxf7+ and Black is in check.
        let mut game = Game::new();
        game.apply_move(sq(6, 4), sq(4, 4), None).unwrap();
        game.apply_move(sq(1, 4), sq(3, 4), None).unwrap();
        game.apply_move(sq(7, 3), sq(3, 7), None).unwrap();
        game.apply_move(sq(0, 1), sq(2, 2), None).unwrap();
        let applied = game.apply_move(sq(3, 7), sq(1, 5), None).unwrap();
        assert_eq!(applied.captured, Some(PieceKind::Pawn));
        assert!(game.is_check());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn scholars_mate_is_checkmate_for_white() {
        // 1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6?? 4. Qxf7#
        let mut game = Game::new();
        game.apply_move(sq(6, 4), sq(4, 4), None).unwrap();
        game.apply_move(sq(1, 4), sq(3, 4), None).unwrap();
        game.apply_move(sq(7, 5), sq(4, 2), None).unwrap();
        game.apply_move(sq(0, 1), sq(2, 2), None).unwrap();
        game.apply_move(sq(7, 3), sq(3, 7), None).unwrap();
        game.apply_move(sq(0, 6), sq(2, 5), None).unwrap();
        game.apply_move(sq(3, 7), sq(1, 5), None).unwrap();

        assert_eq!(game.status(), GameStatus::Checkmate(Color::White));
        assert!(game.is_check());
        assert!(game.is_over());
        assert!(!crate::legality::has_any_legal_move(
            Color::Black,
            game.board()
        ));
    }

    #[test]
    fn no_moves_accepted_after_game_over() {
        let mut game = Game::new();
        game.apply_move(sq(6, 4), sq(4, 4), None).unwrap();
        game.apply_move(sq(1, 4), sq(3, 4), None).unwrap();
        game.apply_move(sq(7, 5), sq(4, 2), None).unwrap();
        game.apply_move(sq(0, 1), sq(2, 2), None).unwrap();
        game.apply_move(sq(7, 3), sq(3, 7), None).unwrap();
        game.apply_move(sq(0, 6), sq(2, 5), None).unwrap();
        game.apply_move(sq(3, 7), sq(1, 5), None).unwrap();

        let err = game.apply_move(sq(1, 0), sq(2, 0), None).unwrap_err();
        assert_eq!(err, GameError::GameOver);
    }

    #[test]
    fn default_promotion_is_queen() {
        let mut board = Board::empty();
        board.set(sq(1, 4), Some(quickchess_core::Piece::new(PieceKind::Pawn, Color::White)));
        board.set(sq(7, 0), Some(quickchess_core::Piece::new(PieceKind::King, Color::White)));
        board.set(sq(0, 0), Some(quickchess_core::Piece::new(PieceKind::King, Color::Black)));

        let mut game = Game::from_board(board, Color::White);
        let applied = game.apply_move(sq(1, 4), sq(0, 4), None).unwrap();
        assert_eq!(applied.promotion, Some(PieceKind::Queen));
        assert_eq!(
            game.board().get(sq(0, 4)),
            Some(quickchess_core::Piece::new(PieceKind::Queen, Color::White))
        );
    }

    #[test]
    fn explicit_underpromotion() {
        let mut board = Board::empty();
        board.set(sq(1, 4), Some(quickchess_core::Piece::new(PieceKind::Pawn, Color::White)));
        board.set(sq(7, 0), Some(quickchess_core::Piece::new(PieceKind::King, Color::White)));
        board.set(sq(3, 7), Some(quickchess_core::Piece::new(PieceKind::King, Color::Black)));

        let mut game = Game::from_board(board, Color::White);
        let applied = game.apply_move(sq(1, 4), sq(0, 4), Some(PieceKind::Knight)).unwrap();
        assert_eq!(applied.promotion, Some(PieceKind::Knight));
        assert_eq!(
            game.board().get(sq(0, 4)),
            Some(quickchess_core::Piece::new(PieceKind::Knight, Color::White))
        );
    }

    #[test]
    fn stalemate_detected_not_checkmate() {
        // Black king on a8, boxed in by the white queen on b6; White king
        // far away. Black to move has no legal move and is not in check.
        let game = Game::from_placement("k7/8/1Q6/8/8/8/8/7K", Color::Black).unwrap();
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert!(!game.is_check());
        assert!(game.is_over());
    }

    #[test]
    fn preset_layout_already_mated() {
        // Back-rank mate: black king on h8, white rook on a8, black pawns
        // sealing the escape squares.
        let game = Game::from_placement("R6k/5ppp/8/8/8/8/8/6K1", Color::Black).unwrap();
        assert_eq!(game.status(), GameStatus::Checkmate(Color::White));
        assert!(game.is_check());
    }

    #[test]
    fn terminal_totality_in_progress_positions() {
        let game = Game::new();
        // Exactly one of "has a legal move" and "terminal" holds.
        assert!(crate::legality::has_any_legal_move(
            game.side_to_move(),
            game.board()
        ));
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn notation_without_capture() {
        let mut game = Game::new();
        let applied = game.apply_move(sq(7, 6), sq(5, 5), None).unwrap();
        assert_eq!(applied.notation(), "nf3");
    }
}
