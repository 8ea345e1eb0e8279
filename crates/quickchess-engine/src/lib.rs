//! Chess rules engine for quick-chess.
//!
//! This crate provides:
//! - [`Board`] - an 8x8 mailbox board of optional pieces
//! - pseudo-legal move generation and attack detection ([`movegen`])
//! - legality filtering via speculative apply on cloned boards ([`legality`])
//! - [`Game`] - turn tracking, move application, check/checkmate/stalemate
//! - literal layout parsing from FEN-style placement strings
//!
//! # Architecture
//!
//! The board is plain data; the generator enumerates destinations per
//! piece kind with a match over a closed enum; the legality filter clones
//! the board, applies the candidate and rejects it if the mover's own
//! king is attacked afterwards. Everything is synchronous and allocation
//! is limited to small per-call move vectors, which is plenty for an 8x8
//! board driven by a UI.
//!
//! # Example
//!
//! ```
//! use quickchess_core::{Color, Square};
//! use quickchess_engine::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! let applied = game
//!     .apply_move(Square::new(6, 4), Square::new(4, 4), None)
//!     .unwrap();
//! assert_eq!(applied.notation(), "pe4");
//! assert_eq!(game.side_to_move(), Color::Black);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

mod board;
mod game;
mod layout;
pub mod legality;
pub mod movegen;

pub use board::Board;
pub use game::{AppliedMove, Game, GameError, GameStatus};
pub use layout::LayoutError;
pub use legality::{
    find_king, has_any_legal_move, is_king_in_check, legal_moves, legal_moves_for_color,
    would_leave_king_in_check,
};
pub use movegen::{is_square_attacked, pseudo_legal_moves};
