//! Core types for quick-chess.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Color`] and [`PieceKind`] / [`Piece`] for piece representation
//! - [`Square`] for board coordinates (row/column, each in 0-7)
//! - [`Move`] for move representation
//!
//! All types serialize with serde so the surrounding UI and bot layers
//! can exchange them as JSON.

mod color;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
