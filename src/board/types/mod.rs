//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece types and colors
//! - `Square` - (row, col) board coordinates
//! - `Move` and `MoveRecord` - moves and applied-move history entries
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveRecord};
pub use piece::{Color, Piece};
pub use square::Square;
