//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use minimax_chess::board::prelude::*;
//!
//! let mut state = GameState::new();
//! assert_eq!(state.legal_moves(Color::White).len(), 20);
//! ```

pub use super::{
    search, select_move, BoardBuilder, CastlingRights, Color, GameState, GameStatus, Move,
    MoveError, Piece, SearchConfig, SearchResult, Square,
};
