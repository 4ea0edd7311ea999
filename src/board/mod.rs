//! Chess rules and move search on an 8x8 mailbox board.
//!
//! `GameState` owns the board and answers rules queries (legal moves, check,
//! checkmate/stalemate); `search`/`select_move` pick a move for the automated
//! player with fixed-depth alpha-beta minimax over the same state.
//!
//! # Example
//! ```
//! use minimax_chess::board::{select_move, Color, GameState, Square};
//!
//! let mut state = GameState::new();
//! let moves = state.possible_moves(Square(6, 4));
//! assert_eq!(moves.len(), 2);
//!
//! state.apply_move(Square(6, 4), Square(4, 4)).unwrap();
//! let reply = select_move(&mut state, Color::Black, 1);
//! assert!(reply.is_some());
//! ```

mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, PositionError, SquareError};
pub use state::{GameState, GameStatus, UndoInfo};
pub use types::{CastlingRights, Color, Move, MoveRecord, Piece, Square};

// Public API - search functions and configuration
pub use search::{search, select_move, SearchConfig, SearchResult, SearchStats, DEFAULT_DEPTH};
