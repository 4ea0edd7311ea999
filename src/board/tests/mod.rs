//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for move generation
//! - `movegen.rs` - Per-piece geometry, pins and check detection
//! - `make_unmake.rs` - Probe and apply correctness
//! - `edge_cases.rs` - Checkmate, stalemate and rejected moves
//! - `eval.rs` - Static evaluation terms and symmetry
//! - `search.rs` - Minimax/alpha-beta behaviour
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{Color, GameState, Move, Square};

pub(crate) fn fen(fen: &str) -> GameState {
    GameState::try_from_fen(fen).expect("test FEN should parse")
}

pub(crate) fn mv(notation: &str) -> Move {
    notation.parse().expect("test move should parse")
}

/// Play coordinate moves from the start position through `apply_move`.
pub(crate) fn play(moves: &[&str]) -> GameState {
    let mut state = GameState::new();
    for notation in moves {
        let m = mv(notation);
        state
            .apply_move(m.from, m.to)
            .unwrap_or_else(|err| panic!("{notation}: {err}"));
    }
    state
}

/// Same position with colors swapped and rows mirrored.
pub(crate) fn mirrored(state: &GameState) -> GameState {
    let mut builder = crate::board::BoardBuilder::new()
        .side_to_move(state.side_to_move().opponent());
    for sq in Square::all() {
        if let Some((color, piece)) = state.piece_at(sq) {
            builder = builder.piece(sq.flip_vertical(), color.opponent(), piece);
        }
    }
    builder.build().expect("mirror keeps one king per color")
}

/// Literal check definition: some opposing piece has a pseudo-move onto the king.
pub(crate) fn in_check_by_scan(state: &GameState, color: Color) -> bool {
    let king = state.king_square(color);
    Square::all()
        .filter(|&sq| matches!(state.piece_at(sq), Some((c, _)) if c == color.opponent()))
        .any(|sq| state.pseudo_moves(sq).iter().any(|m| m.to == king))
}
