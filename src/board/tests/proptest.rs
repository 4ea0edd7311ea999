//! Property-based tests using proptest.

use super::{in_check_by_scan, mirrored};
use crate::board::{search, Color, GameState, Move, SearchConfig, Square, UndoInfo};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the start, stopping early
/// when the side to move has none.
fn random_game(seed: u64, num_moves: usize) -> (GameState, Vec<(Move, UndoInfo)>) {
    let mut state = GameState::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut history = Vec::new();
    for _ in 0..num_moves {
        let moves = state.legal_moves(state.side_to_move());
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        let info = state.make_move(mv);
        history.push((mv, info));
    }
    (state, history)
}

proptest! {
    /// Property: make_move followed by unmake_move restores the state exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut state, mut history) = random_game(seed, num_moves);
        while let Some((mv, info)) = history.pop() {
            state.unmake_move(mv, info);
        }
        prop_assert_eq!(state, GameState::new());
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_are_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut state, _) = random_game(seed, num_moves);
        let side = state.side_to_move();
        for mv in state.legal_moves(side) {
            let info = state.make_move(mv);
            prop_assert!(!state.is_in_check(side), "{} exposes the king", mv);
            state.unmake_move(mv, info);
        }
    }

    /// Property: the cached king squares match the board
    #[test]
    fn prop_king_cache_matches_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (state, _) = random_game(seed, num_moves);
        for color in Color::BOTH {
            let on_board: Vec<Square> = Square::all()
                .filter(|&sq| state.piece_at(sq) == Some((color, crate::board::Piece::King)))
                .collect();
            prop_assert_eq!(on_board, vec![state.king_square(color)]);
        }
    }

    /// Property: attack lookup agrees with scanning opponent pseudo-moves
    #[test]
    fn prop_check_detection_matches_scan(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (state, _) = random_game(seed, num_moves);
        for color in Color::BOTH {
            prop_assert_eq!(state.is_in_check(color), in_check_by_scan(&state, color));
        }
    }

    /// Property: possible_moves is a subset of pseudo_moves and empty off turn
    #[test]
    fn prop_possible_moves_subset(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut state, _) = random_game(seed, num_moves);
        let side = state.side_to_move();
        for sq in Square::all() {
            let possible = state.possible_moves(sq);
            match state.piece_at(sq) {
                Some((color, _)) if color == side => {
                    let pseudo = state.pseudo_moves(sq);
                    prop_assert!(possible.iter().all(|m| pseudo.contains(m)));
                }
                _ => prop_assert!(possible.is_empty()),
            }
        }
    }

    /// Property: swapping colors and mirroring the board negates the score
    #[test]
    fn prop_eval_mirror_symmetry(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (state, _) = random_game(seed, num_moves);
        prop_assert_eq!(mirrored(&state).evaluate(), -state.evaluate());
    }

    /// Property: FEN export parses back to the same position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (state, _) = random_game(seed, num_moves);
        let fen = state.to_fen();
        let parsed = GameState::try_from_fen(&fen).unwrap();
        prop_assert_eq!(parsed.to_fen(), fen);
        for color in Color::BOTH {
            prop_assert_eq!(parsed.king_square(color), state.king_square(color));
        }
        prop_assert_eq!(parsed.castling_rights(), state.castling_rights());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: alpha-beta picks the same move and score as plain minimax
    #[test]
    fn prop_pruning_matches_minimax(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut state, _) = random_game(seed, num_moves);
        let side = state.side_to_move();
        let config = SearchConfig::with_depth(1);
        let pruned = search(&mut state, side, &config);
        let plain = search(&mut state, side, &config.unpruned());
        prop_assert_eq!(pruned.best_move, plain.best_move);
        prop_assert_eq!(pruned.score, plain.score);
    }
}
