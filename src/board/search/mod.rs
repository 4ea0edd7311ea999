//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The search runs on the caller's `GameState`: every candidate is applied
//! with `make_move`, scored recursively and reverted with `unmake_move`, so
//! only one board exists for the whole search. No move ordering, no
//! transposition table, no iterative deepening and no time limit.

mod minimax;
mod params;

use log::debug;

use super::{Color, GameState, Move};
use minimax::Searcher;
pub use params::{SearchConfig, DEFAULT_DEPTH};

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    /// Branches abandoned because `beta <= alpha`
    pub cutoffs: u64,
}

/// Result of a search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` when the side has no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` from the searching side's point of view; the
    /// static evaluation of the current position when there is no move
    pub score: i32,
    pub stats: SearchStats,
}

/// Search `config.depth` plies below every legal move of `side` and return
/// the best one.
///
/// Ties keep the first move in generation order. The state is restored
/// before returning.
pub fn search(state: &mut GameState, side: Color, config: &SearchConfig) -> SearchResult {
    let mut searcher = Searcher::new(state, side, config.pruning);
    let (best_move, score) = searcher.search_root(config.depth);
    let stats = searcher.stats();

    debug!(
        "search side={side} depth={} pruning={} best={} score={score} nodes={} cutoffs={}",
        config.depth,
        config.pruning,
        best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        stats.nodes,
        stats.cutoffs,
    );

    SearchResult {
        best_move,
        score,
        stats,
    }
}

/// Pick the move for `side` with alpha-beta pruning at `depth`.
///
/// Returns `None` when `side` has no legal moves (checkmate or stalemate).
pub fn select_move(state: &mut GameState, side: Color, depth: u32) -> Option<Move> {
    search(state, side, &SearchConfig::with_depth(depth)).best_move
}
