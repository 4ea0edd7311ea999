use log::trace;

use super::SearchStats;
use crate::board::{Color, GameState, Move};

/// Larger than any reachable evaluation.
const INFINITY: i32 = 1_000_000;

/// Search context for a single search
pub(super) struct Searcher<'a> {
    state: &'a mut GameState,
    /// The maximizing side
    side: Color,
    pruning: bool,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub(super) fn new(state: &'a mut GameState, side: Color, pruning: bool) -> Self {
        Searcher {
            state,
            side,
            pruning,
            stats: SearchStats::default(),
        }
    }

    pub(super) fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score every legal root move and keep the first strictly best one.
    pub(super) fn search_root(&mut self, depth: u32) -> (Option<Move>, i32) {
        let moves = self.state.legal_moves(self.side);
        if moves.is_empty() {
            return (None, self.state.evaluate_for(self.side));
        }

        let mut alpha = -INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let info = self.state.make_move(mv);
            let score = self.minimax(depth, alpha, INFINITY, false);
            self.state.unmake_move(mv, info);
            trace!("root {mv} scored {score}");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            if self.pruning {
                alpha = alpha.max(score);
            }
        }

        match best {
            Some((mv, score)) => (Some(mv), score),
            None => (None, self.state.evaluate_for(self.side)),
        }
    }

    /// Minimax value of the current position with `depth` plies left.
    ///
    /// `maximizing` is true when `self.side` is to move at this node.
    fn minimax(&mut self, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 {
            return self.state.evaluate_for(self.side);
        }

        let mover = if maximizing {
            self.side
        } else {
            self.side.opponent()
        };
        let moves = self.state.legal_moves(mover);
        // Terminal when either side is out of legal moves.
        if moves.is_empty() || !self.state.has_legal_moves(mover.opponent()) {
            return self.state.evaluate_for(self.side);
        }

        if maximizing {
            let mut best = -INFINITY;
            for mv in moves {
                let info = self.state.make_move(mv);
                let score = self.minimax(depth - 1, alpha, beta, false);
                self.state.unmake_move(mv, info);

                best = best.max(score);
                alpha = alpha.max(best);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in moves {
                let info = self.state.make_move(mv);
                let score = self.minimax(depth - 1, alpha, beta, true);
                self.state.unmake_move(mv, info);

                best = best.min(score);
                beta = beta.min(best);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}
