use super::{GameState, Move};

impl GameState {
    /// Count leaf positions `depth` plies below the current one, moving for
    /// the side to move at each level.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves(self.side_to_move);
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|mv: Move| {
                let info = self.make_move(mv);
                let count = self.perft(depth - 1);
                self.unmake_move(mv, info);
                count
            })
            .sum()
    }
}
