use super::super::{Color, GameState, Move, Square};

impl GameState {
    /// Single and double pushes onto empty squares, then diagonal captures
    /// (left, right) onto enemy pieces. No en passant, no promotion.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();

        if let Some(forward_sq) = from.offset(dir, 0) {
            if self.is_empty(forward_sq) {
                moves.push(Move::new(from, forward_sq));
                if from.row() == color.pawn_start_rank() {
                    if let Some(double_forward_sq) = from.offset(2 * dir, 0) {
                        if self.is_empty(double_forward_sq) {
                            moves.push(Move::new(from, double_forward_sq));
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            if let Some(target_sq) = from.offset(dir, d_col) {
                if let Some((target_color, _)) = self.piece_at(target_sq) {
                    if target_color != color {
                        moves.push(Move::new(from, target_sq));
                    }
                }
            }
        }
    }
}
