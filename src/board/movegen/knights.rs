use super::super::{Color, GameState, Move, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl GameState {
    /// Fixed-offset moves for leapers (knight, king).
    pub(crate) fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(d_row, d_col) in offsets {
            if let Some(to_sq) = from.offset(d_row, d_col) {
                if self.is_enterable(to_sq, color) {
                    moves.push(Move::new(from, to_sq));
                }
            }
        }
    }
}
