use super::super::{Color, GameState, Move, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl GameState {
    /// Ray-cast along each direction: empty squares are added, the first
    /// enemy piece is added and ends the ray, an own piece ends it before.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(d_row, d_col) in directions {
            let mut current = from;
            while let Some(next) = current.offset(d_row, d_col) {
                match self.piece_at(next) {
                    None => moves.push(Move::new(from, next)),
                    Some((occupant, _)) => {
                        if occupant != color {
                            moves.push(Move::new(from, next));
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }

    /// First occupied square along a ray from `from`, if any.
    pub(crate) fn first_blocker(&self, from: Square, d_row: isize, d_col: isize) -> Option<Square> {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            if !self.is_empty(next) {
                return Some(next);
            }
            current = next;
        }
        None
    }
}
