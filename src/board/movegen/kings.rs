use super::super::{Color, GameState, Piece, Square};
use super::{BISHOP_DIRECTIONS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};

/// Single-step king offsets. Castling moves are never generated.
pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl GameState {
    /// True iff some piece of `color`'s opponent has a pseudo-legal move onto
    /// `color`'s king square.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// True if a piece of `attacker` could move onto `square` pseudo-legally.
    ///
    /// Looks outward from the target instead of generating every attacker
    /// move. Pawns only attack diagonally, since pushes never land on an
    /// occupied square.
    pub(crate) fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let holds = |sq: Square, piece: Piece| self.piece_at(sq) == Some((attacker, piece));

        let dir = attacker.pawn_direction();
        for d_col in [-1, 1] {
            if let Some(source) = square.offset(-dir, d_col) {
                if holds(source, Piece::Pawn) {
                    return true;
                }
            }
        }

        for &(d_row, d_col) in &KNIGHT_OFFSETS {
            if let Some(source) = square.offset(d_row, d_col) {
                if holds(source, Piece::Knight) {
                    return true;
                }
            }
        }

        for &(d_row, d_col) in &KING_OFFSETS {
            if let Some(source) = square.offset(d_row, d_col) {
                if holds(source, Piece::King) {
                    return true;
                }
            }
        }

        for &(d_row, d_col) in &ROOK_DIRECTIONS {
            if let Some(blocker) = self.first_blocker(square, d_row, d_col) {
                if holds(blocker, Piece::Rook) || holds(blocker, Piece::Queen) {
                    return true;
                }
            }
        }

        for &(d_row, d_col) in &BISHOP_DIRECTIONS {
            if let Some(blocker) = self.first_blocker(square, d_row, d_col) {
                if holds(blocker, Piece::Bishop) || holds(blocker, Piece::Queen) {
                    return true;
                }
            }
        }

        false
    }
}
