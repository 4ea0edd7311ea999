use super::pst::positional_bonus;
use super::{Color, GameState, Square};

/// The four central squares (d5, e5, d4, e4).
pub(crate) const CENTER_SQUARES: [Square; 4] =
    [Square(3, 3), Square(3, 4), Square(4, 3), Square(4, 4)];

pub(crate) const CENTER_BONUS: i32 = 10;
pub(crate) const CHECK_PENALTY: i32 = 50;

impl GameState {
    /// Static evaluation in centipawns, positive when White is better.
    ///
    /// Material plus pawn/knight square bonuses, a bonus per occupied
    /// central square and a penalty for the side whose king is in check.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;

        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                let piece_score = piece.value() + positional_bonus(piece, color, sq);
                score += color.sign() * piece_score;
            }
        }

        for sq in CENTER_SQUARES {
            if let Some((color, _)) = self.piece_at(sq) {
                score += color.sign() * CENTER_BONUS;
            }
        }

        for color in Color::BOTH {
            if self.is_in_check(color) {
                score -= color.sign() * CHECK_PENALTY;
            }
        }

        score
    }

    /// Static evaluation from `color`'s point of view.
    #[inline]
    #[must_use]
    pub fn evaluate_for(&self, color: Color) -> i32 {
        color.sign() * self.evaluate()
    }
}
