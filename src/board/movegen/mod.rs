//! Move generation.
//!
//! Pseudo-legal moves come from per-piece geometry; legal moves are the
//! pseudo-legal ones that survive a make/unmake probe without leaving the
//! mover's king attacked. Generation order is deterministic: row-major scan
//! of the board, then each piece's direction/offset declaration order.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::KING_OFFSETS;
pub(crate) use knights::KNIGHT_OFFSETS;
pub(crate) use sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

use super::{Color, GameState, Move, Piece, Square};

impl GameState {
    /// Pseudo-legal moves of the piece on `from`, ignoring king safety.
    ///
    /// Empty when the square is empty. The side to move is not consulted, so
    /// this also serves attack detection for either color.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        if let Some((color, piece)) = self.piece_at(from) {
            self.generate_piece_moves(from, color, piece, &mut moves);
        }
        moves
    }

    /// Legal moves of the piece on `from`.
    ///
    /// Returns an empty list when the square is empty or holds a piece of the
    /// side not on move. The state is probed and restored, never changed.
    pub fn possible_moves(&mut self, from: Square) -> Vec<Move> {
        match self.piece_at(from) {
            Some((color, _)) if color == self.side_to_move => self.legal_moves_from(from),
            _ => Vec::new(),
        }
    }

    /// All legal moves of `color`, whether or not it is that color's turn.
    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> {
        let origins: Vec<Square> = self.squares_of(color).collect();
        let mut moves = Vec::new();
        for from in origins {
            moves.extend(self.legal_moves_from(from));
        }
        moves
    }

    /// True if any piece of `color` has at least one legal move.
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        let origins: Vec<Square> = self.squares_of(color).collect();
        for from in origins {
            let candidates = self.pseudo_moves(from);
            if candidates.into_iter().any(|mv| self.leaves_king_safe(mv)) {
                return true;
            }
        }
        false
    }

    pub(crate) fn legal_moves_from(&mut self, from: Square) -> Vec<Move> {
        let mut candidates = self.pseudo_moves(from);
        candidates.retain(|&mv| self.leaves_king_safe(mv));
        candidates
    }

    /// Probe `mv` and report whether the mover's king is safe afterwards.
    /// The state is restored whatever the answer.
    fn leaves_king_safe(&mut self, mv: Move) -> bool {
        let info = self.make_move(mv);
        let safe = !self.is_in_check(info.moved.0);
        self.unmake_move(mv, info);
        safe
    }

    fn generate_piece_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut Vec<Move>) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_step_moves(from, color, &KNIGHT_OFFSETS, moves),
            Piece::Bishop => self.generate_sliding_moves(from, color, &BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.generate_sliding_moves(from, color, &ROOK_DIRECTIONS, moves),
            Piece::Queen => {
                self.generate_sliding_moves(from, color, &ROOK_DIRECTIONS, moves);
                self.generate_sliding_moves(from, color, &BISHOP_DIRECTIONS, moves);
            }
            Piece::King => self.generate_step_moves(from, color, &KING_OFFSETS, moves),
        }
    }

    /// True if `to` is on the board path for a piece of `color`: empty or
    /// held by the opponent.
    #[inline]
    fn is_enterable(&self, to: Square, color: Color) -> bool {
        match self.piece_at(to) {
            None => true,
            Some((occupant, _)) => occupant != color,
        }
    }
}
