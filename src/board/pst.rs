//! Piece-square tables.
//!
//! Laid out for White: row 0 is the promotion end of the board. Black reads
//! the same tables mirrored vertically.

use super::{Color, Piece, Square};

pub(crate) const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub(crate) const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

/// Square-dependent bonus for `piece` of `color` on `sq`. Only pawns and
/// knights have a table; every other piece scores 0.
#[inline]
pub(crate) fn positional_bonus(piece: Piece, color: Color, sq: Square) -> i32 {
    let sq = match color {
        Color::White => sq,
        Color::Black => sq.flip_vertical(),
    };
    match piece {
        Piece::Pawn => PAWN_TABLE[sq.row()][sq.col()],
        Piece::Knight => KNIGHT_TABLE[sq.row()][sq.col()],
        _ => 0,
    }
}
