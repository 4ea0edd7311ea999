//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use minimax_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let state = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(state.king_square(Color::Black), Square(0, 4));
//! ```

use super::error::PositionError;
use super::state::BACK_RANK;
use super::{CastlingRights, Color, GameState, Piece, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            builder.pieces.push((Square(0, col), Color::Black, piece));
            builder.pieces.push((Square(1, col), Color::Black, Piece::Pawn));
            builder.pieces.push((Square(6, col), Color::White, Piece::Pawn));
            builder.pieces.push((Square(7, col), Color::White, piece));
        }
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Build the game state.
    ///
    /// Fails on pieces placed off the board and unless each color has
    /// exactly one king.
    pub fn build(self) -> Result<GameState, PositionError> {
        let mut squares = [[None; 8]; 8];
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];

        for (square, color, piece) in self.pieces {
            if !square.is_on_board() {
                return Err(PositionError::OffBoard { square });
            }
            squares[square.row()][square.col()] = Some((color, piece));
            if piece == Piece::King {
                kings[color.index()].push(square);
            }
        }

        let mut king_squares = [Square(0, 0); 2];
        for color in Color::BOTH {
            match kings[color.index()].as_slice() {
                [sq] => king_squares[color.index()] = *sq,
                other => {
                    return Err(PositionError::KingCount {
                        color,
                        found: other.len(),
                    })
                }
            }
        }

        Ok(GameState {
            squares,
            side_to_move: self.side_to_move,
            king_squares,
            castling_rights: self.castling_rights,
            move_history: Vec::new(),
            game_over: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        assert_eq!(built, GameState::new());
    }

    #[test]
    fn test_kings_only() {
        let state = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .build()
            .unwrap();

        assert_eq!(state.piece_at(Square(7, 4)), Some((Color::White, Piece::King)));
        assert_eq!(state.king_square(Color::White), Square(7, 4));
        assert!(state.piece_at(Square(0, 0)).is_none());
    }

    #[test]
    fn test_missing_king_rejected() {
        let err = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            PositionError::KingCount {
                color: Color::Black,
                found: 0
            }
        );
    }

    #[test]
    fn test_second_king_rejected() {
        let err = BoardBuilder::starting_position()
            .piece(Square(4, 4), Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            PositionError::KingCount {
                color: Color::White,
                found: 2
            }
        );
    }

    #[test]
    fn test_replacing_king_keeps_count() {
        let state = BoardBuilder::starting_position()
            .clear(Square(7, 4))
            .piece(Square(5, 5), Color::White, Piece::King)
            .build()
            .unwrap();
        assert_eq!(state.king_square(Color::White), Square(5, 5));
    }

    #[test]
    fn test_off_board_piece_rejected() {
        let result = BoardBuilder::starting_position()
            .piece(Square(8, 8), Color::White, Piece::Pawn)
            .build();
        assert_eq!(
            result,
            Err(PositionError::OffBoard {
                square: Square(8, 8)
            })
        );
    }

    #[test]
    fn test_side_to_move() {
        let state = BoardBuilder::starting_position()
            .side_to_move(Color::Black)
            .build()
            .unwrap();
        assert_eq!(state.side_to_move(), Color::Black);
    }
}
