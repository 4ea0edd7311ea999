//! FEN reading and writing for the fields the engine models.

use std::str::FromStr;

use super::error::FenError;
use super::{BoardBuilder, CastlingRights, Color, GameState, Piece, Square};

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// Reads placement, side to move and (optionally) castling rights. The
    /// first rank of the placement is row 0. En passant and move clocks are
    /// accepted but ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut builder = BoardBuilder::new();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::InvalidFileCount {
                        rank: row,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                builder = builder.piece(Square(row, col), color, piece);
                col += 1;
            }
            if col != 8 {
                return Err(FenError::InvalidFileCount {
                    rank: row,
                    files: col,
                });
            }
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        if let Some(field) = parts.get(2) {
            for c in field.chars() {
                match c {
                    'K' => rights.set(Color::White, true),
                    'Q' => rights.set(Color::White, false),
                    'k' => rights.set(Color::Black, true),
                    'q' => rights.set(Color::Black, false),
                    '-' => {}
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }

        let state = builder.side_to_move(side).castling(rights).build()?;
        Ok(state)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            rows.push(rank);
        }

        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!(
            "{} {} {} - 0 1",
            rows.join("/"),
            side,
            self.castling_rights.to_fen_field()
        )
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::error::PositionError;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_position_roundtrip() {
        let state = GameState::try_from_fen(START_FEN).unwrap();
        assert_eq!(state, GameState::new());
        assert_eq!(GameState::new().to_fen(), START_FEN);
    }

    #[test]
    fn test_first_rank_is_row_zero() {
        let state: GameState = "4k3/8/8/8/8/8/8/4K2R b K - 0 1".parse().unwrap();
        assert_eq!(state.king_square(Color::Black), Square(0, 4));
        assert_eq!(state.piece_at(Square(7, 7)), Some((Color::White, Piece::Rook)));
        assert_eq!(state.side_to_move(), Color::Black);
        assert!(state.castling_rights().has(Color::White, true));
        assert!(!state.castling_rights().has(Color::Black, true));
    }

    #[test]
    fn test_castling_field_optional() {
        let state = GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 w").unwrap();
        assert_eq!(state.castling_rights(), CastlingRights::none());
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            GameState::try_from_fen("8/8/8"),
            Err(FenError::TooFewParts { found: 1 })
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 x"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4X3 w"),
            Err(FenError::InvalidPiece { char: 'X' })
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/4K3 w"),
            Err(FenError::InvalidRankCount { found: 7 })
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K2 w"),
            Err(FenError::InvalidFileCount { rank: 7, files: 7 })
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 w KX"),
            Err(FenError::InvalidCastling { char: 'X' })
        );
    }

    #[test]
    fn test_king_count_enforced() {
        assert_eq!(
            GameState::try_from_fen("8/8/8/8/8/8/8/4K3 w"),
            Err(FenError::Position(PositionError::KingCount {
                color: Color::Black,
                found: 0
            }))
        );
    }
}
