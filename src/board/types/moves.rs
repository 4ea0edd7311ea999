//! Move types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move from one square to another.
///
/// No flags are carried: castling, en passant and promotion are never
/// generated, so origin and destination fully describe a move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        if !s.is_ascii() {
            return Err(MoveParseError::InvalidSquare {
                notation: s.to_string(),
            });
        }
        let invalid = |_| MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from = s[0..2].parse::<Square>().map_err(invalid)?;
        let to = s[2..4].parse::<Square>().map_err(invalid)?;
        Ok(Move { from, to })
    }
}

/// A move as it was applied to the game, kept in the move history.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveRecord {
    pub mv: Move,
    pub color: Color,
    pub piece: Piece,
    pub captured: Option<(Color, Piece)>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.color, self.piece, self.mv)?;
        if let Some((_, captured)) = self.captured {
            write!(f, " x{captured}")?;
        }
        Ok(())
    }
}
