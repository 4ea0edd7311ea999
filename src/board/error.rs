//! Error types for board operations.

use std::fmt;

use super::{Color, Move, Square};

/// Error returned when a caller asks to apply a move the rules do not allow.
///
/// The game state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended by checkmate or stalemate
    GameOver,
    /// A square of the move lies outside the 8x8 board
    OffBoard { square: Square },
    /// The caller tried to move while the other side is on move
    NotYourTurn { to_move: Color },
    /// There is no piece on the origin square
    EmptySquare { square: Square },
    /// The piece on the origin square belongs to the side not on move
    NotYourPiece { square: Square, to_move: Color },
    /// The move is not among the legal moves of the piece
    IllegalMove { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::OffBoard { square } => write!(f, "Square {square} is off the board"),
            MoveError::NotYourTurn { to_move } => write!(f, "It is {to_move}'s turn to move"),
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::NotYourPiece { square, to_move } => {
                write!(f, "Piece on {square} does not belong to {to_move}")
            }
            MoveError::IllegalMove { mv } => write!(f, "Illegal move '{mv}'"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for positions that violate the board invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Each color must have exactly one king
    KingCount { color: Color, found: usize },
    /// A piece was placed outside the 8x8 board
    OffBoard { square: Square },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            PositionError::OffBoard { square } => {
                write!(f, "Piece placed off the board at {square}")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 2)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Placement field does not have eight ranks
    InvalidRankCount { found: usize },
    /// A rank does not describe exactly eight files
    InvalidFileCount { rank: usize, files: usize },
    /// The described position is not a valid game state
    Position(PositionError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::Position(err) => write!(f, "Invalid position: {err}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::Position(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PositionError> for FenError {
    fn from(err: PositionError) -> Self {
        FenError::Position(err)
    }
}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
