use super::{CastlingRights, Color, MoveRecord, Piece, Square};

/// Contents of one square.
pub(crate) type Cell = Option<(Color, Piece)>;

/// Everything needed to reverse a probe made with `make_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoInfo {
    pub(crate) moved: (Color, Piece),
    pub(crate) captured: Cell,
    pub(crate) previous_king_square: Square,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_side_to_move: Color,
}

impl UndoInfo {
    /// The piece removed from the destination square, if any.
    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured
    }
}

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing { in_check: bool },
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }
}

/// A game in progress: the 8x8 grid plus the bookkeeping around it.
///
/// `king_squares` is a cache of where each king stands and is kept in sync
/// by every move and every probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) squares: [[Cell; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) king_squares: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) move_history: Vec<MoveRecord>,
    pub(crate) game_over: bool,
}

pub(crate) const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl GameState {
    /// The standard initial position with White to move.
    pub fn new() -> Self {
        let mut squares = [[None; 8]; 8];
        for color in Color::BOTH {
            for (col, &piece) in BACK_RANK.iter().enumerate() {
                squares[color.back_rank()][col] = Some((color, piece));
                squares[color.pawn_start_rank()][col] = Some((color, Piece::Pawn));
            }
        }

        GameState {
            squares,
            side_to_move: Color::White,
            king_squares: [
                Square(Color::White.back_rank(), 4),
                Square(Color::Black.back_rank(), 4),
            ],
            castling_rights: CastlingRights::all(),
            move_history: Vec::new(),
            game_over: false,
        }
    }

    /// Return to the initial position, dropping the history.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    /// Occupant of `sq`; `None` for empty or off-board squares.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares.get(sq.0)?.get(sq.1).copied().flatten()
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, sq: Square, cell: Cell) {
        self.squares[sq.0][sq.1] = cell;
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Cached position of `color`'s king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Occupied squares of `color` in row-major order.
    pub(crate) fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| matches!(self.piece_at(sq), Some((c, _)) if c == color))
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
