use log::{debug, warn};

use super::error::MoveError;
use super::{GameState, GameStatus, Move, MoveRecord, Piece, Square, UndoInfo};

impl GameState {
    /// Probe a move: relocate the piece, capture any occupant of the
    /// destination, keep the king cache and castling rights current and hand
    /// the turn to the mover's opponent.
    ///
    /// No legality check and no history entry; pair every call with
    /// `unmake_move` using the returned `UndoInfo`.
    pub(crate) fn make_move(&mut self, mv: Move) -> UndoInfo {
        let moved = self.piece_at(mv.from).expect("make_move 'from' empty");
        let (color, piece) = moved;
        let captured = self.piece_at(mv.to);

        let info = UndoInfo {
            moved,
            captured,
            previous_king_square: self.king_squares[color.index()],
            previous_castling_rights: self.castling_rights,
            previous_side_to_move: self.side_to_move,
        };

        self.set_cell(mv.to, Some(moved));
        self.set_cell(mv.from, None);

        match piece {
            Piece::King => {
                self.king_squares[color.index()] = mv.to;
                self.castling_rights.remove_color(color);
            }
            Piece::Rook => match mv.from.col() {
                0 => self.castling_rights.remove(color, false),
                7 => self.castling_rights.remove(color, true),
                _ => {}
            },
            _ => {}
        }

        self.side_to_move = color.opponent();
        info
    }

    /// Reverse a `make_move` probe exactly.
    pub(crate) fn unmake_move(&mut self, mv: Move, info: UndoInfo) {
        self.set_cell(mv.from, Some(info.moved));
        self.set_cell(mv.to, info.captured);
        self.king_squares[info.moved.0.index()] = info.previous_king_square;
        self.castling_rights = info.previous_castling_rights;
        self.side_to_move = info.previous_side_to_move;
    }

    /// Play a move for the side to move.
    ///
    /// The move must be one of `possible_moves(from)`; anything else is
    /// rejected with the state left untouched. On success the move is
    /// recorded in the history and the game is flagged over when the
    /// opponent is checkmated or stalemated.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let mv = Move::new(from, to);
        if let Err(err) = self.validate(mv) {
            warn!("rejected move {mv}: {err}");
            return Err(err);
        }

        let info = self.make_move(mv);
        let (color, piece) = info.moved;
        let record = MoveRecord {
            mv,
            color,
            piece,
            captured: info.captured,
        };
        self.move_history.push(record);

        let status = self.terminal_status();
        if status.is_terminal() {
            self.game_over = true;
        }
        debug!("applied {record}, status {status:?}");
        Ok(record)
    }

    fn validate(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        for square in [mv.from, mv.to] {
            if !square.is_on_board() {
                return Err(MoveError::OffBoard { square });
            }
        }
        let (color, _) = self
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySquare { square: mv.from })?;
        if color != self.side_to_move {
            return Err(MoveError::NotYourPiece {
                square: mv.from,
                to_move: self.side_to_move,
            });
        }
        if !self.possible_moves(mv.from).contains(&mv) {
            return Err(MoveError::IllegalMove { mv });
        }
        Ok(())
    }

    /// Checkmate, stalemate or ongoing for the side to move.
    pub fn terminal_status(&mut self) -> GameStatus {
        let side = self.side_to_move;
        let in_check = self.is_in_check(side);
        if self.has_legal_moves(side) {
            GameStatus::Ongoing { in_check }
        } else if in_check {
            GameStatus::Checkmate {
                winner: side.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Human-readable status line for the side to move; empty while the game
    /// is ongoing without check.
    pub fn status_message(&mut self) -> String {
        let side = self.side_to_move;
        match self.terminal_status() {
            GameStatus::Checkmate { winner } => format!("{winner} wins by checkmate!"),
            GameStatus::Stalemate => "Game ends in stalemate!".to_string(),
            GameStatus::Ongoing { in_check: true } => format!("{side} is in check!"),
            GameStatus::Ongoing { in_check: false } => String::new(),
        }
    }
}
