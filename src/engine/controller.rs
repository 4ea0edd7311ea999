//! Game controller pairing a human player with the search engine.

use log::{debug, info};
use parking_lot::Mutex;

use crate::board::{
    search, Color, GameState, GameStatus, MoveError, MoveRecord, SearchConfig, Square,
};

/// What happened during one call to `play_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The move the human played
    pub human: MoveRecord,
    /// The engine's answer, absent when the game ended first
    pub reply: Option<MoveRecord>,
    /// Status after both moves
    pub status: GameStatus,
}

/// Engine controller managing one game against the automated player.
///
/// The game state sits behind a mutex so callers on different threads take
/// turns; a search holds the lock until it has applied its move.
pub struct GameController {
    state: Mutex<GameState>,
    engine_color: Color,
    config: SearchConfig,
}

impl GameController {
    /// Create a controller for a new game with the engine playing `engine_color`.
    #[must_use]
    pub fn new(engine_color: Color, config: SearchConfig) -> Self {
        Self::with_state(GameState::new(), engine_color, config)
    }

    /// Create a controller resuming from an existing position.
    #[must_use]
    pub fn with_state(state: GameState, engine_color: Color, config: SearchConfig) -> Self {
        GameController {
            state: Mutex::new(state),
            engine_color,
            config,
        }
    }

    #[must_use]
    pub fn engine_color(&self) -> Color {
        self.engine_color
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Copy of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Current status for the side to move.
    pub fn status(&self) -> GameStatus {
        self.state.lock().terminal_status()
    }

    /// Legal destinations for the piece on `from`, for move highlighting.
    pub fn possible_moves(&self, from: Square) -> Vec<Square> {
        self.state
            .lock()
            .possible_moves(from)
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    /// Apply the human move, then let the engine answer if it is its turn
    /// and the game goes on.
    pub fn play_move(&self, from: Square, to: Square) -> Result<TurnOutcome, MoveError> {
        let mut state = self.state.lock();
        if state.side_to_move() == self.engine_color {
            return Err(MoveError::NotYourTurn {
                to_move: self.engine_color,
            });
        }

        let human = state.apply_move(from, to)?;
        let reply = if state.is_game_over() {
            None
        } else {
            self.reply(&mut state)?
        };
        let status = state.terminal_status();
        Ok(TurnOutcome {
            human,
            reply,
            status,
        })
    }

    /// Let the engine move now, e.g. when it plays first.
    ///
    /// Returns `Ok(None)` when it is not the engine's turn or the game is over.
    pub fn engine_move(&self) -> Result<Option<MoveRecord>, MoveError> {
        let mut state = self.state.lock();
        if state.is_game_over() {
            return Ok(None);
        }
        self.reply(&mut state)
    }

    /// Start a fresh game with the same engine settings.
    pub fn reset(&self) {
        self.state.lock().reset();
        info!("game reset, engine plays {}", self.engine_color);
    }

    fn reply(&self, state: &mut GameState) -> Result<Option<MoveRecord>, MoveError> {
        if state.side_to_move() != self.engine_color {
            return Ok(None);
        }
        let result = search(state, self.engine_color, &self.config);
        let Some(mv) = result.best_move else {
            debug!("engine has no legal move");
            return Ok(None);
        };
        let record = state.apply_move(mv.from, mv.to)?;
        info!(
            "engine played {} (score {}, {} nodes)",
            mv, result.score, result.stats.nodes
        );
        Ok(Some(record))
    }
}
