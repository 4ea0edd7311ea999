#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plies searched below each root move when no depth is given.
pub const DEFAULT_DEPTH: u32 = 3;

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Plies searched below each candidate root move
    pub depth: u32,
    /// Alpha-beta cutoffs; `false` walks the full minimax tree
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            pruning: true,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchConfig {
            depth,
            ..Self::default()
        }
    }

    /// Same depth, no cutoffs.
    #[must_use]
    pub const fn unpruned(mut self) -> Self {
        self.pruning = false;
        self
    }
}
