//! Automated opponent driver.
//!
//! Wraps a `GameState` for a presentation layer: human moves go in, the
//! engine's reply comes back, and concurrent callers are serialized.

mod controller;

pub use controller::{GameController, TurnOutcome};
