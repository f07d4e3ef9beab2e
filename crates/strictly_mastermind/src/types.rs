//! Core domain types for mastermind.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a mastermind engine.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum GameStatus {
    /// No game has been started yet (or the session was moved out).
    #[default]
    #[strum(to_string = "not initialized")]
    NotInitialized,
    /// A game is running and accepts guesses.
    #[strum(to_string = "in game")]
    InGame,
    /// The game was won or the tries are exhausted.
    #[strum(to_string = "ended")]
    Ended,
}

/// Feedback for one evaluated guess.
///
/// `pegs_in_right_place` counts values at the same index in guess and solution.
/// `pegs_in_right_color` counts values present in both but at different indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct GameResult {
    /// True when every peg is in the right place.
    pub valid: bool,
    /// Number of values matching in value and position.
    pub pegs_in_right_place: usize,
    /// Number of values matching in value only.
    pub pegs_in_right_color: usize,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CORRECT: {} COLOR: {}",
            self.pegs_in_right_place, self.pegs_in_right_color
        )
    }
}

/// Parameters supplied by the UI to begin a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct GameStartParams {
    /// Length of the secret code.
    pub code_size: usize,
    /// Number of guesses allowed.
    pub max_tries: usize,
}
