//! UI capability set consumed by the driving loop.

use crate::error::UiError;
use crate::types::{GameResult, GameStartParams};

/// Front end that the driving loop talks to.
///
/// One implementation per adapter (console, test double, ...). Every method
/// may fail with a [`UiError`] when the underlying I/O does.
pub trait MastermindUi<T> {
    /// Draws the board; called once per round before play starts.
    fn show_board(&mut self) -> Result<(), UiError>;

    /// Shows the number of guesses left; called once per turn.
    fn show_tries_left(&mut self, count: usize) -> Result<(), UiError>;

    /// Shows the feedback for a guess that did not win.
    fn show_game_result(&mut self, result: GameResult) -> Result<(), UiError>;

    /// Announces a win.
    fn show_winning_message(&mut self) -> Result<(), UiError>;

    /// Announces a loss after the last try.
    fn show_lost_message(&mut self) -> Result<(), UiError>;

    /// Returns the parameters for the next round.
    fn get_start_params(&mut self) -> Result<GameStartParams, UiError>;

    /// Reads the player's next guess.
    fn ask_for_solution(&mut self) -> Result<Vec<T>, UiError>;

    /// Asks whether to play another round.
    fn ask_play_again(&mut self) -> Result<bool, UiError>;
}
