//! Driving loop tying an engine to a UI.

use crate::engine::MastermindEngine;
use crate::error::GameError;
use crate::generator::CodeGenerator;
use crate::types::GameStatus;
use crate::ui::MastermindUi;
use tracing::{debug, info, instrument, warn};

/// Runs rounds of mastermind against a UI until the player stops.
pub struct MastermindGame<'a, T, G> {
    ui: &'a mut dyn MastermindUi<T>,
    engine: MastermindEngine<T, G>,
}

impl<'a, T, G> MastermindGame<'a, T, G>
where
    T: PartialEq + Clone,
    G: CodeGenerator<T>,
{
    /// Creates a game over `ui` with an engine drawing codes from `generator`.
    #[instrument(skip_all)]
    pub fn new(ui: &'a mut dyn MastermindUi<T>, generator: G) -> Self {
        Self {
            ui,
            engine: MastermindEngine::new(generator),
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &MastermindEngine<T, G> {
        &self.engine
    }

    /// Plays rounds until the UI declines another one.
    ///
    /// # Errors
    ///
    /// Stops at the first engine rule violation or UI failure and returns it.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), GameError> {
        let mut rounds = 0usize;
        loop {
            rounds += 1;
            info!(round = rounds, "Starting round");
            self.play_game()?;

            if !self.ui.ask_play_again()? {
                break;
            }
        }
        info!(rounds, "Player quit");
        Ok(())
    }

    fn play_game(&mut self) -> Result<(), GameError> {
        self.initialize_game()?;

        while self.engine.status() == GameStatus::InGame {
            self.ui.show_tries_left(self.engine.tries_left())?;
            self.play_one_turn()?;
        }
        Ok(())
    }

    fn initialize_game(&mut self) -> Result<(), GameError> {
        self.ui.show_board()?;
        let params = self.ui.get_start_params()?;
        debug!(?params, "Start parameters received");
        self.engine.start_game_with(params)?;
        Ok(())
    }

    fn play_one_turn(&mut self) -> Result<(), GameError> {
        let guess = self.ui.ask_for_solution()?;

        let Some(result) = self.engine.check_solution(&guess)? else {
            warn!(status = %self.engine.status(), "Guess was not scored");
            return Ok(());
        };

        if result.valid {
            self.ui.show_winning_message()?;
        } else {
            self.ui.show_game_result(result)?;
            if self.engine.status() == GameStatus::Ended {
                self.ui.show_lost_message()?;
            }
        }
        Ok(())
    }
}
