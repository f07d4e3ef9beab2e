//! Mastermind game engine.
//!
//! The engine owns the secret solution and drives the status state machine:
//!
//! ```text
//! NotInitialized --start_game--> InGame --(win | tries exhausted)--> Ended
//!                                  ^                                  |
//!                                  +------------start_game------------+
//! ```
//!
//! The type is not `Clone`: a live session has exactly one owner.
//! [`MastermindEngine::take`] relocates a session and leaves the source empty.

use crate::distinct::validate_code;
use crate::error::MastermindError;
use crate::generator::CodeGenerator;
use crate::invariants::assert_invariants;
use crate::scoring::score;
use crate::types::{GameResult, GameStartParams, GameStatus};
use tracing::{debug, info, instrument, warn};

/// Stateful mastermind session.
pub struct MastermindEngine<T, G> {
    generator: G,
    status: GameStatus,
    solution: Vec<T>,
    tries_left: usize,
    last_result: Option<GameResult>,
}

impl<T, G> MastermindEngine<T, G>
where
    T: PartialEq + Clone,
    G: CodeGenerator<T>,
{
    /// Creates an engine that draws its secret codes from `generator`.
    #[instrument(skip(generator))]
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            status: GameStatus::NotInitialized,
            solution: Vec::new(),
            tries_left: 0,
            last_result: None,
        }
    }

    /// Starts a new round, discarding any previous one.
    ///
    /// All checks run before state is touched, so on error the engine keeps
    /// whatever round it had.
    ///
    /// # Errors
    ///
    /// - [`MastermindError::ZeroMaxTries`] if `max_tries == 0`
    /// - [`MastermindError::ZeroCodeSize`] if `code_size == 0`
    /// - any error raised by the generator
    /// - [`MastermindError::SizeMismatch`] if the generator returned the wrong length
    /// - [`MastermindError::DuplicateValues`] if the generated code repeats a value
    #[instrument(skip(self), fields(previous = %self.status))]
    pub fn start_game(&mut self, code_size: usize, max_tries: usize) -> Result<(), MastermindError> {
        if max_tries == 0 {
            warn!("Rejected start with zero tries");
            return Err(MastermindError::ZeroMaxTries);
        }
        if code_size == 0 {
            warn!("Rejected start with empty code");
            return Err(MastermindError::ZeroCodeSize);
        }

        let solution = self.generator.generate(code_size)?;

        if let Err(err) = validate_code(&solution, code_size) {
            warn!(%err, "Generator returned an unusable code");
            return Err(err);
        }

        self.solution = solution;
        self.tries_left = max_tries;
        self.status = GameStatus::InGame;
        self.last_result = None;

        info!("Game started");
        assert_invariants(self);
        Ok(())
    }

    /// Starts a new round from UI-supplied parameters.
    ///
    /// # Errors
    ///
    /// Same as [`MastermindEngine::start_game`].
    pub fn start_game_with(&mut self, params: GameStartParams) -> Result<(), MastermindError> {
        self.start_game(params.code_size, params.max_tries)
    }

    /// Evaluates a guess.
    ///
    /// Returns `Ok(None)` before any game was started (whatever the guess)
    /// and after the game ended. While in game, a winning guess ends the game
    /// at once; any other guess costs one try.
    ///
    /// # Errors
    ///
    /// - [`MastermindError::SizeMismatch`] if the guess length differs from the solution
    /// - [`MastermindError::DuplicateValues`] if the guess repeats a value; no try is consumed
    #[instrument(skip(self, guess), fields(guess_len = guess.len(), status = %self.status))]
    pub fn check_solution(&mut self, guess: &[T]) -> Result<Option<GameResult>, MastermindError> {
        if self.status == GameStatus::NotInitialized {
            debug!("No game started");
            return Ok(None);
        }

        if let Err(err) = validate_code(guess, self.solution.len()) {
            warn!(%err, "Guess rejected");
            return Err(err);
        }

        if self.status == GameStatus::Ended {
            debug!("Game already ended, guess ignored");
            return Ok(None);
        }

        let result = score(guess, &self.solution);
        if result.valid {
            self.tries_left = 0;
        } else {
            self.tries_left = self.tries_left.saturating_sub(1);
        }
        if self.tries_left == 0 {
            self.status = GameStatus::Ended;
            info!(won = result.valid, "Game ended");
        }
        self.last_result = Some(result);

        debug!(
            in_place = result.pegs_in_right_place,
            in_color = result.pegs_in_right_color,
            tries_left = self.tries_left,
            "Guess scored"
        );
        assert_invariants(self);
        Ok(Some(result))
    }
}

impl<T, G> MastermindEngine<T, G> {
    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the number of guesses left.
    pub fn tries_left(&self) -> usize {
        self.tries_left
    }

    /// Returns a read-only view of the solution, or `None` before any game.
    pub fn solution(&self) -> Option<&[T]> {
        match self.status {
            GameStatus::NotInitialized => None,
            GameStatus::InGame | GameStatus::Ended => Some(&self.solution),
        }
    }

    /// Returns the result of the most recent scored guess of this round.
    pub fn last_result(&self) -> Option<GameResult> {
        self.last_result
    }

    /// Moves the live session into a new engine, leaving `self` empty.
    ///
    /// The generator moves with the session and `self` is left with
    /// `G::default()`, so the two engines never share a random source.
    /// `self` ends up `NotInitialized` with zero tries and no solution.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn take(&mut self) -> Self
    where
        G: Default,
    {
        let moved = Self {
            generator: std::mem::take(&mut self.generator),
            status: std::mem::take(&mut self.status),
            solution: std::mem::take(&mut self.solution),
            tries_left: std::mem::take(&mut self.tries_left),
            last_result: self.last_result.take(),
        };
        debug!("Session relocated");
        moved
    }
}

impl<T, G> std::fmt::Debug for MastermindEngine<T, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Solution stays out of logs.
        f.debug_struct("MastermindEngine")
            .field("status", &self.status)
            .field("code_size", &self.solution.len())
            .field("tries_left", &self.tries_left)
            .field("last_result", &self.last_result)
            .finish_non_exhaustive()
    }
}
