//! Strictly Mastermind - pure code-breaking game logic.
//!
//! A secret code of distinct values is drawn from a pool; the player guesses
//! until every peg is in place or the tries run out. Each guess is answered
//! with the number of pegs in the right place and the number of pegs of the
//! right color in the wrong place.
//!
//! # Architecture
//!
//! - **Generator**: [`CodeGenerator`] capability, [`PatternGenerator`] shuffles a pool
//! - **Engine**: [`MastermindEngine`] owns the secret and the status state machine
//! - **Scoring**: [`score`] counts pegs for one guess
//! - **UI**: [`MastermindUi`] trait and the [`MastermindGame`] driving loop
//!
//! # Example
//!
//! ```
//! use strictly_mastermind::{GameStatus, MastermindEngine};
//!
//! let mut engine: MastermindEngine<u32, _> =
//!     MastermindEngine::new(|_size: usize| vec![1, 2, 3, 4, 5]);
//! engine.start_game(5, 8)?;
//!
//! let result = engine.check_solution(&[1, 3, 4, 6, 5])?.expect("game is running");
//! assert_eq!(result.pegs_in_right_place, 2);
//! assert_eq!(result.pegs_in_right_color, 2);
//! assert_eq!(engine.status(), GameStatus::InGame);
//! # Ok::<(), strictly_mastermind::MastermindError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod distinct;
mod engine;
mod error;
mod game;
mod generator;
mod invariants;
mod scoring;
mod types;
mod ui;

pub use distinct::{all_distinct, validate_code};
pub use engine::MastermindEngine;
pub use error::{ErrorKind, GameError, MastermindError, UiError};
pub use game::MastermindGame;
pub use generator::{CodeGenerator, PatternGenerator};
pub use invariants::{
    ActiveGameInvariant, DistinctSolutionInvariant, EngineInvariants, ExhaustedTriesInvariant,
    Invariant, InvariantSet, InvariantViolation,
};
pub use scoring::score;
pub use types::{GameResult, GameStartParams, GameStatus};
pub use ui::MastermindUi;
