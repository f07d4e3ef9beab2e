//! Error types for mastermind.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// Broad category of a rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// An argument outside the accepted range.
    InvalidArgument,
    /// A code whose length differs from the active solution.
    SizeMismatch,
    /// A code containing the same value more than once.
    DuplicateValues,
}

/// Rule violation raised by the engine or the pattern generator.
///
/// Every variant is fatal to the call that raised it only; engine state is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MastermindError {
    /// `start_game` was called with zero tries.
    #[display("Max tries value must be greater than zero")]
    ZeroMaxTries,

    /// `start_game` was called with an empty code.
    #[display("Code size must be greater than zero")]
    ZeroCodeSize,

    /// The generator pool holds fewer values than requested.
    #[display("Cannot draw {} distinct values from a pool of {}", requested, available)]
    PoolTooSmall {
        /// Requested pattern size.
        requested: usize,
        /// Size of the pool.
        available: usize,
    },

    /// A code does not have the length of the active solution.
    #[display("Solution's size is {} instead of {}", given, expected)]
    SizeMismatch {
        /// Length of the submitted code.
        given: usize,
        /// Length of the active solution.
        expected: usize,
    },

    /// A code repeats a value.
    #[display("Values of the code must be distinct")]
    DuplicateValues,
}

impl MastermindError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MastermindError::ZeroMaxTries
            | MastermindError::ZeroCodeSize
            | MastermindError::PoolTooSmall { .. } => ErrorKind::InvalidArgument,
            MastermindError::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            MastermindError::DuplicateValues => ErrorKind::DuplicateValues,
        }
    }
}

/// Failure reported by a UI adapter (closed input, broken output).
#[derive(Debug, Clone, Display, Error)]
#[display("UI error: {} at {}:{}", message, file, line)]
pub struct UiError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl UiError {
    /// Creates a new UI error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for UiError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Error returned by the driving loop.
#[derive(Debug, Clone, Display, Error, From)]
pub enum GameError {
    /// The engine rejected a call.
    #[display("{}", _0)]
    Rules(MastermindError),
    /// The UI adapter failed.
    #[display("{}", _0)]
    Ui(UiError),
}
