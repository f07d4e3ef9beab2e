//! One-off scoring of a guess against a known solution.

use strictly_mastermind::{GameResult, MastermindError, score, validate_code};
use tracing::instrument;

/// Scores `guess` against `solution` with the same checks the engine applies.
///
/// # Errors
///
/// - [`MastermindError::ZeroCodeSize`] if the solution is empty
/// - [`MastermindError::DuplicateValues`] if either code repeats a value
/// - [`MastermindError::SizeMismatch`] if the guess length differs from the solution
#[instrument(skip_all, fields(code_size = solution.len()))]
pub fn score_codes<T: PartialEq>(solution: &[T], guess: &[T]) -> Result<GameResult, MastermindError> {
    if solution.is_empty() {
        return Err(MastermindError::ZeroCodeSize);
    }
    validate_code(solution, solution.len())?;
    validate_code(guess, solution.len())?;
    Ok(score(guess, solution))
}
