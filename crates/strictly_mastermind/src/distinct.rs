//! Code validation shared by generation, guess checking and config loading.

use crate::error::MastermindError;

/// Returns true if no two values in the slice are equal.
///
/// Pairwise comparison, so only `PartialEq` is required of the item type.
pub fn all_distinct<T: PartialEq>(values: &[T]) -> bool {
    values
        .iter()
        .enumerate()
        .all(|(i, a)| values[i + 1..].iter().all(|b| a != b))
}

/// Checks that `code` has `expected_len` values and repeats none of them.
///
/// # Errors
///
/// - [`MastermindError::SizeMismatch`] if the length is wrong
/// - [`MastermindError::DuplicateValues`] if a value repeats
pub fn validate_code<T: PartialEq>(code: &[T], expected_len: usize) -> Result<(), MastermindError> {
    if code.len() != expected_len {
        return Err(MastermindError::SizeMismatch {
            given: code.len(),
            expected: expected_len,
        });
    }
    if !all_distinct(code) {
        return Err(MastermindError::DuplicateValues);
    }
    Ok(())
}
