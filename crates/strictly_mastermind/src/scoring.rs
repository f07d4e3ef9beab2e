//! Peg counting for a guess against a solution.

use crate::types::GameResult;

/// Scores `guess` against `solution`.
///
/// For each guess position the solution is scanned from the start and the
/// first equal value decides the peg: same index counts as right place, any
/// other index as right color. Positions are not marked as consumed, which is
/// exact only when both codes hold distinct values; callers validate that.
///
/// Runs in O(n²), fine for the short codes the game uses.
pub fn score<T: PartialEq>(guess: &[T], solution: &[T]) -> GameResult {
    let mut in_place = 0;
    let mut in_color = 0;

    for (i, value) in guess.iter().enumerate() {
        if let Some(j) = solution.iter().position(|s| s == value) {
            if i == j {
                in_place += 1;
            } else {
                in_color += 1;
            }
        }
    }

    GameResult::new(in_place == solution.len(), in_place, in_color)
}
