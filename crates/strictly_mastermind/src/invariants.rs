//! Engine invariants, asserted after every transition in debug builds.

use crate::distinct::all_distinct;
use crate::engine::MastermindEngine;
use crate::types::GameStatus;
use tracing::warn;

/// Property of an engine state, checked after every transition.
pub trait Invariant<S> {
    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Message logged when the property fails.
    fn description() -> &'static str;
}

/// A failed invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Message of the failed invariant.
    pub description: String,
}

/// Invariants checked as one group.
pub trait InvariantSet<S> {
    /// Returns every violation, or `Ok` if none.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
            (C::holds(state), C::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation {
            description: description.to_string(),
        })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: an active game has a non-empty solution and tries left.
pub struct ActiveGameInvariant;

impl<T, G> Invariant<MastermindEngine<T, G>> for ActiveGameInvariant {
    fn holds(engine: &MastermindEngine<T, G>) -> bool {
        if engine.status() != GameStatus::InGame {
            return true;
        }
        engine.solution().is_some_and(|s| !s.is_empty()) && engine.tries_left() > 0
    }

    fn description() -> &'static str {
        "An active game has a non-empty solution and at least one try left"
    }
}

/// Invariant: the solution never repeats a value.
pub struct DistinctSolutionInvariant;

impl<T: PartialEq, G> Invariant<MastermindEngine<T, G>> for DistinctSolutionInvariant {
    fn holds(engine: &MastermindEngine<T, G>) -> bool {
        engine.solution().is_none_or(all_distinct)
    }

    fn description() -> &'static str {
        "Solution values are pairwise distinct"
    }
}

/// Invariant: no tries left means the game is not running.
pub struct ExhaustedTriesInvariant;

impl<T, G> Invariant<MastermindEngine<T, G>> for ExhaustedTriesInvariant {
    fn holds(engine: &MastermindEngine<T, G>) -> bool {
        engine.tries_left() > 0 || engine.status() != GameStatus::InGame
    }

    fn description() -> &'static str {
        "Zero tries left implies the game is not in progress"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    ActiveGameInvariant,
    DistinctSolutionInvariant,
    ExhaustedTriesInvariant,
);

/// Asserts that all engine invariants hold (panics on violation in debug builds).
pub fn assert_invariants<T: PartialEq, G>(engine: &MastermindEngine<T, G>) {
    if cfg!(debug_assertions)
        && let Err(violations) = EngineInvariants::check_all(engine)
    {
        for violation in &violations {
            warn!(invariant = %violation.description, "Engine invariant violated");
        }
        panic!("Engine invariants violated: {:?}", violations);
    }
}
