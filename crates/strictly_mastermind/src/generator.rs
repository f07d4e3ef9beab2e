//! Secret pattern generation.
//!
//! The engine only depends on [`CodeGenerator`], a single-method capability
//! that produces a code of a requested size. Any `FnMut(usize) -> Vec<T>`
//! closure qualifies, which keeps tests free to inject fixed codes.
//! [`PatternGenerator`] is the shuffling implementation used for real play.

use crate::distinct::all_distinct;
use crate::error::MastermindError;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Produces a secret code of the requested size.
pub trait CodeGenerator<T> {
    /// Generates a code with `size` elements.
    ///
    /// # Errors
    ///
    /// Implementations fail when they cannot produce `size` values.
    fn generate(&mut self, size: usize) -> Result<Vec<T>, MastermindError>;
}

impl<T, F> CodeGenerator<T> for F
where
    F: FnMut(usize) -> Vec<T>,
{
    fn generate(&mut self, size: usize) -> Result<Vec<T>, MastermindError> {
        Ok(self(size))
    }
}

/// Shuffle-and-take generator over a fixed pool of distinct values.
///
/// Each instance owns its random source. Generation needs `&mut self`, so
/// sharing one instance across threads requires external synchronization.
/// Not `Clone`: two copies would draw the same secret codes.
#[derive(Debug)]
pub struct PatternGenerator<T> {
    code_set: Vec<T>,
    rng: ChaCha8Rng,
}

/// Empty pool with a fresh entropy seed; every request fails with
/// [`MastermindError::PoolTooSmall`].
impl<T> Default for PatternGenerator<T> {
    fn default() -> Self {
        Self {
            code_set: Vec::new(),
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl<T: PartialEq + Clone> PatternGenerator<T> {
    /// Creates a generator seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`MastermindError::DuplicateValues`] if the pool repeats a value.
    #[instrument(skip(code_set), fields(pool_size = code_set.len()))]
    pub fn new(code_set: Vec<T>) -> Result<Self, MastermindError> {
        Self::with_rng(code_set, ChaCha8Rng::from_entropy())
    }

    /// Creates a generator with a fixed seed; same seed, same codes.
    ///
    /// # Errors
    ///
    /// Returns [`MastermindError::DuplicateValues`] if the pool repeats a value.
    #[instrument(skip(code_set), fields(pool_size = code_set.len()))]
    pub fn with_seed(code_set: Vec<T>, seed: u64) -> Result<Self, MastermindError> {
        Self::with_rng(code_set, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(code_set: Vec<T>, rng: ChaCha8Rng) -> Result<Self, MastermindError> {
        if !all_distinct(&code_set) {
            return Err(MastermindError::DuplicateValues);
        }
        Ok(Self { code_set, rng })
    }

    /// Returns the pool of candidate values (in its current shuffled order).
    pub fn code_set(&self) -> &[T] {
        &self.code_set
    }
}

impl<T: PartialEq + Clone> CodeGenerator<T> for PatternGenerator<T> {
    #[instrument(skip(self), fields(pool_size = self.code_set.len()))]
    fn generate(&mut self, size: usize) -> Result<Vec<T>, MastermindError> {
        if size > self.code_set.len() {
            return Err(MastermindError::PoolTooSmall {
                requested: size,
                available: self.code_set.len(),
            });
        }

        self.code_set.shuffle(&mut self.rng);
        debug!("Pool shuffled");
        Ok(self.code_set[..size].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<u32> {
        (1..=8).collect()
    }

    #[test]
    fn test_generates_requested_size() {
        let mut generator = PatternGenerator::with_seed(pool(), 42).unwrap();
        let code = generator.generate(5).unwrap();
        assert_eq!(code.len(), 5);
    }

    #[test]
    fn test_generated_values_are_distinct_and_from_pool() {
        let mut generator = PatternGenerator::with_seed(pool(), 7).unwrap();
        for _ in 0..50 {
            let code = generator.generate(6).unwrap();
            assert!(all_distinct(&code));
            assert!(code.iter().all(|v| pool().contains(v)));
        }
    }

    #[test]
    fn test_full_pool_is_a_permutation() {
        let mut generator = PatternGenerator::with_seed(pool(), 3).unwrap();
        let mut code = generator.generate(8).unwrap();
        code.sort();
        assert_eq!(code, pool());
    }

    #[test]
    fn test_same_seed_same_codes() {
        let mut a = PatternGenerator::with_seed(pool(), 1234).unwrap();
        let mut b = PatternGenerator::with_seed(pool(), 1234).unwrap();
        for _ in 0..10 {
            assert_eq!(a.generate(5).unwrap(), b.generate(5).unwrap());
        }
    }

    #[test]
    fn test_order_is_randomized() {
        let mut generator = PatternGenerator::with_seed(pool(), 99).unwrap();
        let codes: Vec<_> = (0..20).map(|_| generator.generate(8).unwrap()).collect();
        assert!(codes.iter().any(|c| *c != codes[0]));
    }

    #[test]
    fn test_oversized_request_fails() {
        let mut generator = PatternGenerator::with_seed(pool(), 42).unwrap();
        assert_eq!(
            generator.generate(9),
            Err(MastermindError::PoolTooSmall {
                requested: 9,
                available: 8
            })
        );
    }

    #[test]
    fn test_default_generator_is_empty() {
        let mut generator = PatternGenerator::<u32>::default();
        assert!(generator.code_set().is_empty());
        assert_eq!(
            generator.generate(1),
            Err(MastermindError::PoolTooSmall {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_duplicate_pool_rejected() {
        let result = PatternGenerator::new(vec![1, 2, 2]);
        assert!(matches!(result, Err(MastermindError::DuplicateValues)));
    }

    #[test]
    fn test_closure_is_a_generator() {
        let mut fixed = |size: usize| (0..size as u32).collect::<Vec<_>>();
        assert_eq!(fixed.generate(3).unwrap(), vec![0, 1, 2]);
    }
}
