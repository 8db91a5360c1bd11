//! Seeded, draw-counting generator.
//!
//! Wraps [`BitGenerator`] with the seed it was created from so a fixture run
//! can be reported, replayed, and split across threads.

use rand::{RngCore, SeedableRng};

use crate::bit_generator::BitGenerator;

/// Deterministic generator that remembers its seed.
///
/// Given the same seed, always produces the same sequence. Every word
/// drawn is counted; in debug builds a runaway draw count (for example a
/// rejection loop over a domain that is too small) trips an assertion.
///
/// # Example
///
/// ```rust
/// use fx_rng::SeededRng;
/// use rand::Rng;
///
/// let mut rng = SeededRng::new(12345);
/// let a: u64 = rng.gen();
/// let b = rng.gen_range(0..10);
///
/// let mut rng2 = SeededRng::new(12345);
/// assert_eq!(rng2.gen::<u64>(), a);
/// assert_eq!(rng2.gen_range(0..10), b);
/// ```
#[derive(Debug)]
pub struct SeededRng {
    seed: u64,
    generator: BitGenerator,
    draws_count: u64,
}

/// Maximum number of draws before warning.
const DRAWS_COUNT_WARNING_MAX: u64 = 1_000_000_000;

impl SeededRng {
    /// Create a new generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            generator: BitGenerator::seed_from_u64(seed),
            draws_count: 0,
        }
    }

    /// Get the seed used to create this generator.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get number of 64-bit words drawn since creation or the last reset.
    #[must_use]
    pub fn draws_count(&self) -> u64 {
        self.draws_count
    }

    /// Fork into an independent generator with a derived seed.
    ///
    /// Give each thread its own fork; generators are never shared.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let seed = self.next_u64();
        Self::new(seed)
    }

    /// Reset to the initial state (same seed).
    pub fn reset(&mut self) {
        self.generator = BitGenerator::seed_from_u64(self.seed);
        self.draws_count = 0;
    }

    fn count_draw(&mut self) {
        self.draws_count += 1;
        debug_assert!(
            self.draws_count < DRAWS_COUNT_WARNING_MAX,
            "Very high number of draws - possible unbounded rejection loop"
        );
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.count_draw();
        self.generator.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.count_draw();
        self.generator.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.count_draw();
        self.generator.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::Rng;
    use std::collections::HashSet;

    #[test]
    fn test_follows_bit_generator_stream() {
        let mut rng = SeededRng::new(42);
        let mut generator = BitGenerator::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(rng.next_u64(), generator.next());
        }
        assert_eq!(rng.seed(), 42);
        assert_eq!(rng.draws_count(), 100);
    }

    #[test]
    fn test_nearby_seeds_diverge() {
        let first_words: HashSet<u64> = (0..16)
            .map(|seed| SeededRng::new(seed).next_u64())
            .collect();
        assert_eq!(first_words.len(), 16);
    }

    #[test]
    fn test_gen_range() {
        let mut rng = SeededRng::new(12345);

        for _ in 0..100 {
            let half_open = rng.gen_range(3..10);
            assert!((3..10).contains(&half_open));

            let closed = rng.gen_range(3..=10);
            assert!((3..=10).contains(&closed));
        }
    }

    #[test]
    fn test_shuffle_replays_after_reset() {
        let mut rng = SeededRng::new(12345);
        let mut data = vec![1, 2, 3, 4, 5];
        let original = data.clone();

        data.shuffle(&mut rng);
        rng.reset();
        let mut data2 = original;
        data2.shuffle(&mut rng);
        assert_eq!(data, data2);
    }

    #[test]
    fn test_fork_takes_one_word_from_parent() {
        let mut rng = SeededRng::new(12345);
        let mut generator = BitGenerator::seed_from_u64(12345);

        let forked = rng.fork();
        assert_eq!(forked.seed(), generator.next());
        assert_eq!(forked.draws_count(), 0);
        assert_eq!(rng.draws_count(), 1);

        // The parent carries on past the word it handed out.
        assert_eq!(rng.next_u64(), generator.next());
        assert_eq!(rng.seed(), 12345);
    }

    #[test]
    fn test_forks_are_independent() {
        let mut rng = SeededRng::new(7);
        let mut first = rng.fork();
        let mut second = rng.fork();
        assert_ne!(first.seed(), second.seed());
        assert_ne!(first.next_u64(), second.next_u64());
    }

    #[test]
    fn test_reset_replays_every_draw_kind() {
        let mut rng = SeededRng::new(12345);
        let draw = |rng: &mut SeededRng| {
            let small = rng.next_u32();
            let mut bytes = [0u8; 13];
            rng.fill_bytes(&mut bytes);
            let word = rng.next_u64();
            (small, bytes, word)
        };

        let first = draw(&mut rng);
        assert_eq!(rng.draws_count(), 3);

        rng.reset();
        assert_eq!(rng.draws_count(), 0);
        assert_eq!(draw(&mut rng), first);
        assert_eq!(rng.draws_count(), 3);
    }

    #[test]
    fn test_draws_count() {
        let mut rng = SeededRng::new(12345);
        assert_eq!(rng.draws_count(), 0);

        let _ = rng.next_u64();
        assert_eq!(rng.draws_count(), 1);

        let _ = rng.next_u32();
        assert_eq!(rng.draws_count(), 2);
    }
}
