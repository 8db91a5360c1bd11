//! # fx-rng
//!
//! Seedable bit generation for reproducible test fixtures.
//!
//! [`BitGenerator`] is a xoshiro256** generator: 256 bits of state, one
//! 64-bit word per draw, bit-exact across runs and platforms. [`SeededRng`]
//! wraps it with the `u64` seed it came from, so a run can be reported and
//! replayed. Both implement [`rand::RngCore`], which is the generator
//! interface the rest of the workspace is generic over.
//!
//! ## Usage
//!
//! ```rust
//! use fx_rng::{BitGenerator, SeededRng};
//! use rand::Rng;
//!
//! // Explicit 4x64-bit state
//! let mut gen = BitGenerator::from_state([1, 2, 3, 4]);
//! let word = gen.next();
//!
//! // Seed-tracking generator
//! let mut rng = SeededRng::new(12345);
//! let digit = rng.gen_range(0..10);
//! # let _ = (word, digit);
//! ```
//!
//! ## Reproducibility
//!
//! To reproduce a fixture run:
//! ```bash
//! FX_SEED=12345 cargo test
//! ```
//!
//! Not cryptographically secure.

pub mod bit_generator;
pub mod random;

pub use bit_generator::{BitGenerator, State};
pub use random::SeededRng;

/// Environment variable holding the fixture seed.
pub const SEED_ENV_VAR: &str = "FX_SEED";

/// Get the fixture seed from the environment or generate a random one.
///
/// Logs the seed for reproduction. Use `FX_SEED=<seed>` to reproduce.
/// An unparsable `FX_SEED` is reported and replaced by a fresh seed.
#[must_use]
pub fn get_or_generate_seed() -> u64 {
    match std::env::var(SEED_ENV_VAR) {
        Ok(s) => match s.trim().parse::<u64>() {
            Ok(seed) => {
                tracing::info!("{}={} (from environment)", SEED_ENV_VAR, seed);
                seed
            }
            Err(e) => {
                let seed = rand::random::<u64>();
                tracing::warn!(
                    "{} is not a valid u64 ({}); using {}={} (randomly generated)",
                    SEED_ENV_VAR,
                    e,
                    SEED_ENV_VAR,
                    seed
                );
                seed
            }
        },
        Err(_) => {
            let seed = rand::random::<u64>();
            tracing::info!("{}={} (randomly generated)", SEED_ENV_VAR, seed);
            seed
        }
    }
}
