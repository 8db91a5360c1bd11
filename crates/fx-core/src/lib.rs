//! # fx-core
//!
//! The "producible at random" capability and the generators built on it.
//!
//! - [`Random`]: a type can build itself from any [`rand::RngCore`].
//! - [`RandomEnumeration`]: a [`Random`] type with an explicit domain, from
//!   which uniform, filtered, and excluded picks are derived.
//! - [`collections`]: arrays, sets, dictionaries, and ranges with explicit
//!   length and termination policies.
//! - [`strings`]: strings and characters from alphabets and ranges.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashSet;
//!
//! use fx_core::{collections, Random};
//! use fx_rng::SeededRng;
//!
//! let mut rng = SeededRng::new(42);
//!
//! let id = u64::random(&mut rng);
//! let scores: Vec<u8> = collections::vec_in(1..=5, &mut rng);
//! // Safe for small domains: exactly 10 attempts, at most 2 distinct values.
//! let flags: HashSet<bool> = collections::set_up_to(10, &mut rng);
//! # let _ = (id, scores, flags);
//! ```

pub mod collections;
pub mod random;
pub mod strings;

pub use random::{
    pick_owned, random_action, random_in, random_optional, Random, RandomEnumeration,
};
