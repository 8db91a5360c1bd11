//! Composite generators: arrays, sets, dictionaries, and ranges.
//!
//! Every generator here is infallible. Two of them are rejection loops that
//! only terminate when the element type has enough distinct values:
//!
//! - [`set_of_exact`] guarantees the requested cardinality, not termination.
//!   The caller must make sure the domain has at least `length` distinct
//!   values. For small finite domains use [`set_up_to`] instead.
//! - `Range<T>` / `RangeInclusive<T>` redraw the upper bound until it is
//!   strictly above the lower bound, so the bound type must have values
//!   above any lower bound it can produce.
//!
//! Debug builds assert once a rejection loop runs for an implausible number
//! of attempts. Release builds loop for as long as the caller lets them.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::{Range, RangeInclusive};

use rand::distributions::uniform::SampleRange;
use rand::{Rng, RngCore};

use crate::random::Random;

/// Length used when a collection is produced through [`Random`].
pub const DEFAULT_LENGTH: usize = 3;

/// Maximum rejection-loop attempts before warning.
const REJECTION_ATTEMPTS_WARNING_MAX: u64 = 10_000_000;

/// Uniform length from a half-open or closed range. An empty range gives 0.
pub fn length_in<Rg, R>(lengths: Rg, rng: &mut R) -> usize
where
    Rg: SampleRange<usize>,
    R: RngCore + ?Sized,
{
    if lengths.is_empty() {
        return 0;
    }
    rng.gen_range(lengths)
}

/// `length` values produced by `f`, in draw order.
pub fn repeat_with<T, R, F>(length: usize, rng: &mut R, mut f: F) -> Vec<T>
where
    R: RngCore + ?Sized,
    F: FnMut(&mut R) -> T,
{
    (0..length).map(|_| f(rng)).collect()
}

/// `length` independent elements.
pub fn vec_of<T: Random, R: RngCore + ?Sized>(length: usize, rng: &mut R) -> Vec<T> {
    repeat_with(length, rng, T::random)
}

/// Independent elements, with the length drawn from `lengths` first.
pub fn vec_in<T, Rg, R>(lengths: Rg, rng: &mut R) -> Vec<T>
where
    T: Random,
    Rg: SampleRange<usize>,
    R: RngCore + ?Sized,
{
    let length = length_in(lengths, rng);
    vec_of(length, rng)
}

/// [`DEFAULT_LENGTH`] elements.
impl<T: Random> Random for Vec<T> {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        vec_of(DEFAULT_LENGTH, rng)
    }
}

/// `length` elements drawn uniformly, with replacement, from `pool`.
///
/// An empty pool yields an empty vector.
pub fn sample<T: Clone, R: RngCore + ?Sized>(pool: &[T], length: usize, rng: &mut R) -> Vec<T> {
    if pool.is_empty() {
        return Vec::new();
    }
    repeat_with(length, rng, |rng| pool[rng.gen_range(0..pool.len())].clone())
}

/// Like [`sample`], with the length drawn from `lengths` first.
pub fn sample_in<T, Rg, R>(pool: &[T], lengths: Rg, rng: &mut R) -> Vec<T>
where
    T: Clone,
    Rg: SampleRange<usize>,
    R: RngCore + ?Sized,
{
    let length = length_in(lengths, rng);
    sample(pool, length, rng)
}

/// Exactly `length` distinct elements.
///
/// Terminates only if `T` has at least `length` distinct values.
pub fn set_of_exact<T, R>(length: usize, rng: &mut R) -> HashSet<T>
where
    T: Random + Eq + Hash,
    R: RngCore + ?Sized,
{
    set_of_exact_with(length, rng, T::random)
}

/// Exactly `length` distinct values produced by `f`.
///
/// Terminates only if `f` can produce at least `length` distinct values.
pub fn set_of_exact_with<T, R, F>(length: usize, rng: &mut R, mut f: F) -> HashSet<T>
where
    T: Eq + Hash,
    R: RngCore + ?Sized,
    F: FnMut(&mut R) -> T,
{
    let mut set = HashSet::with_capacity(length);
    let mut attempts_count: u64 = 0;
    while set.len() != length {
        set.insert(f(rng));
        attempts_count += 1;
        debug_assert!(
            attempts_count < REJECTION_ATTEMPTS_WARNING_MAX,
            "Exact-count set still short after {} attempts: domain smaller than {}?",
            attempts_count,
            length
        );
    }
    set
}

/// Up to `length` distinct elements from exactly `length` attempts.
///
/// Always terminates; duplicates shrink the result. This is the safe
/// choice for small finite domains such as fieldless enums.
pub fn set_up_to<T, R>(length: usize, rng: &mut R) -> HashSet<T>
where
    T: Random + Eq + Hash,
    R: RngCore + ?Sized,
{
    set_up_to_with(length, rng, T::random)
}

/// Up to `length` distinct values from exactly `length` calls to `f`.
pub fn set_up_to_with<T, R, F>(length: usize, rng: &mut R, f: F) -> HashSet<T>
where
    T: Eq + Hash,
    R: RngCore + ?Sized,
    F: FnMut(&mut R) -> T,
{
    repeat_with(length, rng, f).into_iter().collect()
}

/// Up to [`DEFAULT_LENGTH`] distinct elements.
impl<T: Random + Eq + Hash> Random for HashSet<T> {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        set_up_to(DEFAULT_LENGTH, rng)
    }
}

fn draw_bounds<T, R>(rng: &mut R) -> (T, T)
where
    T: Random + PartialOrd,
    R: RngCore + ?Sized,
{
    let lower = T::random(rng);
    let mut upper = T::random(rng);
    let mut attempts_count: u64 = 1;
    while upper <= lower {
        upper = T::random(rng);
        attempts_count += 1;
        debug_assert!(
            attempts_count < REJECTION_ATTEMPTS_WARNING_MAX,
            "No upper bound above the lower bound after {} attempts",
            attempts_count
        );
    }
    (lower, upper)
}

/// Non-empty range: the upper bound is redrawn until it exceeds the lower.
impl<T: Random + PartialOrd> Random for Range<T> {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let (lower, upper) = draw_bounds(rng);
        lower..upper
    }
}

/// Range with the upper bound strictly above the lower.
impl<T: Random + PartialOrd> Random for RangeInclusive<T> {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let (lower, upper) = draw_bounds(rng);
        lower..=upper
    }
}

/// `length` independent key/value draws. Colliding keys keep the last
/// value, so the map may be smaller than `length`.
pub fn map_of<K, V, R>(length: usize, rng: &mut R) -> HashMap<K, V>
where
    K: Random + Eq + Hash,
    V: Random,
    R: RngCore + ?Sized,
{
    repeat_with(length, rng, |rng| (K::random(rng), V::random(rng)))
        .into_iter()
        .collect()
}

/// Like [`map_of`], with the number of draws taken from `lengths` first.
pub fn map_in<K, V, Rg, R>(lengths: Rg, rng: &mut R) -> HashMap<K, V>
where
    K: Random + Eq + Hash,
    V: Random,
    Rg: SampleRange<usize>,
    R: RngCore + ?Sized,
{
    let length = length_in(lengths, rng);
    map_of(length, rng)
}

/// [`DEFAULT_LENGTH`] key/value draws.
impl<K: Random + Eq + Hash, V: Random> Random for HashMap<K, V> {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        map_of(DEFAULT_LENGTH, rng)
    }
}

/// `length` draws of a key from `keys` and a value from `values`.
///
/// Either pool empty yields an empty map.
pub fn map_from_pools<K, V, R>(
    length: usize,
    keys: &[K],
    values: &[V],
    rng: &mut R,
) -> HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
    R: RngCore + ?Sized,
{
    if keys.is_empty() || values.is_empty() {
        return HashMap::new();
    }

    repeat_with(length, rng, |rng| {
        let key = keys[rng.gen_range(0..keys.len())].clone();
        let value = values[rng.gen_range(0..values.len())].clone();
        (key, value)
    })
    .into_iter()
    .collect()
}
