//! The "producible at random" capability.
//!
//! [`Random`] is implemented per type: given any generator, build a fully
//! formed instance. [`RandomEnumeration`] adds an explicit enumerable
//! domain, from which uniform, filtered, and excluded selection follow.

use std::cmp::Ordering;
use std::time::Duration;

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::{Rng, RngCore};

use crate::strings;

/// A type that can produce an instance of itself from a generator.
///
/// Implementations consume zero or more draws and never retain the
/// generator past the call.
pub trait Random: Sized {
    /// Produce a random instance.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}

/// A [`Random`] type with an explicit, enumerable domain.
///
/// Implementors usually write `Random::random` as `Self::pick(rng)` so the
/// default selection is a uniform pick from the domain.
pub trait RandomEnumeration: Random {
    /// All values of the type. Variants carrying data draw their payload.
    fn domain<R: RngCore + ?Sized>(rng: &mut R) -> Vec<Self>;

    /// Uniform pick from [`RandomEnumeration::domain`].
    ///
    /// # Panics
    ///
    /// Panics if the domain is empty.
    fn pick<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut domain = Self::domain(rng);
        debug_assert!(!domain.is_empty(), "Enumeration domain must not be empty");

        let index = rng.gen_range(0..domain.len());
        domain.swap_remove(index)
    }

    /// Domain values satisfying `predicate`.
    fn domain_where<P, R>(predicate: P, rng: &mut R) -> Vec<Self>
    where
        P: FnMut(&Self) -> bool,
        R: RngCore + ?Sized,
    {
        Self::domain(rng).into_iter().filter(predicate).collect()
    }

    /// Uniform pick among values satisfying `predicate`.
    fn random_where<P, R>(predicate: P, rng: &mut R) -> Option<Self>
    where
        P: FnMut(&Self) -> bool,
        R: RngCore + ?Sized,
    {
        let candidates = Self::domain_where(predicate, rng);
        pick_owned(candidates, rng)
    }

    /// Domain values not satisfying `predicate`.
    fn domain_except<P, R>(mut predicate: P, rng: &mut R) -> Vec<Self>
    where
        P: FnMut(&Self) -> bool,
        R: RngCore + ?Sized,
    {
        Self::domain_where(|value| !predicate(value), rng)
    }

    /// Uniform pick among values not satisfying `predicate`.
    fn random_except<P, R>(predicate: P, rng: &mut R) -> Option<Self>
    where
        P: FnMut(&Self) -> bool,
        R: RngCore + ?Sized,
    {
        let candidates = Self::domain_except(predicate, rng);
        pick_owned(candidates, rng)
    }

    /// Uniform pick among values equal to `item`.
    fn random_equal_to<R: RngCore + ?Sized>(item: &Self, rng: &mut R) -> Option<Self>
    where
        Self: PartialEq,
    {
        Self::random_where(|value| value == item, rng)
    }

    /// Uniform pick among values different from `item`.
    fn random_other_than<R: RngCore + ?Sized>(item: &Self, rng: &mut R) -> Option<Self>
    where
        Self: PartialEq,
    {
        Self::random_except(|value| value == item, rng)
    }
}

/// Remove and return a uniformly chosen element, `None` when empty.
pub fn pick_owned<T, R: RngCore + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..items.len());
    Some(items.swap_remove(index))
}

/// Uniform value in a half-open (`a..b`) or closed (`a..=b`) range.
///
/// # Panics
///
/// Panics if the range is empty.
pub fn random_in<T, Rg, R>(range: Rg, rng: &mut R) -> T
where
    T: SampleUniform,
    Rg: SampleRange<T>,
    R: RngCore + ?Sized,
{
    rng.gen_range(range)
}

/// `None` or `Some(value)`, with equal probability.
pub fn random_optional<T, R: RngCore + ?Sized>(value: T, rng: &mut R) -> Option<T> {
    if rng.gen_range(0..2) == 0 {
        None
    } else {
        Some(value)
    }
}

/// Run one uniformly chosen action. Does nothing when `actions` is empty.
pub fn random_action<R: RngCore + ?Sized>(actions: &mut [&mut dyn FnMut()], rng: &mut R) {
    if actions.is_empty() {
        return;
    }
    let index = rng.gen_range(0..actions.len());
    (actions[index])();
}

macro_rules! impl_random_standard {
    ($($t:ty),* $(,)?) => {
        $(
            impl Random for $t {
                fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
                    rng.gen()
                }
            }
        )*
    };
}

// Full range of each integer type.
impl_random_standard!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Uniform in `[0, 1]`, inclusive of both ends.
impl Random for f64 {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        rng.gen::<u64>() as f64 / u64::MAX as f64
    }
}

/// Uniform in `[0, 1]`, inclusive of both ends.
impl Random for f32 {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        f64::random(rng) as f32
    }
}

impl Random for () {
    fn random<R: RngCore + ?Sized>(_rng: &mut R) -> Self {}
}

impl Random for bool {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::pick(rng)
    }
}

impl RandomEnumeration for bool {
    fn domain<R: RngCore + ?Sized>(_rng: &mut R) -> Vec<Self> {
        vec![false, true]
    }
}

impl Random for Ordering {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::pick(rng)
    }
}

impl RandomEnumeration for Ordering {
    fn domain<R: RngCore + ?Sized>(_rng: &mut R) -> Vec<Self> {
        vec![Ordering::Less, Ordering::Equal, Ordering::Greater]
    }
}

/// Printable ASCII, `' '..='~'`.
impl Random for char {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        strings::char_in(strings::PRINTABLE, rng)
    }
}

/// Ten printable ASCII characters.
impl Random for String {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        (0..10).map(|_| char::random(rng)).collect()
    }
}

impl Random for Duration {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Duration::new(rng.gen(), rng.gen_range(0..1_000_000_000))
    }
}

impl<T: Random> Random for Option<T> {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::pick(rng)
    }
}

impl<T: Random> RandomEnumeration for Option<T> {
    fn domain<R: RngCore + ?Sized>(rng: &mut R) -> Vec<Self> {
        vec![None, Some(T::random(rng))]
    }
}

impl<T: Random, E: Random> Random for Result<T, E> {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::pick(rng)
    }
}

impl<T: Random, E: Random> RandomEnumeration for Result<T, E> {
    fn domain<R: RngCore + ?Sized>(rng: &mut R) -> Vec<Self> {
        vec![Ok(T::random(rng)), Err(E::random(rng))]
    }
}

macro_rules! impl_random_tuple {
    ($($name:ident),+) => {
        impl<$($name: Random),+> Random for ($($name,)+) {
            fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
                ($($name::random(rng),)+)
            }
        }
    };
}

impl_random_tuple!(A, B);
impl_random_tuple!(A, B, C);
impl_random_tuple!(A, B, C, D);
impl_random_tuple!(A, B, C, D, E);
