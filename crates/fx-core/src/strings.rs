//! Strings and characters drawn from alphabets and code-point ranges.

use std::ops::RangeInclusive;

use rand::distributions::uniform::SampleRange;
use rand::{Rng, RngCore};

use crate::collections::length_in;

pub const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const ALPHANUMERIC: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Printable ASCII.
pub const PRINTABLE: RangeInclusive<char> = ' '..='~';

/// Uniform character from a half-open or closed range of code points.
///
/// Surrogate code points are never produced.
///
/// # Panics
///
/// Panics if the range is empty.
pub fn char_in<Rg, R>(range: Rg, rng: &mut R) -> char
where
    Rg: SampleRange<char>,
    R: RngCore + ?Sized,
{
    rng.gen_range(range)
}

/// `length` characters drawn with replacement from `alphabet`.
///
/// An empty alphabet yields an empty string.
pub fn string_of_length<R: RngCore + ?Sized>(length: usize, alphabet: &str, rng: &mut R) -> String {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

/// Like [`string_of_length`], with the length drawn from `lengths`.
pub fn string_in<Rg, R>(lengths: Rg, alphabet: &str, rng: &mut R) -> String
where
    Rg: SampleRange<usize>,
    R: RngCore + ?Sized,
{
    let length = length_in(lengths, rng);
    string_of_length(length, alphabet, rng)
}
