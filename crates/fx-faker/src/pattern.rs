//! Pattern substitution for numeric and alphabetic tokens.
//!
//! `#` stands for a digit and `?` for a lowercase letter:
//!
//! ```rust
//! use fx_faker::pattern::{bothify, numerify};
//! use fx_rng::SeededRng;
//!
//! let mut rng = SeededRng::new(42);
//! let phone = numerify("(###) ###-####", &mut rng);
//! let plate = bothify("??-###", &mut rng);
//! assert_eq!(phone.len(), 14);
//! assert_eq!(plate.len(), 6);
//! ```

use rand::{Rng, RngCore};

use fx_core::strings::{LOWERCASE_LETTERS, NUMBERS};

pub const DIGIT_PLACEHOLDER: char = '#';
pub const LETTER_PLACEHOLDER: char = '?';

/// Replace each `#` with a random digit.
///
/// The first replaced position never gets `9`; later positions draw from
/// all ten digits. Every other character passes through unchanged.
pub fn numerify<R: RngCore + ?Sized>(template: &str, rng: &mut R) -> String {
    let digits = NUMBERS.as_bytes();
    let mut is_first = true;
    template
        .chars()
        .map(|c| {
            if c != DIGIT_PLACEHOLDER {
                return c;
            }
            let upper = if is_first { digits.len() - 1 } else { digits.len() };
            is_first = false;
            char::from(digits[rng.gen_range(0..upper)])
        })
        .collect()
}

/// Replace each `?` with a random lowercase letter.
pub fn letterify<R: RngCore + ?Sized>(template: &str, rng: &mut R) -> String {
    let letters = LOWERCASE_LETTERS.as_bytes();
    template
        .chars()
        .map(|c| {
            if c == LETTER_PLACEHOLDER {
                char::from(letters[rng.gen_range(0..letters.len())])
            } else {
                c
            }
        })
        .collect()
}

/// [`numerify`], then [`letterify`].
pub fn bothify<R: RngCore + ?Sized>(template: &str, rng: &mut R) -> String {
    let numerified = numerify(template, rng);
    letterify(&numerified, rng)
}

/// Keep only `[A-Za-z0-9_]`.
#[must_use]
pub fn alpha_numerify(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
