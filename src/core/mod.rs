//! Core domain types for word generation
//!
//! This module contains the fundamental domain types with zero external dependencies:
//! the letter multiset, positional templates and the global word-length bounds.

mod letters;
mod template;

pub use letters::{LetterBag, LetterError};
pub use template::Template;

/// Shortest word the vocabulary holds and the search will look for
pub const MIN_WORD_LEN: usize = 2;

/// Longest word the vocabulary holds and the search will look for
pub const MAX_WORD_LEN: usize = 12;

/// Number of letters in the supported alphabet (`A..=Z`)
pub const ALPHABET_LEN: usize = 26;

/// Index of an uppercase ASCII letter in `0..26`
///
/// # Panics
/// Panics in debug mode if `letter` is not in `A..=Z`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_uppercase(), "letter must be A-Z");
    (letter - b'A') as usize
}

/// Index of an ASCII letter of either case in `0..26`, `None` for anything else
#[inline]
#[must_use]
pub const fn checked_letter_index(letter: u8) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some((upper - b'A') as usize)
    } else {
        None
    }
}

/// Uppercase ASCII letter for an index in `0..26`
#[inline]
#[must_use]
pub const fn index_letter(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_LEN);
    b'A' + index as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_index_round_trips_alphabet_ends() {
        assert_eq!(letter_index(b'A'), 0);
        assert_eq!(letter_index(b'Z'), 25);
        assert_eq!(index_letter(0), b'A');
        assert_eq!(index_letter(25), b'Z');
    }

    #[test]
    fn checked_index_folds_case_and_rejects_others() {
        assert_eq!(checked_letter_index(b'A'), Some(0));
        assert_eq!(checked_letter_index(b'z'), Some(25));
        assert_eq!(checked_letter_index(b'@'), None);
        assert_eq!(checked_letter_index(b'['), None);
        assert_eq!(checked_letter_index(b'1'), None);
        assert_eq!(checked_letter_index(0xC9), None);
    }

    #[test]
    fn bounds_are_ordered() {
        const { assert!(MIN_WORD_LEN <= MAX_WORD_LEN) };
    }
}
