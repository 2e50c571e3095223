//! Letter multiset
//!
//! A `LetterBag` records how many of each letter `A..=Z` are still available.
//! The search engine takes letters out while descending and puts them back
//! when it backtracks, so a bag is always whole again once a search returns.

use super::{ALPHABET_LEN, checked_letter_index, index_letter, letter_index};
use std::fmt;

/// Available count for each of the 26 letters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterBag {
    counts: [u32; ALPHABET_LEN],
}

/// Error type for letters outside the supported alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterError {
    NonAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAlphabetic(ch) => write!(f, "'{ch}' is not a letter A-Z"),
        }
    }
}

impl std::error::Error for LetterError {}

impl LetterBag {
    /// Build a bag from a string of letters; repetition means multiplicity
    ///
    /// Letters are case-folded to uppercase.
    ///
    /// # Errors
    /// Returns `LetterError::NonAlphabetic` for the first character that is
    /// not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordgen::core::LetterBag;
    ///
    /// let bag = LetterBag::new("aporratl").unwrap();
    /// assert_eq!(bag.count(b'A'), 2);
    /// assert_eq!(bag.count(b'R'), 2);
    /// assert_eq!(bag.total(), 8);
    ///
    /// assert!(LetterBag::new("ab3").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, LetterError> {
        let mut bag = Self::default();
        for ch in text.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(LetterError::NonAlphabetic(ch));
            }
            bag.counts[letter_index(ch.to_ascii_uppercase() as u8)] += 1;
        }
        Ok(bag)
    }

    /// Every letter available `count` times
    #[must_use]
    pub const fn full_alphabet(count: u32) -> Self {
        Self {
            counts: [count; ALPHABET_LEN],
        }
    }

    /// Remaining count for a letter of either case; zero for non-letters
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u32 {
        match checked_letter_index(letter) {
            Some(i) => self.counts[i],
            None => 0,
        }
    }

    /// Whether at least one `letter` is left
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        self.count(letter) > 0
    }

    /// Total number of letters left
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Distinct letters with a positive count, in ascending order
    pub fn distinct(&self) -> impl Iterator<Item = u8> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, _)| index_letter(i))
    }

    /// Remove one `letter` from the bag
    ///
    /// Callers check `contains` first; the engine never takes an exhausted letter.
    #[inline]
    pub(crate) fn take(&mut self, letter: u8) {
        let slot = &mut self.counts[letter_index(letter)];
        debug_assert!(*slot > 0, "took exhausted letter {}", letter as char);
        *slot -= 1;
    }

    /// Return one `letter` to the bag
    #[inline]
    pub(crate) fn put_back(&mut self, letter: u8) {
        self.counts[letter_index(letter)] += 1;
    }
}

impl fmt::Display for LetterBag {
    /// Renders as `A(2)L(1)O(1)...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.distinct() {
            write!(f, "{}({})", letter as char, self.count(letter))?;
        }
        Ok(())
    }
}
