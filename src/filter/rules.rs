//! Adjacency rule tables and queries

use crate::core::{ALPHABET_LEN, checked_letter_index, index_letter, letter_index};
use std::fmt;

/// Bitmask with bit `i` set for each letter `A + i` in `letters`
const fn mask(letters: &[u8]) -> u32 {
    let mut bits = 0;
    let mut i = 0;
    while i < letters.len() {
        bits |= 1 << (letters[i] - b'A');
        i += 1;
    }
    bits
}

/// The three "unlikely" relations used to prune the search
///
/// Each set is a 26-bit mask, so every query is a shift and an AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyRules {
    first: u32,
    last: u32,
    after: [u32; ALPHABET_LEN],
}

impl AdjacencyRules {
    /// Bigram rules tuned for English vocabulary
    pub const ENGLISH: Self = Self {
        first: mask(b"X"),
        last: mask(b"JQVZ"),
        after: [
            mask(b"AQ"),                        // A
            mask(b"CDFGHKMNPQWXZ"),             // B
            mask(b"BDFGJMNPVWXZ"),              // C
            mask(b"BCFKPQTXZ"),                 // D
            mask(b""),                          // E
            mask(b"BCDGHJKMNPQVWXZ"),           // F
            mask(b"BCDFJKPQVWXZ"),              // G
            mask(b"CDFGHJKPQVXZ"),              // H
            mask(b"JWY"),                       // I
            mask(b"BCDFGHIJKLMNPQRSTVWXYZ"),    // J
            mask(b"BCDFGHJKMPQRTUVWXZ"),        // K
            mask(b"HJQXZ"),                     // L
            mask(b"DGHJKQRTVWXZ"),              // M
            mask(b"X"),                         // N
            mask(b"QZ"),                        // O
            mask(b"BCDFGJKNQVWXZ"),             // P
            mask(b"ABCDEFGHIJKLMNOPQRSTVWXYZ"), // Q
            mask(b"JQXZ"),                      // R
            mask(b"GJVXZ"),                     // S
            mask(b"BDGJKQVX"),                  // T
            mask(b"HJQUVWZ"),                   // U
            mask(b"BCDFGHJKLMNPQRSTUVWXZ"),     // V
            mask(b"BCDFGJKMPQUVWXYZ"),          // W
            mask(b"BDFGJKLMNOQRSVWXYZ"),        // X
            mask(b"FGHJKQUVWXYZ"),              // Y
            mask(b"BCDFGHJKLMNPQRSTUVWXYZ"),    // Z
        ],
    };

    /// No rules at all; every placement is allowed
    pub const PERMISSIVE: Self = Self {
        first: 0,
        last: 0,
        after: [0; ALPHABET_LEN],
    };

    #[must_use]
    pub const fn english() -> Self {
        Self::ENGLISH
    }

    #[must_use]
    pub const fn permissive() -> Self {
        Self::PERMISSIVE
    }

    /// Whether `letter` rarely starts a word
    #[inline]
    #[must_use]
    pub const fn is_unlikely_first(&self, letter: u8) -> bool {
        self.first & bit(letter) != 0
    }

    /// Whether `letter` rarely ends a word
    #[inline]
    #[must_use]
    pub const fn is_unlikely_last(&self, letter: u8) -> bool {
        self.last & bit(letter) != 0
    }

    /// Whether `next` rarely follows `prev`
    #[inline]
    #[must_use]
    pub const fn is_unlikely_pair(&self, prev: u8, next: u8) -> bool {
        match checked_letter_index(prev) {
            Some(i) => self.after[i] & bit(next) != 0,
            None => false,
        }
    }

    /// Whether a whole word survives every rule when each position is a free choice
    ///
    /// # Examples
    /// ```
    /// use wordgen::filter::AdjacencyRules;
    ///
    /// let rules = AdjacencyRules::english();
    /// assert!(rules.admits(b"PORTAL"));
    /// assert!(!rules.admits(b"XYLEM")); // X rarely starts a word
    /// assert!(!rules.admits(b"QUIZ")); // Z rarely ends one
    /// ```
    #[must_use]
    pub fn admits(&self, word: &[u8]) -> bool {
        self.first_violation(word).is_none()
    }

    /// Position of the first letter a free-choice search would refuse to place
    #[must_use]
    pub fn first_violation(&self, word: &[u8]) -> Option<usize> {
        let last = word.len().checked_sub(1)?;
        (0..word.len()).find(|&pos| {
            let ch = word[pos];
            (pos == 0 && self.is_unlikely_first(ch))
                || (pos == last && self.is_unlikely_last(ch))
                || (pos > 0 && self.is_unlikely_pair(word[pos - 1], ch))
        })
    }

    pub(super) fn set_first(&mut self, letters: u32) {
        self.first = letters;
    }

    pub(super) fn set_last(&mut self, letters: u32) {
        self.last = letters;
    }

    pub(super) fn set_after(&mut self, prev: u8, letters: u32) {
        self.after[letter_index(prev)] = letters;
    }

    /// Number of (prev, next) pairs flagged as unlikely
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.after.iter().map(|m| m.count_ones()).sum()
    }
}

impl Default for AdjacencyRules {
    fn default() -> Self {
        Self::ENGLISH
    }
}

/// Mask bit for a letter of either case; non-letters match no rule
#[inline]
const fn bit(letter: u8) -> u32 {
    match checked_letter_index(letter) {
        Some(i) => 1 << i,
        None => 0,
    }
}

/// Letters of a mask in ascending order, `-` when empty
pub(super) fn mask_letters(bits: u32) -> String {
    if bits == 0 {
        return "-".to_string();
    }
    (0..ALPHABET_LEN)
        .filter(|&i| bits & (1 << i) != 0)
        .map(|i| char::from(index_letter(i)))
        .collect()
}

impl fmt::Display for AdjacencyRules {
    /// Renders in the same line format `parse_rules` reads
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "first: {}", mask_letters(self.first))?;
        writeln!(f, "last: {}", mask_letters(self.last))?;
        for (i, &after) in self.after.iter().enumerate() {
            writeln!(f, "{}: {}", char::from(index_letter(i)), mask_letters(after))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_first_and_last() {
        let rules = AdjacencyRules::english();
        assert!(rules.is_unlikely_first(b'X'));
        assert!(!rules.is_unlikely_first(b'A'));
        for letter in *b"JQVZ" {
            assert!(rules.is_unlikely_last(letter));
        }
        assert!(!rules.is_unlikely_last(b'E'));
        assert!(!rules.is_unlikely_last(b'X'));
    }

    #[test]
    fn english_pairs() {
        let rules = AdjacencyRules::english();
        assert!(rules.is_unlikely_pair(b'Q', b'A'));
        assert!(!rules.is_unlikely_pair(b'Q', b'U'));
        assert!(rules.is_unlikely_pair(b'A', b'A'));
        assert!(!rules.is_unlikely_pair(b'A', b'B'));
        assert!(rules.is_unlikely_pair(b'X', b'Y'));
        assert!(rules.is_unlikely_pair(b'Y', b'X'));
        // Pairs are ordered
        assert!(rules.is_unlikely_pair(b'L', b'H'));
        assert!(!rules.is_unlikely_pair(b'H', b'L'));
    }

    #[test]
    fn lookups_fold_case_and_ignore_non_letters() {
        let rules = AdjacencyRules::english();
        assert!(rules.is_unlikely_first(b'x'));
        assert!(rules.is_unlikely_last(b'z'));
        assert!(rules.is_unlikely_pair(b'q', b'a'));
        for byte in [b' ', b'.', b'1', b'[', 0x80, 0xFF] {
            assert!(!rules.is_unlikely_first(byte));
            assert!(!rules.is_unlikely_last(byte));
            assert!(!rules.is_unlikely_pair(byte, b'A'));
            assert!(!rules.is_unlikely_pair(b'Q', byte));
        }
    }

    #[test]
    fn e_accepts_every_successor() {
        let rules = AdjacencyRules::english();
        for next in b'A'..=b'Z' {
            assert!(!rules.is_unlikely_pair(b'E', next));
        }
    }

    #[test]
    fn permissive_allows_everything() {
        let rules = AdjacencyRules::permissive();
        for a in b'A'..=b'Z' {
            assert!(!rules.is_unlikely_first(a));
            assert!(!rules.is_unlikely_last(a));
            for b in b'A'..=b'Z' {
                assert!(!rules.is_unlikely_pair(a, b));
            }
        }
        assert_eq!(rules.pair_count(), 0);
    }

    #[test]
    fn admits_reports_first_violation() {
        let rules = AdjacencyRules::english();
        assert_eq!(rules.first_violation(b"TEA"), None);
        assert_eq!(rules.first_violation(b"XENON"), Some(0));
        assert_eq!(rules.first_violation(b"AQUA"), Some(1));
        assert_eq!(rules.first_violation(b"JAZZ"), Some(3));
        assert_eq!(rules.first_violation(b""), None);
    }

    #[test]
    fn mask_letters_renders_sorted() {
        assert_eq!(mask_letters(mask(b"ZAQ")), "AQZ");
        assert_eq!(mask_letters(0), "-");
    }

    #[test]
    fn default_is_english() {
        assert_eq!(AdjacencyRules::default(), AdjacencyRules::ENGLISH);
    }
}
