//! Positional word templates
//!
//! A template such as `P...A.` fixes some positions of a word and leaves the
//! rest open. Any non-letter character is a wildcard.

use std::fmt;
use std::str::FromStr;

/// An ordered sequence of fixed letters and wildcards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    slots: Vec<Option<u8>>,
}

impl Template {
    /// Parse a template; letters are uppercased, everything else is a wildcard
    ///
    /// Length is not checked here; see `QueryBuilder` for validation.
    ///
    /// # Examples
    /// ```
    /// use wordgen::core::Template;
    ///
    /// let template = Template::parse("p...a_");
    /// assert_eq!(template.len(), 6);
    /// assert_eq!(template.slot(0), Some(b'P'));
    /// assert_eq!(template.slot(1), None);
    /// assert_eq!(template.to_string(), "P...A.");
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let slots = text
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() {
                    Some(ch.to_ascii_uppercase() as u8)
                } else {
                    None
                }
            })
            .collect();
        Self { slots }
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The fixed letter at `pos`, or `None` for a wildcard or past the end
    #[inline]
    #[must_use]
    pub fn slot(&self, pos: usize) -> Option<u8> {
        self.slots.get(pos).copied().flatten()
    }

    /// Fixed letters in position order
    pub fn fixed_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.slots.iter().filter_map(|&slot| slot)
    }

    /// Whether every position consists of wildcards
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Whether `word` has this template's length and agrees on every fixed slot
    #[must_use]
    pub fn matches(&self, word: &[u8]) -> bool {
        word.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(word)
                .all(|(slot, &ch)| slot.is_none_or(|fixed| fixed == ch))
    }
}

impl FromStr for Template {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            let ch = slot.map_or('.', char::from);
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
