//! Length-partitioned vocabulary index
//!
//! Words are grouped by length and each group is kept in strict ascending order,
//! so membership is a binary search over one partition.

use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN};
use std::fmt;

/// Number of length partitions (`MIN_WORD_LEN..=MAX_WORD_LEN`)
pub const PARTITION_COUNT: usize = MAX_WORD_LEN - MIN_WORD_LEN + 1;

/// Immutable, sorted word list partitioned by length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    partitions: Vec<Vec<Box<str>>>,
}

/// Error type for partitions that break the index invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    PartitionCount { expected: usize, found: usize },
    WrongLength { word: String, expected: usize },
    InvalidCharacters(String),
    Unsorted { previous: String, word: String },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartitionCount { expected, found } => {
                write!(f, "Expected {expected} length partitions, got {found}")
            }
            Self::WrongLength { word, expected } => {
                write!(f, "Word '{word}' filed under length {expected}")
            }
            Self::InvalidCharacters(word) => {
                write!(f, "Word '{word}' must contain only letters A-Z")
            }
            Self::Unsorted { previous, word } => write!(
                f,
                "Word '{word}' does not sort strictly after '{previous}'"
            ),
        }
    }
}

impl std::error::Error for VocabularyError {}

impl Vocabulary {
    /// Build from partitions that are already sorted and normalized
    ///
    /// Partition `i` holds the words of length `MIN_WORD_LEN + i`.
    ///
    /// # Errors
    ///
    /// Returns a `VocabularyError` if:
    /// - There are not exactly `PARTITION_COUNT` partitions
    /// - A word has the wrong length for its partition
    /// - A word contains anything but uppercase `A-Z`
    /// - A partition is not in strict ascending order
    pub fn from_sorted_partitions<P, W>(partitions: P) -> Result<Self, VocabularyError>
    where
        P: IntoIterator,
        P::Item: IntoIterator<Item = W>,
        W: Into<Box<str>>,
    {
        let partitions: Vec<Vec<Box<str>>> = partitions
            .into_iter()
            .map(|p| p.into_iter().map(Into::into).collect())
            .collect();

        if partitions.len() != PARTITION_COUNT {
            return Err(VocabularyError::PartitionCount {
                expected: PARTITION_COUNT,
                found: partitions.len(),
            });
        }

        for (i, partition) in partitions.iter().enumerate() {
            let expected = MIN_WORD_LEN + i;
            for (j, word) in partition.iter().enumerate() {
                if word.len() != expected {
                    return Err(VocabularyError::WrongLength {
                        word: word.to_string(),
                        expected,
                    });
                }
                if !word.bytes().all(|b| b.is_ascii_uppercase()) {
                    return Err(VocabularyError::InvalidCharacters(word.to_string()));
                }
                if j > 0 && partition[j - 1] >= *word {
                    return Err(VocabularyError::Unsorted {
                        previous: partition[j - 1].to_string(),
                        word: word.to_string(),
                    });
                }
            }
        }

        Ok(Self { partitions })
    }

    /// Build from arbitrary words
    ///
    /// Words are uppercased; entries outside the length bounds or containing
    /// non-letters are skipped; partitions are sorted and deduplicated.
    ///
    /// # Examples
    /// ```
    /// use wordgen::vocabulary::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_words(["tea", "eat", "a", "x-ray", "Tea"]);
    /// assert_eq!(vocab.len(), 2);
    /// assert!(vocab.contains("TEA"));
    /// assert!(!vocab.contains("tea")); // lookups are exact, callers normalize
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut partitions: Vec<Vec<Box<str>>> = vec![Vec::new(); PARTITION_COUNT];
        for word in words {
            let word = word.as_ref().trim().to_ascii_uppercase();
            if (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
                && word.bytes().all(|b| b.is_ascii_uppercase())
            {
                partitions[word.len() - MIN_WORD_LEN].push(word.into_boxed_str());
            }
        }
        for partition in &mut partitions {
            partition.sort_unstable();
            partition.dedup();
        }
        Self { partitions }
    }

    /// The vocabulary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let partitions = super::PARTITIONS
            .iter()
            .map(|p| p.iter().map(|&w| Box::from(w)).collect())
            .collect();
        Self { partitions }
    }

    /// Whether `word` is in the vocabulary
    ///
    /// Selects the partition for `word.len()` and binary searches it. Lookups are
    /// exact: the word must already be uppercase. Lengths outside
    /// `MIN_WORD_LEN..=MAX_WORD_LEN` are never present.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: impl AsRef<[u8]>) -> bool {
        let word = word.as_ref();
        self.partition(word.len())
            .is_some_and(|p| p.binary_search_by(|entry| entry.as_bytes().cmp(word)).is_ok())
    }

    /// The sorted words of length `len`, or `None` outside the length bounds
    #[must_use]
    pub fn partition(&self, len: usize) -> Option<&[Box<str>]> {
        len.checked_sub(MIN_WORD_LEN)
            .and_then(|i| self.partitions.get(i))
            .map(Vec::as_slice)
    }

    /// Number of words of length `len`
    #[must_use]
    pub fn count_of_length(&self, len: usize) -> usize {
        self.partition(len).map_or(0, <[Box<str>]>::len)
    }

    /// All words, shortest first, alphabetical within a length
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.partitions.iter().flatten().map(AsRef::as_ref)
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.partitions.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(Vec::is_empty)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_words(iter)
    }
}
