//! Vocabulary for word validation
//!
//! Provides the length-partitioned word index, the embedded default word list and
//! loaders for replacement lists supplied at startup.

mod embedded;
mod index;
pub mod loader;

pub use embedded::{PARTITIONS, WORD_COUNT};
pub use index::{PARTITION_COUNT, Vocabulary, VocabularyError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN};

    #[test]
    fn word_count_matches_partitions() {
        let total: usize = PARTITIONS.iter().map(|p| p.len()).sum();
        assert_eq!(total, WORD_COUNT);
    }

    #[test]
    fn partition_count_matches_bounds() {
        assert_eq!(PARTITIONS.len(), PARTITION_COUNT);
        assert_eq!(PARTITION_COUNT, MAX_WORD_LEN - MIN_WORD_LEN + 1);
    }

    #[test]
    fn partitions_hold_their_length() {
        for (i, partition) in PARTITIONS.iter().enumerate() {
            for &word in *partition {
                assert_eq!(
                    word.len(),
                    MIN_WORD_LEN + i,
                    "Word '{word}' in wrong partition"
                );
                assert!(
                    word.chars().all(|c| c.is_ascii_uppercase()),
                    "Word '{word}' contains non-uppercase chars"
                );
            }
        }
    }

    #[test]
    fn partitions_strictly_sorted() {
        for partition in PARTITIONS {
            assert!(partition.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn every_length_populated() {
        for partition in PARTITIONS {
            assert!(!partition.is_empty());
        }
    }
}
