//! Search counters

use std::ops::AddAssign;

/// What one search did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Complete candidates looked up in the vocabulary
    pub candidates: u64,
    /// Candidates found in the vocabulary and emitted
    pub accepted: u64,
    /// Letters skipped because the adjacency rules flagged them
    pub pruned: u64,
    /// Template slots whose fixed letter had run out
    pub dead_ends: u64,
    /// Whether the consumer asked the search to stop
    pub stopped_early: bool,
}

impl SearchStats {
    /// Share of vocabulary lookups that found a word
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.accepted as f64 / self.candidates as f64
        }
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.candidates += other.candidates;
        self.accepted += other.accepted;
        self.pruned += other.pruned;
        self.dead_ends += other.dead_ends;
        self.stopped_early |= other.stopped_early;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assign_sums_counters() {
        let mut total = SearchStats {
            candidates: 10,
            accepted: 2,
            pruned: 5,
            dead_ends: 1,
            stopped_early: false,
        };
        total += SearchStats {
            candidates: 4,
            accepted: 1,
            pruned: 0,
            dead_ends: 0,
            stopped_early: true,
        };
        assert_eq!(total.candidates, 14);
        assert_eq!(total.accepted, 3);
        assert_eq!(total.pruned, 5);
        assert_eq!(total.dead_ends, 1);
        assert!(total.stopped_early);
    }

    #[test]
    fn hit_rate_handles_zero() {
        assert!(SearchStats::default().hit_rate().abs() < f64::EPSILON);
        let stats = SearchStats {
            candidates: 4,
            accepted: 1,
            ..SearchStats::default()
        };
        assert!((stats.hit_rate() - 0.25).abs() < f64::EPSILON);
    }
}
