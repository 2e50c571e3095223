//! Benchmark command
//!
//! Times the search over random letter racks drawn from the vocabulary.

use crate::search::{QueryBuilder, SearchStats, WordSearch};
use crate::vocabulary::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub seed: u64,
    /// Lengths of the vocabulary words racks are drawn from
    pub rack_lengths: RangeInclusive<usize>,
    pub parallel: bool,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 42,
            rack_lengths: 5..=8,
            parallel: false,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_racks: usize,
    pub total_words: usize,
    pub min_words: usize,
    pub max_words: usize,
    /// Words found, keyed by word length
    pub distribution: FxHashMap<usize, usize>,
    pub best_rack: Option<(String, usize)>,
    pub stats: SearchStats,
    pub duration: Duration,
    pub racks_per_second: f64,
}

/// Draw `count` racks by shuffling the letters of random vocabulary words
///
/// The same seed always yields the same racks for the same vocabulary. Returns
/// fewer racks only when no word has a length in `lengths`.
#[must_use]
pub fn random_racks(
    vocabulary: &Vocabulary,
    count: usize,
    seed: u64,
    lengths: RangeInclusive<usize>,
) -> Vec<String> {
    let usable: Vec<usize> = lengths
        .filter(|&len| vocabulary.count_of_length(len) > 0)
        .collect();
    if usable.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut racks = Vec::with_capacity(count);
    while racks.len() < count {
        let len = usable[rng.random_range(0..usable.len())];
        let Some(word) = vocabulary
            .partition(len)
            .and_then(|words| words.choose(&mut rng))
        else {
            continue;
        };
        let mut letters = word.as_bytes().to_vec();
        letters.shuffle(&mut rng);
        racks.push(letters.into_iter().map(char::from).collect());
    }
    racks
}

/// Run the search over every rack and gather timing and counts
pub fn run_benchmark(
    search: &WordSearch<'_>,
    racks: &[String],
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(racks.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let run_rack = |rack: &String| {
        let outcome = QueryBuilder::new(rack.as_str())
            .build()
            .map(|query| {
                let mut lengths = Vec::new();
                let stats = search.run(&query, |word| {
                    lengths.push(word.len());
                    std::ops::ControlFlow::Continue(())
                });
                (lengths, stats)
            })
            .unwrap_or_default();
        pb.inc(1);
        pb.set_message(rack.clone());
        outcome
    };
    let outcomes: Vec<(Vec<usize>, SearchStats)> = if config.parallel {
        racks.par_iter().map(run_rack).collect()
    } else {
        racks.iter().map(run_rack).collect()
    };
    let duration = start.elapsed();
    pb.finish_and_clear();

    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut best_rack: Option<(String, usize)> = None;
    let mut stats = SearchStats::default();

    for (rack, (lengths, rack_stats)) in racks.iter().zip(outcomes) {
        let found = lengths.len();
        total_words += found;
        min_words = min_words.min(found);
        max_words = max_words.max(found);
        for len in lengths {
            *distribution.entry(len).or_insert(0) += 1;
        }
        if best_rack.as_ref().is_none_or(|(_, best)| found > *best) {
            best_rack = Some((rack.clone(), found));
        }
        stats += rack_stats;
    }

    let total_racks = racks.len();
    BenchmarkResult {
        total_racks,
        total_words,
        min_words: if total_racks == 0 { 0 } else { min_words },
        max_words,
        distribution,
        best_rack,
        stats,
        duration,
        racks_per_second: total_racks as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
