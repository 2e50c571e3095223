//! Word finding command
//!
//! Turns command-line style arguments into a query, runs the search and writes
//! each word to the output as soon as it is found.

use crate::core::MAX_WORD_LEN;
use crate::search::{Query, QueryBuilder, QueryError, SearchStats, WordSearch};
use rustc_hash::FxHashMap;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

/// Configuration for finding words
pub struct FindConfig {
    /// Letters to compose from, or a template over the full alphabet
    pub input: String,
    /// Minimum length when it starts with a digit, otherwise a template
    pub min_or_pattern: Option<String>,
    /// Maximum length, read from its leading digits like the minimum
    pub max: Option<String>,
    pub limit: Option<usize>,
    pub parallel: bool,
}

impl FindConfig {
    #[must_use]
    pub const fn new(input: String) -> Self {
        Self {
            input,
            min_or_pattern: None,
            max: None,
            limit: None,
            parallel: false,
        }
    }

    /// Validate the arguments into a query
    ///
    /// Input with any non-letter is a full-alphabet template and the remaining
    /// arguments are ignored. Otherwise a second argument starting with a digit is
    /// the minimum length (its leading digits, as `atoi` would read them) and
    /// anything else is a template.
    ///
    /// # Errors
    ///
    /// Returns a `QueryError` from query validation.
    pub fn query(&self) -> Result<Query, QueryError> {
        let builder = QueryBuilder::from_input(&self.input);
        if !self.input.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return builder.build();
        }

        let builder = match self.min_or_pattern.as_deref() {
            Some(arg) if arg.starts_with(|ch: char| ch.is_ascii_digit()) => {
                let builder = builder.min_len(leading_number(arg));
                match self.max.as_deref() {
                    Some(max) => builder.max_len(leading_number(max)),
                    None => builder.max_len(MAX_WORD_LEN),
                }
            }
            Some(pattern) => builder.template(pattern),
            None => builder,
        };
        builder.build()
    }
}

/// Summary of a finished search
pub struct FindSummary {
    pub found: usize,
    pub by_length: FxHashMap<usize, usize>,
    pub stats: SearchStats,
    pub duration: Duration,
}

/// Value of the leading decimal digits of `arg`, saturating on overflow
fn leading_number(arg: &str) -> usize {
    arg.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0usize, |acc, d| {
            acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
        })
}

/// Run the search for `query`, writing one word per line to `out`
///
/// Sequential searches write each word the moment it is found. Parallel searches
/// write the merged result once all lengths are done; the order is the same.
///
/// # Errors
///
/// Returns the first I/O error from `out`; the search stops at that point.
pub fn find_words<W: Write>(
    query: &Query,
    search: &WordSearch<'_>,
    config: &FindConfig,
    out: &mut W,
) -> io::Result<FindSummary> {
    let start = Instant::now();
    let limit = config.limit.unwrap_or(usize::MAX);
    let mut by_length: FxHashMap<usize, usize> = FxHashMap::default();
    let mut found = 0;

    let stats = if config.parallel {
        let (words, mut stats) = search.par_collect(query);
        for word in words.iter().take(limit) {
            writeln!(out, "{word}")?;
            *by_length.entry(word.len()).or_insert(0) += 1;
            found += 1;
        }
        stats.stopped_early = words.len() > limit;
        stats
    } else {
        let mut write_error = None;
        let stats = if limit == 0 {
            SearchStats::default()
        } else {
            search.run(query, |word| {
                if let Err(e) = writeln!(out, "{word}") {
                    write_error = Some(e);
                    return ControlFlow::Break(());
                }
                *by_length.entry(word.len()).or_insert(0) += 1;
                found += 1;
                if found >= limit {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
        };
        if let Some(e) = write_error {
            return Err(e);
        }
        stats
    };
    out.flush()?;

    Ok(FindSummary {
        found,
        by_length,
        stats,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MIN_WORD_LEN;
    use crate::filter::AdjacencyRules;
    use crate::search::Adjustment;
    use crate::vocabulary::Vocabulary;

    fn run(config: &FindConfig, vocab: &Vocabulary) -> (String, FindSummary) {
        let rules = AdjacencyRules::english();
        let search = WordSearch::new(vocab, &rules);
        let query = config.query().unwrap();
        let mut out = Vec::new();
        let summary = find_words(&query, &search, config, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn second_argument_as_minimum() {
        let mut config = FindConfig::new("aporratl".to_string());
        config.min_or_pattern = Some("4".to_string());
        config.max = Some("5".to_string());
        let query = config.query().unwrap();
        assert_eq!(query.lengths(), 4..=5);
    }

    #[test]
    fn minimum_reads_leading_digits() {
        let mut config = FindConfig::new("aporratl".to_string());
        config.min_or_pattern = Some("5x".to_string());
        assert_eq!(config.query().unwrap().lengths(), 5..=MAX_WORD_LEN);
    }

    #[test]
    fn huge_minimum_is_clamped() {
        let mut config = FindConfig::new("aporratl".to_string());
        config.min_or_pattern = Some("99999999999999999999999".to_string());
        let query = config.query().unwrap();
        assert_eq!(query.lengths(), MAX_WORD_LEN..=MAX_WORD_LEN);
        assert!(!query.adjustments().is_empty());
    }

    #[test]
    fn non_numeric_maximum_is_clamped() {
        let mut config = FindConfig::new("aporratl".to_string());
        config.min_or_pattern = Some("3".to_string());
        config.max = Some("x".to_string());
        let query = config.query().unwrap();
        assert_eq!(query.lengths(), 3..=3);
        assert_eq!(
            query.adjustments(),
            [
                Adjustment::MaxTooSmall {
                    requested: 0,
                    applied: MIN_WORD_LEN
                },
                Adjustment::MaxBelowMin {
                    requested: MIN_WORD_LEN,
                    applied: 3
                },
            ]
        );
    }

    #[test]
    fn second_argument_as_pattern() {
        let mut config = FindConfig::new("aporratl".to_string());
        config.min_or_pattern = Some("p...a.".to_string());
        config.max = Some("3".to_string());
        let query = config.query().unwrap();
        assert_eq!(query.lengths(), 6..=6);
        assert!(query.template().is_some());
    }

    #[test]
    fn pattern_input_ignores_other_arguments() {
        let mut config = FindConfig::new("b..k".to_string());
        config.min_or_pattern = Some("2".to_string());
        let query = config.query().unwrap();
        assert!(query.is_full_alphabet());
        assert_eq!(query.lengths(), 4..=4);
    }

    #[test]
    fn no_extra_arguments_uses_full_range() {
        let config = FindConfig::new("tea".to_string());
        assert_eq!(config.query().unwrap().lengths(), MIN_WORD_LEN..=MAX_WORD_LEN);
    }

    #[test]
    fn writes_one_word_per_line() {
        let vocab = Vocabulary::from_words(["ate", "eat", "eta", "tea"]);
        let config = FindConfig::new("tea".to_string());
        let (output, summary) = run(&config, &vocab);
        assert_eq!(output, "ATE\nEAT\nETA\nTEA\n");
        assert_eq!(summary.found, 4);
        assert_eq!(summary.by_length.get(&3), Some(&4));
        assert!(!summary.stats.stopped_early);
    }

    #[test]
    fn limit_truncates_output() {
        let vocab = Vocabulary::from_words(["ate", "eat", "eta", "tea"]);
        let mut config = FindConfig::new("tea".to_string());
        config.limit = Some(2);
        let (output, summary) = run(&config, &vocab);
        assert_eq!(output, "ATE\nEAT\n");
        assert_eq!(summary.found, 2);
        assert!(summary.stats.stopped_early);
    }

    #[test]
    fn zero_limit_writes_nothing() {
        let vocab = Vocabulary::from_words(["ate"]);
        let mut config = FindConfig::new("tea".to_string());
        config.limit = Some(0);
        let (output, summary) = run(&config, &vocab);
        assert!(output.is_empty());
        assert_eq!(summary.found, 0);
    }

    #[test]
    fn parallel_output_matches_sequential() {
        let vocab = Vocabulary::embedded();
        let mut config = FindConfig::new("painterly".to_string());
        let (sequential, seq_summary) = run(&config, &vocab);
        config.parallel = true;
        let (parallel, par_summary) = run(&config, &vocab);
        assert_eq!(parallel, sequential);
        assert_eq!(par_summary.found, seq_summary.found);
        assert_eq!(par_summary.by_length, seq_summary.by_length);
    }

    #[test]
    fn parallel_respects_limit() {
        let vocab = Vocabulary::embedded();
        let mut config = FindConfig::new("painterly".to_string());
        config.parallel = true;
        config.limit = Some(5);
        let (output, summary) = run(&config, &vocab);
        assert_eq!(output.lines().count(), 5);
        assert_eq!(summary.found, 5);
    }

    #[test]
    fn write_errors_stop_the_search() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let vocab = Vocabulary::from_words(["ate", "eat"]);
        let rules = AdjacencyRules::english();
        let search = WordSearch::new(&vocab, &rules);
        let config = FindConfig::new("tea".to_string());
        let query = config.query().unwrap();
        let err = find_words(&query, &search, &config, &mut Broken).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
