//! Backtracking word search
//!
//! Words are built one position at a time. At each position the engine either
//! places the template's fixed letter or tries every available letter in
//! alphabetical order, skipping letters the adjacency rules flag. Only complete
//! candidates are looked up in the vocabulary.
//!
//! The free-choice loop runs over *distinct* letters, so two descent paths always
//! differ in some placed letter. Each word is therefore emitted at most once per
//! length even when the bag holds repeated letters.

use super::query::Query;
use super::stats::SearchStats;
use crate::core::{LetterBag, MAX_WORD_LEN, Template};
use crate::filter::AdjacencyRules;
use crate::vocabulary::Vocabulary;
use rayon::prelude::*;
use std::ops::ControlFlow;

/// Word search over a vocabulary with adjacency pruning
///
/// Holds only shared references, so one `WordSearch` can serve many queries and
/// many threads.
#[derive(Debug, Clone, Copy)]
pub struct WordSearch<'a> {
    vocabulary: &'a Vocabulary,
    rules: &'a AdjacencyRules,
}

impl<'a> WordSearch<'a> {
    /// Create a search over the given vocabulary and rules
    #[must_use]
    pub const fn new(vocabulary: &'a Vocabulary, rules: &'a AdjacencyRules) -> Self {
        Self { vocabulary, rules }
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    #[must_use]
    pub const fn rules(&self) -> &'a AdjacencyRules {
        self.rules
    }

    /// Run the search, handing each word to `emit` as soon as it is found
    ///
    /// Lengths are searched in ascending order and words within a length come out
    /// alphabetically. Returning `ControlFlow::Break` from `emit` stops the whole
    /// search; the returned stats then have `stopped_early` set.
    pub fn run<F>(&self, query: &Query, mut emit: F) -> SearchStats
    where
        F: FnMut(&str) -> ControlFlow<()>,
    {
        let mut bag = query.bag().clone();
        let mut stats = SearchStats::default();

        for len in query.lengths() {
            let flow = self.search_length(query, len, &mut bag, &mut emit, &mut stats);
            if flow.is_break() {
                stats.stopped_early = true;
                break;
            }
        }

        debug_assert_eq!(&bag, query.bag(), "letter bag not restored");
        stats
    }

    /// All matching words, in emission order
    ///
    /// # Examples
    /// ```
    /// use wordgen::filter::AdjacencyRules;
    /// use wordgen::search::{QueryBuilder, WordSearch};
    /// use wordgen::vocabulary::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_words(["ate", "eat", "eta", "tea", "tee"]);
    /// let rules = AdjacencyRules::english();
    /// let search = WordSearch::new(&vocab, &rules);
    ///
    /// let query = QueryBuilder::new("tea").build().unwrap();
    /// assert_eq!(search.collect(&query), ["ATE", "EAT", "ETA", "TEA"]);
    /// ```
    #[must_use]
    pub fn collect(&self, query: &Query) -> Vec<String> {
        let mut words = Vec::new();
        self.run(query, |word| {
            words.push(word.to_string());
            ControlFlow::Continue(())
        });
        words
    }

    /// The first `limit` matching words
    #[must_use]
    pub fn collect_limited(&self, query: &Query, limit: usize) -> Vec<String> {
        let mut words = Vec::with_capacity(limit.min(64));
        if limit == 0 {
            return words;
        }
        self.run(query, |word| {
            words.push(word.to_string());
            if words.len() >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        words
    }

    /// Search every length on its own rayon task
    ///
    /// Each task owns a copy of the letter bag and its own buffer. Results are
    /// concatenated in length order, so the output equals `collect`.
    #[must_use]
    pub fn par_collect(&self, query: &Query) -> (Vec<String>, SearchStats) {
        let per_length: Vec<(Vec<String>, SearchStats)> = query
            .lengths()
            .into_par_iter()
            .map(|len| {
                let mut bag = query.bag().clone();
                let mut words = Vec::new();
                let mut stats = SearchStats::default();
                let flow = self.search_length(
                    query,
                    len,
                    &mut bag,
                    &mut |word: &str| {
                        words.push(word.to_string());
                        ControlFlow::Continue(())
                    },
                    &mut stats,
                );
                debug_assert!(flow.is_continue());
                (words, stats)
            })
            .collect();

        let mut stats = SearchStats::default();
        let mut words = Vec::new();
        for (length_words, length_stats) in per_length {
            words.extend(length_words);
            stats += length_stats;
        }
        (words, stats)
    }

    /// Enumerate words of exactly `len` letters drawn from `bag`
    ///
    /// `bag` is borrowed mutably for the descent and is back to its original
    /// counts when this returns, including after a `Break`. A `len` outside
    /// `query.lengths()` finds nothing.
    pub fn search_length<F>(
        &self,
        query: &Query,
        len: usize,
        bag: &mut LetterBag,
        emit: &mut F,
        stats: &mut SearchStats,
    ) -> ControlFlow<()>
    where
        F: FnMut(&str) -> ControlFlow<()>,
    {
        if !query.lengths().contains(&len) {
            return ControlFlow::Continue(());
        }
        let letters: Vec<u8> = bag.distinct().collect();
        let mut walk = Walk {
            vocabulary: self.vocabulary,
            rules: self.rules,
            template: query.template(),
            letters: &letters,
            bag,
            buffer: String::with_capacity(MAX_WORD_LEN),
            len,
            emit,
            stats,
        };
        walk.step(0)
    }
}

/// State of one descent for a single target length
struct Walk<'s, 'q, F> {
    vocabulary: &'s Vocabulary,
    rules: &'s AdjacencyRules,
    template: Option<&'q Template>,
    /// Distinct letters of the bag at the start, ascending
    letters: &'q [u8],
    bag: &'q mut LetterBag,
    buffer: String,
    len: usize,
    emit: &'q mut F,
    stats: &'q mut SearchStats,
}

impl<F> Walk<'_, '_, F>
where
    F: FnMut(&str) -> ControlFlow<()>,
{
    fn step(&mut self, pos: usize) -> ControlFlow<()> {
        if pos == self.len {
            self.stats.candidates += 1;
            if self.vocabulary.contains(&self.buffer) {
                self.stats.accepted += 1;
                return (self.emit)(&self.buffer);
            }
            return ControlFlow::Continue(());
        }

        if let Some(fixed) = self.template.and_then(|t| t.slot(pos)) {
            if !self.bag.contains(fixed) {
                self.stats.dead_ends += 1;
                return ControlFlow::Continue(());
            }
            return self.place(fixed, pos);
        }

        let letters = self.letters;
        for &next in letters {
            if !self.bag.contains(next) {
                continue;
            }
            if self.is_pruned(pos, next) {
                self.stats.pruned += 1;
                continue;
            }
            if self.place(next, pos).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn is_pruned(&self, pos: usize, next: u8) -> bool {
        (pos == 0 && self.rules.is_unlikely_first(next))
            || (pos == self.len - 1 && self.rules.is_unlikely_last(next))
            || (pos > 0 && self.rules.is_unlikely_pair(self.buffer.as_bytes()[pos - 1], next))
    }

    /// Place `letter` at `pos`, descend, then undo
    fn place(&mut self, letter: u8, pos: usize) -> ControlFlow<()> {
        self.bag.take(letter);
        self.buffer.push(char::from(letter));
        let flow = self.step(pos + 1);
        self.buffer.pop();
        self.bag.put_back(letter);
        flow
    }
}
