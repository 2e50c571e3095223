//! Word Generator
//!
//! Enumerates the vocabulary words that can be spelled from a multiset of letters,
//! or that fit a template of fixed letters and wildcards, by depth-first
//! backtracking with adjacency pruning and binary-search lookups.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgen::filter::AdjacencyRules;
//! use wordgen::search::{QueryBuilder, WordSearch};
//! use wordgen::vocabulary::Vocabulary;
//!
//! let vocabulary = Vocabulary::from_words(["portal", "patrol", "tea"]);
//! let rules = AdjacencyRules::english();
//! let search = WordSearch::new(&vocabulary, &rules);
//!
//! let query = QueryBuilder::new("aporratl").min_len(6).build().unwrap();
//! assert_eq!(search.collect(&query), ["PATROL", "PORTAL"]);
//! ```

// Core domain types
pub mod core;

// Adjacency heuristics
pub mod filter;

// Word lists
pub mod vocabulary;

// Backtracking search
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
