//! Adjacency heuristics
//!
//! Static tables of letters that rarely start a word, rarely end one, or rarely
//! follow a given letter. The search consults them before placing a letter so
//! implausible branches are cut before any vocabulary lookup.
//!
//! The rules are a heuristic: they may prune real words, but they never make an
//! emitted word wrong since the vocabulary stays the authority.

pub mod loader;
mod rules;

pub use loader::{RulesError, load_from_file, parse_rules};
pub use rules::AdjacencyRules;
