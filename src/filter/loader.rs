//! Adjacency rule loading
//!
//! Rules are read from a small line-oriented text format so the heuristic can be
//! swapped without rebuilding:
//!
//! ```text
//! # comments and blank lines are ignored
//! first: X
//! last: JQVZ
//! A: AQ
//! E: -
//! ```
//!
//! `first` and `last` set the unlikely first and last letters; a single-letter key
//! sets the unlikely successors of that letter. `-` stands for the empty set.
//! Keys not mentioned are empty.

use super::AdjacencyRules;
use crate::core::letter_index;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for malformed rule files
#[derive(Debug)]
pub enum RulesError {
    Io(io::Error),
    MissingSeparator { line: usize },
    UnknownKey { line: usize, key: String },
    InvalidLetter { line: usize, ch: char },
    DuplicateKey { line: usize, key: String },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Cannot read rules: {e}"),
            Self::MissingSeparator { line } => {
                write!(f, "Line {line}: expected '<key>: <letters>'")
            }
            Self::UnknownKey { line, key } => write!(
                f,
                "Line {line}: unknown key '{key}' (expected 'first', 'last' or a letter A-Z)"
            ),
            Self::InvalidLetter { line, ch } => {
                write!(f, "Line {line}: '{ch}' is not a letter A-Z")
            }
            Self::DuplicateKey { line, key } => {
                write!(f, "Line {line}: key '{key}' already defined")
            }
        }
    }
}

impl std::error::Error for RulesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RulesError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Which relation a line configures
#[derive(Clone, Copy, PartialEq, Eq)]
enum Key {
    First,
    Last,
    After(u8),
}

impl Key {
    fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("first") {
            return Some(Self::First);
        }
        if raw.eq_ignore_ascii_case("last") {
            return Some(Self::Last);
        }
        match raw.as_bytes() {
            &[ch] if ch.is_ascii_alphabetic() => Some(Self::After(ch.to_ascii_uppercase())),
            _ => None,
        }
    }

    /// Slot in the "seen" table: 0 = first, 1 = last, 2.. = letters
    fn slot(self) -> usize {
        match self {
            Self::First => 0,
            Self::Last => 1,
            Self::After(ch) => 2 + letter_index(ch),
        }
    }
}

fn parse_letters(value: &str, line: usize) -> Result<u32, RulesError> {
    let mut bits = 0;
    for ch in value.chars().filter(|ch| !ch.is_whitespace() && *ch != '-') {
        if !ch.is_ascii_alphabetic() {
            return Err(RulesError::InvalidLetter { line, ch });
        }
        bits |= 1 << letter_index(ch.to_ascii_uppercase() as u8);
    }
    Ok(bits)
}

/// Parse rules from text, starting from an empty rule set
///
/// # Errors
///
/// Returns a `RulesError` naming the 1-based line of the first malformed entry.
///
/// # Examples
/// ```
/// use wordgen::filter::parse_rules;
///
/// let rules = parse_rules("first: X\nQ: ABC\n").unwrap();
/// assert!(rules.is_unlikely_first(b'X'));
/// assert!(rules.is_unlikely_pair(b'Q', b'B'));
/// assert!(!rules.is_unlikely_last(b'Z'));
/// ```
pub fn parse_rules(text: &str) -> Result<AdjacencyRules, RulesError> {
    let mut rules = AdjacencyRules::permissive();
    let mut seen = [false; 2 + crate::core::ALPHABET_LEN];

    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw_line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let (raw_key, value) = content
            .split_once(':')
            .ok_or(RulesError::MissingSeparator { line })?;
        let raw_key = raw_key.trim();
        let key = Key::parse(raw_key).ok_or_else(|| RulesError::UnknownKey {
            line,
            key: raw_key.to_string(),
        })?;

        if std::mem::replace(&mut seen[key.slot()], true) {
            return Err(RulesError::DuplicateKey {
                line,
                key: raw_key.to_string(),
            });
        }

        let letters = parse_letters(value, line)?;
        match key {
            Key::First => rules.set_first(letters),
            Key::Last => rules.set_last(letters),
            Key::After(prev) => rules.set_after(prev, letters),
        }
    }

    Ok(rules)
}

/// Load rules from a file
///
/// # Errors
///
/// Returns `RulesError::Io` if the file cannot be read, or a parse error from
/// `parse_rules`.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<AdjacencyRules, RulesError> {
    let content = fs::read_to_string(path)?;
    parse_rules(&content)
}
