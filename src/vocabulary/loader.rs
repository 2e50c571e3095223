//! Vocabulary loading utilities
//!
//! Reads replacement word lists from disk, one word per line.

use super::Vocabulary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a vocabulary from a file
///
/// Blank lines and `#` comments are skipped; words are normalized the way
/// `Vocabulary::from_words` does, so invalid entries are dropped rather than
/// rejected.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordgen::vocabulary::loader::load_from_file;
///
/// let vocab = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", vocab.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vocabulary> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Build a vocabulary from word-list text
#[must_use]
pub fn parse_word_list(content: &str) -> Vocabulary {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
