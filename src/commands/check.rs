//! Word check command
//!
//! Reports whether a word is in the vocabulary and whether the adjacency rules
//! would let an open search reach it.

use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::filter::AdjacencyRules;
use crate::vocabulary::Vocabulary;

/// Which adjacency rule stops a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    UnlikelyFirst(char),
    UnlikelyLast(char),
    UnlikelyPair(char, char),
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnlikelyFirst(ch) => write!(f, "words rarely start with {ch}"),
            Self::UnlikelyLast(ch) => write!(f, "words rarely end with {ch}"),
            Self::UnlikelyPair(prev, next) => write!(f, "{next} rarely follows {prev}"),
        }
    }
}

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    pub in_vocabulary: bool,
    /// Zero-based position of the first refused letter and the rule behind it
    pub violation: Option<(usize, Violation)>,
}

impl CheckResult {
    /// Whether a search with no fixed letters would emit this word
    #[must_use]
    pub const fn reachable(&self) -> bool {
        self.in_vocabulary && self.violation.is_none()
    }
}

/// Check a word against the vocabulary and the adjacency rules
///
/// # Errors
///
/// Returns an error if:
/// - The word contains anything but letters
/// - The word is shorter than `MIN_WORD_LEN` or longer than `MAX_WORD_LEN`
pub fn check_word(
    word: &str,
    vocabulary: &Vocabulary,
    rules: &AdjacencyRules,
) -> Result<CheckResult, String> {
    if let Some(bad) = word.chars().find(|ch| !ch.is_ascii_alphabetic()) {
        return Err(format!("Invalid word '{word}': '{bad}' is not a letter"));
    }
    if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()) {
        return Err(format!(
            "Invalid word '{word}': length must be {MIN_WORD_LEN} to {MAX_WORD_LEN}"
        ));
    }

    let upper = word.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    let violation = rules
        .first_violation(bytes)
        .map(|pos| (pos, classify(rules, bytes, pos)));

    Ok(CheckResult {
        in_vocabulary: vocabulary.contains(bytes),
        word: upper,
        violation,
    })
}

/// Rule that refuses `word[pos]`, tested in the same order as the search
fn classify(rules: &AdjacencyRules, word: &[u8], pos: usize) -> Violation {
    let ch = word[pos];
    if pos == 0 && rules.is_unlikely_first(ch) {
        Violation::UnlikelyFirst(char::from(ch))
    } else if pos > 0 && rules.is_unlikely_pair(word[pos - 1], ch) {
        Violation::UnlikelyPair(char::from(word[pos - 1]), char::from(ch))
    } else {
        Violation::UnlikelyLast(char::from(ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::from_words(["portal", "xylem", "quiz", "tea"])
    }

    #[test]
    fn check_reachable_word() {
        let result = check_word("portal", &vocab(), &AdjacencyRules::english()).unwrap();
        assert_eq!(result.word, "PORTAL");
        assert!(result.in_vocabulary);
        assert!(result.violation.is_none());
        assert!(result.reachable());
    }

    #[test]
    fn check_unlikely_first() {
        let result = check_word("xylem", &vocab(), &AdjacencyRules::english()).unwrap();
        assert!(result.in_vocabulary);
        assert_eq!(result.violation, Some((0, Violation::UnlikelyFirst('X'))));
        assert!(!result.reachable());
    }

    #[test]
    fn check_unlikely_last() {
        let result = check_word("QUIZ", &vocab(), &AdjacencyRules::english()).unwrap();
        assert_eq!(result.violation, Some((3, Violation::UnlikelyLast('Z'))));
    }

    #[test]
    fn check_unlikely_pair() {
        let rules = AdjacencyRules::english();
        assert!(rules.is_unlikely_pair(b'A', b'Q'));
        let result = check_word("aqua", &vocab(), &rules).unwrap();
        assert!(!result.in_vocabulary);
        assert_eq!(result.violation, Some((1, Violation::UnlikelyPair('A', 'Q'))));
    }

    #[test]
    fn check_permissive_rules() {
        let result = check_word("xylem", &vocab(), &AdjacencyRules::permissive()).unwrap();
        assert!(result.reachable());
    }

    #[test]
    fn check_unknown_word() {
        let result = check_word("abcd", &vocab(), &AdjacencyRules::permissive()).unwrap();
        assert!(!result.in_vocabulary);
        assert!(!result.reachable());
    }

    #[test]
    fn check_rejects_bad_input() {
        let rules = AdjacencyRules::english();
        assert!(check_word("a", &vocab(), &rules).is_err());
        assert!(check_word("abcdefghijklm", &vocab(), &rules).is_err());
        assert!(check_word("te-a", &vocab(), &rules).is_err());
        assert!(check_word("", &vocab(), &rules).is_err());
    }

    #[test]
    fn violation_messages() {
        assert_eq!(
            Violation::UnlikelyPair('A', 'Q').to_string(),
            "Q rarely follows A"
        );
        assert_eq!(
            Violation::UnlikelyFirst('X').to_string(),
            "words rarely start with X"
        );
    }
}
