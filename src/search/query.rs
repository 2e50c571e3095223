//! Search query validation
//!
//! Raw user input (letters, optional length bounds, optional template) is checked
//! here once, so the engine itself never has an error path. Out-of-range length
//! bounds are clamped rather than rejected; each clamp is recorded as an
//! `Adjustment` for the caller to report.

use crate::core::{LetterBag, LetterError, MAX_WORD_LEN, MIN_WORD_LEN, Template};
use std::fmt;
use std::ops::RangeInclusive;

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    bag: LetterBag,
    template: Option<Template>,
    min_len: usize,
    max_len: usize,
    full_alphabet: bool,
    adjustments: Vec<Adjustment>,
}

impl Query {
    /// Letters available to the search
    #[must_use]
    pub const fn bag(&self) -> &LetterBag {
        &self.bag
    }

    #[must_use]
    pub const fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Target lengths in search order
    #[must_use]
    pub const fn lengths(&self) -> RangeInclusive<usize> {
        self.min_len..=self.max_len
    }

    /// Whether every letter is available with unrestricted multiplicity
    #[must_use]
    pub const fn is_full_alphabet(&self) -> bool {
        self.full_alphabet
    }

    /// Length bounds that were clamped during validation
    #[must_use]
    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }
}

/// A length bound moved into range during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    MinTooSmall { requested: usize, applied: usize },
    MinTooLarge { requested: usize, applied: usize },
    MaxTooSmall { requested: usize, applied: usize },
    MaxTooLarge { requested: usize, applied: usize },
    MaxBelowMin { requested: usize, applied: usize },
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MinTooSmall { requested, applied } => write!(
                f,
                "minimum word length ({requested}) too small; set to {applied}"
            ),
            Self::MinTooLarge { requested, applied } => write!(
                f,
                "minimum word length ({requested}) too large; set to {applied}"
            ),
            Self::MaxTooSmall { requested, applied } => write!(
                f,
                "maximum word length ({requested}) too small; set to {applied}"
            ),
            Self::MaxTooLarge { requested, applied } => write!(
                f,
                "maximum word length ({requested}) too large; set to {applied}"
            ),
            Self::MaxBelowMin { requested, applied } => write!(
                f,
                "maximum word length ({requested}) below minimum; set to {applied}"
            ),
        }
    }
}

/// Error type for search requests the engine cannot run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    InvalidLetter(LetterError),
    NotEnoughLetters { found: u32 },
    TemplateLength(usize),
    TemplateLetterUnavailable(char),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(e) => write!(f, "Invalid letters: {e}"),
            Self::NotEnoughLetters { found } => write!(
                f,
                "Not enough letters ({found}); need at least {MIN_WORD_LEN}"
            ),
            Self::TemplateLength(len) => write!(
                f,
                "Pattern length {len} out of range; expect >= {MIN_WORD_LEN} and <= {MAX_WORD_LEN}"
            ),
            Self::TemplateLetterUnavailable(ch) => {
                write!(f, "Pattern letter {ch} not in letter set")
            }
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLetter(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LetterError> for QueryError {
    fn from(e: LetterError) -> Self {
        Self::InvalidLetter(e)
    }
}

/// Where the search's letters come from
#[derive(Debug, Clone)]
enum Source {
    Letters(String),
    FullAlphabet,
}

/// Builder for `Query`
///
/// # Examples
/// ```
/// use wordgen::search::QueryBuilder;
///
/// let query = QueryBuilder::new("aporratl").template("P...A.").build().unwrap();
/// assert_eq!(query.lengths(), 6..=6);
///
/// let query = QueryBuilder::new("tea").min_len(1).build().unwrap();
/// assert_eq!(query.min_len(), 2);
/// assert_eq!(query.adjustments().len(), 1);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct QueryBuilder {
    source: Source,
    template: Option<String>,
    min_len: Option<usize>,
    max_len: Option<usize>,
}

impl QueryBuilder {
    /// Search the given letters; repetition means multiplicity
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            source: Source::Letters(letters.into()),
            template: None,
            min_len: None,
            max_len: None,
        }
    }

    /// Search a template with every letter available `MAX_WORD_LEN` times
    pub fn full_alphabet(template: impl Into<String>) -> Self {
        Self {
            source: Source::FullAlphabet,
            template: Some(template.into()),
            min_len: None,
            max_len: None,
        }
    }

    /// Interpret a single command-line style argument
    ///
    /// Input made only of letters is a letter set; anything containing a
    /// non-letter is a template over the full alphabet.
    pub fn from_input(input: &str) -> Self {
        if input.chars().all(|ch| ch.is_ascii_alphabetic()) {
            Self::new(input)
        } else {
            Self::full_alphabet(input)
        }
    }

    /// Restrict results to a template; the template's length fixes both bounds
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    pub fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    /// Validate and produce the query
    ///
    /// # Errors
    ///
    /// Returns a `QueryError` if:
    /// - The letters contain a non-letter character
    /// - Fewer than `MIN_WORD_LEN` letters are given
    /// - The template length is outside `MIN_WORD_LEN..=MAX_WORD_LEN`
    /// - A fixed template letter is not among the available letters
    pub fn build(self) -> Result<Query, QueryError> {
        let (bag, full_alphabet) = match &self.source {
            Source::Letters(letters) => {
                let bag = LetterBag::new(letters)?;
                if (bag.total() as usize) < MIN_WORD_LEN {
                    return Err(QueryError::NotEnoughLetters { found: bag.total() });
                }
                (bag, false)
            }
            Source::FullAlphabet => (LetterBag::full_alphabet(MAX_WORD_LEN as u32), true),
        };

        let mut adjustments = Vec::new();

        let (template, min_len, max_len) = if let Some(raw) = &self.template {
            let template = Template::parse(raw);
            if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&template.len()) {
                return Err(QueryError::TemplateLength(template.len()));
            }
            if let Some(missing) = template.fixed_letters().find(|&ch| !bag.contains(ch)) {
                return Err(QueryError::TemplateLetterUnavailable(char::from(missing)));
            }
            let len = template.len();
            (Some(template), len, len)
        } else {
            let min_len = clamp_min(self.min_len.unwrap_or(MIN_WORD_LEN), &mut adjustments);
            let max_len = clamp_max(
                self.max_len.unwrap_or(MAX_WORD_LEN),
                min_len,
                &mut adjustments,
            );
            (None, min_len, max_len)
        };

        Ok(Query {
            bag,
            template,
            min_len,
            max_len,
            full_alphabet,
            adjustments,
        })
    }
}

fn clamp_min(requested: usize, adjustments: &mut Vec<Adjustment>) -> usize {
    if requested < MIN_WORD_LEN {
        adjustments.push(Adjustment::MinTooSmall {
            requested,
            applied: MIN_WORD_LEN,
        });
        MIN_WORD_LEN
    } else if requested > MAX_WORD_LEN {
        adjustments.push(Adjustment::MinTooLarge {
            requested,
            applied: MAX_WORD_LEN,
        });
        MAX_WORD_LEN
    } else {
        requested
    }
}

fn clamp_max(requested: usize, min_len: usize, adjustments: &mut Vec<Adjustment>) -> usize {
    let bounded = if requested > MAX_WORD_LEN {
        adjustments.push(Adjustment::MaxTooLarge {
            requested,
            applied: MAX_WORD_LEN,
        });
        MAX_WORD_LEN
    } else if requested < MIN_WORD_LEN {
        adjustments.push(Adjustment::MaxTooSmall {
            requested,
            applied: MIN_WORD_LEN,
        });
        MIN_WORD_LEN
    } else {
        requested
    };

    if bounded < min_len {
        adjustments.push(Adjustment::MaxBelowMin {
            requested: bounded,
            applied: min_len,
        });
        min_len
    } else {
        bounded
    }
}
