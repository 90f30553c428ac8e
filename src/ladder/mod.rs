//! Word ladder search
//!
//! Neighbor generation over the implicit substitution graph, breadth-first
//! search, and the guards callers run before searching.

mod neighbors;
mod path;
mod search;

pub use neighbors::{ALPHABET, Neighbors, neighbors};
pub use path::{ARROW, Ladder};
pub use search::{SearchOutcome, SearchStats, find_ladder, search};

use crate::core::{Word, WordError};
use std::fmt;

/// Reasons a start/goal pair is refused before any search runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    InvalidWord(WordError),
    LengthMismatch { start: usize, goal: usize },
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Invalid word: {e}"),
            Self::LengthMismatch { start, goal } => write!(
                f,
                "Words must be the same length! (start has {start} letters, target has {goal})"
            ),
        }
    }
}

impl std::error::Error for LadderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::LengthMismatch { .. } => None,
        }
    }
}

impl From<WordError> for LadderError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// Reject a pair of words that no substitution ladder could connect
///
/// # Errors
///
/// Returns `LadderError::LengthMismatch` if the words differ in length.
pub fn validate_pair(start: &Word, goal: &Word) -> Result<(), LadderError> {
    if start.len() == goal.len() {
        Ok(())
    } else {
        Err(LadderError::LengthMismatch {
            start: start.len(),
            goal: goal.len(),
        })
    }
}

/// Parse and validate raw start/goal input
///
/// Input is trimmed and lowercased. Lengths are compared before the letters are
/// checked, so a mismatch is reported even for otherwise malformed input.
///
/// # Errors
///
/// Returns `LadderError::LengthMismatch` for words of different length, or
/// `LadderError::InvalidWord` if either word is not made of letters.
///
/// # Examples
/// ```
/// use word_ladder::ladder::{LadderError, parse_pair};
///
/// let (start, goal) = parse_pair("Cat", "DOG").unwrap();
/// assert_eq!((start.text(), goal.text()), ("cat", "dog"));
///
/// assert!(matches!(
///     parse_pair("cat", "cold"),
///     Err(LadderError::LengthMismatch { start: 3, goal: 4 })
/// ));
/// ```
pub fn parse_pair(start: &str, goal: &str) -> Result<(Word, Word), LadderError> {
    let start = start.trim();
    let goal = goal.trim();

    let (start_len, goal_len) = (start.chars().count(), goal.chars().count());
    if start_len != goal_len {
        return Err(LadderError::LengthMismatch {
            start: start_len,
            goal: goal_len,
        });
    }

    let start = Word::new(start)?;
    let goal = Word::new(goal)?;
    validate_pair(&start, &goal)?;
    Ok((start, goal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_pair_accepts_equal_lengths() {
        let cat = Word::new("cat").unwrap();
        let dog = Word::new("dog").unwrap();
        assert!(validate_pair(&cat, &dog).is_ok());
        assert!(validate_pair(&cat, &cat).is_ok());
    }

    #[test]
    fn validate_pair_rejects_mismatch() {
        let cat = Word::new("cat").unwrap();
        let cold = Word::new("cold").unwrap();
        assert_eq!(
            validate_pair(&cat, &cold),
            Err(LadderError::LengthMismatch { start: 3, goal: 4 })
        );
    }

    #[test]
    fn parse_pair_normalizes_input() {
        let (start, goal) = parse_pair("  CAT\n", "Dog ").unwrap();
        assert_eq!(start.text(), "cat");
        assert_eq!(goal.text(), "dog");
    }

    #[test]
    fn parse_pair_checks_length_first() {
        assert!(matches!(
            parse_pair("c4t", "dogs"),
            Err(LadderError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn parse_pair_rejects_invalid_words() {
        assert_eq!(
            parse_pair("c4t", "dog"),
            Err(LadderError::InvalidWord(WordError::InvalidCharacters))
        );
        assert_eq!(
            parse_pair("", ""),
            Err(LadderError::InvalidWord(WordError::Empty))
        );
    }

    #[test]
    fn error_messages() {
        let mismatch = LadderError::LengthMismatch { start: 3, goal: 4 };
        assert!(mismatch.to_string().starts_with("Words must be the same length!"));

        let invalid = LadderError::from(WordError::Empty);
        assert_eq!(
            invalid.to_string(),
            "Invalid word: Word must contain at least one letter"
        );
    }
}
