//! Ladder result type

use crate::core::{Dictionary, Word};
use std::fmt;

/// Separator used when rendering a ladder on one line
pub const ARROW: &str = " → ";

/// An ordered chain of words from start to goal inclusive
///
/// Consecutive words differ in exactly one position. A ladder always holds at
/// least one word; `start == goal` gives the single-word ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    /// Wrap a non-empty start-to-goal chain
    ///
    /// Returns `None` for an empty chain.
    #[must_use]
    pub(crate) fn from_words(words: Vec<Word>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Words from start to goal
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of substitutions, one less than the number of words
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len() - 1
    }

    /// First word of the ladder
    #[must_use]
    pub fn start(&self) -> &Word {
        &self.words[0]
    }

    /// Last word of the ladder
    #[must_use]
    pub fn goal(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// Check that the ladder is a legal chain through `dictionary`
    ///
    /// Every consecutive pair must be one substitution apart and every word
    /// after the start must be a dictionary member. The start word is exempt
    /// because the search never checks it.
    #[must_use]
    pub fn is_valid_in(&self, dictionary: &Dictionary) -> bool {
        let chained = self
            .words
            .windows(2)
            .all(|pair| pair[0].is_one_step_from(&pair[1]));
        let members = self.words[1..]
            .iter()
            .all(|word| dictionary.contains(word.text()));
        chained && members
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(ARROW)?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
