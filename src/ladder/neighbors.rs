//! Single-substitution neighbor generation
//!
//! Edges of the ladder graph are never stored. They are produced on demand by
//! trying every letter at every position and keeping the dictionary hits.

use crate::core::{Dictionary, Word};
use std::iter::FusedIterator;

/// Letters tried at each position, in enumeration order
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Lazy iterator over the dictionary words one substitution away from a word
///
/// Yields in position order, then alphabet order. Created by [`neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    word: &'a Word,
    dictionary: &'a Dictionary,
    candidate: String,
    position: usize,
    letter: usize,
}

/// Enumerate the neighbors of `word` in `dictionary`
///
/// A neighbor is a dictionary word equal to `word` with exactly one letter
/// replaced. `word` itself is never yielded, even when it is in the dictionary.
///
/// # Examples
/// ```
/// use word_ladder::core::{Dictionary, Word};
/// use word_ladder::ladder::neighbors;
///
/// let words = ["cat", "cot", "bat", "dog"].map(|w| Word::new(w).unwrap());
/// let dictionary = Dictionary::from_words(3, words);
/// let cat = Word::new("cat").unwrap();
///
/// let found: Vec<&str> = neighbors(&cat, &dictionary).map(Word::text).collect();
/// assert_eq!(found, vec!["bat", "cot"]);
/// ```
#[must_use]
pub fn neighbors<'a>(word: &'a Word, dictionary: &'a Dictionary) -> Neighbors<'a> {
    Neighbors {
        word,
        dictionary,
        candidate: word.text().to_string(),
        position: 0,
        letter: 0,
    }
}

impl Neighbors<'_> {
    /// Overwrite one byte of the candidate with an ASCII letter
    fn set_candidate_letter(&mut self, letter: u8) {
        let mut encoded = [0u8; 4];
        let replacement = char::from(letter).encode_utf8(&mut encoded);
        self.candidate
            .replace_range(self.position..=self.position, replacement);
    }
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Word;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.word.len() {
            while let Some(&letter) = ALPHABET.get(self.letter) {
                self.letter += 1;
                self.set_candidate_letter(letter);

                if self.candidate != self.word.text()
                    && let Some(found) = self.dictionary.get(&self.candidate)
                {
                    return Some(found);
                }
            }

            let original = self.word.char_at(self.position);
            self.set_candidate_letter(original);
            self.position += 1;
            self.letter = 0;
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_positions = self.word.len().saturating_sub(self.position);
        let upper = (remaining_positions * (ALPHABET.len() - 1))
            .min(self.dictionary.len());
        (0, Some(upper))
    }
}

impl FusedIterator for Neighbors<'_> {}
