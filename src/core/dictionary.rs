//! Fixed-length word dictionary
//!
//! The set of words a ladder may step through.

use super::Word;
use rustc_hash::FxHashSet;

/// A set of words sharing one length
///
/// Words of any other length are refused on insert, so every member is a
/// potential node of the same ladder graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    word_len: usize,
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Create an empty dictionary for words of `word_len` letters
    #[must_use]
    pub fn new(word_len: usize) -> Self {
        Self {
            word_len,
            words: FxHashSet::default(),
        }
    }

    /// Build a dictionary from words, keeping only those of `word_len` letters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Dictionary, Word};
    ///
    /// let words = ["cat", "cot", "cold"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::from_words(3, words);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("cot"));
    /// ```
    #[must_use]
    pub fn from_words(word_len: usize, words: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary = Self::new(word_len);
        dictionary.extend(words);
        dictionary
    }

    /// Insert a word
    ///
    /// Returns `false` if the word has the wrong length or is already present.
    pub fn insert(&mut self, word: Word) -> bool {
        if word.len() != self.word_len {
            return false;
        }
        self.words.insert(word)
    }

    /// Check membership by text
    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    /// Get the stored word equal to `text`
    #[inline]
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.words.get(text)
    }

    /// Length shared by every word in the dictionary
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// All words in alphabetical order
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words
    }
}

impl Extend<Word> for Dictionary {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}
