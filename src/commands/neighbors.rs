//! Neighbor listing command
//!
//! Shows every dictionary word one substitution away from a word.

use crate::core::{Dictionary, Word};
use crate::ladder::{LadderError, neighbors};

/// Neighbors of a single word
pub struct NeighborsResult {
    pub word: Word,
    pub neighbors: Vec<Word>,
    pub dictionary_size: usize,
    pub in_dictionary: bool,
}

/// List the neighbors of `text` in generation order
///
/// # Errors
///
/// Returns an error if `text` is not a valid word.
pub fn list_neighbors<L>(text: &str, load: L) -> Result<NeighborsResult, LadderError>
where
    L: FnOnce(usize) -> Dictionary,
{
    let word = Word::new(text.trim())?;
    let dictionary = load(word.len());

    let found = neighbors(&word, &dictionary).cloned().collect();

    Ok(NeighborsResult {
        in_dictionary: dictionary.contains(word.text()),
        dictionary_size: dictionary.len(),
        neighbors: found,
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::fallback_dictionary;

    #[test]
    fn lists_neighbors_in_order() {
        let result = list_neighbors("cat", fallback_dictionary).unwrap();
        let texts: Vec<&str> = result.neighbors.iter().map(Word::text).collect();

        assert_eq!(texts, vec!["bat", "dat", "cot"]);
        assert!(result.in_dictionary);
        assert_eq!(result.dictionary_size, 8);
    }

    #[test]
    fn word_outside_dictionary() {
        let result = list_neighbors("Cut", fallback_dictionary).unwrap();
        assert_eq!(result.word.text(), "cut");
        assert!(!result.in_dictionary);
        assert_eq!(result.neighbors.len(), 2);
    }

    #[test]
    fn invalid_word_rejected() {
        assert!(list_neighbors("c4t", fallback_dictionary).is_err());
    }
}
