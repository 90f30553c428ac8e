//! Word list loading utilities
//!
//! Provides functions to load a dictionary from a file or fall back to the
//! embedded list.

use super::FALLBACK;
use crate::core::{Dictionary, Word};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load a dictionary of `word_len`-letter words from a file
///
/// The file is split on any whitespace. Words are lowercased, tokens that are not
/// plain letters are skipped (including tokens with bytes that are not UTF-8), and
/// words of other lengths are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("words.txt", 4).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_len: usize) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);

    let dictionary = Dictionary::from_words(
        word_len,
        content
            .split_whitespace()
            .filter_map(|token| Word::new(token).ok()),
    );

    debug!(
        path = %path.display(),
        word_len,
        words = dictionary.len(),
        "loaded word list"
    );

    Ok(dictionary)
}

/// Load a dictionary, falling back to the embedded list if the file is unreadable
///
/// The fallback list is filtered to `word_len` like any other source, so a
/// length it does not cover yields an empty dictionary.
pub fn load_dictionary<P: AsRef<Path>>(path: P, word_len: usize) -> Dictionary {
    let path = path.as_ref();
    match load_from_file(path, word_len) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "word list unavailable, using fallback dictionary"
            );
            fallback_dictionary(word_len)
        }
    }
}

/// The embedded fallback list as a dictionary of `word_len`-letter words
#[must_use]
pub fn fallback_dictionary(word_len: usize) -> Dictionary {
    Dictionary::from_words(word_len, words_from_slice(FALLBACK))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
/// use word_ladder::wordlists::FALLBACK;
///
/// let words = words_from_slice(FALLBACK);
/// assert_eq!(words.len(), FALLBACK.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
