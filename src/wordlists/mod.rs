//! Word lists for ladder solving
//!
//! Provides the dictionary loader and the fallback list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK, FALLBACK_COUNT};

/// Word list file read when no other path is given
pub const DEFAULT_WORDLIST: &str = "words.txt";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_count_matches_const() {
        assert_eq!(FALLBACK.len(), FALLBACK_COUNT);
    }

    #[test]
    fn fallback_are_valid_words() {
        for &word in FALLBACK {
            assert_eq!(word.len(), 3, "Word '{word}' is not 3 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn expected_fallback_words() {
        let mut words = FALLBACK.to_vec();
        words.sort_unstable();
        assert_eq!(
            words,
            vec!["bag", "bat", "cat", "cog", "cot", "dat", "dog", "dot"]
        );
    }
}
