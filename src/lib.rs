//! Word Ladder Solver
//!
//! Finds the shortest chain of single-letter substitutions between two words,
//! stepping only through dictionary words.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::{Dictionary, Word};
//! use word_ladder::ladder::find_ladder;
//! use word_ladder::wordlists::{FALLBACK, loader::words_from_slice};
//!
//! let dictionary = Dictionary::from_words(3, words_from_slice(FALLBACK));
//! let start = Word::new("cat").unwrap();
//! let goal = Word::new("dog").unwrap();
//!
//! let ladder = find_ladder(&start, &goal, &dictionary).unwrap();
//! println!("{ladder} ({} steps)", ladder.steps());
//! ```

// Core domain types
pub mod core;

// Neighbor generation and breadth-first search
pub mod ladder;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;
