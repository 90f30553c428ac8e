//! Core domain types for word ladders
//!
//! This module contains the fundamental value types of the ladder graph.
//! They perform no I/O and are safe to share between independent searches.

mod dictionary;
mod word;

pub use dictionary::Dictionary;
pub use word::{Word, WordError};
