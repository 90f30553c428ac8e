//! Ladder solving command
//!
//! Solves one start/goal pair and returns the ladder with search statistics.

use crate::core::{Dictionary, Word};
use crate::ladder::{Ladder, LadderError, SearchStats, parse_pair, search};
use std::time::{Duration, Instant};

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub start: String,
    pub goal: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, goal: String) -> Self {
        Self { start, goal }
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub start: Word,
    pub goal: Word,
    pub dictionary_size: usize,
    pub ladder: Option<Ladder>,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.ladder.is_some()
    }
}

/// Solve a ladder with a dictionary loaded for the pair's word length
///
/// `load` receives the word length once the pair has been validated, so no
/// dictionary is read for a rejected pair.
///
/// # Errors
///
/// Returns an error if:
/// - Either word contains anything but letters
/// - The words differ in length
pub fn solve_ladder<L>(config: &SolveConfig, load: L) -> Result<SolveResult, LadderError>
where
    L: FnOnce(usize) -> Dictionary,
{
    let (start, goal) = parse_pair(&config.start, &config.goal)?;
    let dictionary = load(start.len());

    let timer = Instant::now();
    let outcome = search(&start, &goal, &dictionary);
    let duration = timer.elapsed();

    Ok(SolveResult {
        start,
        goal,
        dictionary_size: dictionary.len(),
        ladder: outcome.ladder,
        stats: outcome.stats,
        duration,
    })
}
