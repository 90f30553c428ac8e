//! Benchmark command
//!
//! Solves randomly drawn start/goal pairs from one dictionary and aggregates
//! ladder lengths and search effort.

use crate::core::{Dictionary, Word};
use crate::ladder::search;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    /// Fixed seed for reproducible pairs; a random one is drawn otherwise
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub seed: u64,
    pub total_pairs: usize,
    pub solved: usize,
    pub unreachable: usize,
    pub total_steps: usize,
    pub average_steps: f64,
    pub max_steps: usize,
    /// Ladder length in steps mapped to the number of pairs solved in that many
    pub distribution: HashMap<usize, usize>,
    pub average_expanded: f64,
    pub longest: Option<(Word, Word, usize)>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Run the benchmark against `dictionary`
///
/// Pairs are drawn with replacement from the dictionary in alphabetical order,
/// so a given seed and dictionary always produce the same pairs. An empty
/// dictionary yields an empty result.
pub fn run_benchmark(dictionary: &Dictionary, config: &BenchmarkConfig) -> BenchmarkResult {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let words = dictionary.sorted_words();

    let pairs: Vec<(&Word, &Word)> = if words.is_empty() {
        Vec::new()
    } else {
        (0..config.count)
            .filter_map(|_| Some((*words.choose(&mut rng)?, *words.choose(&mut rng)?)))
            .collect()
    };

    debug!(seed, pairs = pairs.len(), words = words.len(), "benchmark starting");

    let pb = if config.show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░")),
    );

    let mut solved = 0;
    let mut total_steps = 0;
    let mut max_steps = 0;
    let mut total_expanded = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut longest: Option<(Word, Word, usize)> = None;

    let timer = Instant::now();

    for &(start, goal) in &pairs {
        let outcome = search(start, goal, dictionary);
        total_expanded += outcome.stats.expanded;

        if let Some(ladder) = outcome.ladder {
            let steps = ladder.steps();
            solved += 1;
            total_steps += steps;
            *distribution.entry(steps).or_insert(0) += 1;

            if longest.as_ref().is_none_or(|(_, _, best)| steps > *best) {
                longest = Some((start.clone(), goal.clone(), steps));
            }
            max_steps = max_steps.max(steps);
        }

        pb.set_message(format!("{start} → {goal}"));
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = timer.elapsed();
    let total_pairs = pairs.len();

    BenchmarkResult {
        seed,
        total_pairs,
        solved,
        unreachable: total_pairs - solved,
        total_steps,
        average_steps: if solved == 0 {
            0.0
        } else {
            total_steps as f64 / solved as f64
        },
        max_steps,
        distribution,
        average_expanded: if total_pairs == 0 {
            0.0
        } else {
            total_expanded as f64 / total_pairs as f64
        },
        longest,
        duration,
        searches_per_second: if duration.is_zero() {
            0.0
        } else {
            total_pairs as f64 / duration.as_secs_f64()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::fallback_dictionary;

    fn quiet(count: usize, seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            seed: Some(seed),
            show_progress: false,
        }
    }

    #[test]
    fn benchmark_counts_every_pair() {
        let dictionary = fallback_dictionary(3);
        let result = run_benchmark(&dictionary, &quiet(40, 7));

        assert_eq!(result.total_pairs, 40);
        assert_eq!(result.solved + result.unreachable, 40);
        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
        assert_eq!(result.seed, 7);
    }

    #[test]
    fn fallback_dictionary_is_connected() {
        let dictionary = fallback_dictionary(3);
        let result = run_benchmark(&dictionary, &quiet(25, 42));

        assert_eq!(result.unreachable, 0);
        assert!(result.max_steps <= dictionary.len() - 1);
        if let Some((start, goal, steps)) = &result.longest {
            assert_eq!(*steps, result.max_steps);
            assert!(dictionary.contains(start.text()));
            assert!(dictionary.contains(goal.text()));
        }
    }

    #[test]
    fn same_seed_same_results() {
        let dictionary = fallback_dictionary(3);
        let first = run_benchmark(&dictionary, &quiet(30, 1234));
        let second = run_benchmark(&dictionary, &quiet(30, 1234));

        assert_eq!(first.total_steps, second.total_steps);
        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.longest, second.longest);
    }

    #[test]
    fn drawn_seed_reproduces_run() {
        let dictionary = fallback_dictionary(3);
        let drawn = run_benchmark(
            &dictionary,
            &BenchmarkConfig {
                show_progress: false,
                ..BenchmarkConfig::new(20)
            },
        );
        let replayed = run_benchmark(&dictionary, &quiet(20, drawn.seed));

        assert_eq!(drawn.total_steps, replayed.total_steps);
        assert_eq!(drawn.distribution, replayed.distribution);
        assert_eq!(drawn.longest, replayed.longest);
    }

    #[test]
    fn empty_dictionary_benchmark() {
        let dictionary = Dictionary::new(3);
        let result = run_benchmark(&dictionary, &quiet(10, 0));

        assert_eq!(result.total_pairs, 0);
        assert_eq!(result.solved, 0);
        assert!(result.average_steps.abs() < f64::EPSILON);
        assert!(result.longest.is_none());
    }

    #[test]
    fn disconnected_pairs_reported_unreachable() {
        let dictionary = Dictionary::from_words(
            3,
            ["cat", "xyz"].map(|w| Word::new(w).unwrap()),
        );
        let result = run_benchmark(&dictionary, &quiet(50, 3));

        assert_eq!(result.total_pairs, 50);
        assert!(result.unreachable > 0);
        assert_eq!(result.max_steps, 0);
    }
}
