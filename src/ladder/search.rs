//! Breadth-first ladder search
//!
//! Explores the implicit substitution graph level by level from the start word,
//! recording for each discovered word the word it was first reached from.

use super::neighbors::neighbors;
use super::path::Ladder;
use crate::core::{Dictionary, Word};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Backward pointers from each discovered word to its discoverer
///
/// The start word maps to `None`. Key presence doubles as the visited set.
type ParentMap<'a> = FxHashMap<&'a Word, Option<&'a Word>>;

/// Work done by a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Words taken off the frontier and expanded
    pub expanded: usize,
    /// Words ever placed on the frontier, start included
    pub discovered: usize,
}

/// Result of a search: the ladder if one exists, plus the work it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub ladder: Option<Ladder>,
    pub stats: SearchStats,
}

/// Find a shortest ladder from `start` to `goal`
///
/// Returns `None` when the goal cannot be reached. Only the intermediate words
/// and the goal need to be in the dictionary.
///
/// # Examples
/// ```
/// use word_ladder::core::{Dictionary, Word};
/// use word_ladder::ladder::find_ladder;
///
/// let words = ["cat", "cot", "cog", "dog"].map(|w| Word::new(w).unwrap());
/// let dictionary = Dictionary::from_words(3, words);
///
/// let start = Word::new("cat").unwrap();
/// let goal = Word::new("dog").unwrap();
/// let ladder = find_ladder(&start, &goal, &dictionary).unwrap();
/// assert_eq!(ladder.to_string(), "cat → cot → cog → dog");
/// ```
#[must_use]
pub fn find_ladder(start: &Word, goal: &Word, dictionary: &Dictionary) -> Option<Ladder> {
    search(start, goal, dictionary).ladder
}

/// Run the breadth-first search and report its statistics
///
/// Traversal stops when the goal is dequeued, so `start == goal` yields the
/// single-word ladder without consulting the dictionary.
#[must_use]
pub fn search(start: &Word, goal: &Word, dictionary: &Dictionary) -> SearchOutcome {
    let mut parents: ParentMap<'_> = FxHashMap::default();
    let mut frontier: VecDeque<&Word> = VecDeque::new();
    let mut stats = SearchStats::default();

    parents.insert(start, None);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            break;
        }

        stats.expanded += 1;

        for neighbor in neighbors(current, dictionary) {
            if let Entry::Vacant(slot) = parents.entry(neighbor) {
                slot.insert(Some(current));
                frontier.push_back(neighbor);
            }
        }
    }

    stats.discovered = parents.len();
    let ladder = reconstruct_path(&parents, goal);

    debug!(
        start = %start,
        goal = %goal,
        expanded = stats.expanded,
        discovered = stats.discovered,
        steps = ?ladder.as_ref().map(Ladder::steps),
        "ladder search finished"
    );

    SearchOutcome { ladder, stats }
}

/// Walk parent pointers back from the goal and reverse into start-to-goal order
fn reconstruct_path(parents: &ParentMap<'_>, goal: &Word) -> Option<Ladder> {
    let mut parent = *parents.get(goal)?;
    let mut words = vec![goal.clone()];

    while let Some(word) = parent {
        words.push(word.clone());
        parent = parents.get(word).copied().flatten();
    }

    words.reverse();
    Ladder::from_words(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn sample_dictionary() -> Dictionary {
        Dictionary::from_words(
            3,
            ["cat", "cot", "cog", "dog", "dot", "dat", "bat", "bag"].map(word),
        )
    }

    fn ladder_texts(ladder: &Ladder) -> Vec<&str> {
        ladder.words().iter().map(Word::text).collect()
    }

    /// Shortest distance by exhaustive level expansion, independent of the parent map
    fn brute_force_distance(start: &Word, goal: &Word, dictionary: &Dictionary) -> Option<usize> {
        let mut level = vec![start.clone()];
        let mut seen = vec![start.clone()];
        for depth in 0..=dictionary.len() {
            if level.contains(goal) {
                return Some(depth);
            }
            let next: Vec<Word> = dictionary
                .iter()
                .filter(|w| !seen.contains(w))
                .filter(|w| level.iter().any(|l| l.is_one_step_from(w)))
                .cloned()
                .collect();
            seen.extend(next.iter().cloned());
            level = next;
        }
        None
    }

    #[test]
    fn cat_to_dog_takes_three_steps() {
        let dictionary = sample_dictionary();
        let ladder = find_ladder(&word("cat"), &word("dog"), &dictionary).unwrap();

        assert_eq!(ladder.steps(), 3);
        assert_eq!(ladder_texts(&ladder), vec!["cat", "dat", "dot", "dog"]);
        assert!(ladder.is_valid_in(&dictionary));
    }

    #[test]
    fn identity_search_ignores_dictionary() {
        let cat = word("cat");

        let empty = Dictionary::new(3);
        let ladder = find_ladder(&cat, &cat, &empty).unwrap();
        assert_eq!(ladder_texts(&ladder), vec!["cat"]);
        assert_eq!(ladder.steps(), 0);

        let outcome = search(&cat, &cat, &sample_dictionary());
        assert_eq!(outcome.ladder.map(|l| l.steps()), Some(0));
        assert_eq!(outcome.stats.expanded, 0);
        assert_eq!(outcome.stats.discovered, 1);
    }

    #[test]
    fn unreachable_goal_reports_no_path() {
        let dictionary = sample_dictionary();
        assert!(find_ladder(&word("cat"), &word("xyz"), &dictionary).is_none());
    }

    #[test]
    fn empty_dictionary_reports_no_path() {
        let dictionary = Dictionary::new(3);
        let outcome = search(&word("cat"), &word("dog"), &dictionary);
        assert!(outcome.ladder.is_none());
        assert_eq!(outcome.stats.expanded, 1);
        assert_eq!(outcome.stats.discovered, 1);
    }

    #[test]
    fn start_outside_dictionary_is_allowed() {
        let dictionary = sample_dictionary();
        let ladder = find_ladder(&word("cut"), &word("dog"), &dictionary).unwrap();
        assert_eq!(ladder_texts(&ladder), vec!["cut", "cot", "dot", "dog"]);
        assert!(ladder.is_valid_in(&dictionary));
    }

    #[test]
    fn goal_outside_dictionary_is_unreachable() {
        let dictionary = sample_dictionary();
        assert!(find_ladder(&word("cat"), &word("cut"), &dictionary).is_none());
    }

    #[test]
    fn exhausted_search_expands_whole_component() {
        let dictionary = sample_dictionary();
        let outcome = search(&word("cat"), &word("xyz"), &dictionary);
        assert!(outcome.ladder.is_none());
        assert_eq!(outcome.stats.discovered, dictionary.len());
        assert_eq!(outcome.stats.expanded, dictionary.len());
    }

    #[test]
    fn mismatched_lengths_find_nothing() {
        let dictionary = sample_dictionary();
        assert!(find_ladder(&word("cat"), &word("cold"), &dictionary).is_none());
    }

    #[test]
    fn four_letter_ladder() {
        let dictionary = Dictionary::from_words(
            4,
            ["cold", "cord", "card", "ward", "warm", "word", "worm", "core"].map(word),
        );
        let ladder = find_ladder(&word("cold"), &word("warm"), &dictionary).unwrap();

        assert_eq!(ladder.steps(), 4);
        assert_eq!(ladder.start().text(), "cold");
        assert_eq!(ladder.goal().text(), "warm");
        assert!(ladder.is_valid_in(&dictionary));
    }

    #[test]
    fn every_ladder_is_shortest_and_valid() {
        let dictionary = sample_dictionary();
        for start in dictionary.iter() {
            for goal in dictionary.iter() {
                let found = find_ladder(start, goal, &dictionary);
                let expected = brute_force_distance(start, goal, &dictionary);
                assert_eq!(
                    found.as_ref().map(Ladder::steps),
                    expected,
                    "{start} -> {goal}"
                );
                if let Some(ladder) = found {
                    assert_eq!(ladder.start(), start);
                    assert_eq!(ladder.goal(), goal);
                    assert!(ladder.is_valid_in(&dictionary));
                }
            }
        }
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let dictionary = sample_dictionary();
        let first = find_ladder(&word("bag"), &word("dog"), &dictionary);
        for _ in 0..5 {
            assert_eq!(find_ladder(&word("bag"), &word("dog"), &dictionary), first);
        }
    }
}
