//! Formatting utilities for terminal output

use crate::core::Word;

/// Position of the single letter changed between two ladder rungs
///
/// Returns `None` unless the words are exactly one substitution apart.
#[must_use]
pub fn changed_position(from: &Word, to: &Word) -> Option<usize> {
    if !from.is_one_step_from(to) {
        return None;
    }
    from.chars()
        .iter()
        .zip(to.chars())
        .position(|(a, b)| a != b)
}

/// Describe one ladder step, e.g. `c → d at letter 1`
///
/// Letter positions are 1-based for display.
#[must_use]
pub fn describe_step(from: &Word, to: &Word) -> Option<String> {
    let position = changed_position(from, to)?;
    Some(format!(
        "{} → {} at letter {}",
        char::from(from.char_at(position)),
        char::from(to.char_at(position)),
        position + 1
    ))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
