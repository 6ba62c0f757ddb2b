//! Formatting utilities for terminal output

/// Spread a word out as upper-case letters separated by spaces
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.saturating_mul(width) / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Label for the word currently being played, e.g. `3/10`
///
/// Counts from one; once every word is done it stays at the total.
#[must_use]
pub fn word_progress(word_count: usize, round_length: usize) -> String {
    let current = (word_count + 1).min(round_length);
    format!("{current}/{round_length}")
}
