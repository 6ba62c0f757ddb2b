//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use crate::core::WordList;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse word list text: one word per line, `#` starts a comment line
#[must_use]
pub fn parse_words(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Load and validate a word list from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or if the words fail
/// validation (empty list, or a word that cannot be scrambled).
///
/// # Examples
/// ```no_run
/// use unscramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    WordList::new(parse_words(&content))
        .with_context(|| format!("Invalid word list {}", path.display()))
}

/// Build a word list from an embedded string slice
///
/// # Errors
///
/// Returns an error if the slice is empty or holds an unscramblable word.
///
/// # Examples
/// ```
/// use unscramble::wordlists::loader::words_from_slice;
/// use unscramble::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS).unwrap();
/// assert_eq!(words.len(), WORDS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<WordList> {
    Ok(WordList::new(slice)?)
}
