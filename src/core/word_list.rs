//! Validated word list
//!
//! An immutable, ordered, duplicate-free collection of words that can all be
//! scrambled.

use super::EngineError;
use super::shuffle::is_scramblable;
use rustc_hash::FxHashSet;

/// Static list of candidate words for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a word list from raw entries
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped and
    /// duplicates keep their first position.
    ///
    /// # Errors
    /// Returns `EngineError::EmptyWordList` if nothing usable remains, or
    /// `EngineError::UnscramblableWord` for a word with fewer than two
    /// distinct letters.
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::WordList;
    ///
    /// let list = WordList::new(["Kotlin", " rust ", "kotlin"]).unwrap();
    /// assert_eq!(list.words(), &["kotlin", "rust"]);
    ///
    /// assert!(WordList::new(["aa"]).is_err());
    /// ```
    pub fn new<I, S>(entries: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut words = Vec::new();

        for entry in entries {
            let word = entry.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if !is_scramblable(&word) {
                return Err(EngineError::UnscramblableWord(word));
            }
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(EngineError::EmptyWordList);
        }

        Ok(Self { words })
    }

    /// All words, in their original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
