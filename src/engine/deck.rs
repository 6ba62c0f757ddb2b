//! Word selection without replacement
//!
//! Tracks which words of a list were already offered this session and draws
//! uniformly among the rest.

use crate::core::{EngineError, WordList};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::debug;

/// A word list plus the set of words already used in the current session
#[derive(Debug, Clone)]
pub struct WordDeck {
    words: WordList,
    used: FxHashSet<String>,
}

impl WordDeck {
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            used: FxHashSet::default(),
        }
    }

    /// Draw a random unused word and mark it used
    ///
    /// # Errors
    /// Returns `EngineError::WordListExhausted` when every word is used.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, EngineError> {
        let unused: Vec<&String> = self
            .words
            .words()
            .iter()
            .filter(|word| !self.used.contains(word.as_str()))
            .collect();

        let word = (*unused.choose(rng).ok_or(EngineError::WordListExhausted {
            total: self.words.len(),
        })?)
        .clone();

        debug!(word = %word, remaining = unused.len() - 1, "drew word");
        self.used.insert(word.clone());
        Ok(word)
    }

    /// Forget all used words
    pub fn reset(&mut self) {
        self.used.clear();
    }

    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used.contains(word)
    }

    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    #[cfg(test)]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.words.len() - self.used.len()
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }
}
