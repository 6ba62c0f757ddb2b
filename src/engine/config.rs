//! Game configuration

use crate::core::EngineError;

/// Points awarded per correctly unscrambled word
pub const DEFAULT_SCORE_INCREMENT: u32 = 20;

/// Words offered per game
pub const DEFAULT_MAX_WORDS: usize = 10;

/// Tunables for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Added to the score for each correct guess
    pub score_increment: u32,
    /// Upper bound on words per game; clamped to the word list size
    pub max_words: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(score_increment: u32, max_words: usize) -> Self {
        Self {
            score_increment,
            max_words,
        }
    }

    /// Check that every value is in range
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` when the score increment or the
    /// word limit is zero, or when a full game's score would not fit in `u32`.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.score_increment == 0 {
            return Err(EngineError::InvalidConfig("score increment must be positive"));
        }
        if self.max_words == 0 {
            return Err(EngineError::InvalidConfig("max words must be positive"));
        }
        let max_score = u32::try_from(self.max_words)
            .ok()
            .and_then(|words| words.checked_mul(self.score_increment));
        if max_score.is_none() {
            return Err(EngineError::InvalidConfig(
                "score increment times max words overflows the score",
            ));
        }
        Ok(())
    }

    /// Number of words in one game given a list of `available` words
    #[must_use]
    pub fn round_length(&self, available: usize) -> usize {
        self.max_words.min(available)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_INCREMENT, DEFAULT_MAX_WORDS)
    }
}
