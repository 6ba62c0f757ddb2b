//! Published game snapshot

/// Immutable view of the game shown to the player
///
/// A new value replaces the old one on every transition; fields are never
/// edited in place by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Current puzzle, a non-identity permutation of the hidden word
    pub scrambled_word: String,
    pub score: u32,
    /// Words guessed or skipped so far this game
    pub word_count: usize,
    /// Set only by the transition that rejected a guess
    pub is_guess_wrong: bool,
    /// Set once the round's last word has been guessed or skipped
    pub is_game_over: bool,
}

impl GameState {
    /// Fresh snapshot for the start of a game
    #[must_use]
    pub fn new_game(scrambled_word: String) -> Self {
        Self {
            scrambled_word,
            ..Self::default()
        }
    }

    /// Copy of this snapshot with the wrong-guess flag raised
    #[must_use]
    pub fn with_wrong_guess(&self) -> Self {
        Self {
            is_guess_wrong: true,
            ..self.clone()
        }
    }
}
