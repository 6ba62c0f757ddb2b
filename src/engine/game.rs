//! Game engine
//!
//! Owns one play session: the hidden word, the used-word deck, the guess
//! buffer and the published [`GameState`].

use super::config::GameConfig;
use super::deck::WordDeck;
use crate::core::{EngineError, GameState, Observable, SubscriptionId, WordList, scramble};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Matched the hidden word; the score went up and the game advanced
    Correct,
    /// Did not match; only the wrong-guess flag changed
    Wrong,
    /// The game is over, nothing changed
    Ignored,
}

/// Single-session word-scramble engine
///
/// All methods take `&mut self`; callers sharing an engine across threads
/// must serialize access themselves.
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    deck: WordDeck,
    rng: R,
    current_word: String,
    state: Observable<GameState>,
    user_guess: Observable<String>,
}

impl GameEngine<StdRng> {
    /// Create an engine seeded from the thread RNG and start a game
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` for an out-of-range config.
    pub fn new(words: WordList, config: GameConfig) -> Result<Self, EngineError> {
        Self::with_rng(words, config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create an engine whose word choices and scrambles are reproducible
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` for an out-of-range config.
    pub fn seeded(words: WordList, config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(words, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng> GameEngine<R> {
    /// Create an engine with a caller-supplied RNG and start a game
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` for an out-of-range config.
    pub fn with_rng(words: WordList, config: GameConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;

        let mut engine = Self {
            config,
            deck: WordDeck::new(words),
            rng,
            current_word: String::new(),
            state: Observable::new(GameState::default()),
            user_guess: Observable::new(String::new()),
        };
        engine.reset_game()?;
        Ok(engine)
    }

    /// Latest published snapshot
    #[must_use]
    pub const fn state(&self) -> &GameState {
        self.state.get()
    }

    /// Current contents of the guess buffer
    #[must_use]
    pub fn user_guess(&self) -> &str {
        self.user_guess.get()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Words in one game, the configured maximum clamped to the list size
    #[must_use]
    pub fn round_length(&self) -> usize {
        self.config.round_length(self.deck.words().len())
    }

    /// Number of words drawn since the last reset
    #[must_use]
    pub fn used_word_count(&self) -> usize {
        self.deck.used_count()
    }

    /// Whether `word` was already offered since the last reset
    #[must_use]
    pub fn is_word_used(&self, word: &str) -> bool {
        self.deck.is_used(word)
    }

    /// Receive every new [`GameState`], starting with the current one
    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameState) + 'static) -> SubscriptionId {
        self.state.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Receive every change of the guess buffer, starting with the current one
    pub fn subscribe_guess(&mut self, subscriber: impl FnMut(&String) + 'static) -> SubscriptionId {
        self.user_guess.subscribe(subscriber)
    }

    pub fn unsubscribe_guess(&mut self, id: SubscriptionId) -> bool {
        self.user_guess.unsubscribe(id)
    }

    /// Replace the guess buffer verbatim
    pub fn update_guess(&mut self, text: impl Into<String>) {
        self.user_guess.set(text.into());
    }

    /// Submit the contents of the guess buffer
    ///
    /// # Errors
    /// See [`GameEngine::submit_guess`].
    pub fn check_user_guess(&mut self) -> Result<GuessOutcome, EngineError> {
        let guess = self.user_guess.get().clone();
        self.submit_guess(&guess)
    }

    /// Compare `guess` with the hidden word, ignoring case
    ///
    /// A match adds the score increment and moves to the next word; a miss
    /// raises the wrong-guess flag. The guess buffer is cleared either way.
    ///
    /// # Errors
    /// Returns `EngineError::WordListExhausted` if a next word was needed but
    /// none was left.
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, EngineError> {
        self.update_guess(String::new());

        if self.state().is_game_over {
            debug!("guess ignored, game over");
            return Ok(GuessOutcome::Ignored);
        }

        if guess.to_lowercase() == self.current_word.to_lowercase() {
            let updated_score = self.state().score.saturating_add(self.config.score_increment);
            debug!(score = updated_score, "correct guess");
            self.advance(updated_score)?;
            Ok(GuessOutcome::Correct)
        } else {
            debug!(guess, "wrong guess");
            self.state.update(GameState::with_wrong_guess);
            Ok(GuessOutcome::Wrong)
        }
    }

    /// Move on to the next word without changing the score
    ///
    /// # Errors
    /// Returns `EngineError::WordListExhausted` if a next word was needed but
    /// none was left.
    pub fn skip_word(&mut self) -> Result<(), EngineError> {
        self.update_guess(String::new());

        if self.state().is_game_over {
            debug!("skip ignored, game over");
            return Ok(());
        }

        let score = self.state().score;
        debug!(word_count = self.state().word_count, "skipping word");
        self.advance(score)
    }

    /// Forget used words and start a new game from zero
    ///
    /// # Errors
    /// Propagates errors from picking the first word.
    pub fn reset_game(&mut self) -> Result<(), EngineError> {
        self.deck.reset();
        let scrambled = self.pick_next_word()?;
        info!(round_length = self.round_length(), "new game");
        self.state.set(GameState::new_game(scrambled));
        Ok(())
    }

    /// Draw an unused word, make it the hidden word and return it scrambled
    ///
    /// # Errors
    /// Returns `EngineError::WordListExhausted` when every word has been used.
    pub fn pick_next_word(&mut self) -> Result<String, EngineError> {
        let word = self.deck.draw(&mut self.rng)?;
        let scrambled = scramble(&word, &mut self.rng)?;
        self.current_word = word;
        Ok(scrambled)
    }

    fn advance(&mut self, score: u32) -> Result<(), EngineError> {
        let word_count = self.state().word_count + 1;

        if word_count >= self.round_length() {
            info!(score, word_count, "game over");
            self.state.update(|current| GameState {
                score,
                word_count,
                is_guess_wrong: false,
                is_game_over: true,
                ..current.clone()
            });
            return Ok(());
        }

        let scrambled_word = self.pick_next_word()?;
        self.state.set(GameState {
            scrambled_word,
            score,
            word_count,
            is_guess_wrong: false,
            is_game_over: false,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const WORDS: &[&str] = &[
        "animal", "balloon", "camera", "dinosaur", "elephant", "flowers", "guitar", "honey",
        "igloo", "journal", "kitchen", "lemon",
    ];

    fn engine(words: &[&str], config: GameConfig) -> GameEngine {
        GameEngine::seeded(WordList::new(words).unwrap(), config, 1234).unwrap()
    }

    fn default_engine() -> GameEngine {
        engine(WORDS, GameConfig::default())
    }

    fn sorted(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn new_engine_starts_fresh_game() {
        let engine = default_engine();
        let state = engine.state();

        assert_eq!(state.score, 0);
        assert_eq!(state.word_count, 0);
        assert!(!state.is_guess_wrong);
        assert!(!state.is_game_over);
        assert_eq!(engine.used_word_count(), 1);
        assert!(engine.is_word_used(&engine.current_word));
        assert_eq!(engine.user_guess(), "");
    }

    #[test]
    fn scrambled_word_is_permutation_of_current() {
        let mut engine = default_engine();
        for _ in 0..5 {
            let state = engine.state();
            assert_ne!(state.scrambled_word, engine.current_word);
            assert_eq!(sorted(&state.scrambled_word), sorted(&engine.current_word));
            engine.skip_word().unwrap();
        }
    }

    #[test]
    fn correct_guess_scores_and_advances() {
        let mut engine = default_engine();
        let word = engine.current_word.clone();

        engine.update_guess(word.to_uppercase());
        let outcome = engine.check_user_guess().unwrap();

        assert_eq!(outcome, GuessOutcome::Correct);
        let state = engine.state();
        assert_eq!(state.score, 20);
        assert_eq!(state.word_count, 1);
        assert!(!state.is_guess_wrong);
        assert_eq!(engine.user_guess(), "");
        assert_ne!(engine.current_word, word);
        assert_eq!(engine.used_word_count(), 2);
    }

    #[test]
    fn mixed_case_guess_matches() {
        let mut engine = default_engine();
        let word = engine.current_word.clone();
        let mixed: String = word
            .chars()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
            .collect();
        assert_eq!(engine.submit_guess(&mixed).unwrap(), GuessOutcome::Correct);
    }

    #[test]
    fn wrong_guess_sets_flag_only() {
        let mut engine = default_engine();
        let before = engine.state().clone();

        engine.update_guess("definitely not it");
        let outcome = engine.check_user_guess().unwrap();

        assert_eq!(outcome, GuessOutcome::Wrong);
        let state = engine.state();
        assert!(state.is_guess_wrong);
        assert_eq!(state.score, before.score);
        assert_eq!(state.word_count, before.word_count);
        assert_eq!(state.scrambled_word, before.scrambled_word);
        assert_eq!(engine.user_guess(), "");
    }

    #[test]
    fn guess_is_not_trimmed() {
        let mut engine = default_engine();
        let padded = format!(" {} ", engine.current_word);
        assert_eq!(engine.submit_guess(&padded).unwrap(), GuessOutcome::Wrong);
        assert_eq!(engine.submit_guess("").unwrap(), GuessOutcome::Wrong);
    }

    #[test]
    fn next_transition_clears_wrong_flag() {
        let mut engine = default_engine();
        engine.submit_guess("nope").unwrap();
        assert!(engine.state().is_guess_wrong);

        let word = engine.current_word.clone();
        engine.submit_guess(&word).unwrap();
        assert!(!engine.state().is_guess_wrong);
    }

    #[test]
    fn skip_keeps_score_and_counts_word() {
        let mut engine = default_engine();
        let word = engine.current_word.clone();
        engine.submit_guess(&word).unwrap();
        engine.submit_guess("wrong").unwrap();
        engine.update_guess("half typed");

        engine.skip_word().unwrap();

        let state = engine.state();
        assert_eq!(state.score, 20);
        assert_eq!(state.word_count, 2);
        assert!(!state.is_guess_wrong);
        assert_eq!(engine.user_guess(), "");
    }

    #[test]
    fn words_are_not_repeated_within_a_game() {
        let mut engine = default_engine();
        let mut seen = vec![engine.current_word.clone()];
        while !engine.state().is_game_over {
            engine.skip_word().unwrap();
            if !engine.state().is_game_over {
                assert!(!seen.contains(&engine.current_word));
                seen.push(engine.current_word.clone());
            }
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn game_ends_after_round_length() {
        let mut engine = default_engine();
        for _ in 0..9 {
            let word = engine.current_word.clone();
            engine.submit_guess(&word).unwrap();
        }
        assert!(!engine.state().is_game_over);
        let last_scramble = engine.state().scrambled_word.clone();

        let word = engine.current_word.clone();
        engine.submit_guess(&word).unwrap();

        let state = engine.state();
        assert!(state.is_game_over);
        assert_eq!(state.score, 200);
        assert_eq!(state.word_count, 10);
        assert_eq!(state.scrambled_word, last_scramble);
        assert_eq!(engine.used_word_count(), 10);
    }

    #[test]
    fn game_over_ignores_input() {
        let mut engine = engine(&["kotlin", "rust"], GameConfig::new(20, 1));
        engine.skip_word().unwrap();
        let over = engine.state().clone();
        assert!(over.is_game_over);

        engine.update_guess("anything");
        assert_eq!(engine.check_user_guess().unwrap(), GuessOutcome::Ignored);
        engine.skip_word().unwrap();

        assert_eq!(engine.state(), &over);
        assert_eq!(engine.user_guess(), "");
    }

    #[test]
    fn single_word_list_ends_instead_of_hanging() {
        let mut engine = engine(&["kotlin"], GameConfig::new(20, 10));
        assert_eq!(engine.round_length(), 1);
        assert_ne!(engine.state().scrambled_word, "kotlin");

        assert_eq!(engine.submit_guess("KOTLIN").unwrap(), GuessOutcome::Correct);

        let state = engine.state();
        assert_eq!(state.score, 20);
        assert_eq!(state.word_count, 1);
        assert!(state.is_game_over);
    }

    #[test]
    fn pick_next_word_reports_exhaustion() {
        let mut engine = engine(&["kotlin"], GameConfig::default());
        assert_eq!(
            engine.pick_next_word(),
            Err(EngineError::WordListExhausted { total: 1 })
        );
    }

    #[test]
    fn reset_starts_over() {
        let mut engine = default_engine();
        for _ in 0..3 {
            let word = engine.current_word.clone();
            engine.submit_guess(&word).unwrap();
        }
        engine.submit_guess("wrong").unwrap();

        engine.reset_game().unwrap();

        let state = engine.state();
        assert_eq!(state.score, 0);
        assert_eq!(state.word_count, 0);
        assert!(!state.is_guess_wrong);
        assert!(!state.is_game_over);
        assert_eq!(engine.used_word_count(), 1);
        assert!(engine.is_word_used(&engine.current_word));
    }

    #[test]
    fn reset_after_game_over_allows_replay() {
        let mut engine = engine(&["kotlin"], GameConfig::default());
        engine.skip_word().unwrap();
        assert!(engine.state().is_game_over);

        engine.reset_game().unwrap();
        assert!(!engine.state().is_game_over);
        assert_eq!(engine.current_word, "kotlin");
    }

    #[test]
    fn custom_score_increment() {
        let mut engine = engine(WORDS, GameConfig::new(7, 10));
        let word = engine.current_word.clone();
        engine.submit_guess(&word).unwrap();
        assert_eq!(engine.state().score, 7);
    }

    #[test]
    fn invalid_config_rejected() {
        let words = WordList::new(WORDS).unwrap();
        assert!(matches!(
            GameEngine::seeded(words, GameConfig::new(0, 10), 1),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn overflowing_score_increment_rejected() {
        let words = WordList::new(["kotlin", "rust", "swift"]).unwrap();
        assert!(matches!(
            GameEngine::seeded(words, GameConfig::new(u32::MAX, 10), 1),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn largest_valid_increment_scores_full_game() {
        let mut engine = engine(&["kotlin", "rust", "swift"], GameConfig::new(u32::MAX / 10, 10));
        for _ in 0..3 {
            let word = engine.current_word.clone();
            assert_eq!(engine.submit_guess(&word).unwrap(), GuessOutcome::Correct);
        }
        assert_eq!(engine.state().score, u32::MAX / 10 * 3);
        assert!(engine.state().is_game_over);
    }

    #[test]
    fn same_seed_same_game() {
        let first = default_engine();
        let second = default_engine();
        assert_eq!(first.state(), second.state());
        assert_eq!(first.current_word, second.current_word);
    }

    #[test]
    fn subscribers_see_each_snapshot() {
        let mut engine = default_engine();
        let seen: Rc<RefCell<Vec<GameState>>> = Rc::default();
        let sink = Rc::clone(&seen);
        engine.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        engine.submit_guess("wrong").unwrap();
        engine.submit_guess("still wrong").unwrap();
        engine.skip_word().unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(!seen[0].is_guess_wrong);
        assert!(seen[1].is_guess_wrong);
        assert_eq!(seen[2].word_count, 1);
        assert_eq!(&seen[2], engine.state());
    }

    #[test]
    fn guess_subscribers_track_buffer() {
        let mut engine = default_engine();
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let id = engine.subscribe_guess(move |guess| sink.borrow_mut().push(guess.clone()));

        engine.update_guess("k");
        engine.update_guess("ko");
        engine.check_user_guess().unwrap();
        assert!(engine.unsubscribe_guess(id));
        engine.update_guess("ignored");

        assert_eq!(*seen.borrow(), vec!["", "k", "ko", ""]);
    }
}
