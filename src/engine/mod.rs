//! Game session engine
//!
//! Word selection, guess evaluation and state progression.

mod config;
mod deck;
mod game;

pub use config::{DEFAULT_MAX_WORDS, DEFAULT_SCORE_INCREMENT, GameConfig};
pub use deck::WordDeck;
pub use game::{GameEngine, GuessOutcome};
