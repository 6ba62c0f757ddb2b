//! Unscramble
//!
//! A word-scramble game: a word is picked at random, its letters are shuffled,
//! and the player has to find the original word. Correct guesses score
//! points; a game lasts a fixed number of words.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::core::WordList;
//! use unscramble::engine::{GameConfig, GameEngine, GuessOutcome};
//!
//! let words = WordList::new(["kotlin"]).unwrap();
//! let mut engine = GameEngine::seeded(words, GameConfig::default(), 42).unwrap();
//! assert_ne!(engine.state().scrambled_word, "kotlin");
//!
//! assert_eq!(engine.submit_guess("KOTLIN").unwrap(), GuessOutcome::Correct);
//! assert_eq!(engine.state().score, 20);
//! assert!(engine.state().is_game_over);
//! ```

// Core domain types
pub mod core;

// Game session engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;
