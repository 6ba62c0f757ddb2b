//! Word lists for the game
//!
//! Provides the default word list compiled into the binary and loaders for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
