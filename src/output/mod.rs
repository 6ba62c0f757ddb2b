//! Terminal output formatting
//!
//! Display utilities for text-mode play and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{write_game_over, write_help, write_outcome, write_state};
