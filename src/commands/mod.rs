//! Command implementations

pub mod scramble;
pub mod simple;

pub use scramble::{ScrambleResult, scramble_word};
pub use simple::run_simple;
