//! Core domain types for the word-scramble game
//!
//! This module contains the fundamental domain types: the published game
//! snapshot, the validated word list, the scrambling rule and the observable
//! holder used to publish state. Nothing here owns a session.

mod error;
mod observable;
mod shuffle;
mod state;
mod word_list;

pub use error::EngineError;
pub use observable::{Observable, SubscriptionId};
pub use shuffle::{is_scramblable, scramble};
pub use state::GameState;
pub use word_list::WordList;
