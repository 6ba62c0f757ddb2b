//! Engine error type

use std::fmt;

/// Errors raised by word-list validation, word selection and configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The word list contained no usable words
    EmptyWordList,
    /// A word has no permutation that differs from itself
    UnscramblableWord(String),
    /// Every word in the list has already been used this session
    WordListExhausted { total: usize },
    /// A configuration value is out of range
    InvalidConfig(&'static str),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::UnscramblableWord(word) => {
                write!(f, "Word '{word}' needs at least two distinct letters")
            }
            Self::WordListExhausted { total } => {
                write!(f, "All {total} words have already been used")
            }
            Self::InvalidConfig(reason) => write!(f, "Invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}
