//! One-shot scramble command
//!
//! Shuffles a single word the same way the game does.

use crate::core::scramble;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Result of scrambling a word
pub struct ScrambleResult {
    pub word: String,
    pub scrambled: String,
}

/// Scramble `word`, reproducibly when a seed is given
///
/// # Errors
///
/// Returns an error if the word has fewer than two distinct letters.
pub fn scramble_word(word: &str, seed: Option<u64>) -> Result<ScrambleResult, String> {
    let word = word.trim().to_lowercase();
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    let scrambled = scramble(&word, &mut rng).map_err(|e| e.to_string())?;
    Ok(ScrambleResult { word, scrambled })
}
