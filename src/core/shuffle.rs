//! Letter scrambling
//!
//! Produces a random permutation of a word's characters that never reads the
//! same as the original.

use super::EngineError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Check whether a word has at least one permutation different from itself
///
/// True exactly when the word contains two or more distinct characters.
#[must_use]
pub fn is_scramblable(word: &str) -> bool {
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|first| chars.any(|c| c != first))
}

/// Shuffle the characters of `word`, retrying until the result differs from it
///
/// Each attempt is a uniform permutation, so the output is uniform over all
/// arrangements except the identity.
///
/// # Errors
/// Returns `EngineError::UnscramblableWord` if every arrangement of the word
/// is identical to it (empty, single letter, or one repeated letter).
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use unscramble::core::scramble;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let scrambled = scramble("kotlin", &mut rng).unwrap();
/// assert_ne!(scrambled, "kotlin");
/// assert_eq!(scrambled.len(), 6);
///
/// assert!(scramble("zz", &mut rng).is_err());
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Result<String, EngineError> {
    if !is_scramblable(word) {
        return Err(EngineError::UnscramblableWord(word.to_string()));
    }

    let mut letters: Vec<char> = word.chars().collect();
    loop {
        letters.shuffle(rng);
        let candidate: String = letters.iter().collect();
        if candidate != word {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted_chars(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn scramble_is_permutation_and_differs() {
        let mut rng = StdRng::seed_from_u64(42);
        for word in ["kotlin", "ab", "yoyo", "balloon", "cauliflower", "x-ray"] {
            for _ in 0..50 {
                let scrambled = scramble(word, &mut rng).unwrap();
                assert_ne!(scrambled, word);
                assert_eq!(sorted_chars(&scrambled), sorted_chars(word));
            }
        }
    }

    #[test]
    fn two_letter_word_has_one_answer() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(scramble("ab", &mut rng).unwrap(), "ba");
        }
    }

    #[test]
    fn multibyte_characters_stay_whole() {
        let mut rng = StdRng::seed_from_u64(3);
        let scrambled = scramble("héllo", &mut rng).unwrap();
        assert_ne!(scrambled, "héllo");
        assert_eq!(sorted_chars(&scrambled), sorted_chars("héllo"));
    }

    #[test]
    fn unscramblable_words_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            scramble("", &mut rng),
            Err(EngineError::UnscramblableWord(_))
        ));
        assert!(matches!(
            scramble("a", &mut rng),
            Err(EngineError::UnscramblableWord(_))
        ));
        assert!(matches!(
            scramble("zzzz", &mut rng),
            Err(EngineError::UnscramblableWord(w)) if w == "zzzz"
        ));
    }

    #[test]
    fn is_scramblable_checks_distinct_letters() {
        assert!(is_scramblable("ab"));
        assert!(is_scramblable("aab"));
        assert!(!is_scramblable("aaa"));
        assert!(!is_scramblable("q"));
        assert!(!is_scramblable(""));
    }
}
