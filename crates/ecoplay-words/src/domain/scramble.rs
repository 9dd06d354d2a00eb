//! Letter scrambling for the scramble mode.

use ecoplay_core::rng::{DeterministicRng, shuffle};

/// Shuffles tried before falling back to a rotation.
pub const SCRAMBLE_ATTEMPTS: usize = 32;

/// Returns a permutation of `word` that differs from it.
///
/// Words with fewer than two distinct letters have no such permutation and
/// are returned unchanged. Otherwise a bounded number of shuffles is tried;
/// if all of them reproduce the word, the letters are rotated by one, which
/// always differs when at least two letters differ.
#[must_use]
pub fn scramble_word(word: &str, rng: &mut dyn DeterministicRng) -> String {
    let letters: Vec<char> = word.chars().collect();
    let Some(first) = letters.first() else {
        return String::new();
    };
    if letters.iter().all(|c| c == first) {
        return word.to_owned();
    }

    for _ in 0..SCRAMBLE_ATTEMPTS {
        let mut candidate = letters.clone();
        shuffle(&mut candidate, rng);
        if candidate != letters {
            return candidate.into_iter().collect();
        }
    }

    let mut rotated = letters;
    rotated.rotate_left(1);
    rotated.into_iter().collect()
}
