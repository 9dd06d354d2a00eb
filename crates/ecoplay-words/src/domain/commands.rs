//! Player actions for the Word game context.

use serde::Deserialize;

/// An action the presentation adapter forwards to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WordAction {
    /// Hangman: guess one letter.
    Guess {
        /// The letter; case-insensitive.
        letter: String,
    },
    /// Scramble: submit an answer.
    Submit {
        /// The typed answer.
        answer: String,
    },
    /// Reveal the current word's hint.
    Hint,
    /// Give up on the current word.
    Skip,
}
