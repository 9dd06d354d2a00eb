//! Domain events for the Word game context.

use serde::Serialize;

use super::performance::{WordPerformance, WordStats};
use super::word::WordMode;

/// What happened during one transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WordEvent {
    /// A new word is in play.
    WordPresented {
        /// Zero-based word index.
        index: usize,
        /// Number of words.
        total: usize,
        /// Game mode.
        mode: WordMode,
    },
    /// A hangman guess matched.
    LetterRevealed {
        /// The letter.
        letter: char,
        /// How many positions it filled.
        occurrences: usize,
        /// Points added.
        points: i32,
        /// Score after the guess.
        score: i32,
    },
    /// A hangman guess missed.
    LetterMissed {
        /// The letter.
        letter: char,
        /// Misses on this word so far.
        incorrect: u32,
    },
    /// The word was solved.
    WordCompleted {
        /// The word.
        word: String,
        /// Points for this step (completion bonus or scramble award).
        points: i32,
        /// Score after the award.
        score: i32,
    },
    /// Hangman ran out of guesses.
    WordFailed {
        /// The word, now revealed.
        word: String,
    },
    /// A scramble answer was wrong; nothing else changed.
    AnswerRejected {
        /// The normalised answer.
        answer: String,
    },
    /// The hint was revealed for a penalty.
    HintShown {
        /// The hint text.
        hint: String,
        /// Points deducted.
        penalty: i32,
        /// Score after the penalty.
        score: i32,
    },
    /// The word was skipped for a penalty.
    WordSkipped {
        /// The word.
        word: String,
        /// Points deducted.
        penalty: i32,
        /// Score after the penalty.
        score: i32,
    },
    /// One countdown second elapsed.
    TimerTicked {
        /// Seconds remaining.
        time_left: u32,
    },
    /// The countdown reached zero.
    TimeUp,
    /// The game is over.
    GameEnded {
        /// Final score.
        score: i32,
        /// Completion statistics.
        stats: WordStats,
        /// Result band.
        performance: WordPerformance,
    },
    /// The action did not apply in the current state.
    ActionIgnored {
        /// Why it was ignored.
        reason: String,
    },
}
