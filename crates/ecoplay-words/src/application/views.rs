//! Read-only projections of a word game session.

use ecoplay_core::content::ContentOrigin;
use serde::Serialize;

use crate::domain::aggregates::{MAX_INCORRECT_GUESSES, WordPhase, WordRecord, WordSession};
use crate::domain::performance::{WordPerformance, WordStats};
use crate::domain::word::{Difficulty, WordEntry, WordMode, WordSettings};

/// What is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum WordScreen {
    /// Hangman board.
    Hangman {
        /// One slot per letter; `None` until revealed.
        slots: Vec<Option<char>>,
        /// Letters guessed so far, in order.
        guessed: Vec<char>,
        /// Misses on this word.
        incorrect: u32,
        /// Misses allowed.
        max_incorrect: u32,
        /// Hint, once taken.
        hint: Option<String>,
        /// Phase of the word.
        phase: WordPhase,
    },
    /// Scramble board.
    Scramble {
        /// The letters to rearrange.
        scrambled: String,
        /// The answer, once solved.
        solution: Option<String>,
        /// Hint, once taken.
        hint: Option<String>,
        /// Phase of the word.
        phase: WordPhase,
    },
    /// Results.
    Results {
        /// Completion statistics.
        stats: WordStats,
        /// Result band.
        performance: WordPerformance,
        /// Message for the band.
        message: &'static str,
        /// Every word played.
        history: Vec<WordRecord>,
    },
}

/// Projection of one word game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordView {
    /// Game mode.
    pub mode: WordMode,
    /// Word difficulty.
    pub difficulty: Difficulty,
    /// Score so far.
    pub score: i32,
    /// One-based position of the current word.
    pub position: usize,
    /// Number of words.
    pub total: usize,
    /// Seconds left, in timed games.
    pub time_left: Option<u32>,
    /// Where the words came from.
    pub origin: ContentOrigin,
    /// What is on screen.
    pub screen: WordScreen,
}

pub(crate) fn project(
    words: &[WordEntry],
    settings: WordSettings,
    origin: ContentOrigin,
    session: &WordSession,
) -> WordView {
    let current = words
        .get(session.index)
        .filter(|_| session.phase != WordPhase::Ended);
    let screen = match current {
        Some(entry) => {
            let hint = (session.hints_used > 0).then(|| entry.hint.clone());
            match session.mode {
                WordMode::Hangman => WordScreen::Hangman {
                    slots: entry
                        .word
                        .chars()
                        .map(|c| {
                            (session.phase == WordPhase::WordFailed || session.guessed.contains(&c))
                                .then_some(c)
                        })
                        .collect(),
                    guessed: session.guessed.clone(),
                    incorrect: session.incorrect,
                    max_incorrect: MAX_INCORRECT_GUESSES,
                    hint,
                    phase: session.phase,
                },
                WordMode::Scramble => WordScreen::Scramble {
                    scrambled: session.scrambled.clone(),
                    solution: (session.phase == WordPhase::WordComplete)
                        .then(|| entry.word.clone()),
                    hint,
                    phase: session.phase,
                },
            }
        }
        None => {
            let performance = WordPerformance::classify(session.score);
            WordScreen::Results {
                stats: session.stats(),
                performance,
                message: performance.message(),
                history: session.history.clone(),
            }
        }
    };

    WordView {
        mode: settings.mode,
        difficulty: settings.difficulty,
        score: session.score,
        position: (session.index + 1).min(words.len()),
        total: words.len(),
        time_left: settings.timed.then_some(session.time_left),
        origin,
        screen,
    }
}
