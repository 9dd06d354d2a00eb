//! Session state for the Word game context.

use std::time::Duration;

use ecoplay_core::engine::Directive;
use ecoplay_core::rng::DeterministicRng;
use ecoplay_core::schedule::{Schedule, Ticket};
use serde::Serialize;

use super::events::WordEvent;
use super::performance::{WordPerformance, WordStats};
use super::scramble::scramble_word;
use super::word::{WordEntry, WordMode};

/// Points per revealed letter occurrence.
pub const POINTS_PER_LETTER: i32 = 5;
/// Bonus for completing a hangman word.
pub const WORD_BONUS: i32 = 20;
/// Base award for an unscrambled word.
pub const SCRAMBLE_BASE_POINTS: i32 = 10;
/// Cap on the scramble time bonus.
pub const MAX_TIME_BONUS: i32 = 10;
/// Seconds of remaining time per point of scramble time bonus.
pub const SECONDS_PER_TIME_BONUS: u32 = 6;
/// Deducted per hint.
pub const HINT_PENALTY: i32 = 5;
/// Deducted per skip.
pub const SKIP_PENALTY: i32 = 10;
/// Hangman misses allowed per word.
pub const MAX_INCORRECT_GUESSES: u32 = 10;

/// Pause after a solved word.
pub const COMPLETE_DELAY: Duration = Duration::from_millis(1500);
/// Pause after a failed hangman word.
pub const FAILED_DELAY: Duration = Duration::from_millis(2000);

/// Outcome of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    /// The word.
    pub word: String,
    /// Solved.
    pub completed: bool,
    /// Skipped.
    pub skipped: bool,
    /// At least one hint was used on it.
    pub hint_used: bool,
}

/// Where the current word stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordPhase {
    /// Accepting guesses or answers.
    Playing,
    /// Solved; waiting for the deferred advance.
    WordComplete,
    /// Out of guesses; waiting for the deferred advance.
    WordFailed,
    /// Terminal.
    Ended,
}

/// Events and directives produced by one transition.
#[derive(Debug, Default)]
pub struct Outbox {
    /// Events, in order.
    pub events: Vec<WordEvent>,
    /// Scheduling requests.
    pub directives: Vec<Directive>,
}

impl Outbox {
    fn ignore(&mut self, reason: &str) {
        self.events.push(WordEvent::ActionIgnored {
            reason: reason.to_owned(),
        });
    }
}

/// Mutable state of one word game.
#[derive(Debug, Clone)]
pub struct WordSession {
    /// Game mode.
    pub mode: WordMode,
    /// Whether the countdown runs.
    pub timed: bool,
    /// Score; may go negative.
    pub score: i32,
    /// Zero-based index of the current word.
    pub index: usize,
    /// Seconds left on the countdown.
    pub time_left: u32,
    /// Phase of the current word.
    pub phase: WordPhase,
    /// Hangman letters guessed on the current word, in order.
    pub guessed: Vec<char>,
    /// Hangman misses on the current word.
    pub incorrect: u32,
    /// Scrambled form of the current word.
    pub scrambled: String,
    /// Hints taken on the current word.
    pub hints_used: u32,
    /// One record per finished word.
    pub history: Vec<WordRecord>,
    schedule: Schedule,
}

impl WordSession {
    /// A session with no word presented yet.
    #[must_use]
    pub fn new(mode: WordMode, timed: bool, time_limit_secs: u32) -> Self {
        Self {
            mode,
            timed,
            score: 0,
            index: 0,
            time_left: time_limit_secs,
            phase: WordPhase::Ended,
            guessed: Vec::new(),
            incorrect: 0,
            scrambled: String::new(),
            hints_used: 0,
            history: Vec::new(),
            schedule: Schedule::default(),
        }
    }

    /// Puts word `index` in play, or ends the game past the last word.
    pub fn present(
        &mut self,
        words: &[WordEntry],
        index: usize,
        rng: &mut dyn DeterministicRng,
        out: &mut Outbox,
    ) {
        self.index = index;
        self.guessed.clear();
        self.incorrect = 0;
        self.hints_used = 0;
        let Some(entry) = words.get(index) else {
            self.end(out);
            return;
        };
        self.scrambled = match self.mode {
            WordMode::Scramble => scramble_word(&entry.word, rng),
            WordMode::Hangman => String::new(),
        };
        self.phase = WordPhase::Playing;
        out.events.push(WordEvent::WordPresented {
            index,
            total: words.len(),
            mode: self.mode,
        });
    }

    /// Hangman: applies one guessed letter.
    ///
    /// Anything other than a single ASCII letter, and letters already
    /// guessed, are ignored.
    pub fn guess_letter(&mut self, words: &[WordEntry], raw: &str, out: &mut Outbox) {
        if self.mode != WordMode::Hangman {
            out.ignore("guessing letters is a hangman action");
            return;
        }
        let Some(entry) = self.playable(words, out) else {
            return;
        };
        let Some(letter) = parse_letter(raw) else {
            out.ignore("not a letter");
            return;
        };
        if self.guessed.contains(&letter) {
            out.ignore("letter already guessed");
            return;
        }
        self.guessed.push(letter);

        let occurrences = entry.word.chars().filter(|c| *c == letter).count();
        if occurrences == 0 {
            self.incorrect += 1;
            out.events.push(WordEvent::LetterMissed {
                letter,
                incorrect: self.incorrect,
            });
            if self.incorrect >= MAX_INCORRECT_GUESSES {
                self.record(&entry.word, false, false);
                self.phase = WordPhase::WordFailed;
                out.events.push(WordEvent::WordFailed {
                    word: entry.word.clone(),
                });
                out.directives.push(self.schedule.defer(FAILED_DELAY));
            }
            return;
        }

        let points =
            POINTS_PER_LETTER.saturating_mul(i32::try_from(occurrences).unwrap_or(i32::MAX));
        self.score = self.score.saturating_add(points);
        out.events.push(WordEvent::LetterRevealed {
            letter,
            occurrences,
            points,
            score: self.score,
        });

        if entry.word.chars().all(|c| self.guessed.contains(&c)) {
            self.score = self.score.saturating_add(WORD_BONUS);
            self.complete(&entry.word, WORD_BONUS, out);
        }
    }

    /// Scramble: checks a typed answer.
    ///
    /// Comparison is case-insensitive after trimming. Empty answers are
    /// ignored; wrong ones leave the state untouched.
    pub fn submit_answer(&mut self, words: &[WordEntry], raw: &str, out: &mut Outbox) {
        if self.mode != WordMode::Scramble {
            out.ignore("submitting answers is a scramble action");
            return;
        }
        let Some(entry) = self.playable(words, out) else {
            return;
        };
        let answer = raw.trim().to_uppercase();
        if answer.is_empty() {
            out.ignore("empty answer");
            return;
        }
        if answer != entry.word {
            out.events.push(WordEvent::AnswerRejected { answer });
            return;
        }

        let length_bonus = i32::try_from(entry.len()).unwrap_or(i32::MAX);
        let points = SCRAMBLE_BASE_POINTS
            .saturating_add(length_bonus)
            .saturating_add(self.time_bonus());
        self.score = self.score.saturating_add(points);
        self.complete(&entry.word, points, out);
    }

    /// Reveals the current word's hint for a penalty.
    pub fn use_hint(&mut self, words: &[WordEntry], out: &mut Outbox) {
        let Some(entry) = self.playable(words, out) else {
            return;
        };
        self.hints_used += 1;
        self.score = self.score.saturating_sub(HINT_PENALTY);
        out.events.push(WordEvent::HintShown {
            hint: entry.hint,
            penalty: HINT_PENALTY,
            score: self.score,
        });
    }

    /// Gives up on the current word and moves on immediately.
    ///
    /// Also cuts short the pause after a solved or failed word; that word
    /// keeps its existing record.
    pub fn skip(&mut self, words: &[WordEntry], rng: &mut dyn DeterministicRng, out: &mut Outbox) {
        let entry = match self.phase {
            WordPhase::Ended => None,
            _ => words.get(self.index).cloned(),
        };
        let Some(entry) = entry else {
            out.ignore("no word is in play");
            return;
        };
        self.score = self.score.saturating_sub(SKIP_PENALTY);
        if self.phase == WordPhase::Playing {
            self.record(&entry.word, false, true);
        }
        out.events.push(WordEvent::WordSkipped {
            word: entry.word,
            penalty: SKIP_PENALTY,
            score: self.score,
        });
        self.schedule.cancel();
        self.next_word(words, rng, out);
    }

    /// Handles a deferred advance; stale tickets are no-ops.
    pub fn on_deferred(
        &mut self,
        words: &[WordEntry],
        ticket: Ticket,
        rng: &mut dyn DeterministicRng,
        out: &mut Outbox,
    ) {
        if !self.schedule.redeem(ticket) {
            return;
        }
        if matches!(self.phase, WordPhase::WordComplete | WordPhase::WordFailed) {
            self.next_word(words, rng, out);
        }
    }

    /// Handles one countdown second; ends the game at zero.
    pub fn on_tick(&mut self, out: &mut Outbox) {
        if !self.timed || self.phase == WordPhase::Ended {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        out.events.push(WordEvent::TimerTicked {
            time_left: self.time_left,
        });
        if self.time_left == 0 {
            out.events.push(WordEvent::TimeUp);
            self.end(out);
        }
    }

    /// Moves to the following word.
    pub fn next_word(
        &mut self,
        words: &[WordEntry],
        rng: &mut dyn DeterministicRng,
        out: &mut Outbox,
    ) {
        self.present(words, self.index + 1, rng, out);
    }

    /// Completion statistics over the words played so far.
    #[must_use]
    pub fn stats(&self) -> WordStats {
        let completed = self.history.iter().filter(|r| r.completed).count();
        WordStats::new(completed, self.history.len())
    }

    /// Whether the session is terminal.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == WordPhase::Ended
    }

    /// Whether a deferred advance is outstanding.
    #[must_use]
    pub fn advance_pending(&self) -> bool {
        self.schedule.is_pending()
    }

    /// Scramble time bonus at the current countdown value.
    #[must_use]
    pub fn time_bonus(&self) -> i32 {
        if !self.timed {
            return 0;
        }
        i32::try_from(self.time_left / SECONDS_PER_TIME_BONUS)
            .unwrap_or(i32::MAX)
            .min(MAX_TIME_BONUS)
    }

    fn playable(&self, words: &[WordEntry], out: &mut Outbox) -> Option<WordEntry> {
        if self.phase != WordPhase::Playing {
            out.ignore("no word is in play");
            return None;
        }
        let entry = words.get(self.index).cloned();
        if entry.is_none() {
            out.ignore("no word is in play");
        }
        entry
    }

    fn complete(&mut self, word: &str, points: i32, out: &mut Outbox) {
        self.record(word, true, false);
        self.phase = WordPhase::WordComplete;
        out.events.push(WordEvent::WordCompleted {
            word: word.to_owned(),
            points,
            score: self.score,
        });
        out.directives.push(self.schedule.defer(COMPLETE_DELAY));
    }

    fn record(&mut self, word: &str, completed: bool, skipped: bool) {
        self.history.push(WordRecord {
            word: word.to_owned(),
            completed,
            skipped,
            hint_used: self.hints_used > 0,
        });
    }

    fn end(&mut self, out: &mut Outbox) {
        self.phase = WordPhase::Ended;
        self.schedule.cancel();
        if self.timed {
            out.directives.push(Directive::StopCountdown);
        }
        out.events.push(WordEvent::GameEnded {
            score: self.score,
            stats: self.stats(),
            performance: WordPerformance::classify(self.score),
        });
    }
}

fn parse_letter(raw: &str) -> Option<char> {
    let mut chars = raw.trim().chars();
    let letter = chars.next()?;
    if chars.next().is_some() || !letter.is_ascii_alphabetic() {
        return None;
    }
    Some(letter.to_ascii_uppercase())
}
