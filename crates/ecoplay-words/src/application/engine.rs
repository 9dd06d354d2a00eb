//! The Word game engine.

use ecoplay_core::content::ContentOrigin;
use ecoplay_core::engine::{Directive, Game, Input, Step};
use ecoplay_core::rng::DeterministicRng;

use crate::application::views::{self, WordView};
use crate::domain::aggregates::{Outbox, WordSession};
use crate::domain::commands::WordAction;
use crate::domain::events::WordEvent;
use crate::domain::word::{WordEntry, WordSettings};

/// A word game bound to the words and settings of one playthrough.
#[derive(Debug, Clone)]
pub struct WordGame {
    words: Vec<WordEntry>,
    settings: WordSettings,
    time_limit_secs: u32,
    origin: ContentOrigin,
}

impl WordGame {
    /// Creates an engine over `words`.
    #[must_use]
    pub fn new(
        words: Vec<WordEntry>,
        settings: WordSettings,
        time_limit_secs: u32,
        origin: ContentOrigin,
    ) -> Self {
        Self {
            words,
            settings,
            time_limit_secs,
            origin,
        }
    }

    /// The loaded words.
    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Settings chosen at start.
    #[must_use]
    pub fn settings(&self) -> WordSettings {
        self.settings
    }

    /// Where the words came from.
    #[must_use]
    pub fn origin(&self) -> ContentOrigin {
        self.origin
    }

    fn step(state: WordSession, out: Outbox) -> Step<WordSession, WordEvent> {
        Step {
            state,
            events: out.events,
            directives: out.directives,
        }
    }
}

impl Game for WordGame {
    type State = WordSession;
    type Action = WordAction;
    type Event = WordEvent;
    type View = WordView;

    fn name(&self) -> &'static str {
        "words"
    }

    fn start(&self, rng: &mut dyn DeterministicRng) -> Step<WordSession, WordEvent> {
        let mut session =
            WordSession::new(self.settings.mode, self.settings.timed, self.time_limit_secs);
        let mut out = Outbox::default();
        if self.settings.timed && !self.words.is_empty() {
            out.directives.push(Directive::StartCountdown);
        }
        session.present(&self.words, 0, rng, &mut out);
        Self::step(session, out)
    }

    fn reduce(
        &self,
        mut state: WordSession,
        input: Input<WordAction>,
        rng: &mut dyn DeterministicRng,
    ) -> Step<WordSession, WordEvent> {
        let mut out = Outbox::default();
        match input {
            Input::Player(WordAction::Guess { letter }) => {
                state.guess_letter(&self.words, &letter, &mut out);
            }
            Input::Player(WordAction::Submit { answer }) => {
                state.submit_answer(&self.words, &answer, &mut out);
            }
            Input::Player(WordAction::Hint) => state.use_hint(&self.words, &mut out),
            Input::Player(WordAction::Skip) => state.skip(&self.words, rng, &mut out),
            Input::Deferred(ticket) => state.on_deferred(&self.words, ticket, rng, &mut out),
            Input::Tick => state.on_tick(&mut out),
        }
        Self::step(state, out)
    }

    fn view(&self, state: &WordSession) -> WordView {
        views::project(&self.words, self.settings, self.origin, state)
    }

    fn is_ended(&self, state: &WordSession) -> bool {
        state.is_ended()
    }
}

#[cfg(test)]
mod tests {
    use ecoplay_core::content::ContentOrigin;
    use ecoplay_core::engine::{Directive, Game, Input};
    use ecoplay_test_support::MockRng;

    use super::WordGame;
    use crate::application::fallback::fallback_words;
    use crate::domain::commands::WordAction;
    use crate::domain::word::{Difficulty, WordMode, WordSettings};

    fn game(mode: WordMode, timed: bool) -> WordGame {
        WordGame::new(
            fallback_words(Difficulty::Easy),
            WordSettings {
                difficulty: Difficulty::Easy,
                mode,
                timed,
            },
            60,
            ContentOrigin::Fallback,
        )
    }

    #[test]
    fn test_timed_start_requests_countdown() {
        let game = game(WordMode::Hangman, true);

        let step = game.start(&mut MockRng);

        assert_eq!(step.directives, vec![Directive::StartCountdown]);
    }

    #[test]
    fn test_untimed_start_has_no_countdown() {
        let game = game(WordMode::Scramble, false);

        let step = game.start(&mut MockRng);

        assert!(step.directives.is_empty());
        assert_ne!(step.state.scrambled, "RECYCLE");
    }

    #[test]
    fn test_skipping_every_word_ends_game() {
        // Arrange
        let game = game(WordMode::Hangman, false);
        let mut rng = MockRng;
        let mut step = game.start(&mut rng);

        // Act
        for _ in 0..10 {
            step = game.reduce(step.state, Input::Player(WordAction::Skip), &mut rng);
        }

        // Assert
        assert!(game.is_ended(&step.state));
        assert_eq!(step.state.score, -100);
        assert_eq!(step.state.stats().completion_rate, 0);
    }

    #[test]
    fn test_deferred_input_advances_after_solve() {
        let game = game(WordMode::Scramble, false);
        let mut rng = MockRng;
        let step = game.start(&mut rng);
        let step = game.reduce(
            step.state,
            Input::Player(WordAction::Submit {
                answer: "recycle".to_owned(),
            }),
            &mut rng,
        );
        let Some(Directive::AdvanceAfter { ticket, .. }) = step.directives.first().copied() else {
            panic!("expected a deferred advance");
        };

        let step = game.reduce(step.state, Input::Deferred(ticket), &mut rng);

        assert_eq!(step.state.index, 1);
        assert_eq!(step.state.score, 17);
    }
}
