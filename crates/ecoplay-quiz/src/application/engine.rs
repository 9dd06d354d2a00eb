//! The Quiz engine.

use ecoplay_core::engine::{Game, Input, Step};
use ecoplay_core::rng::DeterministicRng;
use tracing::warn;

use crate::application::views::{self, QuizView};
use crate::domain::aggregates::QuizSession;
use crate::domain::commands::QuizAction;
use crate::domain::events::QuizEvent;
use crate::domain::question::Question;

/// A quiz bound to the questions of one playthrough.
#[derive(Debug, Clone)]
pub struct QuizGame {
    questions: Vec<Question>,
}

impl QuizGame {
    /// Creates an engine over `questions`.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The loaded questions.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl Game for QuizGame {
    type State = QuizSession;
    type Action = QuizAction;
    type Event = QuizEvent;
    type View = QuizView;

    fn name(&self) -> &'static str {
        "quiz"
    }

    fn start(&self, _rng: &mut dyn DeterministicRng) -> Step<QuizSession, QuizEvent> {
        let mut session = QuizSession::new();
        let mut events = Vec::new();
        if session.load_question(&self.questions, 0, &mut events).is_err() {
            session.end(self.questions.len(), &mut events);
        }
        Step {
            state: session,
            events,
            directives: Vec::new(),
        }
    }

    fn reduce(
        &self,
        mut state: QuizSession,
        input: Input<QuizAction>,
        _rng: &mut dyn DeterministicRng,
    ) -> Step<QuizSession, QuizEvent> {
        let mut events = Vec::new();
        match input {
            Input::Player(QuizAction::Select { option }) => {
                state.select_option(&self.questions, &option, &mut events);
            }
            Input::Player(QuizAction::Next) => {
                if let Err(e) = state.next_question(&self.questions, &mut events) {
                    warn!(error = %e, "quiz could not advance; ending");
                    state.end(self.questions.len(), &mut events);
                }
            }
            Input::Deferred(_) | Input::Tick => return Step::quiet(state),
        }
        Step {
            state,
            events,
            directives: Vec::new(),
        }
    }

    fn view(&self, state: &QuizSession) -> QuizView {
        views::project(&self.questions, state)
    }

    fn is_ended(&self, state: &QuizSession) -> bool {
        state.is_ended()
    }
}
