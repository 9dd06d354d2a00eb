//! The Eco-Adventure engine.

use ecoplay_core::content::ContentOrigin;
use ecoplay_core::engine::{Game, Input, Step};
use ecoplay_core::rng::DeterministicRng;

use crate::application::views::{self, AdventureView};
use crate::domain::aggregates::{AdventureSession, FIRST_SCENARIO_ID};
use crate::domain::commands::AdventureAction;
use crate::domain::events::AdventureEvent;
use crate::domain::scenario::Scenario;

/// An Eco-Adventure bound to the scenarios of one playthrough.
#[derive(Debug, Clone)]
pub struct AdventureGame {
    scenarios: Vec<Scenario>,
    origin: ContentOrigin,
}

impl AdventureGame {
    /// Creates an engine over `scenarios`.
    #[must_use]
    pub fn new(scenarios: Vec<Scenario>, origin: ContentOrigin) -> Self {
        Self { scenarios, origin }
    }

    /// The loaded scenarios.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Where the scenarios came from.
    #[must_use]
    pub fn origin(&self) -> ContentOrigin {
        self.origin
    }
}

impl Game for AdventureGame {
    type State = AdventureSession;
    type Action = AdventureAction;
    type Event = AdventureEvent;
    type View = AdventureView;

    fn name(&self) -> &'static str {
        "adventure"
    }

    fn start(&self, _rng: &mut dyn DeterministicRng) -> Step<AdventureSession, AdventureEvent> {
        let mut session = AdventureSession::new();
        let mut events = Vec::new();
        session.load_scenario(&self.scenarios, FIRST_SCENARIO_ID, &mut events);
        Step {
            state: session,
            events,
            directives: Vec::new(),
        }
    }

    fn reduce(
        &self,
        mut state: AdventureSession,
        input: Input<AdventureAction>,
        _rng: &mut dyn DeterministicRng,
    ) -> Step<AdventureSession, AdventureEvent> {
        let mut events = Vec::new();
        match input {
            Input::Player(AdventureAction::Choose { choice_id }) => {
                state.apply_choice(&self.scenarios, &choice_id, &mut events);
            }
            Input::Player(AdventureAction::Continue) => {
                state.continue_from_feedback(&self.scenarios, &mut events);
            }
            Input::Player(AdventureAction::ShowHint) => {
                state.reveal_hint(&self.scenarios, &mut events);
            }
            // The adventure never schedules timers.
            Input::Deferred(_) | Input::Tick => return Step::quiet(state),
        }
        Step {
            state,
            events,
            directives: Vec::new(),
        }
    }

    fn view(&self, state: &AdventureSession) -> AdventureView {
        views::project(&self.scenarios, self.origin, state)
    }

    fn is_ended(&self, state: &AdventureSession) -> bool {
        state.is_ended()
    }
}
