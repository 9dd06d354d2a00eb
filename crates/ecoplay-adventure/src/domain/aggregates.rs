//! Session state for the Eco-Adventure context.

use serde::Serialize;
use tracing::debug;

use super::ending;
use super::events::AdventureEvent;
use super::scenario::{Scenario, find_scenario};

/// Chapters played before the ending screen.
pub const MAX_CHAPTERS: u32 = 10;

/// Scenario every playthrough starts from.
pub const FIRST_SCENARIO_ID: u32 = 1;

/// One scored choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayRecord {
    /// The scenario played.
    pub scenario_id: u32,
    /// The choice taken.
    pub choice_id: String,
    /// Points applied.
    pub points: i32,
}

/// Where the playthrough stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdventurePhase {
    /// Waiting for the player to pick a choice.
    AwaitingChoice {
        /// The scenario on screen.
        scenario_id: u32,
    },
    /// Showing the feedback of the chosen choice until the player continues.
    ShowingFeedback {
        /// The scenario the choice belongs to.
        scenario_id: u32,
        /// The chosen choice.
        choice_id: String,
        /// Where "continue" leads.
        next_scenario_id: u32,
    },
    /// Terminal.
    Ended,
}

/// Mutable state of one Eco-Adventure playthrough.
#[derive(Debug, Clone)]
pub struct AdventureSession {
    /// Eco-points; may go negative.
    pub score: i32,
    /// 1-based chapter counter.
    pub chapter: u32,
    /// Current phase.
    pub phase: AdventurePhase,
    /// Every scored choice, in order.
    pub history: Vec<PlayRecord>,
    /// Whether the current scenario's hint has been revealed.
    pub hint_revealed: bool,
}

impl Default for AdventureSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AdventureSession {
    /// A session at chapter 1 with no scenario loaded yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            score: 0,
            chapter: 1,
            phase: AdventurePhase::Ended,
            history: Vec::new(),
            hint_revealed: false,
        }
    }

    /// Loads scenario `id`, ending the session if it does not exist.
    pub fn load_scenario(
        &mut self,
        scenarios: &[Scenario],
        id: u32,
        events: &mut Vec<AdventureEvent>,
    ) {
        if find_scenario(scenarios, id).is_none() {
            debug!(scenario_id = id, "scenario missing; ending adventure");
            events.push(AdventureEvent::ScenarioMissing { scenario_id: id });
            self.end(events);
            return;
        }

        self.phase = AdventurePhase::AwaitingChoice { scenario_id: id };
        self.hint_revealed = false;
        events.push(AdventureEvent::ScenarioPresented {
            scenario_id: id,
            chapter: self.chapter,
        });
    }

    /// Scores `choice_id` in the scenario awaiting a choice.
    ///
    /// Choices made outside `AwaitingChoice`, or naming a choice the
    /// scenario does not have, are ignored.
    pub fn apply_choice(
        &mut self,
        scenarios: &[Scenario],
        choice_id: &str,
        events: &mut Vec<AdventureEvent>,
    ) {
        let AdventurePhase::AwaitingChoice { scenario_id } = self.phase else {
            events.push(ignored("no choice is awaited"));
            return;
        };
        let Some(choice) =
            find_scenario(scenarios, scenario_id).and_then(|scenario| scenario.choice(choice_id))
        else {
            events.push(ignored("unknown choice"));
            return;
        };

        let points = choice.points();
        self.score = self.score.saturating_add(points);
        self.history.push(PlayRecord {
            scenario_id,
            choice_id: choice.id.clone(),
            points,
        });
        events.push(AdventureEvent::ChoiceApplied {
            scenario_id,
            choice_id: choice.id.clone(),
            points,
            score: self.score,
        });

        let next_scenario_id = choice.next_from(scenario_id);
        if choice.feedback_text().is_some() {
            self.phase = AdventurePhase::ShowingFeedback {
                scenario_id,
                choice_id: choice.id.clone(),
                next_scenario_id,
            };
            events.push(AdventureEvent::FeedbackShown {
                choice_id: choice.id.clone(),
            });
        } else {
            self.advance(scenarios, next_scenario_id, events);
        }
    }

    /// Leaves the feedback screen.
    pub fn continue_from_feedback(
        &mut self,
        scenarios: &[Scenario],
        events: &mut Vec<AdventureEvent>,
    ) {
        let AdventurePhase::ShowingFeedback {
            next_scenario_id, ..
        } = self.phase
        else {
            events.push(ignored("no feedback is showing"));
            return;
        };
        self.advance(scenarios, next_scenario_id, events);
    }

    /// Reveals the hint of the scenario on screen.
    pub fn reveal_hint(&mut self, scenarios: &[Scenario], events: &mut Vec<AdventureEvent>) {
        let scenario_id = match self.phase {
            AdventurePhase::AwaitingChoice { scenario_id }
            | AdventurePhase::ShowingFeedback { scenario_id, .. } => scenario_id,
            AdventurePhase::Ended => {
                events.push(ignored("adventure has ended"));
                return;
            }
        };
        match find_scenario(scenarios, scenario_id) {
            Some(scenario) if !scenario.hint.trim().is_empty() => {
                self.hint_revealed = true;
                events.push(AdventureEvent::HintRevealed {
                    hint: scenario.hint.clone(),
                });
            }
            _ => events.push(ignored("scenario has no hint")),
        }
    }

    /// Moves to the next chapter, or ends once the chapter cap is passed.
    pub fn advance(
        &mut self,
        scenarios: &[Scenario],
        next_scenario_id: u32,
        events: &mut Vec<AdventureEvent>,
    ) {
        self.chapter += 1;
        if self.chapter > MAX_CHAPTERS {
            self.end(events);
        } else {
            self.load_scenario(scenarios, next_scenario_id, events);
        }
    }

    fn end(&mut self, events: &mut Vec<AdventureEvent>) {
        self.phase = AdventurePhase::Ended;
        self.hint_revealed = false;
        events.push(AdventureEvent::AdventureEnded {
            score: self.score,
            ending: ending::classify(self.score),
        });
    }

    /// Whether the session is terminal.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == AdventurePhase::Ended
    }
}

fn ignored(reason: &str) -> AdventureEvent {
    AdventureEvent::ActionIgnored {
        reason: reason.to_owned(),
    }
}
