//! Domain events for the Eco-Adventure context.

use serde::Serialize;

use super::ending::EndingTier;

/// What happened during one transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdventureEvent {
    /// A scenario is now awaiting a choice.
    ScenarioPresented {
        /// The scenario shown.
        scenario_id: u32,
        /// The chapter it is shown in.
        chapter: u32,
    },
    /// A choice was scored and recorded.
    ChoiceApplied {
        /// The scenario the choice belongs to.
        scenario_id: u32,
        /// The chosen choice.
        choice_id: String,
        /// Points added.
        points: i32,
        /// Score after the choice.
        score: i32,
    },
    /// The choice's feedback text is on screen.
    FeedbackShown {
        /// The chosen choice.
        choice_id: String,
    },
    /// The scenario hint was revealed.
    HintRevealed {
        /// The hint text.
        hint: String,
    },
    /// A `next` reference pointed at a scenario that does not exist.
    ScenarioMissing {
        /// The missing scenario id.
        scenario_id: u32,
    },
    /// The playthrough is over.
    AdventureEnded {
        /// Final eco-points.
        score: i32,
        /// Ending reached.
        ending: EndingTier,
    },
    /// The action did not apply in the current state.
    ActionIgnored {
        /// Why it was ignored.
        reason: String,
    },
}
