//! Read-only projections of an adventure session.

use ecoplay_core::content::ContentOrigin;
use serde::Serialize;

use crate::domain::aggregates::{AdventurePhase, AdventureSession, MAX_CHAPTERS, PlayRecord};
use crate::domain::ending::{self, Ending};
use crate::domain::scenario::{Scenario, find_scenario};

/// A selectable choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    /// Identifier to send back with `choose`.
    pub id: String,
    /// Label.
    pub text: String,
}

/// What is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum AdventureScreen {
    /// A scenario awaiting a choice.
    Scenario {
        /// The scenario shown.
        scenario_id: u32,
        /// HTML description.
        description: String,
        /// Backdrop tag.
        environment: String,
        /// Choices in display order.
        choices: Vec<ChoiceView>,
        /// The hint, once revealed.
        hint: Option<String>,
    },
    /// Feedback for the choice just made.
    Feedback {
        /// The scenario the choice belongs to.
        scenario_id: u32,
        /// The choice label.
        choice_text: String,
        /// Feedback text.
        feedback: String,
        /// Points the choice was worth.
        points: i32,
    },
    /// The ending screen.
    Ended {
        /// Ending content.
        ending: Ending,
        /// Every scored choice.
        history: Vec<PlayRecord>,
    },
}

/// Projection of one adventure session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdventureView {
    /// Eco-points so far.
    pub score: i32,
    /// Current chapter, capped at the chapter limit for display.
    pub chapter: u32,
    /// Chapter limit.
    pub max_chapters: u32,
    /// Where the scenarios came from.
    pub origin: ContentOrigin,
    /// What is on screen.
    pub screen: AdventureScreen,
}

pub(crate) fn project(
    scenarios: &[Scenario],
    origin: ContentOrigin,
    session: &AdventureSession,
) -> AdventureView {
    let screen = match &session.phase {
        AdventurePhase::AwaitingChoice { scenario_id } => find_scenario(scenarios, *scenario_id)
            .map(|scenario| AdventureScreen::Scenario {
                scenario_id: scenario.id,
                description: scenario.description.clone(),
                environment: scenario.environment.clone(),
                choices: scenario
                    .choices
                    .iter()
                    .map(|c| ChoiceView {
                        id: c.id.clone(),
                        text: c.text.clone(),
                    })
                    .collect(),
                hint: session.hint_revealed.then(|| scenario.hint.clone()),
            }),
        AdventurePhase::ShowingFeedback {
            scenario_id,
            choice_id,
            ..
        } => find_scenario(scenarios, *scenario_id)
            .and_then(|scenario| scenario.choice(choice_id))
            .map(|choice| AdventureScreen::Feedback {
                scenario_id: *scenario_id,
                choice_text: choice.text.clone(),
                feedback: choice.feedback_text().unwrap_or_default().to_owned(),
                points: choice.points(),
            }),
        AdventurePhase::Ended => None,
    };

    AdventureView {
        score: session.score,
        chapter: session.chapter.min(MAX_CHAPTERS),
        max_chapters: MAX_CHAPTERS,
        origin,
        screen: screen.unwrap_or_else(|| AdventureScreen::Ended {
            ending: ending::classify(session.score).ending(),
            history: session.history.clone(),
        }),
    }
}
