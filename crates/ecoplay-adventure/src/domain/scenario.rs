//! Scenario content for the Eco-Adventure context.
//!
//! Field names on the wire follow the content provider's JSON: a choice's
//! score change is `points` and its successor is `next`.

use serde::{Deserialize, Serialize};

/// One player-facing choice inside a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Choice identifier, unique within its scenario (e.g. `"3B"`).
    pub id: String,
    /// Label shown to the player.
    pub text: String,
    /// Eco-points added to the score; absent means zero.
    #[serde(rename = "points", default, skip_serializing_if = "Option::is_none")]
    pub points_delta: Option<i32>,
    /// Text shown after the choice is made, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    /// Scenario to load next; absent means the following id.
    #[serde(rename = "next", default, skip_serializing_if = "Option::is_none")]
    pub next_scenario_id: Option<u32>,
}

impl Choice {
    /// Points this choice is worth.
    #[must_use]
    pub fn points(&self) -> i32 {
        self.points_delta.unwrap_or(0)
    }

    /// Feedback text, treating blank text as absent.
    #[must_use]
    pub fn feedback_text(&self) -> Option<&str> {
        self.feedback
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// The scenario this choice leads to from `scenario_id`.
    #[must_use]
    pub fn next_from(&self, scenario_id: u32) -> u32 {
        self.next_scenario_id
            .unwrap_or_else(|| scenario_id.saturating_add(1))
    }
}

/// One environmental dilemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario identifier.
    pub id: u32,
    /// HTML description shown to the player.
    pub description: String,
    /// Backdrop tag (`forest`, `ocean`, `urban`, `desert`).
    #[serde(default)]
    pub environment: String,
    /// Educational hint for the hint modal.
    #[serde(default)]
    pub hint: String,
    /// Available choices, in display order.
    pub choices: Vec<Choice>,
}

impl Scenario {
    /// Looks up a choice by identifier.
    #[must_use]
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == choice_id)
    }

    /// Whether the scenario can be played at all.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.choices.is_empty()
    }
}

/// Finds the scenario with `id` in `scenarios`.
#[must_use]
pub fn find_scenario(scenarios: &[Scenario], id: u32) -> Option<&Scenario> {
    scenarios.iter().find(|scenario| scenario.id == id)
}
