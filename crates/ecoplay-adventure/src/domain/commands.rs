//! Player actions for the Eco-Adventure context.

use serde::Deserialize;

/// An action the presentation adapter forwards to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdventureAction {
    /// Pick one of the current scenario's choices.
    Choose {
        /// The choice identifier.
        choice_id: String,
    },
    /// Leave the feedback screen.
    Continue,
    /// Reveal the current scenario's hint.
    ShowHint,
}
