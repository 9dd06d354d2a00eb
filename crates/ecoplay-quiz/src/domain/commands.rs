//! Player actions for the Quiz context.

use serde::Deserialize;

/// An action the presentation adapter forwards to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizAction {
    /// Pick an option of the current question.
    Select {
        /// Option letter, `A` to `D`.
        option: String,
    },
    /// Move on once the current question is answered.
    Next,
}
