//! Domain events for the Quiz context.

use serde::Serialize;

use super::performance::QuizPerformance;

/// What happened during one transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizEvent {
    /// A question is now on screen.
    QuestionPresented {
        /// Zero-based question index.
        index: usize,
        /// Number of questions.
        total: usize,
    },
    /// An option was selected and scored.
    AnswerRecorded {
        /// Zero-based question index.
        index: usize,
        /// Selected letter.
        selected: char,
        /// Correct letter.
        correct_answer: char,
        /// Whether the selection was correct.
        correct: bool,
        /// Score after the answer.
        score: i32,
    },
    /// The quiz is over.
    QuizEnded {
        /// Final score.
        score: i32,
        /// Number of correct answers.
        correct_count: usize,
        /// Number of questions.
        total: usize,
        /// Result band.
        performance: QuizPerformance,
    },
    /// The action did not apply in the current state.
    ActionIgnored {
        /// Why it was ignored.
        reason: String,
    },
}
