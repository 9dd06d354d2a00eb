//! Read-only projections of a quiz session.

use serde::Serialize;

use crate::domain::aggregates::{QuizPhase, QuizSession};
use crate::domain::performance::QuizPerformance;
use crate::domain::question::{OPTION_LETTERS, Question};

/// One labelled option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    /// Option letter.
    pub letter: char,
    /// Option text.
    pub text: String,
}

/// Feedback once the current question is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    /// The letter picked.
    pub selected: char,
    /// The correct letter.
    pub correct_answer: char,
    /// Whether the pick was correct.
    pub correct: bool,
    /// Explanation text.
    pub explanation: String,
}

/// What is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum QuizScreen {
    /// A question, answered or not.
    Question {
        /// Question text.
        question: String,
        /// Options in display order.
        options: Vec<OptionView>,
        /// Present once an option has been selected.
        feedback: Option<AnswerFeedback>,
    },
    /// Final results.
    Results {
        /// Correct answers.
        correct_count: usize,
        /// Result band.
        performance: QuizPerformance,
        /// Message for the band.
        message: &'static str,
    },
}

/// Projection of one quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizView {
    /// Score so far.
    pub score: i32,
    /// One-based position of the current question.
    pub position: usize,
    /// Number of questions.
    pub total: usize,
    /// What is on screen.
    pub screen: QuizScreen,
}

pub(crate) fn project(questions: &[Question], session: &QuizSession) -> QuizView {
    let current = questions
        .get(session.index)
        .filter(|_| session.phase != QuizPhase::Ended);
    let screen = match current {
        Some(question) => QuizScreen::Question {
            question: question.question.clone(),
            options: OPTION_LETTERS
                .iter()
                .zip(&question.options)
                .map(|(letter, text)| OptionView {
                    letter: *letter,
                    text: text.clone(),
                })
                .collect(),
            feedback: session.current_answer().and_then(|answer| {
                Some(AnswerFeedback {
                    selected: answer.selected,
                    correct_answer: question.correct_letter()?,
                    correct: answer.correct,
                    explanation: question.explanation.clone(),
                })
            }),
        },
        None => {
            let performance = QuizPerformance::classify(session.score);
            QuizScreen::Results {
                correct_count: session.correct_count(),
                performance,
                message: performance.message(),
            }
        }
    };

    QuizView {
        score: session.score,
        position: (session.index + 1).min(questions.len()),
        total: questions.len(),
        screen,
    }
}
