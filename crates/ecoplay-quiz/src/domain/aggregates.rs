//! Session state for the Quiz context.

use ecoplay_core::error::DomainError;
use serde::Serialize;

use super::events::QuizEvent;
use super::performance::QuizPerformance;
use super::question::{Question, parse_letter};

/// Points for a correct answer.
pub const POINTS_PER_CORRECT: i32 = 10;

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    /// Zero-based question index.
    pub question_index: usize,
    /// Selected letter.
    pub selected: char,
    /// Whether it was correct.
    pub correct: bool,
}

/// Where the quiz stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// The current question awaits an answer.
    Answering,
    /// The current question is answered; its explanation is showing.
    Answered,
    /// Terminal.
    Ended,
}

/// Mutable state of one quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    /// Ten points per correct answer.
    pub score: i32,
    /// Zero-based index of the current question.
    pub index: usize,
    /// Current phase.
    pub phase: QuizPhase,
    /// Every answer, in order.
    pub answers: Vec<AnswerRecord>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    /// A session with no question loaded yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            score: 0,
            index: 0,
            phase: QuizPhase::Ended,
            answers: Vec::new(),
        }
    }

    /// Puts question `index` on screen.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Precondition` if `index` is not below the
    /// number of questions.
    pub fn load_question(
        &mut self,
        questions: &[Question],
        index: usize,
        events: &mut Vec<QuizEvent>,
    ) -> Result<(), DomainError> {
        if index >= questions.len() {
            return Err(DomainError::Precondition(format!(
                "question index {index} out of range for {} questions",
                questions.len()
            )));
        }
        self.index = index;
        self.phase = QuizPhase::Answering;
        events.push(QuizEvent::QuestionPresented {
            index,
            total: questions.len(),
        });
        Ok(())
    }

    /// Scores `raw` as the answer to the current question.
    ///
    /// Only the first selection per question counts. Letters that do not
    /// name one of the question's options are ignored.
    pub fn select_option(
        &mut self,
        questions: &[Question],
        raw: &str,
        events: &mut Vec<QuizEvent>,
    ) {
        if self.phase != QuizPhase::Answering {
            events.push(ignored("question already answered"));
            return;
        }
        let Some(question) = questions.get(self.index) else {
            events.push(ignored("no question loaded"));
            return;
        };
        let Some(selected) = parse_letter(raw).filter(|l| question.option_index(*l).is_some())
        else {
            events.push(ignored("not an option letter"));
            return;
        };
        let Some(correct_answer) = question.correct_letter() else {
            events.push(ignored("question has no valid answer"));
            return;
        };

        let correct = selected == correct_answer;
        if correct {
            self.score = self.score.saturating_add(POINTS_PER_CORRECT);
        }
        self.phase = QuizPhase::Answered;
        self.answers.push(AnswerRecord {
            question_index: self.index,
            selected,
            correct,
        });
        events.push(QuizEvent::AnswerRecorded {
            index: self.index,
            selected,
            correct_answer,
            correct,
            score: self.score,
        });
    }

    /// Moves past an answered question, ending after the last one.
    ///
    /// # Errors
    ///
    /// Propagates the precondition of [`Self::load_question`].
    pub fn next_question(
        &mut self,
        questions: &[Question],
        events: &mut Vec<QuizEvent>,
    ) -> Result<(), DomainError> {
        if self.phase != QuizPhase::Answered {
            events.push(ignored("answer the current question first"));
            return Ok(());
        }
        let next = self.index + 1;
        if next == questions.len() {
            self.end(questions.len(), events);
            return Ok(());
        }
        self.load_question(questions, next, events)
    }

    /// Number of correct answers so far.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    /// The selection made on the current question, if any.
    #[must_use]
    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        self.answers
            .last()
            .filter(|a| a.question_index == self.index && self.phase == QuizPhase::Answered)
    }

    /// Ends the quiz.
    pub fn end(&mut self, total: usize, events: &mut Vec<QuizEvent>) {
        self.phase = QuizPhase::Ended;
        events.push(QuizEvent::QuizEnded {
            score: self.score,
            correct_count: self.correct_count(),
            total,
            performance: QuizPerformance::classify(self.score),
        });
    }

    /// Whether the session is terminal.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == QuizPhase::Ended
    }
}

fn ignored(reason: &str) -> QuizEvent {
    QuizEvent::ActionIgnored {
        reason: reason.to_owned(),
    }
}
