//! Final performance band for the quiz.

use ecoplay_core::band;
use serde::Serialize;

/// Result band on the quiz's final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPerformance {
    /// 100 points or more.
    Perfect,
    /// 80 to 99.
    GreatJob,
    /// 60 to 79.
    GoodEffort,
    /// 40 to 59.
    NotBad,
    /// Below 40.
    RoomForImprovement,
}

const THRESHOLDS: [(i32, QuizPerformance); 4] = [
    (100, QuizPerformance::Perfect),
    (80, QuizPerformance::GreatJob),
    (60, QuizPerformance::GoodEffort),
    (40, QuizPerformance::NotBad),
];

impl QuizPerformance {
    /// Classifies a final score.
    #[must_use]
    pub fn classify(score: i32) -> Self {
        band::classify(score, &THRESHOLDS, Self::RoomForImprovement)
    }

    /// Message for the results screen.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect score! You're a sustainability expert!",
            Self::GreatJob => "Great job! You have excellent knowledge about sustainability!",
            Self::GoodEffort => {
                "Good effort! You're on your way to becoming a sustainability champion!"
            }
            Self::NotBad => "Not bad! Keep learning about sustainability to improve your score!",
            Self::RoomForImprovement => {
                "There's room for improvement. Keep exploring sustainability topics!"
            }
        }
    }
}
