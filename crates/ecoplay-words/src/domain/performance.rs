//! End-of-game summary for the word game.

use ecoplay_core::band;
use serde::Serialize;

/// Result band on the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordPerformance {
    /// 200 points or more.
    WordMaster,
    /// 150 to 199.
    Impressive,
    /// 100 to 149.
    GoodWork,
    /// 50 to 99.
    NiceEffort,
    /// Below 50.
    KeepPracticing,
}

const THRESHOLDS: [(i32, WordPerformance); 4] = [
    (200, WordPerformance::WordMaster),
    (150, WordPerformance::Impressive),
    (100, WordPerformance::GoodWork),
    (50, WordPerformance::NiceEffort),
];

impl WordPerformance {
    /// Classifies a final score.
    #[must_use]
    pub fn classify(score: i32) -> Self {
        band::classify(score, &THRESHOLDS, Self::KeepPracticing)
    }

    /// Message for the results screen.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::WordMaster => "Amazing! You're a sustainability word master!",
            Self::Impressive => "Great job! Your knowledge of sustainability terms is impressive!",
            Self::GoodWork => "Good work! You know your sustainability vocabulary.",
            Self::NiceEffort => "Nice effort! Keep learning about sustainability terms.",
            Self::KeepPracticing => {
                "Keep practicing! You'll improve your sustainability vocabulary."
            }
        }
    }
}

/// Completion statistics over the words played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordStats {
    /// Words guessed or unscrambled.
    pub completed: usize,
    /// Words played, including failed and skipped ones.
    pub total: usize,
    /// `completed / total` as a whole percentage, rounded half up; 0 when
    /// nothing was played.
    pub completion_rate: u32,
}

impl WordStats {
    /// Computes the stats for `completed` out of `total`.
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        let completion_rate = if total == 0 {
            0
        } else {
            let rate = (200 * completed + total) / (2 * total);
            u32::try_from(rate).unwrap_or(u32::MAX)
        };
        Self {
            completed,
            total,
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(WordPerformance::classify(200), WordPerformance::WordMaster);
        assert_eq!(WordPerformance::classify(199), WordPerformance::Impressive);
        assert_eq!(WordPerformance::classify(150), WordPerformance::Impressive);
        assert_eq!(WordPerformance::classify(100), WordPerformance::GoodWork);
        assert_eq!(WordPerformance::classify(99), WordPerformance::NiceEffort);
        assert_eq!(WordPerformance::classify(50), WordPerformance::NiceEffort);
        assert_eq!(WordPerformance::classify(-30), WordPerformance::KeepPracticing);
    }

    #[test]
    fn test_completion_rate_rounds_half_up() {
        assert_eq!(WordStats::new(1, 3).completion_rate, 33);
        assert_eq!(WordStats::new(2, 3).completion_rate, 67);
        assert_eq!(WordStats::new(1, 8).completion_rate, 13);
        assert_eq!(WordStats::new(10, 10).completion_rate, 100);
    }

    #[test]
    fn test_completion_rate_with_no_words_is_zero() {
        assert_eq!(WordStats::new(0, 0).completion_rate, 0);
    }
}
