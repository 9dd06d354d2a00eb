//! Word content and game settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One word to guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Upper-case letters only.
    pub word: String,
    /// Clue shown on request.
    pub hint: String,
}

impl WordEntry {
    /// Normalises a raw entry: trims and upper-cases the word and rejects
    /// it unless it is non-empty ASCII letters.
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        let word = self.word.trim().to_ascii_uppercase();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self {
            word,
            hint: self.hint.clone(),
        })
    }

    /// Word length in letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Whether the word is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Word difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Short everyday words.
    Easy,
    /// Mid-length terms.
    #[default]
    Medium,
    /// Long technical terms.
    Hard,
}

impl Difficulty {
    /// Longest word a provider may serve at this difficulty.
    #[must_use]
    pub fn max_length(self) -> usize {
        match self {
            Self::Easy => 6,
            Self::Medium => 8,
            Self::Hard => 12,
        }
    }

    /// Query-string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which word game is played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordMode {
    /// Guess letters one at a time.
    #[default]
    Hangman,
    /// Unscramble the whole word.
    Scramble,
}

impl WordMode {
    /// Query-string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hangman => "hangman",
            Self::Scramble => "scramble",
        }
    }
}

impl fmt::Display for WordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_timed() -> bool {
    true
}

/// Options chosen on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSettings {
    /// Word difficulty.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Game mode.
    #[serde(default)]
    pub mode: WordMode,
    /// Whether the countdown runs.
    #[serde(default = "default_timed")]
    pub timed: bool,
}

impl Default for WordSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            mode: WordMode::default(),
            timed: default_timed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> WordEntry {
        WordEntry {
            word: word.to_owned(),
            hint: "h".to_owned(),
        }
    }

    #[test]
    fn test_normalized_trims_and_uppercases() {
        assert_eq!(entry("  compost ").normalized().unwrap().word, "COMPOST");
    }

    #[test]
    fn test_normalized_rejects_non_letters() {
        assert!(entry("CO2").normalized().is_none());
        assert!(entry("RAIN FOREST").normalized().is_none());
        assert!(entry("ÉCO").normalized().is_none());
        assert!(entry("   ").normalized().is_none());
    }

    #[test]
    fn test_max_length_per_difficulty() {
        assert_eq!(Difficulty::Easy.max_length(), 6);
        assert_eq!(Difficulty::Medium.max_length(), 8);
        assert_eq!(Difficulty::Hard.max_length(), 12);
    }

    #[test]
    fn test_settings_defaults() {
        let settings: WordSettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, WordSettings::default());
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.mode, WordMode::Hangman);
        assert!(settings.timed);
    }

    #[test]
    fn test_settings_parse_lowercase_names() {
        let settings: WordSettings =
            serde_json::from_str(r#"{"difficulty":"hard","mode":"scramble","timed":false}"#)
                .unwrap();

        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.mode, WordMode::Scramble);
        assert!(!settings.timed);
    }
}
