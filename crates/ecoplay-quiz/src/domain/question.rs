//! Question content for the Quiz context.

use serde::{Deserialize, Serialize};

/// Option letters in display order.
pub const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text.
    pub question: String,
    /// Answer options, labelled A to D in order.
    pub options: Vec<String>,
    /// Letter of the correct option.
    pub correct_answer: String,
    /// Explanation shown after answering.
    #[serde(default)]
    pub explanation: String,
}

/// Parses an option letter, accepting lower case and surrounding space.
#[must_use]
pub fn parse_letter(raw: &str) -> Option<char> {
    let mut chars = raw.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    OPTION_LETTERS.contains(&letter).then_some(letter)
}

impl Question {
    /// The correct option letter, if it is well formed.
    #[must_use]
    pub fn correct_letter(&self) -> Option<char> {
        parse_letter(&self.correct_answer)
    }

    /// Index of `letter` among the options, if such an option exists.
    #[must_use]
    pub fn option_index(&self, letter: char) -> Option<usize> {
        OPTION_LETTERS
            .iter()
            .position(|l| *l == letter)
            .filter(|i| *i < self.options.len())
    }

    /// Whether the question has exactly four options and a correct letter
    /// naming one of them.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.options.len() == OPTION_LETTERS.len()
            && self
                .correct_letter()
                .and_then(|letter| self.option_index(letter))
                .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: usize, correct: &str) -> Question {
        Question {
            question: "Which gas traps the most heat?".to_owned(),
            options: (0..options).map(|i| format!("option {i}")).collect(),
            correct_answer: correct.to_owned(),
            explanation: "Because.".to_owned(),
        }
    }

    #[test]
    fn test_parse_letter_normalizes_case_and_space() {
        assert_eq!(parse_letter(" b "), Some('B'));
        assert_eq!(parse_letter("D"), Some('D'));
    }

    #[test]
    fn test_parse_letter_rejects_other_input() {
        assert_eq!(parse_letter("E"), None);
        assert_eq!(parse_letter("AB"), None);
        assert_eq!(parse_letter(""), None);
        assert_eq!(parse_letter("1"), None);
    }

    #[test]
    fn test_valid_question() {
        assert!(question(4, "C").is_valid());
    }

    #[test]
    fn test_wrong_option_count_is_invalid() {
        assert!(!question(3, "A").is_valid());
        assert!(!question(5, "A").is_valid());
    }

    #[test]
    fn test_bad_correct_letter_is_invalid() {
        assert!(!question(4, "E").is_valid());
        assert!(!question(4, "").is_valid());
    }

    #[test]
    fn test_option_index_past_option_count_is_none() {
        let q = question(2, "A");
        assert_eq!(q.option_index('B'), Some(1));
        assert_eq!(q.option_index('C'), None);
    }

    #[test]
    fn test_deserializes_wire_shape() {
        let json = serde_json::json!({
            "question": "q",
            "options": ["a", "b", "c", "d"],
            "correct_answer": "B",
            "explanation": "e"
        });

        let q: Question = serde_json::from_value(json).unwrap();

        assert_eq!(q.correct_letter(), Some('B'));
        assert!(q.is_valid());
    }
}
