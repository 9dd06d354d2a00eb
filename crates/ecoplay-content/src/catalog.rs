//! The content catalog.
//!
//! Holds the raw content of every game and applies the provider's
//! normalisation on each request, so the HTTP endpoints and in-process
//! sessions see the same lists.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use ecoplay_adventure::application::fallback::fallback_scenarios;
use ecoplay_adventure::application::source::ScenarioSource;
use ecoplay_adventure::domain::scenario::Scenario;
use ecoplay_core::error::DomainError;
use ecoplay_core::rng::{SharedRng, shuffle};
use ecoplay_quiz::application::source::QuestionSource;
use ecoplay_quiz::domain::question::Question;
use ecoplay_words::application::fallback::fallback_words;
use ecoplay_words::application::source::WordSource;
use ecoplay_words::domain::word::{Difficulty, WordEntry, WordMode};
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::ContentError;
use crate::markdown::render_markdown;
use crate::questions::built_in_questions;

/// Scenario file inside a catalog directory.
pub const SCENARIOS_FILE: &str = "scenarios.yaml";
/// Question file inside a catalog directory.
pub const QUESTIONS_FILE: &str = "questions.yaml";
/// Word file inside a catalog directory.
pub const WORDS_FILE: &str = "words.yaml";

/// Fewer validated words than this triggers a top-up.
pub const MIN_WORDS: usize = 5;
/// A topped-up list is filled to this many words.
pub const TOP_UP_TARGET: usize = 10;

const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

/// Content for all three games.
pub struct ContentCatalog {
    scenarios: Vec<Scenario>,
    questions: Vec<Question>,
    /// Word lists read from `words.yaml`; other difficulties use the
    /// built-in lists.
    words: HashMap<Difficulty, Vec<WordEntry>>,
    version: String,
    rng: SharedRng,
}

impl std::fmt::Debug for ContentCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentCatalog")
            .field("scenarios", &self.scenarios.len())
            .field("questions", &self.questions.len())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl ContentCatalog {
    /// A catalog of the built-in content.
    #[must_use]
    pub fn built_in(rng: SharedRng) -> Self {
        Self::assemble(
            fallback_scenarios(),
            built_in_questions(),
            HashMap::new(),
            rng,
        )
    }

    /// Loads a catalog from `dir`.
    ///
    /// Each of `scenarios.yaml`, `questions.yaml` and `words.yaml` is
    /// optional; a missing file leaves the built-in content of that kind in
    /// place. Scenario descriptions are Markdown.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if a present file cannot be read or parsed.
    pub fn load_dir(dir: &Path, rng: SharedRng) -> Result<Self, ContentError> {
        let scenarios = match read_yaml::<Vec<Scenario>>(&dir.join(SCENARIOS_FILE))? {
            Some(mut scenarios) => {
                for scenario in &mut scenarios {
                    scenario.description = render_markdown(&scenario.description);
                }
                scenarios
            }
            None => fallback_scenarios(),
        };
        let questions = read_yaml::<Vec<Question>>(&dir.join(QUESTIONS_FILE))?
            .unwrap_or_else(built_in_questions);
        let words = read_yaml::<HashMap<Difficulty, Vec<WordEntry>>>(&dir.join(WORDS_FILE))?
            .unwrap_or_default();

        let catalog = Self::assemble(scenarios, questions, words, rng);
        info!(
            dir = %dir.display(),
            scenarios = catalog.scenarios.len(),
            questions = catalog.questions.len(),
            version = %catalog.version,
            "content catalog loaded"
        );
        Ok(catalog)
    }

    fn assemble(
        scenarios: Vec<Scenario>,
        questions: Vec<Question>,
        words: HashMap<Difficulty, Vec<WordEntry>>,
        rng: SharedRng,
    ) -> Self {
        let version = content_version(&scenarios, &questions, &words);
        Self {
            scenarios,
            questions,
            words,
            version,
            rng,
        }
    }

    /// SHA-256 of the loaded content, hex encoded.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Scenarios with at least one choice, with every choice's `points` and
    /// `next` made explicit.
    #[must_use]
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.scenarios
            .iter()
            .filter(|s| s.is_playable())
            .map(|scenario| {
                let mut scenario = scenario.clone();
                let id = scenario.id;
                for choice in &mut scenario.choices {
                    choice.points_delta = Some(choice.points());
                    choice.next_scenario_id = Some(choice.next_from(id));
                }
                scenario
            })
            .collect()
    }

    /// Well-formed questions in a fresh random order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the RNG lock is poisoned.
    pub fn questions(&self) -> Result<Vec<Question>, DomainError> {
        let mut questions: Vec<Question> =
            self.questions.iter().filter(|q| q.is_valid()).cloned().collect();
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("rng lock poisoned: {e}")))?;
        shuffle(&mut questions, &mut *rng);
        Ok(questions)
    }

    /// Words for `difficulty`.
    ///
    /// Without a loaded list the built-in list is served whole. A loaded
    /// list is normalised, capped at the difficulty's maximum length, and
    /// topped up from the built-in list when fewer than [`MIN_WORDS`]
    /// survive.
    #[must_use]
    pub fn words(&self, difficulty: Difficulty) -> Vec<WordEntry> {
        let Some(list) = self.words.get(&difficulty) else {
            return fallback_words(difficulty);
        };
        let max_length = difficulty.max_length();
        let mut words: Vec<WordEntry> = list
            .iter()
            .filter_map(WordEntry::normalized)
            .filter(|e| e.len() <= max_length)
            .collect();
        if words.len() < MIN_WORDS {
            debug!(
                %difficulty,
                valid = words.len(),
                "topping up word list from built-in words"
            );
            let missing = TOP_UP_TARGET.saturating_sub(words.len());
            words.extend(fallback_words(difficulty).into_iter().take(missing));
        }
        words
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ContentError> {
    if !path.exists() {
        debug!(path = %path.display(), "catalog file absent; using built-in content");
        return Ok(None);
    }
    let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text)
        .map(Some)
        .map_err(|source| ContentError::Yaml {
            path: path.to_path_buf(),
            source,
        })
}

fn content_version(
    scenarios: &[Scenario],
    questions: &[Question],
    words: &HashMap<Difficulty, Vec<WordEntry>>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(scenarios).unwrap_or_default());
    hasher.update(serde_json::to_vec(questions).unwrap_or_default());
    for difficulty in DIFFICULTIES {
        hasher.update(difficulty.as_str());
        let list = words
            .get(&difficulty)
            .cloned()
            .unwrap_or_else(|| fallback_words(difficulty));
        hasher.update(serde_json::to_vec(&list).unwrap_or_default());
    }
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl ScenarioSource for ContentCatalog {
    async fn fetch_scenarios(&self) -> Result<Vec<Scenario>, DomainError> {
        Ok(self.scenarios())
    }
}

#[async_trait]
impl QuestionSource for ContentCatalog {
    async fn fetch_questions(&self) -> Result<Vec<Question>, DomainError> {
        self.questions()
    }
}

#[async_trait]
impl WordSource for ContentCatalog {
    async fn fetch_words(
        &self,
        difficulty: Difficulty,
        _mode: WordMode,
    ) -> Result<Vec<WordEntry>, DomainError> {
        Ok(self.words(difficulty))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use ecoplay_core::rng::{SystemRng, shared};
    use ecoplay_test_support::{MockRng, SequenceRng};
    use ecoplay_words::domain::word::Difficulty;

    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let path = std::env::temp_dir().join(format!("ecoplay-{}", uuid::Uuid::new_v4()));
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }

        fn write(&self, name: &str, contents: &str) {
            fs::write(self.0.join(name), contents).unwrap();
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn built_in() -> ContentCatalog {
        ContentCatalog::built_in(shared(MockRng))
    }

    #[test]
    fn test_built_in_serves_fallback_scenarios() {
        let catalog = built_in();

        let scenarios = catalog.scenarios();

        assert_eq!(scenarios.len(), 11);
        assert_eq!(scenarios[10].choices[0].next_scenario_id, Some(12));
    }

    #[test]
    fn test_missing_points_and_next_are_made_explicit() {
        // Arrange
        let dir = TempDir::new();
        dir.write(
            SCENARIOS_FILE,
            r"
- id: 4
  description: A **dry** riverbed.
  environment: desert
  hint: Think about water.
  choices:
    - id: 4A
      text: Plant shade trees
- id: 5
  description: Nothing to do here.
  choices: []
",
        );

        // Act
        let catalog = ContentCatalog::load_dir(&dir.0, shared(MockRng)).unwrap();
        let scenarios = catalog.scenarios();

        // Assert
        assert_eq!(scenarios.len(), 1);
        let choice = &scenarios[0].choices[0];
        assert_eq!(choice.points_delta, Some(0));
        assert_eq!(choice.next_scenario_id, Some(5));
        assert_eq!(
            scenarios[0].description,
            "<p>A <strong>dry</strong> riverbed.</p>\n"
        );
    }

    #[test]
    fn test_absent_files_keep_built_in_content() {
        let dir = TempDir::new();

        let catalog = ContentCatalog::load_dir(&dir.0, shared(MockRng)).unwrap();

        assert_eq!(catalog.scenarios().len(), 11);
        assert_eq!(catalog.questions().unwrap().len(), 10);
        assert_eq!(catalog.version(), built_in().version());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let dir = TempDir::new();
        dir.write(QUESTIONS_FILE, "question: [unclosed");

        let result = ContentCatalog::load_dir(&dir.0, shared(MockRng));

        assert!(matches!(result, Err(ContentError::Yaml { .. })));
    }

    #[test]
    fn test_invalid_questions_are_dropped() {
        let dir = TempDir::new();
        dir.write(
            QUESTIONS_FILE,
            r#"
- question: Good one
  options: [a, b, c, d]
  correct_answer: D
  explanation: ok
- question: Three options
  options: [a, b, c]
  correct_answer: A
- question: Bad letter
  options: [a, b, c, d]
  correct_answer: "E"
"#,
        );

        let catalog = ContentCatalog::load_dir(&dir.0, shared(MockRng)).unwrap();
        let questions = catalog.questions().unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Good one");
    }

    #[test]
    fn test_questions_are_shuffled_per_request() {
        // Arrange: the first swap of every pass exchanges the first and
        // last questions.
        let catalog = ContentCatalog::built_in(shared(SequenceRng::new(vec![0, 1, 9, 1])));
        let authored = built_in_questions();

        // Act
        let shuffled = catalog.questions().unwrap();

        // Assert
        assert_eq!(shuffled.len(), authored.len());
        assert_ne!(shuffled, authored);
        assert!(authored.iter().all(|q| shuffled.contains(q)));
    }

    #[test]
    fn test_built_in_word_lists_are_served_whole() {
        let catalog = built_in();

        for difficulty in DIFFICULTIES {
            assert_eq!(catalog.words(difficulty), fallback_words(difficulty));
            assert_eq!(catalog.words(difficulty).len(), 10);
        }
    }

    #[test]
    fn test_loaded_words_are_validated_against_max_length() {
        // Arrange
        let dir = TempDir::new();
        dir.write(
            WORDS_FILE,
            r"
easy:
  - word: leaf
    hint: Grows on trees
  - word: solar
    hint: Sun power
  - word: river
    hint: Flowing water
  - word: seed
    hint: Becomes a plant
  - word: rain
    hint: Falls from clouds
  - word: compost
    hint: Too long for easy
",
        );

        // Act
        let catalog = ContentCatalog::load_dir(&dir.0, shared(MockRng)).unwrap();
        let easy = catalog.words(Difficulty::Easy);

        // Assert
        assert_eq!(easy.len(), 5);
        assert!(easy.iter().all(|e| e.len() <= 6));
        assert!(!easy.iter().any(|e| e.word == "COMPOST"));
        assert_eq!(catalog.words(Difficulty::Hard), fallback_words(Difficulty::Hard));
    }

    #[test]
    fn test_short_word_list_is_topped_up() {
        // Arrange
        let dir = TempDir::new();
        dir.write(
            WORDS_FILE,
            r"
easy:
  - word: ' leaf '
    hint: Grows on trees
  - word: TOO LONG
    hint: has a space
",
        );

        // Act
        let catalog = ContentCatalog::load_dir(&dir.0, shared(MockRng)).unwrap();
        let easy = catalog.words(Difficulty::Easy);

        // Assert
        assert_eq!(easy.len(), TOP_UP_TARGET);
        assert_eq!(easy[0].word, "LEAF");
        assert_eq!(easy[1].word, "RECYCLE");
    }

    #[test]
    fn test_version_changes_with_content() {
        let dir = TempDir::new();
        dir.write(
            WORDS_FILE,
            "medium:\n  - word: TUNDRA\n    hint: Cold treeless plain\n",
        );

        let catalog = ContentCatalog::load_dir(&dir.0, shared(SystemRng::seeded(1))).unwrap();

        assert_ne!(catalog.version(), built_in().version());
        assert_eq!(catalog.version().len(), 64);
    }

    #[tokio::test]
    async fn test_catalog_implements_word_source() {
        let catalog = built_in();

        let words = catalog
            .fetch_words(Difficulty::Easy, WordMode::Scramble)
            .await
            .unwrap();

        assert_eq!(words.len(), 10);
        assert!(words.iter().any(|e| e.word == "RECYCLE"));
    }
}
