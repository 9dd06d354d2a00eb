//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use chrono::TimeDelta;

use ecoplay_adventure::application::engine::AdventureGame;
use ecoplay_adventure::application::source::ScenarioSource;
use ecoplay_content::catalog::ContentCatalog;
use ecoplay_content::http::HttpContentSource;
use ecoplay_core::clock::Clock;
use ecoplay_core::rng::SharedRng;
use ecoplay_quiz::application::engine::QuizGame;
use ecoplay_quiz::application::source::QuestionSource;
use ecoplay_session::{SessionRegistry, spawn_sweeper};
use ecoplay_words::application::engine::WordGame;
use ecoplay_words::application::source::WordSource;

/// Where new sessions fetch their content from.
#[derive(Clone)]
pub struct ContentSources {
    /// Scenario provider for adventures.
    pub scenarios: Arc<dyn ScenarioSource>,
    /// Question provider for quizzes.
    pub questions: Arc<dyn QuestionSource>,
    /// Word provider for word games.
    pub words: Arc<dyn WordSource>,
}

impl ContentSources {
    /// Serves every game from the local catalog.
    #[must_use]
    pub fn local(catalog: &Arc<ContentCatalog>) -> Self {
        Self {
            scenarios: Arc::clone(catalog) as Arc<dyn ScenarioSource>,
            questions: Arc::clone(catalog) as Arc<dyn QuestionSource>,
            words: Arc::clone(catalog) as Arc<dyn WordSource>,
        }
    }

    /// Fetches every game's content from a remote provider.
    #[must_use]
    pub fn upstream(client: Arc<HttpContentSource>) -> Self {
        Self {
            scenarios: Arc::clone(&client) as Arc<dyn ScenarioSource>,
            questions: Arc::clone(&client) as Arc<dyn QuestionSource>,
            words: client as Arc<dyn WordSource>,
        }
    }
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog behind the provider endpoints.
    pub catalog: Arc<ContentCatalog>,
    /// Content sources for new sessions.
    pub sources: ContentSources,
    /// Active adventure sessions.
    pub adventures: Arc<SessionRegistry<AdventureGame>>,
    /// Active quiz sessions.
    pub quizzes: Arc<SessionRegistry<QuizGame>>,
    /// Active word game sessions.
    pub word_games: Arc<SessionRegistry<WordGame>>,
    /// Countdown length for timed word games.
    pub word_time_limit_secs: u32,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        catalog: Arc<ContentCatalog>,
        sources: ContentSources,
        clock: Arc<dyn Clock + Send + Sync>,
        rng: SharedRng,
        word_time_limit_secs: u32,
    ) -> Self {
        Self {
            catalog,
            sources,
            adventures: Arc::new(SessionRegistry::new(Arc::clone(&clock), Arc::clone(&rng))),
            quizzes: Arc::new(SessionRegistry::new(Arc::clone(&clock), Arc::clone(&rng))),
            word_games: Arc::new(SessionRegistry::new(clock, rng)),
            word_time_limit_secs,
        }
    }

    /// Starts one background sweep per game that evicts sessions idle for
    /// longer than `idle_ttl`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn_session_sweepers(&self, period: Duration, idle_ttl: TimeDelta) {
        spawn_sweeper(&self.adventures, period, idle_ttl);
        spawn_sweeper(&self.quizzes, period, idle_ttl);
        spawn_sweeper(&self.word_games, period, idle_ttl);
    }
}
