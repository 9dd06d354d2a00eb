//! Command handlers for the Word game context.

use ecoplay_core::content::ContentOrigin;
use tracing::{info, warn};

use crate::application::engine::WordGame;
use crate::application::fallback::fallback_words;
use crate::application::source::WordSource;
use crate::domain::word::WordSettings;

/// Handles a start request: fetches words and binds them to an engine.
///
/// Entries that are not plain letters after normalisation are dropped. A
/// failed fetch, or one that leaves no playable word, falls back to the
/// built-in list for the chosen difficulty.
pub async fn handle_start_word_game(
    source: &dyn WordSource,
    settings: WordSettings,
    time_limit_secs: u32,
) -> WordGame {
    let (words, origin) = match source.fetch_words(settings.difficulty, settings.mode).await {
        Ok(fetched) => {
            let words: Vec<_> = fetched.iter().filter_map(|e| e.normalized()).collect();
            if words.is_empty() {
                warn!(
                    difficulty = %settings.difficulty,
                    "no playable words returned; using fallback"
                );
                (fallback_words(settings.difficulty), ContentOrigin::Fallback)
            } else {
                info!(count = words.len(), difficulty = %settings.difficulty, "words loaded");
                (words, ContentOrigin::Provider)
            }
        }
        Err(e) => {
            warn!(
                error = %e,
                difficulty = %settings.difficulty,
                "word fetch failed; using fallback"
            );
            (fallback_words(settings.difficulty), ContentOrigin::Fallback)
        }
    };
    WordGame::new(words, settings, time_limit_secs, origin)
}
