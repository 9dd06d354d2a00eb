//! Command handlers for the Eco-Adventure context.

use ecoplay_core::content::ContentOrigin;
use tracing::{info, warn};

use crate::application::engine::AdventureGame;
use crate::application::fallback::fallback_scenarios;
use crate::application::source::ScenarioSource;

/// Handles a start request: fetches scenarios and binds them to an engine.
///
/// Unplayable scenarios (no choices) are dropped. A failed fetch or an
/// empty result falls back to the built-in scenarios, so starting an
/// adventure never fails.
pub async fn handle_start_adventure(source: &dyn ScenarioSource) -> AdventureGame {
    match source.fetch_scenarios().await {
        Ok(scenarios) => {
            let playable: Vec<_> = scenarios.into_iter().filter(|s| s.is_playable()).collect();
            if playable.is_empty() {
                warn!("content provider returned no playable scenarios; using fallback");
                return AdventureGame::new(fallback_scenarios(), ContentOrigin::Fallback);
            }
            info!(count = playable.len(), "scenarios loaded");
            AdventureGame::new(playable, ContentOrigin::Provider)
        }
        Err(e) => {
            warn!(error = %e, "scenario fetch failed; using fallback");
            AdventureGame::new(fallback_scenarios(), ContentOrigin::Fallback)
        }
    }
}
