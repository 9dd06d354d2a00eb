//! What a session reports back after each request.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The state of one session as seen by the presentation adapter.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot<V, E> {
    /// Session identifier.
    pub session_id: Uuid,
    /// Engine name (`adventure`, `quiz`, `words`).
    pub game: &'static str,
    /// Incremented on every restart.
    pub epoch: u64,
    /// When the current playthrough began.
    pub started_at: DateTime<Utc>,
    /// Projection of the current state.
    pub view: V,
    /// Events produced since the previous snapshot, oldest first.
    pub events: Vec<E>,
    /// Whether the playthrough has finished.
    pub ended: bool,
}
