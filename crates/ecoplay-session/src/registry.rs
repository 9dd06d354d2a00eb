//! Active sessions for one engine type, keyed by session id.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use ecoplay_core::clock::Clock;
use ecoplay_core::engine::Game;
use ecoplay_core::error::DomainError;
use ecoplay_core::rng::SharedRng;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::runtime::{SessionHandle, spawn_session};

/// How long an ended session stays reachable for its results screen.
pub const ENDED_SESSION_GRACE: TimeDelta = TimeDelta::minutes(5);

struct Entry<G: Game> {
    handle: SessionHandle<G>,
    last_active: DateTime<Utc>,
}

/// Owns the handles of every active session of engine `G`.
///
/// Removing or evicting a session drops the registry's handle; the actor
/// stops once no request still holds a clone.
pub struct SessionRegistry<G: Game> {
    sessions: Mutex<HashMap<Uuid, Entry<G>>>,
    clock: Arc<dyn Clock + Send + Sync>,
    rng: SharedRng,
}

impl<G: Game> SessionRegistry<G> {
    /// Creates an empty registry whose sessions share `clock` and `rng`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock + Send + Sync>, rng: SharedRng) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
            rng,
        }
    }

    /// Starts a session over `game` and registers it under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a lock is poisoned.
    pub fn start(&self, game: G) -> Result<SessionHandle<G>, DomainError> {
        let id = Uuid::new_v4();
        let handle = spawn_session(id, game, Arc::clone(&self.clock), Arc::clone(&self.rng))?;
        let entry = Entry {
            handle: handle.clone(),
            last_active: self.clock.now(),
        };
        self.sessions()?.insert(id, entry);
        Ok(handle)
    }

    /// Looks up a session and marks it active.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no session has `id`.
    pub fn get(&self, id: Uuid) -> Result<SessionHandle<G>, DomainError> {
        let now = self.clock.now();
        let mut sessions = self.sessions()?;
        let entry = sessions
            .get_mut(&id)
            .ok_or(DomainError::SessionNotFound(id))?;
        entry.last_active = now;
        Ok(entry.handle.clone())
    }

    /// Ends and forgets a session.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no session has `id`.
    pub fn remove(&self, id: Uuid) -> Result<(), DomainError> {
        self.sessions()?
            .remove(&id)
            .ok_or(DomainError::SessionNotFound(id))?;
        info!(session_id = %id, "session removed");
        Ok(())
    }

    /// Forgets sessions untouched for longer than `idle_ttl`, and ended
    /// sessions untouched for longer than [`ENDED_SESSION_GRACE`].
    ///
    /// Returns the number of sessions evicted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the registry lock is poisoned.
    pub fn evict_stale(&self, idle_ttl: TimeDelta) -> Result<usize, DomainError> {
        let now = self.clock.now();
        let ended_ttl = idle_ttl.min(ENDED_SESSION_GRACE);
        let mut sessions = self.sessions()?;
        let before = sessions.len();
        sessions.retain(|id, entry| {
            let idle = now - entry.last_active;
            let ttl = if entry.handle.is_ended() {
                ended_ttl
            } else {
                idle_ttl
            };
            let keep = idle <= ttl;
            if !keep {
                debug!(session_id = %id, idle_secs = idle.num_seconds(), "session evicted");
            }
            keep
        });
        Ok(before - sessions.len())
    }

    /// Number of registered sessions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the registry lock is poisoned.
    pub fn active_sessions(&self) -> Result<usize, DomainError> {
        Ok(self.sessions()?.len())
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Entry<G>>>, DomainError> {
        self.sessions.lock().map_err(|e| {
            DomainError::Infrastructure(format!("session registry lock poisoned: {e}"))
        })
    }
}

/// Runs [`SessionRegistry::evict_stale`] every `period` until the registry
/// is dropped.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_sweeper<G: Game>(
    registry: &Arc<SessionRegistry<G>>,
    period: Duration,
    idle_ttl: TimeDelta,
) -> JoinHandle<()> {
    let registry = Arc::downgrade(registry);
    tokio::spawn(async move {
        let mut ticks = interval_at(Instant::now() + period, period);
        loop {
            ticks.tick().await;
            let Some(registry) = registry.upgrade() else {
                break;
            };
            match registry.evict_stale(idle_ttl) {
                Ok(0) => {}
                Ok(evicted) => info!(evicted, "stale sessions evicted"),
                Err(e) => warn!(error = %e, "session sweep failed"),
            }
        }
    })
}
