//! The per-session actor and the handle callers talk to it through.
//!
//! The actor owns the engine state and is the only code that mutates it.
//! Timer tasks hold a weak sender to the actor's mailbox, so dropping every
//! [`SessionHandle`] shuts the session down even while a countdown is
//! running.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use ecoplay_core::clock::Clock;
use ecoplay_core::engine::{COUNTDOWN_PERIOD, Directive, Game, Input, Step};
use ecoplay_core::error::DomainError;
use ecoplay_core::rng::SharedRng;
use ecoplay_core::schedule::Ticket;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::snapshot::SessionSnapshot;

/// Events held between snapshots; the oldest are dropped beyond this.
pub const MAX_BUFFERED_EVENTS: usize = 256;

const MAILBOX_CAPACITY: usize = 32;

/// Snapshot type for a given engine.
pub type GameSnapshot<G> = SessionSnapshot<<G as Game>::View, <G as Game>::Event>;

type Reply<G> = oneshot::Sender<Result<GameSnapshot<G>, DomainError>>;

enum Message<G: Game> {
    Act { action: G::Action, reply: Reply<G> },
    Snapshot { reply: Reply<G> },
    Restart { reply: Reply<G> },
    Deferred { epoch: u64, ticket: Ticket },
    Tick { epoch: u64 },
}

fn poisoned(e: impl fmt::Display) -> DomainError {
    DomainError::Infrastructure(format!("rng lock poisoned: {e}"))
}

fn begin<G: Game>(game: &G, rng: &SharedRng) -> Result<Step<G::State, G::Event>, DomainError> {
    let mut rng = rng.lock().map_err(poisoned)?;
    Ok(game.start(&mut *rng))
}

struct SessionActor<G: Game> {
    id: Uuid,
    game: G,
    state: Option<G::State>,
    epoch: u64,
    started_at: DateTime<Utc>,
    clock: Arc<dyn Clock + Send + Sync>,
    rng: SharedRng,
    events: VecDeque<G::Event>,
    countdown: Option<JoinHandle<()>>,
    mailbox: mpsc::WeakSender<Message<G>>,
    ended: Arc<AtomicBool>,
}

impl<G: Game> SessionActor<G> {
    async fn run(mut self, mut inbox: mpsc::Receiver<Message<G>>) {
        while let Some(message) = inbox.recv().await {
            match message {
                Message::Act { action, reply } => {
                    debug!(session_id = %self.id, ?action, "player action");
                    let result = self.feed(Input::Player(action)).and_then(|()| self.snapshot());
                    let _ = reply.send(result);
                }
                Message::Snapshot { reply } => {
                    let _ = reply.send(self.snapshot());
                }
                Message::Restart { reply } => {
                    let result = self.restart().and_then(|()| self.snapshot());
                    let _ = reply.send(result);
                }
                Message::Deferred { epoch, ticket } if epoch == self.epoch => {
                    if let Err(e) = self.feed(Input::Deferred(ticket)) {
                        warn!(session_id = %self.id, error = %e, "deferred advance failed");
                    }
                }
                Message::Tick { epoch } if epoch == self.epoch => {
                    if let Err(e) = self.feed(Input::Tick) {
                        warn!(session_id = %self.id, error = %e, "countdown tick failed");
                    }
                }
                Message::Deferred { epoch, .. } | Message::Tick { epoch } => {
                    debug!(
                        session_id = %self.id,
                        epoch,
                        current = self.epoch,
                        "stale timer message dropped"
                    );
                }
            }
        }
        self.stop_countdown();
        info!(session_id = %self.id, game = self.game.name(), "session closed");
    }

    fn feed(&mut self, input: Input<G::Action>) -> Result<(), DomainError> {
        let step = {
            let mut rng = self.rng.lock().map_err(poisoned)?;
            let state = self.state.take().ok_or_else(|| lost_state(self.id))?;
            self.game.reduce(state, input, &mut *rng)
        };
        self.absorb(step);
        Ok(())
    }

    fn restart(&mut self) -> Result<(), DomainError> {
        let first = begin(&self.game, &self.rng)?;
        self.epoch += 1;
        self.stop_countdown();
        self.events.clear();
        self.started_at = self.clock.now();
        self.absorb(first);
        info!(
            session_id = %self.id,
            game = self.game.name(),
            epoch = self.epoch,
            "session restarted"
        );
        Ok(())
    }

    fn absorb(&mut self, step: Step<G::State, G::Event>) {
        for event in step.events {
            if self.events.len() == MAX_BUFFERED_EVENTS {
                self.events.pop_front();
            }
            self.events.push_back(event);
        }
        for directive in step.directives {
            self.carry_out(directive);
        }
        let ended = self.game.is_ended(&step.state);
        if ended {
            self.stop_countdown();
        }
        self.ended.store(ended, Ordering::Release);
        self.state = Some(step.state);
    }

    fn carry_out(&mut self, directive: Directive) {
        match directive {
            Directive::AdvanceAfter { delay, ticket } => {
                let mailbox = self.mailbox.clone();
                let epoch = self.epoch;
                tokio::spawn(async move {
                    sleep(delay).await;
                    if let Some(tx) = mailbox.upgrade() {
                        let _ = tx.send(Message::Deferred { epoch, ticket }).await;
                    }
                });
            }
            Directive::StartCountdown => {
                self.stop_countdown();
                let mailbox = self.mailbox.clone();
                let epoch = self.epoch;
                self.countdown = Some(tokio::spawn(async move {
                    let mut ticks =
                        interval_at(Instant::now() + COUNTDOWN_PERIOD, COUNTDOWN_PERIOD);
                    loop {
                        ticks.tick().await;
                        let Some(tx) = mailbox.upgrade() else {
                            break;
                        };
                        if tx.send(Message::Tick { epoch }).await.is_err() {
                            break;
                        }
                    }
                }));
            }
            Directive::StopCountdown => self.stop_countdown(),
        }
    }

    fn stop_countdown(&mut self) {
        if let Some(task) = self.countdown.take() {
            task.abort();
        }
    }

    fn snapshot(&mut self) -> Result<GameSnapshot<G>, DomainError> {
        let state = self.state.as_ref().ok_or_else(|| lost_state(self.id))?;
        let view = self.game.view(state);
        let ended = self.game.is_ended(state);
        Ok(SessionSnapshot {
            session_id: self.id,
            game: self.game.name(),
            epoch: self.epoch,
            started_at: self.started_at,
            view,
            events: self.events.drain(..).collect(),
            ended,
        })
    }
}

fn lost_state(id: Uuid) -> DomainError {
    DomainError::Infrastructure(format!("session {id} has no state"))
}

/// Starts `game` in a new actor task and returns a handle to it.
///
/// Must be called from within a Tokio runtime.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the shared RNG lock is poisoned.
pub fn spawn_session<G: Game>(
    id: Uuid,
    game: G,
    clock: Arc<dyn Clock + Send + Sync>,
    rng: SharedRng,
) -> Result<SessionHandle<G>, DomainError> {
    let first = begin(&game, &rng)?;
    let (tx, inbox) = mpsc::channel(MAILBOX_CAPACITY);
    let ended = Arc::new(AtomicBool::new(false));
    let mut actor = SessionActor {
        id,
        game,
        state: None,
        epoch: 0,
        started_at: clock.now(),
        clock,
        rng,
        events: VecDeque::new(),
        countdown: None,
        mailbox: tx.downgrade(),
        ended: Arc::clone(&ended),
    };
    actor.absorb(first);
    info!(session_id = %id, game = actor.game.name(), "session started");
    tokio::spawn(actor.run(inbox));
    Ok(SessionHandle {
        id,
        mailbox: tx,
        ended,
    })
}

/// Cheap, cloneable access to one running session.
pub struct SessionHandle<G: Game> {
    id: Uuid,
    mailbox: mpsc::Sender<Message<G>>,
    ended: Arc<AtomicBool>,
}

impl<G: Game> Clone for SessionHandle<G> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            mailbox: self.mailbox.clone(),
            ended: Arc::clone(&self.ended),
        }
    }
}

impl<G: Game> fmt::Debug for SessionHandle<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle").field("id", &self.id).finish_non_exhaustive()
    }
}

impl<G: Game> SessionHandle<G> {
    /// The session identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether the game had reached its end as of the last processed
    /// message.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::Acquire)
    }

    /// Applies a player action and returns the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the session task has stopped
    /// or the shared RNG lock is poisoned.
    pub async fn act(&self, action: G::Action) -> Result<GameSnapshot<G>, DomainError> {
        self.request(|reply| Message::Act { action, reply }).await
    }

    /// Returns the current snapshot, draining buffered events.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the session task has stopped.
    pub async fn snapshot(&self) -> Result<GameSnapshot<G>, DomainError> {
        self.request(|reply| Message::Snapshot { reply }).await
    }

    /// Starts the playthrough over with the same content.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the session task has stopped
    /// or the shared RNG lock is poisoned.
    pub async fn restart(&self) -> Result<GameSnapshot<G>, DomainError> {
        self.request(|reply| Message::Restart { reply }).await
    }

    async fn request(
        &self,
        message: impl FnOnce(Reply<G>) -> Message<G>,
    ) -> Result<GameSnapshot<G>, DomainError> {
        let (reply, response) = oneshot::channel();
        self.mailbox
            .send(message(reply))
            .await
            .map_err(|_| self.stopped())?;
        response.await.map_err(|_| self.stopped())?
    }

    fn stopped(&self) -> DomainError {
        DomainError::Infrastructure(format!("session {} has stopped", self.id))
    }
}
