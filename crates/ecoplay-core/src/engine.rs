//! The engine seam.
//!
//! A [`Game`] owns the read-only content of one playthrough and exposes a
//! pure transition function over an explicit session state. The session
//! runtime feeds it one [`Input`] at a time and carries out the
//! [`Directive`]s it returns; nothing else mutates the state.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::rng::DeterministicRng;
use crate::schedule::Ticket;

/// Interval between countdown ticks.
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// One serialized input to a game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<A> {
    /// An action chosen by the player.
    Player(A),
    /// A deferred transition previously requested with
    /// [`Directive::AdvanceAfter`] has come due.
    Deferred(Ticket),
    /// One countdown period has elapsed.
    Tick,
}

/// Side effects the runtime performs on behalf of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Deliver `Input::Deferred(ticket)` after `delay`.
    AdvanceAfter {
        /// How long the current screen stays up before advancing.
        delay: Duration,
        /// Ticket the engine will check on delivery.
        ticket: Ticket,
    },
    /// Begin delivering `Input::Tick` every [`COUNTDOWN_PERIOD`].
    StartCountdown,
    /// Stop delivering ticks.
    StopCountdown,
}

/// Result of one transition: the new state plus what happened.
#[derive(Debug)]
pub struct Step<S, E> {
    /// The state after the transition.
    pub state: S,
    /// Events describing the transition, in order.
    pub events: Vec<E>,
    /// Scheduling requests for the runtime.
    pub directives: Vec<Directive>,
}

impl<S, E> Step<S, E> {
    /// A transition that produced no events or directives.
    #[must_use]
    pub fn quiet(state: S) -> Self {
        Self {
            state,
            events: Vec::new(),
            directives: Vec::new(),
        }
    }

    /// Appends an event.
    pub fn emit(&mut self, event: E) {
        self.events.push(event);
    }

    /// Appends a directive.
    pub fn direct(&mut self, directive: Directive) {
        self.directives.push(directive);
    }
}

/// A game engine bound to the content of one playthrough.
pub trait Game: Send + Sync + 'static {
    /// Mutable session state for one playthrough.
    type State: Send + 'static;
    /// Player actions the engine understands.
    type Action: Send + fmt::Debug + 'static;
    /// Events reported back to the presentation adapter.
    type Event: Serialize + Clone + Send + Sync + fmt::Debug + 'static;
    /// Read-only projection of the state for the presentation adapter.
    type View: Serialize + Clone + Send + Sync + 'static;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Creates a fresh session state and presents the first item.
    fn start(&self, rng: &mut dyn DeterministicRng) -> Step<Self::State, Self::Event>;

    /// Applies one input to `state`.
    fn reduce(
        &self,
        state: Self::State,
        input: Input<Self::Action>,
        rng: &mut dyn DeterministicRng,
    ) -> Step<Self::State, Self::Event>;

    /// Projects `state` for display.
    fn view(&self, state: &Self::State) -> Self::View;

    /// Whether `state` is terminal.
    fn is_ended(&self, state: &Self::State) -> bool;
}
