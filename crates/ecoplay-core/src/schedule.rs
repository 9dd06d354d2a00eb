//! Deferred transitions with cancellation.
//!
//! Engines that let a result linger on screen before moving on ask the
//! runtime to call back later. Each request is identified by a [`Ticket`];
//! the engine only honours the most recent one it issued, so any advance
//! that happens in the meantime (a skip, the countdown running out) turns
//! the pending callback into a no-op.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::Directive;

/// Identifies one deferred transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket(u64);

/// Issues and redeems tickets for one session.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    issued: u64,
    pending: Option<Ticket>,
}

impl Schedule {
    /// Issues a new ticket, superseding any pending one, and returns the
    /// directive asking the runtime to deliver it after `delay`.
    pub fn defer(&mut self, delay: Duration) -> Directive {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        Directive::AdvanceAfter { delay, ticket }
    }

    /// Consumes `ticket` if it is the pending one.
    ///
    /// Returns `false` for stale or already-redeemed tickets.
    pub fn redeem(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drops the pending ticket, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a deferred transition is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
