//! Ecoplay Session — the runtime that drives game engines.
//!
//! Every active playthrough is owned by one actor task. Player actions,
//! deferred advances, and countdown ticks all arrive on the actor's
//! channel, so a session's state is only ever touched by one input at a
//! time. Restarting a session bumps its epoch; timer messages stamped with
//! an older epoch are dropped on arrival.

pub mod registry;
pub mod runtime;
pub mod snapshot;

pub use registry::{ENDED_SESSION_GRACE, SessionRegistry, spawn_sweeper};
pub use runtime::{GameSnapshot, SessionHandle, spawn_session};
pub use snapshot::SessionSnapshot;
