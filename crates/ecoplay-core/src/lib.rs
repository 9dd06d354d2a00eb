//! Ecoplay Core — shared engine abstractions.
//!
//! This crate defines the traits and types every game engine depends on:
//! the `Game` seam driven by the session runtime, deferred-transition
//! tickets, score banding, and the clock/RNG abstractions. It contains no
//! infrastructure code.

pub mod band;
pub mod clock;
pub mod content;
pub mod engine;
pub mod error;
pub mod rng;
pub mod schedule;
