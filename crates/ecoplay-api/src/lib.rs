//! Ecoplay API — HTTP adapter over the mini-game engines.
//!
//! Serves the content provider endpoints and one session resource per game.
//! Route handlers translate requests into engine actions and return the
//! session snapshot produced by the session runtime.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
