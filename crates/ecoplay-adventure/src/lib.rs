//! Ecoplay — Eco-Adventure engine.
//!
//! Responsible for scenario progression, choice scoring, feedback screens,
//! the chapter cap, and ending classification.

pub mod application;
pub mod domain;
