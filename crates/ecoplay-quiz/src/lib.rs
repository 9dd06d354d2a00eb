//! Ecoplay — Quiz engine.
//!
//! Responsible for question progression, the one-answer-per-question lock,
//! scoring, and the final performance band.

pub mod application;
pub mod domain;
