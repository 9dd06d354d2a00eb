//! Ecoplay — Word game engine.
//!
//! Responsible for the hangman and scramble modes: letter guessing, answer
//! checking, hints, skips, the countdown, and the end-of-game summary.

pub mod application;
pub mod domain;
