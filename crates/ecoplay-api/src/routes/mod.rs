//! Route modules organized by game.

pub mod adventure;
pub mod content;
pub mod health;
pub mod quiz;
pub mod words;
