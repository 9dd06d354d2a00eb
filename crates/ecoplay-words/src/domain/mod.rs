//! Domain layer for the Word game context.

pub mod aggregates;
pub mod commands;
pub mod events;
pub mod performance;
pub mod scramble;
pub mod word;
