//! Domain model for the Eco-Adventure context.

pub mod aggregates;
pub mod commands;
pub mod ending;
pub mod events;
pub mod scenario;
