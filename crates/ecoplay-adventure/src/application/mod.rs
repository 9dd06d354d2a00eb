//! Application layer for the Eco-Adventure context.

pub mod command_handlers;
pub mod engine;
pub mod fallback;
pub mod source;
pub mod views;
