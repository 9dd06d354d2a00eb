//! Application layer for the Word game context.

pub mod command_handlers;
pub mod engine;
pub mod fallback;
pub mod source;
pub mod views;
