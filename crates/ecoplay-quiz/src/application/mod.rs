//! Application layer for the Quiz context.

pub mod command_handlers;
pub mod engine;
pub mod source;
pub mod views;
