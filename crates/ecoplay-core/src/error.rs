//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
///
/// Player mistakes (a repeated guess, a second answer) are not errors; the
/// engines ignore them. These variants cover the conditions that have to
/// leave the engine.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The content provider could not be reached or returned unusable data.
    #[error("content unavailable: {0}")]
    ContentUnavailable(String),

    /// No active session exists with the given identifier.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// A validation error in caller-supplied input.
    #[error("validation error: {0}")]
    Validation(String),

    /// An engine operation was called outside its contract.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// An infrastructure error (runtime channel closed, I/O, decoding).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
