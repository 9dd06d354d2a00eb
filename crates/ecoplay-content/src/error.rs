//! Content loading errors.

use std::path::PathBuf;

use ecoplay_core::error::DomainError;
use thiserror::Error;

/// Errors raised while building a content catalog or client.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A catalog file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A catalog file is not valid YAML for its content kind.
    #[error("failed to parse {path}: {source}")]
    Yaml {
        /// The file.
        path: PathBuf,
        /// Underlying error.
        source: serde_yaml::Error,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl From<ContentError> for DomainError {
    fn from(err: ContentError) -> Self {
        Self::ContentUnavailable(err.to_string())
    }
}
