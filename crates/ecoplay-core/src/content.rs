//! Content provenance.

use serde::Serialize;

/// Where the content of a session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentOrigin {
    /// The configured content provider answered.
    Provider,
    /// The provider failed and the built-in list was substituted.
    Fallback,
}
