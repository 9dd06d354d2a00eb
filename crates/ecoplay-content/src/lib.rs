//! Ecoplay — content provider.
//!
//! Serves scenarios, questions, and words from a YAML catalog or the
//! built-in lists, and fetches them from a remote provider over HTTP.

pub mod catalog;
pub mod error;
pub mod http;
pub mod markdown;
pub mod questions;
