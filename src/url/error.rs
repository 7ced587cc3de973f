//! URL error types.

use thiserror::Error;

/// Errors from checked URL assembly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// A URL segment was missing or not textual (e.g. an unset config value).
    #[error("Url must be a string. Received {0}")]
    NotAString(String),
}
