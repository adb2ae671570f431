//! Error types for the intent-matching engine.

use thiserror::Error;

/// Errors raised while constructing an [`IntentMatcher`](super::IntentMatcher).
///
/// Construction errors are fatal to startup; the matcher never fails once built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A rule was configured with no responses.
    #[error("rule pattern `{0}` has an empty response list")]
    EmptyResponses(String),

    /// The fallback response list is empty.
    #[error("fallback response list must not be empty")]
    EmptyFallbacks,

    /// A pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
