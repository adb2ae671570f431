//! Error types for the conversation log.

use thiserror::Error;

/// Errors raised by conversation log operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// A required text field was empty after trimming.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// `SQLite` storage error (sync).
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// `SQLite` storage error (async).
    #[error("tokio-rusqlite error: {0}")]
    TokioSqlite(#[from] tokio_rusqlite::Error),

    /// A stored row carried an out-of-range timestamp.
    #[error("invalid stored timestamp: {0}")]
    InvalidTimestamp(i64),
}

impl HistoryError {
    /// True when the error is caller input validation rather than a
    /// persistence failure. Callers map the two differently: validation is
    /// the caller's bug, persistence failures must not block the response.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyField(_))
    }
}

/// Convenience result alias for conversation log operations.
pub type HistoryResult<T> = Result<T, HistoryError>;
