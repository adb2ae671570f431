//! Conversation log.
//!
//! Append-only record of every user/bot exchange with time-ordered retrieval.
//! The log is never updated or deleted by the core; auditability of the
//! conversation history is the entire point of persistence.

pub mod error;
pub mod exchange;
pub mod store;

pub use error::{HistoryError, HistoryResult};
pub use exchange::Exchange;
pub use store::{ConversationStore, SqliteExchangeStore};
