//! Persisted exchange record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded user/bot exchange.
///
/// Created once by [`ConversationStore::record`](super::ConversationStore::record);
/// never updated, never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Store-assigned id, strictly increasing across the log.
    pub id: i64,
    /// The user's message as received, whitespace-trimmed.
    pub user_input: String,
    /// The canned response that was served.
    pub bot_response: String,
    /// Instant the exchange was recorded (millisecond precision).
    pub timestamp: DateTime<Utc>,
}
