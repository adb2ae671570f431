//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::engine::IntentMatcher;
use crate::history::store::{ConversationStore, SqliteExchangeStore};

/// Shared application state.
///
/// The matcher is immutable after construction and the store synchronizes
/// internally, so one instance serves all concurrent requests.
pub struct AppState {
    /// Intent matcher over the stock rule table.
    pub matcher: IntentMatcher,
    /// Conversation log.
    pub store: Arc<dyn ConversationStore>,
}

impl AppState {
    /// Build application state from configuration.
    ///
    /// # Errors
    /// Returns an error if the rule table fails to compile or the database
    /// cannot be opened.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Arc<Self>> {
        let matcher = IntentMatcher::with_defaults()?;
        let store = SqliteExchangeStore::new(&config.db_path).await?;

        Ok(Arc::new(Self {
            matcher,
            store: Arc::new(store),
        }))
    }
}
