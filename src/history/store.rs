//! Append-only exchange storage.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use chrono::{TimeZone, Utc};
use tokio_rusqlite::Connection;

use crate::history::error::{HistoryError, HistoryResult};
use crate::history::exchange::Exchange;

/// Boxed future type for store operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Append-only conversation log.
///
/// `record` serializes id assignment: two concurrent calls never receive the
/// same id. Retrievals may run concurrently with writes and observe either
/// the pre- or post-insert state.
pub trait ConversationStore: Send + Sync {
    /// Append one exchange, assigning its id and timestamp.
    ///
    /// Durable before returning: once this resolves, the exchange is visible
    /// to every subsequent retrieval.
    ///
    /// # Errors
    /// Returns a validation error if either argument is empty after trimming,
    /// or a persistence error if storage access fails.
    fn record(
        &self,
        user_input: &str,
        bot_response: &str,
    ) -> StoreFuture<'_, HistoryResult<Exchange>>;

    /// Load up to `limit` exchanges, most recent first, ties broken by id
    /// descending.
    ///
    /// # Errors
    /// Returns an error if storage access fails.
    fn recent(&self, limit: u32) -> StoreFuture<'_, HistoryResult<Vec<Exchange>>>;

    /// Load every exchange, same ordering as [`recent`](Self::recent).
    ///
    /// # Errors
    /// Returns an error if storage access fails.
    fn all(&self) -> StoreFuture<'_, HistoryResult<Vec<Exchange>>>;
}

/// Row shape shared by the retrieval queries.
type ExchangeRow = (i64, String, String, i64);

/// `SQLite` implementation of the conversation log.
pub struct SqliteExchangeStore {
    conn: Connection,
    table: String,
}

impl SqliteExchangeStore {
    /// Default table name for exchanges.
    pub const DEFAULT_TABLE: &'static str = "exchanges";

    /// Open the database and create the exchange table if needed.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub async fn new(path: &Path) -> HistoryResult<Self> {
        let conn = Connection::open(path.to_path_buf()).await?;
        let table = Self::DEFAULT_TABLE.to_string();
        let table_name = table.clone();

        conn.call(move |conn| {
            conn.execute_batch(&format!(
                "CREATE TABLE IF NOT EXISTS {table_name} (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    user_input TEXT NOT NULL,
                    bot_response TEXT NOT NULL,
                    ts INTEGER NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_{table_name}_ts
                    ON {table_name} (ts DESC, id DESC);"
            ))?;
            Ok(())
        })
        .await?;

        Ok(Self { conn, table })
    }

    /// Convert raw rows into exchanges, validating stored timestamps.
    fn rows_to_exchanges(rows: Vec<ExchangeRow>) -> HistoryResult<Vec<Exchange>> {
        let mut exchanges = Vec::with_capacity(rows.len());
        for (id, user_input, bot_response, ts) in rows {
            let timestamp = Utc
                .timestamp_millis_opt(ts)
                .single()
                .ok_or(HistoryError::InvalidTimestamp(ts))?;
            exchanges.push(Exchange {
                id,
                user_input,
                bot_response,
                timestamp,
            });
        }
        Ok(exchanges)
    }
}

impl ConversationStore for SqliteExchangeStore {
    fn record(
        &self,
        user_input: &str,
        bot_response: &str,
    ) -> StoreFuture<'_, HistoryResult<Exchange>> {
        let user_input = user_input.trim().to_string();
        let bot_response = bot_response.trim().to_string();
        Box::pin(async move {
            if user_input.is_empty() {
                return Err(HistoryError::EmptyField("user input"));
            }
            if bot_response.is_empty() {
                return Err(HistoryError::EmptyField("bot response"));
            }

            let table = self.table.clone();
            let ts = Utc::now().timestamp_millis();
            let timestamp = Utc
                .timestamp_millis_opt(ts)
                .single()
                .ok_or(HistoryError::InvalidTimestamp(ts))?;

            let user = user_input.clone();
            let bot = bot_response.clone();
            let id = self
                .conn
                .call(move |conn| {
                    conn.execute(
                        &format!(
                            "INSERT INTO {table} (user_input, bot_response, ts)
                             VALUES (?1, ?2, ?3)"
                        ),
                        rusqlite::params![user, bot, ts],
                    )?;
                    Ok(conn.last_insert_rowid())
                })
                .await?;

            Ok(Exchange {
                id,
                user_input,
                bot_response,
                timestamp,
            })
        })
    }

    fn recent(&self, limit: u32) -> StoreFuture<'_, HistoryResult<Vec<Exchange>>> {
        Box::pin(async move {
            let table = self.table.clone();
            let limit = i64::from(limit);
            let rows = self
                .conn
                .call(move |conn| {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT id, user_input, bot_response, ts
                         FROM {table}
                         ORDER BY ts DESC, id DESC
                         LIMIT ?1"
                    ))?;
                    let rows = stmt
                        .query_map(rusqlite::params![limit], |row| {
                            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
                        })?
                        .collect::<Result<Vec<ExchangeRow>, rusqlite::Error>>()?;
                    Ok(rows)
                })
                .await?;

            Self::rows_to_exchanges(rows)
        })
    }

    fn all(&self) -> StoreFuture<'_, HistoryResult<Vec<Exchange>>> {
        Box::pin(async move {
            let table = self.table.clone();
            let rows = self
                .conn
                .call(move |conn| {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT id, user_input, bot_response, ts
                         FROM {table}
                         ORDER BY ts DESC, id DESC"
                    ))?;
                    let rows = stmt
                        .query_map([], |row| {
                            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
                        })?
                        .collect::<Result<Vec<ExchangeRow>, rusqlite::Error>>()?;
                    Ok(rows)
                })
                .await?;

            Self::rows_to_exchanges(rows)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;

    async fn temp_store() -> (tempfile::TempDir, SqliteExchangeStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteExchangeStore::new(&dir.path().join("parley.sqlite3"))
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_record_assigns_increasing_ids() {
        let (_dir, store) = temp_store().await;

        let first = store.record("hello", "Hi there!").await.unwrap();
        let second = store.record("bye", "Goodbye!").await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.user_input, "hello");
        assert_eq!(first.bot_response, "Hi there!");
    }

    #[tokio::test]
    async fn test_record_trims_whitespace() {
        let (_dir, store) = temp_store().await;

        let exchange = store.record("  hello  ", " Hi there! ").await.unwrap();
        assert_eq!(exchange.user_input, "hello");
        assert_eq!(exchange.bot_response, "Hi there!");
    }

    #[tokio::test]
    async fn test_record_rejects_empty_fields() {
        let (_dir, store) = temp_store().await;

        let err = store.record("   ", "Hi there!").await.unwrap_err();
        assert!(err.is_validation());

        let err = store.record("hello", "").await.unwrap_err();
        assert!(err.is_validation());

        // Nothing was persisted.
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recorded_exchange_is_immediately_visible() {
        let (_dir, store) = temp_store().await;

        let recorded = store.record("hello", "Hi there!").await.unwrap();
        let all = store.all().await.unwrap();
        assert_eq!(all, vec![recorded]);
    }

    #[tokio::test]
    async fn test_retrieval_orders_most_recent_first() {
        let (_dir, store) = temp_store().await;

        for i in 0..5 {
            store
                .record(&format!("message {i}"), "response")
                .await
                .unwrap();
        }

        let all = store.all().await.unwrap();
        assert_eq!(all.len(), 5);
        for pair in all.windows(2) {
            // Timestamp descending, id-descending tiebreak.
            assert!(
                pair[0].timestamp > pair[1].timestamp
                    || (pair[0].timestamp == pair[1].timestamp && pair[0].id > pair[1].id)
            );
        }
    }

    #[tokio::test]
    async fn test_recent_is_prefix_of_all() {
        let (_dir, store) = temp_store().await;

        for i in 0..6 {
            store
                .record(&format!("message {i}"), "response")
                .await
                .unwrap();
        }

        let all = store.all().await.unwrap();
        let recent = store.recent(4).await.unwrap();
        assert_eq!(recent.as_slice(), &all[..4]);

        // Asking for more than the store holds returns everything.
        let recent = store.recent(100).await.unwrap();
        assert_eq!(recent, all);
    }

    #[tokio::test]
    async fn test_concurrent_records_get_distinct_ids() {
        let (_dir, store) = temp_store().await;
        let store = Arc::new(store);

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .record(&format!("message {i}"), "response")
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(store.all().await.unwrap().len(), 8);
    }
}
