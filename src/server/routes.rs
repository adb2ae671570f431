//! HTTP route handlers for the responder API.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::history::exchange::Exchange;

use super::state::AppState;

/// Default page size for the history endpoint.
const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/chat", post(chat))
        .route("/api/conversations", get(conversations))
        .route("/api/history", get(history))
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "parley-bot",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Chat request.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
}

/// Chat response.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The canned response.
    pub response: String,
    /// Whether the message was an exit command.
    pub exit: bool,
    /// Whether the exchange was persisted.
    pub saved: bool,
    /// Recorded timestamp (RFC 3339), present when persisted.
    pub timestamp: Option<String>,
}

/// Handle one chat message: respond, then log best-effort.
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    let message = request.message.trim().to_string();
    if message.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Message cannot be empty".to_string()));
    }

    let result = state.matcher.respond(&message);

    // The response is the user-facing contract; the log is an audit side
    // effect. A failed write must not block the reply.
    let (saved, timestamp) = match state.store.record(&message, &result.response).await {
        Ok(exchange) => (true, Some(exchange.timestamp.to_rfc3339())),
        Err(err) => {
            tracing::warn!("could not save exchange: {err}");
            (false, None)
        }
    };

    Ok(Json(ChatResponse {
        response: result.response,
        exit: result.is_exit,
        saved,
        timestamp,
    }))
}

/// Listing of recorded exchanges, most recent first.
#[derive(Debug, Serialize)]
pub struct ConversationsResponse {
    /// The exchanges.
    pub conversations: Vec<Exchange>,
    /// Number of exchanges returned.
    pub count: usize,
}

/// Return every recorded exchange.
async fn conversations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConversationsResponse>, (StatusCode, String)> {
    let exchanges = state.store.all().await.map_err(|err| {
        tracing::error!("history query failed: {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "could not load history".to_string(),
        )
    })?;

    let count = exchanges.len();
    Ok(Json(ConversationsResponse {
        conversations: exchanges,
        count,
    }))
}

/// Query parameters for the history endpoint.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Maximum number of exchanges to return.
    pub limit: Option<u32>,
}

/// Return the most recent exchanges.
async fn history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ConversationsResponse>, (StatusCode, String)> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let exchanges = state.store.recent(limit).await.map_err(|err| {
        tracing::error!("history query failed: {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "could not load history".to_string(),
        )
    })?;

    let count = exchanges.len();
    Ok(Json(ConversationsResponse {
        conversations: exchanges,
        count,
    }))
}
