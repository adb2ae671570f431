//! Startup helpers for the responder.
//!
//! Dispatches between the HTTP server (default) and the interactive CLI
//! loop (`parley cli`).

use std::process::ExitCode;
use std::sync::Arc;

use crate::cli;
use crate::config::AppConfig;
use crate::server::{self, AppState};

/// Run the responder.
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Parley v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env();
    tracing::info!("Database: {}", config.db_path.display());

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    let state = match rt.block_on(AppState::new(&config)) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to create state: {e}");
            return ExitCode::from(1);
        }
    };

    if cli_mode() {
        if let Err(e) = rt.block_on(cli::run_cli(state)) {
            tracing::error!("CLI error: {e}");
            return ExitCode::from(1);
        }
        return ExitCode::SUCCESS;
    }

    if let Err(e) = rt.block_on(server::run_server(state, config.port)) {
        tracing::error!("Server error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Initialize application state without starting the server.
///
/// # Errors
/// Returns an error if state creation fails.
pub async fn initialize(config: &AppConfig) -> anyhow::Result<Arc<AppState>> {
    AppState::new(config).await
}

/// True when the first argument asks for the interactive CLI loop.
#[must_use]
pub fn cli_mode() -> bool {
    std::env::args().nth(1).is_some_and(|arg| arg == "cli")
}
