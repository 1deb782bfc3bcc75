//! stockpile gateway binary.
//!
//! - Config: `$STOCKPILE_CONFIG` or `stockpile.yaml`, defaults when absent
//! - Logging: `RUST_LOG` via tracing-subscriber's env filter
//! - Graceful shutdown on Ctrl-C

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

use stockpile_core::error::{InventoryError, Result};
use stockpile_gateway::{app_state, config, router};

const CONFIG_ENV: &str = "STOCKPILE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "stockpile.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "stockpile-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| InventoryError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| InventoryError::Internal(format!("server failed: {e}")))?;

    tracing::info!("stockpile-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down gracefully");
}
