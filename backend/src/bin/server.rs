//! Period Sync HTTP Server Binary
//!
//! Loads configuration, sets up the HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin period-sync-server
//!
//! PERIOD_SYNC_TIMEZONE=Europe/Copenhagen PERIOD_SYNC_LOCALE=da-DK \
//!   cargo run --bin period-sync-server
//! ```
//!
//! # Environment Variables
//!
//! - `PERIOD_SYNC_CONFIG`: Path to a TOML config file (default: `period-sync.toml` if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `PERIOD_SYNC_TIMEZONE`: Fallback timezone (default: UTC)
//! - `PERIOD_SYNC_LOCALE`: Fallback label locale (default: en-GB)
//! - `PERIOD_SYNC_MAX_SPAN_DAYS`: Longest accepted range in days (default: 3660)
//! - `RUST_LOG`: Log filter (default: info)

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use period_sync::clock::SystemClock;
use period_sync::config::ServiceConfig;
use period_sync::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Period Sync HTTP Server");

    let config = ServiceConfig::load()?;
    let settings = config.generator_settings()?;
    info!(
        timezone = %settings.default_timezone,
        locale = %settings.default_locale,
        max_span_days = settings.max_span_days,
        "Configuration loaded"
    );

    let state = AppState::new(settings, Arc::new(SystemClock));
    let app = create_router(state);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
