//! labelpress — local label rendering and printing service.
//!
//! Renders product labels (shop title + QR code + item fields), sends them to
//! a physical printer, and forwards inventory payloads to a remote API.

mod app;
mod config;
mod server;
mod services;

use tracing_subscriber::EnvFilter;

use crate::app::AppState;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load();
    tracing::info!(port = config.server_port, "Starting labelpress");

    let state = AppState::new(config);
    server::start_server(state).await
}
