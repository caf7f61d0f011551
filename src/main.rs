mod app;
mod config;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::DashboardConfig;
use crate::logging::LoggingConfig;
use crate::services::data_store;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())?;

    let config = DashboardConfig::from_env();
    let addr = config.socket_addr().map_err(anyhow::Error::msg)?;

    // Load errors are fatal
    let table = data_store::load(&config.data_path)
        .with_context(|| format!("Failed to load price history from {:?}", config.data_path))?;

    let state = AppState::new(table, config);
    let app = app::create_app(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Stock dashboard backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
