use anyhow::{Context, Result};
use nse_oi_narrator::{api_server_axum, logging, AppConfig, OiCommands, RunMode};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging()?;

    // Fail before serving anything when the credential is absent
    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(mode = ?config.mode, "configuration loaded");

    match config.mode {
        RunMode::Server => api_server_axum::start_server(&config).await?,
        RunMode::Once => OiCommands::run_once(&config).await?,
    }

    Ok(())
}
