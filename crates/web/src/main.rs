use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::{ConnectionManager, env_flag},
    utils::{Telemetry, init_logger},
};
use tracing::info;
use web::{config::Config, handler::AppRouter, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = env_flag("DEV_MODE", false)?;
    let is_enable_file = env_flag("ENABLE_FILE_LOG", false)?;

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = config
        .otel_endpoint
        .as_deref()
        .map(|endpoint| Telemetry::init("web", endpoint))
        .transpose()
        .context("Failed to initialize telemetry")?;

    let _log_guard = init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        "web",
        is_dev,
        is_enable_file,
    );

    info!("🚀 Starting web server initialization...");
    info!("🔗 Proxying payment intents to {}", config.api_url);

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
        .await
        .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool, &config).context("Failed to create AppState")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down web server...");

    if let Some(telemetry) = telemetry {
        telemetry.shutdown()?;
    }

    Ok(())
}
