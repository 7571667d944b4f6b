use anyhow::{Context, Result};
use shared::config::{StripeConfig, env_flag, env_parse, env_required};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub db_max_conn: u32,
    pub run_migrations: bool,
    pub otel_endpoint: Option<String>,
    pub stripe: StripeConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = env_parse("API_PORT", 4001u16)?;
        let database_url = env_required("DATABASE_URL")?;
        let db_max_conn = env_parse("DB_MAX_CONN", 5u32)?;
        let run_migrations = env_flag("RUN_MIGRATIONS", false)?;
        let otel_endpoint = std::env::var("OTEL_ENDPOINT")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let stripe = StripeConfig::init().context("Invalid payment processor configuration")?;

        Ok(Self {
            port,
            database_url,
            db_max_conn,
            run_migrations,
            otel_endpoint,
            stripe,
        })
    }
}
