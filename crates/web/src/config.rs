use anyhow::{Context, Result};
use shared::config::{StripeConfig, env_or, env_parse, env_required};
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub database_url: String,
    pub db_max_conn: u32,
    pub proxy_timeout: Duration,
    pub static_dir: PathBuf,
    pub otel_endpoint: Option<String>,
    pub stripe: StripeConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = env_parse("WEB_PORT", 4000u16)?;
        let api_url = env_or("API_URL", "http://localhost:4001")
            .trim_end_matches('/')
            .to_string();
        let database_url = env_required("DATABASE_URL")?;
        let db_max_conn = env_parse("DB_MAX_CONN", 5u32)?;
        let proxy_timeout_secs = env_parse("PROXY_TIMEOUT_SECS", 10u64)?;
        let static_dir = PathBuf::from(env_or("STATIC_DIR", "./static"));
        let otel_endpoint = std::env::var("OTEL_ENDPOINT")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let stripe = StripeConfig::init().context("Invalid payment processor configuration")?;

        Ok(Self {
            port,
            api_url,
            database_url,
            db_max_conn,
            proxy_timeout: Duration::from_secs(proxy_timeout_secs),
            static_dir,
            otel_endpoint,
            stripe,
        })
    }
}
