use crate::config::env::{env_or, env_parse};
use anyhow::Result;
use std::time::Duration;

pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Processor credentials. An empty `secret` means payments are not
/// configured; handlers refuse to call the processor in that case.
#[derive(Clone)]
pub struct StripeConfig {
    pub secret: String,
    pub key: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl StripeConfig {
    pub fn init() -> Result<Self> {
        let timeout_secs: u64 = env_parse("PROCESSOR_TIMEOUT_SECS", 15)?;

        Ok(Self {
            secret: env_or("STRIPE_SECRET", ""),
            key: env_or("STRIPE_KEY", ""),
            api_base: env_or("STRIPE_API_BASE", DEFAULT_STRIPE_API_BASE),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn has_secret(&self) -> bool {
        !self.secret.trim().is_empty()
    }
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret", &if self.has_secret() { "<set>" } else { "<empty>" })
            .field("key", &self.key)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}
