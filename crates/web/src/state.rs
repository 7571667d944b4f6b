use crate::{config::Config, purchase::PurchaseRecorder};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use reqwest::Client;
use shared::{
    abstract_trait::{DynMacQueryRepository, DynPaymentGateway, DynPurchaseRepository},
    config::ConnectionPool,
    di::DependenciesInject,
    service::StripeClient,
    utils::Metrics,
};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::warn;

/// Where the payment-intent proxy forwards to.
#[derive(Clone)]
pub struct ApiUpstream {
    pub client: Client,
    pub base_url: String,
}

/// Values every rendered page needs.
#[derive(Clone)]
pub struct PageContext {
    pub stripe_key: String,
}

#[derive(Clone)]
pub struct AppState {
    pub pages: PageContext,
    pub upstream: ApiUpstream,
    pub mac_query: DynMacQueryRepository,
    pub purchases: PurchaseRecorder,
    pub static_dir: PathBuf,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let payment_gateway = if config.stripe.has_secret() {
            let client = StripeClient::new(&config.stripe)
                .context("Failed to build payment gateway client")?;
            Some(Arc::new(client) as DynPaymentGateway)
        } else {
            warn!("⚠️ STRIPE_SECRET is not set, purchases will not be recorded");
            None
        };

        let di_container = DependenciesInject::new(pool);

        Self::from_parts(
            config,
            payment_gateway,
            di_container.mac_query,
            di_container.purchases,
        )
    }

    pub fn from_parts(
        config: &Config,
        payment_gateway: Option<DynPaymentGateway>,
        mac_query: DynMacQueryRepository,
        purchases: DynPurchaseRepository,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.proxy_timeout)
            .build()
            .context("Failed to build proxy HTTP client")?;

        let mut registry = Registry::default();
        let metrics = Arc::new(Metrics::new());
        metrics.register(&mut registry, "web");

        Ok(Self {
            pages: PageContext {
                stripe_key: config.stripe.key.clone(),
            },
            upstream: ApiUpstream {
                client,
                base_url: config.api_url.clone(),
            },
            purchases: PurchaseRecorder::new(payment_gateway, mac_query.clone(), purchases),
            mac_query,
            static_dir: config.static_dir.clone(),
            registry: Arc::new(Mutex::new(registry)),
            metrics,
        })
    }
}
