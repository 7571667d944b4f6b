use crate::config::Config;
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynMacQueryRepository, DynPaymentGateway},
    config::{ConnectionPool, StripeConfig},
    di::DependenciesInject,
    service::StripeClient,
    utils::Metrics,
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub stripe: StripeConfig,
    pub payment_gateway: DynPaymentGateway,
    pub mac_query: DynMacQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let gateway = StripeClient::new(&config.stripe)
            .context("Failed to build payment gateway client")?;

        let di_container = DependenciesInject::new(pool);

        Ok(Self::from_parts(
            config.stripe.clone(),
            Arc::new(gateway) as DynPaymentGateway,
            di_container.mac_query,
        ))
    }

    /// Assembles the state from already-built handles and registers the
    /// request metrics under the `api` prefix.
    pub fn from_parts(
        stripe: StripeConfig,
        payment_gateway: DynPaymentGateway,
        mac_query: DynMacQueryRepository,
    ) -> Self {
        let mut registry = Registry::default();
        let metrics = Arc::new(Metrics::new());
        metrics.register(&mut registry, "api");

        Self {
            stripe,
            payment_gateway,
            mac_query,
            registry: Arc::new(Mutex::new(registry)),
            metrics,
        }
    }
}
