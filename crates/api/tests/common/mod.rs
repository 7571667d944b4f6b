#![allow(dead_code)]

use api::{handler::AppRouter, state::AppState};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::Value;
use shared::{
    abstract_trait::{
        DynMacQueryRepository, DynPaymentGateway, MacQueryRepositoryTrait, PaymentGatewayTrait,
    },
    config::StripeConfig,
    domain::responses::{PaymentIntent, PaymentMethod},
    errors::{PaymentError, RepositoryError},
    model::Mac,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};
use tower::ServiceExt;

pub struct MockGateway {
    outcome: Result<PaymentIntent, PaymentError>,
    calls: AtomicUsize,
}

impl MockGateway {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(sample_intent()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(err: PaymentError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(err),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentGatewayTrait for MockGateway {
    async fn create_payment_intent(
        &self,
        currency: &str,
        amount: i64,
    ) -> Result<PaymentIntent, PaymentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map(|intent| PaymentIntent {
            amount,
            currency: currency.to_string(),
            ..intent
        })
    }

    async fn retrieve_payment_intent(&self, _id: &str) -> Result<PaymentIntent, PaymentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    async fn retrieve_payment_method(&self, id: &str) -> Result<PaymentMethod, PaymentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(PaymentMethod {
            id: id.to_string(),
            object: "payment_method".into(),
            card: None,
        })
    }
}

pub enum MacBehavior {
    Rows(Vec<Mac>),
    Timeout,
}

pub struct MockMacRepository {
    behavior: MacBehavior,
}

impl MockMacRepository {
    pub fn with(macs: Vec<Mac>) -> DynMacQueryRepository {
        Arc::new(Self {
            behavior: MacBehavior::Rows(macs),
        })
    }

    pub fn timing_out() -> DynMacQueryRepository {
        Arc::new(Self {
            behavior: MacBehavior::Timeout,
        })
    }
}

#[async_trait]
impl MacQueryRepositoryTrait for MockMacRepository {
    async fn get_mac(&self, id: i32) -> Result<Mac, RepositoryError> {
        match &self.behavior {
            MacBehavior::Rows(macs) => macs
                .iter()
                .find(|m| m.id == id)
                .cloned()
                .ok_or(RepositoryError::NotFound),
            MacBehavior::Timeout => Err(RepositoryError::Timeout(Duration::from_secs(3))),
        }
    }
}

pub fn sample_intent() -> PaymentIntent {
    PaymentIntent {
        id: "pi_test_123".into(),
        object: "payment_intent".into(),
        amount: 0,
        currency: String::new(),
        client_secret: Some("pi_test_123_secret_abc".into()),
        status: "requires_payment_method".into(),
        payment_method: None,
        latest_charge: None,
        created: 1_700_000_000,
        livemode: false,
    }
}

pub fn sample_mac(id: i32) -> Mac {
    let stamp = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    Mac {
        id,
        name: "MacBook Air 13\"".into(),
        price: 109900,
        description: "Thin and light".into(),
        inventory_level: 10,
        image: "macbook-air.png".into(),
        created_at: stamp,
        updated_at: stamp,
    }
}

pub fn stripe_config(secret: &str) -> StripeConfig {
    StripeConfig {
        secret: secret.into(),
        key: "pk_test_key".into(),
        api_base: "http://127.0.0.1:9".into(),
        timeout: Duration::from_secs(1),
    }
}

pub fn app(secret: &str, gateway: Arc<MockGateway>, mac_query: DynMacQueryRepository) -> Router {
    let state = AppState::from_parts(
        stripe_config(secret),
        gateway as DynPaymentGateway,
        mac_query,
    );
    AppRouter::build(state)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, content_type, body)
}

pub fn json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}
