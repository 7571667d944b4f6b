#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use shared::{
    abstract_trait::{
        DynMacQueryRepository, DynPaymentGateway, DynPurchaseRepository, MacQueryRepositoryTrait,
        PaymentGatewayTrait, PurchaseRepositoryTrait,
    },
    config::StripeConfig,
    domain::{
        requests::{CreatePurchaseOrder, CreateTransaction},
        responses::{PaymentIntent, PaymentMethod, PaymentMethodCard},
    },
    errors::{PaymentError, RepositoryError},
    model::Mac,
};
use std::{
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};
use tower::ServiceExt;
use web::{config::Config, handler::AppRouter, state::AppState};

pub fn config(api_url: &str, proxy_timeout: Duration) -> Config {
    Config {
        port: 0,
        api_url: api_url.to_string(),
        database_url: "postgres://unused".into(),
        db_max_conn: 1,
        proxy_timeout,
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        otel_endpoint: None,
        stripe: StripeConfig {
            secret: "sk_test_secret".into(),
            key: "pk_test_key".into(),
            api_base: "http://127.0.0.1:9".into(),
            timeout: Duration::from_secs(1),
        },
    }
}

pub struct MockMacRepository {
    macs: Vec<Mac>,
    timeout: bool,
}

impl MockMacRepository {
    pub fn with(macs: Vec<Mac>) -> DynMacQueryRepository {
        Arc::new(Self {
            macs,
            timeout: false,
        })
    }

    pub fn timing_out() -> DynMacQueryRepository {
        Arc::new(Self {
            macs: vec![],
            timeout: true,
        })
    }
}

#[async_trait]
impl MacQueryRepositoryTrait for MockMacRepository {
    async fn get_mac(&self, id: i32) -> Result<Mac, RepositoryError> {
        if self.timeout {
            return Err(RepositoryError::Timeout(Duration::from_secs(3)));
        }
        self.macs
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

pub struct MockGateway {
    intent: PaymentIntent,
    calls: AtomicUsize,
}

impl MockGateway {
    pub fn returning(intent: PaymentIntent) -> Arc<Self> {
        Arc::new(Self {
            intent,
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
        _currency: &str,
        _amount: i64,
    ) -> Result<PaymentIntent, PaymentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.intent.clone())
    }

    async fn retrieve_payment_intent(&self, id: &str) -> Result<PaymentIntent, PaymentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if id == self.intent.id {
            Ok(self.intent.clone())
        } else {
            Err(PaymentError::invalid_request("Payment not found"))
        }
    }

    async fn retrieve_payment_method(&self, id: &str) -> Result<PaymentMethod, PaymentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(PaymentMethod {
            id: id.to_string(),
            object: "payment_method".into(),
            card: Some(PaymentMethodCard {
                brand: "visa".into(),
                last4: "4242".into(),
                exp_month: 12,
                exp_year: 2030,
            }),
        })
    }
}

#[derive(Default)]
pub struct MockPurchases {
    pub recorded: Mutex<Vec<(CreateTransaction, CreatePurchaseOrder)>>,
}

impl MockPurchases {
    pub fn count(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }
}

#[async_trait]
impl PurchaseRepositoryTrait for MockPurchases {
    async fn record_purchase(
        &self,
        txn: &CreateTransaction,
        order: &CreatePurchaseOrder,
    ) -> Result<(i32, i32), RepositoryError> {
        let mut recorded = self.recorded.lock().unwrap();
        if recorded
            .iter()
            .any(|(seen, _)| seen.payment_intent == txn.payment_intent)
        {
            return Err(RepositoryError::Duplicate);
        }
        recorded.push((txn.clone(), order.clone()));
        Ok((3, 7))
    }
}

pub fn succeeded_intent() -> PaymentIntent {
    PaymentIntent {
        id: "pi_1".into(),
        object: "payment_intent".into(),
        amount: 59900,
        currency: "usd".into(),
        client_secret: None,
        status: "succeeded".into(),
        payment_method: Some("pm_1".into()),
        latest_charge: Some("ch_1".into()),
        created: 1_700_000_000,
        livemode: false,
    }
}

pub fn priced_mac(id: i32, price: i64) -> Mac {
    Mac {
        name: "MacBook Pro 14\"".into(),
        price,
        ..sample_mac(id)
    }
}

pub fn sample_mac(id: i32) -> Mac {
    let stamp = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    Mac {
        id,
        name: "Mac mini".into(),
        price: 59900,
        description: "Small desktop".into(),
        inventory_level: 20,
        image: String::new(),
        created_at: stamp,
        updated_at: stamp,
    }
}

pub struct TestApp {
    pub router: Router,
    pub gateway: Option<Arc<MockGateway>>,
    pub purchases: Arc<MockPurchases>,
}

pub fn build(
    config: &Config,
    gateway: Option<Arc<MockGateway>>,
    mac_query: DynMacQueryRepository,
) -> TestApp {
    let purchases = Arc::new(MockPurchases::default());

    let state = AppState::from_parts(
        config,
        gateway.clone().map(|g| g as DynPaymentGateway),
        mac_query,
        purchases.clone() as DynPurchaseRepository,
    )
    .unwrap();

    TestApp {
        router: AppRouter::build(state),
        gateway,
        purchases,
    }
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.to_str().unwrap())
    }
}

pub async fn send(router: Router, request: Request<Body>) -> Reply {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    Reply {
        status,
        headers,
        body,
    }
}
