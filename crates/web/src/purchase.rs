use shared::{
    abstract_trait::{DynMacQueryRepository, DynPaymentGateway, DynPurchaseRepository},
    domain::requests::{CreatePurchaseOrder, CreateTransaction},
    errors::{PaymentError, RepositoryError},
    model::{Mac, Status, TransactionStatus},
};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error("Payment processor is not configured")]
    NotConfigured,
    #[error("Product not found")]
    UnknownProduct,
    #[error("Payment has not succeeded (status: {0})")]
    NotSucceeded(String),
    #[error("Payment does not match the product price")]
    AmountMismatch,
    #[error("This payment has already been recorded")]
    AlreadyRecorded,
    #[error("{0}")]
    Payment(#[from] PaymentError),
    #[error("Failed to save the purchase")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedPurchase {
    pub transaction_id: i32,
    pub order_id: i32,
}

/// Books a completed card payment as a transaction plus its order. Amount,
/// currency and card details come from the processor, never from the
/// browser. An intent is booked at most once and only for a product whose
/// catalogue price it covers.
#[derive(Clone)]
pub struct PurchaseRecorder {
    gateway: Option<DynPaymentGateway>,
    mac_query: DynMacQueryRepository,
    purchases: DynPurchaseRepository,
}

impl PurchaseRecorder {
    const QUANTITY: i32 = 1;

    pub fn new(
        gateway: Option<DynPaymentGateway>,
        mac_query: DynMacQueryRepository,
        purchases: DynPurchaseRepository,
    ) -> Self {
        Self {
            gateway,
            mac_query,
            purchases,
        }
    }

    pub async fn record(
        &self,
        mac_id: i32,
        payment_intent: &str,
        payment_method: &str,
    ) -> Result<RecordedPurchase, PurchaseError> {
        let gateway = self.gateway.as_ref().ok_or_else(|| {
            warn!("⚠️ Skipping purchase of mac {}: no STRIPE_SECRET", mac_id);
            PurchaseError::NotConfigured
        })?;

        let mac = self.mac_query.get_mac(mac_id).await.map_err(|err| {
            error!("❌ Could not load mac {} for purchase: {}", mac_id, err);
            match err {
                RepositoryError::NotFound => PurchaseError::UnknownProduct,
                other => PurchaseError::Repository(other),
            }
        })?;

        let intent = gateway.retrieve_payment_intent(payment_intent).await?;

        if intent.status != "succeeded" {
            warn!(
                "⚠️ Payment intent {} is '{}', not recording it",
                intent.id, intent.status
            );
            return Err(PurchaseError::NotSucceeded(intent.status));
        }

        let expected = mac.price * i64::from(Self::QUANTITY);
        if intent.amount != expected || !intent.currency.eq_ignore_ascii_case(Mac::CURRENCY) {
            warn!(
                "⚠️ Intent {} paid {} {} but mac {} costs {} {}",
                intent.id,
                intent.amount,
                intent.currency,
                mac.id,
                expected,
                Mac::CURRENCY
            );
            return Err(PurchaseError::AmountMismatch);
        }

        let method_id = Some(payment_method)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .or_else(|| intent.payment_method.clone());

        let last_four = match method_id {
            Some(id) => gateway
                .retrieve_payment_method(&id)
                .await?
                .last_four()
                .to_string(),
            None => String::new(),
        };

        let txn = CreateTransaction {
            amount: intent.amount,
            currency: intent.currency.clone(),
            last_four,
            bank_return_code: intent.latest_charge.clone().unwrap_or_default(),
            transaction_status_id: TransactionStatus::CLEARED,
            payment_intent: Some(intent.id.clone()),
        };

        let order = CreatePurchaseOrder {
            mac_id: mac.id,
            status_id: Status::CLEARED,
            quantity: Self::QUANTITY,
            amount: intent.amount,
        };

        let (transaction_id, order_id) = self
            .purchases
            .record_purchase(&txn, &order)
            .await
            .map_err(|err| match err {
                RepositoryError::Duplicate => {
                    warn!("⚠️ Intent {} was already recorded", intent.id);
                    PurchaseError::AlreadyRecorded
                }
                other => {
                    error!("❌ Could not record purchase for {}: {}", intent.id, other);
                    PurchaseError::Repository(other)
                }
            })?;

        info!(
            "🧾 Purchase of mac {} recorded for intent {}",
            mac_id, intent.id
        );

        Ok(RecordedPurchase {
            transaction_id,
            order_id,
        })
    }
}
