use crate::{
    domain::responses::{PaymentIntent, PaymentMethod},
    errors::PaymentError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentGateway = Arc<dyn PaymentGatewayTrait + Send + Sync>;

#[async_trait]
pub trait PaymentGatewayTrait {
    async fn create_payment_intent(
        &self,
        currency: &str,
        amount: i64,
    ) -> Result<PaymentIntent, PaymentError>;

    async fn retrieve_payment_intent(&self, id: &str) -> Result<PaymentIntent, PaymentError>;

    async fn retrieve_payment_method(&self, id: &str) -> Result<PaymentMethod, PaymentError>;
}
