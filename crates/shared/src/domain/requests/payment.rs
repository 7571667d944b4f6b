use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Browser request for a new payment intent. `amount` arrives as a string
/// of minor currency units and is parsed by the handler.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PaymentIntentPayload {
    #[validate(length(min = 3, max = 10, message = "Invalid currency"))]
    pub currency: String,
    pub amount: String,
}

impl PaymentIntentPayload {
    pub fn parse_amount(&self) -> Option<i64> {
        self.amount.parse::<i64>().ok()
    }
}
