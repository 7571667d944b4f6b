use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payment intent as returned by the processor. Unknown processor fields are
/// dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentIntent {
    pub id: String,
    #[serde(default)]
    pub object: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub latest_charge: Option<String>,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub livemode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub card: Option<PaymentMethodCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodCard {
    #[serde(default)]
    pub brand: String,
    pub last4: String,
    #[serde(default)]
    pub exp_month: i64,
    #[serde(default)]
    pub exp_year: i64,
}

impl PaymentMethod {
    pub fn last_four(&self) -> &str {
        self.card.as_ref().map(|c| c.last4.as_str()).unwrap_or_default()
    }
}
