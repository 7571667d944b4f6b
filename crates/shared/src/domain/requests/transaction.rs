use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransaction {
    pub amount: i64,
    pub currency: String,
    pub last_four: String,
    pub bank_return_code: String,
    pub transaction_status_id: i32,
    /// Processor intent id; at most one transaction may reference it.
    pub payment_intent: Option<String>,
}
