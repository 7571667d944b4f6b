use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrder {
    pub mac_id: i32,
    pub transaction_id: i32,
    pub status_id: i32,
    pub quantity: i32,
    pub amount: i64,
}

/// An order whose transaction is inserted alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePurchaseOrder {
    pub mac_id: i32,
    pub status_id: i32,
    pub quantity: i32,
    pub amount: i64,
}

impl CreatePurchaseOrder {
    pub fn for_transaction(&self, transaction_id: i32) -> CreateOrder {
        CreateOrder {
            mac_id: self.mac_id,
            transaction_id,
            status_id: self.status_id,
            quantity: self.quantity,
            amount: self.amount,
        }
    }
}
