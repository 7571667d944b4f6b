use crate::{
    domain::requests::{CreatePurchaseOrder, CreateTransaction},
    errors::RepositoryError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPurchaseRepository = Arc<dyn PurchaseRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PurchaseRepositoryTrait {
    /// Inserts the transaction and its order atomically, returning
    /// `(transaction_id, order_id)`.
    async fn record_purchase(
        &self,
        txn: &CreateTransaction,
        order: &CreatePurchaseOrder,
    ) -> Result<(i32, i32), RepositoryError>;
}
