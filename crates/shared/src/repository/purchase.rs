use crate::{
    abstract_trait::PurchaseRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreatePurchaseOrder, CreateTransaction},
    errors::RepositoryError,
    repository::{bounded, order::insert_order_row, transaction::insert_transaction_row},
};
use async_trait::async_trait;
use tracing::{error, info};

/// Records a paid purchase as one database transaction so a transaction row
/// never exists without its order.
#[derive(Clone)]
pub struct PurchaseRepository {
    db: ConnectionPool,
}

impl PurchaseRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn record(
        &self,
        txn: &CreateTransaction,
        order: &CreatePurchaseOrder,
    ) -> Result<(i32, i32), sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let transaction_id = insert_transaction_row(&mut *tx, txn).await?;
        let order_id = insert_order_row(&mut *tx, &order.for_transaction(transaction_id)).await?;

        tx.commit().await?;

        Ok((transaction_id, order_id))
    }
}

#[async_trait]
impl PurchaseRepositoryTrait for PurchaseRepository {
    async fn record_purchase(
        &self,
        txn: &CreateTransaction,
        order: &CreatePurchaseOrder,
    ) -> Result<(i32, i32), RepositoryError> {
        // Dropping the open transaction on timeout rolls it back.
        let (transaction_id, order_id) = bounded("record_purchase", self.record(txn, order))
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to record purchase of mac {}: {}",
                    order.mac_id, err
                );
                err
            })?;

        info!(
            "✅ Recorded purchase: transaction {} / order {}",
            transaction_id, order_id
        );
        Ok((transaction_id, order_id))
    }
}
