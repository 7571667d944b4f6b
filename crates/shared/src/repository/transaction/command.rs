use crate::{
    abstract_trait::TransactionCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateTransaction, errors::RepositoryError, repository::bounded,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgExecutor;
use tracing::{error, info};

pub struct TransactionCommandRepository {
    db: ConnectionPool,
}

impl TransactionCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Inserts one transaction row on any executor (pool or open transaction)
/// and returns its generated id. Timestamps are stamped here.
pub(crate) async fn insert_transaction_row<'e, E>(
    executor: E,
    txn: &CreateTransaction,
) -> Result<i32, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let now = Utc::now().naive_utc();

    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO transactions
            (amount, currency, last_four, bank_return_code, transaction_status_id, payment_intent, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(txn.amount)
    .bind(&txn.currency)
    .bind(&txn.last_four)
    .bind(&txn.bank_return_code)
    .bind(txn.transaction_status_id)
    .bind(&txn.payment_intent)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

#[async_trait]
impl TransactionCommandRepositoryTrait for TransactionCommandRepository {
    async fn insert_transaction(&self, txn: &CreateTransaction) -> Result<i32, RepositoryError> {
        let id = bounded("insert_transaction", insert_transaction_row(&self.db, txn))
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to insert transaction of {} {}: {}",
                    txn.amount, txn.currency, err
                );
                err
            })?;

        info!("✅ Created transaction ID {}", id);
        Ok(id)
    }
}
