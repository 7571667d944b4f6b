use crate::{
    abstract_trait::OrderCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateOrder, errors::RepositoryError, repository::bounded,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgExecutor;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Mac and transaction references are not checked here; the foreign keys
/// in the schema reject dangling ids.
pub(crate) async fn insert_order_row<'e, E>(
    executor: E,
    order: &CreateOrder,
) -> Result<i32, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let now = Utc::now().naive_utc();

    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO orders
            (mac_id, transaction_id, status_id, quantity, amount, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(order.mac_id)
    .bind(order.transaction_id)
    .bind(order.status_id)
    .bind(order.quantity)
    .bind(order.amount)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn insert_order(&self, order: &CreateOrder) -> Result<i32, RepositoryError> {
        let id = bounded("insert_order", insert_order_row(&self.db, order))
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create order for mac {} (transaction {}): {}",
                    order.mac_id, order.transaction_id, err
                );
                err
            })?;

        info!(
            "✅ Created order ID {} for mac {}",
            id, order.mac_id
        );
        Ok(id)
    }
}
