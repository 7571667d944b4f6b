use crate::{
    abstract_trait::OrderQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Order, repository::bounded,
};
use async_trait::async_trait;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn get_order(&self, id: i32) -> Result<Order, RepositoryError> {
        let query = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, mac_id, transaction_id, status_id, quantity, amount, created_at, updated_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.db);

        bounded("get_order", query).await
    }
}
