use crate::{
    abstract_trait::TransactionQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::Transaction, repository::bounded,
};
use async_trait::async_trait;

pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn get_transaction(&self, id: i32) -> Result<Transaction, RepositoryError> {
        let query = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT
                id,
                amount,
                currency,
                last_four,
                bank_return_code,
                transaction_status_id,
                payment_intent,
                created_at,
                updated_at
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.db);

        bounded("get_transaction", query).await
    }
}
