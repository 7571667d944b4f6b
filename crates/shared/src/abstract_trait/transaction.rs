use crate::{domain::requests::CreateTransaction, errors::RepositoryError, model::Transaction};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionCommandRepository =
    Arc<dyn TransactionCommandRepositoryTrait + Send + Sync>;
pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionCommandRepositoryTrait {
    async fn insert_transaction(&self, txn: &CreateTransaction) -> Result<i32, RepositoryError>;
}

#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    async fn get_transaction(&self, id: i32) -> Result<Transaction, RepositoryError>;
}
