use crate::{domain::requests::CreateOrder, errors::RepositoryError, model::Order};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn insert_order(&self, order: &CreateOrder) -> Result<i32, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn get_order(&self, id: i32) -> Result<Order, RepositoryError>;
}
