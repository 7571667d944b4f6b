use crate::{errors::RepositoryError, model::Mac};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMacQueryRepository = Arc<dyn MacQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MacQueryRepositoryTrait {
    /// A missing row is reported as `RepositoryError::NotFound`.
    async fn get_mac(&self, id: i32) -> Result<Mac, RepositoryError>;
}
