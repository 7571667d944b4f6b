use crate::{
    abstract_trait::{DynMacQueryRepository, MacQueryRepositoryTrait},
    config::ConnectionPool,
    errors::RepositoryError,
    model::Mac,
    repository::bounded,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct MacRepository {
    pub query: DynMacQueryRepository,
}

impl MacRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(MacQueryRepository::new(pool)) as DynMacQueryRepository;

        Self { query }
    }
}

#[derive(Clone)]
pub struct MacQueryRepository {
    db: ConnectionPool,
}

impl MacQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MacQueryRepositoryTrait for MacQueryRepository {
    async fn get_mac(&self, id: i32) -> Result<Mac, RepositoryError> {
        info!("🆔 Fetching mac by ID: {}", id);

        let query = sqlx::query_as::<_, Mac>(
            r#"
            SELECT
                id,
                name,
                price,
                description,
                inventory_level,
                COALESCE(image, '') AS image,
                created_at,
                updated_at
            FROM macs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.db);

        bounded("get_mac", query).await.map_err(|err| {
            error!("❌ Failed to fetch mac {}: {}", id, err);
            err
        })
    }
}
