mod mac;
mod order;
mod purchase;
mod transaction;

pub use self::mac::{MacQueryRepository, MacRepository};
pub use self::order::{OrderCommandRepository, OrderQueryRepository, OrderRepository};
pub use self::purchase::PurchaseRepository;
pub use self::transaction::{
    TransactionCommandRepository, TransactionQueryRepository, TransactionRepository,
};

use crate::errors::RepositoryError;
use std::{future::Future, time::Duration};
use tracing::error;

/// Upper bound for every statement issued by the repositories.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Runs `fut` under [`QUERY_TIMEOUT`]. On expiry the future is dropped,
/// which cancels the in-flight statement.
pub(crate) async fn bounded<T, F>(operation: &str, fut: F) -> Result<T, RepositoryError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(QUERY_TIMEOUT, fut).await {
        Ok(result) => result.map_err(RepositoryError::from),
        Err(_) => {
            error!("⏱️ {operation} exceeded {:?}", QUERY_TIMEOUT);
            Err(RepositoryError::Timeout(QUERY_TIMEOUT))
        }
    }
}
