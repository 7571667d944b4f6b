use crate::{
    abstract_trait::{DynMacQueryRepository, DynPurchaseRepository},
    config::ConnectionPool,
    repository::{MacRepository, PurchaseRepository},
};
use std::{fmt, sync::Arc};

/// Repository handles the binaries read, built from one connection pool.
#[derive(Clone)]
pub struct DependenciesInject {
    pub mac_query: DynMacQueryRepository,
    pub purchases: DynPurchaseRepository,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("mac_query", &"<dyn MacQueryRepositoryTrait>")
            .field("purchases", &"<dyn PurchaseRepositoryTrait>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let mac_repository = MacRepository::new(pool.clone());
        let purchases = Arc::new(PurchaseRepository::new(pool)) as DynPurchaseRepository;

        Self {
            mac_query: mac_repository.query,
            purchases,
        }
    }
}
