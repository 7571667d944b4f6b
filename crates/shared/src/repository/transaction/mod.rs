mod command;
mod query;

pub use self::command::TransactionCommandRepository;
pub use self::query::TransactionQueryRepository;

pub(crate) use self::command::insert_transaction_row;

use crate::{
    abstract_trait::{DynTransactionCommandRepository, DynTransactionQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct TransactionRepository {
    pub query: DynTransactionQueryRepository,
    pub command: DynTransactionCommandRepository,
}

impl TransactionRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(TransactionQueryRepository::new(pool.clone()))
            as DynTransactionQueryRepository;

        let command = Arc::new(TransactionCommandRepository::new(pool))
            as DynTransactionCommandRepository;

        Self { query, command }
    }
}
