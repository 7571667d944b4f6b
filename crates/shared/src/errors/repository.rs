use sqlx::Error as SqlxError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists")]
    Duplicate,

    #[error("Query timed out after {0:?}")]
    Timeout(Duration),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(ref db) if db.is_unique_violation() => RepositoryError::Duplicate,
            other => RepositoryError::Sqlx(other),
        }
    }
}
