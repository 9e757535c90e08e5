use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Could not check a connection out of the pool.
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The underlying query failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored or written value violated a domain constraint.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(value: TypeConstraintError) -> Self {
        RepositoryError::Validation(value.to_string())
    }
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
