//! Domain error types.

use thiserror::Error;

/// Errors raised by domain services and storage gateways.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An event was scoped to a group that does not exist.
    #[error("Group not found: {0}")]
    GroupNotFound(i64),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
