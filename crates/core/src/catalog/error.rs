use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors that can occur when validating a catalog entry request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Entry name cannot be empty")]
    EmptyName,
    #[error("Entry name too long (max 200 characters)")]
    NameTooLong,
    #[error("Entry price out of range (max 9223372036854775807)")]
    PriceOutOfRange,
}

/// Public error taxonomy returned by catalog operations.
///
/// Nothing below this boundary (query text, connection state, cache failures)
/// is carried in these variants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested entry is absent from the durable store.
    #[error("requested content not found")]
    NotFound,
    /// The slug is already taken, or no free slug could be found.
    #[error("entry conflicts with an existing entry")]
    Conflict,
    /// An unexpected backing-store failure.
    #[error("internal server error")]
    Internal,
    /// The caller aborted the operation.
    #[error("operation cancelled")]
    Cancelled,
}

impl From<&RepositoryError> for CatalogError {
    fn from(err: &RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => CatalogError::NotFound,
            RepositoryError::AlreadyExists { .. } => CatalogError::Conflict,
            RepositoryError::ConnectionFailed(_)
            | RepositoryError::QueryFailed(_)
            | RepositoryError::Serialization(_)
            | RepositoryError::InvalidData(_) => CatalogError::Internal,
        }
    }
}

impl From<RepositoryError> for CatalogError {
    fn from(err: RepositoryError) -> Self {
        Self::from(&err)
    }
}
