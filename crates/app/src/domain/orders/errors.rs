//! Orders service errors.

use dasher::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[from] StorageError),

    #[error("stored orders could not be encoded or decoded")]
    Serialization(#[from] serde_json::Error),
}
