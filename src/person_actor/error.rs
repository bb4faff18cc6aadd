//! Error types for the Person store.

use thiserror::Error;

/// Errors that can occur during person store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersonError {
    /// The requested person was not found.
    #[error("Person not found: {0}")]
    NotFound(String),

    /// The store could not be reached or failed to answer.
    #[error("Person store error: {0}")]
    StorageError(String),
}
