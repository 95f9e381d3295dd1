//! Store error types
//!
//! Every fault the store boundary can produce is one variant of
//! [`StoreError`]. Callers match on the variant, never on message text.

use thiserror::Error;

use super::validation::ValidationError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    // ==================
    // Client Faults
    // ==================
    /// Identifier does not have the document-id shape
    #[error("Cast to document id failed for value \"{0}\"")]
    MalformedId(String),

    /// Document rejected by field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another person already uses this name
    #[error("Name already in database: {0}")]
    DuplicateName(String),

    // ==================
    // Store Faults
    // ==================
    /// Backing file could not be read or written
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file does not hold a valid collection
    #[error("Corrupted store data: {0}")]
    Corrupted(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether the fault was caused by the request rather than the store
    pub fn is_client_fault(&self) -> bool {
        match self {
            Self::MalformedId(_) | Self::Validation(_) | Self::DuplicateName(_) => true,
            Self::Io(_) | Self::Corrupted(_) => false,
        }
    }
}
