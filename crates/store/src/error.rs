use orderdesk_core::DomainError;
use thiserror::Error;

/// Store-level error.
///
/// Domain failures (validation, not-found, conflicts) pass through
/// unchanged; `Parse` and `Io` are the backing document's own failure modes.
/// None are retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The persisted document is not valid per the schema.
    #[error("failed to parse order database: {0}")]
    Parse(String),

    /// Read/write to the backing store failed.
    #[error("order database i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Domain(DomainError::NotFound))
    }
}
