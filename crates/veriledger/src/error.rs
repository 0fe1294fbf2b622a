//! Error types for the ledger services.

use thiserror::Error;
use veriledger_core::{CoreError, Fingerprint, RecordId};
use veriledger_store::StoreError;

/// Errors that can occur during ledger operations.
///
/// A verification miss is not in here: it is reported as a result with
/// `valid == false`.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A required field was missing or empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The content is already registered.
    #[error("content already registered as record {existing} (fingerprint {fingerprint})")]
    DuplicateFingerprint {
        fingerprint: Fingerprint,
        existing: RecordId,
    },

    /// The content exceeded the configured ceiling.
    #[error("content exceeds the {limit}-byte limit")]
    ContentTooLarge { limit: u64 },

    /// The content stream failed before completion.
    #[error("content stream could not be read: {0}")]
    ReadFailure(#[source] std::io::Error),

    /// Hashing was abandoned before the stream completed.
    #[error("operation cancelled before completion")]
    Cancelled,

    /// A record id lookup missed.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Rejected configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<CoreError> for LedgerError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::ReadFailure(io) => LedgerError::ReadFailure(io),
            CoreError::Cancelled => LedgerError::Cancelled,
            CoreError::InvalidFingerprint(msg) => LedgerError::InvalidInput(msg),
        }
    }
}

impl LedgerError {
    /// Whether the caller supplied something unusable, as opposed to the
    /// ledger failing.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidInput(_)
                | LedgerError::DuplicateFingerprint { .. }
                | LedgerError::ContentTooLarge { .. }
                | LedgerError::ReadFailure(_)
                | LedgerError::Cancelled
        )
    }
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
