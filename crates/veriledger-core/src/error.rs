//! Error types for Veriledger Core.

use thiserror::Error;

/// Errors raised while computing or parsing fingerprints.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The content stream failed before it was fully consumed.
    #[error("content stream could not be read: {0}")]
    ReadFailure(#[from] std::io::Error),

    /// The caller abandoned hashing before the stream completed.
    #[error("fingerprint computation cancelled")]
    Cancelled,

    /// A string that is not a 64-character lowercase hex digest.
    #[error("invalid fingerprint: {0}")]
    InvalidFingerprint(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
