//! # Veriledger Core
//!
//! Pure primitives for the Veriledger integrity ledger: content fingerprints,
//! ledger records, and verification results.
//!
//! This crate holds no locks, does no networking, and never touches the
//! ledger's storage. The only I/O it performs is reading a caller-supplied
//! byte stream into the fingerprint engine.
//!
//! ## Key Types
//!
//! - [`Fingerprint`] - 32-byte content digest, rendered as 64 lowercase hex chars
//! - [`FingerprintEngine`] - Streaming digest computation over arbitrary content
//! - [`Record`] - Immutable ledger entry binding a fingerprint to metadata
//! - [`RecordSummary`] - Caller-facing view of a record
//! - [`VerificationResult`] - Outcome of a content or fingerprint lookup
//! - [`RecordFilter`] - Case-insensitive audit filter

pub mod error;
pub mod filter;
pub mod fingerprint;
pub mod locator;
pub mod record;
pub mod types;
pub mod verification;

pub use error::{CoreError, Result};
pub use filter::RecordFilter;
pub use fingerprint::{
    Fingerprint, FingerprintEngine, Fingerprinter, HashAlgorithm, DEFAULT_CHUNK_SIZE,
    FINGERPRINT_HEX_LEN,
};
pub use locator::derive_locator;
pub use record::{NewRecord, Record, RecordSummary, DEFAULT_CONTENT_KIND};
pub use types::RecordId;
pub use verification::VerificationResult;
