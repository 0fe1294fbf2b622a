//! # Veriledger
//!
//! A content-addressable integrity ledger: register a file's content under
//! its cryptographic fingerprint, then prove later that a candidate file, or
//! a fingerprint on its own, matches what was registered.
//!
//! ## Overview
//!
//! - **Registration**: hash content, reject (or reuse) known fingerprints,
//!   append an immutable record
//! - **Verification**: look content or a bare fingerprint up; a miss is a
//!   negative result, not an error
//! - **Audit**: list every record ever registered, optionally filtered
//!
//! ## Usage
//!
//! ```rust,no_run
//! use veriledger::{Ledger, LedgerConfig, Registration};
//! use veriledger::store::MemoryLedger;
//!
//! async fn example() {
//!     let ledger = Ledger::new(MemoryLedger::new(), LedgerConfig::default()).unwrap();
//!
//!     let registered = ledger
//!         .register_bytes(b"signed contract", Registration::new("contract.pdf"))
//!         .await
//!         .unwrap();
//!
//!     let check = ledger.verify_bytes(b"signed contract").await.unwrap();
//!     assert!(check.valid);
//!
//!     let by_hash = ledger
//!         .verify_fingerprint(&registered.summary.fingerprint.to_hex())
//!         .unwrap();
//!     assert!(by_hash.valid);
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `veriledger::core` - Fingerprints, records, verification results
//! - `veriledger::store` - The ledger store trait and in-memory table

pub mod audit;
pub mod config;
pub mod error;
pub mod ingest;
pub mod ledger;
pub mod registration;
pub mod verification;

// Re-export component crates
pub use veriledger_core as core;
pub use veriledger_store as store;

// Re-export main types for convenience
pub use audit::LedgerStats;
pub use config::{AuditOrder, DuplicatePolicy, LedgerConfig};
pub use error::{LedgerError, Result};
pub use ingest::Ingested;
pub use ledger::Ledger;
pub use registration::{Registered, Registration};

// Re-export commonly used core types
pub use veriledger_core::{
    Fingerprint, FingerprintEngine, HashAlgorithm, Record, RecordId, RecordSummary,
    VerificationResult,
};
