//! # Veriledger Store
//!
//! Storage abstraction for the Veriledger integrity ledger. Provides the
//! [`LedgerStore`] trait and an in-memory implementation.
//!
//! ## Overview
//!
//! The store owns every [`Record`](veriledger_core::Record). It keeps two
//! indices: a primary one by record id and a secondary one by fingerprint
//! that enforces the one-fingerprint-one-record rule. Callers only ever get
//! clones or shared read-only views back.
//!
//! ## Key Types
//!
//! - [`LedgerStore`] - The trait for all ledger storage operations
//! - [`MemoryLedger`] - Process-lifetime in-memory ledger
//! - [`InsertResult`] - Result of inserting a record
//! - [`LedgerSnapshot`] - Point-in-time, restartable view of all records
//!
//! ## Usage
//!
//! ```rust
//! use veriledger_core::{derive_locator, FingerprintEngine, NewRecord};
//! use veriledger_store::{InsertResult, LedgerStore, MemoryLedger};
//!
//! let store = MemoryLedger::new();
//! let fingerprint = FingerprintEngine::default().fingerprint_bytes(b"hello");
//! let record = NewRecord {
//!     display_name: "hello.txt".into(),
//!     fingerprint,
//!     description: None,
//!     registered_at: 0,
//!     size_bytes: 5,
//!     content_kind: "text/plain".into(),
//!     locator: derive_locator("hello.txt", 0),
//! };
//!
//! match store.insert(record).unwrap() {
//!     InsertResult::Inserted(r) => assert_eq!(r.id().get(), 1),
//!     InsertResult::Duplicate { .. } => unreachable!(),
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Append-only**: there is no update or delete operation
//! - **Duplicates are data**: inserting a known fingerprint returns
//!   `Duplicate`; whether that is an error is the caller's policy
//! - **Snapshots**: listing captures the ledger under the read lock; later
//!   inserts never show up in an iteration already in progress

pub mod error;
pub mod memory;
pub mod snapshot;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryLedger;
pub use snapshot::{LedgerSnapshot, SnapshotIter};
pub use traits::{InsertResult, LedgerStore};
