//! LedgerStore trait: the abstract interface for the ledger table.
//!
//! The services are storage-agnostic. Swapping the in-memory table for a
//! durable one changes the implementation, not this contract.

use veriledger_core::{Fingerprint, NewRecord, Record, RecordId};

use crate::error::Result;
use crate::snapshot::LedgerSnapshot;

/// Result of inserting a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertResult {
    /// The record was new and now lives under its assigned id.
    Inserted(Record),
    /// A record with the same fingerprint already exists. Nothing changed.
    Duplicate {
        /// The id of the record that owns the fingerprint.
        existing: RecordId,
    },
}

impl InsertResult {
    /// Whether the ledger grew.
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertResult::Inserted(_))
    }
}

/// The ledger table: primary index by id, secondary index by fingerprint.
///
/// # Design Notes
///
/// - **Atomic insert**: the uniqueness check and both index updates happen
///   in one critical section. Of two concurrent inserts carrying the same
///   fingerprint exactly one returns `Inserted`.
/// - **Ordered time**: `registered_at` is clamped inside the critical
///   section so it never precedes the previous record's.
/// - **No mutation**: records cannot be changed or removed once inserted.
/// - **Shared reads**: lookups may run concurrently with each other.
pub trait LedgerStore: Send + Sync {
    /// Insert a record, assigning it the next id.
    ///
    /// The stored `registered_at` may be raised to keep insertion order and
    /// time order in agreement.
    fn insert(&self, record: NewRecord) -> Result<InsertResult>;

    /// Look up the record that owns a fingerprint.
    fn find_by_fingerprint(&self, fingerprint: &Fingerprint) -> Result<Option<Record>>;

    /// Look up a record by id.
    fn find_by_id(&self, id: RecordId) -> Result<Option<Record>>;

    /// Snapshot all records in insertion order.
    fn list_all(&self) -> Result<LedgerSnapshot>;

    /// Number of records.
    fn count(&self) -> Result<usize>;

    /// Check whether a fingerprint is registered.
    fn contains(&self, fingerprint: &Fingerprint) -> Result<bool> {
        Ok(self.find_by_fingerprint(fingerprint)?.is_some())
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for std::sync::Arc<S> {
    fn insert(&self, record: NewRecord) -> Result<InsertResult> {
        (**self).insert(record)
    }

    fn find_by_fingerprint(&self, fingerprint: &Fingerprint) -> Result<Option<Record>> {
        (**self).find_by_fingerprint(fingerprint)
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<Record>> {
        (**self).find_by_id(id)
    }

    fn list_all(&self) -> Result<LedgerSnapshot> {
        (**self).list_all()
    }

    fn count(&self) -> Result<usize> {
        (**self).count()
    }
}
