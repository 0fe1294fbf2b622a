//! In-memory implementation of the LedgerStore trait.
//!
//! The ledger lives for the lifetime of the process. Both indices sit behind
//! one `RwLock`, so a reader never observes one index updated without the
//! other.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::trace;
use veriledger_core::{Fingerprint, NewRecord, Record, RecordId};

use crate::error::{Result, StoreError};
use crate::snapshot::LedgerSnapshot;
use crate::traits::{InsertResult, LedgerStore};

/// In-memory ledger.
///
/// All data is lost when the ledger is dropped. Thread-safe via RwLock.
pub struct MemoryLedger {
    inner: RwLock<MemoryLedgerInner>,
}

struct MemoryLedgerInner {
    /// Records in insertion order. `RecordId(n)` lives at index `n - 1`.
    records: Vec<Arc<Record>>,

    /// Fingerprint index: fingerprint -> record id.
    by_fingerprint: HashMap<Fingerprint, RecordId>,
}

impl MemoryLedgerInner {
    fn get(&self, id: RecordId) -> Option<&Arc<Record>> {
        let index = id.get().checked_sub(1)?;
        self.records.get(usize::try_from(index).ok()?)
    }
}

impl MemoryLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty ledger with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(MemoryLedgerInner {
                records: Vec::with_capacity(capacity),
                by_fingerprint: HashMap::with_capacity(capacity),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryLedgerInner>> {
        self.inner
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryLedgerInner>> {
        self.inner
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for MemoryLedger {
    fn insert(&self, mut record: NewRecord) -> Result<InsertResult> {
        let mut inner = self.write()?;

        if let Some(&existing) = inner.by_fingerprint.get(&record.fingerprint) {
            trace!(fingerprint = %record.fingerprint, %existing, "duplicate fingerprint");
            return Ok(InsertResult::Duplicate { existing });
        }

        // Requests stamp their time before taking the lock; clamp so the
        // audit trail never runs backwards.
        if let Some(last) = inner.records.last() {
            record.registered_at = record.registered_at.max(last.registered_at());
        }

        let id = RecordId::new(inner.records.len() as u64 + 1);
        let record = record.into_record(id);

        inner.by_fingerprint.insert(*record.fingerprint(), id);
        inner.records.push(Arc::new(record.clone()));

        trace!(record_id = %id, fingerprint = %record.fingerprint(), "record inserted");
        Ok(InsertResult::Inserted(record))
    }

    fn find_by_fingerprint(&self, fingerprint: &Fingerprint) -> Result<Option<Record>> {
        let inner = self.read()?;

        let Some(&id) = inner.by_fingerprint.get(fingerprint) else {
            return Ok(None);
        };
        match inner.get(id) {
            Some(record) => Ok(Some(Record::clone(record))),
            None => Err(StoreError::InvalidData(format!(
                "fingerprint {} indexed to missing record {}",
                fingerprint, id
            ))),
        }
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<Record>> {
        let inner = self.read()?;
        Ok(inner.get(id).map(|r| Record::clone(r)))
    }

    fn list_all(&self) -> Result<LedgerSnapshot> {
        let inner = self.read()?;
        Ok(LedgerSnapshot::new(inner.records.clone()))
    }

    fn count(&self) -> Result<usize> {
        let inner = self.read()?;
        Ok(inner.records.len())
    }

    fn contains(&self, fingerprint: &Fingerprint) -> Result<bool> {
        let inner = self.read()?;
        Ok(inner.by_fingerprint.contains_key(fingerprint))
    }
}
