//! Point-in-time views of the ledger.

use std::iter::FusedIterator;
use std::slice;
use std::sync::Arc;

use veriledger_core::{Record, RecordSummary};

/// A frozen, insertion-ordered view of every record at capture time.
///
/// Records are shared with the store, not copied, and are read-only. The
/// snapshot can be iterated any number of times; inserts made after capture
/// are never visible through it.
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    records: Vec<Arc<Record>>,
}

impl LedgerSnapshot {
    pub(crate) fn new(records: Vec<Arc<Record>>) -> Self {
        Self { records }
    }

    /// Number of records captured.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate oldest first. Nothing is cloned until the caller asks.
    pub fn iter(&self) -> SnapshotIter<'_> {
        SnapshotIter {
            inner: self.records.iter(),
        }
    }

    /// Iterate newest first.
    pub fn newest_first(&self) -> std::iter::Rev<SnapshotIter<'_>> {
        self.iter().rev()
    }

    /// Summaries of every record, oldest first.
    pub fn summaries(&self) -> Vec<RecordSummary> {
        self.iter().map(Record::summary).collect()
    }
}

impl<'a> IntoIterator for &'a LedgerSnapshot {
    type Item = &'a Record;
    type IntoIter = SnapshotIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`LedgerSnapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotIter<'a> {
    inner: slice::Iter<'a, Arc<Record>>,
}

impl<'a> Iterator for SnapshotIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|r| r.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for SnapshotIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|r| r.as_ref())
    }
}

impl ExactSizeIterator for SnapshotIter<'_> {}

impl FusedIterator for SnapshotIter<'_> {}
