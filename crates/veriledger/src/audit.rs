//! Audit queries over the ledger's complete history.

use serde::{Deserialize, Serialize};
use tracing::debug;
use veriledger_core::{HashAlgorithm, Record, RecordFilter, RecordId, RecordSummary};
use veriledger_store::LedgerStore;

use crate::config::AuditOrder;
use crate::error::Result;
use crate::ledger::Ledger;

/// Aggregate figures over the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStats {
    pub records: usize,
    pub total_bytes: u64,
    pub algorithm: HashAlgorithm,
}

impl<S: LedgerStore> Ledger<S> {
    /// List record summaries in the configured order.
    ///
    /// `filter` is a case-insensitive substring matched against the display
    /// name, the description, or the fingerprint. `None` or a blank string
    /// lists everything.
    pub fn list_records(&self, filter: Option<&str>) -> Result<Vec<RecordSummary>> {
        let filter = filter.and_then(RecordFilter::new);
        let snapshot = self.store().list_all()?;
        let keep = |r: &&Record| filter.as_ref().map_or(true, |f| f.matches(r));

        let summaries: Vec<RecordSummary> = match self.config().audit_order {
            AuditOrder::OldestFirst => snapshot.iter().filter(keep).map(Record::summary).collect(),
            AuditOrder::NewestFirst => snapshot
                .newest_first()
                .filter(keep)
                .map(Record::summary)
                .collect(),
        };

        debug!(
            total = snapshot.len(),
            matched = summaries.len(),
            filter = ?filter.as_ref().map(RecordFilter::needle),
            "audit listing"
        );
        Ok(summaries)
    }

    /// Fetch a full record, including its archive locator.
    pub fn record(&self, id: RecordId) -> Result<Option<Record>> {
        Ok(self.store().find_by_id(id)?)
    }

    /// Record count and total registered bytes.
    pub fn stats(&self) -> Result<LedgerStats> {
        let snapshot = self.store().list_all()?;
        Ok(LedgerStats {
            records: snapshot.len(),
            total_bytes: snapshot.iter().map(Record::size_bytes).sum(),
            algorithm: self.algorithm(),
        })
    }
}
