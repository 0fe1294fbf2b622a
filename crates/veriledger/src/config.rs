//! Ledger configuration.

use serde::{Deserialize, Serialize};
use veriledger_core::{HashAlgorithm, DEFAULT_CHUNK_SIZE};

use crate::error::{LedgerError, Result};

/// What registering already-known content does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateFingerprint`.
    #[default]
    Reject,
    /// Succeed and hand back the record that already owns the fingerprint.
    ReturnExisting,
}

/// Ordering of audit listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

/// Configuration for the Ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Digest function for every fingerprint. Fixed for the ledger's life.
    pub hash_algorithm: HashAlgorithm,
    /// Re-registration behavior.
    pub duplicate_policy: DuplicatePolicy,
    /// Audit listing order.
    pub audit_order: AuditOrder,
    /// Upload ceiling in bytes. `None` leaves it to the transport.
    pub max_content_bytes: Option<u64>,
    /// Read buffer for streamed content.
    pub read_chunk_size: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            hash_algorithm: HashAlgorithm::Sha256,
            duplicate_policy: DuplicatePolicy::Reject,
            audit_order: AuditOrder::OldestFirst,
            max_content_bytes: None,
            read_chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl LedgerConfig {
    /// Parse and validate a JSON document. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LedgerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the ledger cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.read_chunk_size == 0 {
            return Err(LedgerError::Config("read_chunk_size must be non-zero".into()));
        }
        if self.max_content_bytes == Some(0) {
            return Err(LedgerError::Config(
                "max_content_bytes of 0 would reject all content".into(),
            ));
        }
        Ok(())
    }
}
