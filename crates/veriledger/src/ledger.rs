//! The Ledger: one facade over registration, verification, and audit.
//!
//! The ledger is a single-process authority. It is created once at startup
//! around a store and a configuration and needs no teardown; cloning it is
//! cheap and every clone shares the same store.

use std::sync::Arc;

use veriledger_core::{FingerprintEngine, HashAlgorithm};
use veriledger_store::{LedgerStore, MemoryLedger};

use crate::config::LedgerConfig;
use crate::error::Result;

/// The main Ledger struct.
///
/// Provides:
/// - Registering content under its fingerprint
/// - Verifying content or a bare fingerprint
/// - Listing the audit trail
pub struct Ledger<S: LedgerStore> {
    /// The storage backend.
    store: Arc<S>,
    /// Stateless hasher built from the configuration.
    engine: FingerprintEngine,
    /// Configuration.
    config: LedgerConfig,
}

impl<S: LedgerStore> Ledger<S> {
    /// Create a ledger over `store`, rejecting invalid configuration.
    pub fn new(store: S, config: LedgerConfig) -> Result<Self> {
        Self::with_shared_store(Arc::new(store), config)
    }

    /// Create a ledger over a store that is shared with other owners.
    pub fn with_shared_store(store: Arc<S>, config: LedgerConfig) -> Result<Self> {
        config.validate()?;
        let engine =
            FingerprintEngine::new(config.hash_algorithm).with_chunk_size(config.read_chunk_size);

        tracing::debug!(
            algorithm = %config.hash_algorithm,
            policy = ?config.duplicate_policy,
            "ledger initialized"
        );

        Ok(Self {
            store,
            engine,
            config,
        })
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// The engine used for every fingerprint in this ledger.
    pub fn engine(&self) -> &FingerprintEngine {
        &self.engine
    }

    /// The configured digest function.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.engine.algorithm()
    }
}

impl Ledger<MemoryLedger> {
    /// An empty in-memory ledger with default configuration.
    pub fn in_memory() -> Self {
        let config = LedgerConfig::default();
        Self {
            store: Arc::new(MemoryLedger::new()),
            engine: FingerprintEngine::new(config.hash_algorithm)
                .with_chunk_size(config.read_chunk_size),
            config,
        }
    }
}

impl<S: LedgerStore> Clone for Ledger<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            engine: self.engine,
            config: self.config.clone(),
        }
    }
}

/// Get current time in milliseconds.
pub(crate) fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
