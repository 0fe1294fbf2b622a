//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use veriledger::store::MemoryLedger;
use veriledger::{Ledger, LedgerConfig, Registered, Registration};

/// A test fixture wrapping an in-memory ledger.
pub struct LedgerFixture {
    pub ledger: Ledger<MemoryLedger>,
}

impl LedgerFixture {
    /// Create a fixture with default configuration.
    pub fn new() -> Self {
        Self {
            ledger: Ledger::in_memory(),
        }
    }

    /// Create a fixture with a custom configuration.
    ///
    /// Panics on invalid configuration; fixtures are for tests.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            ledger: Ledger::new(MemoryLedger::new(), config).expect("valid test config"),
        }
    }

    /// Register content, panicking on failure.
    pub async fn register(&self, name: &str, content: &[u8]) -> Registered {
        self.ledger
            .register_bytes(content, Registration::new(name))
            .await
            .expect("registration should succeed")
    }

    /// Register `count` distinct sample documents, returning them in order.
    pub async fn seed(&self, count: usize) -> Vec<Registered> {
        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            let (name, body) = sample_document(i);
            let registered = self
                .ledger
                .register_bytes(
                    &body,
                    Registration::new(name).description(format!("sample document {}", i)),
                )
                .await
                .expect("sample documents are distinct");
            out.push(registered);
        }
        out
    }
}

impl Default for LedgerFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A deterministic, distinct (name, content) pair for index `i`.
pub fn sample_document(i: usize) -> (String, Vec<u8>) {
    (
        format!("document-{:04}.txt", i),
        format!("Sample document #{} body.\n", i).into_bytes(),
    )
}

/// Seeded pseudo-random content of the given length.
pub fn random_content(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

/// Flip one random bit of `content`, returning the modified copy.
///
/// Panics on empty content.
pub fn flip_random_bit(seed: u64, content: &[u8]) -> Vec<u8> {
    assert!(!content.is_empty(), "cannot tamper with empty content");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = content.to_vec();
    let index = rng.gen_range(0..out.len());
    let bit = rng.gen_range(0..8);
    out[index] ^= 1 << bit;
    out
}
