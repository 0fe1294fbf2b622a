//! Verification: does this content, or this fingerprint, match a record?
//!
//! Both entry points are pure queries. A miss is reported as
//! `valid == false`; only unusable input is an error.

use tokio::io::AsyncRead;
use tracing::debug;
use veriledger_core::{Fingerprint, VerificationResult};
use veriledger_store::LedgerStore;

use crate::error::{LedgerError, Result};
use crate::ingest::{fingerprint_slice, fingerprint_stream, Ingested};
use crate::ledger::Ledger;

impl<S: LedgerStore> Ledger<S> {
    /// Verify streamed content.
    ///
    /// The computed fingerprint is always returned, so on a miss the caller
    /// can cross-check it by hand or search for it later.
    pub async fn verify_content<R>(&self, content: R) -> Result<VerificationResult>
    where
        R: AsyncRead + Unpin,
    {
        let ingested =
            fingerprint_stream(self.engine(), content, self.config().max_content_bytes).await?;
        self.lookup_content(ingested)
    }

    /// Verify content already in memory.
    ///
    /// Hashing a slice never waits; this is `async` only to match
    /// [`Ledger::verify_content`] so callers can switch between the two.
    pub async fn verify_bytes(&self, content: &[u8]) -> Result<VerificationResult> {
        let ingested = fingerprint_slice(self.engine(), content, self.config().max_content_bytes)?;
        self.lookup_content(ingested)
    }

    /// Verify a previously recorded fingerprint without the original bytes.
    ///
    /// Fingerprints are matched exactly as the engine renders them (64
    /// lowercase hex characters, no surrounding whitespace). Any other
    /// non-empty string cannot name a record and verifies as invalid.
    pub fn verify_fingerprint(&self, fingerprint: &str) -> Result<VerificationResult> {
        if fingerprint.trim().is_empty() {
            return Err(LedgerError::InvalidInput("fingerprint is required".into()));
        }

        let parsed = match Fingerprint::parse(fingerprint) {
            Ok(fp) => fp,
            Err(e) => {
                debug!(error = %e, "unparseable fingerprint verifies as invalid");
                return Ok(VerificationResult::from_lookup(None));
            }
        };

        let found = self.store().find_by_fingerprint(&parsed)?;
        debug!(fingerprint = %parsed, valid = found.is_some(), "fingerprint verified");
        Ok(VerificationResult::from_lookup(found.as_ref()))
    }

    fn lookup_content(&self, ingested: Ingested) -> Result<VerificationResult> {
        let found = self.store().find_by_fingerprint(&ingested.fingerprint)?;
        debug!(
            fingerprint = %ingested.fingerprint,
            bytes = ingested.size_bytes,
            valid = found.is_some(),
            "content verified"
        );
        Ok(VerificationResult::from_content(
            ingested.fingerprint,
            found.as_ref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::Registration;

    #[tokio::test]
    async fn test_verify_registered_content() {
        let ledger = Ledger::in_memory();
        let registered = ledger
            .register_bytes(b"original", Registration::new("o.txt"))
            .await
            .unwrap();

        let result = ledger.verify_bytes(b"original").await.unwrap();
        assert!(result.valid);
        assert_eq!(result.record.as_ref(), Some(&registered.summary));
        assert_eq!(result.computed_fingerprint, Some(registered.summary.fingerprint));
    }

    #[tokio::test]
    async fn test_verify_unknown_content_surfaces_digest() {
        let ledger = Ledger::in_memory();
        let result = ledger.verify_bytes(b"stranger").await.unwrap();
        assert!(!result.valid);
        assert!(result.record.is_none());
        assert_eq!(
            result.computed_fingerprint,
            Some(ledger.engine().fingerprint_bytes(b"stranger"))
        );
    }

    #[tokio::test]
    async fn test_verify_empty_content_is_a_query() {
        let ledger = Ledger::in_memory();
        let result = ledger.verify_content(&b""[..]).await.unwrap();
        assert!(!result.valid);
        assert!(result.computed_fingerprint.is_some());
    }

    #[tokio::test]
    async fn test_verify_fingerprint_variants() {
        let ledger = Ledger::in_memory();
        let registered = ledger
            .register_bytes(b"keep", Registration::new("keep.txt"))
            .await
            .unwrap();
        let hex = registered.summary.fingerprint.to_hex();

        let hit = ledger.verify_fingerprint(&hex).unwrap();
        assert!(hit.valid);
        assert!(hit.computed_fingerprint.is_none());
        assert_eq!(hit.record.unwrap().display_name, "keep.txt");

        assert!(!ledger.verify_fingerprint(&hex.to_uppercase()).unwrap().valid);
        assert!(!ledger.verify_fingerprint(&format!("  {}\n", hex)).unwrap().valid);
        assert!(!ledger.verify_fingerprint("not-a-hash").unwrap().valid);
        assert!(!ledger.verify_fingerprint(&"0".repeat(64)).unwrap().valid);

        assert!(matches!(
            ledger.verify_fingerprint(""),
            Err(LedgerError::InvalidInput(_))
        ));
        assert!(matches!(
            ledger.verify_fingerprint("   "),
            Err(LedgerError::InvalidInput(_))
        ));
    }
}
