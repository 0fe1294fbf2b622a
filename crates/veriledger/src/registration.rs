//! Registration: hash content and append a record for it.

use tokio::io::AsyncRead;
use tracing::{info, warn};
use veriledger_core::{derive_locator, NewRecord, RecordId, RecordSummary, DEFAULT_CONTENT_KIND};
use veriledger_store::{InsertResult, LedgerStore};

use crate::config::DuplicatePolicy;
use crate::error::{LedgerError, Result};
use crate::ingest::{fingerprint_slice, fingerprint_stream, Ingested};
use crate::ledger::{now_millis, Ledger};

/// Caller-supplied metadata for a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    display_name: String,
    description: Option<String>,
    content_kind: Option<String>,
}

impl Registration {
    /// Start a registration under a display name, typically the file name.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            description: None,
            content_kind: None,
        }
    }

    /// Attach a free-text annotation.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Record the content's media type.
    pub fn content_kind(mut self, kind: impl Into<String>) -> Self {
        self.content_kind = Some(kind.into());
        self
    }

    fn validate(&self) -> Result<()> {
        if self.display_name.trim().is_empty() {
            return Err(LedgerError::InvalidInput("display name is required".into()));
        }
        Ok(())
    }
}

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    pub summary: RecordSummary,
    /// False when the content was already registered and the ledger is
    /// configured to hand back the existing record.
    pub created: bool,
}

impl<S: LedgerStore> Ledger<S> {
    /// Register streamed content.
    ///
    /// The stream is hashed to completion before the store is touched, so a
    /// failed or cancelled read leaves the ledger unchanged.
    pub async fn register<R>(&self, content: R, registration: Registration) -> Result<Registered>
    where
        R: AsyncRead + Unpin,
    {
        registration.validate()?;
        let ingested =
            fingerprint_stream(self.engine(), content, self.config().max_content_bytes).await?;
        self.commit(ingested, registration)
    }

    /// Register content already in memory.
    ///
    /// Hashing a slice never waits; this is `async` only to match
    /// [`Ledger::register`] so callers can switch between the two.
    pub async fn register_bytes(
        &self,
        content: &[u8],
        registration: Registration,
    ) -> Result<Registered> {
        registration.validate()?;
        let ingested = fingerprint_slice(self.engine(), content, self.config().max_content_bytes)?;
        self.commit(ingested, registration)
    }

    fn commit(&self, ingested: Ingested, registration: Registration) -> Result<Registered> {
        if ingested.size_bytes == 0 {
            return Err(LedgerError::InvalidInput("content is empty".into()));
        }

        // Request time; the store raises it if an earlier request won the
        // write lock with a later stamp.
        let registered_at = now_millis();
        let locator = derive_locator(&registration.display_name, registered_at);
        let record = NewRecord {
            display_name: registration.display_name,
            fingerprint: ingested.fingerprint,
            description: registration.description.filter(|d| !d.trim().is_empty()),
            registered_at,
            size_bytes: ingested.size_bytes,
            content_kind: registration
                .content_kind
                .unwrap_or_else(|| DEFAULT_CONTENT_KIND.to_string()),
            locator,
        };

        match self.store().insert(record)? {
            InsertResult::Inserted(record) => {
                info!(
                    record_id = %record.id(),
                    fingerprint = %record.fingerprint(),
                    bytes = record.size_bytes(),
                    "content registered"
                );
                Ok(Registered {
                    summary: record.summary(),
                    created: true,
                })
            }
            InsertResult::Duplicate { existing } => self.on_duplicate(ingested, existing),
        }
    }

    fn on_duplicate(&self, ingested: Ingested, existing: RecordId) -> Result<Registered> {
        match self.config().duplicate_policy {
            DuplicatePolicy::Reject => {
                warn!(
                    fingerprint = %ingested.fingerprint,
                    %existing,
                    "registration rejected: duplicate fingerprint"
                );
                Err(LedgerError::DuplicateFingerprint {
                    fingerprint: ingested.fingerprint,
                    existing,
                })
            }
            DuplicatePolicy::ReturnExisting => {
                let record = self
                    .store()
                    .find_by_id(existing)?
                    .ok_or(LedgerError::NotFound(existing))?;
                info!(
                    record_id = %existing,
                    fingerprint = %ingested.fingerprint,
                    "content already registered, returning existing record"
                );
                Ok(Registered {
                    summary: record.summary(),
                    created: false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerConfig;
    use proptest::prelude::*;
    use tokio::runtime::Builder;
    use veriledger_store::MemoryLedger;

    fn ledger_with(policy: DuplicatePolicy) -> Ledger<MemoryLedger> {
        let config = LedgerConfig {
            duplicate_policy: policy,
            ..LedgerConfig::default()
        };
        Ledger::new(MemoryLedger::new(), config).unwrap()
    }

    #[tokio::test]
    async fn test_register_populates_record() {
        let ledger = Ledger::in_memory();
        let registered = ledger
            .register_bytes(
                b"hello ledger",
                Registration::new("hello.txt")
                    .description("greeting")
                    .content_kind("text/plain"),
            )
            .await
            .unwrap();

        assert!(registered.created);
        let summary = registered.summary;
        assert_eq!(summary.display_name, "hello.txt");
        assert_eq!(summary.description.as_deref(), Some("greeting"));
        assert_eq!(summary.size_bytes, 12);
        assert_eq!(summary.content_kind, "text/plain");
        assert!(summary.registered_at > 0);

        let record = ledger.store().find_by_id(summary.record_id).unwrap().unwrap();
        assert!(record.locator().starts_with("sim-"));
    }

    #[tokio::test]
    async fn test_register_defaults_content_kind() {
        let ledger = Ledger::in_memory();
        let registered = ledger
            .register_bytes(b"bytes", Registration::new("blob.bin"))
            .await
            .unwrap();
        assert_eq!(registered.summary.content_kind, DEFAULT_CONTENT_KIND);
        assert!(registered.summary.description.is_none());
    }

    #[tokio::test]
    async fn test_register_rejects_empty_inputs() {
        let ledger = Ledger::in_memory();

        let err = ledger
            .register_bytes(b"content", Registration::new("  "))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));

        let err = ledger
            .register_bytes(b"", Registration::new("empty.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));

        assert_eq!(ledger.store().count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_register_rejects_empty_stream() {
        let ledger = Ledger::in_memory();
        let err = ledger
            .register(&b""[..], Registration::new("empty.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        assert_eq!(ledger.store().count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_rejected_by_default() {
        let ledger = ledger_with(DuplicatePolicy::Reject);
        let first = ledger
            .register_bytes(b"same bytes", Registration::new("a.txt"))
            .await
            .unwrap();

        let err = ledger
            .register_bytes(b"same bytes", Registration::new("b.txt"))
            .await
            .unwrap_err();
        match err {
            LedgerError::DuplicateFingerprint {
                fingerprint,
                existing,
            } => {
                assert_eq!(fingerprint, first.summary.fingerprint);
                assert_eq!(existing, first.summary.record_id);
            }
            other => panic!("expected duplicate, got {:?}", other),
        }
        assert_eq!(ledger.store().count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_returns_existing_when_configured() {
        let ledger = ledger_with(DuplicatePolicy::ReturnExisting);
        let first = ledger
            .register_bytes(b"same bytes", Registration::new("a.txt"))
            .await
            .unwrap();
        let second = ledger
            .register_bytes(b"same bytes", Registration::new("b.txt"))
            .await
            .unwrap();

        assert!(!second.created);
        assert_eq!(second.summary, first.summary);
        assert_eq!(second.summary.display_name, "a.txt");
    }

    #[tokio::test]
    async fn test_register_enforces_ceiling() {
        let config = LedgerConfig {
            max_content_bytes: Some(8),
            ..LedgerConfig::default()
        };
        let ledger = Ledger::new(MemoryLedger::new(), config).unwrap();

        let err = ledger
            .register(&b"nine bytes"[..], Registration::new("big.bin"))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::ContentTooLarge { limit: 8 }));
        assert_eq!(ledger.store().count().unwrap(), 0);
    }

    proptest! {
        #[test]
        fn test_return_existing_is_idempotent(
            content in prop::collection::vec(any::<u8>(), 1..256),
            names in prop::collection::vec("[a-z]{1,12}\\.txt", 1..6),
        ) {
            let rt = Builder::new_current_thread().build().unwrap();
            let ledger = ledger_with(DuplicatePolicy::ReturnExisting);

            let outcomes: Vec<Registered> = names
                .iter()
                .map(|name| {
                    rt.block_on(ledger.register_bytes(&content, Registration::new(name.clone())))
                        .unwrap()
                })
                .collect();

            prop_assert!(outcomes[0].created);
            prop_assert!(outcomes[1..].iter().all(|o| !o.created));
            prop_assert!(outcomes.iter().all(|o| o.summary == outcomes[0].summary));
            prop_assert_eq!(&outcomes[0].summary.display_name, &names[0]);
            prop_assert_eq!(ledger.store().count().unwrap(), 1);
        }
    }
}
