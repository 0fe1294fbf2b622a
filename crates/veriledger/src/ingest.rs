//! Streaming ingestion of content into the fingerprint engine.
//!
//! Content arrives through any `AsyncRead`. It is hashed chunk by chunk and
//! never buffered whole. Dropping the returned future abandons the digest;
//! since nothing touches the store until hashing has finished, a cancelled
//! ingest leaves the ledger exactly as it was.

use std::io::ErrorKind;

use tokio::io::{AsyncRead, AsyncReadExt};
use veriledger_core::{Fingerprint, FingerprintEngine};

use crate::error::{LedgerError, Result};

/// Digest and size of a fully consumed content stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingested {
    pub fingerprint: Fingerprint,
    pub size_bytes: u64,
}

/// Hash `reader` to completion, failing once more than `limit` bytes arrive.
pub async fn fingerprint_stream<R>(
    engine: &FingerprintEngine,
    mut reader: R,
    limit: Option<u64>,
) -> Result<Ingested>
where
    R: AsyncRead + Unpin,
{
    let mut hasher = engine.fingerprinter();
    let mut buf = vec![0u8; engine.chunk_size()];

    loop {
        let n = match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(LedgerError::ReadFailure(e)),
        };
        hasher.update(&buf[..n]);

        if let Some(limit) = limit {
            if hasher.bytes_seen() > limit {
                return Err(LedgerError::ContentTooLarge { limit });
            }
        }
    }

    let size_bytes = hasher.bytes_seen();
    Ok(Ingested {
        fingerprint: hasher.finalize(),
        size_bytes,
    })
}

/// Hash content already in memory, applying the same ceiling.
pub fn fingerprint_slice(
    engine: &FingerprintEngine,
    content: &[u8],
    limit: Option<u64>,
) -> Result<Ingested> {
    let size_bytes = content.len() as u64;
    if let Some(limit) = limit {
        if size_bytes > limit {
            return Err(LedgerError::ContentTooLarge { limit });
        }
    }
    Ok(Ingested {
        fingerprint: engine.fingerprint_bytes(content),
        size_bytes,
    })
}
