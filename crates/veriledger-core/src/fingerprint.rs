//! Fingerprint engine: streaming content digests.
//!
//! A fingerprint is a 32-byte digest over the exact byte sequence submitted,
//! rendered as 64 lowercase hex characters. The hash function is a
//! configuration constant ([`HashAlgorithm`]); SHA-256 is the default.
//!
//! Content is always consumed incrementally through a [`Fingerprinter`], so
//! memory use is bounded by the read chunk size rather than the content size.

use std::fmt;
use std::io::{ErrorKind, Read};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::{CoreError, Result};

/// Length of a rendered fingerprint.
pub const FINGERPRINT_HEX_LEN: usize = 64;

/// Default read buffer for streaming readers (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// The digest function behind every fingerprint in a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256, interoperable with the on-chain mirror.
    #[default]
    Sha256,
    /// BLAKE3 in its default 256-bit output mode.
    Blake3,
}

impl HashAlgorithm {
    /// Stable lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 32-byte content digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a fingerprint exactly as the engine renders it.
    ///
    /// Fingerprints are compared case-sensitively, so uppercase hex is
    /// rejected here rather than normalized.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != FINGERPRINT_HEX_LEN {
            return Err(CoreError::InvalidFingerprint(format!(
                "expected {} hex characters, got {}",
                FINGERPRINT_HEX_LEN,
                s.len()
            )));
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(CoreError::InvalidFingerprint(
                "fingerprints are lowercase hex".into(),
            ));
        }

        let mut arr = [0u8; 32];
        hex::decode_to_slice(s, &mut arr)
            .map_err(|e| CoreError::InvalidFingerprint(e.to_string()))?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({}...)", &self.to_hex()[..16])
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Fingerprint {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Fingerprint {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

enum HasherState {
    Sha256(Sha256),
    Blake3(Box<blake3::Hasher>),
}

/// Incremental digest over a byte sequence fed in arbitrary pieces.
///
/// No fingerprint is observable until [`Fingerprinter::finalize`] consumes
/// the hasher, so an abandoned computation leaves nothing behind.
pub struct Fingerprinter {
    state: HasherState,
    bytes_seen: u64,
}

impl Fingerprinter {
    /// Start a new digest.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        let state = match algorithm {
            HashAlgorithm::Sha256 => HasherState::Sha256(Sha256::new()),
            HashAlgorithm::Blake3 => HasherState::Blake3(Box::new(blake3::Hasher::new())),
        };
        Self {
            state,
            bytes_seen: 0,
        }
    }

    /// Feed the next piece of content.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.state {
            HasherState::Sha256(h) => h.update(data),
            HasherState::Blake3(h) => {
                h.update(data);
            }
        }
        self.bytes_seen += data.len() as u64;
    }

    /// Number of bytes fed so far.
    pub fn bytes_seen(&self) -> u64 {
        self.bytes_seen
    }

    /// Finish the digest.
    pub fn finalize(self) -> Fingerprint {
        match self.state {
            HasherState::Sha256(h) => Fingerprint(h.finalize().into()),
            HasherState::Blake3(h) => Fingerprint(*h.finalize().as_bytes()),
        }
    }
}

impl fmt::Debug for Fingerprinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let algorithm = match self.state {
            HasherState::Sha256(_) => HashAlgorithm::Sha256,
            HasherState::Blake3(_) => HashAlgorithm::Blake3,
        };
        f.debug_struct("Fingerprinter")
            .field("algorithm", &algorithm)
            .field("bytes_seen", &self.bytes_seen)
            .finish()
    }
}

/// Stateless fingerprint computation.
///
/// The engine only carries configuration, so a single instance can be
/// shared by any number of concurrent requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerprintEngine {
    algorithm: HashAlgorithm,
    chunk_size: usize,
}

impl FingerprintEngine {
    /// Create an engine with the default chunk size.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Override the read chunk size. Zero is bumped to one byte.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// The configured hash algorithm.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The configured read chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Start an incremental digest with this engine's algorithm.
    pub fn fingerprinter(&self) -> Fingerprinter {
        Fingerprinter::new(self.algorithm)
    }

    /// Fingerprint content already in memory.
    pub fn fingerprint_bytes(&self, data: &[u8]) -> Fingerprint {
        let mut hasher = self.fingerprinter();
        hasher.update(data);
        hasher.finalize()
    }

    /// Fingerprint a reader to completion.
    ///
    /// Returns the digest and the number of bytes consumed.
    pub fn fingerprint_reader<R: Read>(&self, reader: R) -> Result<(Fingerprint, u64)> {
        self.fingerprint_reader_cancellable(reader, &AtomicBool::new(false))
    }

    /// Fingerprint a reader, giving up with [`CoreError::Cancelled`] once
    /// `cancelled` is observed set. The flag is checked before every chunk.
    pub fn fingerprint_reader_cancellable<R: Read>(
        &self,
        mut reader: R,
        cancelled: &AtomicBool,
    ) -> Result<(Fingerprint, u64)> {
        let mut hasher = self.fingerprinter();
        let mut buf = vec![0u8; self.chunk_size];

        loop {
            if cancelled.load(Ordering::Acquire) {
                return Err(CoreError::Cancelled);
            }
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => hasher.update(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(CoreError::ReadFailure(e)),
            }
        }

        let total = hasher.bytes_seen();
        Ok((hasher.finalize(), total))
    }
}

impl Default for FingerprintEngine {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}
