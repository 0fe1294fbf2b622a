//! Strong type definitions for ledger identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a ledger record, assigned by the store at insertion.
///
/// Identifiers start at 1 and grow by one per insertion, so comparing two
/// ids compares their creation order. They are never reused.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// The first identifier a fresh ledger hands out.
    pub const FIRST: Self = Self(1);

    /// Create from a raw sequence number.
    pub const fn new(seq: u64) -> Self {
        Self(seq)
    }

    /// Get the raw sequence number.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Render as 16 hex digits.
    pub fn to_hex(&self) -> String {
        format!("{:016x}", self.0)
    }

    /// Parse the 16-digit hex rendering.
    pub fn from_hex(s: &str) -> Option<Self> {
        if s.len() != 16 {
            return None;
        }
        u64::from_str_radix(s, 16).ok().map(Self)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<u64> for RecordId {
    fn from(seq: u64) -> Self {
        Self(seq)
    }
}
