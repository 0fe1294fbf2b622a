//! Records: the unit of the ledger.
//!
//! A [`Record`] binds one fingerprint to descriptive metadata and the time of
//! registration. Records have no mutators; once the store assigns an id the
//! record is frozen for the life of the ledger.

use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;
use crate::types::RecordId;

/// Content kind recorded when the caller supplies none.
pub const DEFAULT_CONTENT_KIND: &str = "application/octet-stream";

/// A record that has been built but not yet inserted.
///
/// The store turns this into a [`Record`] by assigning the next id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub display_name: String,
    pub fingerprint: Fingerprint,
    pub description: Option<String>,
    /// Unix milliseconds.
    pub registered_at: i64,
    pub size_bytes: u64,
    pub content_kind: String,
    /// Opaque archive address. Never dereferenced.
    pub locator: String,
}

impl NewRecord {
    /// Freeze into a record under the given id.
    pub fn into_record(self, id: RecordId) -> Record {
        Record {
            id,
            display_name: self.display_name,
            fingerprint: self.fingerprint,
            description: self.description,
            registered_at: self.registered_at,
            size_bytes: self.size_bytes,
            content_kind: self.content_kind,
            locator: self.locator,
        }
    }
}

/// An immutable ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(rename = "recordId")]
    id: RecordId,
    display_name: String,
    fingerprint: Fingerprint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    registered_at: i64,
    size_bytes: u64,
    content_kind: String,
    #[serde(rename = "secondaryLocator")]
    locator: String,
}

impl Record {
    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Registration time in Unix milliseconds.
    pub fn registered_at(&self) -> i64 {
        self.registered_at
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn content_kind(&self) -> &str {
        &self.content_kind
    }

    /// The simulated archive address assigned at registration.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// The caller-facing view, without internal-only fields.
    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            record_id: self.id,
            display_name: self.display_name.clone(),
            fingerprint: self.fingerprint,
            description: self.description.clone(),
            registered_at: self.registered_at,
            size_bytes: self.size_bytes,
            content_kind: self.content_kind.clone(),
        }
    }
}

/// What callers see of a record: everything except the archive locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSummary {
    pub record_id: RecordId,
    pub display_name: String,
    pub fingerprint: Fingerprint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub registered_at: i64,
    pub size_bytes: u64,
    pub content_kind: String,
}

impl From<&Record> for RecordSummary {
    fn from(record: &Record) -> Self {
        record.summary()
    }
}
