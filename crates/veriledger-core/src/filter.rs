//! Audit filtering.

use crate::record::Record;

/// Case-insensitive substring filter for audit queries.
///
/// A record matches when the needle occurs in its display name, its
/// description, or the hex rendering of its fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    needle: String,
}

impl RecordFilter {
    /// Build a filter. Returns `None` for an empty or whitespace-only query,
    /// which callers treat as "match everything".
    pub fn new(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            needle: trimmed.to_lowercase(),
        })
    }

    /// The normalized needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Test a record against the filter.
    pub fn matches(&self, record: &Record) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(&self.needle);

        contains(record.display_name())
            || record.description().is_some_and(contains)
            || record.fingerprint().to_hex().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::FingerprintEngine;
    use crate::record::NewRecord;
    use crate::types::RecordId;

    fn record(name: &str, description: Option<&str>, content: &[u8]) -> Record {
        NewRecord {
            display_name: name.into(),
            fingerprint: FingerprintEngine::default().fingerprint_bytes(content),
            description: description.map(String::from),
            registered_at: 0,
            size_bytes: content.len() as u64,
            content_kind: "text/plain".into(),
            locator: "sim-x".into(),
        }
        .into_record(RecordId::FIRST)
    }

    #[test]
    fn test_blank_query_is_no_filter() {
        assert!(RecordFilter::new("").is_none());
        assert!(RecordFilter::new("   ").is_none());
    }

    #[test]
    fn test_matches_each_field_case_insensitively() {
        let r = record("Contract.PDF", Some("Signed by ACME"), b"abc");

        assert!(RecordFilter::new("contract").unwrap().matches(&r));
        assert!(RecordFilter::new("acme").unwrap().matches(&r));
        // sha256("abc") starts with ba7816bf
        assert!(RecordFilter::new("BA7816").unwrap().matches(&r));
        assert!(!RecordFilter::new("invoice").unwrap().matches(&r));
    }

    #[test]
    fn test_missing_description_does_not_match() {
        let r = record("notes.txt", None, b"x");
        assert!(!RecordFilter::new("signed").unwrap().matches(&r));
    }
}
