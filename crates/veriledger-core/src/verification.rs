//! Verification results.

use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;
use crate::record::{Record, RecordSummary};

/// Outcome of checking content or a fingerprint against the ledger.
///
/// A miss is a successful query with `valid == false`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub valid: bool,
    /// The matched record, present exactly when `valid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordSummary>,
    /// The digest computed from submitted content. Absent for
    /// fingerprint-only lookups, where nothing was hashed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_fingerprint: Option<Fingerprint>,
}

impl VerificationResult {
    /// A lookup by content.
    pub fn from_content(computed: Fingerprint, found: Option<&Record>) -> Self {
        Self {
            valid: found.is_some(),
            record: found.map(Record::summary),
            computed_fingerprint: Some(computed),
        }
    }

    /// A lookup by fingerprint alone.
    pub fn from_lookup(found: Option<&Record>) -> Self {
        Self {
            valid: found.is_some(),
            record: found.map(Record::summary),
            computed_fingerprint: None,
        }
    }

    /// The fingerprint of the matched record, if any.
    pub fn matched_fingerprint(&self) -> Option<&Fingerprint> {
        self.record.as_ref().map(|r| &r.fingerprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::FingerprintEngine;

    #[test]
    fn test_negative_content_result_carries_digest() {
        let fp = FingerprintEngine::default().fingerprint_bytes(b"never registered");
        let result = VerificationResult::from_content(fp, None);
        assert!(!result.valid);
        assert_eq!(result.computed_fingerprint, Some(fp));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["computedFingerprint"], fp.to_hex());
        assert!(json.get("record").is_none());
    }

    #[test]
    fn test_negative_lookup_omits_digest() {
        let result = VerificationResult::from_lookup(None);
        assert!(!result.valid);
        assert!(result.computed_fingerprint.is_none());
        assert!(result.matched_fingerprint().is_none());
    }
}
