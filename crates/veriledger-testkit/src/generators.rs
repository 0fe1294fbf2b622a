//! Proptest generators for property-based testing.

use proptest::prelude::*;

/// Non-empty content up to `max_len` bytes.
pub fn content(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=max_len.max(1))
}

/// A plausible file name.
pub fn display_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,23}\\.(txt|pdf|png|csv|bin)".prop_map(String::from)
}

/// An optional free-text description.
pub fn description() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z ]{1,40}".prop_map(String::from))
}

/// Content plus a copy that differs in at least one byte.
pub fn tampered_pair(max_len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (content(max_len), any::<prop::sample::Index>(), 1u8..=255).prop_map(
        |(original, index, flip)| {
            let mut tampered = original.clone();
            let i = index.index(tampered.len());
            tampered[i] ^= flip;
            (original, tampered)
        },
    )
}

/// Parameters for one registration.
#[derive(Debug, Clone)]
pub struct RegistrationParams {
    pub display_name: String,
    pub description: Option<String>,
    pub content: Vec<u8>,
}

impl RegistrationParams {
    /// The registration request these parameters describe.
    pub fn registration(&self) -> veriledger::Registration {
        let registration = veriledger::Registration::new(self.display_name.clone());
        match &self.description {
            Some(d) => registration.description(d.clone()),
            None => registration,
        }
    }
}

impl Arbitrary for RegistrationParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (display_name(), description(), content(512))
            .prop_map(|(display_name, description, content)| RegistrationParams {
                display_name,
                description,
                content,
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::runtime::{Builder, Runtime};
    use veriledger::{Ledger, LedgerError};

    fn runtime() -> Runtime {
        Builder::new_current_thread().build().unwrap()
    }

    proptest! {
        #[test]
        fn test_registered_content_round_trips(params: RegistrationParams) {
            let rt = runtime();
            let ledger = Ledger::in_memory();

            let registered = rt
                .block_on(ledger.register_bytes(&params.content, params.registration()))
                .unwrap();
            let result = rt.block_on(ledger.verify_bytes(&params.content)).unwrap();

            prop_assert!(result.valid);
            prop_assert_eq!(result.matched_fingerprint(), Some(&registered.summary.fingerprint));

            let by_hash = ledger
                .verify_fingerprint(&registered.summary.fingerprint.to_hex())
                .unwrap();
            prop_assert!(by_hash.valid);
            prop_assert_eq!(
                by_hash.record.map(|r| r.display_name),
                Some(params.display_name.clone())
            );
        }

        #[test]
        fn test_tampered_content_fails_with_independent_digest(
            (original, tampered) in tampered_pair(512),
            name in display_name(),
        ) {
            let rt = runtime();
            let ledger = Ledger::in_memory();
            rt.block_on(ledger.register_bytes(&original, veriledger::Registration::new(name)))
                .unwrap();

            let result = rt.block_on(ledger.verify_bytes(&tampered)).unwrap();
            prop_assert!(!result.valid);
            prop_assert_eq!(
                result.computed_fingerprint,
                Some(ledger.engine().fingerprint_bytes(&tampered))
            );
        }

        #[test]
        fn test_second_registration_of_same_bytes_rejected(params: RegistrationParams) {
            let rt = runtime();
            let ledger = Ledger::in_memory();
            rt.block_on(ledger.register_bytes(&params.content, params.registration()))
                .unwrap();

            let again = rt.block_on(ledger.register_bytes(&params.content, params.registration()));
            let is_duplicate = matches!(again, Err(LedgerError::DuplicateFingerprint { .. }));
            prop_assert!(is_duplicate);
            prop_assert_eq!(ledger.stats().unwrap().records, 1);
        }
    }
}
