//! # Veriledger Testkit
//!
//! Testing utilities for Veriledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known digests that every fingerprint engine build must reproduce
//! - **Generators**: Proptest strategies for content, names, and tampering
//! - **Fixtures**: A ready ledger with helpers for seeding it
//!
//! ## Golden Vectors
//!
//! ```rust
//! use veriledger_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for vector in all_vectors() {
//!     println!("{} ({}): {}", vector.name, vector.algorithm, vector.expected_hex);
//! }
//! verify_all_vectors().unwrap();
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use veriledger_testkit::generators::tampered_pair;
//!
//! proptest! {
//!     #[test]
//!     fn tampering_is_detected((original, tampered) in tampered_pair(256)) {
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use veriledger_testkit::fixtures::LedgerFixture;
//!
//! # async fn example() {
//! let fixture = LedgerFixture::new();
//! let registered = fixture.register("notes.txt", b"meeting notes").await;
//! assert!(registered.created);
//! # }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{flip_random_bit, random_content, sample_document, LedgerFixture};
pub use generators::{content, display_name, tampered_pair, RegistrationParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
