//! Golden fingerprint vectors.
//!
//! Published digests for fixed inputs. Any engine that disagrees with one of
//! these would produce fingerprints no other verifier (or the on-chain
//! mirror) could match.

use veriledger_core::{FingerprintEngine, HashAlgorithm};

/// A single golden vector.
#[derive(Debug, Clone, Copy)]
pub struct GoldenVector {
    pub name: &'static str,
    pub algorithm: HashAlgorithm,
    pub input: &'static [u8],
    pub expected_hex: &'static str,
}

/// All golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "sha256_empty",
            algorithm: HashAlgorithm::Sha256,
            input: b"",
            expected_hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        },
        GoldenVector {
            name: "sha256_abc",
            algorithm: HashAlgorithm::Sha256,
            input: b"abc",
            expected_hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        },
        GoldenVector {
            name: "sha256_two_block",
            algorithm: HashAlgorithm::Sha256,
            input: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            expected_hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        },
        GoldenVector {
            name: "sha256_quick_brown_fox",
            algorithm: HashAlgorithm::Sha256,
            input: b"The quick brown fox jumps over the lazy dog",
            expected_hex: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
        },
        GoldenVector {
            name: "blake3_empty",
            algorithm: HashAlgorithm::Blake3,
            input: b"",
            expected_hex: "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262",
        },
        GoldenVector {
            name: "blake3_abc",
            algorithm: HashAlgorithm::Blake3,
            input: b"abc",
            expected_hex: "6437b3ac38465133ffb63b75273a8db548c558465d79db03fd359c6cd5bd9d85",
        },
    ]
}

/// Check every vector, both in one shot and one byte at a time.
///
/// Returns the names of failing vectors.
pub fn verify_all_vectors() -> Result<(), Vec<String>> {
    let mut failures = Vec::new();

    for vector in all_vectors() {
        let engine = FingerprintEngine::new(vector.algorithm);
        let whole = engine.fingerprint_bytes(vector.input).to_hex();

        let mut hasher = engine.fingerprinter();
        for byte in vector.input {
            hasher.update(std::slice::from_ref(byte));
        }
        let piecewise = hasher.finalize().to_hex();

        if whole != vector.expected_hex || piecewise != vector.expected_hex {
            failures.push(vector.name.to_string());
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        verify_all_vectors().unwrap();
    }

    #[test]
    fn test_vector_hex_is_well_formed() {
        for vector in all_vectors() {
            assert_eq!(vector.expected_hex.len(), 64, "{}", vector.name);
            assert!(hex::decode(vector.expected_hex).is_ok(), "{}", vector.name);
        }
    }
}
