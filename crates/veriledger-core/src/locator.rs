//! Simulated archive addressing.
//!
//! Records carry an address for where bulk content would be archived in an
//! external content store. Nothing in the ledger resolves it; it only has to
//! be present and distinct-looking.

use sha2::{Digest, Sha256};

const LOCATOR_PREFIX: &str = "sim-";
const LOCATOR_HEX_LEN: usize = 46;

/// Derive the archive locator for a registration.
///
/// The value is a function of the display name and registration time, so
/// the same name registered at different instants gets different locators.
pub fn derive_locator(display_name: &str, registered_at: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(display_name.as_bytes());
    hasher.update([0u8]);
    hasher.update(registered_at.to_be_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("{}{}", LOCATOR_PREFIX, &digest[..LOCATOR_HEX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_shape() {
        let loc = derive_locator("test.txt", 1_700_000_000_000);
        assert!(loc.starts_with("sim-"));
        assert_eq!(loc.len(), LOCATOR_PREFIX.len() + LOCATOR_HEX_LEN);
    }

    #[test]
    fn test_locator_deterministic() {
        assert_eq!(derive_locator("a", 5), derive_locator("a", 5));
        assert_ne!(derive_locator("a", 5), derive_locator("a", 6));
        assert_ne!(derive_locator("a", 5), derive_locator("b", 5));
    }
}
