//!
//! SHA3-256 hashing utilities.
//!
//! This is the FIPS 202 SHA3-256, not the original Keccak-256 padding used by
//! Ethereum; the two produce different digests for the same input.
//!
use sha3::Digest;

pub use sha3::Sha3_256;

/// Return the raw 32-byte SHA3-256 digest of the provided bytes.
#[must_use]
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    Sha3_256::digest(data).into()
}

///
/// TESTS
///
