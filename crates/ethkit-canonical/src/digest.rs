use sha2::{Digest as Sha2Digest, Sha256};

use crate::validation::ValueKind;
use crate::value::CanonicalValue;

/// Fixed-output digest function supplied by the caller.
///
/// Hashing is treated as an opaque byte-to-byte function; downstream code
/// (address checksums, name hashing) plugs its own algorithm in here.
pub trait Hasher {
    /// Digest length in bytes.
    const OUTPUT_LEN: usize;

    /// Hashes `data`.
    fn digest(data: &[u8]) -> Vec<u8>;
}

/// Keccak-256, the hash used for Ethereum transaction and state data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl Hasher for Keccak256Hasher {
    const OUTPUT_LEN: usize = 32;

    fn digest(data: &[u8]) -> Vec<u8> {
        alloy_primitives::keccak256(data).to_vec()
    }
}

/// SHA-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    const OUTPUT_LEN: usize = 32;

    fn digest(data: &[u8]) -> Vec<u8> {
        Sha256::digest(data).to_vec()
    }
}

impl CanonicalValue {
    /// Hashes `data` with `H` and wraps the digest as a Bytes value.
    pub fn digest_of<H: Hasher>(data: &[u8]) -> Self {
        CanonicalValue::from_raw(ValueKind::Bytes, &H::digest(data))
    }
}
