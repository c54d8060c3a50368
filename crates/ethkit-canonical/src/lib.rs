//! Canonical value primitives for Ethereum data.
//!
//! Every externally supplied value (hex text, decimal text, raw bytes, or a
//! request for a fresh random word) is normalized into a [`CanonicalValue`]
//! backed by one unsigned integer of any width and its minimal big-endian bytes.
//! The RLP codec in `ethkit-rlp` consumes these bytes and integers directly.
//!
#![deny(missing_docs)]

/// Hex/bytes/integer classification and conversion helpers.
pub mod classify;
/// Digest seam for hashing collaborators.
pub mod digest;
/// Error types and value kinds.
pub mod validation;
/// The canonical value family.
pub mod value;

pub use alloy_primitives::U256;
pub use num_bigint::BigUint;
pub use classify::{
    big_endian_to_int, bytes_to_hex, classify, hex_to_bytes, int_to_big_endian, is_decimal,
    is_hex, is_prefixed, prefix_hex, remove_hex_prefix, strip_leading_zeros, zpad, zpad_hex,
    zpad_int, Shape,
};
pub use digest::{Hasher, Keccak256Hasher, Sha256Hasher};
pub use validation::{ConversionError, ValueError, ValueKind};
pub use value::{CanonicalValue, Input, WORD_SIZE};
