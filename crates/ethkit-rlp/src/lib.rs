//! Recursive Length Prefix (RLP) encoding for Ethereum data.
//!
//! This crate provides:
//! - A bit-exact wire engine over structural [`Item`]s
//! - Typed codecs ([`IntegerCodec`], [`BinaryCodec`], [`ListCodec`], [`CountableList`])
//! - Structural codec [`infer`]ence
//! - Top-level [`encode`] / [`decode`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ethkit_rlp::{decode, encode, IntegerCodec, ListCodec, Sedes, Value};
//!
//! let value = Value::List(vec!["cat".into(), "dog".into()]);
//! let encoded = encode(&value, None)?;
//! assert_eq!(encoded, b"\xc8\x83cat\x83dog");
//!
//! let sedes = Sedes::from(ListCodec::of(vec![IntegerCodec::new().into(); 2]));
//! let encoded = encode(&Value::List(vec![1.into(), 1024.into()]), Some(&sedes))?;
//! assert_eq!(decode(&encoded, Some(&sedes))?, Value::List(vec![1.into(), 1024.into()]));
//! # Ok::<(), ethkit_rlp::RlpError>(())
//! ```

#![deny(missing_docs)]

/// Codec trait and the codec set.
pub mod codec;
/// Error types for RLP operations.
pub mod errors;
/// Codec inference from values.
pub mod infer;
/// Wire format engine.
pub mod item;
/// Dynamic codec input/output.
pub mod value;

pub use codec::{
    BinaryCodec, Codec, CountableList, IntegerCodec, ListCodec, Sedes, BIG_ENDIAN_INT, BINARY,
};
pub use errors::RlpError;
pub use infer::infer;
pub use item::{DecodeMode, Item, MAX_DEPTH};
pub use value::Value;

use tracing::trace;

/// Encodes `value` with `sedes`, inferring the codec when `None`.
///
/// # Errors
///
/// Returns [`RlpError`] if the value does not fit the codec or cannot be
/// inferred.
pub fn encode(value: &Value, sedes: Option<&Sedes>) -> Result<Vec<u8>, RlpError> {
    let item = match sedes {
        Some(sedes) => sedes.serialize(value)?,
        None => infer(value)?.serialize(value)?,
    };
    let encoded = item.encode();
    trace!(len = encoded.len(), inferred = sedes.is_none(), "encoded rlp");
    Ok(encoded)
}

/// Decodes `input` strictly. Without a codec the result is structural:
/// byte strings and lists only.
///
/// # Errors
///
/// Returns [`RlpError`] on malformed or non-canonical input, trailing bytes,
/// or a value that does not fit the codec.
pub fn decode(input: &[u8], sedes: Option<&Sedes>) -> Result<Value, RlpError> {
    decode_with_mode(input, sedes, DecodeMode::Strict).map(|(value, _)| value)
}

/// Decodes `input` in the given mode, returning the value and the number of
/// unread trailing bytes.
///
/// # Errors
///
/// See [`decode`]; trailing bytes are only an error in [`DecodeMode::Strict`].
pub fn decode_with_mode(
    input: &[u8],
    sedes: Option<&Sedes>,
    mode: DecodeMode,
) -> Result<(Value, usize), RlpError> {
    let (item, trailing) = Item::decode(input, mode)?;
    let value = match sedes {
        Some(sedes) => sedes.deserialize(&item)?,
        None => Value::from(&item),
    };
    trace!(len = input.len(), trailing, ?mode, "decoded rlp");
    Ok((value, trailing))
}
