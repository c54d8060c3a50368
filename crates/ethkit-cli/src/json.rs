//! Mapping between JSON documents and RLP values.
//!
//! Integral numbers of any size are integers (negative ones are kept as
//! negative integers so the codecs can reject them),
//! `0x` strings are their decoded bytes, other strings are UTF-8 bytes and
//! arrays are lists.

use ethkit_canonical::{
    bytes_to_hex, hex_to_bytes, is_decimal, is_prefixed, prefix_hex, BigUint, ConversionError,
};
use ethkit_rlp::Value;
use serde_json::Value as Json;
use thiserror::Error;

/// JSON that has no RLP counterpart.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Floats, booleans, null and objects are not representable.
    #[error("unsupported JSON {kind} at {path}")]
    Unsupported {
        /// JSON type name.
        kind: &'static str,
        /// Location in the document.
        path: String,
    },
    /// A `0x` string with invalid hex.
    #[error("invalid hex at {path}: {source}")]
    InvalidHex {
        /// Location in the document.
        path: String,
        /// Underlying conversion error.
        source: ConversionError,
    },
}

/// Converts a JSON document into an RLP value.
pub fn value_from_json(json: &Json) -> Result<Value, JsonError> {
    convert(json, "root")
}

fn convert(json: &Json, path: &str) -> Result<Value, JsonError> {
    match json {
        Json::Number(n) => integer(&n.to_string()).ok_or_else(|| unsupported("float", path)),
        Json::String(s) if is_prefixed(s) => hex_to_bytes(s)
            .map(Value::Bytes)
            .map_err(|source| JsonError::InvalidHex {
                path: path.to_string(),
                source,
            }),
        Json::String(s) => Ok(Value::from(s.as_str())),
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| convert(item, &format!("{}[{}]", path, idx)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        Json::Bool(_) => Err(unsupported("boolean", path)),
        Json::Null => Err(unsupported("null", path)),
        Json::Object(_) => Err(unsupported("object", path)),
    }
}

/// Parses the exact digits of a JSON number; `None` for anything non-integral.
fn integer(text: &str) -> Option<Value> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    if !is_decimal(digits) {
        return None;
    }
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10)?;
    if negative && magnitude.bits() > 0 {
        Some(Value::Negative(magnitude))
    } else {
        Some(Value::Uint(magnitude))
    }
}

fn unsupported(kind: &'static str, path: &str) -> JsonError {
    JsonError::Unsupported {
        kind,
        path: path.to_string(),
    }
}

/// Converts a decoded value back to JSON: bytes as `0x` hex, integers as
/// numbers of any size, lists as arrays.
pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Uint(n) => number(&n.to_string()),
        Value::Negative(n) => number(&format!("-{}", n)),
        Value::Bytes(bytes) => Json::String(prefix_hex(&bytes_to_hex(bytes))),
        Value::List(items) => Json::Array(items.iter().map(value_to_json).collect()),
    }
}

fn number(digits: &str) -> Json {
    serde_json::from_str(digits).unwrap_or_else(|_| Json::String(digits.to_string()))
}
