use ethkit_canonical::{big_endian_to_int, int_to_big_endian, zpad, BigUint};

use super::Codec;
use crate::errors::RlpError;
use crate::item::Item;
use crate::value::Value;

/// Big-endian unsigned integer codec of unbounded width, optionally fixed to
/// `width` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntegerCodec {
    width: Option<usize>,
}

impl IntegerCodec {
    /// Minimal-length encoding; zero is the empty string.
    pub const fn new() -> Self {
        Self { width: None }
    }

    /// Exactly `width` bytes, left-padded with zeros.
    pub const fn fixed(width: usize) -> Self {
        Self { width: Some(width) }
    }

    /// Fixed width, if any.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Encodes `value` as big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RlpError::IntegerOverflow`] if the value needs more than
    /// the fixed width.
    pub fn encode_int(&self, value: &BigUint) -> Result<Vec<u8>, RlpError> {
        let minimal = int_to_big_endian(value);
        match self.width {
            None => Ok(minimal),
            Some(width) if minimal.len() > width => Err(RlpError::IntegerOverflow { width }),
            Some(width) => Ok(zpad(&minimal, width)),
        }
    }

    /// Decodes big-endian bytes.
    ///
    /// # Errors
    ///
    /// - [`RlpError::InvalidLength`] if a fixed-width codec gets another size
    /// - [`RlpError::NonCanonical`] if an unbounded codec sees a leading zero
    pub fn decode_int(&self, bytes: &[u8]) -> Result<BigUint, RlpError> {
        match self.width {
            Some(width) if bytes.len() != width => {
                return Err(RlpError::InvalidLength {
                    min: width,
                    max: width,
                    actual: bytes.len(),
                })
            }
            None if bytes.first() == Some(&0) => {
                return Err(RlpError::NonCanonical(
                    "integer has a leading zero byte".to_string(),
                ))
            }
            _ => {}
        }
        Ok(big_endian_to_int(bytes))
    }
}

impl Codec for IntegerCodec {
    fn serialize(&self, value: &Value) -> Result<Item, RlpError> {
        match value {
            Value::Uint(n) => self.encode_int(n).map(Item::Bytes),
            Value::Negative(_) => Err(RlpError::NegativeInteger),
            other => Err(RlpError::TypeMismatch {
                expected: "integer",
                found: other.type_name(),
            }),
        }
    }

    fn deserialize(&self, item: &Item) -> Result<Value, RlpError> {
        match item {
            Item::Bytes(bytes) => self.decode_int(bytes).map(Value::Uint),
            Item::List(_) => Err(RlpError::TypeMismatch {
                expected: "byte string",
                found: item.type_name(),
            }),
        }
    }
}
