use super::Codec;
use crate::errors::RlpError;
use crate::item::Item;
use crate::value::Value;

/// Byte string codec with optional length bounds.
///
/// Serialization is the identity; only the length is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryCodec {
    min_length: usize,
    max_length: Option<usize>,
    allow_empty: bool,
}

impl BinaryCodec {
    /// Any length.
    pub const fn new() -> Self {
        Self {
            min_length: 0,
            max_length: None,
            allow_empty: false,
        }
    }

    /// Exactly `len` bytes.
    pub const fn fixed(len: usize) -> Self {
        Self::bounded(len, len)
    }

    /// Between `min` and `max` bytes, inclusive.
    pub const fn bounded(min: usize, max: usize) -> Self {
        Self {
            min_length: min,
            max_length: Some(max),
            allow_empty: false,
        }
    }

    /// Also accepts the empty string regardless of the bounds.
    pub const fn with_allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Fixed length, if the bounds pin one.
    pub fn fixed_length(&self) -> Option<usize> {
        self.max_length.filter(|&max| max == self.min_length)
    }

    fn check_length(&self, len: usize) -> Result<(), RlpError> {
        let in_bounds = len >= self.min_length && self.max_length.is_none_or(|max| len <= max);
        if in_bounds || (self.allow_empty && len == 0) {
            return Ok(());
        }
        Err(RlpError::InvalidLength {
            min: self.min_length,
            max: self.max_length.unwrap_or(usize::MAX),
            actual: len,
        })
    }
}

impl Codec for BinaryCodec {
    fn serialize(&self, value: &Value) -> Result<Item, RlpError> {
        match value {
            Value::Bytes(bytes) => {
                self.check_length(bytes.len())?;
                Ok(Item::Bytes(bytes.clone()))
            }
            other => Err(RlpError::TypeMismatch {
                expected: "byte string",
                found: other.type_name(),
            }),
        }
    }

    fn deserialize(&self, item: &Item) -> Result<Value, RlpError> {
        match item {
            Item::Bytes(bytes) => {
                self.check_length(bytes.len())?;
                Ok(Value::Bytes(bytes.clone()))
            }
            Item::List(_) => Err(RlpError::TypeMismatch {
                expected: "byte string",
                found: item.type_name(),
            }),
        }
    }
}
