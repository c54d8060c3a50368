use ethkit_canonical::{BigUint, CanonicalValue, U256};

use crate::item::Item;

/// Dynamic value consumed and produced by codecs.
///
/// Negative integers are representable here only so that codecs and
/// inference can reject them with a typed error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Non-negative integer of any width.
    Uint(BigUint),
    /// Negative integer, holding its magnitude.
    Negative(BigUint),
    /// Byte string or text.
    Bytes(Vec<u8>),
    /// Sequence of values.
    List(Vec<Value>),
}

impl Value {
    /// Human-readable structural type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Uint(_) => "integer",
            Value::Negative(_) => "negative integer",
            Value::Bytes(_) => "byte string",
            Value::List(_) => "list",
        }
    }

    /// Returns the integer, if this is a non-negative one.
    pub fn as_uint(&self) -> Option<&BigUint> {
        match self {
            Value::Uint(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the byte string, if this is one.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the list items, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Structural view of an item: byte strings stay bytes, lists recurse.
impl From<&Item> for Value {
    fn from(item: &Item) -> Self {
        match item {
            Item::Bytes(bytes) => Value::Bytes(bytes.clone()),
            Item::List(items) => Value::List(items.iter().map(Value::from).collect()),
        }
    }
}

impl From<BigUint> for Value {
    fn from(value: BigUint) -> Self {
        Value::Uint(value)
    }
}

impl From<U256> for Value {
    fn from(value: U256) -> Self {
        Value::Uint(BigUint::from_bytes_be(&value.to_be_bytes::<32>()))
    }
}

impl From<&CanonicalValue> for Value {
    fn from(value: &CanonicalValue) -> Self {
        Value::Uint(value.as_integer().clone())
    }
}

macro_rules! value_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Uint(BigUint::from(value))
                }
            }
        )*
    };
}

macro_rules! value_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    let magnitude = BigUint::from(value.unsigned_abs());
                    if value < 0 {
                        Value::Negative(magnitude)
                    } else {
                        Value::Uint(magnitude)
                    }
                }
            }
        )*
    };
}

value_from_unsigned!(u8, u16, u32, u64, u128, usize);
value_from_signed!(i8, i16, i32, i64, i128, isize);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Bytes(value.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Bytes(value.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(value: &[u8; N]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}
