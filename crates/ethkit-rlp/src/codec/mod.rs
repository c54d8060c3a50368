//! Serializer/deserializer pairs ("sedes") for each RLP shape.

mod binary;
mod integer;
mod list;

pub use binary::BinaryCodec;
pub use integer::IntegerCodec;
pub use list::{CountableList, ListCodec};

use crate::errors::RlpError;
use crate::item::Item;
use crate::value::Value;

/// Unbounded big-endian integer codec.
pub const BIG_ENDIAN_INT: IntegerCodec = IntegerCodec::new();

/// Unbounded byte string codec.
pub const BINARY: BinaryCodec = BinaryCodec::new();

/// Converts between [`Value`]s and structural RLP [`Item`]s.
///
/// Codecs are immutable configuration; one instance can serve any number
/// of concurrent calls.
pub trait Codec {
    /// Converts `value` into an item, validating it against the codec.
    fn serialize(&self, value: &Value) -> Result<Item, RlpError>;

    /// Converts `item` back into a value, validating it against the codec.
    fn deserialize(&self, item: &Item) -> Result<Value, RlpError>;
}

/// Any of the codecs, composable inside list codecs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sedes {
    /// Big-endian integer.
    Integer(IntegerCodec),
    /// Byte string.
    Binary(BinaryCodec),
    /// Heterogeneous or untyped list.
    List(ListCodec),
    /// Homogeneous list.
    CountableList(CountableList),
}

impl Codec for Sedes {
    fn serialize(&self, value: &Value) -> Result<Item, RlpError> {
        match self {
            Sedes::Integer(codec) => codec.serialize(value),
            Sedes::Binary(codec) => codec.serialize(value),
            Sedes::List(codec) => codec.serialize(value),
            Sedes::CountableList(codec) => codec.serialize(value),
        }
    }

    fn deserialize(&self, item: &Item) -> Result<Value, RlpError> {
        match self {
            Sedes::Integer(codec) => codec.deserialize(item),
            Sedes::Binary(codec) => codec.deserialize(item),
            Sedes::List(codec) => codec.deserialize(item),
            Sedes::CountableList(codec) => codec.deserialize(item),
        }
    }
}

impl From<IntegerCodec> for Sedes {
    fn from(codec: IntegerCodec) -> Self {
        Sedes::Integer(codec)
    }
}

impl From<BinaryCodec> for Sedes {
    fn from(codec: BinaryCodec) -> Self {
        Sedes::Binary(codec)
    }
}

impl From<ListCodec> for Sedes {
    fn from(codec: ListCodec) -> Self {
        Sedes::List(codec)
    }
}

impl From<CountableList> for Sedes {
    fn from(codec: CountableList) -> Self {
        Sedes::CountableList(codec)
    }
}
