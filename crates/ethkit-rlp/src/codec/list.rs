use super::{Codec, Sedes};
use crate::errors::RlpError;
use crate::infer::infer;
use crate::item::Item;
use crate::value::Value;

/// List codec pairing each position with its own codec.
///
/// With no element codecs (`untyped`) every item is serialized through
/// inference and deserialization returns the list structure unchanged. With
/// element codecs the list must have exactly that many items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListCodec {
    elements: Option<Vec<Sedes>>,
}

impl ListCodec {
    /// Accepts any list; items are inferred.
    pub const fn untyped() -> Self {
        Self { elements: None }
    }

    /// Accepts lists of exactly `elements.len()` items.
    pub fn of(elements: Vec<Sedes>) -> Self {
        Self {
            elements: Some(elements),
        }
    }

    /// Element codecs, or `None` for an untyped list.
    pub fn elements(&self) -> Option<&[Sedes]> {
        self.elements.as_deref()
    }

    /// Returns `true` if the codec accepts any list.
    pub fn is_untyped(&self) -> bool {
        self.elements.is_none()
    }

    fn check_arity(elements: &[Sedes], actual: usize) -> Result<(), RlpError> {
        if elements.len() != actual {
            return Err(RlpError::WrongListLength {
                expected: elements.len(),
                actual,
            });
        }
        Ok(())
    }
}

impl Codec for ListCodec {
    fn serialize(&self, value: &Value) -> Result<Item, RlpError> {
        let values = expect_list(value)?;
        let items = match &self.elements {
            None => values
                .iter()
                .map(|value| infer(value)?.serialize(value))
                .collect::<Result<Vec<_>, _>>()?,
            Some(elements) => {
                Self::check_arity(elements, values.len())?;
                elements
                    .iter()
                    .zip(values)
                    .map(|(codec, value)| codec.serialize(value))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(Item::List(items))
    }

    fn deserialize(&self, item: &Item) -> Result<Value, RlpError> {
        let items = expect_list_item(item)?;
        match &self.elements {
            None => Ok(Value::from(item)),
            Some(elements) => {
                Self::check_arity(elements, items.len())?;
                elements
                    .iter()
                    .zip(items)
                    .map(|(codec, item)| codec.deserialize(item))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::List)
            }
        }
    }
}

/// Homogeneous list: every item goes through the same codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountableList {
    element: Box<Sedes>,
    max_length: Option<usize>,
}

impl CountableList {
    /// Any number of items, each serialized with `element`.
    pub fn new(element: impl Into<Sedes>) -> Self {
        Self {
            element: Box::new(element.into()),
            max_length: None,
        }
    }

    /// Rejects lists longer than `max`.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Codec applied to every item.
    pub fn element(&self) -> &Sedes {
        &self.element
    }

    fn check_length(&self, actual: usize) -> Result<(), RlpError> {
        match self.max_length {
            Some(max) if actual > max => Err(RlpError::ListTooLong { max, actual }),
            _ => Ok(()),
        }
    }
}

impl Codec for CountableList {
    fn serialize(&self, value: &Value) -> Result<Item, RlpError> {
        let values = expect_list(value)?;
        self.check_length(values.len())?;
        values
            .iter()
            .map(|value| self.element.serialize(value))
            .collect::<Result<Vec<_>, _>>()
            .map(Item::List)
    }

    fn deserialize(&self, item: &Item) -> Result<Value, RlpError> {
        let items = expect_list_item(item)?;
        self.check_length(items.len())?;
        items
            .iter()
            .map(|item| self.element.deserialize(item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List)
    }
}

fn expect_list(value: &Value) -> Result<&[Value], RlpError> {
    value.as_list().ok_or(RlpError::TypeMismatch {
        expected: "list",
        found: value.type_name(),
    })
}

fn expect_list_item(item: &Item) -> Result<&[Item], RlpError> {
    item.as_list().ok_or(RlpError::TypeMismatch {
        expected: "list",
        found: item.type_name(),
    })
}
