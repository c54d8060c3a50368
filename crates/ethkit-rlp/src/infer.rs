//! Structural codec inference.

use crate::codec::{BinaryCodec, IntegerCodec, ListCodec, Sedes};
use crate::errors::RlpError;
use crate::value::Value;

/// Returns the codec that would serialize `value`.
///
/// An empty list infers to the untyped list codec ("any list"), not to a
/// zero-element typed list, including when it is nested inside another list.
///
/// # Errors
///
/// Returns [`RlpError::CannotInfer`] for negative integers anywhere in `value`.
pub fn infer(value: &Value) -> Result<Sedes, RlpError> {
    match value {
        Value::Uint(_) => Ok(IntegerCodec::new().into()),
        Value::Negative(magnitude) => Err(RlpError::CannotInfer(format!(
            "negative integer -{magnitude}"
        ))),
        Value::Bytes(_) => Ok(BinaryCodec::new().into()),
        Value::List(items) if items.is_empty() => Ok(ListCodec::untyped().into()),
        Value::List(items) => items
            .iter()
            .map(infer)
            .collect::<Result<Vec<_>, _>>()
            .map(|elements| ListCodec::of(elements).into()),
    }
}
