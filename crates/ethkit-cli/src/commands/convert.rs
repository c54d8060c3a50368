//! Convert command implementation.

use ethkit_canonical::{is_decimal, is_hex, is_prefixed, CanonicalValue, Input, ValueKind};

use super::KindArg;
use crate::output::{format_views, print_views};

pub fn run(
    value: String,
    kind: Option<KindArg>,
    pad: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind = match kind {
        Some(kind) => ValueKind::from(kind),
        None => detect_kind(&value)?,
    };

    let input = match kind {
        ValueKind::Bytes => Input::Bytes(value.as_bytes()),
        _ => Input::Text(&value),
    };
    let canonical = CanonicalValue::construct(kind, Some(input))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&format_views(&canonical, pad))?);
    } else {
        print_views(&canonical, pad);
    }
    Ok(())
}

/// Bare digits are decimal; anything else hex-shaped is hex.
fn detect_kind(value: &str) -> Result<ValueKind, String> {
    if !is_prefixed(value) && is_decimal(value) {
        Ok(ValueKind::Decimal)
    } else if is_hex(value) {
        Ok(ValueKind::Hex)
    } else {
        Err(format!(
            "'{}' is neither decimal nor hex; pass --as to choose a variant",
            value
        ))
    }
}
