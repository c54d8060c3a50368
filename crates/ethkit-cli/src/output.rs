//! Output formatting utilities.

use ethkit_canonical::CanonicalValue;
use ethkit_rlp::Sedes;
use serde_json::{json, Value};

/// Collects every view of a value as JSON.
pub fn format_views(value: &CanonicalValue, pad: usize) -> Value {
    json!({
        "kind": value.kind().to_string(),
        "hex": value.as_hex(),
        "prefixed_hex": value.as_prefixed_hex(),
        "decimal": value.as_decimal_text(),
        "byte_length": value.as_bytes().len(),
        "padded_hex": value.zero_padded_hex(pad.saturating_mul(2)),
    })
}

/// Prints every view of a value as aligned rows.
#[allow(clippy::print_literal)]
pub fn print_views(value: &CanonicalValue, pad: usize) {
    println!("{:<12} {}", "kind", value.kind());
    println!("{:<12} {}", "hex", value.as_hex());
    println!("{:<12} {}", "prefixed", value.as_prefixed_hex());
    println!("{:<12} {}", "decimal", value.as_decimal_text());
    println!("{:<12} {}", "byte_length", value.as_bytes().len());
    println!("{:<12} {}", "padded", value.zero_padded_hex(pad.saturating_mul(2)));
}

/// Renders a codec as a short type expression, e.g. `list[int, bytes]`.
pub fn describe_sedes(sedes: &Sedes) -> String {
    match sedes {
        Sedes::Integer(codec) => match codec.width() {
            Some(width) => format!("int{}", width * 8),
            None => "int".to_string(),
        },
        Sedes::Binary(codec) => match codec.fixed_length() {
            Some(len) => format!("bytes{}", len),
            None => "bytes".to_string(),
        },
        Sedes::List(codec) => match codec.elements() {
            None => "list".to_string(),
            Some(elements) => format!(
                "list[{}]",
                elements
                    .iter()
                    .map(describe_sedes)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
        Sedes::CountableList(codec) => format!("list<{}>", describe_sedes(codec.element())),
    }
}
