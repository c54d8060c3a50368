//! Stateless predicates and conversions between hex text, bytes and integers.
//!
//! Everything here works on plain slices and [`BigUint`] values; nothing is
//! attached to `str` or the integer types themselves.

use std::sync::LazyLock;

use num_bigint::BigUint;
use regex::Regex;

use crate::validation::ConversionError;

/// Prefixed hex may have an empty body (`0x` is the empty byte string);
/// unprefixed hex needs at least one digit.
static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[xX][0-9a-fA-F]*|[0-9a-fA-F]+)$").expect("invalid regex")
});

static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("invalid regex"));

/// Shape of an input as seen by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Hex digits with an optional `0x` prefix.
    Hex,
    /// Binary data that is not printable text.
    RawBytes,
    /// Printable text that is not hex.
    Neither,
}

/// Classifies an input by its byte-level content.
///
/// Hex wins over raw bytes: `b"0xdead"` is hex-shaped text even when it
/// arrives as a byte slice.
pub fn classify(input: &[u8]) -> Shape {
    match std::str::from_utf8(input) {
        Ok(text) if is_hex(text) => Shape::Hex,
        Ok(text) if text.chars().any(is_binary_char) => Shape::RawBytes,
        Ok(_) => Shape::Neither,
        Err(_) => Shape::RawBytes,
    }
}

fn is_binary_char(c: char) -> bool {
    c.is_control() && !matches!(c, '\t' | '\n' | '\r')
}

/// Returns `true` when `text` is hex digits with an optional `0x` prefix.
pub fn is_hex(text: &str) -> bool {
    HEX_PATTERN.is_match(text)
}

/// Returns `true` when `text` is a non-empty run of decimal digits.
pub fn is_decimal(text: &str) -> bool {
    DECIMAL_PATTERN.is_match(text)
}

/// Returns `true` when `text` starts with `0x` or `0X`.
pub fn is_prefixed(text: &str) -> bool {
    text.starts_with("0x") || text.starts_with("0X")
}

/// Strips a leading `0x`/`0X`, if any.
pub fn remove_hex_prefix(text: &str) -> &str {
    if is_prefixed(text) {
        &text[2..]
    } else {
        text
    }
}

/// Adds a `0x` prefix unless one is already present.
pub fn prefix_hex(text: &str) -> String {
    if is_prefixed(text) {
        format!("0x{}", &text[2..])
    } else {
        format!("0x{text}")
    }
}

/// Decodes hex text into bytes. Odd-length input is left-padded with `0`.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>, ConversionError> {
    let body = remove_hex_prefix(text);
    if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConversionError::InvalidHex(text.to_string()));
    }
    let decoded = if body.len() % 2 == 1 {
        hex::decode(format!("0{body}"))
    } else {
        hex::decode(body)
    };
    decoded.map_err(|_| ConversionError::InvalidHex(text.to_string()))
}

/// Encodes bytes as unprefixed lower-case hex.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Minimal big-endian encoding of `value`; zero is the empty byte string.
pub fn int_to_big_endian(value: &BigUint) -> Vec<u8> {
    if value.bits() == 0 {
        return Vec::new();
    }
    value.to_bytes_be()
}

/// Reads a big-endian unsigned integer of any width. Leading zeros are
/// ignored and the empty slice is zero.
pub fn big_endian_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(strip_leading_zeros(bytes))
}

/// Returns the suffix of `bytes` after any leading zero bytes.
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Left-pads `bytes` with zeros to `len`. Longer input is returned unchanged.
pub fn zpad(bytes: &[u8], len: usize) -> Vec<u8> {
    let mut padded = vec![0u8; len.saturating_sub(bytes.len())];
    padded.extend_from_slice(bytes);
    padded
}

/// Big-endian encoding of `value`, left-padded to `len` bytes.
pub fn zpad_int(value: &BigUint, len: usize) -> Vec<u8> {
    zpad(&int_to_big_endian(value), len)
}

/// Left-pads unprefixed hex text with `0` to `len` characters.
pub fn zpad_hex(text: &str, len: usize) -> String {
    let body = remove_hex_prefix(text);
    format!("{body:0>len$}")
}
