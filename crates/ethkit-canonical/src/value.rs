use std::fmt;

use alloy_primitives::U256;
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::classify::{
    big_endian_to_int, bytes_to_hex, classify, hex_to_bytes, int_to_big_endian, is_decimal, is_hex,
    prefix_hex, strip_leading_zeros, zpad, zpad_hex, Shape,
};
use crate::validation::{ValueError, ValueKind};

/// Default width, in bytes, of the padded views.
pub const WORD_SIZE: usize = 32;

/// Raw input handed to [`CanonicalValue::construct`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// Text such as `"0xdeadbeef"` or `"1024"`.
    Text(&'a str),
    /// A raw byte sequence.
    Bytes(&'a [u8]),
    /// An unsigned integer of any width.
    Int(BigUint),
}

impl Input<'_> {
    fn render(&self) -> String {
        match self {
            Input::Text(text) => (*text).to_string(),
            Input::Bytes(bytes) => prefix_hex(&bytes_to_hex(bytes)),
            Input::Int(value) => value.to_string(),
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Input::Text(value)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Input::Text(value)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(value: &'a [u8]) -> Self {
        Input::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Input::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Input::Bytes(value)
    }
}

impl From<BigUint> for Input<'_> {
    fn from(value: BigUint) -> Self {
        Input::Int(value)
    }
}

impl From<U256> for Input<'_> {
    fn from(value: U256) -> Self {
        Input::Int(BigUint::from_bytes_be(&value.to_be_bytes::<WORD_SIZE>()))
    }
}

macro_rules! input_from_uint {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input<'_> {
                fn from(value: $ty) -> Self {
                    Input::Int(BigUint::from(value))
                }
            }
        )*
    };
}

input_from_uint!(u8, u16, u32, u64, u128, usize);

/// An unsigned integer of any width with all of its text and byte views.
///
/// Views are computed once at construction; the value is immutable and can
/// be shared freely across threads.
///
/// ```rust
/// use ethkit_canonical::CanonicalValue;
///
/// let value = CanonicalValue::decimal("1145256125817859742934257")?;
/// assert_eq!(value.as_hex(), "f284757fec556200a4f1");
/// assert_eq!(value.padded_hex().len(), 64);
/// # Ok::<(), ethkit_canonical::ValueError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalValue {
    kind: ValueKind,
    integer: BigUint,
    bytes: Vec<u8>,
    hex: String,
    decimal: String,
}

impl CanonicalValue {
    /// Builds a value of `kind` from `input`.
    ///
    /// # Errors
    ///
    /// - [`ValueError::InputRequired`] for Hex/Decimal/Bytes without input
    /// - [`ValueError::ShapeMismatch`] when the input does not match the variant
    /// - [`ValueError::Unsupported`] for Generic with explicit input
    pub fn construct(kind: ValueKind, input: Option<Input<'_>>) -> Result<Self, ValueError> {
        match (kind, input) {
            (ValueKind::Generic, None) => Ok(Self::random()),
            (ValueKind::Generic, Some(_)) => Err(ValueError::Unsupported {
                variant: ValueKind::Generic,
                operation: "parsing explicit input",
            }),
            (kind, None) => Err(ValueError::InputRequired { variant: kind }),
            (ValueKind::Hex, Some(input)) => Self::parse_hex(&input),
            (ValueKind::Decimal, Some(input)) => Self::parse_decimal(input),
            (ValueKind::Bytes, Some(input)) => Self::parse_bytes(&input),
        }
    }

    /// Shorthand for `construct(ValueKind::Hex, Some(input))`.
    pub fn hex<'a>(input: impl Into<Input<'a>>) -> Result<Self, ValueError> {
        Self::construct(ValueKind::Hex, Some(input.into()))
    }

    /// Shorthand for `construct(ValueKind::Decimal, Some(input))`.
    pub fn decimal<'a>(input: impl Into<Input<'a>>) -> Result<Self, ValueError> {
        Self::construct(ValueKind::Decimal, Some(input.into()))
    }

    /// Shorthand for `construct(ValueKind::Bytes, Some(input))`.
    pub fn bytes<'a>(input: impl Into<Input<'a>>) -> Result<Self, ValueError> {
        Self::construct(ValueKind::Bytes, Some(input.into()))
    }

    /// Fresh 32-byte pseudorandom value. Not suitable for key material.
    pub fn generic() -> Self {
        Self::random()
    }

    /// Wraps an integer as a Decimal value. Never fails.
    pub fn from_integer(value: BigUint) -> Self {
        let bytes = int_to_big_endian(&value);
        Self::build(ValueKind::Decimal, value, bytes)
    }

    fn random() -> Self {
        let word: [u8; WORD_SIZE] = rand::random();
        Self::from_raw(ValueKind::Bytes, &word)
    }

    fn parse_hex(input: &Input<'_>) -> Result<Self, ValueError> {
        let text = match input {
            Input::Text(text) if is_hex(text) => *text,
            Input::Bytes(bytes) if classify(bytes) == Shape::Hex => {
                std::str::from_utf8(bytes).map_err(|_| mismatch(ValueKind::Hex, input))?
            }
            _ => return Err(mismatch(ValueKind::Hex, input)),
        };
        let bytes = hex_to_bytes(text).map_err(|_| mismatch(ValueKind::Hex, input))?;
        Ok(Self::from_raw(ValueKind::Hex, &bytes))
    }

    fn parse_decimal(input: Input<'_>) -> Result<Self, ValueError> {
        match input {
            Input::Int(value) => Ok(Self::from_integer(value)),
            Input::Text(text) if is_decimal(text) => BigUint::parse_bytes(text.as_bytes(), 10)
                .map(Self::from_integer)
                .ok_or_else(|| mismatch(ValueKind::Decimal, &input)),
            _ => Err(mismatch(ValueKind::Decimal, &input)),
        }
    }

    fn parse_bytes(input: &Input<'_>) -> Result<Self, ValueError> {
        match input {
            Input::Bytes(bytes) => Ok(Self::from_raw(ValueKind::Bytes, bytes)),
            _ => Err(mismatch(ValueKind::Bytes, input)),
        }
    }

    /// Builds a value from big-endian bytes of any length, dropping leading zeros.
    pub(crate) fn from_raw(kind: ValueKind, bytes: &[u8]) -> Self {
        let bytes = strip_leading_zeros(bytes).to_vec();
        Self::build(kind, big_endian_to_int(&bytes), bytes)
    }

    fn build(kind: ValueKind, integer: BigUint, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            hex: bytes_to_hex(&bytes),
            decimal: integer.to_str_radix(10),
            integer,
            bytes,
        }
    }

    /// Variant the value was built as. Generic values report [`ValueKind::Bytes`].
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Backing integer.
    pub fn as_integer(&self) -> &BigUint {
        &self.integer
    }

    /// Unprefixed, lower-case, even-length hex. Zero is the empty string.
    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// `0x` followed by [`as_hex`](Self::as_hex).
    pub fn as_prefixed_hex(&self) -> String {
        prefix_hex(&self.hex)
    }

    /// Minimal big-endian bytes. Zero is the empty slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Base-10 digits without leading zeros.
    pub fn as_decimal_text(&self) -> &str {
        &self.decimal
    }

    /// Bytes left-padded with zeros to `len`.
    pub fn zero_padded_bytes(&self, len: usize) -> Vec<u8> {
        zpad(&self.bytes, len)
    }

    /// Bytes left-padded to a 32-byte word. Wider values come back unpadded.
    pub fn padded_bytes(&self) -> Vec<u8> {
        self.zero_padded_bytes(WORD_SIZE)
    }

    /// Hex left-padded with `0` to `len` characters.
    pub fn zero_padded_hex(&self, len: usize) -> String {
        zpad_hex(&self.hex, len)
    }

    /// Hex left-padded to a 32-byte word (64 characters).
    pub fn padded_hex(&self) -> String {
        self.zero_padded_hex(WORD_SIZE * 2)
    }

    /// Returns `true` for the zero value.
    pub fn is_zero(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn mismatch(variant: ValueKind, input: &Input<'_>) -> ValueError {
    ValueError::ShapeMismatch {
        variant,
        value: input.render(),
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex)
    }
}

impl From<BigUint> for CanonicalValue {
    fn from(value: BigUint) -> Self {
        Self::from_integer(value)
    }
}

impl Serialize for CanonicalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_prefixed_hex())
    }
}

impl<'de> Deserialize<'de> for CanonicalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::hex(text.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIG: &str = "1145256125817859742934257";

    #[test]
    fn concrete_variants_require_input() {
        for kind in [ValueKind::Hex, ValueKind::Decimal, ValueKind::Bytes] {
            assert_eq!(
                CanonicalValue::construct(kind, None).unwrap_err(),
                ValueError::InputRequired { variant: kind }
            );
        }
    }

    #[test]
    fn generic_rejects_explicit_input() {
        let err = CanonicalValue::construct(ValueKind::Generic, Some(Input::Text("ab")))
            .unwrap_err();
        assert!(matches!(
            err,
            ValueError::Unsupported {
                variant: ValueKind::Generic,
                ..
            }
        ));
        assert!(CanonicalValue::construct(ValueKind::Generic, Some(Input::Int(BigUint::default()))).is_err());
    }

    #[test]
    fn generic_without_input_is_a_padded_word() {
        let value = CanonicalValue::construct(ValueKind::Generic, None).unwrap();
        assert_eq!(value.kind(), ValueKind::Bytes);
        assert_eq!(value.padded_hex().len(), 64);
        assert_eq!(value.padded_bytes().len(), 32);
        assert_eq!(value.as_hex().len() % 2, 0);
    }

    #[test]
    fn decimal_text_and_integer_agree() {
        let from_text = CanonicalValue::decimal(BIG).unwrap();
        let from_int = CanonicalValue::decimal(1145256125817859742934257u128).unwrap();
        assert_eq!(from_text, from_int);
        assert_eq!(from_text.as_hex(), "f284757fec556200a4f1");
        assert_eq!(from_text.as_prefixed_hex(), "0xf284757fec556200a4f1");
        assert_eq!(
            from_text.as_bytes(),
            &[0xf2, 0x84, 0x75, 0x7f, 0xec, 0x55, 0x62, 0x00, 0xa4, 0xf1]
        );
        assert_eq!(
            from_text.padded_hex(),
            "00000000000000000000000000000000000000000000f284757fec556200a4f1"
        );
        assert_eq!(from_text.as_decimal_text(), BIG);
    }

    #[test]
    fn decimal_rejects_other_shapes() {
        assert!(matches!(
            CanonicalValue::decimal("0xff").unwrap_err(),
            ValueError::ShapeMismatch { .. }
        ));
        assert!(CanonicalValue::decimal("12a").is_err());
        assert!(CanonicalValue::decimal(&[1u8, 2]).is_err());
    }

    #[test]
    fn decimal_has_no_width_limit() {
        let digits = "1".repeat(80);
        let value = CanonicalValue::decimal(digits.as_str()).unwrap();
        assert_eq!(value.as_decimal_text(), digits);
        assert!(value.as_bytes().len() > WORD_SIZE);
        assert_eq!(value.padded_hex(), value.as_hex());
        let again = CanonicalValue::hex(value.as_prefixed_hex().as_str()).unwrap();
        assert_eq!(again.as_integer(), value.as_integer());
    }

    #[test]
    fn hex_is_normalized() {
        let value = CanonicalValue::hex("0xABC").unwrap();
        assert_eq!(value.as_hex(), "0abc");
        assert_eq!(value.as_integer(), &BigUint::from(0xabcu64));
        let value = CanonicalValue::hex("0000ff").unwrap();
        assert_eq!(value.as_hex(), "ff");
        assert_eq!(value.as_decimal_text(), "255");
        let value = CanonicalValue::hex(b"0x10").unwrap();
        assert_eq!(value.as_integer(), &BigUint::from(16u64));
    }

    #[test]
    fn hex_rejects_other_shapes() {
        assert!(CanonicalValue::hex("hello").is_err());
        assert!(CanonicalValue::hex("").is_err());
        assert!(CanonicalValue::hex(&[0xffu8, 0x00]).is_err());
        assert!(CanonicalValue::hex(7u64).is_err());
    }

    #[test]
    fn bytes_accepts_raw_sequences_only() {
        let value = CanonicalValue::bytes(&[0u8, 0, 1, 0]).unwrap();
        assert_eq!(value.as_bytes(), &[1, 0]);
        assert_eq!(value.as_integer(), &BigUint::from(256u64));
        assert_eq!(value.zero_padded_bytes(4), vec![0, 0, 1, 0]);
        assert!(CanonicalValue::bytes("0xff").is_err());
        assert!(CanonicalValue::bytes(1u64).is_err());
    }

    #[test]
    fn bytes_keeps_signature_length_input() {
        let signature = [0x11u8; 65];
        let value = CanonicalValue::bytes(&signature).unwrap();
        assert_eq!(value.kind(), ValueKind::Bytes);
        assert_eq!(value.as_bytes(), &signature[..]);
        assert_eq!(value.as_hex(), "11".repeat(65));
        assert_eq!(value.padded_bytes(), signature.to_vec());
        assert_eq!(value.as_integer().bits(), 65 * 8 - 3);
        let by_decimal = CanonicalValue::decimal(value.as_decimal_text()).unwrap();
        assert_eq!(by_decimal.as_bytes(), &signature[..]);
    }

    #[test]
    fn zero_views() {
        let zero = CanonicalValue::decimal("0").unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero.as_hex(), "");
        assert_eq!(zero.as_prefixed_hex(), "0x");
        assert!(zero.as_bytes().is_empty());
        assert_eq!(zero.as_decimal_text(), "0");
        assert_eq!(zero.padded_bytes(), vec![0u8; 32]);
        assert_eq!(zero.padded_hex(), "0".repeat(64));
        assert_eq!(CanonicalValue::hex("0x").unwrap(), CanonicalValue::hex("00").unwrap());
    }

    #[test]
    fn serde_uses_prefixed_hex() {
        let value = CanonicalValue::decimal(255u64).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""0xff""#);
        let parsed: CanonicalValue = serde_json::from_str(r#""0x00ff""#).unwrap();
        assert_eq!(parsed.as_integer(), &BigUint::from(255u64));
        assert!(serde_json::from_str::<CanonicalValue>(r#""nope""#).is_err());
    }
}
