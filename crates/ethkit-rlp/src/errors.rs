use thiserror::Error;

/// Errors raised while encoding, decoding or inferring RLP.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RlpError {
    /// Negative integers have no RLP representation.
    #[error("cannot serialize negative integers")]
    NegativeInteger,
    /// Integer does not fit a fixed-width codec.
    #[error("integer too large; does not fit in {width} bytes")]
    IntegerOverflow {
        /// Width in bytes that was exceeded.
        width: usize,
    },
    /// Byte string length is outside the codec's bounds.
    #[error("object/string has invalid length {actual} (expected {min}..={max})")]
    InvalidLength {
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
        /// Actual length.
        actual: usize,
    },
    /// List arity does not match a typed list codec.
    #[error("list has wrong length: expected {expected}, got {actual}")]
    WrongListLength {
        /// Number of element codecs.
        expected: usize,
        /// Number of list items.
        actual: usize,
    },
    /// Homogeneous list exceeds its maximum length.
    #[error("list too long: {actual} items exceed maximum {max}")]
    ListTooLong {
        /// Maximum accepted length.
        max: usize,
        /// Actual length.
        actual: usize,
    },
    /// Input is well-formed but not in minimal form.
    #[error("non-canonical encoding: {0}")]
    NonCanonical(String),
    /// Codec received a value of the wrong structural type.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// What the codec accepts.
        expected: &'static str,
        /// What it was given.
        found: &'static str,
    },
    /// No codec can represent the value.
    #[error("cannot infer codec: {0}")]
    CannotInfer(String),
    /// Input ended before the declared length.
    #[error("unexpected end of input at offset {offset}: {needed} more bytes needed")]
    UnexpectedEof {
        /// Byte offset where the item starts.
        offset: usize,
        /// Number of missing bytes.
        needed: usize,
    },
    /// Bytes remain after the top-level item in strict mode.
    #[error("{count} trailing bytes after RLP item")]
    TrailingBytes {
        /// Number of unread bytes.
        count: usize,
    },
    /// Nesting exceeds the decoder's depth limit.
    #[error("nesting deeper than {max} levels")]
    TooDeep {
        /// Depth limit.
        max: usize,
    },
}
