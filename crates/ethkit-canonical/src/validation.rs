use std::fmt;

use thiserror::Error;

/// Variant of a canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Built from hex text (`0x` prefix optional).
    Hex,
    /// Built from decimal text or a native integer.
    Decimal,
    /// Built from a raw byte sequence.
    Bytes,
    /// Freshly generated pseudorandom value.
    Generic,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Hex => "hex",
            ValueKind::Decimal => "decimal",
            ValueKind::Bytes => "bytes",
            ValueKind::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// Errors raised while constructing a canonical value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A concrete-shape variant was constructed without input.
    #[error("{variant} value requires an input")]
    InputRequired {
        /// Variant that was requested.
        variant: ValueKind,
    },
    /// The input does not have the shape the variant accepts.
    #[error("{variant} value cannot be built from '{value}'")]
    ShapeMismatch {
        /// Variant that was requested.
        variant: ValueKind,
        /// Offending input, rendered as text.
        value: String,
    },
    /// The variant deliberately does not implement the operation.
    #[error("{operation} is not supported for {variant} values")]
    Unsupported {
        /// Variant that was requested.
        variant: ValueKind,
        /// Operation that was attempted.
        operation: &'static str,
    },
}

/// Errors raised by the free hex/integer conversion helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Text is not hex-shaped.
    #[error("'{0}' is not valid hex")]
    InvalidHex(String),
}
