//! Command implementations.

use clap::ValueEnum;
use ethkit_canonical::ValueKind;
use ethkit_rlp::{BinaryCodec, IntegerCodec, Sedes};

pub mod convert;
pub mod decode;
pub mod encode;
pub mod hash;
pub mod infer;
pub mod random;

/// Input variant selectable with `convert --as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Hex text.
    Hex,
    /// Decimal text.
    Decimal,
    /// The argument's UTF-8 bytes.
    Bytes,
}

impl From<KindArg> for ValueKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Hex => ValueKind::Hex,
            KindArg::Decimal => ValueKind::Decimal,
            KindArg::Bytes => ValueKind::Bytes,
        }
    }
}

/// Top-level codec selectable with `--sedes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SedesArg {
    /// Unbounded big-endian integer.
    Int,
    /// Unbounded byte string.
    Bytes,
}

impl From<SedesArg> for Sedes {
    fn from(arg: SedesArg) -> Self {
        match arg {
            SedesArg::Int => IntegerCodec::new().into(),
            SedesArg::Bytes => BinaryCodec::new().into(),
        }
    }
}
