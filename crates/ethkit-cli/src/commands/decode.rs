//! Decode command implementation.

use ethkit_canonical::hex_to_bytes;
use ethkit_rlp::{decode_with_mode, DecodeMode, Sedes};
use tracing::warn;

use super::SedesArg;
use crate::json::value_to_json;

pub fn run(
    data: String,
    sedes: Option<SedesArg>,
    permissive: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = hex_to_bytes(data.trim()).map_err(|e| format!("Invalid input: {}", e))?;
    let mode = if permissive {
        DecodeMode::Permissive
    } else {
        DecodeMode::Strict
    };
    let sedes = sedes.map(Sedes::from);

    let (value, trailing) = decode_with_mode(&bytes, sedes.as_ref(), mode)
        .map_err(|e| format!("Decoding failed: {}", e))?;
    if trailing > 0 {
        warn!(trailing, "ignored bytes after the first item");
    }

    println!("{}", serde_json::to_string_pretty(&value_to_json(&value))?);
    Ok(())
}
