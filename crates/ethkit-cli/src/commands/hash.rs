//! Hash command implementation.

use ethkit_canonical::{CanonicalValue, Keccak256Hasher};
use ethkit_rlp::encode;

use crate::input::read_value;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = read_value(input)?;
    let encoded = encode(&value, None).map_err(|e| format!("Encoding failed: {}", e))?;
    let digest = CanonicalValue::digest_of::<Keccak256Hasher>(&encoded);

    println!("0x{}", digest.padded_hex());
    Ok(())
}
