//! Encode command implementation.

use ethkit_canonical::{bytes_to_hex, prefix_hex};
use ethkit_rlp::{encode, Sedes};

use super::SedesArg;
use crate::input::read_value;

pub fn run(input: Option<String>, sedes: Option<SedesArg>) -> Result<(), Box<dyn std::error::Error>> {
    let value = read_value(input)?;
    let sedes = sedes.map(Sedes::from);

    let encoded = encode(&value, sedes.as_ref()).map_err(|e| format!("Encoding failed: {}", e))?;

    println!("{}", prefix_hex(&bytes_to_hex(&encoded)));
    Ok(())
}
