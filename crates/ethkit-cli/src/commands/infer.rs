//! Infer command implementation.

use ethkit_rlp::infer;

use crate::input::read_value;
use crate::output::describe_sedes;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = read_value(input)?;
    let sedes = infer(&value).map_err(|e| format!("Inference failed: {}", e))?;
    println!("{}", describe_sedes(&sedes));
    Ok(())
}
