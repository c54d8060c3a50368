//! Input helpers shared by commands.

use std::io::{self, Read};

use ethkit_rlp::Value;

use crate::json::value_from_json;

/// Reads text from a file, or stdin when no path is given.
pub fn read_text(path: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e).into());
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Reads a JSON document and converts it to an RLP value.
pub fn read_value(path: Option<String>) -> Result<Value, Box<dyn std::error::Error>> {
    let text = read_text(path)?;
    let json: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| format!("Invalid JSON: {}", e))?;
    Ok(value_from_json(&json)?)
}
