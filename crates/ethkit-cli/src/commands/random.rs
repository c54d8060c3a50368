//! Random command implementation.

use ethkit_canonical::{CanonicalValue, WORD_SIZE};

use crate::output::{format_views, print_views};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let value = CanonicalValue::generic();
    if json {
        println!("{}", serde_json::to_string_pretty(&format_views(&value, WORD_SIZE))?);
    } else {
        print_views(&value, WORD_SIZE);
    }
    Ok(())
}
