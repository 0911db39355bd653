//! Reading tabular record lists into a dynamic value tree.
//!
//! Run with: cargo run --example tabular_lists

use serde_lean::{parse, Value};
use std::error::Error;

const PORTFOLIO: &str = "\
owner: ada
positions:
  $ticker|qty|price|halted
  NVDA|10|495.50|-
  TSLA|5|240.00|+
  `BRK|B`|2|~|-
cash: 1200.50
";

fn main() -> Result<(), Box<dyn Error>> {
    let root = parse(PORTFOLIO)?;

    let owner = root.get("owner").and_then(Value::as_str).unwrap_or("?");
    println!("Portfolio of {}", owner);

    let positions = root
        .get("positions")
        .and_then(Value::as_list)
        .ok_or("positions is not a list")?;

    for record in positions {
        let fields: Vec<String> = record
            .iter()
            .map(|(column, value)| format!("{}={}", column, value))
            .collect();
        println!("  {}", fields.join(" "));
    }

    // The parsed tree is plain serde data, so it can be handed to other formats.
    println!("\nAs JSON:\n{}", serde_json::to_string_pretty(&root)?);

    Ok(())
}
