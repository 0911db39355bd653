//! Tightening the reader with ParseOptions.
//!
//! Run with: cargo run --example strict_options

use serde_lean::{parse, parse_with_options, DuplicateKeys, ParseOptions};
use std::error::Error;

const RAGGED: &str = "\
mode: fast
stream:
  $ticker|price
  NVDA|495.50|extra
  TSLA
mode: safe
";

fn main() -> Result<(), Box<dyn Error>> {
    // Default reading: ragged rows are zipped, the last `mode` wins.
    let lenient = parse(RAGGED)?;
    println!("Lenient mode = {:?}", lenient.get("mode"));

    // Keep the first `mode` instead.
    let options = ParseOptions::new().with_duplicate_keys(DuplicateKeys::FirstWins);
    let first = parse_with_options(RAGGED, &options)?;
    println!("First-wins mode = {:?}", first.get("mode"));

    // Reject ragged rows.
    let options = ParseOptions::new().with_strict_columns(true);
    match parse_with_options(RAGGED, &options) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("Strict columns: {}", e),
    }

    // Everything strict, plus a nesting limit.
    let options = ParseOptions::strict().with_max_depth(8);
    match parse_with_options("mode: fast\nmode: safe", &options) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("Strict duplicates: {} (line {})", e.kind, e.line),
    }

    Ok(())
}
