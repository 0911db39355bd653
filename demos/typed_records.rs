//! Deserializing LEAN documents straight into Rust types.
//!
//! Run with: cargo run --example typed_records

use serde::Deserialize;
use serde_lean::from_str;
use std::error::Error;

#[derive(Debug, Deserialize, PartialEq)]
struct Message {
    from: String,
    text: String,
    read: bool,
}

#[derive(Debug, Deserialize)]
struct Thread {
    id: u64,
    topic: String,
    pinned: Option<String>,
    messages: Vec<Message>,
}

const THREAD: &str = "\
id: 77
topic: release planning
pinned: ~
messages:
  $from|text|read
  ada|ship it on friday|+
  bob|Thanks, `a|b` looks fine|-
  eve|`42`|+
";

fn main() -> Result<(), Box<dyn Error>> {
    let thread: Thread = from_str(THREAD)?;

    println!("Thread #{} ({})", thread.id, thread.topic);
    println!("Pinned: {:?}", thread.pinned);
    for message in &thread.messages {
        let marker = if message.read { " " } else { "*" };
        println!("{} {}: {}", marker, message.from, message.text);
    }

    assert_eq!(thread.messages[1].text, "Thanks, a|b looks fine");
    assert_eq!(thread.messages[2].text, "42");
    println!("\n✓ Escaped fields kept verbatim");

    Ok(())
}
