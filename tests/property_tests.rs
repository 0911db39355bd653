//! Property-based tests over generated documents.
//!
//! These complement the example-driven tests in `format_tests.rs` by checking
//! the casting and structural rules across a wide range of inputs.

use proptest::prelude::*;
use serde_lean::{parse, Number, Value};

fn record_rows() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..20)
}

fn list_document(rows: &[(String, i64)]) -> String {
    let mut doc = String::from("rows:\n  $name|n\n");
    for (name, n) in rows {
        doc.push_str(&format!("  {}|{}\n", name, n));
    }
    doc
}

proptest! {
    #[test]
    fn prop_integer_values_cast_to_integers(n in any::<i64>()) {
        let root = parse(&format!("n: {}", n)).unwrap();
        prop_assert_eq!(root.get("n"), Some(&Value::Number(Number::Integer(n))));
    }

    #[test]
    fn prop_bool_sigils(b in any::<bool>()) {
        let sigil = if b { "+" } else { "-" };
        let root = parse(&format!("flag: {}", sigil)).unwrap();
        prop_assert_eq!(root.get("flag"), Some(&Value::Bool(b)));
    }

    #[test]
    fn prop_escaped_text_is_verbatim(text in "[^`\r\n]{0,24}") {
        let root = parse(&format!("k: `{}`", text)).unwrap();
        prop_assert_eq!(root.get("k"), Some(&Value::String(text)));
    }

    #[test]
    fn prop_rows_become_records(rows in record_rows()) {
        let root = parse(&list_document(&rows)).unwrap();
        let records = root.get("rows").and_then(Value::as_list).unwrap();

        prop_assert_eq!(records.len(), rows.len());
        for (record, (name, n)) in records.iter().zip(&rows) {
            prop_assert_eq!(record.get("name").and_then(Value::as_str), Some(name.as_str()));
            prop_assert_eq!(record.get("n").and_then(Value::as_i64), Some(*n));
        }
    }

    #[test]
    fn prop_blank_lines_do_not_matter(rows in record_rows(), gaps in prop::collection::vec(0usize..3, 24)) {
        let doc = format!("meta:\n  count: {}\n{}", rows.len(), list_document(&rows));
        let mut spaced = String::new();
        for (idx, line) in doc.lines().enumerate() {
            for _ in 0..gaps[idx % gaps.len()] {
                spaced.push_str("   \n");
            }
            spaced.push_str(line);
            spaced.push('\n');
        }

        prop_assert_eq!(parse(&doc).unwrap(), parse(&spaced).unwrap());
    }

    #[test]
    fn prop_parse_is_deterministic(input in "[a-z:|$`+~_ \n0-9.-]{0,64}") {
        let first = parse(&input);
        let second = parse(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_arbitrary_input_never_panics(input in "\\PC{0,128}") {
        let _ = parse(&input);
    }

    #[test]
    fn prop_root_is_object_on_success(input in "[a-z:|$ \n0-9]{0,64}") {
        if let Ok(root) = parse(&input) {
            prop_assert!(root.is_object());
        }
    }
}
