use serde_lean::{lean, parse, Map, Number, Value};

#[test]
fn test_lean_macro_null() {
    assert_eq!(lean!(null), Value::Null);
}

#[test]
fn test_lean_macro_booleans() {
    assert_eq!(lean!(true), Value::Bool(true));
    assert_eq!(lean!(false), Value::Bool(false));
}

#[test]
fn test_lean_macro_numbers() {
    assert_eq!(lean!(42), Value::Number(Number::Integer(42)));
    assert_eq!(lean!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(lean!(-123), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_lean_macro_strings() {
    assert_eq!(lean!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(lean!(""), Value::String(String::new()));
}

#[test]
fn test_lean_macro_expressions() {
    let price = 495.5;
    let ticker = String::from("NVDA");
    assert_eq!(lean!(price), Value::Number(Number::Float(495.5)));
    assert_eq!(lean!(ticker), Value::String("NVDA".to_string()));

    let missing: Option<i64> = None;
    assert_eq!(lean!(missing), Value::Null);
}

#[test]
fn test_lean_macro_empty_containers() {
    assert_eq!(lean!({}), Value::Object(Map::new()));
    assert_eq!(lean!([]), Value::List(Vec::new()));
}

#[test]
fn test_lean_macro_object_keeps_order() {
    let value = lean!({"zeta": 1, "alpha": 2, "mid": 3});
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_lean_macro_nested() {
    let value = lean!({
        "account": {
            "id": 7,
            "flags": {"beta": true}
        },
        "orders": [
            {"sku": "A-1", "qty": 2},
            {"sku": "B-2", "qty": null},
        ],
    });

    let account = value.get("account").unwrap();
    assert_eq!(account.get("id").and_then(Value::as_i64), Some(7));
    let orders = value.get("orders").and_then(Value::as_list).unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1].get("qty"), Some(&Value::Null));
}

#[test]
fn test_lean_macro_matches_parsed_document() {
    let parsed = parse(
        "account:\n  id: 7\n  flags:\n    beta: +\norders:\n  $sku|qty\n  A-1|2\n  B-2|~",
    )
    .unwrap();

    assert_eq!(
        parsed,
        lean!({
            "account": {"id": 7, "flags": {"beta": true}},
            "orders": [{"sku": "A-1", "qty": 2}, {"sku": "B-2", "qty": null}]
        })
    );
}
