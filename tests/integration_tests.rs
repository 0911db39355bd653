use serde::Deserialize;
use serde_lean::{
    from_reader, from_slice, from_str, from_str_with_options, parse, parse_with_options,
    DuplicateKeys, Error, ErrorKind, ParseOptions, Value,
};
use std::io::Cursor;

#[derive(Deserialize, Debug, PartialEq)]
struct Quote {
    ticker: String,
    price: f64,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Feed {
    source: String,
    live: bool,
    stream: Vec<Quote>,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Account {
    id: u64,
    owner: Owner,
    tags: Vec<Tag>,
    note: Option<String>,
    nickname: String,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Owner {
    name: String,
    verified: bool,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Tag {
    label: String,
    weight: Option<i32>,
}

const FEED: &str = "\
source: exchange
live: +
stream:
  $ticker|price
  NVDA|495.50
  TSLA|240.00
";

#[test]
fn test_typed_feed() {
    let feed: Feed = from_str(FEED).unwrap();
    assert_eq!(
        feed,
        Feed {
            source: "exchange".to_string(),
            live: true,
            stream: vec![
                Quote {
                    ticker: "NVDA".to_string(),
                    price: 495.5,
                },
                Quote {
                    ticker: "TSLA".to_string(),
                    price: 240.0,
                },
            ],
        }
    );
}

#[test]
fn test_typed_nested_account() {
    let doc = "\
id: 9001
owner:
  name: Grace
  verified: +
tags:
  $label|weight
  ops|3
  `on call`|~
note: ~
nickname: _
";
    let account: Account = from_str(doc).unwrap();
    assert_eq!(account.id, 9001);
    assert_eq!(account.owner.name, "Grace");
    assert!(account.owner.verified);
    assert_eq!(
        account.tags,
        vec![
            Tag {
                label: "ops".to_string(),
                weight: Some(3),
            },
            Tag {
                label: "on call".to_string(),
                weight: None,
            },
        ]
    );
    assert_eq!(account.note, None);
    assert_eq!(account.nickname, "");
}

#[test]
fn test_integer_column_reads_into_float_field() {
    let feed: Feed = from_str("source: x\nlive: -\nstream:\n  $ticker|price\n  AAPL|190").unwrap();
    assert_eq!(feed.stream[0].price, 190.0);
}

#[test]
fn test_missing_column_surfaces_as_missing_field() {
    let err = from_str::<Feed>("source: x\nlive: -\nstream:\n  $ticker|price\n  AAPL").unwrap_err();
    assert!(err.as_parse_error().is_none());
    assert!(err.to_string().contains("price"), "{}", err);
}

#[test]
fn test_from_slice_and_reader_agree_with_from_str() {
    let a: Feed = from_str(FEED).unwrap();
    let b: Feed = from_slice(FEED.as_bytes()).unwrap();
    let c: Feed = from_reader(Cursor::new(FEED.as_bytes())).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_parse_error_wrapped_in_error() {
    let err = from_str::<Feed>("source: x\n  $a|b\n`unclosed").unwrap_err();
    match err {
        Error::Parse(parse_err) => {
            assert_eq!(parse_err.kind, ErrorKind::UnterminatedEscape);
            assert_eq!(parse_err.line, 3);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_strict_columns() {
    let doc = "t:\n  $a|b\n  1|2\n  1";
    assert!(parse(doc).is_ok());

    let options = ParseOptions::new().with_strict_columns(true);
    let err = parse_with_options(doc, &options).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::ColumnCountMismatch {
            expected: 2,
            found: 1
        }
    );
    assert_eq!(err.line, 4);
}

#[test]
fn test_duplicate_policies() {
    let doc = "a: 1\nb:\n  c: 2\na: 3";

    let last = parse(doc).unwrap();
    assert_eq!(last.get("a").and_then(Value::as_i64), Some(3));

    let options = ParseOptions::new().with_duplicate_keys(DuplicateKeys::FirstWins);
    let first = parse_with_options(doc, &options).unwrap();
    assert_eq!(first.get("a").and_then(Value::as_i64), Some(1));

    let options = ParseOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
    let err = parse_with_options(doc, &options).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateKey("a".to_string()));
    assert_eq!(err.line, 4);
}

#[test]
fn test_same_key_in_different_objects_is_not_duplicate() {
    let doc = "a:\n  id: 1\nb:\n  id: 2";
    assert!(parse_with_options(doc, &ParseOptions::strict()).is_ok());
}

#[test]
fn test_duplicate_container_key_rejected() {
    let doc = "a:\n  x: 1\na:\n  y: 2";
    let err = parse_with_options(doc, &ParseOptions::strict()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateKey("a".to_string()));
    assert_eq!(err.line, 3);
}

#[test]
fn test_depth_limit() {
    let doc = "a:\n  b:\n    c:\n      d: 1";
    let options = ParseOptions::new().with_max_depth(2);
    let err = parse_with_options(doc, &options).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DepthLimitExceeded(2));
    assert_eq!(err.line, 3);

    let options = ParseOptions::new().with_max_depth(3);
    assert!(parse_with_options(doc, &options).is_ok());
}

#[test]
fn test_strict_options_accept_clean_document() {
    assert!(from_str_with_options::<Feed>(FEED, &ParseOptions::strict()).is_ok());
}

#[test]
fn test_json_view_of_parsed_tree() {
    let root = parse(FEED).unwrap();
    let json = serde_json::to_value(&root).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "source": "exchange",
            "live": true,
            "stream": [
                {"ticker": "NVDA", "price": 495.5},
                {"ticker": "TSLA", "price": 240.0}
            ]
        })
    );
}

#[test]
fn test_concurrent_parses_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let doc = format!("n: {}\nrows:\n  $v\n  {}\n  {}", i, i, i + 1);
                parse(&doc).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let root = handle.join().unwrap();
        assert_eq!(root.get("n").and_then(Value::as_i64), Some(i as i64));
        let rows = root.get("rows").and_then(Value::as_list).unwrap();
        assert_eq!(rows.len(), 2);
    }
}
