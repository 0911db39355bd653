//! # serde_lean
//!
//! A deserializer for LEAN, a compact indentation-based notation for nested
//! key-value data and tabular record lists.
//!
//! ## What is LEAN?
//!
//! LEAN is a line format designed to be cheap for Large Language Models to read
//! and write. Nesting is carried by indentation, repeated records collapse into a
//! header plus pipe-separated rows, and booleans, null and the empty string are
//! single characters.
//!
//! ## Key Features
//!
//! - **Single Pass**: One walk over the lines with an explicit indentation stack
//! - **Tabular Lists**: `$col|col` headers followed by `a|b` rows
//! - **Strict Errors**: Structural violations fail the whole parse with a line number
//! - **Serde Compatible**: Read any `#[derive(Deserialize)]` type from a document
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_lean::{parse, Value};
//!
//! let doc = "\
//! account:
//!   id: 42
//!   active: +
//! stream:
//!   $ticker|price
//!   NVDA|495.50
//!   TSLA|240.00
//! ";
//!
//! let root = parse(doc).unwrap();
//! let account = root.get("account").unwrap();
//! assert_eq!(account.get("id").and_then(Value::as_i64), Some(42));
//!
//! let stream = root.get("stream").and_then(Value::as_list).unwrap();
//! assert_eq!(stream.len(), 2);
//! assert_eq!(stream[1].get("ticker").and_then(Value::as_str), Some("TSLA"));
//! ```
//!
//! ### Typed Records
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_lean::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Product {
//!     sku: String,
//!     price: f64,
//!     in_stock: bool,
//! }
//!
//! #[derive(Deserialize)]
//! struct Catalog {
//!     products: Vec<Product>,
//! }
//!
//! let catalog: Catalog = from_str("products:\n  $sku|price|in_stock\n  W-1|9.99|+").unwrap();
//! assert_eq!(catalog.products[0].sku, "W-1");
//! assert!(catalog.products[0].in_stock);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) in the input size; each line is scanned once
//! - **State**: Confined to one call; parsing distinct inputs on many threads
//!   needs no synchronization
//!
//! ## Logging
//!
//! The parser emits through the [`log`] facade: `debug` for a per-document
//! summary, `trace` per line, and `warn` when a row's field count disagrees
//! with its header in lenient mode. No logger is installed by this crate.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the full grammar.

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
mod parser;
pub mod scalar;
pub mod value;

pub use error::{Error, ErrorKind, ParseError, ParseResult, Result};
pub use map::Map;
pub use options::{DuplicateKeys, ParseOptions};
pub use scalar::cast;
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use std::io;

/// Parses a LEAN document into its root object.
///
/// # Examples
///
/// ```rust
/// use serde_lean::{lean, parse};
///
/// let root = parse("a:\n  b:1\nc:2").unwrap();
/// assert_eq!(root, lean!({"a": {"b": 1}, "c": 2}));
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first offending line when the document
/// is structurally malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> ParseResult<Value> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parses a LEAN document with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_lean::{parse_with_options, ErrorKind, ParseOptions};
///
/// let err = parse_with_options("a: 1\na: 2", &ParseOptions::strict()).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::DuplicateKey("a".to_string()));
/// assert_eq!(err.line, 2);
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed documents and for any check enabled
/// in `options` that fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(text: &str, options: &ParseOptions) -> ParseResult<Value> {
    parser::parse_document(text, options)
}

/// Deserializes an instance of type `T` from a parsed [`Value`].
///
/// # Errors
///
/// Returns an error if the value does not fit `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

/// Deserializes an instance of type `T` from LEAN text.
///
/// # Examples
///
/// ```rust
/// use serde_lean::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if the text is not valid LEAN, or a type error if
/// the parsed document cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &ParseOptions::default())
}

/// Deserializes an instance of type `T` from LEAN text with custom options.
///
/// # Errors
///
/// See [`from_str`] and [`parse_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &ParseOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let value = parse_with_options(s, options)?;
    from_value(value)
}

/// Deserializes an instance of type `T` from bytes of LEAN text.
///
/// # Examples
///
/// ```rust
/// use serde_lean::from_slice;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_slice(b"x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid LEAN, or
/// cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserializes an instance of type `T` from an I/O stream of LEAN.
///
/// The whole stream is read before parsing starts.
///
/// # Examples
///
/// ```rust
/// use serde_lean::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x: 1\ny: 2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid LEAN, or the
/// data cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}
