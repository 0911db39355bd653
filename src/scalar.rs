//! Scalar casting and backtick-aware field splitting.
//!
//! Every value token (the right side of `key: value`, or one field of a data
//! row) goes through [`cast`]: sigils first, then numbers, then strings. Keys
//! and schema column names are never cast.
//!
//! | Token | Value |
//! |-------|-------|
//! | `+` | `Bool(true)` |
//! | `-` | `Bool(false)` |
//! | `~` | `Null` |
//! | `_` | `String("")` |
//! | `42`, `-7`, `+3` | `Number::Integer` |
//! | `3.5`, `.5`, `-2.` | `Number::Float` |
//! | anything else | `String` |
//!
//! Backticks mark verbatim content. Inside a backtick pair the field
//! separator does not split and nothing is cast: `` `42` `` stays the string
//! `"42"`.

use crate::error::ErrorKind;
use crate::{Number, Value};

pub const KEY_SEPARATOR: char = ':';
pub const FIELD_SEPARATOR: char = '|';
pub const SCHEMA_PREFIX: char = '$';
pub const ESCAPE: char = '`';

pub const TRUE_SIGIL: &str = "+";
pub const FALSE_SIGIL: &str = "-";
pub const NULL_SIGIL: &str = "~";
pub const EMPTY_SIGIL: &str = "_";

/// Casts a single trimmed token to a value.
///
/// # Examples
///
/// ```rust
/// use serde_lean::{cast, Number, Value};
///
/// assert_eq!(cast("+"), Value::Bool(true));
/// assert_eq!(cast("~"), Value::Null);
/// assert_eq!(cast("_"), Value::String(String::new()));
/// assert_eq!(cast("42"), Value::Number(Number::Integer(42)));
/// assert_eq!(cast("3.5"), Value::Number(Number::Float(3.5)));
/// assert_eq!(cast("NVDA"), Value::from("NVDA"));
/// assert_eq!(cast("`42`"), Value::from("42"));
/// ```
#[must_use]
pub fn cast(token: &str) -> Value {
    match token {
        TRUE_SIGIL => Value::Bool(true),
        FALSE_SIGIL => Value::Bool(false),
        NULL_SIGIL => Value::Null,
        EMPTY_SIGIL => Value::String(String::new()),
        _ => match parse_number(token) {
            Some(number) => Value::Number(number),
            None => Value::String(unwrap_escape(token).to_string()),
        },
    }
}

/// Sign, digits and at most one decimal point, with at least one digit.
fn parse_number(token: &str) -> Option<Number> {
    let body = token
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(token);

    let mut digits = 0usize;
    let mut points = 0usize;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }

    if points == 0 {
        // Out-of-range integers degrade to floats rather than strings.
        token
            .parse::<i64>()
            .map(Number::Integer)
            .or_else(|_| token.parse::<f64>().map(Number::Float))
            .ok()
    } else {
        token.parse::<f64>().map(Number::Float).ok()
    }
}

fn unwrap_escape(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with(ESCAPE) && token.ends_with(ESCAPE) {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

/// One field of a row or value, with escape delimiters already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Field {
    pub text: String,
    /// Any part of the field was inside backticks.
    pub escaped: bool,
}

impl Field {
    pub fn into_value(self) -> Value {
        if self.escaped {
            Value::String(self.text)
        } else {
            cast(&self.text)
        }
    }

    /// Unescaped text at either edge is trimmed, escaped text never is.
    fn from_pieces(mut pieces: Vec<Piece>) -> Field {
        if let Some(first) = pieces.first_mut() {
            if !first.escaped {
                first.text = first.text.trim_start().to_string();
            }
        }
        if let Some(last) = pieces.last_mut() {
            if !last.escaped {
                last.text = last.text.trim_end().to_string();
            }
        }
        Field {
            escaped: pieces.iter().any(|p| p.escaped),
            text: pieces.into_iter().map(|p| p.text).collect(),
        }
    }
}

struct Piece {
    text: String,
    escaped: bool,
}

/// Splits `text` on `separator` outside backtick pairs.
///
/// With no separator the whole text is a single field, which is how the value
/// side of a `key: value` line is read.
pub(crate) fn split_fields(text: &str, separator: Option<char>) -> Result<Vec<Field>, ErrorKind> {
    let mut fields = Vec::new();
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut in_escape = false;

    for ch in text.chars() {
        if ch == ESCAPE {
            pieces.push(Piece {
                text: std::mem::take(&mut current),
                escaped: in_escape,
            });
            in_escape = !in_escape;
        } else if !in_escape && Some(ch) == separator {
            pieces.push(Piece {
                text: std::mem::take(&mut current),
                escaped: false,
            });
            fields.push(Field::from_pieces(std::mem::take(&mut pieces)));
        } else {
            current.push(ch);
        }
    }

    if in_escape {
        return Err(ErrorKind::UnterminatedEscape);
    }
    pieces.push(Piece {
        text: current,
        escaped: false,
    });
    fields.push(Field::from_pieces(pieces));
    Ok(fields)
}

/// Where the structural characters of a line sit, ignoring escaped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct LineShape {
    /// Byte offset of the first unescaped `:`.
    pub key_separator: Option<usize>,
    pub has_field_separator: bool,
}

pub(crate) fn scan_line(text: &str) -> Result<LineShape, ErrorKind> {
    let mut shape = LineShape::default();
    let mut in_escape = false;

    for (idx, ch) in text.char_indices() {
        match ch {
            ESCAPE => in_escape = !in_escape,
            KEY_SEPARATOR if !in_escape && shape.key_separator.is_none() => {
                shape.key_separator = Some(idx);
            }
            FIELD_SEPARATOR if !in_escape => shape.has_field_separator = true,
            _ => {}
        }
    }

    if in_escape {
        Err(ErrorKind::UnterminatedEscape)
    } else {
        Ok(shape)
    }
}
