//! Dynamic value representation for LEAN data.
//!
//! [`Value`] is the tree produced by [`parse`](crate::parse). Its shape mirrors
//! what the format can express:
//!
//! - scalars: null, booleans, numbers ([`Number`]) and strings
//! - [`Value::Object`]: an insertion-ordered [`Map`]
//! - [`Value::List`]: records produced by a schema header, each one an object
//!
//! A list can only hold objects, so `List` carries `Vec<Map>` rather than
//! arbitrary values.
//!
//! ## Examples
//!
//! ```rust
//! use serde_lean::{parse, Value};
//!
//! let root = parse("name: Alice\nactive: +").unwrap();
//!
//! assert_eq!(root.get("name").and_then(Value::as_str), Some("Alice"));
//! assert_eq!(root.get("active").and_then(Value::as_bool), Some(true));
//! ```

use crate::scalar::{cast, ESCAPE, FIELD_SEPARATOR, KEY_SEPARATOR, SCHEMA_PREFIX};
use crate::Map;
use serde::{Serialize, Serializer};
use std::fmt;

/// A parsed LEAN value.
///
/// # Examples
///
/// ```rust
/// use serde_lean::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Object(Map),
    List(Vec<Map>),
}

/// A numeric scalar: integers without a decimal point, floats with one.
///
/// # Examples
///
/// ```rust
/// use serde_lean::Number;
///
/// assert!(Number::Integer(42).is_integer());
/// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
/// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it has no fractional part and fits.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            // Keep the decimal point so the token reads back as a float.
            Number::Float(fl) if fl.is_finite() && fl.fract() == 0.0 => write!(f, "{:.1}", fl),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lean::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Map]> {
        match self {
            Value::List(records) => Some(records),
            _ => None,
        }
    }

    /// Looks up a key when the value is an object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lean::parse;
    ///
    /// let root = parse("a:\n  b: 1").unwrap();
    /// let b = root.get("a").and_then(|a| a.get("b"));
    /// assert_eq!(b.and_then(|v| v.as_i64()), Some(1));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// A short name for the variant, used in type mismatch messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(Number::Integer(_)) => "integer",
            Value::Number(Number::Float(_)) => "float",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::List(_) => "list",
        }
    }
}

/// Scalars print in LEAN notation; containers print a summary.
///
/// A string that would read back as something else is wrapped in backticks.
/// Text that itself contains a backtick cannot be escaped and prints bare.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("~"),
            Value::Bool(true) => f.write_str("+"),
            Value::Bool(false) => f.write_str("-"),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) if s.is_empty() => f.write_str("_"),
            Value::String(s) if needs_escape(s) => write!(f, "`{}`", s),
            Value::String(s) => f.write_str(s),
            Value::Object(obj) => write!(f, "{{object; {} keys}}", obj.len()),
            Value::List(records) => write!(f, "[list; {} records]", records.len()),
        }
    }
}

fn needs_escape(text: &str) -> bool {
    if text.contains(ESCAPE) {
        return false;
    }
    text.contains(|c: char| c == KEY_SEPARATOR || c == FIELD_SEPARATOR)
        || text.starts_with(SCHEMA_PREFIX)
        || text.trim() != text
        || cast(text).as_str() != Some(text)
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Object(obj) => serialize_map(obj, serializer),
            Value::List(records) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(records.len()))?;
                for record in records {
                    seq.serialize_element(&MapRef(record))?;
                }
                seq.end()
            }
        }
    }
}

struct MapRef<'a>(&'a Map);

impl Serialize for MapRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_map(self.0, serializer)
    }
}

fn serialize_map<S>(map: &Map, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeMap;
    let mut out = serializer.serialize_map(Some(map.len()))?;
    for (k, v) in map {
        out.serialize_entry(k, v)?;
    }
    out.end()
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                crate::Error::custom(format!("cannot convert float {} to i64", n))
            }),
            other => Err(crate::Error::type_mismatch("integer", other.kind_name())),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(crate::Error::type_mismatch("number", other.kind_name())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(crate::Error::type_mismatch("bool", other.kind_name())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("string", other.kind_name())),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl From<Vec<Map>> for Value {
    fn from(value: Vec<Map>) -> Self {
        Value::List(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
