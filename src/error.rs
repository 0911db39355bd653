//! Error types for LEAN parsing and deserialization.
//!
//! Parsing is all-or-nothing: the first structural violation aborts the parse
//! and is reported as a [`ParseError`] carrying the 1-based line number, the
//! [`ErrorKind`] and the offending line text. No partial tree is ever returned.
//!
//! ## Error Categories
//!
//! - **Orphan schema**: a `$` header with no preceding key to attach the list to
//! - **Unterminated escape**: a backtick opened but not closed on the same line
//! - **Unparsable line**: a line matching none of the recognized shapes
//! - **Strict-mode violations**: column-count mismatches, duplicate keys and
//!   nesting limits, reported only when enabled in [`ParseOptions`](crate::ParseOptions)
//!
//! Typed deserialization through [`from_str`](crate::from_str) wraps parse
//! failures in the crate-level [`Error`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_lean::{parse, ErrorKind};
//!
//! let err = parse("$ticker|price\nNVDA|495.50").unwrap_err();
//! assert_eq!(err.line, 1);
//! assert_eq!(err.kind, ErrorKind::OrphanSchema);
//! ```

use std::fmt;
use thiserror::Error;

/// The structural reason a parse failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Schema header with no preceding key in its parent.
    #[error("schema header has no preceding key")]
    OrphanSchema,

    /// Backtick opened but not closed within the line.
    #[error("unterminated backtick escape")]
    UnterminatedEscape,

    /// Line matches none of the recognized shapes.
    #[error("unparsable line")]
    UnparsableLine,

    /// Data row field count differs from its schema header (strict columns only).
    #[error("expected {expected} fields, found {found}")]
    ColumnCountMismatch { expected: usize, found: usize },

    /// Key repeated within one object (duplicate policy `Reject` only).
    #[error("duplicate key `{0}`")]
    DuplicateKey(String),

    /// Container nesting deeper than the configured limit.
    #[error("nesting exceeds the limit of {0}")]
    DepthLimitExceeded(usize),
}

/// A fatal parse failure tied to a source line.
///
/// # Examples
///
/// ```rust
/// use serde_lean::{ErrorKind, ParseError};
///
/// let err = ParseError::new(3, ErrorKind::UnparsableLine, "just words");
/// assert_eq!(err.to_string(), "unparsable line at line 3: just words");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}: {context}")]
pub struct ParseError {
    /// 1-based physical line number, blank lines included.
    pub line: usize,
    pub kind: ErrorKind,
    /// The offending line, trimmed.
    pub context: String,
}

impl ParseError {
    pub fn new(line: usize, kind: ErrorKind, context: &str) -> Self {
        ParseError {
            line,
            kind,
            context: context.to_string(),
        }
    }
}

/// Errors produced by the typed entry points ([`from_str`](crate::from_str) and friends).
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The document itself is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A parsed value did not fit the requested Rust type.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lean::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for read failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// The parse error underneath, if this failure came from the document.
    #[must_use]
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Result alias for the untyped parse entry points.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
