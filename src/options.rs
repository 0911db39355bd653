//! Configuration options for LEAN parsing.
//!
//! The defaults reproduce the format's lenient reading rules. Stricter checks
//! are opt-in:
//!
//! - [`ParseOptions`]: main configuration struct
//! - [`DuplicateKeys`]: what to do when an object repeats a key
//!
//! ## Examples
//!
//! ```rust
//! use serde_lean::{parse_with_options, DuplicateKeys, ErrorKind, ParseOptions};
//!
//! let doc = "stream:\n  $ticker|price\n  NVDA|495.50|extra";
//!
//! // Lenient by default: the extra field is dropped.
//! assert!(parse_with_options(doc, &ParseOptions::new()).is_ok());
//!
//! // Strict columns turn the mismatch into an error.
//! let options = ParseOptions::new().with_strict_columns(true);
//! let err = parse_with_options(doc, &options).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::ColumnCountMismatch { expected: 2, found: 3 });
//! ```

/// Policy for a key that appears twice in the same object.
///
/// # Examples
///
/// ```rust
/// use serde_lean::{parse_with_options, DuplicateKeys, ParseOptions};
///
/// let doc = "mode: fast\nmode: safe";
///
/// let last = parse_with_options(doc, &ParseOptions::new()).unwrap();
/// assert_eq!(last.get("mode").and_then(|v| v.as_str()), Some("safe"));
///
/// let options = ParseOptions::new().with_duplicate_keys(DuplicateKeys::FirstWins);
/// let first = parse_with_options(doc, &options).unwrap();
/// assert_eq!(first.get("mode").and_then(|v| v.as_str()), Some("fast"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// The later value replaces the earlier one; the key keeps its first position.
    #[default]
    LastWins,
    /// The earlier value is kept and the later one ignored.
    FirstWins,
    /// The parse fails with [`ErrorKind::DuplicateKey`](crate::ErrorKind::DuplicateKey).
    Reject,
}

/// Configuration options for LEAN parsing.
///
/// # Examples
///
/// ```rust
/// use serde_lean::{DuplicateKeys, ParseOptions};
///
/// // Default lenient options
/// let options = ParseOptions::new();
/// assert!(!options.strict_columns);
///
/// // Everything strict
/// let options = ParseOptions::strict();
/// assert_eq!(options.duplicate_keys, DuplicateKeys::Reject);
///
/// // Custom configuration
/// let options = ParseOptions::new()
///     .with_strict_columns(true)
///     .with_max_depth(16);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Require every data row to have exactly as many fields as its header.
    pub strict_columns: bool,
    pub duplicate_keys: DuplicateKeys,
    /// Maximum number of nested containers below the root.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    /// Creates default options (lenient columns, last-write-wins, no depth limit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject column mismatches and duplicate keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lean::ParseOptions;
    ///
    /// let options = ParseOptions::strict();
    /// assert!(options.strict_columns);
    /// assert_eq!(options.max_depth, None);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            strict_columns: true,
            duplicate_keys: DuplicateKeys::Reject,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_strict_columns(mut self, strict: bool) -> Self {
        self.strict_columns = strict;
        self
    }

    #[must_use]
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Sets the nesting limit. The root object is depth 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lean::{parse_with_options, ErrorKind, ParseOptions};
    ///
    /// let options = ParseOptions::new().with_max_depth(1);
    /// assert!(parse_with_options("a:\n  b: 1", &options).is_ok());
    ///
    /// let err = parse_with_options("a:\n  b:\n    c: 1", &options).unwrap_err();
    /// assert_eq!(err.kind, ErrorKind::DepthLimitExceeded(1));
    /// assert_eq!(err.line, 2);
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
