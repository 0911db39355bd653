//! LEAN Format Reference
//!
//! This module documents the LEAN text format as read by this library.
//!
//! # Overview
//!
//! LEAN is an indentation-based notation for nested key-value data and tabular
//! record lists. It is meant to be produced by programs and language models under
//! a strict contract, so it spends as few tokens as possible on syntax: no braces,
//! no brackets, no quotes, and one-character constants.
//!
//! # Core Syntax
//!
//! ## Objects
//!
//! One `key: value` pair per line. A key followed by nothing opens a nested
//! object whose fields are the deeper-indented lines below it:
//!
//! ```text
//! name: Alice
//! account:
//!   tier: gold
//!   limits:
//!     daily: 500
//! ```
//!
//! **Rules**:
//! - The key is everything before the first `:`, trimmed; keys are never cast
//! - The value is everything after it, trimmed, then cast (see below)
//! - Indentation is counted in spaces; two per level is conventional but any
//!   deeper indent nests and any shallower indent closes
//! - Blank lines are ignored everywhere
//! - A repeated key replaces the earlier value (configurable)
//!
//! ## Primitives
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | True | `+` | `active: +` |
//! | False | `-` | `archived: -` |
//! | Null | `~` | `parent: ~` |
//! | Empty string | `_` | `nickname: _` |
//! | Integer | digits, optional sign | `count: 42` |
//! | Float | digits with one `.` | `price: 19.99` |
//! | String | anything else | `name: Alice` |
//!
//! Exponents, `NaN` and `Infinity` are not numbers in LEAN; they read as strings.
//!
//! # Tabular Lists
//!
//! A `$` header under an empty key turns that key into a list of records. The
//! header names the columns; each following row holds one record's values:
//!
//! ```text
//! stream:
//!   $ticker|price|halted
//!   NVDA|495.50|-
//!   TSLA|240.00|+
//! ```
//!
//! reads as
//!
//! ```text
//! {stream: [{ticker: "NVDA", price: 495.5, halted: false},
//!           {ticker: "TSLA", price: 240.0, halted: true}]}
//! ```
//!
//! **Rules**:
//! - Column names are split on `|` and trimmed; they are not cast or unescaped
//! - Rows sit at the header's indent or deeper
//! - Fields are zipped with columns by position: a short row omits trailing
//!   columns, a long row drops extra fields (strict mode rejects both)
//! - The list ends at the first line shallower than the header, or at any
//!   `key: value` line
//! - A header with no key to attach to is an error, and so is a second header
//!   aimed at a key that already holds a finished list
//!
//! # Escaping
//!
//! Backticks quote text verbatim. Inside a pair the `|` separator does not split
//! and nothing is cast:
//!
//! ```text
//! log:
//!   $user|message
//!   ada|Thanks, `a|b` more
//!   bob|`42`
//! ```
//!
//! gives `message: "Thanks, a|b more"` and `message: "42"` (a string).
//! An opening backtick without a partner on the same line is an error.
//!
//! # Errors
//!
//! Every error aborts the parse and names the 1-based source line:
//!
//! | Kind | Cause |
//! |------|-------|
//! | `OrphanSchema` | `$` header with no preceding key, or aimed at a finished list |
//! | `UnterminatedEscape` | unmatched backtick |
//! | `UnparsableLine` | a line with no `:` outside a list |
//!
//! # Limitations
//!
//! - **Root**: always an object
//! - **Lists**: hold records only, never bare scalars
//! - **Comments**: not supported
//! - **Writing**: this crate reads LEAN; it does not emit it

// This module contains only documentation; no implementation code
