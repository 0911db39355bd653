//! The LEAN line parser.
//!
//! A single pass over the document's lines drives a stack of open containers
//! ("frames"). Each frame remembers the indent of the line that opened it; a
//! line that is not deeper than a frame closes that frame and commits the
//! finished container into its parent.
//!
//! ## Dispatch
//!
//! For every non-blank line, in order:
//!
//! 1. close the frames the line's indent steps out of;
//! 2. `$col|col` is a schema header: the most recently opened key becomes a list;
//! 3. while a list is open, a line with an unescaped `|` (or with no `:`) is a
//!    data row and appends one record;
//! 4. `key: value` inserts a scalar, `key:` opens a container whose kind is
//!    decided by the next line;
//! 5. anything else is an [`ErrorKind::UnparsableLine`].
//!
//! ## Deferred containers
//!
//! `key:` with nothing after it opens a [`Node::Pending`] frame. The next line
//! that lands inside it decides what it is: a key line makes it an object, a
//! schema header makes it a list. A pending frame that closes untouched
//! becomes an empty object.

use crate::error::{ErrorKind, ParseError, ParseResult};
use crate::options::{DuplicateKeys, ParseOptions};
use crate::scalar::{scan_line, split_fields, Field, FIELD_SEPARATOR, SCHEMA_PREFIX};
use crate::{Map, Value};
use log::{debug, trace, warn};

/// One retained (non-blank) line.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    /// 1-based, blank lines included.
    number: usize,
    /// Leading spaces.
    indent: usize,
    /// Trimmed on both sides.
    content: &'a str,
}

impl Line<'_> {
    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(self.number, kind, self.content)
    }
}

/// Records under one schema header.
#[derive(Debug)]
struct ListState {
    columns: Vec<String>,
    records: Vec<Map>,
}

#[derive(Debug)]
enum Node {
    Pending,
    Object(Map),
    List(ListState),
}

impl Node {
    fn into_value(self) -> Value {
        match self {
            Node::Pending => Value::Object(Map::new()),
            Node::Object(map) => Value::Object(map),
            Node::List(list) => Value::List(list.records),
        }
    }
}

/// Where a finished frame goes when it closes.
#[derive(Debug, Clone)]
enum Slot {
    Root,
    Key(String),
    /// A repeated key under [`DuplicateKeys::FirstWins`]; the container is dropped.
    Discard,
}

#[derive(Debug)]
struct Frame {
    /// Object frames close on lines at or above this indent, list frames on
    /// lines strictly above it.
    indent: usize,
    slot: Slot,
    node: Node,
    /// Where the most recent key line went, which a schema header converts.
    /// `Discard` when that key was a repeat ignored under `FirstWins`.
    last_key: Option<Slot>,
}

impl Frame {
    fn root() -> Self {
        Frame {
            indent: 0,
            slot: Slot::Root,
            node: Node::Object(Map::new()),
            last_key: None,
        }
    }

    fn closed_by(&self, indent: usize) -> bool {
        match self.node {
            Node::List(_) => indent < self.indent,
            Node::Pending | Node::Object(_) => indent <= self.indent,
        }
    }

    /// Resolves a pending frame to an object. `None` for lists.
    fn object_mut(&mut self) -> Option<&mut Map> {
        if let Node::Pending = self.node {
            self.node = Node::Object(Map::new());
        }
        match &mut self.node {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }
}

struct Parser<'o> {
    options: &'o ParseOptions,
    /// Never empty; index 0 is the root object, which is never popped.
    stack: Vec<Frame>,
}

impl<'o> Parser<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Parser {
            options,
            stack: vec![Frame::root()],
        }
    }

    fn top_mut(&mut self) -> &mut Frame {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn feed(&mut self, line: Line<'_>) -> ParseResult<()> {
        self.dedent(line.indent);

        if let Some(header) = line.content.strip_prefix(SCHEMA_PREFIX) {
            trace!("line {}: schema header", line.number);
            return self.open_list(line, header);
        }

        let shape = scan_line(line.content).map_err(|kind| line.error(kind))?;
        let row_like = shape.has_field_separator || shape.key_separator.is_none();
        let strict_columns = self.options.strict_columns;
        if row_like {
            if let Some(list) = self.active_list() {
                trace!("line {}: data row", line.number);
                return append_record(list, line, strict_columns);
            }
        }

        match shape.key_separator {
            Some(at) => {
                trace!("line {}: key", line.number);
                self.close_list();
                self.insert_entry(line, at)
            }
            None => Err(line.error(ErrorKind::UnparsableLine)),
        }
    }

    fn dedent(&mut self, indent: usize) {
        while self.stack.len() > 1 && self.top_mut().closed_by(indent) {
            self.pop_frame();
        }
    }

    fn pop_frame(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let value = frame.node.into_value();
        // The parent is always an object: lists never hold open frames.
        let parent = self.top_mut();
        match frame.slot {
            Slot::Root => {}
            Slot::Key(key) => {
                if let Some(map) = parent.object_mut() {
                    map.insert(key.clone(), value);
                }
                parent.last_key = Some(Slot::Key(key));
            }
            Slot::Discard => parent.last_key = Some(Slot::Discard),
        }
    }

    fn active_list(&mut self) -> Option<&mut ListState> {
        match &mut self.top_mut().node {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// A key line or a new header ends the open list, whatever its indent.
    fn close_list(&mut self) {
        if self.stack.len() > 1 && matches!(self.top_mut().node, Node::List(_)) {
            self.pop_frame();
        }
    }

    fn push_frame(&mut self, line: Line<'_>, frame: Frame) -> ParseResult<()> {
        if let Some(limit) = self.options.max_depth {
            // The root sits at depth 0, so the new frame lands at `len`.
            if self.stack.len() > limit {
                return Err(line.error(ErrorKind::DepthLimitExceeded(limit)));
            }
        }
        self.stack.push(frame);
        Ok(())
    }

    fn open_list(&mut self, line: Line<'_>, header: &str) -> ParseResult<()> {
        let columns: Vec<String> = header
            .split(FIELD_SEPARATOR)
            .map(|column| column.trim().to_string())
            .collect();
        let list = ListState {
            columns,
            records: Vec::new(),
        };

        self.close_list();
        let top = self.top_mut();

        if let Node::Pending = top.node {
            // `key:` directly above: the deferred container becomes the list.
            top.node = Node::List(list);
            top.indent = line.indent;
            return Ok(());
        }

        let slot = match top.last_key.clone() {
            Some(Slot::Key(key)) => {
                let map = top
                    .object_mut()
                    .ok_or_else(|| line.error(ErrorKind::OrphanSchema))?;
                match map.get_mut(&key) {
                    // A finished list never takes a second header; its records stay.
                    Some(Value::List(_)) | None => {
                        return Err(line.error(ErrorKind::OrphanSchema));
                    }
                    Some(value) => *value = Value::List(Vec::new()),
                }
                Slot::Key(key)
            }
            Some(Slot::Discard) => Slot::Discard,
            Some(Slot::Root) | None => return Err(line.error(ErrorKind::OrphanSchema)),
        };
        self.push_frame(
            line,
            Frame {
                indent: line.indent,
                slot,
                node: Node::List(list),
                last_key: None,
            },
        )
    }

    fn insert_entry(&mut self, line: Line<'_>, at: usize) -> ParseResult<()> {
        let key = line.content[..at].trim().to_string();
        let raw = line.content[at + 1..].trim();
        let policy = self.options.duplicate_keys;

        let parent = self.top_mut();
        let map = parent
            .object_mut()
            .ok_or_else(|| line.error(ErrorKind::UnparsableLine))?;

        let keep = if map.contains_key(&key) {
            match policy {
                DuplicateKeys::LastWins => true,
                DuplicateKeys::FirstWins => false,
                DuplicateKeys::Reject => {
                    return Err(line.error(ErrorKind::DuplicateKey(key)));
                }
            }
        } else {
            true
        };

        if raw.is_empty() {
            let slot = if keep { Slot::Key(key) } else { Slot::Discard };
            return self.push_frame(
                line,
                Frame {
                    indent: line.indent,
                    slot,
                    node: Node::Pending,
                    last_key: None,
                },
            );
        }

        let value = read_value(raw).map_err(|kind| line.error(kind))?;
        if keep {
            map.insert(key.clone(), value);
            parent.last_key = Some(Slot::Key(key));
        } else {
            parent.last_key = Some(Slot::Discard);
        }
        Ok(())
    }

    fn finish(mut self) -> Value {
        while self.stack.len() > 1 {
            self.pop_frame();
        }
        self.stack
            .pop()
            .map_or_else(|| Value::Object(Map::new()), |root| root.node.into_value())
    }
}

/// The value side of `key: value`: one field, no separator splitting.
fn read_value(raw: &str) -> Result<Value, ErrorKind> {
    let mut fields = split_fields(raw, None)?;
    Ok(fields.pop().map_or(Value::Null, Field::into_value))
}

/// Zips a row against its columns, stopping at the shorter side.
fn append_record(list: &mut ListState, line: Line<'_>, strict_columns: bool) -> ParseResult<()> {
    let fields = split_fields(line.content, Some(FIELD_SEPARATOR)).map_err(|kind| line.error(kind))?;

    if fields.len() != list.columns.len() {
        if strict_columns {
            return Err(line.error(ErrorKind::ColumnCountMismatch {
                expected: list.columns.len(),
                found: fields.len(),
            }));
        }
        warn!(
            "line {}: row has {} fields for {} columns; extra fields dropped, missing columns omitted",
            line.number,
            fields.len(),
            list.columns.len()
        );
    }

    let record: Map = list
        .columns
        .iter()
        .cloned()
        .zip(fields.into_iter().map(Field::into_value))
        .collect();
    list.records.push(record);
    Ok(())
}

/// Parses a whole document into its root object.
pub(crate) fn parse_document(text: &str, options: &ParseOptions) -> ParseResult<Value> {
    debug!("parsing {} bytes", text.len());
    let mut parser = Parser::new(options);
    let mut retained = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim_end();
        let content = trimmed.trim_start();
        if content.is_empty() {
            continue;
        }
        let indent = trimmed.len() - trimmed.trim_start_matches(' ').len();
        parser.feed(Line {
            number: idx + 1,
            indent,
            content,
        })?;
        retained += 1;
    }

    let root = parser.finish();
    debug!(
        "parsed {} lines into {} root keys",
        retained,
        root.as_object().map_or(0, Map::len)
    );
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    fn parse(text: &str) -> ParseResult<Value> {
        parse_document(text, &ParseOptions::default())
    }

    #[test]
    fn test_pending_frame_resolves_to_empty_object() {
        let root = parse("a:\nb: 1").unwrap();
        assert_eq!(root.get("a"), Some(&Value::Object(Map::new())));
        assert_eq!(root.get("b"), Some(&Value::Number(Number::Integer(1))));
    }

    #[test]
    fn test_trailing_pending_frame_is_committed() {
        let root = parse("a:\n  b:").unwrap();
        let a = root.get("a").and_then(Value::as_object).unwrap();
        assert_eq!(a.get("b"), Some(&Value::Object(Map::new())));
    }

    #[test]
    fn test_key_order_follows_first_declaration() {
        let root = parse("z:\n  x: 1\na: 2").unwrap();
        let keys: Vec<_> = root.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_header_converts_last_key_of_parent() {
        let root = parse("a: 1\nb:\n$x|y\n1|2").unwrap();
        let b = root.get("b").and_then(Value::as_list).unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(root.get("a").and_then(Value::as_i64), Some(1));
    }

    #[test]
    fn test_header_replaces_scalar_in_place() {
        let root = parse("a: 1\nb: 2\n  $x\n  9").unwrap();
        let keys: Vec<_> = root.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        let b = root.get("b").and_then(Value::as_list).unwrap();
        assert_eq!(b[0].get("x"), Some(&Value::Number(Number::Integer(9))));
    }

    #[test]
    fn test_second_header_closes_first_list() {
        let root = parse("a:\n  $x\n  1\nb:\n  $y\n  2").unwrap();
        assert_eq!(root.get("a").and_then(Value::as_list).map(<[Map]>::len), Some(1));
        assert_eq!(root.get("b").and_then(Value::as_list).map(<[Map]>::len), Some(1));
    }

    #[test]
    fn test_second_header_under_same_key_keeps_records() {
        let err = parse("a:\n  $x\n  1\n  2\n  $y\n  3").unwrap_err();
        assert_eq!(err.kind, ErrorKind::OrphanSchema);
        assert_eq!(err.line, 5);

        let err = parse("a:\n  $x\n  1\n$y\n3").unwrap_err();
        assert_eq!(err.kind, ErrorKind::OrphanSchema);
        assert_eq!(err.line, 4);
    }

    #[test]
    fn test_row_without_separator_in_single_column_list() {
        let root = parse("names:\n  $name\n  Ada\n  Grace").unwrap();
        let names = root.get("names").and_then(Value::as_list).unwrap();
        assert_eq!(names[1].get("name"), Some(&Value::from("Grace")));
    }

    #[test]
    fn test_first_wins_discards_repeated_container() {
        let options = ParseOptions::new().with_duplicate_keys(DuplicateKeys::FirstWins);
        let root = parse_document("a: 1\na:\n  b: 2", &options).unwrap();
        assert_eq!(root.get("a").and_then(Value::as_i64), Some(1));
    }

    #[test]
    fn test_first_wins_header_after_ignored_scalar() {
        let options = ParseOptions::new().with_duplicate_keys(DuplicateKeys::FirstWins);
        let root = parse_document("a: 1\nb: 2\na: 3\n  $x\n  9\nc: 4", &options).unwrap();
        let keys: Vec<_> = root.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(root.get("a").and_then(Value::as_i64), Some(1));
        assert_eq!(root.get("b").and_then(Value::as_i64), Some(2));
    }

    #[test]
    fn test_first_wins_header_after_ignored_container() {
        let options = ParseOptions::new().with_duplicate_keys(DuplicateKeys::FirstWins);
        let root = parse_document("a: 1\na:\n  b: 2\n$x\n9", &options).unwrap();
        assert_eq!(root.get("a").and_then(Value::as_i64), Some(1));
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let err = parse("\n\na: 1\n\nnot a line").unwrap_err();
        assert_eq!(err.line, 5);
        assert_eq!(err.kind, ErrorKind::UnparsableLine);
        assert_eq!(err.context, "not a line");
    }
}
