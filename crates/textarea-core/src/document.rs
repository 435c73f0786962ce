//! Line-oriented text storage.
//!
//! The document is an owned, exclusively mutated vector of rows. Line terminators are not
//! stored: row boundaries *are* the newlines. There is always at least one row.
//!
//! All mutation goes through [`Document::insert_range`], which validates its input completely
//! before touching any row, so a rejected edit leaves the document exactly as it was.

use crate::error::DocumentError;
use crate::position::{Position, Range};
use crate::syntax::{InputEdit, Point, TextInput};
use crate::text::{byte_index, char_column, char_len, split_lines_preserve_trailing};
use std::borrow::Cow;
use tracing::debug;

/// Structured record of the last successful edit.
///
/// Positions are in chars, the embedded [`InputEdit`] is in bytes/[`Point`]s for parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEdit {
    /// Start of the replaced range.
    pub start: Position,
    /// End of the replaced range in the pre-edit document.
    pub old_end: Position,
    /// End of the inserted text in the post-edit document.
    pub new_end: Position,
    /// Exact text that was removed (rows joined with `'\n'`).
    pub deleted_text: String,
    /// Exact text that was inserted (`"\r\n"` normalized to `'\n'`).
    pub inserted_text: String,
    /// Byte-level description of the same edit.
    pub input_edit: InputEdit,
    /// Content version produced by this edit.
    pub version: u64,
}

impl DocumentEdit {
    /// The replaced range, in pre-edit coordinates.
    pub fn old_range(&self) -> Range {
        Range::new(self.start, self.old_end)
    }

    /// The inserted text's range, in post-edit coordinates.
    pub fn new_range(&self) -> Range {
        Range::new(self.start, self.new_end)
    }
}

/// The authoritative text of an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    version: u64,
    last_edit: Option<DocumentEdit>,
}

impl Document {
    /// Create an empty document (a single empty row).
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            version: 0,
            last_edit: None,
        }
    }

    /// Create a document from text, splitting rows on `'\n'`.
    pub fn from_text(text: &str) -> Self {
        let mut document = Self::new();
        document.lines = split_lines_preserve_trailing(text);
        document
    }

    /// Replace all content with `lines`.
    ///
    /// An empty sequence becomes a single empty row. A row containing `'\n'` cannot be
    /// represented and is rejected with [`DocumentError::InvalidContent`].
    pub fn load<I, S>(&mut self, lines: I) -> Result<(), DocumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if let Some(row) = lines.iter().position(|line| line.contains('\n')) {
            return Err(DocumentError::InvalidContent(format!(
                "line {row} contains a line terminator"
            )));
        }
        if lines.is_empty() {
            lines.push(String::new());
        }

        self.lines = lines;
        self.version += 1;
        self.last_edit = None;
        debug!(rows = self.lines.len(), version = self.version, "document loaded");
        Ok(())
    }

    /// Replace all content with `text`, splitting rows on `'\n'` (a trailing `'\r'` is dropped).
    pub fn load_text(&mut self, text: &str) {
        self.lines = split_lines_preserve_trailing(text);
        self.version += 1;
        self.last_edit = None;
        debug!(rows = self.lines.len(), version = self.version, "document loaded");
    }

    /// Number of rows (always at least 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of a row, without terminator.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Length of a row in chars (0 for rows outside the document).
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|line| char_len(line)).unwrap_or(0)
    }

    /// Borrow all rows.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Full text, rows joined with `'\n'`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Content version, bumped by every effective edit or load.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The last edit, if the last mutation was an edit (a load clears it).
    pub fn last_edit(&self) -> Option<&DocumentEdit> {
        self.last_edit.as_ref()
    }

    /// Position just past the last character of the document.
    pub fn end_position(&self) -> Position {
        let row = self.lines.len() - 1;
        Position::new(row, self.line_len(row))
    }

    /// Whether `pos` addresses the document (`column == line_len` is valid).
    pub fn is_valid(&self, pos: Position) -> bool {
        pos.row < self.lines.len() && pos.column <= self.line_len(pos.row)
    }

    /// Byte offset of `pos` in the `'\n'`-joined text. `pos` is clamped to the document.
    pub fn byte_offset(&self, pos: Position) -> usize {
        let row = pos.row.min(self.lines.len() - 1);
        let before: usize = self.lines[..row].iter().map(|line| line.len() + 1).sum();
        before + byte_index(&self.lines[row], pos.column)
    }

    /// Parser point (row, byte column) for `pos`.
    pub fn point_for(&self, pos: Position) -> Point {
        let column = self
            .lines
            .get(pos.row)
            .map(|line| byte_index(line, pos.column))
            .unwrap_or(0);
        Point::new(pos.row, column)
    }

    /// Char column for a byte column within `row` (clamped to the row).
    pub fn column_for_byte(&self, row: usize, byte: usize) -> usize {
        self.lines
            .get(row)
            .map(|line| char_column(line, byte))
            .unwrap_or(0)
    }

    fn check_position(&self, pos: Position) -> Result<(), DocumentError> {
        if self.is_valid(pos) {
            Ok(())
        } else {
            Err(DocumentError::OutOfRange { position: pos })
        }
    }

    fn check_range(&self, start: Position, end: Position) -> Result<(), DocumentError> {
        self.check_position(start)?;
        self.check_position(end)?;
        if start > end {
            return Err(DocumentError::UnorderedRange { start, end });
        }
        Ok(())
    }

    /// Read the text in `[start, end)`, rows joined with `'\n'`.
    pub fn text_range(&self, start: Position, end: Position) -> Result<String, DocumentError> {
        self.check_range(start, end)?;
        Ok(self.text_range_unchecked(start, end))
    }

    fn text_range_unchecked(&self, start: Position, end: Position) -> String {
        let first = &self.lines[start.row];
        let start_byte = byte_index(first, start.column);
        if start.row == end.row {
            return first[start_byte..byte_index(first, end.column)].to_string();
        }

        let mut out = String::from(&first[start_byte..]);
        for line in &self.lines[start.row + 1..end.row] {
            out.push('\n');
            out.push_str(line);
        }
        let last = &self.lines[end.row];
        out.push('\n');
        out.push_str(&last[..byte_index(last, end.column)]);
        out
    }

    /// Replace `[start, end)` with `text` and return the position just after the inserted text.
    ///
    /// `text` may contain newlines (`"\r\n"` counts as one). The first inserted segment joins
    /// the retained prefix of `start.row`, the last one joins the retained suffix of `end.row`,
    /// and the segments in between become rows of their own.
    ///
    /// Both positions must be valid in the current document and ordered; otherwise the edit is
    /// rejected and nothing changes. Replacing an empty range with empty text is a no-op that
    /// does not bump the version.
    pub fn insert_range(
        &mut self,
        start: Position,
        end: Position,
        text: &str,
    ) -> Result<Position, DocumentError> {
        self.check_range(start, end)?;
        if start == end && text.is_empty() {
            return Ok(start);
        }

        let text: Cow<'_, str> = if text.contains("\r\n") {
            Cow::Owned(text.replace("\r\n", "\n"))
        } else {
            Cow::Borrowed(text)
        };

        let deleted_text = self.text_range_unchecked(start, end);
        let start_byte = self.byte_offset(start);
        let old_end_byte = self.byte_offset(end);
        let start_point = self.point_for(start);
        let old_end_point = self.point_for(end);

        let start_line = &self.lines[start.row];
        let end_line = &self.lines[end.row];
        let mut current = start_line[..byte_index(start_line, start.column)].to_string();
        let suffix = end_line[byte_index(end_line, end.column)..].to_string();

        let mut segments = text.split('\n');
        current.push_str(segments.next().unwrap_or_default());
        let mut rows = Vec::new();
        for segment in segments {
            rows.push(std::mem::replace(&mut current, segment.to_string()));
        }

        let new_end = Position::new(start.row + rows.len(), char_len(&current));
        let new_end_point = if rows.is_empty() {
            Point::new(start_point.row, start_point.column + text.len())
        } else {
            Point::new(new_end.row, current.len())
        };
        current.push_str(&suffix);
        rows.push(current);

        self.lines.splice(start.row..=end.row, rows);
        self.version += 1;

        debug!(
            %start,
            %end,
            %new_end,
            rows = self.lines.len(),
            version = self.version,
            "range edit applied"
        );

        self.last_edit = Some(DocumentEdit {
            start,
            old_end: end,
            new_end,
            deleted_text,
            input_edit: InputEdit {
                start_byte,
                old_end_byte,
                new_end_byte: start_byte + text.len(),
                start_point,
                old_end_point,
                new_end_point,
            },
            inserted_text: text.into_owned(),
            version: self.version,
        });

        Ok(new_end)
    }

    /// Delete `[start, end)`. Returns `start`.
    pub fn delete_range(
        &mut self,
        start: Position,
        end: Position,
    ) -> Result<Position, DocumentError> {
        self.insert_range(start, end, "")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput for Document {
    /// Remaining bytes of `point.row` from `point.column`, then `"\n"` between rows, then the
    /// empty end-of-input sentinel.
    fn read(&self, _byte_offset: usize, point: Point) -> &[u8] {
        let Some(line) = self.lines.get(point.row) else {
            return &[];
        };
        let bytes = line.as_bytes();
        if point.column < bytes.len() {
            &bytes[point.column..]
        } else if point.column == bytes.len() && point.row + 1 < self.lines.len() {
            b"\n"
        } else {
            &[]
        }
    }
}
