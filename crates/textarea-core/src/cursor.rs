//! Cursor state machine over [`Position`]s.
//!
//! Every transition keeps the cursor inside the document: row in `[0, line_count)`, column in
//! `[0, line_len(row)]`. Movements never fail; at a boundary they do nothing.

use crate::document::Document;
use crate::error::DocumentError;
use crate::position::Position;

/// The single caret of a text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    position: Position,
}

impl Cursor {
    /// A cursor at the start of the document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Place the cursor at `pos`, which must address `document`.
    pub fn move_to(&mut self, document: &Document, pos: Position) -> Result<(), DocumentError> {
        if !document.is_valid(pos) {
            return Err(DocumentError::OutOfRange { position: pos });
        }
        self.position = pos;
        Ok(())
    }

    /// Pull the cursor back inside `document` (after a load, for example).
    pub fn clamp(&mut self, document: &Document) {
        let row = self.position.row.min(document.line_count() - 1);
        let column = self.position.column.min(document.line_len(row));
        self.position = Position::new(row, column);
    }

    /// Whether the cursor is on the first row.
    pub fn at_first_row(&self) -> bool {
        self.position.row == 0
    }

    /// Whether the cursor is on the last row.
    pub fn at_last_row(&self, document: &Document) -> bool {
        self.position.row + 1 >= document.line_count()
    }

    /// Whether the cursor is at column 0.
    pub fn at_line_start(&self) -> bool {
        self.position.column == 0
    }

    /// Whether the cursor rests past the last character of its row.
    pub fn at_line_end(&self, document: &Document) -> bool {
        self.position.column >= document.line_len(self.position.row)
    }

    /// Whether the cursor is at `(0, 0)`.
    pub fn at_document_start(&self) -> bool {
        self.at_first_row() && self.at_line_start()
    }

    /// Whether the cursor is at the very end of the document.
    pub fn at_document_end(&self, document: &Document) -> bool {
        self.at_last_row(document) && self.at_line_end(document)
    }

    /// One character left, wrapping to the end of the previous row.
    pub fn move_left(&mut self, document: &Document) {
        if self.at_document_start() {
            return;
        }
        let Position { row, column } = self.position;
        self.position = if column == 0 {
            Position::new(row - 1, document.line_len(row - 1))
        } else {
            Position::new(row, column - 1)
        };
    }

    /// One character right, wrapping to the start of the next row.
    pub fn move_right(&mut self, document: &Document) {
        if self.at_document_end(document) {
            return;
        }
        let Position { row, column } = self.position;
        self.position = if self.at_line_end(document) {
            Position::new(row + 1, 0)
        } else {
            Position::new(row, column + 1)
        };
    }

    /// One row up, keeping the column where the target row allows it.
    pub fn move_up(&mut self, document: &Document) {
        if self.at_first_row() {
            return;
        }
        let row = self.position.row - 1;
        self.position = Position::new(row, self.position.column.min(document.line_len(row)));
    }

    /// One row down, keeping the column where the target row allows it.
    pub fn move_down(&mut self, document: &Document) {
        if self.at_last_row(document) {
            return;
        }
        let row = self.position.row + 1;
        self.position = Position::new(row, self.position.column.min(document.line_len(row)));
    }

    /// Column 0 of the current row.
    pub fn to_line_start(&mut self) {
        self.position.column = 0;
    }

    /// Past the last character of the current row.
    pub fn to_line_end(&mut self, document: &Document) {
        self.position.column = document.line_len(self.position.row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::from_text("hello\nhi\n\nworld!")
    }

    fn at(document: &Document, row: usize, column: usize) -> Cursor {
        let mut cursor = Cursor::new();
        cursor
            .move_to(document, Position::new(row, column))
            .unwrap();
        cursor
    }

    #[test]
    fn test_left_wraps_to_previous_line_end() {
        let document = doc();
        let mut cursor = at(&document, 1, 0);
        cursor.move_left(&document);
        assert_eq!(cursor.position(), Position::new(0, 5));
    }

    #[test]
    fn test_left_at_document_start_is_noop() {
        let document = doc();
        let mut cursor = Cursor::new();
        cursor.move_left(&document);
        assert_eq!(cursor.position(), Position::zero());
    }

    #[test]
    fn test_right_wraps_to_next_line_start() {
        let document = doc();
        let mut cursor = at(&document, 1, 2);
        cursor.move_right(&document);
        assert_eq!(cursor.position(), Position::new(2, 0));
        cursor.move_right(&document);
        assert_eq!(cursor.position(), Position::new(3, 0));
    }

    #[test]
    fn test_right_at_document_end_is_noop() {
        let document = doc();
        let mut cursor = at(&document, 3, 6);
        cursor.move_right(&document);
        assert_eq!(cursor.position(), Position::new(3, 6));
    }

    #[test]
    fn test_vertical_moves_clamp_column() {
        let document = doc();
        let mut cursor = at(&document, 0, 4);
        cursor.move_down(&document);
        assert_eq!(cursor.position(), Position::new(1, 2));
        cursor.move_down(&document);
        assert_eq!(cursor.position(), Position::new(2, 0));
        cursor.move_down(&document);
        assert_eq!(cursor.position(), Position::new(3, 0));
        cursor.move_down(&document);
        assert_eq!(cursor.position(), Position::new(3, 0));

        cursor.to_line_end(&document);
        cursor.move_up(&document);
        assert_eq!(cursor.position(), Position::new(2, 0));

        let mut cursor = at(&document, 0, 3);
        cursor.move_up(&document);
        assert_eq!(cursor.position(), Position::new(0, 3));
    }

    #[test]
    fn test_left_right_inverse_away_from_boundaries() {
        let document = doc();
        for row in 0..document.line_count() {
            for column in 0..=document.line_len(row) {
                let start = at(&document, row, column);

                let mut cursor = start;
                if !cursor.at_document_start() {
                    cursor.move_left(&document);
                    cursor.move_right(&document);
                    assert_eq!(cursor, start);
                }

                let mut cursor = start;
                if !cursor.at_document_end(&document) {
                    cursor.move_right(&document);
                    cursor.move_left(&document);
                    assert_eq!(cursor, start);
                }
            }
        }
    }

    #[test]
    fn test_move_to_rejects_invalid_positions() {
        let document = doc();
        let mut cursor = Cursor::new();
        assert!(cursor.move_to(&document, Position::new(1, 3)).is_err());
        assert!(cursor.move_to(&document, Position::new(4, 0)).is_err());
        assert_eq!(cursor.position(), Position::zero());
    }

    #[test]
    fn test_clamp_after_shrinking_document() {
        let mut document = doc();
        let mut cursor = at(&document, 3, 6);
        document.load(["ab"]).unwrap();
        cursor.clamp(&document);
        assert_eq!(cursor.position(), Position::new(0, 2));
    }
}
