//! The text area: document, cursor, syntax tree and highlights kept in step.
//!
//! Every edit follows the same path:
//!
//! ```text
//! insert_range ─▶ Document ─▶ SyntaxTreeAdapter::rebuild ─▶ HighlightCache (clear + rebuild)
//!                     │                                                  │
//!                     └──────────── cursor ◀── new end position          └─▶ LineRenderer
//! ```

use crate::config::EditorConfig;
use crate::cursor::Cursor;
use crate::document::Document;
use crate::error::EditorError;
use crate::highlight::HighlightCache;
use crate::position::Position;
use crate::render::{LineRenderer, RenderedLine, gutter_width};
use crate::syntax::{LanguageRegistry, SyntaxTreeAdapter, UpdateMode};
use crate::width::{cell_width_at, str_width, visual_x_for_column};
use std::ops::Range;
use std::sync::Arc;
use tracing::debug;

/// Input the host translates key presses and pastes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Type one character.
    Insert(char),
    /// Paste text (may span rows).
    Paste(String),
    /// Insert the configured indent.
    Tab,
    /// Split the row at the cursor.
    Enter,
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Cursor left.
    Left,
    /// Cursor right.
    Right,
    /// Cursor up.
    Up,
    /// Cursor down.
    Down,
    /// Cursor to column 0.
    Home,
    /// Cursor past the end of the row.
    End,
}

/// A single-cursor, syntax-highlighted text area.
pub struct TextEditor<R: LanguageRegistry> {
    document: Document,
    cursor: Cursor,
    syntax: SyntaxTreeAdapter<R>,
    highlights: HighlightCache,
    config: EditorConfig,
    scroll_x: usize,
    scroll_y: usize,
    highlight_window: Option<Range<usize>>,
}

impl<R: LanguageRegistry> TextEditor<R> {
    /// Create an empty editor with no language selected.
    pub fn new(registry: Arc<R>, config: EditorConfig) -> Self {
        let document = Document::new();
        let mut highlights = HighlightCache::new();
        highlights.clear(&document);
        Self {
            document,
            cursor: Cursor::new(),
            syntax: SyntaxTreeAdapter::new(registry),
            highlights,
            config,
            scroll_x: 0,
            scroll_y: 0,
            highlight_window: None,
        }
    }

    /// The document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Cursor position.
    pub fn cursor_position(&self) -> Position {
        self.cursor.position()
    }

    /// The syntax tree adapter.
    pub fn syntax(&self) -> &SyntaxTreeAdapter<R> {
        &self.syntax
    }

    /// The highlight cache.
    pub fn highlights(&self) -> &HighlightCache {
        &self.highlights
    }

    /// Editor configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Horizontal (cells) and vertical (rows) scroll offsets.
    pub fn scroll_offset(&self) -> (usize, usize) {
        (self.scroll_x, self.scroll_y)
    }

    /// Set the scroll offsets.
    pub fn set_scroll_offset(&mut self, scroll_x: usize, scroll_y: usize) {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
    }

    /// Replace the content with `text` and reparse it.
    pub fn load_text(&mut self, text: &str) {
        self.document.load_text(text);
        self.after_load();
    }

    /// Replace the content with `lines` (no line may contain `'\n'`) and reparse it.
    pub fn load_lines<I, S>(&mut self, lines: I) -> Result<(), EditorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document.load(lines)?;
        self.after_load();
        Ok(())
    }

    fn after_load(&mut self) {
        self.cursor.clamp(&self.document);
        self.syntax.rebuild(&self.document, None);
        self.refresh_highlights();
    }

    /// Select the language used for highlighting, or turn highlighting off with `None`.
    ///
    /// An unknown language is an error and leaves the current language in place.
    pub fn set_language(&mut self, language: Option<&str>) -> Result<UpdateMode, EditorError> {
        let mode = self.syntax.set_language(language, &self.document)?;
        self.refresh_highlights();
        Ok(mode)
    }

    /// Currently selected language.
    pub fn language(&self) -> Option<&str> {
        self.syntax.language()
    }

    /// Languages the registry can parse.
    pub fn available_languages(&self) -> Vec<String> {
        self.syntax.registry().languages()
    }

    /// Replace `[start, end)` with `text`, update the tree and highlights, and move the cursor to
    /// the end of the inserted text.
    ///
    /// On error nothing changes.
    pub fn insert_range(
        &mut self,
        start: Position,
        end: Position,
        text: &str,
    ) -> Result<Position, EditorError> {
        let version = self.document.version();
        let new_end = self.document.insert_range(start, end, text)?;

        if self.document.version() != version {
            self.syntax
                .rebuild(&self.document, self.document.last_edit());
            self.refresh_highlights();
        }

        self.cursor.move_to(&self.document, new_end)?;
        Ok(new_end)
    }

    /// Insert `text` at the cursor.
    pub fn insert_text(&mut self, text: &str) -> Result<Position, EditorError> {
        let at = self.cursor.position();
        self.insert_range(at, at, text)
    }

    /// Split the row at the cursor.
    pub fn split_line(&mut self) -> Result<Position, EditorError> {
        self.insert_text("\n")
    }

    /// Delete the character before the cursor, joining with the previous row at column 0.
    pub fn delete_left(&mut self) -> Result<Position, EditorError> {
        let end = self.cursor.position();
        let mut start = self.cursor;
        start.move_left(&self.document);
        self.insert_range(start.position(), end, "")
    }

    /// Delete the character under the cursor, joining with the next row at the end of a row.
    pub fn delete_right(&mut self) -> Result<Position, EditorError> {
        let start = self.cursor.position();
        let mut end = self.cursor;
        end.move_right(&self.document);
        self.insert_range(start, end.position(), "")
    }

    /// Apply a host action.
    pub fn apply(&mut self, action: EditorAction) -> Result<(), EditorError> {
        match action {
            EditorAction::Insert(ch) => {
                let mut buf = [0u8; 4];
                self.insert_text(ch.encode_utf8(&mut buf))?;
            }
            EditorAction::Paste(text) => {
                self.insert_text(&text)?;
            }
            EditorAction::Tab => {
                let indent = self.config.indent.clone();
                self.insert_text(&indent)?;
            }
            EditorAction::Enter => {
                self.split_line()?;
            }
            EditorAction::Backspace => {
                self.delete_left()?;
            }
            EditorAction::Delete => {
                self.delete_right()?;
            }
            EditorAction::Left => self.cursor.move_left(&self.document),
            EditorAction::Right => self.cursor.move_right(&self.document),
            EditorAction::Up => self.cursor.move_up(&self.document),
            EditorAction::Down => self.cursor.move_down(&self.document),
            EditorAction::Home => self.cursor.to_line_start(),
            EditorAction::End => self.cursor.to_line_end(&self.document),
        }
        Ok(())
    }

    /// Move the cursor to `pos`.
    pub fn move_cursor(&mut self, pos: Position) -> Result<(), EditorError> {
        self.cursor.move_to(&self.document, pos)?;
        Ok(())
    }

    /// Restrict highlighting to rows in `window` (`None` = all rows) and repopulate the cache
    /// from the current tree.
    pub fn set_highlight_window(&mut self, window: Option<Range<usize>>) {
        debug!(?window, "highlight window set");
        self.highlight_window = window;
        self.refresh_highlights();
    }

    /// The current highlight window.
    pub fn highlight_window(&self) -> Option<Range<usize>> {
        self.highlight_window.clone()
    }

    fn refresh_highlights(&mut self) {
        self.highlights.clear(&self.document);
        self.highlights.rebuild(
            self.syntax.tree(),
            &self.document,
            self.highlight_window.clone(),
        );
    }

    /// Width of the line-number gutter in cells (0 when line numbers are off).
    pub fn gutter_width(&self) -> usize {
        gutter_width(self.document.line_count(), self.config.show_line_numbers)
    }

    /// Render one document row into `viewport_columns` cells.
    pub fn render_line(&self, row: usize, viewport_columns: usize) -> RenderedLine {
        self.renderer()
            .render(row, viewport_columns, self.gutter_width(), self.scroll_x)
    }

    /// Render `rows` terminal rows starting at the vertical scroll offset.
    pub fn render_viewport(&self, columns: usize, rows: usize) -> Vec<RenderedLine> {
        let renderer = self.renderer();
        let gutter = self.gutter_width();
        (self.scroll_y..self.scroll_y + rows)
            .map(|row| renderer.render(row, columns, gutter, self.scroll_x))
            .collect()
    }

    fn renderer(&self) -> LineRenderer<'_> {
        LineRenderer::new(
            &self.document,
            &self.highlights,
            Some(self.cursor.position()),
            &self.config,
        )
    }

    /// Adjust the scroll offsets so the cursor cell is inside a `columns` × `rows` viewport.
    pub fn scroll_cursor_visible(&mut self, columns: usize, rows: usize) {
        let Position { row, column } = self.cursor.position();

        if rows > 0 {
            if row < self.scroll_y {
                self.scroll_y = row;
            } else if row >= self.scroll_y + rows {
                self.scroll_y = row + 1 - rows;
            }
        }

        let text_width = columns.saturating_sub(self.gutter_width());
        if text_width == 0 {
            return;
        }
        let line = self.document.line(row).unwrap_or_default();
        let tab_width = self.config.tab_width;
        let x = visual_x_for_column(line, column, tab_width);
        let w = line
            .chars()
            .nth(column)
            .map_or(1, |ch| cell_width_at(ch, x, tab_width));

        if x < self.scroll_x {
            self.scroll_x = x;
        } else if x + w > self.scroll_x + text_width {
            self.scroll_x = (x + w).saturating_sub(text_width);
        }
    }

    /// Scrollable size: the widest row in cells plus one for the cursor cell, and the row count.
    pub fn virtual_size(&self) -> (usize, usize) {
        let widest = self
            .document
            .lines()
            .iter()
            .map(|line| str_width(line, self.config.tab_width))
            .max()
            .unwrap_or(0);
        (widest + 1, self.document.line_count())
    }
}
