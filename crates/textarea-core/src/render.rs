//! Line renderer: one document row → styled segments for a terminal row.
//!
//! Rendering works on cells: every character of the row (plus one trailing cell for the cursor to
//! rest on) gets a layered [`Style`], the row is cropped horizontally in terminal cells, and runs
//! of equally-styled cells are merged into [`StyledSegment`]s.

use crate::config::EditorConfig;
use crate::document::Document;
use crate::highlight::HighlightCache;
use crate::position::Position;
use crate::style::Style;
use crate::width::{cell_width_at, char_width};

/// A run of text drawn with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    /// Text of the run (tabs already expanded).
    pub text: String,
    /// Style of the run.
    pub style: Style,
}

impl StyledSegment {
    /// Create a segment.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A rendered terminal row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedLine {
    /// Segments in left-to-right order; adjacent segments never share a style.
    pub segments: Vec<StyledSegment>,
}

impl RenderedLine {
    /// Concatenated text of all segments.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Width of the row in terminal cells.
    pub fn cell_width(&self) -> usize {
        self.segments
            .iter()
            .flat_map(|s| s.text.chars())
            .map(char_width)
            .sum()
    }

    fn push(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.segments.push(StyledSegment::new(text, style)),
        }
    }

    fn push_spaces(&mut self, count: usize, style: Style) {
        if count > 0 {
            self.push(&" ".repeat(count), style);
        }
    }
}

/// Width of the line-number gutter for a document of `line_count` rows.
///
/// Room for the digits of `line_count + 1` plus the `"│ "` separator, or 0 when disabled.
pub fn gutter_width(line_count: usize, enabled: bool) -> usize {
    if !enabled {
        return 0;
    }
    let mut n = line_count + 1;
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits + 2
}

/// Renders rows of a document with its highlights and cursor.
#[derive(Debug, Clone, Copy)]
pub struct LineRenderer<'a> {
    document: &'a Document,
    highlights: &'a HighlightCache,
    cursor: Option<Position>,
    config: &'a EditorConfig,
}

impl<'a> LineRenderer<'a> {
    /// Create a renderer. `cursor` is `None` when no cursor should be drawn.
    pub fn new(
        document: &'a Document,
        highlights: &'a HighlightCache,
        cursor: Option<Position>,
        config: &'a EditorConfig,
    ) -> Self {
        Self {
            document,
            highlights,
            cursor,
            config,
        }
    }

    /// Render `row` into exactly `viewport_columns` cells.
    ///
    /// The first `gutter_width` cells hold the line number (cut short when the viewport is
    /// narrower than the gutter); the text area shows the row's cells starting at `scroll_x`.
    /// Control characters other than tab are drawn as a space.
    pub fn render(
        &self,
        row: usize,
        viewport_columns: usize,
        gutter_width: usize,
        scroll_x: usize,
    ) -> RenderedLine {
        let theme = &self.config.theme;
        let mut out = RenderedLine::default();

        let Some(line) = self.document.line(row) else {
            out.push_spaces(viewport_columns, theme.text);
            return out;
        };

        let cursor_column = self.cursor.filter(|c| c.row == row).map(|c| c.column);
        let active = cursor_column.is_some();

        let gutter_width = gutter_width.min(viewport_columns);
        if gutter_width > 0 {
            let gutter_style = if active {
                theme.active_line_gutter
            } else {
                theme.gutter
            };
            let number_width = gutter_width.saturating_sub(2);
            let label: String = format!("{:>number_width$}│ ", row + 1)
                .chars()
                .take(gutter_width)
                .collect();
            out.push(&label, gutter_style);
        }

        let base = if active && self.config.highlight_active_line {
            theme.text.patch(theme.active_line)
        } else {
            theme.text
        };

        let chars: Vec<char> = line.chars().chain(std::iter::once(' ')).collect();
        let mut styles = vec![base; chars.len()];

        let line_len = chars.len() - 1;
        for highlight in self.highlights.highlights_for_row(self.document, row) {
            let Some(style) = theme.style_for(highlight.kind) else {
                continue;
            };
            for slot in &mut styles[highlight.columns(line_len)] {
                *slot = slot.patch(style);
            }
        }

        if let Some(column) = cursor_column
            && let Some(slot) = styles.get_mut(column)
        {
            *slot = slot.patch(theme.cursor);
        }

        let text_width = viewport_columns.saturating_sub(gutter_width);
        let (left, right) = (scroll_x, scroll_x.saturating_add(text_width));
        let tab_width = self.config.tab_width;
        let mut x = 0usize;
        let mut buf = [0u8; 4];

        for (&ch, &style) in chars.iter().zip(&styles) {
            if x >= right {
                break;
            }
            // Control characters never reach the terminal.
            let ch = if ch.is_control() && ch != '\t' { ' ' } else { ch };
            let w = cell_width_at(ch, x, tab_width);
            let (cell_start, cell_end) = (x, x + w);
            x = cell_end;

            if cell_end <= left {
                continue;
            }
            let visible = cell_end.min(right) - cell_start.max(left);
            if ch == '\t' || visible < w {
                out.push_spaces(visible, style);
            } else {
                out.push(ch.encode_utf8(&mut buf), style);
            }
        }

        let drawn = x.min(right).saturating_sub(left);
        out.push_spaces(text_width - drawn.min(text_width), base);
        out
    }
}
