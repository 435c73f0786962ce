//! Row-indexed highlight spans derived from a syntax tree.
//!
//! The cache is rebuilt, never patched: whenever the tree it was derived from is replaced, the
//! owner clears it and repopulates the rows it needs. Rebuilding can be restricted to a window of
//! rows, in which case subtrees outside the window are not visited at all.

use crate::document::Document;
use crate::syntax::{SyntaxNode, SyntaxTree, TreeCursor};
use std::collections::BTreeMap;
use std::ops::Range;
use tracing::debug;

/// A styled column range on a single row, derived from one syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    /// First highlighted column (chars).
    pub start_column: usize,
    /// End column (exclusive); `None` extends to the end of the row's content.
    pub end_column: Option<usize>,
    /// Kind of the node this highlight came from.
    pub kind: &'static str,
}

impl Highlight {
    /// Create a highlight.
    pub fn new(start_column: usize, end_column: Option<usize>, kind: &'static str) -> Self {
        Self {
            start_column,
            end_column,
            kind,
        }
    }

    /// Column range on a row of `line_len` chars.
    pub fn columns(&self, line_len: usize) -> Range<usize> {
        let end = self.end_column.unwrap_or(line_len).min(line_len);
        self.start_column.min(end)..end
    }
}

/// Mapping from row to its highlights, in pre-order traversal (= paint) order.
#[derive(Debug, Clone, Default)]
pub struct HighlightCache {
    rows: BTreeMap<usize, Vec<Highlight>>,
    version: u64,
}

impl HighlightCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every cached row and mark the cache as current for `document`.
    pub fn clear(&mut self, document: &Document) {
        self.rows.clear();
        self.version = document.version();
    }

    /// Whether the cache was built for a different document version.
    pub fn is_stale(&self, document: &Document) -> bool {
        self.version != document.version()
    }

    /// Document version the cache was built for.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of rows with at least one highlight.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of highlights.
    pub fn len(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    /// Whether the cache holds no highlights.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highlights for `row`, in paint order.
    ///
    /// The cache must have been rebuilt for the current document version; reading a stale cache is
    /// a bug in the caller.
    pub fn highlights_for_row(&self, document: &Document, row: usize) -> &[Highlight] {
        debug_assert!(
            !self.is_stale(document),
            "highlight cache read at version {} but document is at version {}",
            self.version,
            document.version()
        );
        self.rows.get(&row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Clear the rows in `window` (all rows for `None`) and repopulate them from `tree`.
    ///
    /// Returns the number of highlights recorded.
    pub fn rebuild<T: SyntaxTree>(
        &mut self,
        tree: Option<&T>,
        document: &Document,
        window: Option<Range<usize>>,
    ) -> usize {
        let line_count = document.line_count();
        let window = match window {
            Some(window) => window.start.min(line_count)..window.end.min(line_count),
            None => 0..line_count,
        };

        self.clear_rows(&window);
        self.version = document.version();

        let recorded = match tree {
            Some(tree) if !window.is_empty() => self.populate(tree, document, &window),
            _ => 0,
        };
        debug!(?window, recorded, version = self.version, "highlight cache rebuilt");
        recorded
    }

    #[cfg(test)]
    pub(crate) fn insert_row_for_test(&mut self, row: usize, highlights: Vec<Highlight>) {
        self.rows.insert(row, highlights);
    }

    fn clear_rows(&mut self, window: &Range<usize>) {
        let mut inside = self.rows.split_off(&window.start);
        let mut after = inside.split_off(&window.end);
        self.rows.append(&mut after);
    }

    fn populate<T: SyntaxTree>(
        &mut self,
        tree: &T,
        document: &Document,
        window: &Range<usize>,
    ) -> usize {
        let mut cursor = tree.walk();
        let mut recorded = 0usize;

        'walk: loop {
            let node = cursor.node();
            let intersects = node.start.row < window.end && node.end.row >= window.start;
            if intersects {
                recorded += self.record(node, document, window);
                if cursor.goto_first_child() {
                    continue;
                }
            }

            // Siblings are in document order, so once one starts below the window the rest do too.
            let below_window = node.start.row >= window.end;
            if !below_window && cursor.goto_next_sibling() {
                continue;
            }

            loop {
                if !cursor.goto_parent() {
                    break 'walk;
                }
                if cursor.goto_next_sibling() {
                    continue 'walk;
                }
            }
        }

        recorded
    }

    fn record(&mut self, node: SyntaxNode, document: &Document, window: &Range<usize>) -> usize {
        let (start_row, end_row) = (node.start.row, node.end.row);
        let start_column = document.column_for_byte(start_row, node.start.column);
        let end_column = document.column_for_byte(end_row, node.end.column);
        let mut recorded = 0usize;

        let mut push = |row: usize, highlight: Highlight| {
            if window.contains(&row) {
                self.rows.entry(row).or_default().push(highlight);
                recorded += 1;
            }
        };

        if start_row == end_row {
            push(
                start_row,
                Highlight::new(start_column, Some(end_column), node.kind),
            );
        } else {
            push(start_row, Highlight::new(start_column, None, node.kind));
            for row in (start_row + 1).max(window.start)..end_row.min(window.end) {
                push(row, Highlight::new(0, None, node.kind));
            }
            push(end_row, Highlight::new(0, Some(end_column), node.kind));
        }

        recorded
    }
}
