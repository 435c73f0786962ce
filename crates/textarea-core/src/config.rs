//! Editor configuration.

use crate::style::Theme;
use crate::width::DEFAULT_TAB_WIDTH;

/// Configuration for [`TextEditor`](crate::TextEditor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Show the line-number gutter.
    pub show_line_numbers: bool,
    /// Tab stop distance in cells when rendering `'\t'`.
    pub tab_width: usize,
    /// Text inserted by the Tab key.
    pub indent: String,
    /// Paint the cursor row with the theme's active-line style.
    pub highlight_active_line: bool,
    /// Render styles.
    pub theme: Theme,
}

impl EditorConfig {
    /// Create a config with default settings.
    ///
    /// By default:
    /// - line numbers are shown
    /// - `tab_width` is [`DEFAULT_TAB_WIDTH`] and Tab inserts four spaces
    /// - the active line is highlighted
    /// - the theme is [`Theme::default`]
    pub fn new() -> Self {
        Self {
            show_line_numbers: true,
            tab_width: DEFAULT_TAB_WIDTH,
            indent: " ".repeat(DEFAULT_TAB_WIDTH),
            highlight_active_line: true,
            theme: Theme::default(),
        }
    }

    /// Toggle the line-number gutter.
    pub fn with_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Set the tab width (at least 1).
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    /// Set the text the Tab key inserts.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Toggle the active-line background.
    pub fn with_active_line(mut self, highlight: bool) -> Self {
        self.highlight_active_line = highlight;
        self
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}
