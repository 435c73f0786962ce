//! Visual styles and the node-kind → style table.
//!
//! Styles are layered: a later style only overrides the attributes it sets, so highlights for a
//! child node paint over their parent's while inheriting anything the child leaves unset.

use std::collections::BTreeMap;

/// Terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// ANSI black.
    Black,
    /// ANSI red.
    Red,
    /// ANSI green.
    Green,
    /// ANSI yellow.
    Yellow,
    /// ANSI blue.
    Blue,
    /// ANSI magenta.
    Magenta,
    /// ANSI cyan.
    Cyan,
    /// ANSI white.
    White,
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

/// A set of optional text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Bold weight.
    pub bold: bool,
    /// Swap foreground and background.
    pub reverse: bool,
}

impl Style {
    /// A style that sets nothing.
    pub const fn null() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            reverse: false,
        }
    }

    /// Set the foreground color.
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Enable bold.
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enable reverse video.
    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Layer `other` on top of `self`.
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            bold: self.bold || other.bold,
            reverse: self.reverse || other.reverse,
        }
    }
}

/// Styles used by the line renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Base style of document text.
    pub text: Style,
    /// Layered under the cursor row.
    pub active_line: Style,
    /// Line-number gutter.
    pub gutter: Style,
    /// Gutter of the cursor row.
    pub active_line_gutter: Style,
    /// The cursor cell.
    pub cursor: Style,
    kinds: BTreeMap<String, Style>,
}

impl Theme {
    /// A theme that styles nothing.
    pub fn plain() -> Self {
        Self {
            text: Style::null(),
            active_line: Style::null(),
            gutter: Style::null(),
            active_line_gutter: Style::null(),
            cursor: Style::null().reverse(),
            kinds: BTreeMap::new(),
        }
    }

    /// Style for a syntax node kind, if the theme has one.
    pub fn style_for(&self, kind: &str) -> Option<Style> {
        self.kinds.get(kind).copied()
    }

    /// Set the style for a node kind.
    pub fn set_kind_style(&mut self, kind: impl Into<String>, style: Style) {
        self.kinds.insert(kind.into(), style);
    }

    /// Add a set of node kind → style mappings.
    pub fn with_kind_styles<const N: usize>(mut self, styles: [(&str, Style); N]) -> Self {
        for (kind, style) in styles {
            self.set_kind_style(kind, style);
        }
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Style::null(),
            active_line: Style::null().bg(Color::Rgb(0x36, 0x36, 0x36)),
            gutter: Style::null().fg(Color::Rgb(0x80, 0x80, 0x80)),
            active_line_gutter: Style::null().fg(Color::White).bold(),
            cursor: Style::null().fg(Color::Black).bg(Color::White),
            kinds: BTreeMap::new(),
        }
        .with_kind_styles([
            ("identifier", Style::null().fg(Color::Cyan)),
            ("string", Style::null().fg(Color::Green)),
            ("string_literal", Style::null().fg(Color::Green)),
            ("import_from_statement", Style::null().bg(Color::Magenta)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_keeps_unset_attributes() {
        let base = Style::null().fg(Color::Red).bg(Color::Blue);
        let top = Style::null().fg(Color::Green).bold();
        assert_eq!(
            base.patch(top),
            Style::null().fg(Color::Green).bg(Color::Blue).bold()
        );
    }

    #[test]
    fn test_default_theme_kinds() {
        let theme = Theme::default();
        assert_eq!(
            theme.style_for("identifier"),
            Some(Style::null().fg(Color::Cyan))
        );
        assert_eq!(theme.style_for("comment"), None);
        assert_eq!(Theme::plain().style_for("identifier"), None);
    }
}
