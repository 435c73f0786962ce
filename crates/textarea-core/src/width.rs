//! Terminal cell measurement (UAX #11).

use unicode_width::UnicodeWidthChar;

/// Default tab width (in cells) used when a caller does not specify a tab width.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Width of a character in cells.
///
/// Control characters (NUL included) count as one cell; the renderer draws them as a space.
pub fn char_width(ch: char) -> usize {
    if ch.is_control() {
        return 1;
    }
    UnicodeWidthChar::width(ch).unwrap_or(1)
}

/// Calculate visual width (in cells) for a character at a specific cell offset within the line.
///
/// For `'\t'`, width advances to the next tab stop based on `tab_width`.
pub fn cell_width_at(ch: char, cell_offset_in_line: usize, tab_width: usize) -> usize {
    if ch == '\t' {
        let tab_width = tab_width.max(1);
        tab_width - cell_offset_in_line % tab_width
    } else {
        char_width(ch)
    }
}

/// Calculate total visual width of a string, interpreting `'\t'` using `tab_width`.
pub fn str_width(s: &str, tab_width: usize) -> usize {
    visual_x_for_column(s, usize::MAX, tab_width)
}

/// Cell offset from the start of the line to the given character column.
pub fn visual_x_for_column(line: &str, column: usize, tab_width: usize) -> usize {
    let mut x = 0usize;
    for ch in line.chars().take(column) {
        x = x.saturating_add(cell_width_at(ch, x, tab_width));
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cjk_is_double_width() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('你'), 2);
        assert_eq!(str_width("a你b", 4), 4);
    }

    #[test]
    fn test_control_chars_take_one_cell() {
        assert_eq!(char_width('\0'), 1);
        assert_eq!(char_width('\x1b'), 1);
        assert_eq!(char_width('\r'), 1);
        assert_eq!(str_width("a\x1bb", 4), 3);
    }

    #[test]
    fn test_tab_advances_to_next_stop() {
        assert_eq!(cell_width_at('\t', 0, 4), 4);
        assert_eq!(cell_width_at('\t', 1, 4), 3);
        assert_eq!(cell_width_at('\t', 4, 4), 4);
        assert_eq!(visual_x_for_column("ab\tc", 3, 4), 4);
    }
}
