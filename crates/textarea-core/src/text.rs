pub(crate) fn split_lines_preserve_trailing(text: &str) -> Vec<String> {
    // N newlines give N+1 rows, the last one possibly empty.
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Byte index of the `column`-th char of `line` (`line.len()` when `column` is the line length).
///
/// Callers validate `column <= char count` beforehand.
pub(crate) fn byte_index(line: &str, column: usize) -> usize {
    if line.is_ascii() {
        return column.min(line.len());
    }
    line.char_indices()
        .nth(column)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

/// Char column containing byte `byte` of `line`, clamped to the line length.
pub(crate) fn char_column(line: &str, byte: usize) -> usize {
    if line.is_ascii() {
        return byte.min(line.len());
    }
    let byte = byte.min(line.len());
    line.char_indices().take_while(|(idx, _)| *idx < byte).count()
}

pub(crate) fn char_len(line: &str) -> usize {
    if line.is_ascii() {
        line.len()
    } else {
        line.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines_preserve_trailing(""), vec![""]);
        assert_eq!(split_lines_preserve_trailing("a\r\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_byte_and_char_columns() {
        let line = "a你b";
        assert_eq!(byte_index(line, 0), 0);
        assert_eq!(byte_index(line, 1), 1);
        assert_eq!(byte_index(line, 2), 4);
        assert_eq!(byte_index(line, 3), 5);
        assert_eq!(char_column(line, 4), 2);
        assert_eq!(char_column(line, 5), 3);
        assert_eq!(char_column(line, 99), 3);
        assert_eq!(char_len(line), 3);
    }
}
