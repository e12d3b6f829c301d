use cursor::{Col, Line};

/// Formats `message` as a compiler-style report, quoting the offending line of
/// `source` with a caret under `col`:
///
/// ```text
/// Error: Unexpected character '^'
///
/// 1 | 2 3 ^
///   |     ^
/// ```
///
/// Lines outside of `source` (including line 0) only produce the header.
pub fn format(message: &str, source: &str, line: Line, col: Col) -> String {
    let header = format!("Error: {message}\n\n");

    let Some(text) = line.0.checked_sub(1).and_then(|index| source.split('\n').nth(index)) else {
        return header;
    };

    let gutter = " ".repeat(line.to_string().len());
    let padding = " ".repeat(col.0.saturating_sub(1));

    format!("{header}{line} | {text}\n{gutter} | {padding}^")
}
