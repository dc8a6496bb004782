//! Inline Markdown formatting.
//!
//! Pure functions that wrap text in Markdown syntax. Nothing here escapes
//! its input: callers that need literal `*`, `|` or brackets should run the
//! text through [`escape`] first.

use crate::options::LineEnding;

/// Characters that change meaning in inline text or table cells.
const SPECIAL_CHARS: &[char] = &['\\', '*', '_', '`', '#', '[', ']', '(', ')', '|'];

/// Render an ATX header line: `level` hashes, a space, the text, a newline.
///
/// The level is passed through unchecked, so `0` yields a line starting
/// with a bare space and `9` yields nine hashes.
pub fn header(level: usize, text: &str, line_ending: LineEnding) -> String {
    format!("{} {}{}", "#".repeat(level), text, line_ending.as_str())
}

/// Wrap text in `**` delimiters.
pub fn bold(text: &str) -> String {
    format!("**{}**", text)
}

/// Wrap text in `*` delimiters.
pub fn italic(text: &str) -> String {
    format!("*{}*", text)
}

/// Render `[label](url)`.
pub fn link(label: &str, url: &str) -> String {
    format!("[{}]({})", label, url)
}

/// Render the header row and the `---` separator row of a pipe table.
pub fn table_head<S: AsRef<str>>(headers: &[S], line_ending: LineEnding) -> String {
    let mut output = table_row(headers, line_ending);
    output.push('|');
    for _ in headers {
        output.push_str("---|");
    }
    output.push_str(line_ending.as_str());
    output
}

/// Render one `|c1|c2|...|` line of a pipe table.
pub fn table_row<S: AsRef<str>>(cells: &[S], line_ending: LineEnding) -> String {
    let mut output = String::from("|");
    for cell in cells {
        output.push_str(cell.as_ref());
        output.push('|');
    }
    output.push_str(line_ending.as_str());
    output
}

/// Render a whole pipe table from pre-rendered cell text.
///
/// Row lengths are not checked against the header count.
pub fn table<H, C>(headers: &[H], rows: &[Vec<C>], line_ending: LineEnding) -> String
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    let mut output = table_head(headers, line_ending);
    for row in rows {
        output.push_str(&table_row(row, line_ending));
    }
    output
}

/// Backslash-escape characters that would otherwise be read as markup.
pub fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL_CHARS.contains(&c) {
            output.push('\\');
        }
        output.push(c);
    }
    output
}
