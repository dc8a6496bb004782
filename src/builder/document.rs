//! Document-level builder for inline Markdown content.

use std::fmt;
use std::io::Write;

use crate::error::{Result, Violation};
use crate::inline;
use crate::options::BuilderOptions;

use super::buffer::Buffer;
use super::table::{column_violations, TableBuilder};
use super::Fragment;

/// Highest heading level Markdown renders distinctly.
const MAX_HEADING_LEVEL: usize = 6;

/// Builds a Markdown document through chained calls.
///
/// Every mutating method appends to the buffer and returns the same
/// builder. Nothing is escaped.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    buffer: Buffer,
}

impl DocumentBuilder {
    /// Create an empty builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given options.
    pub fn with_options(options: BuilderOptions) -> Self {
        Self {
            buffer: Buffer::new(options),
        }
    }

    /// Append text verbatim.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Append a header line of the given level.
    ///
    /// Levels outside 1-6 are written as-is and recorded as a violation.
    pub fn add_header(&mut self, level: usize, text: &str) -> &mut Self {
        if !(1..=MAX_HEADING_LEVEL).contains(&level) {
            self.buffer.record(Violation::HeadingLevel(level));
        }
        let line = inline::header(level, text, self.buffer.options().line_ending);
        self.buffer.push_str(&line);
        self
    }

    /// Append `**text**`.
    pub fn add_bold(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(&inline::bold(text));
        self
    }

    /// Append `*text*`.
    pub fn add_italic(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(&inline::italic(text));
        self
    }

    /// Append `[text](url)`.
    pub fn add_link(&mut self, text: &str, url: &str) -> &mut Self {
        self.buffer.push_str(&inline::link(text, url));
        self
    }

    /// Append a link whose label is built by `configure` in a fresh builder.
    ///
    /// The label builder only lives for the duration of the closure. An
    /// empty closure yields `[](url)`.
    pub fn add_link_with<F>(&mut self, url: &str, configure: F) -> &mut Self
    where
        F: FnOnce(&mut DocumentBuilder),
    {
        let label = DocumentBuilder::with_options(self.buffer.options());
        let close = format!("]({})", url);
        self.buffer.nest(label, configure, "[", &close);
        self
    }

    /// Append a line terminator.
    pub fn new_line(&mut self) -> &mut Self {
        self.buffer.push_line();
        self
    }

    /// Append a complete table from pre-rendered cell text.
    ///
    /// Rows whose cell count differs from the header count are written
    /// as-is and recorded as violations, as with [`add_table_with`].
    ///
    /// [`add_table_with`]: DocumentBuilder::add_table_with
    pub fn add_table<H, C>(&mut self, headers: &[H], rows: &[Vec<C>]) -> &mut Self
    where
        H: AsRef<str>,
        C: AsRef<str>,
    {
        for violation in column_violations(headers.len(), rows) {
            self.buffer.record(violation);
        }
        let line_ending = self.buffer.options().line_ending;
        self.buffer.push_str(&inline::table(headers, rows, line_ending));
        self
    }

    /// Append a table whose rows are added by `configure`.
    pub fn add_table_with<H, F>(&mut self, headers: &[H], configure: F) -> &mut Self
    where
        H: AsRef<str>,
        F: FnOnce(&mut TableBuilder),
    {
        let table = TableBuilder::with_options(headers, self.buffer.options());
        self.buffer.nest(table, configure, "", "");
        self
    }

    /// Write the rendered document to a sink.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.as_str().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// The accumulated text, without copying.
    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    /// Length of the accumulated text in bytes.
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Check if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl Fragment for DocumentBuilder {
    fn render(&self) -> String {
        self.as_str().to_string()
    }

    fn violations(&self) -> &[Violation] {
        self.buffer.violations()
    }

    fn options(&self) -> BuilderOptions {
        self.buffer.options()
    }
}

impl fmt::Display for DocumentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
