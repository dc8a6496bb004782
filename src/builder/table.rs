//! Table and row builders.

use std::fmt;

use crate::error::Violation;
use crate::inline;
use crate::options::BuilderOptions;

use super::buffer::Buffer;
use super::document::DocumentBuilder;
use super::Fragment;

/// Violations for rows whose cell count differs from `expected`.
///
/// Rows are numbered from 1, matching [`TableBuilder::add_row`].
pub(crate) fn column_violations<C>(
    expected: usize,
    rows: &[Vec<C>],
) -> impl Iterator<Item = Violation> + '_ {
    rows.iter()
        .enumerate()
        .filter(move |(_, row)| row.len() != expected)
        .map(move |(i, row)| Violation::ColumnCount {
            row: i + 1,
            expected,
            found: row.len(),
        })
}

/// Builds a pipe table one row at a time.
///
/// The header and separator lines are written on construction; each
/// [`add_row`](TableBuilder::add_row) appends one more line.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    buffer: Buffer,
    column_count: usize,
    row_count: usize,
}

impl TableBuilder {
    /// Create a table with the given column headers.
    pub fn new<H: AsRef<str>>(headers: &[H]) -> Self {
        Self::with_options(headers, BuilderOptions::default())
    }

    /// Create a table with the given column headers and options.
    pub fn with_options<H: AsRef<str>>(headers: &[H], options: BuilderOptions) -> Self {
        let mut buffer = Buffer::new(options);
        buffer.push_str(&inline::table_head(headers, options.line_ending));
        Self {
            buffer,
            column_count: headers.len(),
            row_count: 0,
        }
    }

    /// Append a row whose cells are added by `configure`.
    ///
    /// A row with a different number of cells than there are headers is
    /// still appended; the mismatch is recorded as a violation.
    pub fn add_row<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut RowBuilder),
    {
        let row = RowBuilder::new(self.buffer.options());
        let row = self.buffer.nest(row, configure, "", "");
        self.row_count += 1;

        if row.cell_count() != self.column_count {
            self.buffer.record(Violation::ColumnCount {
                row: self.row_count,
                expected: self.column_count,
                found: row.cell_count(),
            });
        }
        self
    }

    /// Number of header columns.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Number of data rows added so far.
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

impl Fragment for TableBuilder {
    fn render(&self) -> String {
        self.buffer.as_str().to_string()
    }

    fn violations(&self) -> &[Violation] {
        self.buffer.violations()
    }

    fn options(&self) -> BuilderOptions {
        self.buffer.options()
    }
}

impl fmt::Display for TableBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buffer.as_str())
    }
}

/// Builds a single table row, one cell at a time.
///
/// Only [`TableBuilder::add_row`] creates rows. The buffer holds the
/// leading `|` and every `cell|`; the line terminator is added by
/// [`render`](Fragment::render) without being stored, so rendering twice
/// gives the same text.
#[derive(Debug, Clone)]
pub struct RowBuilder {
    buffer: Buffer,
    cell_count: usize,
}

impl RowBuilder {
    pub(crate) fn new(options: BuilderOptions) -> Self {
        let mut buffer = Buffer::new(options);
        buffer.push_char('|');
        Self {
            buffer,
            cell_count: 0,
        }
    }

    /// Append a cell whose content is built by `configure`.
    pub fn add_cell<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut DocumentBuilder),
    {
        let cell = DocumentBuilder::with_options(self.buffer.options());
        self.buffer.nest(cell, configure, "", "|");
        self.cell_count += 1;
        self
    }

    /// Number of cells added so far.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }
}

impl Fragment for RowBuilder {
    fn render(&self) -> String {
        let line_ending = self.buffer.options().line_ending.as_str();
        let mut output = String::with_capacity(self.buffer.as_str().len() + line_ending.len());
        output.push_str(self.buffer.as_str());
        output.push_str(line_ending);
        output
    }

    fn violations(&self) -> &[Violation] {
        self.buffer.violations()
    }

    fn options(&self) -> BuilderOptions {
        self.buffer.options()
    }
}

impl fmt::Display for RowBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::options::LineEnding;

    fn text_cell(text: &'static str) -> impl FnOnce(&mut DocumentBuilder) {
        move |cell| {
            cell.add_text(text);
        }
    }

    #[test]
    fn test_header_and_separator_on_construction() {
        let table = TableBuilder::new(&["A", "B", "C"]);
        assert_eq!(table.render(), "|A|B|C|\n|---|---|---|\n");
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_single_row() {
        let mut table = TableBuilder::new(&["A", "B"]);
        table.add_row(|row| {
            row.add_cell(text_cell("1")).add_cell(text_cell("2"));
        });
        assert_eq!(table.render(), "|A|B|\n|---|---|\n|1|2|\n");
        assert!(table.violations().is_empty());
    }

    #[test]
    fn test_rows_in_order() {
        let mut table = TableBuilder::new(&["N"]);
        table
            .add_row(|row| {
                row.add_cell(text_cell("first"));
            })
            .add_row(|row| {
                row.add_cell(text_cell("second"));
            });
        assert_eq!(table.render(), "|N|\n|---|\n|first|\n|second|\n");
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_cell_with_inline_markup() {
        let mut table = TableBuilder::new(&["Site"]);
        table.add_row(|row| {
            row.add_cell(|cell| {
                cell.add_link_with("https://go.dev", |label| {
                    label.add_bold("Go");
                });
            });
        });
        assert_eq!(table.render(), "|Site|\n|---|\n|[**Go**](https://go.dev)|\n");
    }

    #[test]
    fn test_empty_row_and_cell() {
        let mut table = TableBuilder::new(&["A"]);
        table.add_row(|row| {
            row.add_cell(|_| {});
        });
        table.add_row(|_| {});
        assert_eq!(table.render(), "|A|\n|---|\n||\n|\n");
    }

    #[test]
    fn test_row_render_is_idempotent() {
        let mut row = RowBuilder::new(BuilderOptions::default());
        row.add_cell(text_cell("x"));
        assert_eq!(row.render(), "|x|\n");
        assert_eq!(row.render(), "|x|\n");
        assert_eq!(row.to_string(), "|x|\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut table = TableBuilder::new(&["A"]);
        table.add_row(|row| {
            row.add_cell(text_cell("1"));
        });
        assert_eq!(table.render(), table.render());
    }

    #[test]
    fn test_column_mismatch_is_permissive() {
        let mut table = TableBuilder::new(&["A", "B"]);
        table.add_row(|row| {
            row.add_cell(text_cell("only"));
        });
        assert_eq!(table.render(), "|A|B|\n|---|---|\n|only|\n");
        assert_eq!(
            table.violations(),
            &[Violation::ColumnCount {
                row: 1,
                expected: 2,
                found: 1
            }]
        );
        assert!(table.finish().is_ok());
    }

    #[test]
    fn test_strict_table() {
        let options = BuilderOptions::new().with_strict(true);
        let mut table = TableBuilder::with_options(&["A"], options);
        table
            .add_row(|row| {
                row.add_cell(text_cell("ok"));
            })
            .add_row(|row| {
                row.add_cell(text_cell("1")).add_cell(text_cell("2"));
            });

        let err = table.finish().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(Violation::ColumnCount {
                row: 2,
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_crlf_rows() {
        let options = BuilderOptions::new().with_line_ending(LineEnding::CrLf);
        let mut table = TableBuilder::with_options(&["A"], options);
        table.add_row(|row| {
            row.add_cell(text_cell("1"));
        });
        assert_eq!(table.render(), "|A|\r\n|---|\r\n|1|\r\n");
    }

    #[test]
    fn test_cell_violation_reaches_table() {
        let mut table = TableBuilder::new(&["A"]);
        table.add_row(|row| {
            row.add_cell(|cell| {
                cell.add_header(0, "x");
            });
        });
        assert_eq!(table.violations(), &[Violation::HeadingLevel(0)]);
    }
}
