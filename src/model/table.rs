//! Serializable table description.

use serde::{Deserialize, Serialize};

use crate::builder::{column_violations, Fragment, TableBuilder};
use crate::error::{Result, Violation};
use crate::inline;
use crate::options::BuilderOptions;

/// Headers plus rows of pre-rendered cell text.
///
/// This is the input of the flat, non-delegating table form. Cells are
/// Markdown already and are copied into the output as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    /// Column headers
    #[serde(default)]
    pub headers: Vec<String>,

    /// Data rows
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Create a table description with the given headers and no rows.
    pub fn new<H: Into<String>>(headers: impl IntoIterator<Item = H>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row of cells, returning the description for chaining.
    pub fn with_row<C: Into<String>>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of header columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Rows whose cell count differs from the header count.
    pub fn violations(&self) -> Vec<Violation> {
        column_violations(self.headers.len(), &self.rows).collect()
    }

    /// Render in one pass without any builder delegation.
    pub fn to_markdown(&self, options: BuilderOptions) -> Result<String> {
        if options.strict {
            if let Some(violation) = self.violations().into_iter().next() {
                return Err(violation.into());
            }
        }
        Ok(inline::table(&self.headers, &self.rows, options.line_ending))
    }

    /// Render through a [`TableBuilder`], one nested row and cell at a time.
    pub fn to_builder(&self, options: BuilderOptions) -> TableBuilder {
        let mut table = TableBuilder::with_options(&self.headers, options);
        for row in &self.rows {
            table.add_row(|builder| {
                for cell in row {
                    builder.add_cell(|content| {
                        content.add_text(cell);
                    });
                }
            });
        }
        table
    }

    /// Render through the nested builders, honoring strict mode.
    pub fn to_markdown_nested(&self, options: BuilderOptions) -> Result<String> {
        self.to_builder(options).finish()
    }
}
