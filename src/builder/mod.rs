//! Fluent Markdown builders.
//!
//! A [`DocumentBuilder`] accumulates inline content. Composite structures
//! are built in nested scopes: the parent creates a fresh child builder,
//! passes it to a configuration closure, and splices the child's rendered
//! text back into its own buffer once the closure returns.
//!
//! # Example
//!
//! ```
//! use mdfluent::builder::{DocumentBuilder, Fragment};
//!
//! let mut doc = DocumentBuilder::new();
//! doc.add_header(1, "Report")
//!     .add_text("See ")
//!     .add_link_with("https://example.com", |label| {
//!         label.add_bold("the site");
//!     })
//!     .new_line()
//!     .add_table_with(&["Name", "Score"], |table| {
//!         table.add_row(|row| {
//!             row.add_cell(|cell| {
//!                 cell.add_italic("Ada");
//!             })
//!             .add_cell(|cell| {
//!                 cell.add_text("10");
//!             });
//!         });
//!     });
//!
//! assert_eq!(
//!     doc.render(),
//!     "# Report\nSee [**the site**](https://example.com)\n|Name|Score|\n|---|---|\n|*Ada*|10|\n"
//! );
//! ```

mod buffer;
mod document;
mod table;

pub use document::DocumentBuilder;
pub use table::{RowBuilder, TableBuilder};

pub(crate) use table::column_violations;

use crate::error::{Result, Violation};
use crate::options::BuilderOptions;

/// A builder whose accumulated content can be rendered to Markdown.
///
/// Every builder implements this, which lets a parent treat link labels,
/// cells, rows, and tables alike when splicing them into its buffer.
pub trait Fragment {
    /// Render the accumulated content. Never mutates the builder.
    fn render(&self) -> String;

    /// Violations recorded by this builder and every child spliced into it.
    fn violations(&self) -> &[Violation];

    /// Options this builder was created with.
    fn options(&self) -> BuilderOptions;

    /// Render, failing on the first violation when strict mode is on.
    fn finish(&self) -> Result<String> {
        if self.options().strict {
            if let Some(violation) = self.violations().first() {
                return Err(violation.clone().into());
            }
        }
        Ok(self.render())
    }
}
