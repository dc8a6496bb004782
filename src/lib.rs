//! # mdfluent
//!
//! Fluent, nested builders for generating Markdown.
//!
//! Documents are assembled through chained calls. Composite structures
//! (link labels, tables, rows, cells) are built in nested scopes: a closure
//! receives a fresh child builder, and when the closure returns the child's
//! rendered text is spliced into the parent.
//!
//! ## Quick Start
//!
//! ```
//! use mdfluent::{DocumentBuilder, Fragment};
//!
//! let mut doc = DocumentBuilder::new();
//! doc.add_header(2, "Links")
//!     .add_link("Go", "https://go.dev")
//!     .add_text(" and ")
//!     .add_link_with("https://www.rust-lang.org", |label| {
//!         label.add_bold("Rust");
//!     });
//!
//! assert_eq!(
//!     doc.render(),
//!     "## Links\n[Go](https://go.dev) and [**Rust**](https://www.rust-lang.org)"
//! );
//! ```
//!
//! ## Tables
//!
//! ```
//! use mdfluent::{Fragment, TableBuilder};
//!
//! let mut table = TableBuilder::new(&["A", "B"]);
//! table.add_row(|row| {
//!     row.add_cell(|c| {
//!         c.add_text("1");
//!     })
//!     .add_cell(|c| {
//!         c.add_italic("2");
//!     });
//! });
//!
//! assert_eq!(table.render(), "|A|B|\n|---|---|\n|1|*2*|\n");
//! ```
//!
//! ## Strict Mode
//!
//! Builders never reject input. Header levels outside 1-6 and rows whose
//! cell count differs from the header count are recorded as
//! [`Violation`]s; with [`BuilderOptions::with_strict`] they surface as
//! errors from [`Fragment::finish`].
//!
//! ```
//! use mdfluent::{BuilderOptions, DocumentBuilder, Fragment};
//!
//! let mut doc = DocumentBuilder::with_options(BuilderOptions::new().with_strict(true));
//! doc.add_header(7, "Too deep");
//! assert!(doc.finish().is_err());
//! ```

pub mod builder;
pub mod error;
pub mod inline;
pub mod model;
pub mod options;

// Re-exports
pub use builder::{DocumentBuilder, Fragment, RowBuilder, TableBuilder};
pub use error::{Error, Result, Violation};
pub use model::TableData;
pub use options::{BuilderOptions, LineEnding};

/// Render a table from headers and pre-rendered rows in one call.
///
/// # Example
///
/// ```
/// let md = mdfluent::render_table(&["A", "B"], &[vec!["1", "2"]]);
/// assert_eq!(md, "|A|B|\n|---|---|\n|1|2|\n");
/// ```
pub fn render_table<H, C>(headers: &[H], rows: &[Vec<C>]) -> String
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    inline::table(headers, rows, LineEnding::default())
}
