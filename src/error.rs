//! Error types for the mdfluent library.

use std::io;
use thiserror::Error;

/// Result type alias for mdfluent operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while emitting or loading Markdown content.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while writing rendered output to a sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A structural rule was broken and strict mode is enabled.
    #[error("Validation error: {0}")]
    Validation(#[from] Violation),

    /// Error decoding a JSON table description.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

/// A structural problem noticed while building.
///
/// Builders never reject an append. Violations are collected alongside
/// the text and only turn into an [`Error`] when a strict builder is
/// finished.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Heading level outside the 1-6 range Markdown distinguishes.
    #[error("heading level {0} is outside the range 1-6")]
    HeadingLevel(usize),

    /// A data row whose cell count differs from the header count.
    #[error("row {row} has {found} cells, expected {expected}")]
    ColumnCount {
        /// 1-based index of the data row
        row: usize,
        /// Number of header columns
        expected: usize,
        /// Number of cells the row actually has
        found: usize,
    },
}
