//! Data model for table descriptions.

mod table;

pub use table::TableData;
