//! Tabular data model and its delimited-text load/save.

pub mod loader;
pub mod table;
pub mod writer;

pub use loader::load_table;
pub use table::{Cell, Table};
pub use writer::write_table;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';
