//! Data-table model for table-sync
//!
//! This crate provides:
//! - An ordered, named-row [`DataTable`] with rename support
//! - Import metadata recording where a table was imported from
//! - Source format detection from file extensions
//! - Deterministic CSV and JSON serialization of table content

pub mod csv;
pub mod error;
pub mod format;
pub mod import;
pub mod json;
pub mod table;

pub use error::{Error, Result};
pub use format::SourceFormat;
pub use import::ImportMetadata;
pub use table::{DataTable, Row};
