//! Error types for table-validate
//!
//! All of these are absorbed at the validator boundary: they produce a log
//! entry and a skipped save, never a validation failure.

use std::path::PathBuf;

/// Result type for table-validate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while syncing a table to its source file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read source file {path}: {source}")]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: table_fs::Error,
    },

    #[error("Could not check out source file {path}: {source}")]
    CheckoutFailed {
        path: PathBuf,
        #[source]
        source: table_vcs::Error,
    },

    #[error("Could not write source file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: table_fs::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialize(#[from] table_data::Error),
}
