//! Error types for table-data

/// Result type for table-data operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in table-data operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Row '{name}' already exists in table '{table}'")]
    RowExists { table: String, name: String },

    #[error("Row '{name}' not found in table '{table}'")]
    RowNotFound { table: String, name: String },

    #[error("Invalid row name '{name}': {reason}")]
    InvalidRowName { name: String, reason: String },

    #[error("Row '{name}' has {actual} values but table '{table}' has {expected} columns")]
    ColumnMismatch {
        table: String,
        name: String,
        expected: usize,
        actual: usize,
    },
}
