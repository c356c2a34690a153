//! Error types for table-vcs

use std::path::PathBuf;

/// Result type for table-vcs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in table-vcs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] table_fs::Error),

    #[error("No repository found at or above {path}")]
    RepositoryNotFound { path: PathBuf },

    #[error("{path} is not inside the repository work tree at {worktree}")]
    NotInWorkTree { path: PathBuf, worktree: PathBuf },

    #[error("Checkout failed for {path}: {message}")]
    CheckoutFailed { path: PathBuf, message: String },
}
