//! Version-control abstraction for table-sync
//!
//! Source files live under version control in most projects; before a
//! divergent file is rewritten it must be checked out (made locally
//! writable). The [`SourceControl`] trait is the seam the validator uses,
//! with a git-backed provider and a disabled no-op provider.

pub mod error;
pub mod git;
pub mod provider;

pub use error::{Error, Result};
pub use git::GitSourceControl;
pub use provider::{SourceControl, SourceControlDisabled};
