//! Filesystem support for table-sync
//!
//! Provides normalized path handling and safe I/O for source files.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
