//! Source-sync validation for data-table assets.
//!
//! A [`SourceSyncValidator`] keeps a [`table_data::DataTable`] in sync with
//! its external CSV/JSON source file:
//!
//! 1. Rows are optionally renamed to canonical names supplied by an
//!    injected [`NamingStrategy`].
//! 2. If the table's serialized content diverges from the source file on
//!    disk, the file is checked out of version control and rewritten.
//!
//! Synchronization is best-effort by design: every failure is logged and
//! absorbed, and validation always reports the asset as valid. A table
//! whose source could not be updated this pass is retried on the next one.
//!
//! Wiring `can_validate`/`validate` into a host validation framework is an
//! adapter concern outside this crate.

pub mod descriptor;
pub mod error;
pub mod logging;
pub mod naming;
pub mod report;
pub mod validator;

pub use descriptor::SourceDescriptor;
pub use error::{Error, Result};
pub use naming::{NamingStrategy, PassthroughNaming};
pub use report::{RenameDecision, ValidationReport, ValidationResult};
pub use validator::SourceSyncValidator;
