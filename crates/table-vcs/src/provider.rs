//! Source-control provider trait

use table_fs::NormalizedPath;

use crate::Result;

/// Trait for version-control integration.
///
/// The validator only needs two operations: whether source control is
/// active at all, and making a file locally writable before it is
/// overwritten. Locking/unlocking beyond checkout is the provider's
/// concern, not the validator's.
pub trait SourceControl {
    /// Whether version control is active for this workspace.
    fn is_enabled(&self) -> bool;

    /// Make the file at `path` locally writable.
    fn checkout(&self, path: &NormalizedPath) -> Result<()>;
}

/// Provider used when the workspace is not under version control.
///
/// Reports disabled, so the validator writes without any checkout step.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceControlDisabled;

impl SourceControl for SourceControlDisabled {
    fn is_enabled(&self) -> bool {
        false
    }

    fn checkout(&self, _path: &NormalizedPath) -> Result<()> {
        Ok(())
    }
}
