//! Git-backed source-control provider

use std::fs;
use std::path::PathBuf;

use git2::Repository;
use table_fs::NormalizedPath;
use tracing::debug;

use crate::provider::SourceControl;
use crate::{Error, Result};

/// Source control backed by a git repository.
///
/// Git has no server-side checkout step the way Perforce does; files
/// imported through an asset pipeline are often left read-only on disk,
/// so "checkout" here means verifying the file belongs to the work tree
/// and clearing its read-only bit.
#[derive(Debug)]
pub struct GitSourceControl {
    workdir: PathBuf,
}

impl GitSourceControl {
    /// Find the repository containing `path` (searching upward) and build
    /// a provider for its work tree.
    pub fn discover(path: &NormalizedPath) -> Result<Self> {
        let native = path.to_native();
        let repo = Repository::discover(&native).map_err(|_| Error::RepositoryNotFound {
            path: native.clone(),
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| Error::CheckoutFailed {
                path: native.clone(),
                message: "repository is bare, no work tree to check out into".to_string(),
            })?
            .to_path_buf();
        Ok(Self { workdir })
    }

    /// The work tree this provider operates on.
    pub fn workdir(&self) -> &std::path::Path {
        &self.workdir
    }
}

impl SourceControl for GitSourceControl {
    fn is_enabled(&self) -> bool {
        true
    }

    fn checkout(&self, path: &NormalizedPath) -> Result<()> {
        let native = path.to_native();

        let resolved = dunce::canonicalize(&native).unwrap_or_else(|_| native.clone());
        let workdir = dunce::canonicalize(&self.workdir).unwrap_or_else(|_| self.workdir.clone());
        if !resolved.starts_with(&workdir) {
            return Err(Error::NotInWorkTree {
                path: native,
                worktree: self.workdir.clone(),
            });
        }

        // A file that does not exist yet has nothing to make writable
        let Ok(metadata) = fs::metadata(&resolved) else {
            debug!(path = %path, "checkout target does not exist yet, nothing to do");
            return Ok(());
        };

        let mut permissions = metadata.permissions();
        if permissions.readonly() {
            #[allow(clippy::permissions_set_readonly_false)]
            permissions.set_readonly(false);
            fs::set_permissions(&resolved, permissions).map_err(|e| Error::CheckoutFailed {
                path: native,
                message: e.to_string(),
            })?;
            debug!(path = %path, "cleared read-only bit on checkout");
        }

        Ok(())
    }
}
