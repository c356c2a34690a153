//! Git repository fixtures.

use std::path::Path;

/// Initialises a real git repository using `git2` (no initial commit, no
/// config).
///
/// Use for: tests that need `git2::Repository::discover` to succeed on a
/// valid object store.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}
