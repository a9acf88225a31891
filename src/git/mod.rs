//! Local git repository access using git2-rs.

pub mod branches;
pub mod remote;

use git2::Repository;

use crate::error::GitError;

pub use branches::{Branch, latest_branches};
pub use remote::{origin_slug, parse_github_remote, remote_slug};

/// Open the repository containing the current directory.
pub fn open_current() -> Result<Repository, GitError> {
    Repository::discover(".").map_err(GitError::OpenRepository)
}
