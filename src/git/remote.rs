//! GitHub repository detection from git remotes.

use git2::Repository;

use crate::error::GitError;
use crate::gh::RepoSlug;

/// Repository slug of the `origin` remote.
pub fn origin_slug(repo: &Repository) -> Result<RepoSlug, GitError> {
    remote_slug(repo, "origin")
}

/// Repository slug of the named remote.
pub fn remote_slug(repo: &Repository, remote_name: &str) -> Result<RepoSlug, GitError> {
    let remote = repo
        .find_remote(remote_name)
        .map_err(|_| GitError::RemoteNotFound(remote_name.to_string()))?;

    let url = remote
        .url()
        .ok_or_else(|| GitError::InvalidRepositoryUrl(String::from_utf8_lossy(remote.url_bytes()).to_string()))?;

    parse_github_remote(url)
}

/// Extract owner and repo from a git remote URL.
pub fn parse_github_remote(url: &str) -> Result<RepoSlug, GitError> {
    // SSH format: git@github.com:owner/repo.git
    if let Some(path) = url.strip_prefix("git@github.com:") {
        return parse_owner_repo_path(url, path);
    }

    // HTTPS or ssh:// format: https://github.com/owner/repo.git
    if let Some((_, path)) = url.split_once("github.com/") {
        return parse_owner_repo_path(url, path);
    }

    Err(GitError::InvalidRepositoryUrl(url.to_string()))
}

fn parse_owner_repo_path(url: &str, path: &str) -> Result<RepoSlug, GitError> {
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let parts: Vec<&str> = path.split('/').collect();

    match parts.as_slice() {
        [owner, name, ..] if !owner.is_empty() && !name.is_empty() => Ok(RepoSlug::new(*owner, *name)),
        _ => Err(GitError::InvalidRepositoryUrl(url.to_string())),
    }
}
