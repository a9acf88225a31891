//! Data shapes returned by `gh ... --json`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GhError;

/// A repository identified as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoSlug {
    type Err = GhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(GhError::InvalidRepository(s.to_string())),
        }
    }
}

/// Entry of `gh repo list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub owner: RepoOwner,
}

impl Repo {
    pub fn slug(&self) -> RepoSlug {
        RepoSlug::new(&self.owner.login, &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    #[serde(default)]
    pub id: String,
    pub login: String,
}

/// Result of `gh repo view`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoDetail {
    #[serde(default)]
    pub name: String,
    pub owner: Option<RepoOwner>,
    #[serde(default)]
    pub assignable_users: Vec<AssignableUser>,
    pub default_branch_ref: DefaultBranchRef,
}

impl RepoDetail {
    pub fn default_branch(&self) -> &str {
        &self.default_branch_ref.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignableUser {
    #[serde(default)]
    pub id: String,
    pub login: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultBranchRef {
    pub name: String,
}

/// Entry of `gh pr list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestSummary {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub author: Option<PullRequestAuthor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestAuthor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub is_bot: bool,
    pub login: String,
    #[serde(default)]
    pub name: String,
}

/// Options for `gh pr create`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePullRequestParams {
    pub base_branch: String,
    pub head_branch: String,
    pub title: String,
    pub body: String,
    pub reviewers: Vec<String>,
    pub is_draft: bool,
}

/// A pull request created by `gh pr create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedPullRequest {
    pub url: String,
    pub number: Option<u64>,
}
