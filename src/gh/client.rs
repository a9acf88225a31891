//! GitHub queries and pull request creation through the gh CLI.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::GhError;
use crate::pr::Commit;

use super::subprocess::{DefaultExecutor, GhExecutor};
use super::types::{
    CreatePullRequestParams, CreatedPullRequest, PullRequestSummary, Repo, RepoDetail, RepoSlug,
};

/// jq projection applied to the compare API response.
const COMPARE_COMMITS_JQ: &str =
    "[.commits[] | {sha: .sha, message: .commit.message, author: .commit.author.name}]";

/// Source of repository metadata.
#[async_trait]
pub trait RepositoryInfoFetcher: Send + Sync {
    async fn repository_detail(&self, repo: &RepoSlug) -> Result<RepoDetail, GhError>;

    /// Login of the authenticated user.
    async fn current_user_login(&self) -> Result<String, GhError>;
}

/// Source of the commits between two branches.
#[async_trait]
pub trait CommitFetcher: Send + Sync {
    async fn branch_commits(
        &self,
        repo: &RepoSlug,
        base: &str,
        head: &str,
    ) -> Result<Vec<Commit>, GhError>;
}

/// Creates pull requests.
#[async_trait]
pub trait PullRequestCreator: Send + Sync {
    async fn create_pull_request(
        &self,
        repo: &RepoSlug,
        params: &CreatePullRequestParams,
    ) -> Result<CreatedPullRequest, GhError>;
}

/// Client over a [`GhExecutor`].
pub struct GhClient<E: GhExecutor = DefaultExecutor> {
    executor: E,
}

impl<E: GhExecutor> GhClient<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Repositories of an organisation or user.
    pub async fn list_repositories(&self, owner: &str, limit: usize) -> Result<Vec<Repo>, GhError> {
        let args = to_args(&[
            "repo",
            "list",
            owner,
            "--limit",
            &limit.to_string(),
            "--json",
            "id,name,owner",
        ]);
        let output = self.executor.run(args).await?;
        parse_json("repo list", &output)
    }

    /// Open pull requests of a repository.
    pub async fn list_pull_requests(
        &self,
        repo: &RepoSlug,
        limit: usize,
    ) -> Result<Vec<PullRequestSummary>, GhError> {
        let args = to_args(&[
            "pr",
            "list",
            "--repo",
            &repo.to_string(),
            "--limit",
            &limit.to_string(),
            "--json",
            "number,title,url,author",
        ]);
        let output = self.executor.run(args).await?;
        parse_json("pr list", &output)
    }
}

#[async_trait]
impl<E: GhExecutor> RepositoryInfoFetcher for GhClient<E> {
    async fn repository_detail(&self, repo: &RepoSlug) -> Result<RepoDetail, GhError> {
        let args = to_args(&[
            "repo",
            "view",
            &repo.to_string(),
            "--json",
            "name,owner,assignableUsers,defaultBranchRef",
        ]);
        let output = self.executor.run(args).await?;
        parse_json("repo view", &output)
    }

    async fn current_user_login(&self) -> Result<String, GhError> {
        let output = self
            .executor
            .run(to_args(&["api", "user", "--jq", ".login"]))
            .await?;
        Ok(output.trim().to_string())
    }
}

#[async_trait]
impl<E: GhExecutor> CommitFetcher for GhClient<E> {
    async fn branch_commits(
        &self,
        repo: &RepoSlug,
        base: &str,
        head: &str,
    ) -> Result<Vec<Commit>, GhError> {
        let endpoint = format!(
            "repos/{}/{}/compare/{}...{}",
            repo.owner,
            repo.name,
            encode_ref(base),
            encode_ref(head)
        );
        let output = self
            .executor
            .run(to_args(&["api", &endpoint, "--jq", COMPARE_COMMITS_JQ]))
            .await?;
        let commits: Vec<Commit> = parse_json("api compare", &output)?;
        debug!("{} commits between {} and {}", commits.len(), base, head);
        Ok(commits)
    }
}

#[async_trait]
impl<E: GhExecutor> PullRequestCreator for GhClient<E> {
    /// Base branch, head branch and title are required; validation happens
    /// before gh is invoked.
    async fn create_pull_request(
        &self,
        repo: &RepoSlug,
        params: &CreatePullRequestParams,
    ) -> Result<CreatedPullRequest, GhError> {
        let args = create_pull_request_args(repo, params)?;
        let output = self.executor.run(args).await?;
        let created = parse_created_pull_request(&output)?;
        info!("Created pull request {}", created.url);
        Ok(created)
    }
}

/// Percent-encode a ref for use in an API path. `/` is kept as a separator.
fn encode_ref(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// Build the `gh pr create` argument vector.
pub fn create_pull_request_args(
    repo: &RepoSlug,
    params: &CreatePullRequestParams,
) -> Result<Vec<String>, GhError> {
    if params.base_branch.is_empty() || params.head_branch.is_empty() || params.title.is_empty() {
        return Err(GhError::InvalidPullRequest(
            "base branch, head branch, and title are required".to_string(),
        ));
    }

    let mut args = to_args(&[
        "pr",
        "create",
        "--repo",
        &repo.to_string(),
        "--base",
        &params.base_branch,
        "--head",
        &params.head_branch,
        "--title",
        &params.title,
    ]);

    if !params.body.is_empty() {
        args.push("--body".to_string());
        args.push(params.body.clone());
    }

    if params.is_draft {
        args.push("--draft".to_string());
    }

    if !params.reviewers.is_empty() {
        args.push("--reviewer".to_string());
        args.push(params.reviewers.join(","));
    }

    Ok(args)
}

/// Extract the pull request URL (and number) that `gh pr create` prints.
fn parse_created_pull_request(output: &str) -> Result<CreatedPullRequest, GhError> {
    let url = output
        .lines()
        .map(str::trim)
        .rev()
        .find(|line| line.starts_with("https://") || line.starts_with("http://"))
        .ok_or_else(|| GhError::MissingPullRequestUrl(output.trim().to_string()))?;

    let number = url
        .rsplit_once("/pull/")
        .and_then(|(_, tail)| tail.trim_end_matches('/').parse::<u64>().ok());

    Ok(CreatedPullRequest {
        url: url.to_string(),
        number,
    })
}

fn parse_json<T: DeserializeOwned>(command: &str, output: &str) -> Result<T, GhError> {
    serde_json::from_str(output).map_err(|e| GhError::InvalidJson {
        command: command.to_string(),
        message: e.to_string(),
    })
}

fn to_args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
