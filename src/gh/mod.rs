//! GitHub access through the gh CLI.

pub mod client;
pub mod fanout;
pub mod subprocess;
pub mod types;

pub use client::{
    CommitFetcher, GhClient, PullRequestCreator, RepositoryInfoFetcher, create_pull_request_args,
};
pub use fanout::{DetailOutcome, fetch_repository_details};
pub use subprocess::{DefaultExecutor, GhExecutor, check_gh_installed, run_gh};
pub use types::{
    AssignableUser, CreatePullRequestParams, CreatedPullRequest, DefaultBranchRef,
    PullRequestAuthor, PullRequestSummary, Repo, RepoDetail, RepoOwner, RepoSlug,
};
