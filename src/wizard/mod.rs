//! Interactive pull request creation.
//!
//! Walks the user through head/base branch selection, pre-fills the title
//! and body from the branch commits, asks for the draft flag and reviewers,
//! then creates the pull request through gh.

pub mod options;
pub mod prompter;

use tracing::{debug, info};

use crate::error::WizardError;
use crate::gh::{
    CommitFetcher, CreatePullRequestParams, CreatedPullRequest, PullRequestCreator, RepoSlug,
    RepositoryInfoFetcher,
};
use crate::git::Branch;
use crate::pr::{CommitPolicy, derive_pull_request_content_with};

pub use options::{ReviewerOption, base_branch_options, head_branch_options, reviewer_options};
pub use prompter::{Prompter, TerminalPrompter};

/// Inputs the wizard needs besides the prompter.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    pub repo: RepoSlug,
    pub tracker_host: String,
    pub policy: CommitPolicy,
}

/// How the wizard ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Created(CreatedPullRequest),
    /// The user cancelled a prompt or declined the final confirmation.
    Aborted,
}

macro_rules! answered {
    ($prompt:expr) => {
        match $prompt? {
            Some(answer) => answer,
            None => {
                debug!("Prompt cancelled");
                return Ok(WizardOutcome::Aborted);
            }
        }
    };
}

/// Run the wizard against `branches` (newest first) of the local repository.
pub async fn run_wizard<C, P>(
    client: &C,
    prompter: &P,
    branches: &[Branch],
    config: &WizardConfig,
) -> Result<WizardOutcome, WizardError>
where
    C: RepositoryInfoFetcher + CommitFetcher + PullRequestCreator,
    P: Prompter,
{
    info!("Loading base information for {}", config.repo);
    let detail = client.repository_detail(&config.repo).await?;
    let default_branch = detail.default_branch().to_string();

    let heads = head_branch_options(branches, &default_branch);
    if heads.is_empty() {
        return Err(WizardError::NoHeadBranch(default_branch));
    }
    let head_index = answered!(prompter.select("Select the head branch", &heads, 0));
    let head_branch = pick(&heads, head_index)?;

    let bases = base_branch_options(branches, &default_branch, &head_branch);
    let base_index = answered!(prompter.select("Select the base branch", &bases, 0));
    let base_branch = pick(&bases, base_index)?;

    info!("Loading commits {}...{}", base_branch, head_branch);
    let commits = client
        .branch_commits(&config.repo, &base_branch, &head_branch)
        .await?;
    let content = derive_pull_request_content_with(&commits, &config.tracker_host, config.policy);

    let title = prompter.input("Title", &content.title)?.trim().to_string();
    if title.is_empty() {
        return Err(WizardError::EmptyTitle);
    }

    let body = prompter.edit("Body", &content.body)?.unwrap_or(content.body);

    let is_draft = answered!(prompter.confirm("Create as draft?", false));

    let my_login = client.current_user_login().await?;
    let reviewers = reviewer_options(&detail.assignable_users, &my_login);
    let labels: Vec<String> = reviewers.iter().map(|r| r.label.clone()).collect();
    let picked = answered!(prompter.multi_select("Select reviewers", &labels));
    let reviewers: Vec<String> = picked
        .into_iter()
        .filter_map(|i| reviewers.get(i).map(|r| r.login.clone()))
        .collect();

    let submit = answered!(prompter.confirm(
        &format!("Create pull request '{title}' ({head_branch} -> {base_branch})?"),
        true,
    ));
    if !submit {
        return Ok(WizardOutcome::Aborted);
    }

    let params = CreatePullRequestParams {
        base_branch,
        head_branch,
        title,
        body,
        reviewers,
        is_draft,
    };
    let created = client.create_pull_request(&config.repo, &params).await?;
    Ok(WizardOutcome::Created(created))
}

fn pick(items: &[String], index: usize) -> Result<String, WizardError> {
    items
        .get(index)
        .cloned()
        .ok_or_else(|| WizardError::Prompt(format!("selection {index} is out of range")))
}
