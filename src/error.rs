//! Error types for prdraft modules using thiserror.

use thiserror::Error;

/// Errors from GitHub CLI operations.
#[derive(Error, Debug)]
pub enum GhError {
    #[error("GitHub CLI (gh) not found. Install from https://cli.github.com and run 'gh auth login'")]
    NotInstalled,

    #[error("Failed to spawn gh process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("gh process timed out after {0} seconds")]
    Timeout(u64),

    #[error("gh exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("gh {command} returned invalid JSON: {message}")]
    InvalidJson { command: String, message: String },

    #[error("Invalid repository '{0}': expected owner/name")]
    InvalidRepository(String),

    #[error("Invalid pull request: {0}")]
    InvalidPullRequest(String),

    #[error("gh pr create did not print a pull request URL: {0}")]
    MissingPullRequestUrl(String),

    #[error("Fetch task failed: {0}")]
    TaskFailed(String),
}

/// Errors from local git repository operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to list branches: {0}")]
    ListBranches(#[source] git2::Error),

    #[error("Branch '{0}' does not point to a commit: {1}")]
    BranchTarget(String, #[source] git2::Error),

    #[error("No '{0}' remote found")]
    RemoteNotFound(String),

    #[error("Failed to parse GitHub repository from remote URL '{0}'")]
    InvalidRepositoryUrl(String),
}

/// Errors from the interactive pull request wizard.
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("No branch other than the default branch '{0}' is available as head")]
    NoHeadBranch(String),

    #[error("Pull request title must not be empty")]
    EmptyTitle,

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Gh(#[from] GhError),
}

/// Errors from bank account operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccountError {
    #[error("Cannot withdraw {requested}: balance is only {balance}")]
    InsufficientFunds { balance: u64, requested: u64 },

    #[error("Deposit of {0} would overflow the balance")]
    Overflow(u64),
}

/// Errors from dictionary operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("Could not find the word '{0}'")]
    NotFound(String),

    #[error("Cannot add '{0}' because it already exists")]
    WordExists(String),
}
