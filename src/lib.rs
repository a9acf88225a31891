//! prdraft - A CLI tool that scaffolds GitHub pull requests from branch commits.
//!
//! # Overview
//!
//! prdraft reads the commits between two branches through the GitHub CLI,
//! derives a pull request title and body with links to the issue references
//! found in the commit messages, and can walk the user through creating the
//! pull request interactively.

pub mod accounts;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod gh;
pub mod git;
pub mod pr;
pub mod telemetry;
pub mod wizard;

// Re-export commonly used types
pub use config::Settings;
pub use error::{AccountError, DictionaryError, GhError, GitError, WizardError};
pub use gh::{GhClient, RepoSlug};
pub use pr::{Commit, CommitPolicy, PrContent, derive_pull_request_content, split_summary_and_description};
