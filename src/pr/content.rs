//! Pull request title and body derivation from branch commits.
//!
//! Everything here is pure: no I/O, no shared state. Commits come from a
//! [`CommitFetcher`](crate::gh::CommitFetcher) and the resulting
//! [`PrContent`] is handed to the wizard or printed by the CLI.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Issue reference pattern, e.g. `KPC-3130`.
const ISSUE_REFERENCE_PATTERN: &str = r"[A-Z]+-[0-9]+";

/// Heading placed above the issue links in every derived body.
pub const LINK_HEADING: &str = "### Jira Link";

static ISSUE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ISSUE_REFERENCE_PATTERN).unwrap());

/// A commit as returned by the compare-commits query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    #[serde(default)]
    pub author: String,
}

impl Commit {
    pub fn new(sha: impl Into<String>, message: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            author: author.into(),
        }
    }
}

/// Derived pull request title and body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrContent {
    pub title: String,
    pub body: String,
}

/// How a branch with more than one commit is turned into content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommitPolicy {
    /// Only the first commit is examined; later commits contribute nothing.
    #[default]
    FirstCommit,
    /// Title from the first commit, links for the references of every commit.
    AggregateReferences,
}

/// Split a commit message into summary and description at the first blank line.
///
/// Without a blank line the whole message is the summary and the
/// description is empty.
pub fn split_summary_and_description(message: &str) -> (String, String) {
    match message.split_once("\n\n") {
        Some((summary, description)) => (summary.to_string(), description.to_string()),
        None => (message.to_string(), String::new()),
    }
}

/// All issue references in `text`, left to right, repeats included.
pub fn extract_references(text: &str) -> Vec<String> {
    ISSUE_REFERENCE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Concatenate two reference lists, keeping only the first occurrence of each.
pub fn merge_unique(first: &[String], second: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    first
        .iter()
        .chain(second)
        .filter(|reference| seen.insert(reference.as_str()))
        .cloned()
        .collect()
}

/// Markdown link to a reference on the tracker.
pub fn reference_link(reference: &str, tracker_host: &str) -> String {
    format!("[{reference}](https://{tracker_host}/browse/{reference})")
}

/// Derive pull request content using the default [`CommitPolicy::FirstCommit`].
pub fn derive_pull_request_content(commits: &[Commit], tracker_host: &str) -> PrContent {
    derive_pull_request_content_with(commits, tracker_host, CommitPolicy::FirstCommit)
}

/// Derive pull request content from the branch commits.
///
/// A single commit keeps its description and gets the link section appended.
/// Several commits produce only the link section, populated according to
/// `policy`. No commits yield empty content.
pub fn derive_pull_request_content_with(
    commits: &[Commit],
    tracker_host: &str,
    policy: CommitPolicy,
) -> PrContent {
    let Some(first) = commits.first() else {
        return PrContent::default();
    };

    let (title, description) = split_summary_and_description(&first.message);

    if commits.len() == 1 {
        let references = commit_references(&title, &description);
        let body = format!(
            "{description}\n\n{}",
            link_section(&references, tracker_host)
        );
        return PrContent { title, body };
    }

    let references = match policy {
        CommitPolicy::FirstCommit => commit_references(&title, &description),
        CommitPolicy::AggregateReferences => {
            commits.iter().fold(Vec::new(), |acc, commit| {
                let (summary, description) = split_summary_and_description(&commit.message);
                merge_unique(&acc, &commit_references(&summary, &description))
            })
        }
    };

    PrContent {
        title,
        body: link_section(&references, tracker_host),
    }
}

fn commit_references(summary: &str, description: &str) -> Vec<String> {
    merge_unique(&extract_references(summary), &extract_references(description))
}

fn link_section(references: &[String], tracker_host: &str) -> String {
    let mut section = format!("{LINK_HEADING}\n\n");
    for reference in references {
        section.push_str(&reference_link(reference, tracker_host));
        section.push('\n');
    }
    section
}
