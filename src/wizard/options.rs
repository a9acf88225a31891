//! Choice lists shown by the wizard.

use crate::gh::AssignableUser;
use crate::git::Branch;

/// Head branch candidates: every local branch except the default branch.
pub fn head_branch_options(branches: &[Branch], default_branch: &str) -> Vec<String> {
    branches
        .iter()
        .filter(|b| b.name != default_branch)
        .map(|b| b.name.clone())
        .collect()
}

/// Base branch candidates: the default branch first, then every other
/// branch except the default and the chosen head.
pub fn base_branch_options(branches: &[Branch], default_branch: &str, head_branch: &str) -> Vec<String> {
    std::iter::once(default_branch.to_string())
        .chain(
            branches
                .iter()
                .filter(|b| b.name != default_branch && b.name != head_branch)
                .map(|b| b.name.clone()),
        )
        .collect()
}

/// A reviewer choice: display label and the login submitted to gh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerOption {
    pub label: String,
    pub login: String,
}

/// Reviewer candidates, excluding the authenticated user.
pub fn reviewer_options(users: &[AssignableUser], my_login: &str) -> Vec<ReviewerOption> {
    users
        .iter()
        .filter(|u| u.login != my_login)
        .map(|u| ReviewerOption {
            label: reviewer_label(u),
            login: u.login.clone(),
        })
        .collect()
}

/// `login (name)`, or just `login` when the user has no display name.
pub fn reviewer_label(user: &AssignableUser) -> String {
    if user.name.is_empty() {
        user.login.clone()
    } else {
        format!("{} ({})", user.login, user.name)
    }
}
