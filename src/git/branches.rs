//! Local branch enumeration.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use git2::{BranchType, Repository};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::GitError;

/// A local branch and the commit it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    pub name: String,
    pub commit: String,
    /// Author date of the tip commit.
    pub date: DateTime<FixedOffset>,
}

/// Local branches, most recently committed first.
///
/// Branches with a non UTF-8 name are skipped.
pub fn latest_branches(repo: &Repository) -> Result<Vec<Branch>, GitError> {
    let mut branches = Vec::new();

    for entry in repo
        .branches(Some(BranchType::Local))
        .map_err(GitError::ListBranches)?
    {
        let (branch, _) = entry.map_err(GitError::ListBranches)?;

        let name = match branch.name() {
            Ok(Some(name)) => name.to_string(),
            _ => {
                warn!("Skipping branch with non UTF-8 name");
                continue;
            }
        };

        let commit = branch
            .get()
            .peel_to_commit()
            .map_err(|e| GitError::BranchTarget(name.clone(), e))?;

        let committed_at = commit.committer().when().seconds();
        branches.push((
            committed_at,
            Branch {
                name,
                commit: commit.id().to_string(),
                date: to_datetime(commit.author().when()),
            },
        ));
    }

    branches.sort_by(|(a_time, a), (b_time, b)| b_time.cmp(a_time).then_with(|| a.name.cmp(&b.name)));

    debug!("Found {} local branches", branches.len());
    Ok(branches.into_iter().map(|(_, branch)| branch).collect())
}

fn to_datetime(time: git2::Time) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());
    offset
        .timestamp_opt(time.seconds(), 0)
        .single()
        .unwrap_or_else(|| Utc::now().with_timezone(&offset))
}
