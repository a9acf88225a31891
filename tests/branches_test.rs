//! Integration tests for local branch listing and remote detection.

mod common;

use common::TestRepo;
use prdraft::error::GitError;
use prdraft::gh::RepoSlug;
use prdraft::git::{latest_branches, origin_slug, remote_slug};

#[test]
fn test_branches_sorted_newest_first() {
    let test_repo = TestRepo::new();

    let oldest = test_repo.commit_at("Initial commit", 1_700_000_000);
    test_repo.branch("feat/KPC-1/old", oldest);

    let middle = test_repo.commit_at("KPC-2 middle", 1_700_000_100);
    test_repo.branch("feat/KPC-2/middle", middle);

    // main is at the newest commit
    test_repo.commit_at("KPC-3 newest", 1_700_000_200);

    let branches = latest_branches(&test_repo.repo).expect("Failed to list branches");
    let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["main", "feat/KPC-2/middle", "feat/KPC-1/old"]);
}

#[test]
fn test_branch_carries_commit_and_author_date() {
    let test_repo = TestRepo::new();
    let oid = test_repo.commit_at("Initial commit", 1_700_000_000);

    let branches = latest_branches(&test_repo.repo).expect("Failed to list branches");
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0].commit, oid.to_string());
    assert_eq!(branches[0].date.timestamp(), 1_700_000_000);
}

#[test]
fn test_branches_ordered_by_committer_date_not_author_date() {
    let test_repo = TestRepo::new();

    // Authored late, committed early (e.g. rebased long ago)
    let rebased = test_repo.commit_with_times("KPC-1 rebased", 1_700_000_900, 1_700_000_000);
    test_repo.branch("feat/KPC-1/rebased", rebased);

    // main: authored early, committed late
    test_repo.commit_with_times("KPC-2 cherry-picked", 1_700_000_100, 1_700_000_300);

    let branches = latest_branches(&test_repo.repo).expect("Failed to list branches");
    let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["main", "feat/KPC-1/rebased"]);

    assert_eq!(branches[0].date.timestamp(), 1_700_000_100);
    assert_eq!(branches[1].date.timestamp(), 1_700_000_900);
}

#[test]
fn test_same_commit_time_orders_by_name() {
    let test_repo = TestRepo::new();
    let oid = test_repo.commit_at("Initial commit", 1_700_000_000);
    test_repo.branch("zeta", oid);
    test_repo.branch("alpha", oid);

    let branches = latest_branches(&test_repo.repo).expect("Failed to list branches");
    let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["alpha", "main", "zeta"]);
}

#[test]
fn test_empty_repository_has_no_branches() {
    let test_repo = TestRepo::new();
    let branches = latest_branches(&test_repo.repo).expect("Failed to list branches");
    assert!(branches.is_empty());
}

#[test]
fn test_origin_slug_from_ssh_remote() {
    let test_repo = TestRepo::new();
    test_repo.remote("origin", "git@github.com:coding-for-fun-org/frontend.git");

    let slug = origin_slug(&test_repo.repo).expect("Failed to read origin");
    assert_eq!(slug, RepoSlug::new("coding-for-fun-org", "frontend"));
}

#[test]
fn test_named_remote() {
    let test_repo = TestRepo::new();
    test_repo.remote("upstream", "https://github.com/owner/repo");

    let slug = remote_slug(&test_repo.repo, "upstream").expect("Failed to read upstream");
    assert_eq!(slug.to_string(), "owner/repo");
}

#[test]
fn test_missing_origin() {
    let test_repo = TestRepo::new();
    let err = origin_slug(&test_repo.repo).unwrap_err();
    assert!(matches!(err, GitError::RemoteNotFound(ref name) if name == "origin"));
}

#[test]
fn test_non_github_origin() {
    let test_repo = TestRepo::new();
    test_repo.remote("origin", "https://gitlab.com/owner/repo.git");
    let err = origin_slug(&test_repo.repo).unwrap_err();
    assert!(matches!(err, GitError::InvalidRepositoryUrl(_)));
}
