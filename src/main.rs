//! prdraft - CLI entry point.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use prdraft::config::Settings;
use prdraft::gh::{
    CommitFetcher, DefaultExecutor, GhClient, RepoSlug, check_gh_installed,
    fetch_repository_details,
};
use prdraft::git::{self, latest_branches, origin_slug};
use prdraft::pr::{CommitPolicy, derive_pull_request_content_with, split_summary_and_description};
use prdraft::telemetry::{default_level, init_tracing};
use prdraft::wizard::{TerminalPrompter, WizardConfig, WizardOutcome, run_wizard};

/// Scaffold GitHub pull requests from branch commits.
#[derive(Parser, Debug)]
#[command(name = "prdraft")]
#[command(about = "Scaffold GitHub pull requests from branch commits")]
#[command(version)]
struct Cli {
    /// Repository as owner/name (defaults to the origin remote)
    #[arg(long, global = true)]
    repo: Option<RepoSlug>,

    /// Issue tracker host used for reference links
    #[arg(long, global = true)]
    tracker_host: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List repositories of an organisation and their assignable users
    Repos {
        /// Organisation or user login
        owner: String,

        /// Maximum number of repositories
        #[arg(long, default_value_t = 5)]
        limit: usize,

        /// Number of repositories fetched at once
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// List open pull requests
    Pulls {
        /// Maximum number of pull requests
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// List local branches, most recent first
    Branches,

    /// Show the summary and description of each commit between two branches
    Commits(RangeArgs),

    /// Print the derived pull request title and body
    Draft {
        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Create a pull request interactively
    Create {
        #[command(flatten)]
        policy: PolicyArgs,
    },
}

#[derive(Args, Debug)]
struct RangeArgs {
    /// Base branch
    #[arg(long)]
    base: String,

    /// Head branch
    #[arg(long)]
    head: String,
}

#[derive(Args, Debug)]
struct PolicyArgs {
    /// Link the issue references of every commit, not only the first
    #[arg(long)]
    aggregate_references: bool,
}

impl PolicyArgs {
    fn policy(&self) -> CommitPolicy {
        if self.aggregate_references {
            CommitPolicy::AggregateReferences
        } else {
            CommitPolicy::FirstCommit
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(default_level(cli.verbose));

    let concurrency = match &cli.command {
        Command::Repos { concurrency, .. } => *concurrency,
        _ => None,
    };
    let settings = Settings::from_env()
        .with_tracker_host(cli.tracker_host.clone())
        .with_concurrency(concurrency);

    if !matches!(cli.command, Command::Branches) {
        check_gh_installed()
            .await
            .context("GitHub CLI is required")?;
    }

    let client = GhClient::new(DefaultExecutor::new(settings.gh_timeout));

    match cli.command {
        Command::Repos { ref owner, limit, .. } => list_repos(client, owner, limit, &settings).await,
        Command::Pulls { limit } => {
            let repo = resolve_repo(cli.repo)?;
            let prs = client
                .list_pull_requests(&repo, limit)
                .await
                .context("Failed to list pull requests")?;
            for pr in prs {
                println!("#{} {} {}", pr.number, pr.title, pr.url);
            }
            Ok(())
        }
        Command::Branches => {
            let repo = git::open_current().context("Not a git repository")?;
            for branch in latest_branches(&repo).context("Failed to list branches")? {
                let short = &branch.commit[..7.min(branch.commit.len())];
                println!("{}  {}  {}", branch.date.format("%Y-%m-%d %H:%M"), short, branch.name);
            }
            Ok(())
        }
        Command::Commits(range) => {
            let repo = resolve_repo(cli.repo)?;
            let commits = client
                .branch_commits(&repo, &range.base, &range.head)
                .await
                .context("Failed to fetch branch commits")?;
            for commit in commits {
                let (summary, description) = split_summary_and_description(&commit.message);
                println!("{}", serde_json::to_string(&summary)?);
                println!("{}", serde_json::to_string(&description)?);
            }
            Ok(())
        }
        Command::Draft { range, policy } => {
            let repo = resolve_repo(cli.repo)?;
            let commits = client
                .branch_commits(&repo, &range.base, &range.head)
                .await
                .context("Failed to fetch branch commits")?;
            let content =
                derive_pull_request_content_with(&commits, &settings.tracker_host, policy.policy());
            println!("{}\n", content.title);
            print!("{}", content.body);
            Ok(())
        }
        Command::Create { policy } => {
            let local = git::open_current().context("Not a git repository")?;
            let repo = match cli.repo {
                Some(repo) => repo,
                None => origin_slug(&local).context("Could not determine the GitHub repository")?,
            };
            let branches = latest_branches(&local).context("Failed to list branches")?;

            let config = WizardConfig {
                repo,
                tracker_host: settings.tracker_host.clone(),
                policy: policy.policy(),
            };

            match run_wizard(&client, &TerminalPrompter, &branches, &config)
                .await
                .context("Failed to create pull request")?
            {
                WizardOutcome::Created(pr) => println!("✓ Created {}", pr.url),
                WizardOutcome::Aborted => println!("Aborted"),
            }
            Ok(())
        }
    }
}

/// Print repositories, then their assignable users fetched concurrently.
async fn list_repos(
    client: GhClient<DefaultExecutor>,
    owner: &str,
    limit: usize,
    settings: &Settings,
) -> Result<()> {
    let repos = client
        .list_repositories(owner, limit)
        .await
        .context("Failed to list repositories")?;

    let slugs: Vec<RepoSlug> = repos.iter().map(|r| r.slug()).collect();
    for slug in &slugs {
        println!("Repository Name: {slug}");
    }

    let outcomes = fetch_repository_details(Arc::new(client), slugs, settings.concurrency).await;
    for outcome in outcomes {
        match outcome.result {
            Ok(detail) => {
                for user in detail.assignable_users {
                    println!("User ID: {}, Login: {}, Name: {}", user.id, user.login, user.name);
                }
            }
            Err(e) => warn!("Skipping {}: {}", outcome.repo, e),
        }
    }

    Ok(())
}

/// Use `--repo` if given, otherwise the origin remote of the current repository.
fn resolve_repo(repo: Option<RepoSlug>) -> Result<RepoSlug> {
    if let Some(repo) = repo {
        return Ok(repo);
    }
    let local = git::open_current().context("Not a git repository; pass --repo owner/name")?;
    origin_slug(&local).context("Could not determine the GitHub repository from origin")
}
