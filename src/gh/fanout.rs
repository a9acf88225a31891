//! Bounded concurrent fetching of repository details.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::GhError;

use super::client::RepositoryInfoFetcher;
use super::types::{RepoDetail, RepoSlug};

/// Outcome of fetching one repository.
#[derive(Debug)]
pub struct DetailOutcome {
    pub repo: RepoSlug,
    pub result: Result<RepoDetail, GhError>,
}

/// Fetch details for every repository, at most `concurrency` at a time.
///
/// Results come back in the order of `repos`. A failed fetch is reported in
/// its own outcome and does not stop the others. Dropping the returned
/// future aborts any fetch still in flight.
pub async fn fetch_repository_details<F>(
    fetcher: Arc<F>,
    repos: Vec<RepoSlug>,
    concurrency: usize,
) -> Vec<DetailOutcome>
where
    F: RepositoryInfoFetcher + 'static,
{
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for (index, repo) in repos.iter().cloned().enumerate() {
        let fetcher = Arc::clone(&fetcher);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let result = match permits.acquire_owned().await {
                Ok(_permit) => fetcher.repository_detail(&repo).await,
                Err(e) => Err(GhError::TaskFailed(e.to_string())),
            };
            (index, result)
        });
    }

    let mut slots: Vec<Option<Result<RepoDetail, GhError>>> =
        std::iter::repeat_with(|| None).take(repos.len()).collect();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => {
                if let Err(ref e) = result {
                    warn!("Failed to fetch details for {}: {}", repos[index], e);
                }
                slots[index] = Some(result);
            }
            Err(e) => warn!("Repository detail task failed: {}", e),
        }
    }

    debug!("Fetched details for {} repositories", repos.len());

    repos
        .into_iter()
        .zip(slots)
        .map(|(repo, slot)| DetailOutcome {
            repo,
            result: slot.unwrap_or_else(|| Err(GhError::TaskFailed("task did not complete".to_string()))),
        })
        .collect()
}
