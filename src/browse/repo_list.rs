use tracing::warn;

use crate::error::{BrowseError, Result};
use crate::repository::{RepoRegistry, Repository};

use super::store_error;

/// How the repository overview is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepoOrder {
    #[default]
    Name,
    /// Most recently updated first
    LastUpdate,
}

impl RepoOrder {
    pub fn toggled(self) -> Self {
        match self {
            RepoOrder::Name => RepoOrder::LastUpdate,
            RepoOrder::LastUpdate => RepoOrder::Name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSummary {
    pub name: String,
    /// Newest commit time over all refs
    pub last_update: i64,
}

/// Summary of one repository; none when no ref points at a commit
pub fn summarize_repository(repo: &Repository) -> Result<Option<RepoSummary>> {
    let refs = repo
        .store()
        .refs()
        .map_err(|e| store_error(e, || BrowseError::NoSuchRepository(repo.name().to_string())))?;
    Ok(refs
        .iter()
        .filter_map(|r| r.commit_time)
        .max()
        .map(|last_update| RepoSummary {
            name: repo.name().to_string(),
            last_update,
        }))
}

/// Summaries of every registered repository.
///
/// Repositories that cannot be opened are skipped with a warning.
pub fn list_repositories(registry: &RepoRegistry, order: RepoOrder) -> Vec<RepoSummary> {
    let mut summaries = Vec::with_capacity(registry.len());
    for name in registry.names() {
        let summary = registry.open(name).and_then(|repo| summarize_repository(&repo));
        match summary {
            Ok(Some(summary)) => summaries.push(summary),
            Ok(None) => {}
            Err(e) => warn!(repo = name, error = %e, "skipping repository"),
        }
    }
    sort_summaries(&mut summaries, order);
    summaries
}

pub fn sort_summaries(summaries: &mut [RepoSummary], order: RepoOrder) {
    match order {
        RepoOrder::Name => summaries.sort_by(|a, b| a.name.cmp(&b.name)),
        RepoOrder::LastUpdate => summaries.sort_by(|a, b| b.last_update.cmp(&a.last_update)),
    }
}
