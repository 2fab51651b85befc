use tracing::debug;

use crate::error::{BrowseError, Result};
use crate::model::CommitInfo;
use crate::repository::{Repository, StoreObject};

use super::store_error;

/// A commit identifier resolved against a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRef {
    /// The identifier actually looked up (the default branch when none was given)
    pub identifier: String,
    pub commit: CommitInfo,
    /// True when the identifier named a branch rather than a fixed commit
    pub is_branch: bool,
}

/// Resolve a branch name or commit id to a commit.
///
/// An absent or empty identifier means the repository's default branch.
/// Identifiers that resolve to something other than a commit (an annotated
/// tag, a tree or blob id) are reported as a missing commit.
pub fn resolve_ref(repo: &Repository, identifier: Option<&str>) -> Result<ResolvedRef> {
    let store = repo.store();
    let identifier = match identifier.filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => store.default_branch().map_err(|e| store_error(e, || no_commit(repo, "")))?,
    };

    match store.resolve_branch_or_commit(&identifier) {
        Ok((StoreObject::Commit(commit), is_branch)) => {
            debug!(repo = repo.name(), %identifier, commit = %commit.id, is_branch, "resolved ref");
            Ok(ResolvedRef {
                identifier,
                commit,
                is_branch,
            })
        }
        Ok((StoreObject::Other(kind), _)) => {
            debug!(repo = repo.name(), %identifier, ?kind, "ref does not point at a commit");
            Err(no_commit(repo, &identifier))
        }
        Err(e) => Err(store_error(e, || no_commit(repo, &identifier))),
    }
}

fn no_commit(repo: &Repository, identifier: &str) -> BrowseError {
    BrowseError::NoSuchCommit {
        repo: repo.name().to_string(),
        id: identifier.to_string(),
    }
}
