use tracing::debug;

use crate::error::{BrowseError, Result};
use crate::model::{BlobObject, CommitInfo, TreeObject, TreeOrBlob};
use crate::repository::Repository;
use crate::util::{normalize_path, parent_path};

use super::store_error;

/// What the requested path addressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Directory,
    File(BlobObject),
}

/// A path resolved inside a commit's snapshot.
///
/// `effective_root` is always a directory of the commit: the requested
/// path itself, or the file's parent when the request named a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub commit: CommitInfo,
    pub requested_path: String,
    pub effective_root: String,
    /// Tree at `effective_root`
    pub tree: TreeObject,
    pub target: Target,
}

impl ResolvedLocation {
    pub fn is_file(&self) -> bool {
        matches!(self.target, Target::File(_))
    }
}

pub fn resolve_path(repo: &Repository, commit: &CommitInfo, requested: &str) -> Result<ResolvedLocation> {
    let requested = normalize_path(requested);
    let lookup = |path: &str| {
        repo.store()
            .tree_or_blob(commit, path)
            .map_err(|e| store_error(e, || no_path(commit, path)))
    };

    let (effective_root, tree, target) = match lookup(requested)? {
        TreeOrBlob::Tree(tree) => (requested, tree, Target::Directory),
        TreeOrBlob::Blob(blob) => {
            let parent = parent_path(requested);
            debug!(path = requested, parent, "path names a file, listing its directory");
            match lookup(parent)? {
                TreeOrBlob::Tree(tree) => (parent, tree, Target::File(blob)),
                TreeOrBlob::Blob(_) => return Err(no_path(commit, parent)),
            }
        }
    };

    Ok(ResolvedLocation {
        commit: commit.clone(),
        requested_path: requested.to_string(),
        effective_root: effective_root.to_string(),
        tree,
        target,
    })
}

fn no_path(commit: &CommitInfo, path: &str) -> BrowseError {
    BrowseError::NoSuchPath {
        commit: commit.id_hex(),
        path: path.to_string(),
    }
}
