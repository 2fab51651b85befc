use std::path::{Path, PathBuf};

use git2::{BranchType, ObjectType, Oid, Repository, Signature, Sort};

use crate::error::StoreError;
use crate::model::{BlobObject, CommitInfo, ObjectKind, RefInfo, TreeEntry, TreeObject, TreeOrBlob};

use super::{ObjectStore, StoreObject};

const FALLBACK_BRANCH: &str = "master";

/// Object store backed by an on-disk git repository
pub struct GitStore {
    repo: Repository,
    path: PathBuf,
}

impl GitStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let repo = Repository::open(&path)
            .map_err(|e| not_found_or(e, || format!("repository at {}", path.display())))?;
        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn find_commit(&self, commit: &CommitInfo) -> Result<git2::Commit<'_>, StoreError> {
        self.repo
            .find_commit(commit.id)
            .map_err(|e| not_found_or(e, || format!("commit {}", commit.id)))
    }

    /// Whether `commit` changes `path` compared to every one of its parents
    fn touches(&self, commit: &git2::Commit<'_>, path: &str) -> Result<bool, StoreError> {
        let current = entry_id(&commit.tree()?, path);
        if commit.parent_count() == 0 {
            return Ok(current.is_some());
        }
        for parent in commit.parents() {
            if entry_id(&parent.tree()?, path) == current {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl ObjectStore for GitStore {
    fn default_branch(&self) -> Result<String, StoreError> {
        let head = match self.repo.find_reference("HEAD") {
            Ok(head) => head,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(FALLBACK_BRANCH.to_string()),
            Err(e) => return Err(e.into()),
        };
        let branch = head
            .symbolic_target()
            .and_then(|target| target.strip_prefix("refs/heads/"))
            .unwrap_or(FALLBACK_BRANCH);
        Ok(branch.to_string())
    }

    fn resolve_branch_or_commit(&self, identifier: &str) -> Result<(StoreObject, bool), StoreError> {
        match self.repo.find_branch(identifier, BranchType::Local) {
            Ok(branch) => {
                if let Some(oid) = branch.get().target() {
                    let object = self.repo.find_object(oid, None)?;
                    return Ok((store_object(object), true));
                }
            }
            Err(e) if is_unresolvable(&e) => {}
            Err(e) => return Err(e.into()),
        }

        match self.repo.revparse_single(identifier) {
            Ok(object) => Ok((store_object(object), false)),
            Err(e) if is_unresolvable(&e) => Err(StoreError::NotFound(format!("revision {}", identifier))),
            Err(e) => Err(e.into()),
        }
    }

    fn tree_or_blob(&self, commit: &CommitInfo, path: &str) -> Result<TreeOrBlob, StoreError> {
        let tree = self.find_commit(commit)?.tree()?;
        if path.is_empty() {
            return Ok(TreeOrBlob::Tree(tree_object(&tree)));
        }

        let missing = || format!("path {}", path);
        let entry = tree
            .get_path(Path::new(path))
            .map_err(|e| not_found_or(e, missing))?;
        let object = entry
            .to_object(&self.repo)
            .map_err(|e| not_found_or(e, missing))?;

        if let Some(tree) = object.as_tree() {
            Ok(TreeOrBlob::Tree(tree_object(tree)))
        } else if let Some(blob) = object.as_blob() {
            Ok(TreeOrBlob::Blob(BlobObject {
                id: blob.id(),
                data: blob.content().to_vec(),
            }))
        } else {
            Err(StoreError::NotFound(missing()))
        }
    }

    fn branch_names(&self, exclude: &[&str]) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for branch in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                if !exclude.contains(&name) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn refs(&self) -> Result<Vec<RefInfo>, StoreError> {
        let mut refs = Vec::new();
        for reference in self.repo.references()? {
            let reference = reference?;
            refs.push(RefInfo {
                name: String::from_utf8_lossy(reference.name_bytes()).into_owned(),
                commit_time: reference.peel_to_commit().ok().map(|c| c.time().seconds()),
            });
        }
        Ok(refs)
    }

    fn history(
        &self,
        commit: &CommitInfo,
        path: &str,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<CommitInfo>, StoreError> {
        let mut commits = Vec::with_capacity(limit);
        if limit == 0 {
            return Ok(commits);
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(commit.id)?;
        revwalk.set_sorting(Sort::TIME)?;

        let mut skipped = 0;
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            if !path.is_empty() && !self.touches(&commit, path)? {
                continue;
            }
            if skipped < skip {
                skipped += 1;
                continue;
            }
            commits.push(commit_info(&commit));
            if commits.len() >= limit {
                break;
            }
        }
        Ok(commits)
    }
}

fn not_found_or(err: git2::Error, what: impl FnOnce() -> String) -> StoreError {
    if err.code() == git2::ErrorCode::NotFound {
        StoreError::NotFound(what())
    } else {
        StoreError::Git(err)
    }
}

/// Revision lookups that fail because the name resolves to nothing
fn is_unresolvable(err: &git2::Error) -> bool {
    matches!(
        err.code(),
        git2::ErrorCode::NotFound | git2::ErrorCode::InvalidSpec | git2::ErrorCode::Ambiguous
    )
}

fn entry_id(tree: &git2::Tree<'_>, path: &str) -> Option<Oid> {
    tree.get_path(Path::new(path)).ok().map(|entry| entry.id())
}

fn store_object(object: git2::Object<'_>) -> StoreObject {
    match object.kind() {
        Some(ObjectType::Commit) => match object.into_commit() {
            Ok(commit) => StoreObject::Commit(commit_info(&commit)),
            Err(_) => StoreObject::Other(ObjectKind::Unknown),
        },
        Some(ObjectType::Tree) => StoreObject::Other(ObjectKind::Tree),
        Some(ObjectType::Blob) => StoreObject::Other(ObjectKind::Blob),
        Some(ObjectType::Tag) => StoreObject::Other(ObjectKind::Tag),
        _ => StoreObject::Other(ObjectKind::Unknown),
    }
}

fn tree_object(tree: &git2::Tree<'_>) -> TreeObject {
    TreeObject {
        id: tree.id(),
        entries: tree
            .iter()
            .map(|entry| TreeEntry {
                name: String::from_utf8_lossy(entry.name_bytes()).into_owned(),
                mode: entry.filemode() as u32,
                id: entry.id(),
            })
            .collect(),
    }
}

fn signature_string(sig: &Signature<'_>) -> String {
    format!(
        "{} <{}>",
        String::from_utf8_lossy(sig.name_bytes()),
        String::from_utf8_lossy(sig.email_bytes())
    )
}

fn commit_info(commit: &git2::Commit<'_>) -> CommitInfo {
    CommitInfo {
        id: commit.id(),
        tree_id: commit.tree_id(),
        time: commit.time().seconds(),
        author: signature_string(&commit.author()),
        message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
        parents: commit.parent_ids().collect(),
    }
}
