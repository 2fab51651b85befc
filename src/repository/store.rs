use crate::error::StoreError;
use crate::model::{CommitInfo, ObjectKind, RefInfo, TreeOrBlob};

/// What a branch name or revision resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreObject {
    Commit(CommitInfo),
    /// Any other object, e.g. an annotated tag or a blob id
    Other(ObjectKind),
}

/// Read-only access to a version-controlled object store.
///
/// Implementations answer queries against immutable snapshots; none of
/// the operations mutate the store.
pub trait ObjectStore {
    /// Name of the branch `HEAD` points at
    fn default_branch(&self) -> Result<String, StoreError>;

    /// Look `identifier` up as a local branch first, then as a revision.
    /// The flag is true when it named a branch.
    fn resolve_branch_or_commit(&self, identifier: &str) -> Result<(StoreObject, bool), StoreError>;

    /// Object at `path` in the commit's snapshot; `""` is the root tree
    fn tree_or_blob(&self, commit: &CommitInfo, path: &str) -> Result<TreeOrBlob, StoreError>;

    /// Sorted local branch names, leaving out `exclude`
    fn branch_names(&self, exclude: &[&str]) -> Result<Vec<String>, StoreError>;

    /// Every ref with the commit time it peels to
    fn refs(&self) -> Result<Vec<RefInfo>, StoreError>;

    /// Ancestors of `commit` (itself included), newest first, limited to
    /// commits that change `path` when it is non-empty
    fn history(
        &self,
        commit: &CommitInfo,
        path: &str,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<CommitInfo>, StoreError>;
}
