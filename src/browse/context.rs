use std::rc::Rc;

use crate::error::{BrowseError, Result};
use crate::model::CommitInfo;
use crate::repository::Repository;
use crate::util::{normalize_path, split_path, subpaths, Subpaths};

use super::{resolve_ref, store_error};

/// Everything a single request resolves up front.
///
/// Built once from `(repository, ref identifier, path)` and never changed
/// afterwards; navigating produces a new context.
#[derive(Debug, Clone)]
pub struct RequestContext {
    repo: Rc<Repository>,
    ref_id: String,
    commit: CommitInfo,
    is_branch: bool,
    branch: String,
    branches: Vec<String>,
    path: String,
}

impl RequestContext {
    pub fn new(repo: Rc<Repository>, ref_id: Option<&str>, path: &str) -> Result<Self> {
        let resolved = resolve_ref(&repo, ref_id)?;
        let store = repo.store();

        let branches = store
            .branch_names(&[resolved.identifier.as_str()])
            .map_err(|e| store_error(e, || BrowseError::NoSuchRepository(repo.name().to_string())))?;
        let branch = if resolved.is_branch {
            resolved.identifier.clone()
        } else {
            store
                .default_branch()
                .map_err(|e| store_error(e, || BrowseError::NoSuchRepository(repo.name().to_string())))?
        };

        Ok(Self {
            ref_id: resolved.identifier,
            commit: resolved.commit,
            is_branch: resolved.is_branch,
            branch,
            branches,
            path: normalize_path(path).to_string(),
            repo,
        })
    }

    /// Same repository and commit, different path
    pub fn with_path(&self, path: &str) -> Self {
        Self {
            path: normalize_path(path).to_string(),
            ..self.clone()
        }
    }

    /// Re-resolve against another branch or commit, keeping the path
    pub fn with_ref(&self, ref_id: &str) -> Result<Self> {
        Self::new(Rc::clone(&self.repo), Some(ref_id), &self.path)
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// The identifier the commit was resolved from
    pub fn ref_id(&self) -> &str {
        &self.ref_id
    }

    pub fn commit(&self) -> &CommitInfo {
        &self.commit
    }

    pub fn is_branch(&self) -> bool {
        self.is_branch
    }

    /// Branch to present as current: the ref itself when it is a branch,
    /// the repository's default branch otherwise
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// All other local branches
    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    /// Requested path, without leading or trailing slashes
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn directory(&self) -> &str {
        split_path(&self.path).0
    }

    pub fn filename(&self) -> &str {
        split_path(&self.path).1
    }

    pub fn subpaths(&self) -> Subpaths<'_> {
        subpaths(&self.path)
    }

    pub(crate) fn no_path_error(&self) -> BrowseError {
        BrowseError::NoSuchPath {
            commit: self.commit.id_hex(),
            path: self.path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    fn repo() -> Rc<Repository> {
        let mut store = MemoryStore::new();
        let first = store
            .commit_files("master", &[("docs/guide/intro.md", b"intro")], "init", 1)
            .unwrap();
        store.set_branch("stable", first);
        store.commit_files("master", &[("NEWS", b"news")], "news", 2).unwrap();
        Rc::new(Repository::new("demo", store))
    }

    #[test]
    fn test_branch_context() {
        let ctx = RequestContext::new(repo(), Some("stable"), "/docs/guide/intro.md").unwrap();
        assert!(ctx.is_branch());
        assert_eq!(ctx.ref_id(), "stable");
        assert_eq!(ctx.branch(), "stable");
        assert_eq!(ctx.branches(), ["master".to_string()]);
        assert_eq!(ctx.path(), "docs/guide/intro.md");
        assert_eq!(ctx.directory(), "docs/guide");
        assert_eq!(ctx.filename(), "intro.md");
        let crumbs: Vec<_> = ctx.subpaths().into_iter().collect();
        assert_eq!(crumbs.last(), Some(&("intro.md", "docs/guide/intro.md")));
    }

    #[test]
    fn test_commit_context_presents_default_branch() {
        let repo = repo();
        let head = RequestContext::new(Rc::clone(&repo), None, "").unwrap();
        let id = head.commit().parents[0].to_string();
        let ctx = RequestContext::new(repo, Some(&id), "").unwrap();
        assert!(!ctx.is_branch());
        assert_eq!(ctx.branch(), "master");
        assert_eq!(ctx.branches(), ["master".to_string(), "stable".to_string()]);
    }

    #[test]
    fn test_with_path_keeps_commit() {
        let ctx = RequestContext::new(repo(), None, "").unwrap();
        let moved = ctx.with_path("docs/");
        assert_eq!(moved.path(), "docs");
        assert_eq!(moved.commit(), ctx.commit());
        assert_eq!(ctx.path(), "");
    }

    #[test]
    fn test_with_ref_switches_commit() {
        let ctx = RequestContext::new(repo(), None, "docs").unwrap();
        let stable = ctx.with_ref("stable").unwrap();
        assert_ne!(stable.commit().id, ctx.commit().id);
        assert_eq!(stable.path(), "docs");
        assert!(ctx.with_ref("missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_derived_contexts_share_repository() {
        let repo = repo();
        let ctx = RequestContext::new(Rc::clone(&repo), None, "").unwrap();
        let moved = ctx.with_path("docs");
        let stable = moved.with_ref("stable").unwrap();
        assert!(std::ptr::eq(stable.repo(), moved.repo()));
        assert!(std::ptr::eq(ctx.repo(), &*repo));
        assert_eq!(Rc::strong_count(&repo), 4);
    }
}
