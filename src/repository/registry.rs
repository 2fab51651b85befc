use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{BrowseError, Result, StoreError};

use super::{GitStore, ObjectStore};

/// A named repository opened for the duration of one request
pub struct Repository {
    name: String,
    store: Box<dyn ObjectStore>,
}

impl Repository {
    pub fn new(name: &str, store: impl ObjectStore + 'static) -> Self {
        Self {
            name: name.to_string(),
            store: Box::new(store),
        }
    }

    /// Open the git repository at `path` under `name`
    pub fn open(name: &str, path: &Path) -> Result<Self> {
        match GitStore::open(path) {
            Ok(store) => Ok(Self::new(name, store)),
            Err(StoreError::Git(e)) => Err(BrowseError::Git(e)),
            Err(StoreError::NotFound(_)) => Err(BrowseError::NoSuchRepository(name.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn store(&self) -> &dyn ObjectStore {
        self.store.as_ref()
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Repository names mapped to their on-disk location.
///
/// Built once at startup and read-only afterwards; every lookup opens a
/// fresh [`Repository`], so the registry can be shared freely between
/// threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoRegistry {
    repos: BTreeMap<String, PathBuf>,
}

impl RepoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.repos.insert(name.into(), path.into());
        self
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.repos.keys().map(String::as_str)
    }

    pub fn path(&self, name: &str) -> Option<&Path> {
        self.repos.get(name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn open(&self, name: &str) -> Result<Repository> {
        let path = self
            .path(name)
            .ok_or_else(|| BrowseError::NoSuchRepository(name.to_string()))?;
        tracing::debug!(repo = name, path = %path.display(), "opening repository");
        Repository::open(name, path)
    }
}

impl FromIterator<(String, PathBuf)> for RepoRegistry {
    fn from_iter<I: IntoIterator<Item = (String, PathBuf)>>(iter: I) -> Self {
        Self {
            repos: iter.into_iter().collect(),
        }
    }
}
