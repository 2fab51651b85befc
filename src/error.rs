//! Error types for the browsing core.

use std::str::Utf8Error;

use thiserror::Error;

/// Content could not be decoded as text by any configured fallback.
/// Carries the original UTF-8 failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("content is not valid text: {source}")]
pub struct EncodingError {
    #[from]
    pub source: Utf8Error,
}

/// Failures reported by an object store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The named ref, object or path does not exist
    #[error("not found: {0}")]
    NotFound(String),

    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}

/// Coarse classification of a [`BrowseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Repository, ref, commit or path does not resolve
    NotFound,
    /// Content cannot be decoded as text; callers treat it as binary
    Encoding,
    /// The backend failed for a reason other than absence
    Backend,
}

/// All errors surfaced by browse operations.
#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("No repository named \"{0}\"")]
    NoSuchRepository(String),

    #[error("\"{repo}\" has no commit \"{id}\"")]
    NoSuchCommit { repo: String, id: String },

    #[error("\"{path}\" does not exist in commit {commit}")]
    NoSuchPath { commit: String, path: String },

    #[error("\"{0}\" is not a file")]
    NotAFile(String),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("backend error: {0}")]
    Git(#[from] git2::Error),
}

impl BrowseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BrowseError::NoSuchRepository(_)
            | BrowseError::NoSuchCommit { .. }
            | BrowseError::NoSuchPath { .. }
            | BrowseError::NotAFile(_) => ErrorKind::NotFound,
            BrowseError::Encoding(_) => ErrorKind::Encoding,
            BrowseError::Git(_) => ErrorKind::Backend,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T, E = BrowseError> = std::result::Result<T, E>;
