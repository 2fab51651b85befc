// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use git2::{Oid, Repository, RepositoryInitOptions, Signature, Time};
use repobrowse::repository::RepoRegistry;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary git repository whose HEAD points at `master`
pub fn create_test_repo() -> (TempDir, PathBuf, Repository) {
    let dir = TempDir::new().unwrap();
    let repo_path = dir.path().to_path_buf();
    let repo = create_test_repo_at(&repo_path);
    (dir, repo_path, repo)
}

/// Initialize a repository at `path`, creating the directory
pub fn create_test_repo_at(path: &Path) -> Repository {
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head("master");
    opts.mkpath(true);
    let repo = Repository::init_opts(path, &opts).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();
    repo
}

/// Registry holding a single repository named `name`
pub fn registry_for(name: &str, path: &Path) -> RepoRegistry {
    RepoRegistry::new().with_repo(name, path)
}

/// Write `files`, stage them and commit on HEAD at a fixed time
pub fn add_commit_at(repo: &Repository, files: &[(&str, &[u8])], message: &str, time: i64) -> Oid {
    let mut index = repo.index().unwrap();
    for (path, content) in files {
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();
    commit_index(repo, &mut index, message, time)
}

/// Commit `files` with a time one minute after HEAD's
pub fn add_commit(repo: &Repository, files: &[(&str, &[u8])], message: &str) -> Oid {
    add_commit_at(repo, files, message, next_time(repo))
}

/// Remove a file from the repository and create a commit
pub fn remove_file_commit(repo: &Repository, path: &str, message: &str) -> Oid {
    let full_path = repo.workdir().unwrap().join(path);
    if full_path.exists() {
        std::fs::remove_file(&full_path).unwrap();
    }

    let mut index = repo.index().unwrap();
    index.remove_path(Path::new(path)).unwrap();
    index.write().unwrap();
    let time = next_time(repo);
    commit_index(repo, &mut index, message, time)
}

/// Point a new local branch at `target`
pub fn create_branch(repo: &Repository, name: &str, target: Oid) {
    let commit = repo.find_commit(target).unwrap();
    repo.branch(name, &commit, false).unwrap();
}

/// Annotated tag object pointing at `target`
pub fn create_annotated_tag(repo: &Repository, name: &str, target: Oid) -> Oid {
    let object = repo.find_object(target, None).unwrap();
    let sig = Signature::new("Test User", "test@example.com", &Time::new(0, 0)).unwrap();
    repo.tag(name, &object, &sig, "release", false).unwrap()
}

/// Id of the blob at `path` in HEAD
pub fn blob_id(repo: &Repository, path: &str) -> Oid {
    let tree = repo.head().unwrap().peel_to_tree().unwrap();
    tree.get_path(Path::new(path)).unwrap().id()
}

fn next_time(repo: &Repository) -> i64 {
    repo.head()
        .ok()
        .and_then(|h| h.peel_to_commit().ok())
        .map_or(1_600_000_000, |c| c.time().seconds() + 60)
}

fn commit_index(repo: &Repository, index: &mut git2::Index, message: &str, time: i64) -> Oid {
    let sig = Signature::new("Test User", "test@example.com", &Time::new(time, 0)).unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents).unwrap()
}
