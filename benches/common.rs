// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use git2::Oid;
use repobrowse::model::{TreeEntry, TreeObject};
use repobrowse::repository::{MemoryStore, Repository};

const FILE_MODE: u32 = 0o100644;
const DIR_MODE: u32 = 0o040000;

/// A flat tree with `num_entries` entries, one in ten a directory,
/// in git's byte order with mixed-case names
pub fn generate_tree(num_entries: usize) -> TreeObject {
    let mut entries: Vec<TreeEntry> = (0..num_entries)
        .map(|i| {
            let (name, mode) = if i % 10 == 0 {
                (format!("Dir_{}", i), DIR_MODE)
            } else if i % 3 == 0 {
                (format!("README_{}.md", i), FILE_MODE)
            } else {
                (format!("file_{}.rs", i), FILE_MODE)
            };
            let id = Oid::hash_object(git2::ObjectType::Blob, name.as_bytes()).unwrap_or(Oid::zero());
            TreeEntry { name, mode, id }
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    TreeObject {
        id: Oid::zero(),
        entries,
    }
}

/// An in-memory repository with `num_commits` commits, each touching one
/// of ten files
pub fn generate_history(num_commits: usize) -> Repository {
    let mut store = MemoryStore::new();
    for i in 0..num_commits {
        let path = format!("src/file_{}.rs", i % 10);
        let body = i.to_string();
        store
            .commit_files("master", &[(path.as_str(), body.as_bytes())], &format!("commit {}", i), i as i64)
            .unwrap_or_else(|e| panic!("commit {} failed: {}", i, e));
    }
    Repository::new("bench", store)
}
