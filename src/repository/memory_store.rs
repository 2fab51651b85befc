use std::collections::BTreeMap;
use std::fmt::Write as _;

use git2::{ObjectType, Oid};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::StoreError;
use crate::model::{BlobObject, CommitInfo, ObjectKind, RefInfo, TreeEntry, TreeObject, TreeOrBlob};

use super::{ObjectStore, StoreObject};

const DIR_MODE: u32 = 0o040000;
const FILE_MODE: u32 = 0o100644;
const MIN_PREFIX_LEN: usize = 4;

#[derive(Debug, Clone)]
enum Stored {
    Commit(CommitInfo),
    Tree(Vec<TreeEntry>),
    Blob(Vec<u8>),
    Tag(Oid),
}

/// In-memory object arena keyed by content hash.
///
/// Objects are hashed the way git hashes them, so ids are stable across
/// runs. Branches and tags are plain name -> id maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    objects: FxHashMap<Oid, Stored>,
    branches: BTreeMap<String, Oid>,
    tags: BTreeMap<String, Oid>,
    head: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blob(&mut self, data: &[u8]) -> Result<Oid, StoreError> {
        let id = Oid::hash_object(ObjectType::Blob, data)?;
        self.objects.insert(id, Stored::Blob(data.to_vec()));
        Ok(id)
    }

    pub fn tree(&mut self, mut entries: Vec<TreeEntry>) -> Result<Oid, StoreError> {
        entries.sort_by(|a, b| tree_order(a).cmp(tree_order(b)));
        let mut raw = Vec::new();
        for entry in &entries {
            raw.extend_from_slice(format!("{:o} {}\0", entry.mode, entry.name).as_bytes());
            raw.extend_from_slice(entry.id.as_bytes());
        }
        let id = Oid::hash_object(ObjectType::Tree, &raw)?;
        self.objects.insert(id, Stored::Tree(entries));
        Ok(id)
    }

    pub fn commit(
        &mut self,
        tree_id: Oid,
        parents: &[Oid],
        author: &str,
        message: &str,
        time: i64,
    ) -> Result<Oid, StoreError> {
        let mut raw = format!("tree {}\n", tree_id);
        for parent in parents {
            let _ = writeln!(raw, "parent {}", parent);
        }
        let _ = write!(raw, "author {author} {time} +0000\ncommitter {author} {time} +0000\n\n{message}");

        let id = Oid::hash_object(ObjectType::Commit, raw.as_bytes())?;
        self.objects.insert(
            id,
            Stored::Commit(CommitInfo {
                id,
                tree_id,
                time,
                author: author.to_string(),
                message: message.to_string(),
                parents: parents.to_vec(),
            }),
        );
        Ok(id)
    }

    /// Annotated tag object pointing at `target`, registered as `refs/tags/<name>`
    pub fn tag(&mut self, name: &str, target: Oid) -> Result<Oid, StoreError> {
        let raw = format!("object {}\ntype commit\ntag {}\n", target, name);
        let id = Oid::hash_object(ObjectType::Tag, raw.as_bytes())?;
        self.objects.insert(id, Stored::Tag(target));
        self.tags.insert(name.to_string(), id);
        Ok(id)
    }

    /// Lightweight tag: a ref straight to `target`
    pub fn lightweight_tag(&mut self, name: &str, target: Oid) {
        self.tags.insert(name.to_string(), target);
    }

    pub fn set_branch(&mut self, name: &str, target: Oid) {
        self.branches.insert(name.to_string(), target);
    }

    pub fn set_head(&mut self, branch: &str) {
        self.head = Some(branch.to_string());
    }

    pub fn branch_head(&self, name: &str) -> Option<Oid> {
        self.branches.get(name).copied()
    }

    /// Commit `files` on top of the branch's current head and advance it.
    ///
    /// Existing files are kept; a file listed again is replaced. Paths are
    /// slash-separated and intermediate trees are created as needed.
    pub fn commit_files(
        &mut self,
        branch: &str,
        files: &[(&str, &[u8])],
        message: &str,
        time: i64,
    ) -> Result<Oid, StoreError> {
        let parent = self.branch_head(branch);
        let mut snapshot = BTreeMap::new();
        if let Some(Stored::Commit(commit)) = parent.and_then(|id| self.objects.get(&id)) {
            let tree_id = commit.tree_id;
            self.flatten(tree_id, "", &mut snapshot);
        }
        for (path, data) in files {
            let id = self.blob(data)?;
            snapshot.insert(path.to_string(), id);
        }

        let tree_id = self.build_tree(&snapshot)?;
        let parents: Vec<Oid> = parent.into_iter().collect();
        let id = self.commit(tree_id, &parents, "Test User <test@example.com>", message, time)?;
        self.set_branch(branch, id);
        if self.head.is_none() {
            self.set_head(branch);
        }
        Ok(id)
    }

    fn flatten(&self, tree_id: Oid, prefix: &str, out: &mut BTreeMap<String, Oid>) {
        let Some(Stored::Tree(entries)) = self.objects.get(&tree_id) else {
            return;
        };
        for entry in entries {
            let path = if prefix.is_empty() {
                entry.name.clone()
            } else {
                format!("{}/{}", prefix, entry.name)
            };
            if entry.mode == DIR_MODE {
                self.flatten(entry.id, &path, out);
            } else {
                out.insert(path, entry.id);
            }
        }
    }

    fn build_tree(&mut self, files: &BTreeMap<String, Oid>) -> Result<Oid, StoreError> {
        let mut entries = Vec::new();
        let mut subdirs: BTreeMap<&str, BTreeMap<String, Oid>> = BTreeMap::new();
        for (path, id) in files {
            match path.split_once('/') {
                Some((dir, rest)) => {
                    subdirs.entry(dir).or_default().insert(rest.to_string(), *id);
                }
                None => entries.push(TreeEntry {
                    name: path.clone(),
                    mode: FILE_MODE,
                    id: *id,
                }),
            }
        }
        for (dir, contents) in subdirs {
            let id = self.build_tree(&contents)?;
            entries.push(TreeEntry {
                name: dir.to_string(),
                mode: DIR_MODE,
                id,
            });
        }
        self.tree(entries)
    }

    fn resolve_object(&self, id: Oid) -> StoreObject {
        match self.objects.get(&id) {
            Some(Stored::Commit(commit)) => StoreObject::Commit(commit.clone()),
            Some(Stored::Tree(_)) => StoreObject::Other(ObjectKind::Tree),
            Some(Stored::Blob(_)) => StoreObject::Other(ObjectKind::Blob),
            Some(Stored::Tag(_)) => StoreObject::Other(ObjectKind::Tag),
            None => StoreObject::Other(ObjectKind::Unknown),
        }
    }

    fn find_by_prefix(&self, prefix: &str) -> Option<Oid> {
        if prefix.len() < MIN_PREFIX_LEN || !prefix.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let prefix = prefix.to_ascii_lowercase();
        let mut matches = self
            .objects
            .keys()
            .filter(|id| id.to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(id), None) => Some(*id),
            _ => None,
        }
    }

    fn peel_to_commit(&self, mut id: Oid) -> Option<&CommitInfo> {
        loop {
            match self.objects.get(&id)? {
                Stored::Commit(commit) => return Some(commit),
                Stored::Tag(target) => id = *target,
                _ => return None,
            }
        }
    }

    fn entry_at(&self, tree_id: Oid, path: &str) -> Option<(u32, Oid)> {
        let mut current = (DIR_MODE, tree_id);
        for segment in path.split('/') {
            let Some(Stored::Tree(entries)) = self.objects.get(&current.1) else {
                return None;
            };
            let entry = entries.iter().find(|e| e.name == segment)?;
            current = (entry.mode, entry.id);
        }
        Some(current)
    }

    fn touches(&self, commit: &CommitInfo, path: &str) -> bool {
        let current = self.entry_at(commit.tree_id, path).map(|(_, id)| id);
        if commit.parents.is_empty() {
            return current.is_some();
        }
        !commit.parents.iter().any(|parent| {
            let parent_entry = self
                .peel_to_commit(*parent)
                .and_then(|p| self.entry_at(p.tree_id, path))
                .map(|(_, id)| id);
            parent_entry == current
        })
    }
}

impl ObjectStore for MemoryStore {
    fn default_branch(&self) -> Result<String, StoreError> {
        Ok(self.head.clone().unwrap_or_else(|| "master".to_string()))
    }

    fn resolve_branch_or_commit(&self, identifier: &str) -> Result<(StoreObject, bool), StoreError> {
        if let Some(id) = self.branches.get(identifier) {
            return Ok((self.resolve_object(*id), true));
        }

        let id = self
            .tags
            .get(identifier)
            .copied()
            .or_else(|| Oid::from_str(identifier).ok().filter(|id| self.objects.contains_key(id)))
            .or_else(|| self.find_by_prefix(identifier))
            .ok_or_else(|| StoreError::NotFound(format!("revision {}", identifier)))?;
        Ok((self.resolve_object(id), false))
    }

    fn tree_or_blob(&self, commit: &CommitInfo, path: &str) -> Result<TreeOrBlob, StoreError> {
        let missing = || StoreError::NotFound(format!("path {}", path));
        let id = if path.is_empty() {
            commit.tree_id
        } else {
            self.entry_at(commit.tree_id, path).ok_or_else(missing)?.1
        };

        match self.objects.get(&id) {
            Some(Stored::Tree(entries)) => Ok(TreeOrBlob::Tree(TreeObject {
                id,
                entries: entries.clone(),
            })),
            Some(Stored::Blob(data)) => Ok(TreeOrBlob::Blob(BlobObject {
                id,
                data: data.clone(),
            })),
            _ => Err(missing()),
        }
    }

    fn branch_names(&self, exclude: &[&str]) -> Result<Vec<String>, StoreError> {
        Ok(self
            .branches
            .keys()
            .filter(|name| !exclude.contains(&name.as_str()))
            .cloned()
            .collect())
    }

    fn refs(&self) -> Result<Vec<RefInfo>, StoreError> {
        let branches = self.branches.iter().map(|(name, id)| (format!("refs/heads/{}", name), *id));
        let tags = self.tags.iter().map(|(name, id)| (format!("refs/tags/{}", name), *id));
        Ok(branches
            .chain(tags)
            .map(|(name, id)| RefInfo {
                name,
                commit_time: self.peel_to_commit(id).map(|c| c.time),
            })
            .collect())
    }

    fn history(
        &self,
        commit: &CommitInfo,
        path: &str,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<CommitInfo>, StoreError> {
        let mut seen = FxHashSet::default();
        let mut pending = vec![commit.id];
        let mut ancestors = Vec::new();
        while let Some(id) = pending.pop() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(Stored::Commit(c)) = self.objects.get(&id) {
                pending.extend(c.parents.iter().copied());
                ancestors.push(c);
            }
        }
        ancestors.sort_by(|a, b| b.time.cmp(&a.time));

        Ok(ancestors
            .into_iter()
            .filter(|c| path.is_empty() || self.touches(c, path))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Git orders tree entries by name, comparing directories as if their
/// name ended in `/`
fn tree_order(entry: &TreeEntry) -> impl Iterator<Item = u8> + '_ {
    let suffix = (entry.mode == DIR_MODE).then_some(b'/');
    entry.name.bytes().chain(suffix)
}
