use git2::Oid;

const S_IFDIR: u32 = 0o040000;

/// Classification of a tree entry by its file-mode bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Any mode carrying the directory bit is listed as a directory,
    /// which includes submodule (gitlink) entries.
    pub fn from_mode(mode: u32) -> Self {
        if mode & S_IFDIR != 0 {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }
}

/// A single named entry inside a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub mode: u32,
    pub id: Oid,
}

impl TreeEntry {
    pub fn kind(&self) -> EntryKind {
        EntryKind::from_mode(self.mode)
    }
}

/// A directory object: one level of named entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeObject {
    pub id: Oid,
    pub entries: Vec<TreeEntry>,
}

/// A file's raw content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobObject {
    pub id: Oid,
    pub data: Vec<u8>,
}

impl BlobObject {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// What a path inside a commit addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeOrBlob {
    Tree(TreeObject),
    Blob(BlobObject),
}

/// Kind of a non-commit object a ref or id can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Tree,
    Blob,
    Tag,
    Unknown,
}
