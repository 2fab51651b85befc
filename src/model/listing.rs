use super::EntryKind;

/// One row of a directory listing.
///
/// Field order is the sort order: lowercase key first, then the display
/// name and full path as tie-breakers. The synthetic parent entry has no
/// key and therefore orders before every real entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListingEntry {
    pub sort_key: Option<String>,
    pub name: String,
    pub path: String,
}

impl ListingEntry {
    pub fn new(name: &str, path: String) -> Self {
        Self {
            sort_key: Some(name.to_lowercase()),
            name: name.to_string(),
            path,
        }
    }

    /// The `..` entry pointing at `parent`
    pub fn parent(parent: String) -> Self {
        Self {
            sort_key: None,
            name: "..".to_string(),
            path: parent,
        }
    }

    pub fn is_parent(&self) -> bool {
        self.sort_key.is_none()
    }
}

/// Sorted contents of one directory level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub dirs: Vec<ListingEntry>,
    pub files: Vec<ListingEntry>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.dirs.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Directories first, then files
    pub fn entries(&self) -> impl Iterator<Item = (EntryKind, &ListingEntry)> {
        self.dirs
            .iter()
            .map(|e| (EntryKind::Directory, e))
            .chain(self.files.iter().map(|e| (EntryKind::File, e)))
    }

    pub fn get(&self, index: usize) -> Option<(EntryKind, &ListingEntry)> {
        self.entries().nth(index)
    }
}
