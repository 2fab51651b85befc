mod commit;
mod listing;
mod tree;

pub use commit::{CommitInfo, RefInfo};
pub use listing::{Listing, ListingEntry};
pub use tree::{BlobObject, EntryKind, ObjectKind, TreeEntry, TreeObject, TreeOrBlob};
