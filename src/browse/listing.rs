use crate::model::{EntryKind, Listing, ListingEntry, TreeObject};
use crate::util::{join_path, parent_path};

use super::ResolvedLocation;

/// Build the sorted single-level listing of `tree`, which lives at
/// `effective_root`. Outside the repository root the directory group
/// starts with a `..` entry pointing at the parent.
pub fn list_directory(tree: &TreeObject, effective_root: &str) -> Listing {
    let mut listing = Listing::default();
    for entry in &tree.entries {
        let item = ListingEntry::new(&entry.name, join_path(effective_root, &entry.name));
        match entry.kind() {
            EntryKind::Directory => listing.dirs.push(item),
            EntryKind::File => listing.files.push(item),
        }
    }

    listing.dirs.sort();
    listing.files.sort();

    if !effective_root.is_empty() {
        listing
            .dirs
            .insert(0, ListingEntry::parent(parent_path(effective_root).to_string()));
    }
    listing
}

/// Listing of the directory a resolved location displays
pub fn list_location(location: &ResolvedLocation) -> Listing {
    list_directory(&location.tree, &location.effective_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TreeEntry;
    use git2::Oid;
    use proptest::prelude::*;

    fn tree(entries: &[(&str, u32)]) -> TreeObject {
        TreeObject {
            id: Oid::zero(),
            entries: entries
                .iter()
                .map(|(name, mode)| TreeEntry {
                    name: name.to_string(),
                    mode: *mode,
                    id: Oid::zero(),
                })
                .collect(),
        }
    }

    fn names(entries: &[ListingEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_groups_and_parent_entry() {
        let t = tree(&[("b.txt", 0o100644), ("A.txt", 0o100644), ("sub", 0o040000)]);
        let listing = list_directory(&t, "docs/guide");

        assert_eq!(names(&listing.dirs), vec!["..", "sub"]);
        assert!(listing.dirs[0].is_parent());
        assert_eq!(listing.dirs[0].path, "docs");
        assert_eq!(listing.dirs[1].path, "docs/guide/sub");

        assert_eq!(names(&listing.files), vec!["A.txt", "b.txt"]);
        assert_eq!(listing.files[0].sort_key.as_deref(), Some("a.txt"));
        assert_eq!(listing.files[1].path, "docs/guide/b.txt");
    }

    #[test]
    fn test_root_has_no_parent_entry() {
        let t = tree(&[("src", 0o040000), ("Cargo.toml", 0o100644)]);
        let listing = list_directory(&t, "");
        assert_eq!(names(&listing.dirs), vec!["src"]);
        assert_eq!(listing.dirs[0].path, "src");
        assert_eq!(listing.files[0].path, "Cargo.toml");
    }

    #[test]
    fn test_parent_of_top_level_dir_is_root() {
        let t = tree(&[]);
        let listing = list_directory(&t, "src");
        assert_eq!(listing.dirs.len(), 1);
        assert_eq!(listing.dirs[0].path, "");
        assert!(listing.files.is_empty());
    }

    #[test]
    fn test_case_variants_are_adjacent() {
        let t = tree(&[
            ("banana", 0o100644),
            ("apple", 0o100644),
            ("Cherry", 0o100644),
            ("Apple", 0o100644),
        ]);
        let listing = list_directory(&t, "");
        // Same lowercase key, uppercase name wins the tie
        assert_eq!(names(&listing.files), vec!["Apple", "apple", "banana", "Cherry"]);
    }

    #[test]
    fn test_parent_stays_first_before_punctuation() {
        let t = tree(&[("!bang", 0o040000), ("-dash", 0o040000)]);
        let listing = list_directory(&t, "x");
        assert_eq!(names(&listing.dirs), vec!["..", "!bang", "-dash"]);
    }

    #[test]
    fn test_entries_order() {
        let t = tree(&[("z.txt", 0o100644), ("a", 0o040000)]);
        let listing = list_directory(&t, "");
        let kinds: Vec<_> = listing.entries().map(|(kind, e)| (kind, e.name.as_str())).collect();
        assert_eq!(kinds, vec![(EntryKind::Directory, "a"), (EntryKind::File, "z.txt")]);
        assert_eq!(listing.len(), 2);
    }

    proptest! {
        /// Every group is ordered by lowercase name.
        #[test]
        fn groups_sorted_by_lowercase(names in proptest::collection::btree_set("[a-zA-Z0-9._-]{1,12}", 0..30)) {
            let entries: Vec<(&str, u32)> = names
                .iter()
                .enumerate()
                .map(|(i, n)| (n.as_str(), if i % 3 == 0 { 0o040000 } else { 0o100644 }))
                .collect();
            let listing = list_directory(&tree(&entries), "root");
            prop_assert!(listing.dirs[0].is_parent());
            for group in [&listing.dirs[1..], &listing.files[..]] {
                for pair in group.windows(2) {
                    prop_assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
                }
            }
            prop_assert_eq!(listing.len(), names.len() + 1);
        }
    }
}
