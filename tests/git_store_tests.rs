// GitStore against real on-disk repositories

mod common;

use repobrowse::error::StoreError;
use repobrowse::model::{ObjectKind, TreeOrBlob};
use repobrowse::repository::{GitStore, ObjectStore, StoreObject};

fn commit_of(store: &GitStore, identifier: &str) -> repobrowse::model::CommitInfo {
    match store.resolve_branch_or_commit(identifier).unwrap().0 {
        StoreObject::Commit(commit) => commit,
        other => panic!("{} resolved to {:?}", identifier, other),
    }
}

#[test]
fn test_open_missing_repository() {
    let err = GitStore::open("/nonexistent/repobrowse/repo").err().unwrap();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn test_branch_and_commit_resolution() {
    let (_dir, path, repo) = common::create_test_repo();
    let first = common::add_commit(&repo, &[("README.md", b"hello")], "first");
    common::add_commit(&repo, &[("README.md", b"hello again")], "second");
    let store = GitStore::open(&path).unwrap();

    let (object, is_branch) = store.resolve_branch_or_commit("master").unwrap();
    assert!(is_branch);
    assert!(matches!(object, StoreObject::Commit(ref c) if c.message == "second"));

    let (object, is_branch) = store.resolve_branch_or_commit(&first.to_string()).unwrap();
    assert!(!is_branch);
    assert!(matches!(object, StoreObject::Commit(ref c) if c.id == first));

    // Abbreviated ids are accepted
    let (object, _) = store.resolve_branch_or_commit(&first.to_string()[..7]).unwrap();
    assert!(matches!(object, StoreObject::Commit(ref c) if c.id == first));

    assert!(matches!(
        store.resolve_branch_or_commit("no-such-branch"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_non_commit_objects() {
    let (_dir, path, repo) = common::create_test_repo();
    let head = common::add_commit(&repo, &[("README.md", b"hello")], "first");
    common::create_annotated_tag(&repo, "v1.0", head);
    let blob = common::blob_id(&repo, "README.md");
    let store = GitStore::open(&path).unwrap();

    let (object, _) = store.resolve_branch_or_commit("v1.0").unwrap();
    assert_eq!(object, StoreObject::Other(ObjectKind::Tag));
    let (object, _) = store.resolve_branch_or_commit(&blob.to_string()).unwrap();
    assert_eq!(object, StoreObject::Other(ObjectKind::Blob));
}

#[test]
fn test_unreadable_commit_is_a_git_error() {
    let (_dir, path, repo) = common::create_test_repo();
    let head = common::add_commit(&repo, &[("README.md", b"hello")], "first");
    let hex = head.to_string();
    let loose = path.join(".git/objects").join(&hex[..2]).join(&hex[2..]);
    std::fs::remove_file(&loose).unwrap();
    std::fs::write(&loose, b"not a zlib stream").unwrap();
    let store = GitStore::open(&path).unwrap();

    assert!(matches!(
        store.resolve_branch_or_commit(&hex),
        Err(StoreError::Git(_))
    ));
    // Names that resolve to nothing are still reported as missing
    assert!(matches!(
        store.resolve_branch_or_commit("master@{"),
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.resolve_branch_or_commit("no-such-branch"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_tree_or_blob() {
    let (_dir, path, repo) = common::create_test_repo();
    common::add_commit(&repo, &[("src/main.rs", b"fn main() {}"), ("README.md", b"hi")], "init");
    let store = GitStore::open(&path).unwrap();
    let commit = commit_of(&store, "master");

    match store.tree_or_blob(&commit, "").unwrap() {
        TreeOrBlob::Tree(tree) => {
            let names: Vec<_> = tree.entries.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, vec!["README.md", "src"]);
        }
        TreeOrBlob::Blob(_) => panic!("root should be a tree"),
    }
    match store.tree_or_blob(&commit, "src/main.rs").unwrap() {
        TreeOrBlob::Blob(blob) => assert_eq!(blob.data, b"fn main() {}"),
        TreeOrBlob::Tree(_) => panic!("expected a blob"),
    }
    assert!(matches!(
        store.tree_or_blob(&commit, "src/missing.rs"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_branch_names_and_default() {
    let (_dir, path, repo) = common::create_test_repo();
    let head = common::add_commit(&repo, &[("a", b"a")], "init");
    common::create_branch(&repo, "zeta", head);
    common::create_branch(&repo, "alpha", head);
    let store = GitStore::open(&path).unwrap();

    assert_eq!(store.default_branch().unwrap(), "master");
    assert_eq!(store.branch_names(&[]).unwrap(), vec!["alpha", "master", "zeta"]);
    assert_eq!(store.branch_names(&["master"]).unwrap(), vec!["alpha", "zeta"]);
}

#[test]
fn test_refs_report_newest_commit() {
    let (_dir, path, repo) = common::create_test_repo();
    let first = common::add_commit_at(&repo, &[("a", b"a")], "init", 1000);
    common::create_annotated_tag(&repo, "v1", first);
    common::add_commit_at(&repo, &[("a", b"b")], "next", 2000);
    let store = GitStore::open(&path).unwrap();

    let mut times: Vec<_> = store
        .refs()
        .unwrap()
        .into_iter()
        .map(|r| (r.name, r.commit_time))
        .collect();
    times.sort();
    assert_eq!(
        times,
        vec![
            ("refs/heads/master".to_string(), Some(2000)),
            ("refs/tags/v1".to_string(), Some(1000)),
        ]
    );
}

#[test]
fn test_history_with_path_filter_and_skip() {
    let (_dir, path, repo) = common::create_test_repo();
    common::add_commit_at(&repo, &[("docs/a.md", b"1"), ("src/lib.rs", b"1")], "c1", 100);
    common::add_commit_at(&repo, &[("src/lib.rs", b"2")], "c2", 200);
    common::add_commit_at(&repo, &[("docs/a.md", b"2")], "c3", 300);
    common::add_commit_at(&repo, &[("src/lib.rs", b"3")], "c4", 400);
    common::remove_file_commit(&repo, "docs/a.md", "c5");
    let store = GitStore::open(&path).unwrap();
    let head = commit_of(&store, "master");

    let messages = |path: &str, skip: usize, limit: usize| -> Vec<String> {
        store
            .history(&head, path, skip, limit)
            .unwrap()
            .into_iter()
            .map(|c| c.message)
            .collect()
    };

    assert_eq!(messages("", 0, 10), vec!["c5", "c4", "c3", "c2", "c1"]);
    assert_eq!(messages("", 1, 2), vec!["c4", "c3"]);
    assert_eq!(messages("src", 0, 10), vec!["c4", "c2", "c1"]);
    assert_eq!(messages("docs/a.md", 0, 10), vec!["c5", "c3", "c1"]);
    assert_eq!(messages("src/lib.rs", 2, 10), vec!["c1"]);
    assert!(messages("", 0, 0).is_empty());
}
