use crate::browse::{list_location, resolve_path, RequestContext};
use crate::error::Result;
use crate::model::{EntryKind, Listing, ListingEntry};
use crate::util::parent_path;

use super::selection::Selectable;

/// ViewModel for one directory of a commit
pub struct TreeViewModel {
    ctx: RequestContext,
    listing: Listing,
    selected_index: usize,
}

impl TreeViewModel {
    /// List the context's directory. A context naming a file lists the
    /// file's directory with the file selected.
    pub fn new(ctx: RequestContext) -> Result<Self> {
        let location = resolve_path(ctx.repo(), ctx.commit(), ctx.path())?;
        let listing = list_location(&location);
        let selected = location.is_file().then(|| location.requested_path.clone());
        let mut vm = Self {
            ctx: ctx.with_path(&location.effective_root),
            listing,
            selected_index: 0,
        };
        if let Some(path) = selected {
            vm.select_path(&path);
        }
        Ok(vm)
    }

    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn is_at_root(&self) -> bool {
        self.ctx.path().is_empty()
    }

    pub fn selected_entry(&self) -> Option<(EntryKind, &ListingEntry)> {
        self.listing.get(self.selected_index)
    }

    fn select_path(&mut self, path: &str) {
        if let Some(index) = self.listing.entries().position(|(_, e)| e.path == path && !e.is_parent()) {
            self.selected_index = index;
        }
    }

    fn navigate(&mut self, path: &str) -> Result<()> {
        *self = Self::new(self.ctx.with_path(path))?;
        Ok(())
    }

    /// Descend into the selected directory, or return the context of the
    /// selected file for the caller to open.
    pub fn enter_selected(&mut self) -> Result<Option<RequestContext>> {
        let Some((kind, entry)) = self.selected_entry() else {
            return Ok(None);
        };
        let path = entry.path.clone();
        match kind {
            EntryKind::File => Ok(Some(self.ctx.with_path(&path))),
            EntryKind::Directory => {
                let came_from = self.ctx.path().to_string();
                self.navigate(&path)?;
                self.select_path(&came_from);
                Ok(None)
            }
        }
    }

    /// Go up one level, returns false if already at root
    pub fn go_back(&mut self) -> Result<bool> {
        if self.is_at_root() {
            return Ok(false);
        }
        let came_from = self.ctx.path().to_string();
        self.navigate(parent_path(&came_from))?;
        self.select_path(&came_from);
        Ok(true)
    }

    /// Switch to the branch after the current one, staying at the same
    /// path when the branch has it and at the root otherwise.
    pub fn next_branch(&mut self) -> Result<bool> {
        let current = self.ctx.branch();
        let branches = self.ctx.branches();
        let Some(next) = branches
            .iter()
            .find(|b| b.as_str() > current)
            .or_else(|| branches.first())
            .cloned()
        else {
            return Ok(false);
        };

        let ctx = self.ctx.with_ref(&next)?;
        *self = match Self::new(ctx.clone()) {
            Ok(vm) => vm,
            Err(e) if e.is_not_found() => {
                tracing::debug!(branch = %next, path = ctx.path(), "path missing on branch, showing root");
                Self::new(ctx.with_path(""))?
            }
            Err(e) => return Err(e),
        };
        Ok(true)
    }
}

impl Selectable for TreeViewModel {
    fn len(&self) -> usize {
        self.listing.len()
    }

    fn selected(&self) -> usize {
        self.selected_index
    }

    fn set_selected(&mut self, index: usize) {
        self.selected_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryStore, Repository};
    use std::rc::Rc;

    fn context(ref_id: Option<&str>, path: &str) -> RequestContext {
        let mut store = MemoryStore::new();
        store
            .commit_files(
                "master",
                &[("README.md", b"readme"), ("src/main.rs", b"fn main() {}"), ("src/util/mod.rs", b"")],
                "init",
                10,
            )
            .unwrap();
        let first = store.branch_head("master").unwrap();
        store.set_branch("dev", first);
        store.commit_files("dev", &[("src/dev.rs", b"")], "dev only", 20).unwrap();
        store.commit_files("master", &[("docs/index.md", b"docs")], "docs", 30).unwrap();
        let repo = Rc::new(Repository::new("demo", store));
        RequestContext::new(repo, ref_id, path).unwrap()
    }

    fn names(vm: &TreeViewModel) -> Vec<String> {
        vm.listing().entries().map(|(_, e)| e.name.clone()).collect()
    }

    #[test]
    fn test_enter_and_back() {
        let mut vm = TreeViewModel::new(context(None, "")).unwrap();
        assert!(vm.is_at_root());
        assert_eq!(names(&vm), vec!["docs", "src", "README.md"]);

        vm.move_down();
        assert!(vm.enter_selected().unwrap().is_none());
        assert_eq!(vm.context().path(), "src");
        assert_eq!(names(&vm), vec!["..", "util", "main.rs"]);

        assert!(vm.go_back().unwrap());
        assert!(vm.is_at_root());
        assert_eq!(vm.selected_entry().map(|(_, e)| e.name.as_str()), Some("src"));
        assert!(!vm.go_back().unwrap());
    }

    #[test]
    fn test_parent_entry() {
        let mut vm = TreeViewModel::new(context(None, "src/util")).unwrap();
        assert_eq!(vm.selected_entry().map(|(_, e)| e.is_parent()), Some(true));
        vm.enter_selected().unwrap();
        assert_eq!(vm.context().path(), "src");
        assert_eq!(vm.selected_entry().map(|(_, e)| e.name.as_str()), Some("util"));
    }

    #[test]
    fn test_file_context_selects_file() {
        let mut vm = TreeViewModel::new(context(None, "src/main.rs")).unwrap();
        assert_eq!(vm.context().path(), "src");
        let file = vm.enter_selected().unwrap().unwrap();
        assert_eq!(file.path(), "src/main.rs");
    }

    #[test]
    fn test_next_branch_falls_back_to_root() {
        let mut vm = TreeViewModel::new(context(None, "docs")).unwrap();
        assert_eq!(vm.context().branch(), "master");

        assert!(vm.next_branch().unwrap());
        assert_eq!(vm.context().branch(), "dev");
        assert!(vm.is_at_root());
        assert_eq!(names(&vm), vec!["src", "README.md"]);

        assert!(vm.next_branch().unwrap());
        assert_eq!(vm.context().branch(), "master");
    }

    #[test]
    fn test_next_branch_keeps_path() {
        let mut vm = TreeViewModel::new(context(Some("master"), "src")).unwrap();
        vm.next_branch().unwrap();
        assert_eq!(vm.context().branch(), "dev");
        assert_eq!(vm.context().path(), "src");
        assert!(names(&vm).contains(&"dev.rs".to_string()));
    }
}
