use crate::browse::RequestContext;
use crate::model::CommitInfo;

/// ViewModel for one commit's details
pub struct CommitViewModel {
    ctx: RequestContext,
    line_count: usize,
    scroll: usize,
}

impl CommitViewModel {
    /// `ctx` must already be resolved at the commit to show
    pub fn new(ctx: RequestContext) -> Self {
        let line_count = ctx.commit().message.lines().count();
        Self {
            ctx,
            line_count,
            scroll: 0,
        }
    }

    /// Context at this commit and the path the history was opened for
    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    pub fn commit(&self) -> &CommitInfo {
        self.ctx.commit()
    }

    /// Number of lines in the full message
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// First visible message line
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let last = self.line_count.saturating_sub(1);
        self.scroll = (self.scroll + lines).min(last);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryStore, Repository};
    use std::rc::Rc;

    fn context() -> (RequestContext, String, String) {
        let mut store = MemoryStore::new();
        let first = store.commit_files("master", &[("a.txt", b"1")], "init", 100).unwrap();
        let second = store
            .commit_files("master", &[("a.txt", b"2")], "Summary line\n\nBody one\nBody two", 200)
            .unwrap();
        let repo = Rc::new(Repository::new("demo", store));
        let ctx = RequestContext::new(repo, None, "a.txt").unwrap();
        (ctx.with_ref(&second.to_string()).unwrap(), first.to_string(), second.to_string())
    }

    #[test]
    fn test_commit_details() {
        let (ctx, first, second) = context();
        let vm = CommitViewModel::new(ctx);
        assert_eq!(vm.commit().id_hex(), second);
        assert_eq!(vm.commit().time, 200);
        let parents: Vec<String> = vm.commit().parents.iter().map(|p| p.to_string()).collect();
        assert_eq!(parents, vec![first]);
        assert_eq!(vm.context().path(), "a.txt");
        assert!(!vm.context().is_branch());
    }

    #[test]
    fn test_message_scrolling() {
        let (ctx, _, _) = context();
        let mut vm = CommitViewModel::new(ctx);
        assert_eq!(vm.line_count(), 4);
        vm.scroll_down(10);
        assert_eq!(vm.scroll(), 3);
        vm.scroll_up(1);
        assert_eq!(vm.scroll(), 2);
        vm.scroll_up(10);
        assert_eq!(vm.scroll(), 0);
    }
}
