use crate::browse::{load_history, paginate_history, PageWindow, RequestContext};
use crate::error::Result;
use crate::model::CommitInfo;

use super::selection::Selectable;

/// ViewModel for one page of commit history at a path
pub struct HistoryViewModel {
    ctx: RequestContext,
    window: PageWindow,
    commits: Vec<CommitInfo>,
    selected_index: usize,
}

impl HistoryViewModel {
    pub fn new(ctx: RequestContext) -> Result<Self> {
        Self::at_page(ctx, 0)
    }

    pub fn at_page(ctx: RequestContext, page: u32) -> Result<Self> {
        let window = paginate_history(page);
        let commits = load_history(&ctx, &window)?;
        Ok(Self {
            ctx,
            window,
            commits,
            selected_index: 0,
        })
    }

    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn commits(&self) -> &[CommitInfo] {
        &self.commits
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// A full page implies there may be more
    pub fn has_next_page(&self) -> bool {
        self.commits.len() == self.window.show
    }

    pub fn next_page(&mut self) -> Result<bool> {
        if !self.has_next_page() {
            return Ok(false);
        }
        let next = Self::at_page(self.ctx.clone(), self.window.page + 1)?;
        if next.commits.is_empty() {
            return Ok(false);
        }
        *self = next;
        Ok(true)
    }

    pub fn prev_page(&mut self) -> Result<bool> {
        if self.window.page == 0 {
            return Ok(false);
        }
        *self = Self::at_page(self.ctx.clone(), self.window.page - 1)?;
        Ok(true)
    }

    /// Context at the selected commit, keeping the same path
    pub fn selected_context(&self) -> Option<Result<RequestContext>> {
        self.commits
            .get(self.selected_index)
            .map(|commit| self.ctx.with_ref(&commit.id_hex()))
    }
}

impl Selectable for HistoryViewModel {
    fn len(&self) -> usize {
        self.commits.len()
    }

    fn selected(&self) -> usize {
        self.selected_index
    }

    fn set_selected(&mut self, index: usize) {
        self.selected_index = index;
    }
}
