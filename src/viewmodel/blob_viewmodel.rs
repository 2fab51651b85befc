use crate::browse::{view_blob, BlobView, RequestContext};
use crate::error::Result;

/// Lines moved by one page of scrolling
pub const SCROLL_PAGE: usize = 20;

/// ViewModel for a single file
pub struct BlobViewModel {
    ctx: RequestContext,
    view: BlobView,
    line_count: usize,
    scroll: usize,
}

impl BlobViewModel {
    pub fn new(ctx: RequestContext) -> Result<Self> {
        let view = view_blob(&ctx)?;
        let line_count = view.text.as_deref().map_or(0, |t| t.lines().count());
        Ok(Self {
            ctx,
            view,
            line_count,
            scroll: 0,
        })
    }

    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    pub fn view(&self) -> &BlobView {
        &self.view
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// First visible line
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
    use crate::browse::TOO_LARGE;
    use crate::repository::{MemoryStore, Repository};
    use std::rc::Rc;

    fn context(path: &str) -> RequestContext {
        let text: String = (0..30).map(|i| format!("line {}\n", i)).collect();
        let big = vec![b'a'; TOO_LARGE + 1];
        let mut store = MemoryStore::new();
        store
            .commit_files(
                "master",
                &[("notes.txt", text.as_bytes()), ("logo.png", b"\x89PNG\0\0"), ("big.txt", big.as_slice())],
                "init",
                1,
            )
            .unwrap();
        let repo = Rc::new(Repository::new("demo", store));
        RequestContext::new(repo, None, path).unwrap()
    }

    #[test]
    fn test_scrolling() {
        let mut vm = BlobViewModel::new(context("notes.txt")).unwrap();
        assert_eq!(vm.line_count(), 30);
        vm.scroll_down(SCROLL_PAGE);
        assert_eq!(vm.scroll(), 20);
        vm.scroll_down(SCROLL_PAGE);
        assert_eq!(vm.scroll(), 29);
        vm.scroll_up(100);
        assert_eq!(vm.scroll(), 0);
    }

    #[test]
    fn test_binary_and_large_have_no_text() {
        let image = BlobViewModel::new(context("logo.png")).unwrap();
        assert!(image.view().is_binary());
        assert!(image.view().is_image);
        assert_eq!(image.view().content_type.mime, "image/png");
        assert_eq!(image.line_count(), 0);

        let big = BlobViewModel::new(context("big.txt")).unwrap();
        assert!(big.view().too_large);
        assert!(big.view().text.is_none());
    }

    #[test]
    fn test_directory_is_not_a_file() {
        assert!(BlobViewModel::new(context("")).is_err());
    }
}
