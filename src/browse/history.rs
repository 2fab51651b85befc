use crate::error::Result;
use crate::model::CommitInfo;

use super::{store_error, RequestContext};

/// Commits shown on the first history page
pub const FIRST_PAGE_SIZE: usize = 10;
/// Commits shown on every later page
pub const PAGE_SIZE: usize = 30;
/// Up to this page every earlier page is linked
const FULL_NAVIGATION_PAGES: u32 = 7;

/// One slot in the page navigation strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Gap,
}

/// Which slice of the history a page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub skip: usize,
    pub show: usize,
    /// Links to earlier pages; none on the first page
    pub previous_pages: Option<Vec<PageLink>>,
}

/// Page 0 shows the ten newest commits; page `n` shows thirty starting
/// after the first page and `n - 1` full pages.
pub fn paginate_history(page: u32) -> PageWindow {
    if page == 0 {
        return PageWindow {
            page,
            skip: 0,
            show: FIRST_PAGE_SIZE,
            previous_pages: None,
        };
    }

    let previous_pages = if page > FULL_NAVIGATION_PAGES {
        let mut links = vec![PageLink::Page(0), PageLink::Page(1), PageLink::Page(2), PageLink::Gap];
        links.extend((page - 3..page).map(PageLink::Page));
        links
    } else {
        (0..page).map(PageLink::Page).collect()
    };

    PageWindow {
        page,
        skip: (page as usize - 1) * PAGE_SIZE + FIRST_PAGE_SIZE,
        show: PAGE_SIZE,
        previous_pages: Some(previous_pages),
    }
}

/// Page number from a request parameter; missing or malformed means 0
pub fn parse_page(param: Option<&str>) -> u32 {
    param.and_then(|p| p.trim().parse().ok()).unwrap_or(0)
}

/// Commits for `window` touching the context's path
pub fn load_history(ctx: &RequestContext, window: &PageWindow) -> Result<Vec<CommitInfo>> {
    let repo = ctx.repo();
    repo.store()
        .history(ctx.commit(), ctx.path(), window.skip, window.show)
        .map_err(|e| store_error(e, || ctx.no_path_error()))
}
