//! Resolution core: from `(repository, ref, path)` to what gets displayed.

mod blob;
mod context;
mod history;
mod listing;
mod path;
mod refs;
mod repo_list;

pub use blob::{raw_blob, view_blob, BlobView, RawContent, TOO_LARGE};
pub use context::RequestContext;
pub use history::{
    load_history, paginate_history, parse_page, PageLink, PageWindow, FIRST_PAGE_SIZE, PAGE_SIZE,
};
pub use listing::{list_directory, list_location};
pub use path::{resolve_path, ResolvedLocation, Target};
pub use refs::{resolve_ref, ResolvedRef};
pub use repo_list::{list_repositories, sort_summaries, summarize_repository, RepoOrder, RepoSummary};

use crate::error::{BrowseError, StoreError};

/// Backend absence becomes the caller's specific not-found error
fn store_error(err: StoreError, not_found: impl FnOnce() -> BrowseError) -> BrowseError {
    match err {
        StoreError::NotFound(what) => {
            tracing::debug!(%what, "backend lookup failed");
            not_found()
        }
        StoreError::Git(e) => BrowseError::Git(e),
    }
}
