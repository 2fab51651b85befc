mod app_viewmodel;
mod blob_viewmodel;
mod commit_viewmodel;
mod history_viewmodel;
mod repo_list_viewmodel;
mod selection;
mod tree_viewmodel;

pub use app_viewmodel::{Action, AppViewModel, Screen};
pub use blob_viewmodel::BlobViewModel;
pub use commit_viewmodel::CommitViewModel;
pub use history_viewmodel::HistoryViewModel;
pub use repo_list_viewmodel::RepoListViewModel;
pub use selection::Selectable;
pub use tree_viewmodel::TreeViewModel;
