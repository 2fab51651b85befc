// Library crate exposing modules for the binary and integration tests

pub mod browse;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod util;
pub mod view;
pub mod viewmodel;

pub use browse::{list_directory, paginate_history, resolve_path, resolve_ref, RequestContext};
pub use error::{BrowseError, ErrorKind, Result};
pub use util::{classify as classify_content, decode_text, subpaths as split_subpaths, time_since, time_since_now};
