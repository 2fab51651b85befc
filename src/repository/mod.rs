mod git_store;
mod memory_store;
mod registry;
mod store;

pub use git_store::GitStore;
pub use memory_store::MemoryStore;
pub use registry::{RepoRegistry, Repository};
pub use store::{ObjectStore, StoreObject};
