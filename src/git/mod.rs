//! Git integration module

mod operations;
mod repo;

pub use operations::{find_git_executable, run_git};
pub use repo::{Credentials, GitRepo, DEFAULT_REMOTE};
