//! Running the git executable
//!
//! Every version-control action is one or more blocking `git` invocations
//! in the project root.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use crate::error::{CodepadError, Result};

/// Cached git executable path
static GIT_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Find git executable path using standard locations, then `PATH`
pub fn find_git_executable() -> Option<&'static PathBuf> {
    GIT_PATH
        .get_or_init(|| {
            let candidates = [
                "/usr/bin/git",
                "/usr/local/bin/git",
                "/opt/homebrew/bin/git",
            ];

            for path in candidates {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }

            let exe = if cfg!(windows) { "git.exe" } else { "git" };
            std::env::var_os("PATH").and_then(|paths| {
                std::env::split_paths(&paths)
                    .map(|dir| dir.join(exe))
                    .find(|p| p.is_file())
            })
        })
        .as_ref()
}

/// Run `git <args>` in `repo_root` and return its stdout.
///
/// Git never prompts on the terminal: a missing credential fails the call
/// instead of blocking on a TTY the UI owns. `envs` is added to the child
/// environment only.
pub fn run_git(repo_root: &Path, args: &[&str], envs: &[(&str, &str)]) -> Result<String> {
    let git = find_git_executable().ok_or(CodepadError::GitNotFound)?;

    let output = Command::new(git)
        .args(args)
        .current_dir(repo_root)
        .env("GIT_TERMINAL_PROMPT", "0")
        .envs(envs.iter().copied())
        .stdin(Stdio::null())
        .output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let detail = if !stderr.trim().is_empty() {
            stderr.trim().to_string()
        } else if !stdout.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            format!("git exited with {}", output.status)
        };
        Err(CodepadError::git(detail))
    }
}
