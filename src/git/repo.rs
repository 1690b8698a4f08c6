//! Repository handle and the version-control actions
//!
//! Each action is attempted once. Nothing is rolled back on failure.

use std::fmt;
use std::path::{Path, PathBuf};

use super::operations::run_git;
use crate::error::{CodepadError, Result};

/// Default remote name written by "Connect to Remote"
pub const DEFAULT_REMOTE: &str = "origin";

/// Credential helper handed to git for push/pull.
///
/// It answers `get` requests from two environment variables that exist only
/// in the child process, so secrets never appear on a command line.
const CREDENTIAL_HELPER: &str = "credential.helper=!f() { test \"$1\" = get && printf 'username=%s\\npassword=%s\\n' \"$CODEPAD_GIT_USERNAME\" \"$CODEPAD_GIT_PASSWORD\"; }; f";

/// Username and password/token supplied for one push or pull
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn envs(&self) -> [(&str, &str); 2] {
        [
            ("CODEPAD_GIT_USERNAME", self.username.as_str()),
            ("CODEPAD_GIT_PASSWORD", self.password.as_str()),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An opened or freshly initialized repository at the project root
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
    remote_name: String,
}

impl GitRepo {
    /// Whether `root` has repository metadata (`root/.git`)
    pub fn exists_at(root: &Path) -> bool {
        root.join(".git").exists()
    }

    /// Open the repository at `root`, or None when there is none
    pub fn open(root: &Path, remote_name: &str) -> Option<Self> {
        if !Self::exists_at(root) {
            return None;
        }
        Some(Self {
            root: root.to_path_buf(),
            remote_name: remote_name.to_string(),
        })
    }

    /// Initialize a new repository at `root` (git init)
    pub fn init(root: &Path, remote_name: &str) -> Result<Self> {
        run_git(root, &["init"], &[])?;
        Ok(Self {
            root: root.to_path_buf(),
            remote_name: remote_name.to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn remote_name(&self) -> &str {
        &self.remote_name
    }

    /// Name of the checked-out branch (works before the first commit too)
    pub fn current_branch(&self) -> Result<String> {
        let out = run_git(&self.root, &["symbolic-ref", "--short", "HEAD"], &[])?;
        let branch = out.trim();
        if branch.is_empty() {
            return Err(CodepadError::git("HEAD is detached"));
        }
        Ok(branch.to_string())
    }

    /// Stage everything under the root, then commit with `message`.
    ///
    /// Blank messages are rejected before git is invoked.
    pub fn commit(&self, message: &str) -> Result<()> {
        if message.trim().is_empty() {
            return Err(CodepadError::EmptyCommitMessage);
        }
        run_git(&self.root, &["add", "--all", "."], &[])?;
        run_git(&self.root, &["commit", "-m", message], &[])?;
        Ok(())
    }

    /// Push the current branch to the same branch on the remote
    pub fn push(&self, credentials: &Credentials) -> Result<()> {
        let branch = self.current_branch()?;
        self.run_authenticated(&["push", &self.remote_name, &branch], credentials)
    }

    /// Fetch and merge the current branch from the remote
    pub fn pull(&self, credentials: &Credentials) -> Result<()> {
        let branch = self.current_branch()?;
        self.run_authenticated(
            &["pull", "--no-rebase", "--no-edit", &self.remote_name, &branch],
            credentials,
        )
    }

    fn run_authenticated(&self, args: &[&str], credentials: &Credentials) -> Result<()> {
        let mut full = vec!["-c", "credential.helper=", "-c", CREDENTIAL_HELPER];
        full.extend_from_slice(args);
        run_git(&self.root, &full, &credentials.envs())?;
        Ok(())
    }

    /// Point the remote at `url`, creating the remote if needed
    pub fn set_remote(&self, url: &str) -> Result<()> {
        let url = url.trim();
        let url_key = format!("remote.{}.url", self.remote_name);
        let fetch_key = format!("remote.{}.fetch", self.remote_name);

        run_git(&self.root, &["config", &url_key, url], &[])?;

        // `git config --get` exits non-zero when the key is unset
        if run_git(&self.root, &["config", "--get", &fetch_key], &[]).is_err() {
            let refspec = format!("+refs/heads/*:refs/remotes/{}/*", self.remote_name);
            run_git(&self.root, &["config", &fetch_key, &refspec], &[])?;
        }
        Ok(())
    }

    /// Currently configured URL of the remote, if any
    pub fn remote_url(&self) -> Option<String> {
        let key = format!("remote.{}.url", self.remote_name);
        run_git(&self.root, &["config", "--get", &key], &[])
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::find_git_executable;
    use std::fs;
    use tempfile::TempDir;

    fn git_available() -> bool {
        find_git_executable().is_some()
    }

    fn configure_user(root: &Path) {
        run_git(root, &["config", "user.name", "Test User"], &[]).unwrap();
        run_git(root, &["config", "user.email", "test@example.com"], &[]).unwrap();
    }

    fn head_exists(root: &Path) -> bool {
        run_git(root, &["rev-parse", "--verify", "HEAD"], &[]).is_ok()
    }

    #[test]
    fn test_open_without_metadata() {
        let temp = TempDir::new().unwrap();
        assert!(!GitRepo::exists_at(temp.path()));
        assert!(GitRepo::open(temp.path(), DEFAULT_REMOTE).is_none());
    }

    #[test]
    fn test_init_then_open() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let repo = GitRepo::init(temp.path(), DEFAULT_REMOTE).unwrap();
        assert_eq!(repo.root(), temp.path());
        assert!(GitRepo::exists_at(temp.path()));
        assert!(GitRepo::open(temp.path(), DEFAULT_REMOTE).is_some());
    }

    #[test]
    fn test_blank_commit_message_rejected() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let repo = GitRepo::init(temp.path(), DEFAULT_REMOTE).unwrap();
        configure_user(temp.path());
        fs::write(temp.path().join("a.txt"), "a").unwrap();

        for msg in ["", "   ", "\n\t"] {
            assert!(matches!(
                repo.commit(msg),
                Err(CodepadError::EmptyCommitMessage)
            ));
        }
        assert!(!head_exists(temp.path()));

        // Nothing was staged either
        let staged = run_git(temp.path(), &["diff", "--cached", "--name-only"], &[]).unwrap();
        assert!(staged.trim().is_empty());
    }

    #[test]
    fn test_commit_stages_everything() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let repo = GitRepo::init(temp.path(), DEFAULT_REMOTE).unwrap();
        configure_user(temp.path());
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/b.java"), "class B {}").unwrap();

        repo.commit("first commit").unwrap();
        assert!(head_exists(temp.path()));

        let files = run_git(temp.path(), &["ls-files"], &[]).unwrap();
        assert!(files.contains("a.txt"));
        assert!(files.contains("sub/b.java"));

        let log = run_git(temp.path(), &["log", "--format=%s"], &[]).unwrap();
        assert_eq!(log.trim(), "first commit");
    }

    #[test]
    fn test_commit_with_nothing_to_commit_fails() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let repo = GitRepo::init(temp.path(), DEFAULT_REMOTE).unwrap();
        configure_user(temp.path());

        assert!(matches!(repo.commit("empty"), Err(CodepadError::Git(_))));
    }

    #[test]
    fn test_set_remote_writes_config() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let repo = GitRepo::init(temp.path(), DEFAULT_REMOTE).unwrap();
        assert_eq!(repo.remote_url(), None);

        repo.set_remote("https://example.com/a.git").unwrap();
        assert_eq!(
            repo.remote_url().as_deref(),
            Some("https://example.com/a.git")
        );

        repo.set_remote("  https://example.com/b.git ").unwrap();
        assert_eq!(
            repo.remote_url().as_deref(),
            Some("https://example.com/b.git")
        );

        let fetch = run_git(temp.path(), &["config", "--get-all", "remote.origin.fetch"], &[])
            .unwrap();
        assert_eq!(fetch.trim(), "+refs/heads/*:refs/remotes/origin/*");
    }

    #[test]
    fn test_push_and_pull_through_local_remote() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let remote = temp.path().join("remote.git");
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        fs::create_dir_all(&remote).unwrap();
        fs::create_dir_all(&first).unwrap();
        fs::create_dir_all(&second).unwrap();
        run_git(&remote, &["init", "--bare"], &[]).unwrap();

        let creds = Credentials::new("user", "token");
        let remote_url = remote.to_string_lossy().into_owned();

        let a = GitRepo::init(&first, DEFAULT_REMOTE).unwrap();
        configure_user(&first);
        a.set_remote(&remote_url).unwrap();
        fs::write(first.join("a.txt"), "one").unwrap();
        a.commit("one").unwrap();
        a.push(&creds).unwrap();

        let b = GitRepo::init(&second, DEFAULT_REMOTE).unwrap();
        configure_user(&second);
        // Same branch name on both sides
        let branch = a.current_branch().unwrap();
        let head_ref = format!("refs/heads/{}", branch);
        run_git(&second, &["symbolic-ref", "HEAD", &head_ref], &[]).unwrap();
        b.set_remote(&remote_url).unwrap();
        b.pull(&creds).unwrap();
        assert_eq!(fs::read_to_string(second.join("a.txt")).unwrap(), "one");

        fs::write(second.join("b.txt"), "two").unwrap();
        b.commit("two").unwrap();
        b.push(&creds).unwrap();

        a.pull(&creds).unwrap();
        assert_eq!(fs::read_to_string(first.join("b.txt")).unwrap(), "two");
    }

    #[test]
    fn test_push_without_remote_fails() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let repo = GitRepo::init(temp.path(), DEFAULT_REMOTE).unwrap();
        configure_user(temp.path());
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        repo.commit("one").unwrap();

        let err = repo.push(&Credentials::new("u", "p")).unwrap_err();
        assert!(matches!(err, CodepadError::Git(_)));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("alice", "s3cret");
        let shown = format!("{:?}", creds);
        assert!(shown.contains("alice"));
        assert!(!shown.contains("s3cret"));
    }
}
