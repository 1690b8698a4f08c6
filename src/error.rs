//! Unified error types for codepad
//!
//! Library code returns [`Result`]; the binary glue uses `anyhow`.

/// Unified error type for codepad operations
#[derive(Debug, thiserror::Error)]
pub enum CodepadError {
    /// I/O errors (reading or writing a file)
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by the git executable
    #[error("{0}")]
    Git(String),

    /// No git executable could be located
    #[error("git executable not found")]
    GitNotFound,

    /// A version-control action ran before a repository was opened
    #[error("Git is not initialized.")]
    NotInitialized,

    /// Commit message was empty or whitespace only
    #[error("commit message is empty")]
    EmptyCommitMessage,

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience Result type using CodepadError
pub type Result<T> = std::result::Result<T, CodepadError>;

impl CodepadError {
    /// Create a Git error
    pub fn git(msg: impl Into<String>) -> Self {
        Self::Git(msg.into())
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
