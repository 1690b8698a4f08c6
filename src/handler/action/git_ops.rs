//! Git operation action handlers
//!
//! Handles repository open-or-init, commit, push, pull and connect-to-remote.
//! Each git call runs on the event-loop thread and blocks until it returns.

use crate::core::{AppState, InputPurpose, PendingAction, RemoteOp, ViewMode};
use crate::error::CodepadError;
use crate::git::{Credentials, GitRepo};

fn prompt(state: &mut AppState, purpose: InputPurpose, initial: String) {
    let cursor = initial.chars().count();
    state.mode = ViewMode::Input {
        purpose,
        buffer: initial,
        cursor,
    };
}

/// Open the repository at the project root, or ask to create one
pub fn open_or_prompt_repository(state: &mut AppState) {
    state.repo_checked = true;

    match GitRepo::open(&state.root, &state.remote_name) {
        Some(repo) => {
            tracing::info!(root = %repo.root().display(), "opened repository");
            state.repo = Some(repo);
            state.refresh_branch();
        }
        None => {
            state.mode = ViewMode::Confirm {
                action: PendingAction::InitRepository,
            };
        }
    }
}

/// The user answered yes
pub fn confirm(action: PendingAction, state: &mut AppState) {
    match action {
        PendingAction::InitRepository => match GitRepo::init(&state.root, &state.remote_name) {
            Ok(repo) => {
                tracing::info!(root = %repo.root().display(), "initialized repository");
                state.repo = Some(repo);
                state.refresh_branch();
                state.notify("Initialized empty Git repository.");
            }
            Err(e) => {
                tracing::error!(error = %e, "git init failed");
                state.notify(format!("Error initializing repository: {}", e));
            }
        },
    }
}

/// The user answered no
pub fn decline(action: PendingAction, state: &mut AppState) {
    match action {
        PendingAction::InitRepository => {
            tracing::info!("repository initialization declined");
            state.set_message(CodepadError::NotInitialized.to_string());
        }
    }
}

/// Borrow the repository, or report that there is none
fn require_repo(state: &mut AppState) -> Option<GitRepo> {
    if state.repo.is_none() {
        tracing::warn!("git action without a repository");
        state.notify(CodepadError::NotInitialized.to_string());
    }
    state.repo.clone()
}

/// Git → Commit
pub fn start_commit(state: &mut AppState) {
    if require_repo(state).is_some() {
        prompt(state, InputPurpose::CommitMessage, String::new());
    }
}

/// Confirmation of the commit message prompt
pub fn commit(state: &mut AppState, message: &str) {
    let Some(repo) = require_repo(state) else {
        return;
    };
    if message.trim().is_empty() {
        tracing::warn!("commit skipped: empty message");
        return;
    }

    match repo.commit(message) {
        Ok(()) => {
            tracing::info!("committed changes");
            state.refresh_branch();
            state.notify("Changes committed.");
        }
        Err(e) => {
            tracing::error!(error = %e, "git commit failed");
            state.notify(format!("Git commit error: {}", e));
        }
    }
}

/// Git → Push / Git → Pull: ask for the username first
pub fn start_remote_op(state: &mut AppState, op: RemoteOp) {
    if require_repo(state).is_some() {
        prompt(state, InputPurpose::Username { op }, String::new());
    }
}

/// Username entered; ask for the password or token
pub fn username_entered(state: &mut AppState, op: RemoteOp, username: String) {
    prompt(state, InputPurpose::Password { op, username }, String::new());
}

/// Both credentials entered; run the push or pull
pub fn run_remote_op(state: &mut AppState, op: RemoteOp, credentials: Credentials) {
    let Some(repo) = require_repo(state) else {
        return;
    };

    let result = match op {
        RemoteOp::Push => repo.push(&credentials),
        RemoteOp::Pull => repo.pull(&credentials),
    };

    match (op, result) {
        (RemoteOp::Push, Ok(())) => {
            tracing::info!(remote = repo.remote_name(), "pushed");
            state.notify("Changes pushed to remote repository.");
        }
        (RemoteOp::Pull, Ok(())) => {
            tracing::info!(remote = repo.remote_name(), "pulled");
            state.refresh_branch();
            state.notify("Pulled latest changes from remote.");
        }
        (RemoteOp::Push, Err(e)) => {
            tracing::error!(remote = repo.remote_name(), error = %e, "git push failed");
            state.notify(format!("Git push error: {}", e));
        }
        (RemoteOp::Pull, Err(e)) => {
            tracing::error!(remote = repo.remote_name(), error = %e, "git pull failed");
            state.notify(format!("Git pull error: {}", e));
        }
    }
}

/// Git → Connect to Remote, pre-filled with the current URL
pub fn start_connect(state: &mut AppState) {
    if let Some(repo) = require_repo(state) {
        let current = repo.remote_url().unwrap_or_default();
        prompt(state, InputPurpose::RemoteUrl, current);
    }
}

/// Confirmation of the remote URL prompt
pub fn connect(state: &mut AppState, url: &str) {
    let Some(repo) = require_repo(state) else {
        return;
    };
    if url.trim().is_empty() {
        tracing::warn!("connect skipped: empty url");
        return;
    }

    match repo.set_remote(url) {
        Ok(()) => {
            tracing::info!(remote = repo.remote_name(), url = url.trim(), "remote set");
            state.notify("Connected to remote repository.");
        }
        Err(e) => {
            tracing::error!(remote = repo.remote_name(), error = %e, "set remote failed");
            state.notify(format!("Error connecting to remote: {}", e));
        }
    }
}
