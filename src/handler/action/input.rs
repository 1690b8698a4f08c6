//! Input confirmation handler
//!
//! Routes a confirmed prompt to the action that asked for it

use crate::core::{AppState, InputPurpose, ViewMode};
use crate::git::Credentials;

use super::{file_ops, git_ops};

/// Handle input confirmation
pub fn handle_confirm(value: String, state: &mut AppState) {
    let ViewMode::Input { purpose, .. } = &state.mode else {
        return;
    };
    let purpose = purpose.clone();
    state.mode = ViewMode::Browse;

    match purpose {
        InputPurpose::OpenFile => file_ops::open_input(state, &value),
        InputPurpose::SaveAs => file_ops::save_as(state, &value),
        InputPurpose::CommitMessage => git_ops::commit(state, &value),
        InputPurpose::RemoteUrl => git_ops::connect(state, &value),
        InputPurpose::Username { op } => git_ops::username_entered(state, op, value),
        InputPurpose::Password { op, username } => {
            git_ops::run_remote_op(state, op, Credentials::new(username, value))
        }
        // Answered by the startup prompt before the tree exists
        InputPurpose::ProjectDir => {}
    }
}
