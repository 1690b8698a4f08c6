//! Tree operation action handlers
//!
//! Handles Expand, Collapse and Activate

use crate::core::AppState;
use crate::editor::is_regular_file;
use crate::handler::key::KeyAction;
use crate::tree::TreeNavigator;

use super::{file_ops, EntrySnapshot};

/// Open `entry` if it is a regular file; anything else is skipped
fn open_entry(state: &mut AppState, entry: &EntrySnapshot) {
    if is_regular_file(&entry.path) {
        file_ops::open_path(state, &entry.path);
    } else {
        tracing::debug!(path = %entry.path.display(), "not a regular file, skipped");
    }
}

/// Handle tree operations on the focused entry
pub fn handle(
    action: KeyAction,
    state: &mut AppState,
    navigator: &mut TreeNavigator,
    focused: Option<&EntrySnapshot>,
) {
    let Some(entry) = focused else {
        return;
    };

    match action {
        KeyAction::Expand => {
            if entry.is_dir {
                navigator.expand(&entry.path);
            } else {
                open_entry(state, entry);
            }
        }
        KeyAction::Collapse => {
            if entry.is_dir {
                navigator.collapse(&entry.path);
            }
        }
        KeyAction::Activate => {
            if entry.is_dir {
                navigator.toggle_expand(&entry.path);
            } else {
                open_entry(state, entry);
            }
        }
        _ => {}
    }
}
