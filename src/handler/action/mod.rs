//! Action execution handler
//!
//! This module handles the execution of KeyActions, translating them into
//! actual state changes and side effects.

mod editor_ops;
pub mod file_ops;
pub mod git_ops;
mod input;
mod menu;
mod navigation;
mod tree_ops;

use std::path::PathBuf;

use crate::core::{AppState, FocusTarget, ViewMode};
use crate::handler::key::KeyAction;
use crate::tree::TreeNavigator;

pub use git_ops::open_or_prompt_repository;

/// Result of action execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Continue the event loop
    Continue,
    /// Quit with the given exit code
    Quit(i32),
}

/// Snapshot of entry data for use in action handling
#[derive(Debug, Clone)]
pub struct EntrySnapshot {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub depth: usize,
}

impl EntrySnapshot {
    /// Snapshot the navigator's visible entries
    pub fn collect(navigator: &TreeNavigator) -> Vec<Self> {
        navigator
            .visible_entries()
            .iter()
            .map(|e| Self {
                path: e.path.clone(),
                name: e.name.clone(),
                is_dir: e.is_dir,
                depth: e.depth,
            })
            .collect()
    }
}

/// Layout facts the handlers need from the last drawn frame
#[derive(Debug, Clone, Copy)]
pub struct ActionContext {
    /// Editor text rows, used for page movement
    pub editor_height: usize,
}

impl Default for ActionContext {
    fn default() -> Self {
        Self { editor_height: 20 }
    }
}

/// Handle a KeyAction and update state accordingly
pub fn handle_action(
    action: KeyAction,
    state: &mut AppState,
    navigator: &mut TreeNavigator,
    entries: &[EntrySnapshot],
    context: &ActionContext,
) -> ActionResult {
    let focused = entries.get(state.focus_index);

    match action {
        KeyAction::None => {}
        KeyAction::Quit => return ActionResult::Quit(0),

        KeyAction::OpenMenu(_)
        | KeyAction::MenuUp
        | KeyAction::MenuDown
        | KeyAction::MenuLeft
        | KeyAction::MenuRight => menu::handle(action, state),
        KeyAction::MenuActivate => {
            if let Some(item) = menu::take_selected(state) {
                return menu::run_item(item, state);
            }
        }
        KeyAction::RunMenuItem(item) => {
            state.mode = ViewMode::Browse;
            return menu::run_item(item, state);
        }

        KeyAction::MoveUp
        | KeyAction::MoveDown
        | KeyAction::MoveToTop
        | KeyAction::MoveToBottom => navigation::handle(action, state, entries),
        KeyAction::Expand | KeyAction::Collapse | KeyAction::Activate => {
            tree_ops::handle(action, state, navigator, focused)
        }
        KeyAction::FocusEditor => state.set_focus(FocusTarget::Editor),
        KeyAction::FocusTree => state.set_focus(FocusTarget::Tree),

        KeyAction::InsertChar(_)
        | KeyAction::InsertNewline
        | KeyAction::InsertTab
        | KeyAction::Backspace
        | KeyAction::Delete
        | KeyAction::CursorLeft
        | KeyAction::CursorRight
        | KeyAction::CursorUp
        | KeyAction::CursorDown
        | KeyAction::CursorHome
        | KeyAction::CursorEnd
        | KeyAction::PageUp
        | KeyAction::PageDown => editor_ops::handle(action, state, context),

        KeyAction::ConfirmInput { value } => input::handle_confirm(value, state),
        KeyAction::Cancel => {
            state.mode = ViewMode::Browse;
        }
        KeyAction::ConfirmYes => {
            if let ViewMode::Confirm { action } = std::mem::take(&mut state.mode) {
                git_ops::confirm(action, state);
            }
        }
        KeyAction::ConfirmNo => {
            if let ViewMode::Confirm { action } = std::mem::take(&mut state.mode) {
                git_ops::decline(action, state);
            }
        }
        KeyAction::DismissNotice => {
            state.mode = ViewMode::Browse;
        }
    }

    ActionResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, AppState, TreeNavigator) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "alpha\n").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/b.java"), "class B {}\n").unwrap();
        let state = AppState::new(temp.path().to_path_buf());
        let navigator = TreeNavigator::new(temp.path()).unwrap();
        (temp, state, navigator)
    }

    fn run(action: KeyAction, state: &mut AppState, navigator: &mut TreeNavigator) -> ActionResult {
        let entries = EntrySnapshot::collect(navigator);
        handle_action(action, state, navigator, &entries, &ActionContext::default())
    }

    fn focus_on(state: &mut AppState, navigator: &TreeNavigator, name: &str) {
        let entries = EntrySnapshot::collect(navigator);
        state.focus_index = entries.iter().position(|e| e.name == name).unwrap();
    }

    #[test]
    fn test_quit() {
        let (_temp, mut state, mut nav) = setup();
        assert_eq!(run(KeyAction::Quit, &mut state, &mut nav), ActionResult::Quit(0));
    }

    #[test]
    fn test_exit_menu_item_quits() {
        let (_temp, mut state, mut nav) = setup();
        run(KeyAction::OpenMenu(crate::core::MenuKind::File), &mut state, &mut nav);
        run(KeyAction::MenuUp, &mut state, &mut nav);
        assert_eq!(
            run(KeyAction::MenuActivate, &mut state, &mut nav),
            ActionResult::Quit(0)
        );
    }

    #[test]
    fn test_activate_directory_toggles() {
        let (_temp, mut state, mut nav) = setup();
        focus_on(&mut state, &nav, "sub");
        let before = nav.visible_count();
        run(KeyAction::Activate, &mut state, &mut nav);
        assert_eq!(nav.visible_count(), before + 1);
        run(KeyAction::Activate, &mut state, &mut nav);
        assert_eq!(nav.visible_count(), before);
    }

    #[test]
    fn test_activate_file_loads_and_focuses_editor() {
        let (_temp, mut state, mut nav) = setup();
        focus_on(&mut state, &nav, "a.txt");
        run(KeyAction::Activate, &mut state, &mut nav);
        assert_eq!(state.editor.text(), "alpha\n");
        assert_eq!(state.focus_target, FocusTarget::Editor);
        assert_eq!(state.mode, ViewMode::Browse);
    }

    #[cfg(unix)]
    #[test]
    fn test_activate_fifo_is_skipped() {
        let (temp, mut state, _) = setup();
        let made = std::process::Command::new("mkfifo")
            .arg(temp.path().join("pipe"))
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        if !made {
            return;
        }
        let mut nav = TreeNavigator::new(temp.path()).unwrap();

        focus_on(&mut state, &nav, "a.txt");
        run(KeyAction::Activate, &mut state, &mut nav);
        focus_on(&mut state, &nav, "pipe");
        run(KeyAction::Activate, &mut state, &mut nav);
        run(KeyAction::Expand, &mut state, &mut nav);

        assert_eq!(state.mode, ViewMode::Browse);
        assert_eq!(state.editor.text(), "alpha\n");
        assert_eq!(state.editor.path(), Some(temp.path().join("a.txt").as_path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_activate_symlinked_directory_toggles() {
        let (temp, mut state, _) = setup();
        std::os::unix::fs::symlink(temp.path().join("sub"), temp.path().join("link")).unwrap();
        let mut nav = TreeNavigator::new(temp.path()).unwrap();

        focus_on(&mut state, &nav, "link");
        let before = nav.visible_count();
        run(KeyAction::Activate, &mut state, &mut nav);

        assert_eq!(state.mode, ViewMode::Browse);
        assert!(state.editor.path().is_none());
        assert_eq!(nav.visible_count(), before + 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_activate_dangling_symlink_is_skipped() {
        let (temp, mut state, _) = setup();
        std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("dangling"))
            .unwrap();
        let mut nav = TreeNavigator::new(temp.path()).unwrap();

        focus_on(&mut state, &nav, "dangling");
        run(KeyAction::Activate, &mut state, &mut nav);

        assert_eq!(state.mode, ViewMode::Browse);
        assert!(state.editor.path().is_none());
    }

    #[test]
    fn test_moving_focus_does_not_open() {
        let (_temp, mut state, mut nav) = setup();
        run(KeyAction::MoveDown, &mut state, &mut nav);
        run(KeyAction::MoveDown, &mut state, &mut nav);
        assert!(state.editor.path().is_none());
        assert_eq!(state.editor.text(), "");
    }

    #[test]
    fn test_dismiss_notice() {
        let (_temp, mut state, mut nav) = setup();
        state.notify("Changes committed.");
        run(KeyAction::DismissNotice, &mut state, &mut nav);
        assert_eq!(state.mode, ViewMode::Browse);
    }
}
