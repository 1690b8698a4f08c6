//! Menu action handlers
//!
//! Opening, moving through and running the File and Git menus

use crate::core::{AppState, MenuItem, RemoteOp, ViewMode};
use crate::handler::key::KeyAction;

use super::{file_ops, git_ops, ActionResult};

/// Handle menu opening and navigation
pub fn handle(action: KeyAction, state: &mut AppState) {
    if let KeyAction::OpenMenu(menu) = action {
        state.mode = ViewMode::Menu { menu, selected: 0 };
        return;
    }

    let ViewMode::Menu { menu, selected } = state.mode else {
        return;
    };

    state.mode = match action {
        KeyAction::MenuUp => ViewMode::Menu {
            menu,
            selected: menu.prev_index(selected),
        },
        KeyAction::MenuDown => ViewMode::Menu {
            menu,
            selected: menu.next_index(selected),
        },
        KeyAction::MenuLeft => ViewMode::Menu {
            menu: menu.prev(),
            selected: 0,
        },
        KeyAction::MenuRight => ViewMode::Menu {
            menu: menu.next(),
            selected: 0,
        },
        _ => return,
    };
}

/// Close the open menu and return its highlighted item
pub fn take_selected(state: &mut AppState) -> Option<MenuItem> {
    let ViewMode::Menu { menu, selected } = state.mode else {
        return None;
    };
    state.mode = ViewMode::Browse;
    menu.item_at(selected)
}

/// Run a menu command. The menu must already be closed.
pub fn run_item(item: MenuItem, state: &mut AppState) -> ActionResult {
    tracing::debug!(item = item.label(), "menu command");

    match item {
        MenuItem::OpenFile => file_ops::start_open(state),
        MenuItem::SaveFile => file_ops::save(state),
        MenuItem::Exit => return ActionResult::Quit(0),
        MenuItem::Commit => git_ops::start_commit(state),
        MenuItem::Push => git_ops::start_remote_op(state, RemoteOp::Push),
        MenuItem::Pull => git_ops::start_remote_op(state, RemoteOp::Pull),
        MenuItem::ConnectRemote => git_ops::start_connect(state),
    }
    ActionResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MenuKind;
    use std::path::PathBuf;

    #[test]
    fn test_open_and_move() {
        let mut state = AppState::new(PathBuf::from("/tmp"));
        handle(KeyAction::OpenMenu(MenuKind::Git), &mut state);
        handle(KeyAction::MenuDown, &mut state);
        handle(KeyAction::MenuDown, &mut state);
        handle(KeyAction::MenuDown, &mut state);
        assert_eq!(
            state.mode,
            ViewMode::Menu {
                menu: MenuKind::Git,
                selected: 4
            }
        );

        handle(KeyAction::MenuRight, &mut state);
        assert_eq!(
            state.mode,
            ViewMode::Menu {
                menu: MenuKind::File,
                selected: 0
            }
        );
    }

    #[test]
    fn test_take_selected_closes_menu() {
        let mut state = AppState::new(PathBuf::from("/tmp"));
        handle(KeyAction::OpenMenu(MenuKind::File), &mut state);
        handle(KeyAction::MenuDown, &mut state);
        assert_eq!(take_selected(&mut state), Some(MenuItem::SaveFile));
        assert_eq!(state.mode, ViewMode::Browse);
        assert_eq!(take_selected(&mut state), None);
    }

    #[test]
    fn test_git_items_need_repository() {
        let mut state = AppState::new(PathBuf::from("/tmp"));
        for item in [
            MenuItem::Commit,
            MenuItem::Push,
            MenuItem::Pull,
            MenuItem::ConnectRemote,
        ] {
            state.mode = ViewMode::Browse;
            assert_eq!(run_item(item, &mut state), ActionResult::Continue);
            assert_eq!(
                state.mode,
                ViewMode::Notice {
                    message: "Git is not initialized.".to_string()
                }
            );
        }
    }
}
